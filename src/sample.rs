//! Synthetic row generation for demos.
//!
//! Rows are generated from a small JSON-schema subset: an object schema with
//! typed `properties` and a `required` list. Generation is seeded, so the
//! same schema, count and seed always produce the same rows.

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::column::Row;

/// Chance that an optional property is left out of a row.
const OPTIONAL_SKIP_PROBABILITY: f64 = 0.25;

const FIRST_NAMES: &[&str] = &[
    "John", "Mike", "Jake", "Don", "Ada", "Grace", "Linus", "Margaret", "Ken", "Barbara",
];
const LAST_NAMES: &[&str] = &[
    "Johnson", "Mikeson", "Jackson", "Donson", "Lovelace", "Hopper", "Thompson", "Liskov",
];
const STREETS: &[&str] = &["Main St", "Oak Ave", "Elm Rd", "Harbor Way", "Mill Ln", "Park Pl"];
const WORDS: &[&str] = &[
    "consequatur", "nihil", "minima", "corporis", "omnis", "rem", "sequi", "doloremque", "sed",
    "quo", "voluptatem", "ut", "voluptatibus",
];

/// Schema used by the demo table.
pub static DEMO_SCHEMA: Lazy<RecordSchema> = Lazy::new(|| {
    RecordSchema::from_value(&json!({
        "type": "object",
        "properties": {
            "id": { "type": "string" },
            "name": { "type": "string" },
            "address": { "type": "string" },
            "company": { "type": "string" },
            "age": { "type": "integer" }
        },
        "required": ["id", "name", "age", "company"]
    }))
    .unwrap_or_default()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
}

/// A flat record schema, fields in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSchema {
    pub fields: Vec<Field>,
}

#[derive(Deserialize)]
struct PropertySchema {
    #[serde(rename = "type")]
    kind: FieldKind,
}

impl RecordSchema {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).context("Schema is not valid JSON")?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        if value.get("type").and_then(Value::as_str) != Some("object") {
            bail!("Schema must describe an object");
        }

        let properties = match value.get("properties") {
            Some(Value::Object(properties)) => properties,
            Some(_) => bail!("Schema 'properties' must be an object"),
            None => bail!("Schema has no 'properties'"),
        };

        let required: Vec<String> = match value.get("required") {
            Some(list) => serde_json::from_value(list.clone())
                .context("Schema 'required' must be a list of names")?,
            None => Vec::new(),
        };

        let fields = properties
            .iter()
            .map(|(name, property)| {
                let property: PropertySchema = serde_json::from_value(property.clone())
                    .with_context(|| format!("Unsupported property '{}'", name))?;
                Ok(Field {
                    name: name.clone(),
                    kind: property.kind,
                    required: required.contains(name),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { fields })
    }
}

/// Generates `count` rows for `schema`.
pub fn generate_rows(count: usize, schema: &RecordSchema, seed: u64) -> Vec<Row> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|index| {
            let mut row = Row::new();
            for field in &schema.fields {
                if !field.required && rng.gen_bool(OPTIONAL_SKIP_PROBABILITY) {
                    continue;
                }
                row.insert(field.name.clone(), fake_value(&mut rng, field, index));
            }
            row
        })
        .collect()
}

fn fake_value(rng: &mut StdRng, field: &Field, index: usize) -> Value {
    match field.kind {
        FieldKind::String => Value::String(fake_string(rng, &field.name, index)),
        FieldKind::Integer if field.name == "age" => json!(rng.gen_range(18..=90)),
        FieldKind::Integer => json!(rng.gen_range(0..1000)),
        FieldKind::Number => json!((rng.gen_range(0.0..1000.0_f64) * 100.0).round() / 100.0),
        FieldKind::Boolean => json!(rng.gen_bool(0.5)),
    }
}

fn fake_string(rng: &mut StdRng, name: &str, index: usize) -> String {
    match name {
        // Row index prefix keeps ids unique
        "id" => format!("{:04x}{:012x}", index, rng.gen::<u64>() & 0xffff_ffff_ffff),
        "name" => format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES)),
        "company" => format!("{} Inc.", pick(rng, LAST_NAMES)),
        "address" => format!("{} {}", rng.gen_range(1..2000), pick(rng, STREETS)),
        _ => {
            let len = rng.gen_range(2..6);
            (0..len).map(|_| pick(rng, WORDS)).collect::<Vec<_>>().join(" ")
        }
    }
}

fn pick(rng: &mut StdRng, words: &[&'static str]) -> &'static str {
    words[rng.gen_range(0..words.len())]
}
