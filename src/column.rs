//! Column definitions.
//!
//! A table is described by a tree of [`Column`]s. Leaves carry data and a
//! width; groups only carry a label and span the leaves beneath them in the
//! header. Column trees are treated as immutable values: operations that
//! change a column (binding a style, committing a width) build a new tree
//! through [`map_leaves`] instead of mutating in place.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::width_registry::StyleClass;

/// A row of table data, keyed by field name in insertion order.
pub type Row = serde_json::Map<String, Value>;

/// Stable identity of a leaf column, usually the data field it displays.
///
/// Dotted identities (`name.first`) address nested objects inside a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments used to look the value up inside a row.
    pub fn path(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ColumnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a cell value is turned into display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellFormat {
    /// Strings as-is, other values in compact JSON form.
    #[default]
    Text,
    /// Numbers rounded to the nearest integer.
    Integer,
    /// Text, upper-cased.
    Uppercase,
}

impl CellFormat {
    /// Formats a single cell value. Missing and null values render empty.
    pub fn format(&self, value: Option<&Value>) -> String {
        let value = match value {
            None | Some(Value::Null) => return String::new(),
            Some(v) => v,
        };

        match self {
            CellFormat::Text => plain_text(value),
            CellFormat::Integer => match value.as_f64() {
                Some(n) => format!("{}", n.round() as i64),
                None => plain_text(value),
            },
            CellFormat::Uppercase => plain_text(value).to_uppercase(),
        }
    }
}

fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A column bound to row data and to exactly one width entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafColumn {
    pub id: ColumnId,
    pub label: String,
    /// Declared (or last committed) width in pixels.
    pub width: f64,
    /// Style class linking the column to its width rule. Set by
    /// [`WidthRegistry::initialize`](crate::WidthRegistry::initialize).
    pub style: Option<StyleClass>,
    pub format: CellFormat,
    pub resizable: bool,
    pub draggable: bool,
}

impl LeafColumn {
    /// Creates a resizable, non-draggable text column.
    pub fn new(id: impl Into<ColumnId>, label: impl Into<String>, width: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width,
            style: None,
            format: CellFormat::Text,
            resizable: true,
            draggable: false,
        }
    }

    pub fn draggable(mut self) -> Self {
        self.draggable = true;
        self
    }

    /// Disables the resize handle for this column.
    pub fn fixed(mut self) -> Self {
        self.resizable = false;
        self
    }

    pub fn format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    /// Looks up this column's value in `row`, following dotted identities.
    pub fn value<'a>(&self, row: &'a Row) -> Option<&'a Value> {
        let mut segments = self.id.path();
        let first = segments.next()?;
        let mut current = row.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Display text for this column's cell in `row`.
    pub fn cell_text(&self, row: &Row) -> String {
        self.format.format(self.value(row))
    }
}

/// A header spanning its child columns. Groups have no width of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupColumn {
    pub label: String,
    pub children: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Leaf(LeafColumn),
    Group(GroupColumn),
}

impl Column {
    pub fn leaf(id: impl Into<ColumnId>, label: impl Into<String>, width: f64) -> Self {
        Column::Leaf(LeafColumn::new(id, label, width))
    }

    pub fn group(label: impl Into<String>, children: Vec<Column>) -> Self {
        Column::Group(GroupColumn {
            label: label.into(),
            children,
        })
    }

    pub fn label(&self) -> &str {
        match self {
            Column::Leaf(leaf) => &leaf.label,
            Column::Group(group) => &group.label,
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafColumn> {
        match self {
            Column::Leaf(leaf) => Some(leaf),
            Column::Group(_) => None,
        }
    }

    /// Identity of a leaf column; groups have none.
    pub fn id(&self) -> Option<&ColumnId> {
        self.as_leaf().map(|leaf| &leaf.id)
    }

    /// Number of leaf columns at or below this column.
    pub fn leaf_count(&self) -> usize {
        match self {
            Column::Leaf(_) => 1,
            Column::Group(group) => group.children.iter().map(Column::leaf_count).sum(),
        }
    }

    /// Depth of the header subtree rooted here (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        match self {
            Column::Leaf(_) => 1,
            Column::Group(group) => 1 + group.children.iter().map(Column::depth).max().unwrap_or(0),
        }
    }
}

impl From<LeafColumn> for Column {
    fn from(leaf: LeafColumn) -> Self {
        Column::Leaf(leaf)
    }
}

/// Leaf columns in display order (depth-first, left to right).
pub fn leaves(columns: &[Column]) -> Vec<&LeafColumn> {
    fn collect<'a>(columns: &'a [Column], out: &mut Vec<&'a LeafColumn>) {
        for column in columns {
            match column {
                Column::Leaf(leaf) => out.push(leaf),
                Column::Group(group) => collect(&group.children, out),
            }
        }
    }

    let mut out = Vec::new();
    collect(columns, &mut out);
    out
}

pub fn find_leaf<'a>(columns: &'a [Column], id: &ColumnId) -> Option<&'a LeafColumn> {
    leaves(columns).into_iter().find(|leaf| &leaf.id == id)
}

/// Builds a new column tree with every leaf replaced by `f(leaf)`.
///
/// Groups are rebuilt with the same labels and shape.
pub fn map_leaves<F>(columns: &[Column], f: &mut F) -> Vec<Column>
where
    F: FnMut(&LeafColumn) -> LeafColumn,
{
    columns
        .iter()
        .map(|column| match column {
            Column::Leaf(leaf) => Column::Leaf(f(leaf)),
            Column::Group(group) => Column::Group(GroupColumn {
                label: group.label.clone(),
                children: map_leaves(&group.children, f),
            }),
        })
        .collect()
}

/// Depth of the deepest header branch in `columns`.
pub fn header_depth(columns: &[Column]) -> usize {
    columns.iter().map(Column::depth).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tree() -> Vec<Column> {
        vec![
            Column::group(
                "Name",
                vec![
                    Column::leaf("name.first", "First", 80.0),
                    Column::leaf("name.last", "Last", 90.0),
                ],
            ),
            Column::leaf("company", "Company", 100.0),
        ]
    }

    #[test]
    fn test_leaves_in_display_order() {
        let columns = sample_tree();
        let ids: Vec<&str> = leaves(&columns).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["name.first", "name.last", "company"]);
    }

    #[test]
    fn test_depth_and_leaf_count() {
        let columns = sample_tree();
        assert_eq!(columns[0].leaf_count(), 2);
        assert_eq!(columns[0].depth(), 2);
        assert_eq!(columns[1].depth(), 1);
        assert_eq!(header_depth(&columns), 2);
        assert_eq!(header_depth(&[]), 0);
    }

    #[test]
    fn test_map_leaves_preserves_shape() {
        let columns = sample_tree();
        let doubled = map_leaves(&columns, &mut |leaf| LeafColumn {
            width: leaf.width * 2.0,
            ..leaf.clone()
        });

        assert_eq!(doubled[0].label(), "Name");
        let widths: Vec<f64> = leaves(&doubled).iter().map(|l| l.width).collect();
        assert_eq!(widths, vec![160.0, 180.0, 200.0]);

        // Source tree untouched
        assert_eq!(leaves(&columns)[0].width, 80.0);
    }

    #[test]
    fn test_nested_value_lookup() {
        let row: Row = json!({
            "name": { "first": "John", "last": "Johnson" },
            "company": "John Inc."
        })
        .as_object()
        .cloned()
        .unwrap();

        let columns = sample_tree();
        let all = leaves(&columns);
        assert_eq!(all[0].cell_text(&row), "John");
        assert_eq!(all[1].cell_text(&row), "Johnson");
        assert_eq!(all[2].cell_text(&row), "John Inc.");

        let missing = LeafColumn::new("name.middle", "Middle", 50.0);
        assert_eq!(missing.cell_text(&row), "");
    }

    #[test]
    fn test_cell_formats() {
        assert_eq!(CellFormat::Integer.format(Some(&json!(41.6))), "42");
        assert_eq!(CellFormat::Integer.format(Some(&json!("n/a"))), "n/a");
        assert_eq!(CellFormat::Uppercase.format(Some(&json!("acme"))), "ACME");
        assert_eq!(CellFormat::Text.format(Some(&json!(true))), "true");
        assert_eq!(CellFormat::Text.format(Some(&Value::Null)), "");
        assert_eq!(CellFormat::Text.format(None), "");
    }
}
