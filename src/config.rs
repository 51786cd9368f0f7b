//! Layout configuration.
//!
//! All fields are optional in the JSON form; anything left out falls back to
//! the defaults below.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

/// Largest `places` magnitude a loaded config may carry.
pub const MAX_PLACES: i32 = 6;

/// Tunable constants for the width engine and the demo renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Pixels reserved per column for cell borders.
    pub column_gutter: f64,
    /// Pixels reserved once per table for the outer frame.
    pub chrome_allowance: f64,
    /// Horizontal margin between the window edge and the table.
    pub page_margin: f64,
    /// Decimal places widths are rounded to when rebalancing.
    pub places: i32,
    /// Narrowest width an interactive resize may produce.
    pub min_drag_width: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            column_gutter: 1.0,
            chrome_allowance: 2.0,
            page_margin: 50.0,
            places: 0,
            min_drag_width: 50.0,
        }
    }
}

impl TableConfig {
    /// Width left for column content once borders and chrome are subtracted.
    ///
    /// Never negative: a window narrower than the allowances yields zero.
    pub fn usable_width(&self, available_width: f64, columns: usize) -> f64 {
        let reserved = self.column_gutter * columns as f64 + self.chrome_allowance;
        (available_width - reserved).max(0.0)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse table config")?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every allowance is a finite, non-negative pixel count and
    /// that `places` stays within `±MAX_PLACES`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("column_gutter", self.column_gutter),
            ("chrome_allowance", self.chrome_allowance),
            ("page_margin", self.page_margin),
            ("min_drag_width", self.min_drag_width),
        ] {
            ensure!(
                value.is_finite() && value >= 0.0,
                "{} must be a non-negative number, got {}",
                name,
                value
            );
        }
        ensure!(
            (-MAX_PLACES..=MAX_PLACES).contains(&self.places),
            "places must be between {} and {}, got {}",
            -MAX_PLACES,
            MAX_PLACES,
            self.places
        );
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&json)
    }
}
