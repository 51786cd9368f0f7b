//! Per-table column width storage.
//!
//! Widths live in a [`StyleSheet`]: one [`WidthRule`] per leaf column, keyed
//! by a [`StyleClass`] derived from the table instance id and the column
//! identity. Renderers look the rule up by class on every paint, so a width
//! write becomes visible on the next frame without rebuilding the column tree.
//! That keeps live drag updates cheap; only settled widths are folded back
//! into the column definitions.

use std::collections::{HashMap, HashSet};
use std::fmt;

use log::{trace, warn};
use uuid::Uuid;

use crate::column::{map_leaves, leaves, Column, ColumnId, LeafColumn};
use crate::error::{LayoutError, Result};

/// Identity of one table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(Uuid);

impl TableId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TableId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Class name binding a leaf column to its width rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleClass(String);

impl StyleClass {
    fn new(table: TableId, column: &ColumnId) -> Self {
        Self(format!("column-{}-{}", table, column))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Width constraints applied to every cell of one column.
///
/// All three values are written together so the column is pinned to exactly
/// `width` regardless of its content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthRule {
    pub width: f64,
    pub min_width: f64,
    pub max_width: f64,
}

impl WidthRule {
    fn pinned(width: f64) -> Self {
        Self {
            width,
            min_width: width,
            max_width: width,
        }
    }
}

/// Table-scoped set of width rules.
#[derive(Debug, Default)]
pub struct StyleSheet {
    rules: HashMap<StyleClass, WidthRule>,
}

impl StyleSheet {
    pub fn rule(&self, class: &StyleClass) -> Option<&WidthRule> {
        self.rules.get(class)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn set_width(&mut self, class: StyleClass, width: f64) {
        self.rules.insert(class, WidthRule::pinned(width));
    }
}

/// Key→width store for the leaf columns of a single table.
///
/// Owned by its table; dropping the registry releases its style sheet.
#[derive(Debug)]
pub struct WidthRegistry {
    table_id: TableId,
    /// `None` once [`cleanup`](Self::cleanup) has run.
    sheet: Option<StyleSheet>,
}

impl Default for WidthRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WidthRegistry {
    pub fn new() -> Self {
        Self {
            table_id: TableId::new(),
            sheet: Some(StyleSheet::default()),
        }
    }

    pub fn table_id(&self) -> TableId {
        self.table_id
    }

    /// Style class for `column` within this table.
    pub fn class_name(&self, column: &ColumnId) -> StyleClass {
        StyleClass::new(self.table_id, column)
    }

    /// Creates an entry for every leaf at its declared width.
    ///
    /// Returns a new column tree whose leaves carry their style class. Group
    /// columns are walked but get no entry. Nothing is written unless every
    /// leaf validates.
    pub fn initialize(&mut self, columns: &[Column]) -> Result<Vec<Column>> {
        let mut seen = HashSet::new();
        for leaf in leaves(columns) {
            validate_width(&leaf.id, leaf.width)?;
            if !seen.insert(&leaf.id) {
                return Err(LayoutError::DuplicateColumn {
                    column: leaf.id.clone(),
                });
            }
        }

        let table_id = self.table_id;
        let bound = map_leaves(columns, &mut |leaf: &LeafColumn| LeafColumn {
            style: Some(StyleClass::new(table_id, &leaf.id)),
            ..leaf.clone()
        });

        for leaf in leaves(&bound) {
            self.write(&leaf.id, leaf.width);
        }

        Ok(bound)
    }

    /// Overwrites the width of `column`.
    ///
    /// Only columns created by [`initialize`](Self::initialize) can be
    /// written; any other id fails with `MissingEntry`. After cleanup the
    /// write is dropped.
    pub fn update(&mut self, column: &ColumnId, width: f64) -> Result<()> {
        validate_width(column, width)?;
        if !self.is_released() {
            self.existing_width(column)?;
        }
        self.write(column, width);
        Ok(())
    }

    /// Scales the current width of `column` and returns the new width.
    pub fn update_by_multiplier(&mut self, column: &ColumnId, multiplier: f64) -> Result<f64> {
        let current = self.existing_width(column)?;
        let width = current * multiplier;
        self.update(column, width)?;
        Ok(width)
    }

    /// Adds `delta` to the current width of `column` and returns the new width.
    pub fn update_by_increment(&mut self, column: &ColumnId, delta: f64) -> Result<f64> {
        let current = self.existing_width(column)?;
        let width = current + delta;
        self.update(column, width)?;
        Ok(width)
    }

    /// Current width of `column`, if it has an entry.
    pub fn width(&self, column: &ColumnId) -> Option<f64> {
        let sheet = self.sheet.as_ref()?;
        sheet.rule(&self.class_name(column)).map(|rule| rule.width)
    }

    /// Current widths for `columns`, in the given order.
    pub fn widths<'a, I>(&self, columns: I) -> Result<Vec<f64>>
    where
        I: IntoIterator<Item = &'a ColumnId>,
    {
        columns
            .into_iter()
            .map(|id| self.existing_width(id))
            .collect()
    }

    /// Rule bound to `class`; what renderers read on every paint.
    pub fn rule(&self, class: &StyleClass) -> Option<WidthRule> {
        self.sheet.as_ref()?.rule(class).copied()
    }

    pub fn entry_count(&self) -> usize {
        self.sheet.as_ref().map_or(0, StyleSheet::len)
    }

    pub fn is_released(&self) -> bool {
        self.sheet.is_none()
    }

    /// Releases the style sheet. Safe to call more than once.
    pub fn cleanup(&mut self) {
        if let Some(sheet) = self.sheet.take() {
            trace!("table {}: released {} width rules", self.table_id, sheet.len());
        }
    }

    fn existing_width(&self, column: &ColumnId) -> Result<f64> {
        self.width(column).ok_or_else(|| LayoutError::MissingEntry {
            column: column.clone(),
        })
    }

    fn write(&mut self, column: &ColumnId, width: f64) {
        let class = self.class_name(column);
        match self.sheet.as_mut() {
            Some(sheet) => {
                trace!("table {}: {} -> {}px", self.table_id, column, width);
                sheet.set_width(class, width);
            }
            None => warn!(
                "table {}: ignoring width write for '{}' after cleanup",
                self.table_id, column
            ),
        }
    }
}

impl Drop for WidthRegistry {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn validate_width(column: &ColumnId, width: f64) -> Result<f64> {
    if width.is_finite() && width >= 0.0 {
        Ok(width)
    } else {
        Err(LayoutError::InvalidWidth {
            column: column.clone(),
            width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![
            Column::leaf("name", "Name", 100.0),
            Column::group(
                "Details",
                vec![
                    Column::leaf("company", "Company", 20.0),
                    Column::leaf("age", "Age", 50.0),
                ],
            ),
        ]
    }

    #[test]
    fn test_initialize_binds_every_leaf() {
        let mut registry = WidthRegistry::new();
        let bound = registry.initialize(&columns()).unwrap();

        assert_eq!(registry.entry_count(), 3);
        for leaf in leaves(&bound) {
            let class = leaf.style.as_ref().expect("leaf should be bound");
            assert!(class.as_str().starts_with("column-"));
            assert!(class.as_str().ends_with(leaf.id.as_str()));
            assert_eq!(registry.rule(class).unwrap().width, leaf.width);
        }
    }

    #[test]
    fn test_update_then_read_back() {
        let mut registry = WidthRegistry::new();
        registry.initialize(&columns()).unwrap();

        let name = ColumnId::from("name");
        registry.update(&name, 142.0).unwrap();
        assert_eq!(registry.width(&name), Some(142.0));

        let rule = registry.rule(&registry.class_name(&name)).unwrap();
        assert_eq!(rule.min_width, 142.0);
        assert_eq!(rule.max_width, 142.0);
    }

    #[test]
    fn test_update_by_increment_and_multiplier() {
        let mut registry = WidthRegistry::new();
        registry.initialize(&columns()).unwrap();

        let company = ColumnId::from("company");
        assert_eq!(registry.update_by_increment(&company, 5.0).unwrap(), 25.0);
        assert_eq!(registry.width(&company), Some(25.0));

        assert_eq!(registry.update_by_multiplier(&company, 2.0).unwrap(), 50.0);
        assert_eq!(registry.width(&company), Some(50.0));
    }

    #[test]
    fn test_invalid_widths_rejected() {
        let mut registry = WidthRegistry::new();
        registry.initialize(&columns()).unwrap();
        let name = ColumnId::from("name");

        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let err = registry.update(&name, bad).unwrap_err();
            assert!(matches!(err, LayoutError::InvalidWidth { .. }));
        }
        assert_eq!(registry.width(&name), Some(100.0));

        // Shrinking below zero through an increment is rejected too
        let err = registry.update_by_increment(&name, -150.0).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidWidth { .. }));
    }

    #[test]
    fn test_missing_entry() {
        let mut registry = WidthRegistry::new();
        registry.initialize(&columns()).unwrap();

        let unknown = ColumnId::from("salary");
        assert_eq!(
            registry.update_by_increment(&unknown, 5.0),
            Err(LayoutError::MissingEntry { column: unknown.clone() })
        );
        assert!(registry.update_by_multiplier(&unknown, 2.0).is_err());
        assert!(registry.widths([&unknown]).is_err());
    }

    #[test]
    fn test_update_never_creates_entries() {
        let mut registry = WidthRegistry::new();
        registry.initialize(&columns()).unwrap();

        let ghost = ColumnId::from("ghost");
        assert_eq!(
            registry.update(&ghost, 10.0),
            Err(LayoutError::MissingEntry { column: ghost.clone() })
        );
        assert_eq!(registry.entry_count(), 3);
        assert_eq!(registry.width(&ghost), None);
    }

    #[test]
    fn test_initialize_rejects_duplicates_and_bad_widths() {
        let mut registry = WidthRegistry::new();
        let dup = vec![Column::leaf("a", "A", 10.0), Column::leaf("a", "A again", 10.0)];
        assert!(matches!(
            registry.initialize(&dup),
            Err(LayoutError::DuplicateColumn { .. })
        ));

        let bad = vec![Column::leaf("a", "A", -10.0)];
        assert!(matches!(
            registry.initialize(&bad),
            Err(LayoutError::InvalidWidth { .. })
        ));
        assert_eq!(registry.entry_count(), 0);
    }

    #[test]
    fn test_cleanup_is_idempotent() {
        let mut registry = WidthRegistry::new();
        registry.initialize(&columns()).unwrap();

        registry.cleanup();
        registry.cleanup();
        assert!(registry.is_released());
        assert_eq!(registry.entry_count(), 0);
        assert_eq!(registry.width(&ColumnId::from("name")), None);

        // Writes after cleanup are dropped
        registry.update(&ColumnId::from("name"), 10.0).unwrap();
        assert_eq!(registry.entry_count(), 0);
    }

    #[test]
    fn test_tables_do_not_share_classes() {
        let mut a = WidthRegistry::new();
        let mut b = WidthRegistry::new();
        a.initialize(&columns()).unwrap();
        b.initialize(&columns()).unwrap();

        let name = ColumnId::from("name");
        assert_ne!(a.class_name(&name), b.class_name(&name));

        a.update(&name, 300.0).unwrap();
        a.cleanup();
        assert_eq!(b.width(&name), Some(100.0));
    }
}
