//! Header row resolution for composite columns.

use crate::column::{header_depth, Column, ColumnId};
use crate::width_registry::StyleClass;

/// One cell of a header row.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub label: String,
    /// Number of leaf columns this cell spans.
    pub col_span: usize,
    /// Number of header rows this cell spans; leaves reach the bottom row.
    pub row_span: usize,
    /// Set for leaf cells only.
    pub leaf: Option<ColumnId>,
    pub style: Option<StyleClass>,
    pub resizable: bool,
    pub draggable: bool,
}

/// Lays `columns` out as header rows, top row first.
///
/// Each group produces a cell spanning its leaves in the row of its depth;
/// each leaf produces a cell in the row of its depth that extends down to
/// the last header row.
pub fn header_rows(columns: &[Column]) -> Vec<Vec<HeaderCell>> {
    let depth = header_depth(columns);
    let mut rows = vec![Vec::new(); depth];
    collect(columns, 0, depth, &mut rows);
    rows
}

fn collect(columns: &[Column], level: usize, depth: usize, rows: &mut [Vec<HeaderCell>]) {
    for column in columns {
        let cell = match column {
            Column::Leaf(leaf) => HeaderCell {
                label: leaf.label.clone(),
                col_span: 1,
                row_span: depth - level,
                leaf: Some(leaf.id.clone()),
                style: leaf.style.clone(),
                resizable: leaf.resizable,
                draggable: leaf.draggable,
            },
            Column::Group(group) => HeaderCell {
                label: group.label.clone(),
                col_span: column.leaf_count(),
                row_span: 1,
                leaf: None,
                style: None,
                resizable: false,
                draggable: false,
            },
        };
        rows[level].push(cell);

        if let Column::Group(group) = column {
            collect(&group.children, level + 1, depth, rows);
        }
    }
}
