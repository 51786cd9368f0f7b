//! Column reordering with width continuity.
//!
//! Moving a column is split in two. A [`ReorderGesture`] decides the new
//! column order. The [`ReorderReconciler`] then swaps the persisted widths of
//! the two columns involved so each screen position keeps the width it had
//! before the drop and the table does not flash to new sizes.

use log::debug;

use crate::column::{find_leaf, leaves, map_leaves, Column, ColumnId, GroupColumn, LeafColumn};
use crate::width_registry::WidthRegistry;

/// Computes a new column order for a drag-and-drop move.
///
/// Implementations must be pure and must keep every column exactly once.
/// `None` means no move happened.
pub trait ReorderGesture {
    fn apply(&self, columns: &[Column], source: &ColumnId, target: &ColumnId) -> Option<Vec<Column>>;
}

/// Moves the source column to the target's index within their shared sibling
/// list (the top level or one group). Moves between different parents are
/// refused.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveWithinSiblings;

impl ReorderGesture for MoveWithinSiblings {
    fn apply(&self, columns: &[Column], source: &ColumnId, target: &ColumnId) -> Option<Vec<Column>> {
        let position = |id: &ColumnId| columns.iter().position(|c| c.id() == Some(id));

        match (position(source), position(target)) {
            (Some(from), Some(to)) => {
                let mut moved = columns.to_vec();
                let column = moved.remove(from);
                moved.insert(to, column);
                Some(moved)
            }
            (Some(_), None) | (None, Some(_)) => None,
            (None, None) => {
                for (index, column) in columns.iter().enumerate() {
                    let Column::Group(group) = column else {
                        continue;
                    };
                    if let Some(children) = self.apply(&group.children, source, target) {
                        let mut moved = columns.to_vec();
                        moved[index] = Column::Group(GroupColumn {
                            label: group.label.clone(),
                            children,
                        });
                        return Some(moved);
                    }
                }
                None
            }
        }
    }
}

/// Result of a successful reorder.
#[derive(Debug, Clone, PartialEq)]
pub struct Reordered {
    /// The full column tree in its new order, with swapped widths.
    pub columns: Vec<Column>,
    /// The dragged column after the swap.
    pub source: LeafColumn,
    /// The drop target after the swap.
    pub target: LeafColumn,
}

/// Applies column moves and keeps widths attached to screen positions.
#[derive(Debug, Clone)]
pub struct ReorderReconciler<G = MoveWithinSiblings> {
    gesture: G,
}

impl Default for ReorderReconciler {
    fn default() -> Self {
        Self::new(MoveWithinSiblings)
    }
}

impl<G: ReorderGesture> ReorderReconciler<G> {
    pub fn new(gesture: G) -> Self {
        Self { gesture }
    }

    /// Moves `source` onto `target` and swaps their widths.
    ///
    /// Returns `None` without touching the registry when the move is not
    /// valid: identical ids, an unknown id, or a gesture that refuses the
    /// move. Drags pass through such states all the time, so callers should
    /// simply keep their current state.
    pub fn reconcile(
        &self,
        registry: &mut WidthRegistry,
        columns: &[Column],
        source: &ColumnId,
        target: &ColumnId,
    ) -> Option<Reordered> {
        if source == target {
            debug!("ignoring move of '{}' onto itself", source);
            return None;
        }

        let known = |id: &ColumnId| find_leaf(columns, id).and_then(|_| registry.width(id));
        let (source_width, target_width) = match (known(source), known(target)) {
            (Some(s), Some(t)) => (s, t),
            _ => {
                debug!("ignoring move '{}' -> '{}': unknown column", source, target);
                return None;
            }
        };

        let Some(moved) = self.gesture.apply(columns, source, target) else {
            debug!("ignoring move '{}' -> '{}': refused by gesture", source, target);
            return None;
        };
        if !same_leaves(columns, &moved) {
            debug!(
                "ignoring move '{}' -> '{}': gesture did not keep every column once",
                source, target
            );
            return None;
        }

        registry.update(source, target_width).ok()?;
        registry.update(target, source_width).ok()?;

        let columns = map_leaves(&moved, &mut |leaf: &LeafColumn| {
            let width = if &leaf.id == source {
                target_width
            } else if &leaf.id == target {
                source_width
            } else {
                leaf.width
            };
            LeafColumn { width, ..leaf.clone() }
        });

        let source = find_leaf(&columns, source)?.clone();
        let target = find_leaf(&columns, target)?.clone();
        debug!(
            "moved '{}' onto '{}', widths now {} / {}",
            source.id, target.id, source.width, target.width
        );

        Some(Reordered {
            columns,
            source,
            target,
        })
    }
}

/// Whether `after` holds exactly the leaves of `before`, in any order.
fn same_leaves(before: &[Column], after: &[Column]) -> bool {
    fn sorted_ids(columns: &[Column]) -> Vec<&str> {
        let mut ids: Vec<&str> = leaves(columns).into_iter().map(|leaf| leaf.id.as_str()).collect();
        ids.sort_unstable();
        ids
    }
    sorted_ids(before) == sorted_ids(after)
}
