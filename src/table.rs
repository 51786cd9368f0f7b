//! The table instance: column layout state plus the engines acting on it.

use log::debug;

use crate::column::{leaves, map_leaves, Column, ColumnId, LeafColumn, Row};
use crate::config::TableConfig;
use crate::error::Result;
use crate::header::{header_rows, HeaderCell};
use crate::reorder::{MoveWithinSiblings, ReorderGesture, ReorderReconciler};
use crate::resize::ResizeCoordinator;
use crate::width_registry::WidthRegistry;

/// Layout events delivered by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// The space available to the table changed.
    ContainerResized { available_width: f64 },
    /// A resize handle was grabbed.
    ResizeStarted { column: ColumnId },
    /// A resize handle moved; `width` is the column's new width.
    Resizing { column: ColumnId, width: f64 },
    /// A resize handle was released at `width`.
    ResizeFinished { column: ColumnId, width: f64 },
    /// A column header was dropped onto another one.
    ColumnMoved { source: ColumnId, target: ColumnId },
}

/// A table owning its columns, rows and width state.
///
/// Events are handled synchronously by [`handle`](Self::handle). Width writes
/// go to the [`WidthRegistry`], which renderers read on every paint; the
/// column tree itself only changes when a reorder lands or a resize gesture
/// settles.
#[derive(Debug)]
pub struct Table<G = MoveWithinSiblings> {
    registry: WidthRegistry,
    columns: Vec<Column>,
    rows: Vec<Row>,
    coordinator: ResizeCoordinator,
    reconciler: ReorderReconciler<G>,
}

impl Table {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>, config: TableConfig) -> Result<Self> {
        Self::with_gesture(columns, rows, config, MoveWithinSiblings)
    }
}

impl<G: ReorderGesture> Table<G> {
    /// Creates a table that delegates column moves to `gesture`.
    pub fn with_gesture(
        columns: Vec<Column>,
        rows: Vec<Row>,
        config: TableConfig,
        gesture: G,
    ) -> Result<Self> {
        let mut registry = WidthRegistry::new();
        let columns = registry.initialize(&columns)?;
        let total_width = leaves(&columns).iter().map(|leaf| leaf.width).sum();

        debug!(
            "table {}: {} leaf columns, {} rows, total width {}",
            registry.table_id(),
            registry.entry_count(),
            rows.len(),
            total_width
        );

        Ok(Self {
            registry,
            columns,
            rows,
            coordinator: ResizeCoordinator::new(total_width, config),
            reconciler: ReorderReconciler::new(gesture),
        })
    }

    /// Applies `event`. Returns whether any width or the column order changed.
    pub fn handle(&mut self, event: TableEvent) -> Result<bool> {
        match event {
            TableEvent::ContainerResized { available_width } => {
                let leaves = leaves(&self.columns);
                self.coordinator
                    .on_container_resize(&mut self.registry, &leaves, available_width)?;
                Ok(!leaves.is_empty())
            }
            TableEvent::ResizeStarted { column } => {
                debug!("resize started on '{}' at {:?}", column, self.registry.width(&column));
                Ok(false)
            }
            TableEvent::Resizing { column, width } => {
                self.live_drag(&column, width)?;
                Ok(true)
            }
            TableEvent::ResizeFinished { column, width } => {
                self.live_drag(&column, width)?;
                self.commit_width(&column, width);
                debug!("resize finished on '{}' at {}", column, width);
                Ok(true)
            }
            TableEvent::ColumnMoved { source, target } => {
                let Some(reordered) =
                    self.reconciler
                        .reconcile(&mut self.registry, &self.columns, &source, &target)
                else {
                    return Ok(false);
                };
                self.columns = reordered.columns;
                self.coordinator
                    .resync(&self.registry, &leaves(&self.columns))?;
                Ok(true)
            }
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Leaf columns in display order.
    pub fn leaves(&self) -> Vec<&LeafColumn> {
        leaves(&self.columns)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }

    pub fn registry(&self) -> &WidthRegistry {
        &self.registry
    }

    pub fn config(&self) -> &TableConfig {
        self.coordinator.config()
    }

    /// Available width seen at the last container resize.
    pub fn total_width(&self) -> f64 {
        self.coordinator.total_width()
    }

    /// Current width of `column` as renderers see it.
    pub fn width_of(&self, column: &ColumnId) -> Option<f64> {
        self.registry.width(column)
    }

    /// Current widths of all leaves in display order.
    pub fn widths(&self) -> Result<Vec<f64>> {
        self.registry
            .widths(self.leaves().into_iter().map(|leaf| &leaf.id))
    }

    pub fn header_rows(&self) -> Vec<Vec<HeaderCell>> {
        header_rows(&self.columns)
    }

    fn live_drag(&mut self, column: &ColumnId, width: f64) -> Result<()> {
        let leaves = leaves(&self.columns);
        self.coordinator
            .on_live_drag(&mut self.registry, &leaves, column, width)
    }

    /// Folds a settled width back into the column definitions.
    fn commit_width(&mut self, column: &ColumnId, width: f64) {
        self.columns = map_leaves(&self.columns, &mut |leaf: &LeafColumn| {
            if &leaf.id == column {
                LeafColumn { width, ..leaf.clone() }
            } else {
                leaf.clone()
            }
        });
    }
}
