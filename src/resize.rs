//! Container resize and live drag-resize handling.

use log::{debug, trace, warn};

use crate::balancer;
use crate::column::{ColumnId, LeafColumn};
use crate::config::TableConfig;
use crate::error::{LayoutError, Result};
use crate::width_registry::WidthRegistry;

/// Keeps a table's column widths in step with its container.
///
/// The coordinator caches the last balanced widths (in display order) so that
/// each resize rebalances from the previous result rather than re-reading
/// every registry entry. Live drags patch the cached slot of the dragged
/// column so the next resize starts from what the user actually sees.
#[derive(Debug, Clone)]
pub struct ResizeCoordinator {
    /// Available width seen at the last resize (initially the declared total).
    total_width: f64,
    /// Widths per leaf in display order; `None` until first needed.
    snapshot: Option<Vec<f64>>,
    config: TableConfig,
}

impl ResizeCoordinator {
    pub fn new(total_width: f64, config: TableConfig) -> Self {
        Self {
            total_width,
            snapshot: None,
            config,
        }
    }

    pub fn total_width(&self) -> f64 {
        self.total_width
    }

    pub fn snapshot(&self) -> Option<&[f64]> {
        self.snapshot.as_deref()
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Rebalances every leaf to fit `available_width` and returns the new widths.
    ///
    /// The first call seeds the cache by spreading the difference between the
    /// old total and the new usable width evenly over the columns; every call
    /// then balances the cache onto the usable width.
    pub fn on_container_resize(
        &mut self,
        registry: &mut WidthRegistry,
        leaves: &[&LeafColumn],
        available_width: f64,
    ) -> Result<Vec<f64>> {
        if !available_width.is_finite() {
            warn!("ignoring resize to non-finite width {}", available_width);
            return Ok(self.snapshot.clone().unwrap_or_default());
        }
        if leaves.is_empty() {
            self.total_width = available_width;
            return Ok(Vec::new());
        }

        let usable = self.config.usable_width(available_width, leaves.len());

        let seed = match self.snapshot.take() {
            Some(snapshot) if snapshot.len() == leaves.len() => snapshot,
            Some(_) => current_widths(registry, leaves)?,
            None => {
                let inc = (usable - self.total_width) / leaves.len() as f64;
                current_widths(registry, leaves)?
                    .into_iter()
                    .map(|width| (width + inc).max(0.0))
                    .collect()
            }
        };

        let balanced = balancer::balance(&seed, usable, self.config.places);
        for (leaf, &width) in leaves.iter().zip(balanced.iter()) {
            registry.update(&leaf.id, width)?;
        }

        debug!(
            "container resized {} -> {} (usable {}): {:?}",
            self.total_width, available_width, usable, balanced
        );

        self.snapshot = Some(balanced.clone());
        self.total_width = available_width;
        Ok(balanced)
    }

    /// Sets one column's width while a resize handle is being dragged.
    pub fn on_live_drag(
        &mut self,
        registry: &mut WidthRegistry,
        leaves: &[&LeafColumn],
        column: &ColumnId,
        width: f64,
    ) -> Result<()> {
        let index = leaves
            .iter()
            .position(|leaf| &leaf.id == column)
            .filter(|_| registry.width(column).is_some())
            .ok_or_else(|| LayoutError::MissingEntry {
                column: column.clone(),
            })?;

        registry.update(column, width)?;
        trace!("live drag {} -> {}", column, width);

        // Without a cache the first resize seeds from the registry, which
        // already holds this write
        match self.snapshot.as_mut() {
            Some(snapshot) if snapshot.len() == leaves.len() => snapshot[index] = width,
            Some(_) => self.snapshot = Some(current_widths(registry, leaves)?),
            None => {}
        }
        Ok(())
    }

    /// Rebuilds the cache from the registry in the current display order.
    ///
    /// Does nothing before the first resize has filled the cache.
    pub fn resync(&mut self, registry: &WidthRegistry, leaves: &[&LeafColumn]) -> Result<()> {
        if self.snapshot.is_some() {
            self.snapshot = Some(current_widths(registry, leaves)?);
        }
        Ok(())
    }
}

fn current_widths(registry: &WidthRegistry, leaves: &[&LeafColumn]) -> Result<Vec<f64>> {
    registry.widths(leaves.iter().map(|leaf| &leaf.id))
}
