//! Panel orchestration and layout management.
//!
//! Coordinates the header, table and status panels and reports the window
//! width available to the table.

use eframe::egui;
use rtable::ColumnId;

use crate::app::AppState;
use crate::ui::table_header::{self, TableHeaderInteraction};
use crate::ui::{header, status_bar, table_body};

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelInteraction {
    /// User asked for a new set of sample rows
    RegenerateRowsRequested,
    /// Width available to the table changed
    ContainerResized(f64),
    /// A column resize handle was grabbed
    ColumnResizeStarted(ColumnId),
    /// A column resize handle moved
    ColumnResized { column: ColumnId, width: f64 },
    /// A column resize handle was released
    ColumnResizeFinished { column: ColumnId, width: f64 },
    /// A column header was dropped onto another one
    ColumnMoved { source: ColumnId, target: ColumnId },
}

impl From<TableHeaderInteraction> for PanelInteraction {
    fn from(interaction: TableHeaderInteraction) -> Self {
        match interaction {
            TableHeaderInteraction::ResizeStarted(column) => PanelInteraction::ColumnResizeStarted(column),
            TableHeaderInteraction::Resized { column, width } => {
                PanelInteraction::ColumnResized { column, width }
            }
            TableHeaderInteraction::ResizeFinished { column, width } => {
                PanelInteraction::ColumnResizeFinished { column, width }
            }
            TableHeaderInteraction::Moved { source, target } => {
                PanelInteraction::ColumnMoved { source, target }
            }
        }
    }
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation. Interactions are
    /// returned in the order they happened this frame.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Vec<PanelInteraction> {
        let mut interactions = Vec::new();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header::HeaderInteraction::RegenerateRowsRequested) = header::render_header(ui) {
                interactions.push(PanelInteraction::RegenerateRowsRequested);
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Window width minus the page margin is what the table may use
        let available_width =
            (ctx.content_rect().width() as f64 - state.table.config().page_margin).max(0.0);
        if state.container_width != Some(available_width) {
            interactions.push(PanelInteraction::ContainerResized(available_width));
        }

        let table = &state.table;
        let moves = &mut state.interaction;
        let min_drag_width = table.config().min_drag_width;

        egui::CentralPanel::default().show(ctx, |ui| {
            // Header and body scroll horizontally together
            egui::ScrollArea::horizontal()
                .id_salt("table_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.spacing_mut().item_spacing.y = 0.0;
                        let header_interactions =
                            table_header::render_table_header(ui, table, moves, min_drag_width);
                        interactions.extend(header_interactions.into_iter().map(PanelInteraction::from));

                        let widths = table_header::leaf_widths(table);
                        table_body::render_table_body(ui, table, &widths);
                    });
                });
        });

        interactions
    }
}
