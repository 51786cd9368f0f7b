//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying the current layout.

use eframe::egui;
use egui::{Color32, RichText};
use crate::app::AppState;

/// Renders the status panel at the bottom of the window with layout metadata
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let table = &state.table;
        let columns = table.leaves().len();

        ui.label(RichText::new(format!(
            "Columns: {} | Rows: {} | Seed: {}",
            columns,
            table.rows().len(),
            state.row_seed
        )).strong());

        ui.label(RichText::new("|").strong());

        let usable = table.config().usable_width(table.total_width(), columns);
        match table.widths() {
            Ok(widths) => {
                let listed: Vec<String> = widths.iter().map(|w| format!("{:.0}", w)).collect();
                let sum: f64 = widths.iter().sum();
                ui.label(RichText::new(format!(
                    "Widths: [{}] = {:.0} of {:.0}",
                    listed.join(", "),
                    sum,
                    usable
                )).strong());
            }
            Err(e) => {
                ui.label(RichText::new(e.to_string()).strong().color(Color32::RED));
            }
        }

        if let Some(error) = &state.error_message {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(error).strong().color(Color32::RED));
        }
    });
}
