//! Header panel UI rendering
//!
//! Handles the top bar with the sample data controls.

use eframe::egui;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked "New sample rows" button
    RegenerateRowsRequested,
}

/// Renders the application header
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.heading("rtable");
        ui.separator();

        if ui.button("🎲 New sample rows").clicked() {
            interaction = Some(HeaderInteraction::RegenerateRowsRequested);
        }

        ui.label("Drag header edges to resize, drag Name or Company to reorder.");
    });

    interaction
}
