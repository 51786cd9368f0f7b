//! Table body rendering
//!
//! Draws the data rows below the header, one cell per leaf column.

use eframe::egui;
use egui::{FontId, Rect, Sense, Stroke};
use rtable::Table;

use crate::rendering::text_utils::paint_cell_text;

/// Height of one data row.
pub const ROW_HEIGHT: f32 = 22.0;

/// Renders all rows of `table` in a vertically scrolling area.
///
/// `widths` are the leaf widths for this frame, in display order, so the body
/// lines up with the header drawn above it.
pub fn render_table_body(ui: &mut egui::Ui, table: &Table, widths: &[f32]) {
    let leaves = table.leaves();
    let total_width: f32 = widths.iter().sum();
    let font_id = FontId::proportional(13.0);
    let text_color = ui.visuals().text_color();
    let stripe = ui.visuals().faint_bg_color;
    let border = Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color);

    egui::ScrollArea::vertical()
        .id_salt("table_body")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 0.0;

            for (index, row) in table.rows().iter().enumerate() {
                let (row_rect, _) =
                    ui.allocate_exact_size(egui::vec2(total_width, ROW_HEIGHT), Sense::hover());
                if !ui.is_rect_visible(row_rect) {
                    continue;
                }

                let painter = ui.painter();
                if index % 2 == 1 {
                    painter.rect_filled(row_rect, 0.0, stripe);
                }

                let mut x = row_rect.left();
                for (leaf, &width) in leaves.iter().zip(widths) {
                    let cell = Rect::from_min_size(egui::pos2(x, row_rect.top()), egui::vec2(width, ROW_HEIGHT));
                    paint_cell_text(painter, cell, &leaf.cell_text(row), font_id.clone(), text_color);
                    painter.line_segment([cell.right_top(), cell.right_bottom()], border);
                    x += width;
                }
            }
        });
}
