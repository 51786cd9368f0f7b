//! Text rendering utilities
//!
//! Shared helpers for drawing single-line text inside fixed-width cells.

use std::sync::Arc;

use eframe::egui;
use egui::text::{LayoutJob, TextWrapping};
use egui::{Color32, FontId, Galley, Painter, Rect};

/// Horizontal padding inside a cell, per side.
pub const CELL_PADDING: f32 = 4.0;

/// Lays out `text` on one line, cut off with an ellipsis past `max_width`.
pub fn truncated_galley(
    painter: &Painter,
    text: &str,
    max_width: f32,
    font_id: FontId,
    color: Color32,
) -> Arc<Galley> {
    let mut job = LayoutJob::simple_singleline(text.to_owned(), font_id, color);
    job.wrap = TextWrapping::truncate_at_width(max_width.max(0.0));
    painter.layout_job(job)
}

/// Draws `text` left-aligned and vertically centered in `cell`.
///
/// Nothing is drawn when the cell is narrower than its padding.
pub fn paint_cell_text(painter: &Painter, cell: Rect, text: &str, font_id: FontId, color: Color32) {
    let max_width = cell.width() - 2.0 * CELL_PADDING;
    if max_width <= 0.0 || text.is_empty() {
        return;
    }

    let galley = truncated_galley(painter, text, max_width, font_id, color);
    let pos = egui::pos2(
        cell.left() + CELL_PADDING,
        cell.center().y - galley.size().y / 2.0,
    );
    painter.with_clip_rect(cell).galley(pos, galley, color);
}
