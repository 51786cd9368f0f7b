//! Table header component rendering
//!
//! Renders the (possibly multi-row) column header. Resizable leaf columns get
//! a drag handle on their right edge; draggable leaf columns can be picked up
//! and dropped onto another header to reorder.

use eframe::egui;
use egui::{Color32, CursorIcon, FontId, Pos2, Rect, Sense, Stroke};
use rtable::{ColumnId, HeaderCell, Table};

use crate::rendering::text_utils::paint_cell_text;
use crate::state::InteractionState;

/// Height of one header row.
pub const HEADER_ROW_HEIGHT: f32 = 24.0;

/// Width of the grab area of a resize handle.
const HANDLE_WIDTH: f32 = 8.0;

/// Header interactions the application has to act on.
pub enum TableHeaderInteraction {
    /// A resize handle was grabbed
    ResizeStarted(ColumnId),
    /// A resize handle moved, `width` is the new column width
    Resized { column: ColumnId, width: f64 },
    /// A resize handle was released
    ResizeFinished { column: ColumnId, width: f64 },
    /// A header was dropped onto another header
    Moved { source: ColumnId, target: ColumnId },
}

/// A header cell with its screen rectangle.
struct PlacedCell<'a> {
    cell: &'a HeaderCell,
    rect: Rect,
}

/// Leaf widths in display order, read from the table's width rules.
///
/// Called every frame so width writes show up without touching the column
/// definitions.
pub fn leaf_widths(table: &Table) -> Vec<f32> {
    let registry = table.registry();
    table
        .leaves()
        .iter()
        .map(|leaf| {
            let width = leaf
                .style
                .as_ref()
                .and_then(|class| registry.rule(class))
                .map_or(leaf.width, |rule| rule.width);
            width as f32
        })
        .collect()
}

/// Positions header cells the way an HTML table would: each cell takes the
/// next leaf slots not already covered by a cell from a row above.
fn place_cells<'a>(rows: &'a [Vec<HeaderCell>], widths: &[f32], origin: Pos2) -> Vec<PlacedCell<'a>> {
    let mut offsets = Vec::with_capacity(widths.len() + 1);
    let mut x = 0.0;
    offsets.push(x);
    for width in widths {
        x += width;
        offsets.push(x);
    }

    let mut covered_until = vec![0usize; widths.len()];
    let mut placed = Vec::new();

    for (level, row) in rows.iter().enumerate() {
        let mut slot = 0;
        for cell in row {
            while slot < widths.len() && covered_until[slot] > level {
                slot += 1;
            }
            let end = (slot + cell.col_span).min(widths.len());
            for covered in &mut covered_until[slot..end] {
                *covered = level + cell.row_span;
            }

            let rect = Rect::from_min_max(
                egui::pos2(origin.x + offsets[slot], origin.y + level as f32 * HEADER_ROW_HEIGHT),
                egui::pos2(
                    origin.x + offsets[end],
                    origin.y + (level + cell.row_span) as f32 * HEADER_ROW_HEIGHT,
                ),
            );
            placed.push(PlacedCell { cell, rect });
            slot = end;
        }
    }

    placed
}

/// Width after dragging a handle by `delta`.
///
/// Narrowing stops at `min_drag_width`, or at the current width when the
/// column is already narrower than that. Widening is never clamped.
fn dragged_width(current: f64, delta: f64, min_drag_width: f64) -> f64 {
    let width = current + delta;
    if delta < 0.0 {
        width.max(min_drag_width.min(current))
    } else {
        width
    }
}

/// Renders the column header rows.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `table` - The table whose header is drawn
/// * `interaction` - Header move state carried across frames
/// * `min_drag_width` - Narrowest width a resize handle may produce
pub fn render_table_header(
    ui: &mut egui::Ui,
    table: &Table,
    interaction: &mut InteractionState,
    min_drag_width: f64,
) -> Vec<TableHeaderInteraction> {
    let rows = table.header_rows();
    let widths = leaf_widths(table);
    let total_width: f32 = widths.iter().sum();

    let (header_rect, _) = ui.allocate_exact_size(
        egui::vec2(total_width, rows.len() as f32 * HEADER_ROW_HEIGHT),
        Sense::hover(),
    );

    let placed = place_cells(&rows, &widths, header_rect.min);
    let painter = ui.painter().clone();
    let font_id = FontId::proportional(14.0);
    let text_color = ui.visuals().strong_text_color();
    let border = Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color);
    let highlight = Color32::from_rgb(100, 150, 255);

    // Track the drop target while a header is being carried
    if interaction.moving_column().is_some() {
        let pointer = ui.input(|i| i.pointer.hover_pos());
        let target = pointer.and_then(|pos| {
            placed
                .iter()
                .find(|p| p.cell.leaf.is_some() && p.rect.contains(pos))
                .and_then(|p| p.cell.leaf.clone())
        });
        interaction.hover_target(target);
    }

    let mut interactions = Vec::new();

    for PlacedCell { cell, rect } in &placed {
        let rect = *rect;
        let is_moving = cell.leaf.is_some() && cell.leaf.as_ref() == interaction.moving_column();
        let is_target = !is_moving && cell.leaf.is_some() && cell.leaf.as_ref() == interaction.drop_target();

        if is_target {
            painter.rect_filled(rect, 0.0, highlight.gamma_multiply(0.3));
        } else if is_moving {
            painter.rect_filled(rect, 0.0, ui.visuals().selection.bg_fill);
        }
        painter.line_segment([rect.right_top(), rect.right_bottom()], border);
        painter.line_segment([rect.left_bottom(), rect.right_bottom()], border);
        paint_cell_text(&painter, rect, &cell.label, font_id.clone(), text_color);

        let Some(column) = &cell.leaf else {
            continue;
        };

        if cell.draggable {
            let body = Rect::from_min_max(rect.min, egui::pos2(rect.max.x - HANDLE_WIDTH / 2.0, rect.max.y));
            let response = ui.interact(body, ui.id().with(("header_move", column.as_str())), Sense::drag());

            if response.drag_started() {
                interaction.begin_move(column.clone());
            }
            if response.dragged() {
                ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
            } else if response.hovered() {
                ui.ctx().set_cursor_icon(CursorIcon::Grab);
            }
            if response.drag_stopped() {
                if let Some((source, target)) = interaction.finish_move() {
                    interactions.push(TableHeaderInteraction::Moved { source, target });
                }
            }
        }

        if cell.resizable {
            let handle_rect = Rect::from_center_size(
                egui::pos2(rect.right(), rect.center().y),
                egui::vec2(HANDLE_WIDTH, rect.height()),
            );
            let response = ui.interact(
                handle_rect,
                ui.id().with(("header_resize", column.as_str())),
                Sense::drag(),
            );
            let current = table.width_of(column).unwrap_or(0.0);

            if response.drag_started() {
                interactions.push(TableHeaderInteraction::ResizeStarted(column.clone()));
            }
            if response.dragged() {
                let delta = response.drag_delta().x as f64;
                if delta != 0.0 {
                    interactions.push(TableHeaderInteraction::Resized {
                        column: column.clone(),
                        width: dragged_width(current, delta, min_drag_width),
                    });
                }
            }
            if response.drag_stopped() {
                interactions.push(TableHeaderInteraction::ResizeFinished {
                    column: column.clone(),
                    width: current,
                });
            }

            // Visual feedback
            let color = if response.hovered() || response.dragged() {
                ui.ctx().set_cursor_icon(CursorIcon::ResizeHorizontal);
                highlight
            } else {
                ui.visuals().widgets.noninteractive.bg_stroke.color.gamma_multiply(0.5)
            };
            painter.rect_filled(handle_rect.shrink(2.0), 0.0, color);
        }
    }

    interactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtable::{header_rows, Column};

    #[test]
    fn test_dragged_width_clamps_only_when_narrowing() {
        assert_eq!(dragged_width(100.0, -80.0, 50.0), 50.0);
        assert_eq!(dragged_width(100.0, -20.0, 50.0), 80.0);
        // A column squeezed below the minimum by a window resize
        assert_eq!(dragged_width(30.0, 1.0, 50.0), 31.0);
        assert_eq!(dragged_width(30.0, -5.0, 50.0), 30.0);
    }

    #[test]
    fn test_place_cells_follows_spans() {
        let columns = vec![
            Column::leaf("id", "Id", 40.0),
            Column::group(
                "Details",
                vec![Column::leaf("address", "Address", 200.0), Column::leaf("age", "Age", 50.0)],
            ),
        ];
        let rows = header_rows(&columns);
        let placed = place_cells(&rows, &[40.0, 200.0, 50.0], egui::pos2(10.0, 0.0));

        let rects: Vec<(f32, f32, f32, f32)> = placed
            .iter()
            .map(|p| (p.rect.min.x, p.rect.min.y, p.rect.max.x, p.rect.max.y))
            .collect();
        let h = HEADER_ROW_HEIGHT;
        assert_eq!(
            rects,
            vec![
                (10.0, 0.0, 50.0, 2.0 * h),   // Id spans both rows
                (50.0, 0.0, 300.0, h),        // Details spans both leaves
                (50.0, h, 250.0, 2.0 * h),    // Address
                (250.0, h, 300.0, 2.0 * h),   // Age
            ]
        );
    }
}
