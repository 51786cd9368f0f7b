//! Application-level coordination.
//!
//! Translates panel interactions into table events and keeps error state.

use log::error;
use rtable::TableEvent;

use crate::app::AppState;
use crate::ui::panel_manager::PanelInteraction;

/// Routes UI interactions to the table.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Applies one panel interaction to the application state.
    pub fn handle_interaction(state: &mut AppState, interaction: PanelInteraction) {
        let event = match interaction {
            PanelInteraction::RegenerateRowsRequested => {
                state.regenerate_rows();
                return;
            }
            PanelInteraction::ContainerResized(available_width) => {
                state.container_width = Some(available_width);
                TableEvent::ContainerResized { available_width }
            }
            PanelInteraction::ColumnResizeStarted(column) => TableEvent::ResizeStarted { column },
            PanelInteraction::ColumnResized { column, width } => {
                TableEvent::Resizing { column, width }
            }
            PanelInteraction::ColumnResizeFinished { column, width } => {
                TableEvent::ResizeFinished { column, width }
            }
            PanelInteraction::ColumnMoved { source, target } => {
                TableEvent::ColumnMoved { source, target }
            }
        };

        Self::dispatch(state, event);
    }

    /// Sends `event` to the table, surfacing failures in the status bar.
    fn dispatch(state: &mut AppState, event: TableEvent) {
        match state.table.handle(event) {
            Ok(_) => state.error_message = None,
            Err(e) => {
                error!("table event failed: {}", e);
                state.error_message = Some(format!("Layout error: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtable::TableConfig;

    #[test]
    fn test_container_resize_is_recorded() {
        let mut state = AppState::new(TableConfig::default()).unwrap();
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::ContainerResized(905.0));

        assert_eq!(state.container_width, Some(905.0));
        assert_eq!(state.table.total_width(), 905.0);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_errors_reach_status_bar() {
        let mut state = AppState::new(TableConfig::default()).unwrap();
        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::ColumnResized {
                column: "name".into(),
                width: f64::NAN,
            },
        );
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_regenerate_rows_changes_seed() {
        let mut state = AppState::new(TableConfig::default()).unwrap();
        let before = state.table.rows().to_vec();
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::RegenerateRowsRequested);
        assert_eq!(state.row_seed, 43);
        assert_ne!(state.table.rows(), &before[..]);
    }
}
