//! Header drag interaction state.
//!
//! Resize handles are tracked by egui itself; this module only keeps what
//! egui cannot: which column header is being carried to a new position.

use rtable::ColumnId;

/// State of an in-progress header drag.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// Column whose header is being dragged to a new position
    moving_column: Option<ColumnId>,
    /// Leaf header currently under the pointer during a move
    drop_target: Option<ColumnId>,
}

impl InteractionState {
    /// Creates a new interaction state with no active drag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears any in-progress move.
    pub fn reset(&mut self) {
        self.moving_column = None;
        self.drop_target = None;
    }

    // ===== Column Move Queries =====

    /// Returns the column being moved, if any.
    pub fn moving_column(&self) -> Option<&ColumnId> {
        self.moving_column.as_ref()
    }

    /// Returns the header currently hovered as a drop target.
    pub fn drop_target(&self) -> Option<&ColumnId> {
        self.drop_target.as_ref()
    }

    // ===== Column Move Mutations =====

    /// Starts carrying `column`.
    pub fn begin_move(&mut self, column: ColumnId) {
        self.moving_column = Some(column);
        self.drop_target = None;
    }

    /// Records the header under the pointer.
    pub fn hover_target(&mut self, column: Option<ColumnId>) {
        self.drop_target = column;
    }

    /// Ends the move, returning `(source, target)` if it ended over a header.
    pub fn finish_move(&mut self) -> Option<(ColumnId, ColumnId)> {
        let source = self.moving_column.take();
        let target = self.drop_target.take();
        source.zip(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_lifecycle() {
        let mut state = InteractionState::new();
        assert!(state.finish_move().is_none());

        state.begin_move("name".into());
        assert_eq!(state.moving_column(), Some(&ColumnId::from("name")));

        state.hover_target(Some("company".into()));
        assert_eq!(
            state.finish_move(),
            Some((ColumnId::from("name"), ColumnId::from("company")))
        );
        assert!(state.moving_column().is_none());
        assert!(state.drop_target().is_none());
    }

    #[test]
    fn test_drop_outside_headers() {
        let mut state = InteractionState::new();
        state.begin_move("name".into());
        state.hover_target(None);
        assert!(state.finish_move().is_none());
    }
}
