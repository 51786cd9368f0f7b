//! Centralized application state for the table demo.

use rtable::{generate_rows, Column, LayoutError, LeafColumn, CellFormat, Table, TableConfig, DEMO_SCHEMA};

use crate::state::InteractionState;

/// Number of sample rows shown in the demo table.
pub const ROW_COUNT: usize = 100;

/// Main application state.
pub struct AppState {
    /// The table instance (columns, rows and width state)
    pub table: Table,

    /// Header drag state
    pub interaction: InteractionState,

    /// Seed of the currently displayed sample rows
    pub row_seed: u64,

    /// Available width reported by the last container resize
    pub container_width: Option<f64>,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl AppState {
    /// Creates the demo state with the default column set.
    pub fn new(config: TableConfig) -> Result<Self, LayoutError> {
        let row_seed = 42;
        let rows = generate_rows(ROW_COUNT, &DEMO_SCHEMA, row_seed);
        let table = Table::new(demo_columns(), rows, config)?;

        Ok(Self {
            table,
            interaction: InteractionState::new(),
            row_seed,
            container_width: None,
            error_message: None,
        })
    }

    /// Replaces the rows with a freshly generated sample set.
    pub fn regenerate_rows(&mut self) {
        self.row_seed += 1;
        self.table
            .set_rows(generate_rows(ROW_COUNT, &DEMO_SCHEMA, self.row_seed));
    }
}

/// Name and company can be dragged to new positions; the details group shows
/// a composite header over a resizable address column and a fixed age column.
fn demo_columns() -> Vec<Column> {
    vec![
        LeafColumn::new("name", "Name", 100.0).draggable().into(),
        LeafColumn::new("company", "Company", 100.0).draggable().into(),
        Column::group(
            "Details",
            vec![
                Column::leaf("address", "Address", 200.0),
                LeafColumn::new("age", "Age", 50.0)
                    .fixed()
                    .format(CellFormat::Integer)
                    .into(),
            ],
        ),
    ]
}
