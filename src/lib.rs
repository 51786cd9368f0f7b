pub mod balancer;
pub mod column;
pub mod config;
pub mod error;
pub mod header;
pub mod reorder;
pub mod resize;
pub mod sample;
pub mod table;
pub mod width_registry;

// Export column model
pub use column::{leaves, CellFormat, Column, ColumnId, GroupColumn, LeafColumn, Row};

// Export width engine
pub use balancer::balance;
pub use width_registry::{StyleClass, StyleSheet, TableId, WidthRegistry, WidthRule};
pub use resize::ResizeCoordinator;
pub use reorder::{MoveWithinSiblings, ReorderGesture, ReorderReconciler, Reordered};

// Export table instance
pub use table::{Table, TableEvent};
pub use header::{header_rows, HeaderCell};
pub use config::TableConfig;
pub use error::LayoutError;

// Export sample data generation
pub use sample::{generate_rows, RecordSchema, DEMO_SCHEMA};
