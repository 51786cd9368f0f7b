//! UI panel rendering subsystem
//!
//! - Header panel (sample data controls)
//! - Table header component (composite headers, resize handles, column moves)
//! - Table body (striped data rows)
//! - Status bar (current widths and errors)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod status_bar;
pub mod table_header;
pub mod table_body;
pub mod panel_manager;
