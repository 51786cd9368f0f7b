//! Application-level modules for the table demo.
//!
//! This module contains the application coordinator and centralized state.

mod app_state;
mod application_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
