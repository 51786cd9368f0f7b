//! Table demo GUI application
//!
//! Shows a sample data table whose columns fill the window width. The demo
//! features:
//! - Proportional column widths that follow window resizes
//! - Drag handles on header edges for live column resizing
//! - Drag-and-drop reordering of draggable columns with width swapping
//! - Composite (grouped) column headers
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Pointer interaction state
//! - `ui/` - UI panel rendering and interaction
//! - `rendering/` - Low-level text rendering for cells

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::{Context, Result};
use eframe::egui;
use log::info;
use rtable::TableConfig;
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};

mod app;
mod rendering;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator};
use ui::panel_manager::PanelManager;

/// Parses `--config <file>`; anything else is ignored.
fn config_path() -> Result<Option<PathBuf>> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().context("--config requires a file path argument")?;
            return Ok(Some(PathBuf::from(path)));
        }
    }
    Ok(None)
}

/// Main application entry point that initializes and launches the table demo.
fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let config = match config_path()? {
        Some(path) => {
            info!("loading layout config from {}", path.display());
            TableConfig::load(&path)?
        }
        None => TableConfig::default(),
    };
    let state = AppState::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title("rtable demo"),
        ..Default::default()
    };

    eframe::run_native(
        "rtable demo",
        options,
        Box::new(move |_cc| Ok(Box::new(TableDemoApp { state }))),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
}

/// The demo application: state plus the panels drawing it.
struct TableDemoApp {
    /// Centralized application state
    state: AppState,
}

impl eframe::App for TableDemoApp {
    /// Renders all panels, then applies the interactions they reported.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let interactions = PanelManager::render_all_panels(ctx, &mut self.state);
        let changed = !interactions.is_empty();

        for interaction in interactions {
            ApplicationCoordinator::handle_interaction(&mut self.state, interaction);
        }

        if changed {
            ctx.request_repaint();
        }
    }
}
