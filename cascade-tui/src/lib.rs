//! Cascade TUI - terminal catalog explorer
//!
//! A host screen that opens a modal explorer dialog with:
//! - Catalog, schema and table panes with cascading selection
//! - A case-insensitive schema filter
//! - Table details: owner, storage, Sample Data action, columns
//! - Inspection hand-off overlay

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod panels;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use config::Config;
pub use input::handle_key;
pub use theme::Theme;
