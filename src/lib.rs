// Lorcana Deck Manager - Manage Lorcana decklists for Tabletop Simulator
//
// This is the library crate containing the core business logic and data structures.
// The binary crate (main.rs) provides the interactive shell.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use models::{AppContext, AppState, Decklist, ManagerSettings, UserConfig};
pub use services::NicknameTally;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
