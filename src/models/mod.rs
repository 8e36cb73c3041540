//! Data models for the deck manager.
//!
//! - [`Decklist`]: The optional-field schema of a saved object that the nickname tally reads
//! - [`AppContext`]: Startup configuration (storage directory + settings) passed to every operation
//! - [`AppState`]: What the shell currently displays
//! - [`UserConfig`]: User preferences loaded from `Deck Manager.yaml`

pub mod app_state;
pub mod config;
pub mod decklist;

pub use app_state::{AppContext, AppState};
pub use config::{ManagerSettings, UserConfig};
pub use decklist::{Card, Decklist, ObjectState};
