//! Services module - Pure business logic for decklist management.
//!
//! The services have no dependencies on the UI layer. Every input is an explicit
//! parameter; the storage directory is resolved once at startup and handed in.
//!
//! # Components
//!
//! - [`platform`]: Resolves the Tabletop Simulator "Saved Objects" directory for a host OS
//! - [`catalog`]: Lists `*.json` decklists in a directory (missing directory = empty)
//! - [`validation`]: Parses a file as JSON, keeping the failure reason
//! - [`import`]: Re-serializes a decklist into the storage directory atomically
//!   (optionally backing up the file it replaces)
//! - [`tally`]: Counts card `Nickname` occurrences in first-seen order
//!
//! # Usage Example
//!
//! ```ignore
//! use lorcana_deck_manager::services::{import_decklist, list_json_files, tally_file};
//!
//! let saves = resolve_host_storage_directory()?;
//! import_decklist(Utf8Path::new("Downloads/amber_steel.json"), &saves)?;
//!
//! for name in list_json_files(&saves) {
//!     let tally = tally_file(&saves.join(&name))?;
//!     println!("{name}:\n{tally}");
//! }
//! ```

pub mod catalog;
pub mod import;
pub mod platform;
pub mod tally;
pub mod validation;

pub use catalog::{Catalog, ListingOrder, list_json_files, list_json_files_sorted};
pub use import::{
    BackupError, ImportError, ImportOptions, backup_file, import_decklist, import_decklist_with,
};
pub use platform::{
    Platform, PlatformError, resolve_host_storage_directory, resolve_storage_directory,
    resolve_storage_directory_in,
};
pub use tally::{NicknameTally, tally_file, tally_nicknames, tally_value};
pub use validation::{ValidationError, is_valid_json, validate_json};
