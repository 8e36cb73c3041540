//! Decklist catalog - lists `.json` files in the storage directory.
//!
//! A missing directory is not an error: it means nothing has been saved yet,
//! so the catalog is simply empty.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io::ErrorKind;

/// Extension suffix a catalog entry must end with (case-sensitive)
pub const DECKLIST_SUFFIX: &str = ".json";

/// Display order for catalog listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingOrder {
    /// Whatever order the filesystem enumerates entries in
    Filesystem,
    /// Lexicographic by filename
    #[default]
    Lexicographic,
}

/// List entry names in `directory` ending with `.json`.
///
/// The order is the filesystem's enumeration order and must be treated as unordered.
/// Entries whose names are not valid UTF-8 are skipped. If `directory` does not
/// exist, or cannot be read, an empty list is returned.
pub fn list_json_files(directory: &Utf8Path) -> Vec<String> {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("Decklist directory not found: {}", directory);
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!("Failed to read decklist directory {}: {}", directory, e);
            return Vec::new();
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Failed to read entry in {}: {}", directory, e);
                continue;
            }
        };

        match entry.file_name().into_string() {
            Ok(name) if name.ends_with(DECKLIST_SUFFIX) => names.push(name),
            Ok(_) => {}
            Err(raw) => {
                tracing::warn!("Skipping non UTF-8 entry in {}: {:?}", directory, raw);
            }
        }
    }

    tracing::debug!("Found {} decklists in {}", names.len(), directory);
    names
}

/// List `.json` entries in `directory`, sorted lexicographically.
pub fn list_json_files_sorted(directory: &Utf8Path) -> Vec<String> {
    let mut names = list_json_files(directory);
    names.sort();
    names
}

/// Catalog bound to one storage directory.
#[derive(Debug, Clone)]
pub struct Catalog {
    directory: Utf8PathBuf,
    order: ListingOrder,
}

impl Catalog {
    pub fn new(directory: impl Into<Utf8PathBuf>, order: ListingOrder) -> Self {
        Self {
            directory: directory.into(),
            order,
        }
    }

    pub fn directory(&self) -> &Utf8Path {
        &self.directory
    }

    /// Current listing in the configured order
    pub fn list(&self) -> Vec<String> {
        match self.order {
            ListingOrder::Filesystem => list_json_files(&self.directory),
            ListingOrder::Lexicographic => list_json_files_sorted(&self.directory),
        }
    }

    /// Full path of a listed decklist
    pub fn path_of(&self, file_name: &str) -> Utf8PathBuf {
        self.directory.join(file_name)
    }
}
