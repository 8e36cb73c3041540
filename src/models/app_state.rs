use crate::models::ManagerSettings;
use crate::services::catalog::{Catalog, ListingOrder};
use crate::services::import::ImportOptions;
use crate::services::platform::{
    PlatformError, default_browse_directory, resolve_host_storage_directory,
};
use crate::services::tally::NicknameTally;
use camino::{Utf8Path, Utf8PathBuf};

/// Startup-time configuration shared by every operation.
///
/// The storage directory is resolved once when the context is built and never
/// re-resolved afterwards. Components receive the context (or the pieces they
/// need from it) explicitly.
#[derive(Debug, Clone)]
pub struct AppContext {
    storage_dir: Utf8PathBuf,
    settings: ManagerSettings,
}

impl AppContext {
    pub fn new(storage_dir: impl Into<Utf8PathBuf>, settings: ManagerSettings) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            settings,
        }
    }

    /// Build the context from user settings, resolving the host storage
    /// directory unless the settings override it.
    ///
    /// # Errors
    /// Fails when the host platform has no known storage directory.
    pub fn from_settings(settings: ManagerSettings) -> Result<Self, PlatformError> {
        let storage_dir = match &settings.storage_directory {
            Some(dir) => {
                tracing::info!("Using configured storage directory: {}", dir);
                dir.clone()
            }
            None => resolve_host_storage_directory()?,
        };
        Ok(Self::new(storage_dir, settings))
    }

    pub fn storage_dir(&self) -> &Utf8Path {
        &self.storage_dir
    }

    pub fn settings(&self) -> &ManagerSettings {
        &self.settings
    }

    pub fn catalog(&self) -> Catalog {
        let order = if self.settings.sort_decklists {
            ListingOrder::Lexicographic
        } else {
            ListingOrder::Filesystem
        };
        Catalog::new(self.storage_dir.clone(), order)
    }

    pub fn import_options(&self) -> ImportOptions {
        ImportOptions {
            backup_existing: self.settings.backup_on_overwrite,
            backup_dir_name: self.settings.backup_directory.clone(),
        }
    }

    /// Where the browse dialog should open
    pub fn browse_directory(&self) -> Option<Utf8PathBuf> {
        self.settings
            .browse_directory
            .clone()
            .or_else(default_browse_directory)
    }
}

/// What the shell currently shows.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Decklists from the last refresh
    pub decklists: Vec<String>,

    /// Decklist whose tally is displayed
    pub selected: Option<String>,

    /// Tally of the selected decklist
    pub tally: Option<NicknameTally>,
}

impl AppState {
    /// Replace the listing; drops the selection if it disappeared.
    pub fn set_decklists(&mut self, decklists: Vec<String>) {
        let vanished = self
            .selected
            .as_ref()
            .is_some_and(|selected| !decklists.contains(selected));
        if vanished {
            self.clear_selection();
        }
        self.decklists = decklists;
    }

    pub fn select(&mut self, decklist: String, tally: NicknameTally) {
        self.selected = Some(decklist);
        self.tally = Some(tally);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.tally = None;
    }
}
