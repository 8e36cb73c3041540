use crate::services::import::DEFAULT_BACKUP_DIR;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// User configuration from Deck Manager.yaml
///
/// Contains the user's overrides for directories and listing/import behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(rename = "Deck_Manager", default)]
    pub deck_manager: ManagerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerSettings {
    /// Overrides the platform storage directory when set
    #[serde(rename = "Storage Directory", default)]
    pub storage_directory: Option<Utf8PathBuf>,

    #[serde(rename = "Sort Decklists", default = "default_true")]
    pub sort_decklists: bool,

    #[serde(rename = "Backup On Overwrite", default)]
    pub backup_on_overwrite: bool,

    #[serde(rename = "Backup Directory", default = "default_backup_directory")]
    pub backup_directory: String,

    /// Start directory of the browse dialog; Downloads when unset
    #[serde(rename = "Browse Directory", default)]
    pub browse_directory: Option<Utf8PathBuf>,

    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,
}

impl Default for ManagerSettings {
    fn default() -> Self {
        Self {
            storage_directory: None,
            sort_decklists: true,
            backup_on_overwrite: false,
            backup_directory: default_backup_directory(),
            browse_directory: None,
            debug_mode: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_backup_directory() -> String {
    DEFAULT_BACKUP_DIR.to_string()
}
