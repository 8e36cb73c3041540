//! Integration tests for ConfigManager and the startup context
//!
//! These tests verify:
//! - Configuration loading and saving
//! - Default configuration when no file exists
//! - Settings flowing into the AppContext

use camino::Utf8PathBuf;
use lorcana_deck_manager::config::USER_CONFIG_FILE;
use lorcana_deck_manager::{AppContext, ConfigManager, ManagerSettings};
use std::fs;
use tempfile::TempDir;

fn create_test_config_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, config_path)
}

#[test]
fn test_create_config_manager() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    assert_eq!(manager.config_dir(), &config_path);
    assert_eq!(manager.log_dir(), config_path.join("logs"));
}

#[test]
fn test_load_default_user_config() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    let config = manager.load_user_config().unwrap();

    assert!(config.deck_manager.sort_decklists);
    assert!(!config.deck_manager.backup_on_overwrite);
    assert!(config.deck_manager.storage_directory.is_none());
}

#[test]
fn test_load_handwritten_config() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let yaml = "\
Deck_Manager:
  Storage Directory: /srv/tts/Saved Objects
  Sort Decklists: false
  Debug Mode: true
";
    fs::write(config_path.join(USER_CONFIG_FILE), yaml).unwrap();

    let manager = ConfigManager::new(&config_path).unwrap();
    let settings = manager.load_user_config().unwrap().deck_manager;

    assert_eq!(
        settings.storage_directory.as_deref().map(|p| p.as_str()),
        Some("/srv/tts/Saved Objects")
    );
    assert!(!settings.sort_decklists);
    assert!(settings.debug_mode);
    assert_eq!(settings.backup_directory, "backups");
}

#[test]
fn test_save_and_load_round_trip() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    let mut config = manager.load_user_config().unwrap();
    config.deck_manager.backup_on_overwrite = true;
    config.deck_manager.browse_directory = Some(Utf8PathBuf::from("/tmp/downloads"));
    manager.save_user_config(&config).unwrap();

    let loaded = manager.load_user_config().unwrap();
    assert!(loaded.deck_manager.backup_on_overwrite);
    assert_eq!(
        loaded.deck_manager.browse_directory,
        Some(Utf8PathBuf::from("/tmp/downloads"))
    );
}

#[test]
fn test_context_from_settings() {
    let (_temp_dir, storage) = create_test_config_dir();
    fs::write(storage.join("b.json"), "{}").unwrap();
    fs::write(storage.join("a.json"), "{}").unwrap();

    let settings = ManagerSettings {
        storage_directory: Some(storage.clone()),
        browse_directory: Some(Utf8PathBuf::from("/tmp/downloads")),
        ..ManagerSettings::default()
    };
    let context = AppContext::from_settings(settings).unwrap();

    assert_eq!(context.storage_dir(), &storage);
    assert_eq!(context.catalog().list(), vec!["a.json", "b.json"]);
    assert_eq!(
        context.browse_directory(),
        Some(Utf8PathBuf::from("/tmp/downloads"))
    );
}

#[test]
fn test_context_resolves_host_directory_by_default() {
    let context = AppContext::from_settings(ManagerSettings::default()).unwrap();
    assert!(context.storage_dir().ends_with("Saved Objects"));

    let unsorted = ManagerSettings {
        sort_decklists: false,
        ..ManagerSettings::default()
    };
    let context = AppContext::new("/nowhere", unsorted);
    assert!(context.catalog().list().is_empty());
}
