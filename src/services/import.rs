//! Decklist import - copy a JSON decklist into the storage directory.
//!
//! The source is parsed and re-serialized (4-space indentation, keys in parsed
//! order) rather than copied byte for byte, so only valid JSON ever lands in the
//! storage directory. The write goes through a temp file in the destination
//! directory that is persisted over the target, so a failed import never leaves
//! a partial file behind.

use crate::services::validation::{ValidationError, validate_json};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Indentation used when writing imported decklists
const JSON_INDENT: &[u8] = b"    ";

/// Default name of the backup subdirectory
pub const DEFAULT_BACKUP_DIR: &str = "backups";

/// Errors that can occur while importing a decklist
#[derive(Error, Debug)]
pub enum ImportError {
    #[error(transparent)]
    InvalidSource(#[from] ValidationError),

    #[error("Source path has no file name: {0}")]
    MissingFileName(Utf8PathBuf),

    #[error("Failed to create destination directory {path}: {source}")]
    CreateDirectory {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize decklist: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to back up existing decklist: {0}")]
    Backup(#[from] BackupError),
}

/// Errors that can occur while backing up a file
#[derive(Error, Debug)]
pub enum BackupError {
    #[error("File to back up not found: {0}")]
    SourceMissing(Utf8PathBuf),

    #[error("Failed to create backup directory {path}: {source}")]
    CreateDirectory {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: Utf8PathBuf,
        to: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Options controlling how an import treats an existing destination file
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Back up a destination file before it is overwritten
    pub backup_existing: bool,
    /// Backup subdirectory name, relative to the destination directory
    pub backup_dir_name: String,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            backup_existing: false,
            backup_dir_name: DEFAULT_BACKUP_DIR.to_string(),
        }
    }
}

/// Import `source_path` into `destination_dir` under the source's file name.
///
/// An existing file with the same name is silently replaced. The source file is
/// never modified or removed.
///
/// # Returns
/// The path of the written decklist
pub fn import_decklist(
    source_path: &Utf8Path,
    destination_dir: &Utf8Path,
) -> Result<Utf8PathBuf, ImportError> {
    import_decklist_with(source_path, destination_dir, &ImportOptions::default())
}

/// Import `source_path` into `destination_dir` with explicit [`ImportOptions`].
pub fn import_decklist_with(
    source_path: &Utf8Path,
    destination_dir: &Utf8Path,
    options: &ImportOptions,
) -> Result<Utf8PathBuf, ImportError> {
    let file_name = source_path
        .file_name()
        .ok_or_else(|| ImportError::MissingFileName(source_path.to_path_buf()))?;

    let document = validate_json(source_path)?;
    let contents = to_pretty_json(&document)?;

    if !destination_dir.exists() {
        fs::create_dir_all(destination_dir).map_err(|e| ImportError::CreateDirectory {
            path: destination_dir.to_path_buf(),
            source: e,
        })?;
    }

    let destination = destination_dir.join(file_name);

    if options.backup_existing && destination.is_file() {
        let backup = backup_file(&destination, &options.backup_dir_name)?;
        tracing::info!("Backed up {} to {}", destination, backup);
    }

    write_atomically(destination_dir, &destination, &contents)?;

    tracing::info!("Imported decklist {} -> {}", source_path, destination);
    Ok(destination)
}

/// Serialize a decklist document with the import indentation
fn to_pretty_json(document: &Value) -> Result<Vec<u8>, ImportError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document
        .serialize(&mut serializer)
        .map_err(ImportError::Serialize)?;
    Ok(buffer)
}

fn write_atomically(
    directory: &Utf8Path,
    destination: &Utf8Path,
    contents: &[u8],
) -> Result<(), ImportError> {
    let write_error = |source: std::io::Error| ImportError::Write {
        path: destination.to_path_buf(),
        source,
    };

    // Same directory as the target so persist is a rename, not a copy
    let mut temp = NamedTempFile::new_in(directory).map_err(write_error)?;
    temp.write_all(contents).map_err(write_error)?;
    temp.as_file().sync_all().map_err(write_error)?;
    temp.persist(destination).map_err(|e| write_error(e.error))?;

    Ok(())
}

/// Copy `file_path` into a timestamped backup next to it.
///
/// The copy lands in `<parent>/<backup_dir_name>/backup_<file name>_<YYYYmmdd_HHMMSS>`;
/// the backup directory is created when missing.
///
/// # Returns
/// Path of the backup file
pub fn backup_file(
    file_path: &Utf8Path,
    backup_dir_name: &str,
) -> Result<Utf8PathBuf, BackupError> {
    let file_name = match file_path.file_name() {
        Some(name) if file_path.is_file() => name,
        _ => return Err(BackupError::SourceMissing(file_path.to_path_buf())),
    };

    let parent = file_path.parent().unwrap_or(Utf8Path::new("."));
    let backup_dir = parent.join(backup_dir_name);
    fs::create_dir_all(&backup_dir).map_err(|e| BackupError::CreateDirectory {
        path: backup_dir.clone(),
        source: e,
    })?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let backup_path = backup_dir.join(format!("backup_{}_{}", file_name, timestamp));

    fs::copy(file_path, &backup_path).map_err(|e| BackupError::Copy {
        from: file_path.to_path_buf(),
        to: backup_path.clone(),
        source: e,
    })?;

    Ok(backup_path)
}
