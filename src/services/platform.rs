//! Storage directory resolution for the Tabletop Simulator "Saved Objects" folder.
//!
//! Tabletop Simulator keeps saved objects (including imported decklists) in a
//! platform-conventional location under the user's home directory:
//!
//! | Platform          | Directory                                                      |
//! |-------------------|----------------------------------------------------------------|
//! | Windows           | `~/Documents/My Games/Tabletop Simulator/Saves/Saved Objects`  |
//! | macOS             | `~/Library/Tabletop Simulator/Saves/Saved Objects`             |
//! | Linux-like POSIX  | `~/.local/share/Tabletop Simulator/Saves/Saved Objects`        |
//!
//! Resolution never touches the filesystem; the directory does not need to exist yet.
//!
//! # Examples
//!
//! ```ignore
//! use lorcana_deck_manager::services::platform::resolve_storage_directory_in;
//! use camino::Utf8Path;
//!
//! let dir = resolve_storage_directory_in("linux", Utf8Path::new("/home/ana"))?;
//! assert_eq!(dir, "/home/ana/.local/share/Tabletop Simulator/Saves/Saved Objects");
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use std::path::PathBuf;
use thiserror::Error;

/// Identifiers of POSIX systems using the XDG `~/.local/share` layout
const LINUX_LIKE: [&str; 8] = [
    "linux", "freebsd", "openbsd", "netbsd", "dragonfly", "solaris", "illumos", "posix",
];

/// Path segments shared by every platform below the platform-specific prefix.
const TTS_SAVED_OBJECTS: [&str; 3] = ["Tabletop Simulator", "Saves", "Saved Objects"];

/// Errors that can occur while resolving the storage directory
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    #[error("Could not determine the current user's home directory")]
    HomeDirectoryUnavailable,

    #[error("Path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),
}

/// Host platform families with a known Tabletop Simulator layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and the other POSIX systems that follow the XDG `~/.local/share` layout
    LinuxLike,
}

impl Platform {
    /// Map an operating system identifier to a platform family.
    ///
    /// Accepts the values of [`std::env::consts::OS`] plus a few common aliases
    /// (`nt`, `win32`, `darwin`, `osx`, `posix`). Matching is case-insensitive.
    pub fn from_identifier(os_identifier: &str) -> Result<Self, PlatformError> {
        match os_identifier.trim().to_ascii_lowercase().as_str() {
            "windows" | "nt" | "win32" => Ok(Self::Windows),
            "macos" | "darwin" | "osx" => Ok(Self::MacOs),
            os if LINUX_LIKE.contains(&os) => Ok(Self::LinuxLike),
            _ => Err(PlatformError::UnsupportedPlatform(os_identifier.into())),
        }
    }

    /// The platform this binary was compiled for.
    pub fn host() -> Result<Self, PlatformError> {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Directory components between the home directory and the TTS folders
    fn home_prefix(self) -> &'static [&'static str] {
        match self {
            Self::Windows => &["Documents", "My Games"],
            Self::MacOs => &["Library"],
            Self::LinuxLike => &[".local", "share"],
        }
    }

    /// Storage directory for this platform rooted at `home`.
    pub fn storage_directory(self, home: &Utf8Path) -> Utf8PathBuf {
        let mut path = home.to_path_buf();
        for segment in self.home_prefix().iter().chain(TTS_SAVED_OBJECTS.iter()) {
            path.push(segment);
        }
        path
    }
}

/// Resolve the storage directory for `os_identifier` below an explicit home directory.
///
/// This is the pure form of [`resolve_storage_directory`]; tests and callers that
/// already know the home directory use it directly.
pub fn resolve_storage_directory_in(
    os_identifier: &str,
    home: &Utf8Path,
) -> Result<Utf8PathBuf, PlatformError> {
    let platform = Platform::from_identifier(os_identifier)?;
    Ok(platform.storage_directory(home))
}

/// Resolve the storage directory for `os_identifier` below the current user's home.
///
/// # Errors
///
/// - [`PlatformError::UnsupportedPlatform`] for identifiers outside Windows, macOS
///   and Linux-like POSIX systems
/// - [`PlatformError::HomeDirectoryUnavailable`] / [`PlatformError::NonUtf8Path`]
///   when the home directory cannot be looked up or represented
pub fn resolve_storage_directory(os_identifier: &str) -> Result<Utf8PathBuf, PlatformError> {
    // Validate the identifier before the home lookup so unsupported hosts
    // always report the platform, not the home directory.
    let platform = Platform::from_identifier(os_identifier)?;
    let home = home_directory()?;
    let dir = platform.storage_directory(&home);
    tracing::debug!("Resolved storage directory for {}: {}", os_identifier, dir);
    Ok(dir)
}

/// Resolve the storage directory for the host operating system.
pub fn resolve_host_storage_directory() -> Result<Utf8PathBuf, PlatformError> {
    resolve_storage_directory(std::env::consts::OS)
}

/// The current user's home directory as a UTF-8 path.
pub fn home_directory() -> Result<Utf8PathBuf, PlatformError> {
    let home = dirs::home_dir().ok_or(PlatformError::HomeDirectoryUnavailable)?;
    Utf8PathBuf::try_from(home).map_err(|e| PlatformError::NonUtf8Path(e.into_path_buf()))
}

/// Directory the browse dialog opens in: Downloads, falling back to home.
pub fn default_browse_directory() -> Option<Utf8PathBuf> {
    dirs::download_dir()
        .and_then(|dir| Utf8PathBuf::try_from(dir).ok())
        .or_else(|| home_directory().ok())
}
