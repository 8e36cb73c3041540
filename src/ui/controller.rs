// Shell Controller - Bridges the console shell with the decklist services
//
// This module contains the ShellController which coordinates between:
// - AppContext (storage directory + settings, fixed at startup)
// - AppState (current listing, selection and tally)
// - The catalog, validation, import and tally services
// - Dialogs (native message boxes and file picker)
//
// Every failure is turned into a dialog here; nothing propagates to the caller.

use crate::models::{AppContext, AppState};
use crate::services::import::import_decklist_with;
use crate::services::tally::{NicknameTally, tally_file};
use crate::services::validation::{ValidationError, is_valid_json};
use crate::ui::dialogs::Dialogs;
use camino::Utf8Path;

pub const NO_DECKLISTS: &str = "No decklists found.";
pub const NO_NICKNAMES: &str = "No nicknames found in this decklist.";
pub const INVALID_UPLOAD: &str = "The selected file is not a valid JSON decklist.";
pub const DECODE_FAILED: &str = "Failed to decode JSON. Please check the file format.";

/// Shell controller that wires user actions to the decklist services
///
/// Owns the displayed [`AppState`]; the [`AppContext`] is read-only for the
/// controller's whole lifetime.
pub struct ShellController<D: Dialogs> {
    context: AppContext,
    state: AppState,
    dialogs: D,
}

impl<D: Dialogs> ShellController<D> {
    /// Create a controller and load the initial listing
    pub fn new(context: AppContext, dialogs: D) -> Self {
        let mut controller = Self {
            context,
            state: AppState::default(),
            dialogs,
        };
        controller.refresh();
        controller
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Re-read the storage directory
    pub fn refresh(&mut self) -> &[String] {
        let decklists = self.context.catalog().list();
        tracing::info!(
            "Loaded {} decklists from {}",
            decklists.len(),
            self.context.storage_dir()
        );
        self.state.set_decklists(decklists);
        &self.state.decklists
    }

    /// Lines for the decklist box
    pub fn listing_lines(&self) -> Vec<String> {
        if self.state.decklists.is_empty() {
            vec![NO_DECKLISTS.to_string()]
        } else {
            self.state.decklists.clone()
        }
    }

    /// Label under the decklist box
    pub fn location_line(&self) -> String {
        format!("Location: {}", self.context.storage_dir())
    }

    /// Select the decklist at `index` in the current listing and tally it.
    ///
    /// Returns the tally, or `None` if the index is out of range or the file
    /// could not be read (the user has been told why).
    pub fn select(&mut self, index: usize) -> Option<&NicknameTally> {
        let name = self.state.decklists.get(index)?.clone();
        let path = self.context.catalog().path_of(&name);

        match tally_file(&path) {
            Ok(tally) => {
                self.state.select(name, tally);
                self.state.tally.as_ref()
            }
            Err(e @ ValidationError::Malformed { .. }) => {
                tracing::error!("{}", e);
                self.state.clear_selection();
                self.dialogs.show_error("Error", DECODE_FAILED);
                None
            }
            Err(e) => {
                tracing::error!("{}", e);
                self.state.clear_selection();
                self.dialogs
                    .show_error("Error", &format!("Failed to open decklist: {}", e));
                None
            }
        }
    }

    /// Lines for the nickname display
    pub fn tally_lines(tally: &NicknameTally) -> Vec<String> {
        if tally.is_empty() {
            vec![NO_NICKNAMES.to_string()]
        } else {
            tally.lines()
        }
    }

    /// Let the user pick a file and upload it. Returns `true` on success.
    pub fn browse_and_upload(&mut self) -> bool {
        let start_dir = self.context.browse_directory();
        match self.dialogs.pick_decklist(start_dir) {
            Some(path) => self.upload(&path),
            None => {
                tracing::debug!("Upload cancelled");
                false
            }
        }
    }

    /// Validate and import `source` into the storage directory, then refresh.
    ///
    /// Returns `true` on success.
    pub fn upload(&mut self, source: &Utf8Path) -> bool {
        if !is_valid_json(source) {
            self.dialogs.show_error("Invalid JSON", INVALID_UPLOAD);
            return false;
        }

        let options = self.context.import_options();
        match import_decklist_with(source, self.context.storage_dir(), &options) {
            Ok(destination) => {
                let file_name = destination.file_name().unwrap_or(destination.as_str());
                self.dialogs.show_info(
                    "Success",
                    &format!("Decklist '{}' uploaded successfully!", file_name),
                );
                self.refresh();
                true
            }
            Err(e) => {
                tracing::error!("Failed to upload decklist {}: {}", source, e);
                self.dialogs
                    .show_error("Error", &format!("Failed to upload decklist: {}", e));
                false
            }
        }
    }
}
