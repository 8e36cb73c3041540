// Dialogs - native message boxes and the decklist file picker
//
// The controller only talks to the `Dialogs` trait so it can be driven without
// a desktop session in tests. `NativeDialogs` is the rfd-backed implementation.

use camino::Utf8PathBuf;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

/// User-facing dialogs the shell needs
#[cfg_attr(test, mockall::automock)]
pub trait Dialogs {
    /// Ask the user for a decklist file, starting in `start_dir` when given.
    ///
    /// Returns `None` when the user cancels.
    fn pick_decklist(&self, start_dir: Option<Utf8PathBuf>) -> Option<Utf8PathBuf>;

    fn show_error(&self, title: &str, message: &str);

    fn show_info(&self, title: &str, message: &str);
}

/// Dialogs shown through the platform's native toolkit
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn pick_decklist(&self, start_dir: Option<Utf8PathBuf>) -> Option<Utf8PathBuf> {
        let mut dialog = FileDialog::new()
            .set_title("Select a JSON Decklist")
            .add_filter("JSON Files", &["json"]);

        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }

        dialog.pick_file().and_then(|path| {
            Utf8PathBuf::try_from(path)
                .map_err(|e| {
                    tracing::error!("Failed to convert path to UTF-8: {}", e);
                    e
                })
                .ok()
        })
    }

    fn show_error(&self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn show_info(&self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
