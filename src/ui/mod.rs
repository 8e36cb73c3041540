// UI module - thin shell over the decklist services
//
// This module contains:
// - ShellController: Wires user actions (refresh, select, upload) to the services
// - Dialogs: Native message boxes and the decklist file picker

pub mod controller;
pub mod dialogs;

pub use controller::ShellController;
pub use dialogs::{Dialogs, NativeDialogs};
