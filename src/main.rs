//! Lorcana Deck Manager - Manage Lorcana decklists for Tabletop Simulator
//!
//! Main entry point for the interactive shell.
//!
//! # Overview
//!
//! The binary initializes:
//! - Configuration loading ([`ConfigManager`]) from the per-user config directory
//! - Logging infrastructure (daily rotating file under `<config dir>/logs`)
//! - The [`AppContext`]: storage directory resolved once for the whole session
//! - The [`ShellController`] with native dialogs
//!
//! # Commands
//!
//! - `list` / `refresh`: re-read the storage directory
//! - `show <n>`: tally the n-th decklist
//! - `upload [path]`: import a decklist; without a path a file picker opens
//! - `help`, `quit`

use anyhow::{Result, anyhow};
use camino::Utf8PathBuf;
use lorcana_deck_manager::ui::{Dialogs, NativeDialogs, ShellController};
use lorcana_deck_manager::{APP_NAME, AppContext, ConfigManager, VERSION};
use std::io::{self, BufRead, Write};

const HELP: &str = "Commands: list | show <n> | upload [path] | help | quit";

fn main() -> Result<()> {
    let config_manager = ConfigManager::new(ConfigManager::default_dir())?;
    let user_config = config_manager.load_user_config()?;
    let settings = user_config.deck_manager;

    let _guard = lorcana_deck_manager::logging::setup_logging(
        &config_manager.log_dir(),
        APP_NAME,
        settings.debug_mode,
    )?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let dialogs = NativeDialogs;
    let context = match AppContext::from_settings(settings) {
        Ok(context) => context,
        Err(e) => {
            tracing::error!("Cannot determine storage directory: {}", e);
            dialogs.show_error("Error", &e.to_string());
            return Err(anyhow!(e));
        }
    };

    tracing::info!("Storage directory: {}", context.storage_dir());

    let mut controller = ShellController::new(context, dialogs);
    print_listing(&controller);
    println!("{}", HELP);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let (command, argument) = match line.trim().split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line.trim(), ""),
        };

        match command {
            "" => {}
            "list" | "refresh" => {
                controller.refresh();
                print_listing(&controller);
            }
            "show" => match argument.parse::<usize>() {
                Ok(n) if n >= 1 => {
                    if let Some(tally) = controller.select(n - 1) {
                        for line in ShellController::<NativeDialogs>::tally_lines(tally) {
                            println!("{}", line);
                        }
                    } else if n > controller.state().decklists.len() {
                        println!("No decklist #{}", n);
                    }
                }
                _ => println!("Usage: show <n>"),
            },
            "upload" => {
                let uploaded = if argument.is_empty() {
                    controller.browse_and_upload()
                } else {
                    controller.upload(&Utf8PathBuf::from(argument))
                };
                if uploaded {
                    print_listing(&controller);
                }
            }
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            other => println!("Unknown command '{}'. {}", other, HELP),
        }
    }

    tracing::info!("Application shutdown complete");
    Ok(())
}

fn print_listing<D: Dialogs>(controller: &ShellController<D>) {
    println!("Available Decklists:");
    let has_decklists = !controller.state().decklists.is_empty();
    for (i, line) in controller.listing_lines().iter().enumerate() {
        if has_decklists {
            println!("  {:>3}. {}", i + 1, line);
        } else {
            println!("  {}", line);
        }
    }
    println!("{}", controller.location_line());
}
