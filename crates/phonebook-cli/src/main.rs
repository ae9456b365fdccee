//! Phonebook CLI - a contact directory kept in a flat JSON file
//!
//! Runs a numbered menu over the phonebook file: list, search, add, delete,
//! update, show age, quit. The file is written after every command.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use phonebook_core::storage::{DirectoryStore, JsonFileStore};

use crate::app::{run_session, AppContext};
use crate::cli::Cli;
use crate::config::{load_effective_config, resolve_book_path};
use crate::ui::{TerminalConsole, UiContext};

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Logs stay on stderr; stdout belongs to the menu.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_effective_config(cli.config.as_deref())?;
    let book_path = resolve_book_path(cli.file.as_deref(), &config);
    tracing::info!(path = %book_path.display(), "opening phonebook");

    let store = JsonFileStore::new(book_path);
    let mut directory = store.load()?;

    let ui = UiContext::from_env(cli.no_color || config.ui.no_color, cli.ascii || config.ui.ascii);
    let mut console = TerminalConsole::new();
    let mut ctx = AppContext::new(&mut console, ui);
    run_session(&mut ctx, &mut directory, &store)
}
