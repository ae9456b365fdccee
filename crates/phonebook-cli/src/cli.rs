use std::path::PathBuf;

use clap::{ArgAction, Parser};

use phonebook_core::VERSION;

/// Phonebook - a contact directory kept in a flat JSON file
#[derive(Parser)]
#[command(name = "phonebook")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Path to the phonebook JSON file
    #[arg(short, long, env = "PHONEBOOK_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, env = "PHONEBOOK_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long)]
    pub ascii: bool,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
