//! UI primitives for the Phonebook CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (plain, pretty)
//! - **Theme**: Badge tokens and color styles
//! - **Render**: Badges, key-value lines, contact tables
//! - **Console**: Prompt input and line output

pub mod console;
mod context;
mod mode;
pub mod render;
pub mod theme;

pub use console::{Console, TerminalConsole};
pub use context::UiContext;
pub use theme::Badge;

#[cfg(test)]
pub use console::ScriptedConsole;
