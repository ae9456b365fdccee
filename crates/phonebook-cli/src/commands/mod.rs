//! Command handlers for the main menu.
//!
//! Every handler takes the application context and the directory; the menu
//! loop persists the directory after each one returns.

mod add;
mod age;
mod conflict;
mod delete;
mod list;
mod search;
mod update;

pub use add::handle_add;
pub use age::handle_age;
pub use delete::handle_delete;
pub use list::handle_list;
pub use search::handle_search;
pub use update::handle_update;

pub const NOT_FOUND: &str = "Record not found.";
