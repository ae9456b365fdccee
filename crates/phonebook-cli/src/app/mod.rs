//! The interactive menu loop.

mod context;

pub use context::AppContext;

use phonebook_core::storage::{Directory, DirectoryStore};

use crate::commands::{
    handle_add, handle_age, handle_delete, handle_list, handle_search, handle_update,
};
use crate::ui::render::header;

pub const UNRECOGNIZED_COMMAND: &str = "Unrecognized command. Try again.";

/// The seven entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    List,
    Search,
    Add,
    Delete,
    Update,
    ShowAge,
    Quit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 7] = [
        MenuCommand::List,
        MenuCommand::Search,
        MenuCommand::Add,
        MenuCommand::Delete,
        MenuCommand::Update,
        MenuCommand::ShowAge,
        MenuCommand::Quit,
    ];

    /// Parse a typed menu number.
    pub fn from_choice(choice: &str) -> Option<Self> {
        let number: usize = choice.trim().parse().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|command| command == self)
            .map_or(0, |index| index + 1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::List => "List all records",
            Self::Search => "Search records",
            Self::Add => "Add a record",
            Self::Delete => "Delete a record",
            Self::Update => "Update a record",
            Self::ShowAge => "Show age",
            Self::Quit => "Quit",
        }
    }

    /// Run the handler for this command. Quit has nothing to run.
    pub fn handle(&self, ctx: &mut AppContext, directory: &mut Directory) -> anyhow::Result<()> {
        match self {
            Self::List => handle_list(ctx, directory),
            Self::Search => handle_search(ctx, directory),
            Self::Add => handle_add(ctx, directory),
            Self::Delete => handle_delete(ctx, directory),
            Self::Update => handle_update(ctx, directory, None),
            Self::ShowAge => handle_age(ctx, directory),
            Self::Quit => Ok(()),
        }
    }
}

fn print_menu(ctx: &mut AppContext) {
    ctx.say("");
    let title = header(ctx.ui(), "Available commands:");
    ctx.say(&title);
    for command in MenuCommand::ALL {
        ctx.say(&format!("{}. {}", command.number(), command.label()));
    }
}

/// Read and dispatch commands until Quit or end of input.
///
/// The directory is saved after every dispatched command, Quit included.
pub fn run_session(
    ctx: &mut AppContext,
    directory: &mut Directory,
    store: &dyn DirectoryStore,
) -> anyhow::Result<()> {
    loop {
        print_menu(ctx);
        let Some(choice) = ctx.read_line("Choose a command")? else {
            tracing::debug!("input closed, leaving");
            return Ok(());
        };
        let Some(command) = MenuCommand::from_choice(&choice) else {
            ctx.warn(UNRECOGNIZED_COMMAND);
            continue;
        };

        tracing::debug!(command = ?command, "dispatching");
        command.handle(ctx, directory)?;
        store.save(directory).map_err(|e| {
            tracing::error!(error = %e, "saving phonebook failed");
            anyhow::anyhow!(e)
        })?;

        if command == MenuCommand::Quit {
            return Ok(());
        }
    }
}
