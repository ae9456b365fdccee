//! What to do when Add hits a name that is already taken.

use phonebook_core::storage::Directory;

use super::update::handle_update;
use crate::app::AppContext;
use crate::helpers::{ask_choice, prompt_contact};

pub const DUPLICATE: &str = "A record with this name already exists.";
pub const SECOND_ADDED: &str = "New record added.";

const EDIT_EXISTING: usize = 0;
const ENTER_NEW: usize = 1;

/// Offer to edit the existing record, enter a different record, or cancel.
///
/// A record entered through the second option is stored under the key of
/// its own names without another duplicate check, replacing whatever
/// record already sits at that key.
pub fn resolve_duplicate(
    ctx: &mut AppContext,
    directory: &mut Directory,
    key: &str,
) -> anyhow::Result<()> {
    ctx.warn(DUPLICATE);
    let choice = ask_choice(
        ctx,
        &[
            "Edit the existing record",
            "Enter new data for the record being added",
            "Return to command selection",
        ],
    )?;

    match choice {
        Some(EDIT_EXISTING) => handle_update(ctx, directory, Some(key)),
        Some(ENTER_NEW) => {
            ctx.say("Enter the data for the new record:");
            let Some(contact) = prompt_contact(ctx)? else {
                return Ok(());
            };
            let new_key = contact.key();
            if directory.insert(contact).is_some() {
                tracing::warn!(key = %new_key, "existing record replaced by new entry");
            } else {
                tracing::info!(key = %new_key, "contact added");
            }
            ctx.success(SECOND_ADDED);
            Ok(())
        }
        _ => Ok(()),
    }
}
