use phonebook_core::storage::Directory;

use super::NOT_FOUND;
use crate::app::AppContext;
use crate::helpers::{prompt_contact, prompt_full_name};
use crate::ui::render::contact_details;

pub const UPDATED: &str = "Contact updated.";

/// Replace every field of a record, asking which one when `key` is `None`.
///
/// The record is only touched once all four new values are in, so an
/// abandoned prompt leaves it as it was.
pub fn handle_update(
    ctx: &mut AppContext,
    directory: &mut Directory,
    key: Option<&str>,
) -> anyhow::Result<()> {
    let key = match key {
        Some(key) => key.to_string(),
        None => match prompt_full_name(ctx)? {
            Some(key) => key,
            None => return Ok(()),
        },
    };

    let Some(current) = directory.get(&key) else {
        ctx.info(NOT_FOUND);
        return Ok(());
    };
    ctx.say("Current data:");
    let details = contact_details(ctx.ui(), current);
    ctx.say_all(&details);

    let Some(contact) = prompt_contact(ctx)? else {
        return Ok(());
    };
    let new_key = contact.key();
    if new_key != key && directory.contains_key(&new_key) {
        tracing::warn!(key = %new_key, "update replaced another record");
    }
    directory.replace(&key, contact);
    tracing::info!(from = %key, to = %new_key, "contact updated");
    ctx.success(UPDATED);
    Ok(())
}
