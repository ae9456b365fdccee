use phonebook_core::storage::Directory;

use super::NOT_FOUND;
use crate::app::AppContext;
use crate::helpers::{confirm, prompt_full_name};

pub const DELETED: &str = "Contact deleted.";
pub const CANCELLED: &str = "Deletion cancelled.";

pub fn handle_delete(ctx: &mut AppContext, directory: &mut Directory) -> anyhow::Result<()> {
    let Some(key) = prompt_full_name(ctx)? else {
        return Ok(());
    };
    if !directory.contains_key(&key) {
        ctx.info(NOT_FOUND);
        return Ok(());
    }

    if confirm(ctx, &format!("Delete {}?", key))? {
        directory.remove(&key);
        tracing::info!(key = %key, "contact deleted");
        ctx.success(DELETED);
    } else {
        ctx.info(CANCELLED);
    }
    Ok(())
}
