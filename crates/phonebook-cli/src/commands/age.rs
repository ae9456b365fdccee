use phonebook_core::storage::Directory;
use phonebook_core::validation::calculate_age;

use super::NOT_FOUND;
use crate::app::AppContext;
use crate::helpers::prompt_full_name;

pub fn handle_age(ctx: &mut AppContext, directory: &mut Directory) -> anyhow::Result<()> {
    let Some(key) = prompt_full_name(ctx)? else {
        return Ok(());
    };
    let Some(contact) = directory.get(&key) else {
        ctx.info(NOT_FOUND);
        return Ok(());
    };

    match calculate_age(contact.birth_date.as_deref()) {
        Ok(age) => ctx.say(&age),
        Err(err) => {
            tracing::warn!(key = %key, "stored birth date does not parse");
            ctx.error(&err.to_string());
        }
    }
    Ok(())
}
