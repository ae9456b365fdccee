//! Guarded field prompts.
//!
//! Each prompt loops until the value validates. After a rejection the user
//! picks between entering the field again and going back to the main menu;
//! the latter (or running out of input) yields `Ok(None)`, which every
//! caller propagates without touching the directory.

use phonebook_core::storage::{contact_key, Contact};
use phonebook_core::validation::{validate_date, validate_name, validate_phone};

use super::choice::ask_choice;
use crate::app::AppContext;

fn guarded<T>(
    ctx: &mut AppContext,
    prompt: &str,
    field: &str,
    validate: impl Fn(&str) -> phonebook_core::Result<T>,
) -> anyhow::Result<Option<T>> {
    loop {
        let Some(raw) = ctx.read_line(prompt)? else {
            return Ok(None);
        };
        match validate(&raw) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => {
                ctx.error(&err.to_string());
                let retry = format!("Enter {} again", field);
                match ask_choice(ctx, &[retry.as_str(), "Return to main menu"])? {
                    Some(0) => continue,
                    _ => return Ok(None),
                }
            }
        }
    }
}

pub fn prompt_first_name(ctx: &mut AppContext) -> anyhow::Result<Option<String>> {
    guarded(ctx, "First name", "the first name", validate_name)
}

pub fn prompt_last_name(ctx: &mut AppContext) -> anyhow::Result<Option<String>> {
    guarded(ctx, "Last name", "the last name", validate_name)
}

pub fn prompt_phone(ctx: &mut AppContext) -> anyhow::Result<Option<String>> {
    guarded(ctx, "Phone number", "the phone number", validate_phone)
}

/// Birth date prompt; `Some(None)` means the user left it empty.
pub fn prompt_birth_date(ctx: &mut AppContext) -> anyhow::Result<Option<Option<String>>> {
    guarded(
        ctx,
        "Birth date (DD.MM.YYYY) or leave empty",
        "the birth date",
        |raw| {
            if raw.is_empty() {
                Ok(None)
            } else {
                validate_date(raw)
            }
        },
    )
}

/// First and last name, returned as the directory key.
pub fn prompt_full_name(ctx: &mut AppContext) -> anyhow::Result<Option<String>> {
    let Some(first) = prompt_first_name(ctx)? else {
        return Ok(None);
    };
    let Some(last) = prompt_last_name(ctx)? else {
        return Ok(None);
    };
    Ok(Some(contact_key(&first, &last)))
}

/// All four fields of a contact.
pub fn prompt_contact(ctx: &mut AppContext) -> anyhow::Result<Option<Contact>> {
    let Some(first) = prompt_first_name(ctx)? else {
        return Ok(None);
    };
    let Some(last) = prompt_last_name(ctx)? else {
        return Ok(None);
    };
    let Some(phone) = prompt_phone(ctx)? else {
        return Ok(None);
    };
    let Some(birth_date) = prompt_birth_date(ctx)? else {
        return Ok(None);
    };
    Ok(Some(Contact::new(first, last, phone, birth_date)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{ScriptedConsole, UiContext};

    fn run<T>(
        answers: &[&str],
        prompt: impl FnOnce(&mut AppContext) -> anyhow::Result<T>,
    ) -> (T, ScriptedConsole) {
        let mut console = ScriptedConsole::new(answers);
        let result = {
            let mut ctx = AppContext::new(&mut console, UiContext::plain());
            prompt(&mut ctx).unwrap()
        };
        (result, console)
    }

    #[test]
    fn test_valid_name_first_try() {
        let (name, console) = run(&["  john "], prompt_first_name);
        assert_eq!(name.as_deref(), Some("John"));
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn test_retry_after_invalid_name() {
        let (name, console) = run(&["j0hn!", "1", "jane"], prompt_first_name);
        assert_eq!(name.as_deref(), Some("Jane"));
        assert!(console.saw("Names may only contain"));
        assert!(console.saw("1. Enter the first name again"));
    }

    #[test]
    fn test_abandon_after_invalid_phone() {
        let (phone, _) = run(&["123", "2", "89991234567"], prompt_phone);
        assert_eq!(phone, None);
    }

    #[test]
    fn test_invalid_sub_choice_is_reasked() {
        let (phone, console) = run(&["123", "x", "1", "+79991234567"], prompt_phone);
        assert_eq!(phone.as_deref(), Some("89991234567"));
        assert!(console.saw("Invalid choice. Try again."));
    }

    #[test]
    fn test_end_of_input_abandons() {
        let (name, _) = run(&[], prompt_last_name);
        assert_eq!(name, None);
    }

    #[test]
    fn test_empty_birth_date_is_unset() {
        let (date, _) = run(&[""], prompt_birth_date);
        assert_eq!(date, Some(None));
    }

    #[test]
    fn test_birth_date_validated() {
        let (date, console) = run(&["99.99.2000", "1", "5.3.1990"], prompt_birth_date);
        assert_eq!(date, Some(Some("05.03.1990".to_string())));
        assert!(console.saw("Invalid date!"));
    }

    #[test]
    fn test_prompt_contact_abandon_midway() {
        let (contact, console) = run(&["john", "smith", "bad", "2", "unused"], prompt_contact);
        assert_eq!(contact, None);
        assert_eq!(console.remaining(), 1);
    }

    #[test]
    fn test_prompt_full_name_builds_key() {
        let (key, _) = run(&["john", "SMITH"], prompt_full_name);
        assert_eq!(key.as_deref(), Some("John Smith"));
    }
}
