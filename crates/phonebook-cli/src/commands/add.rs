use phonebook_core::storage::{contact_key, Contact, Directory};

use super::conflict::resolve_duplicate;
use crate::app::AppContext;
use crate::helpers::{prompt_birth_date, prompt_first_name, prompt_last_name, prompt_phone};

pub const ADDED: &str = "Contact added.";

pub fn handle_add(ctx: &mut AppContext, directory: &mut Directory) -> anyhow::Result<()> {
    let Some(first_name) = prompt_first_name(ctx)? else {
        return Ok(());
    };
    let Some(last_name) = prompt_last_name(ctx)? else {
        return Ok(());
    };

    let key = contact_key(&first_name, &last_name);
    if directory.contains_key(&key) {
        return resolve_duplicate(ctx, directory, &key);
    }

    let Some(phone) = prompt_phone(ctx)? else {
        return Ok(());
    };
    let Some(birth_date) = prompt_birth_date(ctx)? else {
        return Ok(());
    };

    directory.insert(Contact::new(first_name, last_name, phone, birth_date));
    tracing::info!(key = %key, "contact added");
    ctx.success(ADDED);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::search::handle_search;
    use crate::commands::test_support::{run, sample};

    #[test]
    fn test_add_new_contact() {
        let mut dir = Directory::new();
        let console = run(
            &mut dir,
            &["john", "smith", "+79991234567", "01.01.2000"],
            handle_add,
        );
        assert!(console.saw(ADDED));
        assert_eq!(
            dir.get("John Smith"),
            Some(&Contact::new(
                "John",
                "Smith",
                "89991234567",
                Some("01.01.2000".to_string())
            ))
        );
    }

    #[test]
    fn test_add_then_search_returns_exactly_that_record() {
        let mut dir = sample();
        run(&mut dir, &["mary", "jones", "89995550000", "02.03.1985"], handle_add);
        let console = run(
            &mut dir,
            &["Mary", "Jones", "89995550000", "02.03.1985"],
            handle_search,
        );
        let hits: Vec<_> = console
            .transcript
            .iter()
            .filter(|l| l.contains("Phone:"))
            .collect();
        assert_eq!(hits, vec!["Mary Jones: Phone: 89995550000, Birth date: 02.03.1985"]);
    }

    #[test]
    fn test_add_without_birth_date() {
        let mut dir = Directory::new();
        run(&mut dir, &["ann", "lee", "89990000000", ""], handle_add);
        assert_eq!(dir.get("Ann Lee").unwrap().birth_date, None);
    }

    #[test]
    fn test_abandon_during_add_inserts_nothing() {
        let mut dir = Directory::new();
        let console = run(
            &mut dir,
            &["ann", "lee", "89990000000", "31.12.2999", "2"],
            handle_add,
        );
        assert!(dir.is_empty());
        assert!(!console.saw(ADDED));
    }

    #[test]
    fn test_duplicate_then_cancel_leaves_directory_unchanged() {
        let mut dir = sample();
        let before = dir.clone();
        let console = run(&mut dir, &["john", "smith", "3"], handle_add);
        assert_eq!(dir, before);
        assert!(console.saw("A record with this name already exists."));
    }
}
