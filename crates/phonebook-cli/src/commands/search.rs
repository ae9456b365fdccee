//! Search by any combination of first name, last name, phone, birth date.

use phonebook_core::storage::{ContactFilter, Directory};

use crate::app::AppContext;
use crate::ui::render::contact_listing;

pub const NO_CRITERIA: &str = "No search criteria given.";
pub const NO_MATCHES: &str = "No matching records found.";

pub fn handle_search(ctx: &mut AppContext, directory: &mut Directory) -> anyhow::Result<()> {
    ctx.say("Enter search values. Leave a field empty to skip it.");
    let first_name = ctx.read_line("First name")?.unwrap_or_default();
    let last_name = ctx.read_line("Last name")?.unwrap_or_default();
    let phone = ctx.read_line("Phone number")?.unwrap_or_default();
    let birth_date = ctx.read_line("Birth date (DD.MM.YYYY)")?.unwrap_or_default();

    let filter = ContactFilter::from_inputs(&first_name, &last_name, &phone, &birth_date);
    if filter.is_empty() {
        ctx.warn(NO_CRITERIA);
        return Ok(());
    }

    let matches = directory.find(&filter);
    tracing::debug!(matches = matches.len(), "search finished");
    if matches.is_empty() {
        ctx.info(NO_MATCHES);
        return Ok(());
    }
    let lines = contact_listing(ctx.ui(), &matches);
    ctx.say_all(&lines);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{run, sample};

    #[test]
    fn test_search_all_fields_finds_one() {
        let mut dir = sample();
        let console = run(
            &mut dir,
            &["JOHN", "smith", "89991234567", "01.01.2000"],
            handle_search,
        );
        assert!(console.saw("John Smith: Phone: 89991234567, Birth date: 01.01.2000"));
        assert!(!console.saw("Ann Lee"));
    }

    #[test]
    fn test_search_without_criteria() {
        let mut dir = sample();
        let console = run(&mut dir, &["", " ", "", ""], handle_search);
        assert!(console.saw(NO_CRITERIA));
        assert!(!console.saw("Phone:"));
    }

    #[test]
    fn test_search_no_matches() {
        let mut dir = sample();
        let console = run(&mut dir, &["", "", "80000000000", ""], handle_search);
        assert!(console.saw(NO_MATCHES));
    }

    #[test]
    fn test_search_dash_finds_missing_birth_dates() {
        let mut dir = sample();
        let console = run(&mut dir, &["", "", "", "-"], handle_search);
        assert!(console.saw("Ann Lee"));
        assert!(!console.saw("John Smith"));
    }
}
