use phonebook_core::storage::Directory;

use crate::app::AppContext;
use crate::ui::render::contact_listing;

pub const EMPTY: &str = "The phonebook is empty.";

pub fn handle_list(ctx: &mut AppContext, directory: &mut Directory) -> anyhow::Result<()> {
    if directory.is_empty() {
        ctx.info(EMPTY);
        return Ok(());
    }
    let contacts: Vec<_> = directory.iter().collect();
    let lines = contact_listing(ctx.ui(), &contacts);
    ctx.say_all(&lines);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{run, sample};

    #[test]
    fn test_list_in_insertion_order() {
        let mut dir = sample();
        let console = run(&mut dir, &[], handle_list);
        assert_eq!(
            console.transcript,
            vec![
                "John Smith: Phone: 89991234567, Birth date: 01.01.2000",
                "Ann Lee: Phone: 89990000000, Birth date: -",
            ]
        );
    }

    #[test]
    fn test_list_empty() {
        let mut dir = Directory::new();
        let console = run(&mut dir, &[], handle_list);
        assert_eq!(console.transcript, vec![EMPTY]);
    }
}
