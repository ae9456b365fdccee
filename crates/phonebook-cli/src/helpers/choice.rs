//! Numbered choices and confirmation prompts.

use crate::app::AppContext;

pub const INVALID_CHOICE: &str = "Invalid choice. Try again.";

/// Show numbered `options` until one is picked.
///
/// Returns the zero-based index, or `None` if input runs out.
pub fn ask_choice(ctx: &mut AppContext, options: &[&str]) -> anyhow::Result<Option<usize>> {
    loop {
        for (index, option) in options.iter().enumerate() {
            ctx.say(&format!("{}. {}", index + 1, option));
        }
        let Some(answer) = ctx.read_line("Your choice")? else {
            return Ok(None);
        };
        match answer.trim().parse::<usize>() {
            Ok(number) if (1..=options.len()).contains(&number) => return Ok(Some(number - 1)),
            _ => ctx.warn(INVALID_CHOICE),
        }
    }
}

/// Ask a yes/no question; only `yes` or `y` (any case) counts as yes.
pub fn confirm(ctx: &mut AppContext, question: &str) -> anyhow::Result<bool> {
    let answer = ctx.read_line(&format!("{} (yes/no)", question))?;
    Ok(matches!(
        answer.map(|a| a.trim().to_lowercase()).as_deref(),
        Some("yes") | Some("y")
    ))
}
