//! Prompting helpers shared by the command handlers.
//!
//! - Numbered sub-menus and yes/no confirmation (`choice`)
//! - Guarded field prompts that retry or abandon on bad input (`fields`)

mod choice;
mod fields;

pub use choice::{ask_choice, confirm};
pub use fields::{
    prompt_birth_date, prompt_contact, prompt_first_name, prompt_full_name, prompt_last_name,
    prompt_phone,
};
