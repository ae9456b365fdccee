//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{ContentArrangement, Table as ComfyTable};

use phonebook_core::storage::Contact;

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// Render a header line, bold in pretty mode.
pub fn header(ctx: &UiContext, title: &str) -> String {
    if ctx.mode.is_pretty() {
        styled(title, styles::bold(), ctx.color)
    } else {
        title.to_string()
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a status message.
///
/// Pretty mode: badge followed by the message
/// Plain mode: the message alone
pub fn notice(ctx: &UiContext, kind: Badge, message: &str) -> String {
    if ctx.mode.is_pretty() {
        badge(ctx, kind, message)
    } else {
        message.to_string()
    }
}

/// Render a key-value pair.
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
    format!("{} {}", styled_key, value)
}

/// One-line summary of a contact, as used in plain listings.
pub fn contact_line(key: &str, contact: &Contact) -> String {
    format!(
        "{}: Phone: {}, Birth date: {}",
        key,
        contact.phone,
        contact.birth_date_or_unset()
    )
}

/// Render a set of contacts.
///
/// Pretty mode: table with Name, Phone, Birth date columns
/// Plain mode: one `contact_line` per contact
pub fn contact_listing(ctx: &UiContext, contacts: &[(&str, &Contact)]) -> Vec<String> {
    if !ctx.mode.is_pretty() {
        return contacts
            .iter()
            .map(|(key, contact)| contact_line(key, contact))
            .collect();
    }

    let mut table = ComfyTable::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(ctx.width.min(u16::MAX as usize) as u16);
    table.set_header(vec!["Name", "Phone", "Birth date"]);
    for (key, contact) in contacts {
        table.add_row(vec![
            key.to_string(),
            contact.phone.clone(),
            contact.birth_date_or_unset().to_string(),
        ]);
    }
    vec![table.to_string()]
}

/// Key-value block with every field of a contact.
pub fn contact_details(ctx: &UiContext, contact: &Contact) -> Vec<String> {
    vec![
        kv(ctx, "Name", &contact.first_name),
        kv(ctx, "Surname", &contact.last_name),
        kv(ctx, "Phone", &contact.phone),
        kv(ctx, "Birth date", contact.birth_date_or_unset()),
    ]
}
