//! Search criteria for contacts.

use super::types::Contact;

/// Optional criteria; a contact matches when it satisfies every one given.
///
/// Names compare case-insensitively. Phone and birth date compare exactly
/// against the stored text, so a birth date of `-` finds contacts without
/// one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<String>,
}

impl ContactFilter {
    /// Build a filter from raw prompt answers; blank answers are skipped.
    pub fn from_inputs(first_name: &str, last_name: &str, phone: &str, birth_date: &str) -> Self {
        Self {
            first_name: non_blank(first_name),
            last_name: non_blank(last_name),
            phone: non_blank(phone),
            birth_date: non_blank(birth_date),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone.is_none()
            && self.birth_date.is_none()
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        let first_ok = self
            .first_name
            .as_deref()
            .map_or(true, |want| eq_ignore_case(&contact.first_name, want));
        let last_ok = self
            .last_name
            .as_deref()
            .map_or(true, |want| eq_ignore_case(&contact.last_name, want));
        let phone_ok = self
            .phone
            .as_deref()
            .map_or(true, |want| contact.phone == want);
        let date_ok = self
            .birth_date
            .as_deref()
            .map_or(true, |want| contact.birth_date_or_unset() == want);
        first_ok && last_ok && phone_ok && date_ok
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
