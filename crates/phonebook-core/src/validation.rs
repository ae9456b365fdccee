//! Field validation for contact records.
//!
//! Every validator takes the raw text a user typed and either returns the
//! normalized value that gets stored or a [`PhonebookError`] whose message is
//! shown back to the user.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PhonebookError, Result};

/// Storage and display format for birth dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Message returned by [`calculate_age`] when no birth date is stored.
pub const AGE_NOT_SPECIFIED: &str = "Birth date not specified.";

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][A-Za-z0-9\s]*$").expect("name pattern is valid")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^8[0-9]{10}$").expect("phone pattern is valid"));

// chrono's %Y also takes short years; the year must be four digits.
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$").expect("date pattern is valid")
});

/// Trim and capitalize: first character upper case, the rest lower case.
pub fn normalize_name(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Normalize a first or last name and check it against the name pattern.
pub fn validate_name(raw: &str) -> Result<String> {
    let name = normalize_name(raw);
    if NAME_RE.is_match(&name) {
        Ok(name)
    } else {
        Err(PhonebookError::InvalidName)
    }
}

/// Normalize a phone number to the 11-digit `8XXXXXXXXXX` form.
///
/// A leading `+7` country code is rewritten to `8`.
pub fn validate_phone(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let phone = match trimmed.strip_prefix("+7") {
        Some(rest) => format!("8{}", rest),
        None => trimmed.to_string(),
    };
    if PHONE_RE.is_match(&phone) {
        Ok(phone)
    } else {
        Err(PhonebookError::InvalidPhone)
    }
}

/// Validate a birth date against the current local time.
///
/// Empty input means "not provided" and yields `Ok(None)`.
pub fn validate_date(raw: &str) -> Result<Option<String>> {
    validate_date_at(raw, Local::now().naive_local())
}

/// Validate a birth date against an explicit clock reading.
///
/// The date must parse as `DD.MM.YYYY` and its midnight must be strictly
/// earlier than `now`. The returned string is zero-padded.
pub fn validate_date_at(raw: &str, now: NaiveDateTime) -> Result<Option<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let date = parse_date(trimmed)?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or(PhonebookError::InvalidDate)?;
    if midnight >= now {
        return Err(PhonebookError::InvalidDate);
    }
    Ok(Some(date.format(DATE_FORMAT).to_string()))
}

/// Parse a stored or typed `DD.MM.YYYY` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if !DATE_RE.is_match(trimmed) {
        return Err(PhonebookError::InvalidDate);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| PhonebookError::InvalidDate)
}

/// Whole years between `birth` and `today`, one less if this year's
/// birthday has not come yet.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Describe the age for a stored birth date, as of today.
pub fn calculate_age(birth_date: Option<&str>) -> Result<String> {
    calculate_age_on(birth_date, Local::now().date_naive())
}

/// Describe the age for a stored birth date, as of `today`.
pub fn calculate_age_on(birth_date: Option<&str>, today: NaiveDate) -> Result<String> {
    match birth_date {
        None => Ok(AGE_NOT_SPECIFIED.to_string()),
        Some(value) => {
            let birth = parse_date(value)?;
            Ok(format!("{} years", age_on(birth, today)))
        }
    }
}
