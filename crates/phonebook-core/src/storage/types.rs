//! Core data types for the storage layer.

use serde::{Deserialize, Serialize};

/// Marker written to the phonebook file when no birth date was given.
pub const UNSET_BIRTH_DATE: &str = "-";

/// A single phonebook record.
///
/// Fields are already normalized by [`crate::validation`] when a contact is
/// built from user input. The serialized labels double as display labels;
/// the Russian aliases let older phonebook files load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "Name", alias = "Имя")]
    pub first_name: String,

    #[serde(rename = "Surname", alias = "Фамилия")]
    pub last_name: String,

    #[serde(rename = "Phone", alias = "Телефон")]
    pub phone: String,

    /// `None` when the birth date was left empty
    #[serde(
        rename = "Birth date",
        alias = "Дата рождения",
        default,
        with = "birth_date_field"
    )]
    pub birth_date: Option<String>,
}

impl Contact {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        birth_date: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            birth_date,
        }
    }

    /// Directory key for this contact: `"First Last"`.
    pub fn key(&self) -> String {
        contact_key(&self.first_name, &self.last_name)
    }

    /// Birth date as stored on disk, `-` when unset.
    pub fn birth_date_or_unset(&self) -> &str {
        self.birth_date.as_deref().unwrap_or(UNSET_BIRTH_DATE)
    }
}

/// Build the directory key from a first and last name.
pub fn contact_key(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name)
}

mod birth_date_field {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::UNSET_BIRTH_DATE;

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or(UNSET_BIRTH_DATE))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.filter(|value| !value.is_empty() && value != UNSET_BIRTH_DATE))
    }
}
