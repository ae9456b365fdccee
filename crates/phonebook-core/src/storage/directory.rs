//! The in-memory phonebook: an insertion-ordered map from key to contact.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::filter::ContactFilter;
use super::types::Contact;

/// Ordered mapping from `"First Last"` keys to contacts.
///
/// Lookups are linear scans. Overwriting a key keeps its position; a new
/// key is appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<(String, Contact)>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&Contact> {
        self.position(key).map(|index| &self.entries[index].1)
    }

    /// Iterate `(key, contact)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Contact)> {
        self.entries
            .iter()
            .map(|(key, contact)| (key.as_str(), contact))
    }

    /// Store `contact` under its own key, returning whatever was there.
    pub fn insert(&mut self, contact: Contact) -> Option<Contact> {
        let key = contact.key();
        self.insert_raw(key, contact)
    }

    /// Remove and return the contact at `key`.
    pub fn remove(&mut self, key: &str) -> Option<Contact> {
        let index = self.position(key)?;
        Some(self.entries.remove(index).1)
    }

    /// Drop `old_key` and store `contact` under its (possibly new) key.
    ///
    /// Returns `None` without touching the directory when `old_key` is absent.
    pub fn replace(&mut self, old_key: &str, contact: Contact) -> Option<Contact> {
        let previous = self.remove(old_key)?;
        self.insert(contact);
        Some(previous)
    }

    /// Contacts matching every criterion in `filter`, in directory order.
    ///
    /// An empty filter matches nothing.
    pub fn find(&self, filter: &ContactFilter) -> Vec<(&str, &Contact)> {
        if filter.is_empty() {
            return Vec::new();
        }
        self.iter()
            .filter(|(_, contact)| filter.matches(contact))
            .collect()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    fn insert_raw(&mut self, key: String, contact: Contact) -> Option<Contact> {
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, contact)),
            None => {
                self.entries.push((key, contact));
                None
            }
        }
    }
}

impl FromIterator<Contact> for Directory {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        let mut directory = Directory::new();
        for contact in iter {
            directory.insert(contact);
        }
        directory
    }
}

impl Serialize for Directory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, contact) in &self.entries {
            map.serialize_entry(key, contact)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Directory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DirectoryVisitor)
    }
}

struct DirectoryVisitor;

impl<'de> Visitor<'de> for DirectoryVisitor {
    type Value = Directory;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping \"First Last\" keys to contacts")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        // Keys are kept as written; a later duplicate wins.
        let mut directory = Directory::new();
        while let Some((key, contact)) = access.next_entry::<String, Contact>()? {
            directory.insert_raw(key, contact);
        }
        Ok(directory)
    }
}
