//! Character entities

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Position of a character within its catalog.
///
/// Candidate sets are ordered collections of these, so they always stay a
/// subsequence of the catalog they were drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(pub usize);

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A raw character record as it appears in a catalog source.
///
/// ```json
/// {"name": "Sherlock Holmes", "attributes": {"is_fictional": "yes"}}
/// ```
///
/// Records are unvalidated; [`Catalog::load`](super::Catalog::load) turns
/// them into [`Character`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
}

impl CharacterRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(attribute.into(), value.into());
        self
    }
}

/// A validated, immutable character (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    name: String,
    attributes: BTreeMap<String, String>,
}

impl Character {
    pub(crate) fn from_record(record: CharacterRecord) -> Self {
        Self {
            name: record.name,
            attributes: record.attributes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Stored value for an attribute, `None` if the character lacks it
    pub fn value(&self, attribute: &str) -> Option<&str> {
        self.attributes.get(attribute).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = CharacterRecord::new("Ada Lovelace")
            .with_attribute("is_real", "yes")
            .with_attribute("is_alive", "no");

        assert_eq!(record.name, "Ada Lovelace");
        assert_eq!(record.attributes.len(), 2);
    }

    #[test]
    fn test_character_value_lookup() {
        let character =
            Character::from_record(CharacterRecord::new("Ada").with_attribute("is_real", "yes"));

        assert_eq!(character.value("is_real"), Some("yes"));
        assert_eq!(character.value("can_fly"), None);
    }

    #[test]
    fn test_record_requires_attributes_field() {
        let result: Result<CharacterRecord, _> = serde_json::from_str(r#"{"name": "Ada"}"#);
        assert!(result.is_err());
    }
}
