//! Character catalog domain.
//!
//! - [`Catalog`] - the immutable, ordered set of characters
//! - [`entities::Character`] - a single validated character
//! - [`candidates::CandidateSet`] - the subsequence still in play
//! - [`error::CatalogLoadError`] - why a catalog could not be loaded
//!
//! The catalog is loaded once at startup and shared read-only by every
//! session. Its attribute domain (the union of attribute names over all
//! characters) is computed at load time and cached.

pub mod candidates;
pub mod entities;
pub mod error;

pub use candidates::CandidateSet;
pub use entities::{Character, CharacterId, CharacterRecord};
pub use error::CatalogLoadError;

use std::collections::BTreeSet;

/// The immutable character catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    characters: Vec<Character>,
    domain: BTreeSet<String>,
}

impl Catalog {
    /// Validate raw records and build the catalog.
    ///
    /// Every record needs a non-blank name. An empty record list is a valid
    /// (if useless) catalog.
    pub fn load(
        records: impl IntoIterator<Item = CharacterRecord>,
    ) -> Result<Self, CatalogLoadError> {
        let mut characters = Vec::new();
        let mut domain = BTreeSet::new();

        for (index, record) in records.into_iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(CatalogLoadError::EmptyName { index });
            }
            domain.extend(record.attributes.keys().cloned());
            characters.push(Character::from_record(record));
        }

        Ok(Self { characters, domain })
    }

    /// Parse a JSON array of `{"name", "attributes"}` records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogLoadError> {
        let records: Vec<CharacterRecord> =
            serde_json::from_str(json).map_err(|e| CatalogLoadError::Malformed(e.to_string()))?;
        Self::load(records)
    }

    /// Union of attribute names across all characters, sorted.
    pub fn attribute_domain(&self) -> &BTreeSet<String> {
        &self.domain
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(id.0)
    }

    /// Stored value of `attribute` for the character at `id`
    pub fn value(&self, id: CharacterId, attribute: &str) -> Option<&str> {
        self.get(id).and_then(|c| c.value(attribute))
    }

    /// Iterate characters in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (CharacterId, &Character)> {
        self.characters
            .iter()
            .enumerate()
            .map(|(i, c)| (CharacterId(i), c))
    }

    pub fn ids(&self) -> impl Iterator<Item = CharacterId> + '_ {
        (0..self.characters.len()).map(CharacterId)
    }
}
