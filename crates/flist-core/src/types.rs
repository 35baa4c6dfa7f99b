//! Core types for F-list

use serde::{Deserialize, Serialize};
use ulid::Ulid;

pub mod collections;
pub mod identity;
pub mod image;
pub mod item;
pub mod profile;

pub use collections::{CollectionKind, ItemCollections};
pub use identity::UserIdentity;
pub use image::{ImageKind, ImageRef};
pub use item::Item;
pub use profile::{Profile, ProfileField, DEFAULT_DESCRIPTION, DEFAULT_NICKNAME};

/// Unique identifier for a catalog item
///
/// Generated locally as a ULID (millisecond timestamp plus random bits) so two
/// items added in the same millisecond still get distinct ids. Stored as a
/// plain string; ids written by older clients are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new ItemId with current timestamp
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Wrap an id read from a stored document
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier for a photo pinned on the style board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhotoId(pub Ulid);

impl PhotoId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for PhotoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PhotoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "photo_{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ids_are_unique() {
        let a = ItemId::generate();
        let b = ItemId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_item_id_serializes_as_plain_string() {
        let id = ItemId::from_string("1718000000000");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1718000000000\"");
    }

    #[test]
    fn test_generated_item_id_is_ulid() {
        let id = ItemId::generate();
        assert!(Ulid::from_string(id.as_str()).is_ok());
    }
}
