//! The two named item collections, stored together as `userItems/{uid}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Item;
use crate::error::FlistResult;
use crate::store::{Document, DocumentSnapshot};

const ZIPS_FIELD: &str = "zipsItems";
const WISHLIST_FIELD: &str = "wishlistItems";

/// Which collection a tab shows and new items append to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    /// Items the user owns
    #[default]
    Zips,
    /// Items the user wants
    Wishlist,
}

impl CollectionKind {
    pub fn label(&self) -> &'static str {
        match self {
            CollectionKind::Zips => "Zips",
            CollectionKind::Wishlist => "Wishlist",
        }
    }

    /// Placeholder shown when the collection is empty
    pub fn empty_prompt(&self) -> &'static str {
        match self {
            CollectionKind::Zips => "Zips is empty",
            CollectionKind::Wishlist => "Your wishlist is empty",
        }
    }

    pub fn all() -> &'static [CollectionKind] {
        &[CollectionKind::Zips, CollectionKind::Wishlist]
    }
}

/// Snapshot of both collections. Always written as a pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCollections {
    #[serde(rename = "zipsItems", default)]
    pub zips: Vec<Item>,
    #[serde(rename = "wishlistItems", default)]
    pub wishlist: Vec<Item>,
}

impl ItemCollections {
    pub fn get(&self, kind: CollectionKind) -> &[Item] {
        match kind {
            CollectionKind::Zips => &self.zips,
            CollectionKind::Wishlist => &self.wishlist,
        }
    }

    pub fn push(&mut self, kind: CollectionKind, item: Item) {
        match kind {
            CollectionKind::Zips => self.zips.push(item),
            CollectionKind::Wishlist => self.wishlist.push(item),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.zips.is_empty() && self.wishlist.is_empty()
    }

    /// Decode a subscription delivery. An absent document is the empty pair;
    /// a field that is missing or does not decode is an empty collection.
    pub fn from_snapshot(snapshot: &DocumentSnapshot) -> Self {
        match snapshot {
            DocumentSnapshot::Absent => Self::default(),
            DocumentSnapshot::Present(doc) => Self::from_document(doc),
        }
    }

    pub fn from_document(doc: &Document) -> Self {
        Self {
            zips: decode_field(doc, ZIPS_FIELD),
            wishlist: decode_field(doc, WISHLIST_FIELD),
        }
    }

    /// Both collections as one document
    pub fn to_document(&self) -> FlistResult<Document> {
        let mut doc = Document::new();
        doc.insert(ZIPS_FIELD.to_string(), serde_json::to_value(&self.zips)?);
        doc.insert(WISHLIST_FIELD.to_string(), serde_json::to_value(&self.wishlist)?);
        Ok(doc)
    }
}

fn decode_field(doc: &Document, field: &str) -> Vec<Item> {
    match doc.get(field) {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            tracing::warn!(field, error = %e, "Undecodable item collection, treating as empty");
            Vec::new()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageRef;
    use serde_json::json;

    fn item(name: &str) -> Item {
        Item::new("Acme", name, "1,000won", ImageRef::empty())
    }

    #[test]
    fn test_push_targets_kind() {
        let mut items = ItemCollections::default();
        items.push(CollectionKind::Wishlist, item("Boots"));
        assert!(items.zips.is_empty());
        assert_eq!(items.get(CollectionKind::Wishlist).len(), 1);
    }

    #[test]
    fn test_absent_snapshot_is_empty() {
        let items = ItemCollections::from_snapshot(&DocumentSnapshot::Absent);
        assert!(items.is_empty());
    }

    #[test]
    fn test_document_carries_both_fields() {
        let mut items = ItemCollections::default();
        items.push(CollectionKind::Zips, item("Tee"));
        let doc = items.to_document().unwrap();
        assert_eq!(doc["zipsItems"].as_array().unwrap().len(), 1);
        assert_eq!(doc["wishlistItems"], json!([]));
    }

    #[test]
    fn test_bad_field_decodes_as_empty() {
        let doc = match json!({
            "zipsItems": "not a list",
            "wishlistItems": [{ "id": "1", "brand": "Acme", "name": "Cap", "price": "5,000won", "image": "" }]
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let items = ItemCollections::from_document(&doc);
        assert!(items.zips.is_empty());
        assert_eq!(items.wishlist[0].name, "Cap");
    }

    #[test]
    fn test_empty_prompts_differ_per_tab() {
        assert_ne!(
            CollectionKind::Zips.empty_prompt(),
            CollectionKind::Wishlist.empty_prompt()
        );
    }
}
