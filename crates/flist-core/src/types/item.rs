//! Catalog item record.

use serde::{Deserialize, Serialize};

use super::{ImageRef, ItemId};

/// One clothing item in either collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub brand: String,
    pub name: String,
    /// Formatted price, e.g. "52,000won"
    pub price: String,
    #[serde(default)]
    pub image: ImageRef,
}

impl Item {
    pub fn new(
        brand: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
        image: ImageRef,
    ) -> Self {
        Self {
            id: ItemId::generate(),
            brand: brand.into(),
            name: name.into(),
            price: price.into(),
            image,
        }
    }
}
