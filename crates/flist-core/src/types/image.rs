//! Image Reference Type - embeddable image for profiles, items and boards
//!
//! Supports the two forms the catalog stores: data URIs produced from local
//! files and plain URLs typed into the add-item form.

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Image reference stored as a single string field.
///
/// An empty reference means "no image"; the view renders an empty `src`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

/// What kind of reference an [`ImageRef`] holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Empty,
    /// Base64 data URI, "data:image/png;base64,..."
    DataUri,
    Url,
}

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Encode raw image bytes as a data URI with the given mime type
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self(format!("data:{mime};base64,{encoded}"))
    }

    /// Encode PNG bytes as a data URI
    pub fn from_png_bytes(bytes: &[u8]) -> Self {
        Self::from_bytes("image/png", bytes)
    }

    pub fn kind(&self) -> ImageKind {
        if self.0.is_empty() {
            ImageKind::Empty
        } else if self.0.starts_with("data:") {
            ImageKind::DataUri
        } else {
            ImageKind::Url
        }
    }

    /// Check if image data is available
    pub fn is_available(&self) -> bool {
        !self.0.trim().is_empty()
    }

    /// Value for an `img` element's `src`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
