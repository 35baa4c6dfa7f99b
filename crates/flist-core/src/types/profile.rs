//! User Profile Type - nickname, description and photo shown atop the catalog
//!
//! Stored as the `users/{uid}` document with fields `nickname`,
//! `description` and `profileImage`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ImageRef, UserIdentity};
use crate::error::FlistResult;
use crate::store::Document;

/// Nickname shown while signed out
pub const DEFAULT_NICKNAME: &str = "@nickname";

/// Description placeholder for new and signed-out profiles
pub const DEFAULT_DESCRIPTION: &str =
    "Want a closet of your own? Write a description of your closet!";

/// Nickname prefix, stripped while editing and re-applied on commit
pub const NICKNAME_PREFIX: &str = "@";

/// Profile shown above the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Always carries the "@" prefix
    pub nickname: String,
    /// At most 200 characters
    pub description: String,
    pub profile_image: ImageRef,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            nickname: DEFAULT_NICKNAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            profile_image: ImageRef::empty(),
        }
    }
}

/// A single editable profile field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Nickname,
    Description,
    ProfileImage,
}

impl ProfileField {
    /// Field name inside the profile document
    pub fn wire_name(&self) -> &'static str {
        match self {
            ProfileField::Nickname => "nickname",
            ProfileField::Description => "description",
            ProfileField::ProfileImage => "profileImage",
        }
    }
}

impl Profile {
    /// Profile provisioned on first sign-in
    pub fn provisioned_for(identity: &UserIdentity) -> Self {
        Self {
            nickname: default_nickname(identity),
            description: DEFAULT_DESCRIPTION.to_string(),
            profile_image: identity
                .photo_url()
                .map(ImageRef::from)
                .unwrap_or_default(),
        }
    }

    /// Adopt a stored profile, falling back per field to the provisioned
    /// defaults for anything missing or blank.
    pub fn from_document(doc: &Document, identity: &UserIdentity) -> Self {
        let fallback = Self::provisioned_for(identity);
        let field = |field: ProfileField| stored_text(doc, field, identity);

        Self {
            nickname: field(ProfileField::Nickname).unwrap_or(fallback.nickname),
            description: field(ProfileField::Description).unwrap_or(fallback.description),
            profile_image: field(ProfileField::ProfileImage)
                .map(ImageRef::from)
                .unwrap_or(fallback.profile_image),
        }
    }

    /// Full profile as a document
    pub fn to_document(&self) -> FlistResult<Document> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Document::new()),
        }
    }

    /// Replace one field locally
    pub fn set_field(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Nickname => self.nickname = value,
            ProfileField::Description => self.description = value,
            ProfileField::ProfileImage => self.profile_image = ImageRef::from(value),
        }
    }

    /// Partial document carrying only `field`, for a merge-write
    pub fn field_document(field: ProfileField, value: &str) -> Document {
        let mut doc = Document::new();
        doc.insert(field.wire_name().to_string(), Value::String(value.to_string()));
        doc
    }
}

/// Non-blank text stored under `field`; anything else counts as missing
fn stored_text(doc: &Document, field: ProfileField, identity: &UserIdentity) -> Option<String> {
    match doc.get(field.wire_name()) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) if text.is_empty() => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => {
            tracing::warn!(uid = %identity.uid, field = field.wire_name(), value = %other, "Malformed profile field, using default");
            None
        }
    }
}

fn default_nickname(identity: &UserIdentity) -> String {
    format!(
        "{NICKNAME_PREFIX}{}",
        identity.display_name().unwrap_or("user")
    )
}
