//! Session phase and the snapshot rendered by the views.

use std::fmt;

use crate::types::{ItemCollections, Profile, UserIdentity};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Anonymous,
    /// Identity observed, profile not yet adopted
    Loading,
    Active,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::Anonymous => write!(f, "Anonymous"),
            SessionPhase::Loading => write!(f, "Loading"),
            SessionPhase::Active => write!(f, "Active"),
        }
    }
}

/// Everything the profile header and catalog display.
///
/// The default value is the signed-out state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub identity: Option<UserIdentity>,
    pub profile: Profile,
    pub items: ItemCollections,
}

impl SessionSnapshot {
    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }

    /// Editing and adding items are allowed
    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    pub fn uid(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.uid.as_str())
    }
}
