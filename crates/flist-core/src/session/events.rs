//! Notifications emitted on every session snapshot change.

use super::SessionPhase;
use crate::types::{ItemCollections, Profile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    PhaseChanged(SessionPhase),
    /// Profile replaced (adopted, edited or reset)
    ProfileChanged(Profile),
    /// Both collections replaced wholesale
    ItemsChanged(ItemCollections),
    /// A background remote call failed; `notice` is shown to the user
    Error { notice: String },
}
