//! Identity provider contract and the interactive sign-in flow.
//!
//! ```text
//! sign_in()
//!   ├── overlay (popup) ── ok ──────────────────────────▶ SignedIn(identity)
//!   │      ├── popup-blocked / closed-by-user / cancelled
//!   │      │        └── full-page handoff ──────────────▶ RedirectStarted
//!   │      ├── unauthorized-domain ─────────────────────▶ Err(UnauthorizedOrigin { hostname })
//!   │      └── anything else ───────────────────────────▶ Err(AuthInteractionFailed)
//!   └── check_pending_result() at start-up picks up a completed handoff
//! ```

use std::fmt;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::error::FlistResult;
use crate::types::UserIdentity;

mod flow;
mod local;
#[cfg(any(test, feature = "test-util"))]
mod scripted;

pub use flow::AuthFlow;
pub use local::{LocalAuthConfig, LocalAuthGateway};
#[cfg(any(test, feature = "test-util"))]
pub use scripted::{GatewayCall, ScriptedAuthGateway};

/// Stable error codes reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AuthErrorCode {
    PopupBlocked,
    PopupClosedByUser,
    CancelledPopupRequest,
    UnauthorizedDomain,
    /// Any other provider code, kept verbatim
    Other(String),
}

impl AuthErrorCode {
    pub fn parse(code: &str) -> Self {
        match code {
            "auth/popup-blocked" => AuthErrorCode::PopupBlocked,
            "auth/popup-closed-by-user" => AuthErrorCode::PopupClosedByUser,
            "auth/cancelled-popup-request" => AuthErrorCode::CancelledPopupRequest,
            "auth/unauthorized-domain" => AuthErrorCode::UnauthorizedDomain,
            other => AuthErrorCode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AuthErrorCode::PopupBlocked => "auth/popup-blocked",
            AuthErrorCode::PopupClosedByUser => "auth/popup-closed-by-user",
            AuthErrorCode::CancelledPopupRequest => "auth/cancelled-popup-request",
            AuthErrorCode::UnauthorizedDomain => "auth/unauthorized-domain",
            AuthErrorCode::Other(code) => code,
        }
    }

    /// Overlay failures that switch to the full-page handoff
    pub fn allows_handoff_fallback(&self) -> bool {
        matches!(
            self,
            AuthErrorCode::PopupBlocked
                | AuthErrorCode::PopupClosedByUser
                | AuthErrorCode::CancelledPopupRequest
        )
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for AuthErrorCode {
    fn from(code: &str) -> Self {
        Self::parse(code)
    }
}

/// Result of [`AuthFlow::sign_in`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    /// Overlay sign-in completed
    SignedIn(UserIdentity),
    /// A full-page handoff is under way; its result arrives through
    /// [`AuthFlow::check_pending_result`]
    RedirectStarted,
}

/// External identity provider.
///
/// Failures are reported as [`crate::FlistError::AuthInteractionFailed`]
/// carrying the provider's [`AuthErrorCode`].
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Blocking overlay sign-in
    async fn sign_in_with_popup(&self) -> FlistResult<UserIdentity>;

    /// Start a full-page handoff; the app is left (or reloaded) afterwards
    async fn sign_in_with_redirect(&self) -> FlistResult<()>;

    /// Result of a handoff started earlier, `None` when nothing is pending
    async fn get_redirect_result(&self) -> FlistResult<Option<UserIdentity>>;

    async fn sign_out(&self) -> FlistResult<()>;

    /// Current identity immediately, then every change
    fn identity_changes(&self) -> watch::Receiver<Option<UserIdentity>>;
}
