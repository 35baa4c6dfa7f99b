//! Overlay-first sign-in with full-page handoff fallback.

use std::sync::Arc;

use tracing::{error, info, warn};

use super::{AuthErrorCode, AuthGateway, SignInOutcome};
use crate::error::{FlistError, FlistResult};
use crate::types::UserIdentity;

/// Sign-in, handoff pick-up and sign-out against one gateway
#[derive(Clone)]
pub struct AuthFlow {
    gateway: Arc<dyn AuthGateway>,
    /// Hostname reported when the provider rejects the calling origin
    origin: String,
}

impl AuthFlow {
    pub fn new(gateway: Arc<dyn AuthGateway>, origin: impl Into<String>) -> Self {
        Self {
            gateway,
            origin: origin.into(),
        }
    }

    pub fn gateway(&self) -> &Arc<dyn AuthGateway> {
        &self.gateway
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Interactive sign-in.
    ///
    /// Only popup-blocked, popup-closed-by-user and cancelled-popup-request
    /// fall back to the handoff; every other overlay failure is returned.
    pub async fn sign_in(&self) -> FlistResult<SignInOutcome> {
        info!("Attempting overlay sign-in");

        match self.gateway.sign_in_with_popup().await {
            Ok(identity) => {
                info!(uid = %identity.uid, "Overlay sign-in succeeded");
                Ok(SignInOutcome::SignedIn(identity))
            }
            Err(FlistError::AuthInteractionFailed { code }) if code.allows_handoff_fallback() => {
                info!(%code, "Overlay unavailable, switching to full-page handoff");
                self.gateway
                    .sign_in_with_redirect()
                    .await
                    .map_err(|e| self.remap("Handoff sign-in failed", e))?;
                Ok(SignInOutcome::RedirectStarted)
            }
            Err(e) => Err(self.remap("Sign-in failed", e)),
        }
    }

    /// Pick up the result of a handoff started before the app was reloaded.
    ///
    /// Called once at start-up whether or not a handoff was started.
    pub async fn check_pending_result(&self) -> FlistResult<Option<UserIdentity>> {
        match self.gateway.get_redirect_result().await {
            Ok(Some(identity)) => {
                info!(uid = %identity.uid, "Handoff sign-in completed");
                Ok(Some(identity))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(self.remap("Handoff result check failed", e)),
        }
    }

    /// Ask the gateway to sign out. The session resets once the gateway
    /// reports the identity change.
    pub async fn sign_out(&self) -> FlistResult<()> {
        match self.gateway.sign_out().await {
            Ok(()) => {
                info!("Signed out");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Sign-out failed");
                Err(e)
            }
        }
    }

    fn remap(&self, context: &str, err: FlistError) -> FlistError {
        match err {
            FlistError::AuthInteractionFailed {
                code: AuthErrorCode::UnauthorizedDomain,
            } => {
                warn!(hostname = %self.origin, "{context}: origin not authorized");
                FlistError::UnauthorizedOrigin {
                    hostname: self.origin.clone(),
                }
            }
            other => {
                error!(error = %other, "{context}");
                other
            }
        }
    }
}
