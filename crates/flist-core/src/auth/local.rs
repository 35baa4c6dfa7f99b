//! Identity gateway for the desktop build.
//!
//! Signs in a single configured account and keeps the signed-in identity in
//! [`Storage`] so the session survives a restart. A handoff is recorded as a
//! pending entry and completed by the next `get_redirect_result` call, which
//! is how a reloaded page picks up a redirect result.

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{AuthErrorCode, AuthGateway};
use crate::error::{FlistError, FlistResult};
use crate::storage::Storage;
use crate::types::UserIdentity;

/// Prompt parameter forcing account selection on every interactive sign-in
pub const SELECT_ACCOUNT_PROMPT: &str = "select_account";

#[derive(Debug, Clone)]
pub struct LocalAuthConfig {
    /// Account asserted on a successful sign-in
    pub account: UserIdentity,
    /// Hostname the app runs on
    pub origin: String,
    /// Hostnames allowed to sign in; empty allows any
    pub authorized_origins: Vec<String>,
    /// When false every overlay attempt reports popup-blocked
    pub popup_enabled: bool,
    pub prompt: String,
}

impl LocalAuthConfig {
    pub fn new(account: UserIdentity, origin: impl Into<String>) -> Self {
        Self {
            account,
            origin: origin.into(),
            authorized_origins: Vec::new(),
            popup_enabled: true,
            prompt: SELECT_ACCOUNT_PROMPT.to_string(),
        }
    }

    pub fn with_authorized_origins(mut self, origins: Vec<String>) -> Self {
        self.authorized_origins = origins;
        self
    }

    pub fn with_popup_enabled(mut self, enabled: bool) -> Self {
        self.popup_enabled = enabled;
        self
    }

    fn origin_authorized(&self) -> bool {
        self.authorized_origins.is_empty()
            || self.authorized_origins.iter().any(|o| o == &self.origin)
    }
}

pub struct LocalAuthGateway {
    storage: Storage,
    config: LocalAuthConfig,
    identity_tx: watch::Sender<Option<UserIdentity>>,
}

impl LocalAuthGateway {
    /// Restores the identity persisted by an earlier run.
    pub fn new(storage: Storage, config: LocalAuthConfig) -> FlistResult<Self> {
        let restored = storage.load_session_identity()?;
        if let Some(identity) = &restored {
            info!(uid = %identity.uid, "Restored signed-in identity");
        }
        let (identity_tx, _) = watch::channel(restored);

        Ok(Self {
            storage,
            config,
            identity_tx,
        })
    }

    pub fn config(&self) -> &LocalAuthConfig {
        &self.config
    }

    fn check_origin(&self) -> FlistResult<()> {
        if self.config.origin_authorized() {
            Ok(())
        } else {
            warn!(origin = %self.config.origin, "Origin not in authorized list");
            Err(FlistError::AuthInteractionFailed {
                code: AuthErrorCode::UnauthorizedDomain,
            })
        }
    }

    fn complete_sign_in(&self, identity: UserIdentity) -> FlistResult<UserIdentity> {
        self.storage.save_session_identity(&identity)?;
        self.identity_tx.send_replace(Some(identity.clone()));
        Ok(identity)
    }
}

#[async_trait]
impl AuthGateway for LocalAuthGateway {
    async fn sign_in_with_popup(&self) -> FlistResult<UserIdentity> {
        self.check_origin()?;
        if !self.config.popup_enabled {
            return Err(FlistError::AuthInteractionFailed {
                code: AuthErrorCode::PopupBlocked,
            });
        }

        debug!(prompt = %self.config.prompt, "Overlay sign-in");
        self.complete_sign_in(self.config.account.clone())
    }

    async fn sign_in_with_redirect(&self) -> FlistResult<()> {
        self.check_origin()?;
        debug!(prompt = %self.config.prompt, "Handoff sign-in started");
        self.storage.save_pending_handoff(&self.config.account)
    }

    async fn get_redirect_result(&self) -> FlistResult<Option<UserIdentity>> {
        match self.storage.take_pending_handoff()? {
            Some(identity) => self.complete_sign_in(identity).map(Some),
            None => Ok(None),
        }
    }

    async fn sign_out(&self) -> FlistResult<()> {
        self.storage.clear_session_identity()?;
        self.identity_tx.send_replace(None);
        Ok(())
    }

    fn identity_changes(&self) -> watch::Receiver<Option<UserIdentity>> {
        self.identity_tx.subscribe()
    }
}
