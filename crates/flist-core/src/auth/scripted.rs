//! Gateway that replays queued outcomes.
//!
//! Each overlay attempt pops the next queued result; with the queue empty the
//! overlay succeeds as the configured account. Every call is recorded.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::watch;

use super::{AuthErrorCode, AuthGateway};
use crate::error::{FlistError, FlistResult};
use crate::types::UserIdentity;

/// Calls observed by a [`ScriptedAuthGateway`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayCall {
    Popup,
    Redirect,
    RedirectResult,
    SignOut,
}

#[derive(Debug)]
pub struct ScriptedAuthGateway {
    account: UserIdentity,
    popup_queue: Mutex<VecDeque<Result<UserIdentity, AuthErrorCode>>>,
    redirect_result: Mutex<Option<Result<UserIdentity, AuthErrorCode>>>,
    pending_handoff: Mutex<bool>,
    sign_out_failure: Mutex<Option<AuthErrorCode>>,
    calls: Mutex<Vec<GatewayCall>>,
    identity_tx: watch::Sender<Option<UserIdentity>>,
}

impl ScriptedAuthGateway {
    pub fn new(account: UserIdentity) -> Self {
        let (identity_tx, _) = watch::channel(None);
        Self {
            account,
            popup_queue: Mutex::new(VecDeque::new()),
            redirect_result: Mutex::new(None),
            pending_handoff: Mutex::new(false),
            sign_out_failure: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
            identity_tx,
        }
    }

    /// Next overlay attempt fails with `code`
    pub fn enqueue_popup_failure(&self, code: AuthErrorCode) {
        self.popup_queue.lock().push_back(Err(code));
    }

    /// Next overlay attempt signs in as `identity`
    pub fn enqueue_popup_success(&self, identity: UserIdentity) {
        self.popup_queue.lock().push_back(Ok(identity));
    }

    /// Outcome of the next redirect-result check, overriding a handoff
    /// started through this gateway
    pub fn set_redirect_result(&self, result: Result<UserIdentity, AuthErrorCode>) {
        *self.redirect_result.lock() = Some(result);
    }

    pub fn fail_sign_out(&self, code: AuthErrorCode) {
        *self.sign_out_failure.lock() = Some(code);
    }

    /// Push an identity change as the provider would
    pub fn set_identity(&self, identity: Option<UserIdentity>) {
        self.identity_tx.send_replace(identity);
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().clone()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl AuthGateway for ScriptedAuthGateway {
    async fn sign_in_with_popup(&self) -> FlistResult<UserIdentity> {
        self.record(GatewayCall::Popup);
        let next = self
            .popup_queue
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(self.account.clone()));

        match next {
            Ok(identity) => {
                self.set_identity(Some(identity.clone()));
                Ok(identity)
            }
            Err(code) => Err(FlistError::AuthInteractionFailed { code }),
        }
    }

    async fn sign_in_with_redirect(&self) -> FlistResult<()> {
        self.record(GatewayCall::Redirect);
        *self.pending_handoff.lock() = true;
        Ok(())
    }

    async fn get_redirect_result(&self) -> FlistResult<Option<UserIdentity>> {
        self.record(GatewayCall::RedirectResult);

        let scripted = self.redirect_result.lock().take();
        let result = match scripted {
            Some(Ok(identity)) => Some(identity),
            Some(Err(code)) => return Err(FlistError::AuthInteractionFailed { code }),
            None => {
                let mut pending = self.pending_handoff.lock();
                let was_pending = *pending;
                *pending = false;
                was_pending.then(|| self.account.clone())
            }
        };

        if let Some(identity) = &result {
            self.set_identity(Some(identity.clone()));
        }
        Ok(result)
    }

    async fn sign_out(&self) -> FlistResult<()> {
        self.record(GatewayCall::SignOut);
        if let Some(code) = self.sign_out_failure.lock().take() {
            return Err(FlistError::AuthInteractionFailed { code });
        }
        self.set_identity(None);
        Ok(())
    }

    fn identity_changes(&self) -> watch::Receiver<Option<UserIdentity>> {
        self.identity_tx.subscribe()
    }
}
