/*
[INPUT]:  Credentials, task API handle, session marker store
[OUTPUT]: Established or cleared sessions
[POS]:    Session management - login/logout lifecycle
[UPDATE]: When login or session persistence rules change
*/

use std::sync::Arc;

use task_app_adapter::{Result, Session, SessionStore, TaskApi};
use tracing::{info, warn};

/// Owns login, logout and the persisted session marker
#[derive(Clone)]
pub struct SessionManager {
    api: Arc<dyn TaskApi>,
    store: Arc<dyn SessionStore>,
}

impl SessionManager {
    pub fn new(api: Arc<dyn TaskApi>, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    /// Authenticate and persist the session marker.
    ///
    /// A marker that cannot be written fails the login.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        self.api.login(email, password).await?;
        let session = Session::new(email);
        self.store.save(&session)?;
        info!(%email, "session established");
        Ok(session)
    }

    /// Drop the persisted marker; storage errors are logged, never surfaced
    pub fn logout(&self) {
        match self.store.clear() {
            Ok(()) => info!("session cleared"),
            Err(err) => warn!(error = %err, "failed to clear session marker"),
        }
    }

    /// Previously persisted session, if any
    pub fn restore(&self) -> Option<Session> {
        match self.store.load() {
            Ok(session) => session,
            Err(err) => {
                warn!(error = %err, "ignoring unreadable session marker");
                None
            }
        }
    }
}
