// ============================================================================
// AUTH SERVICE - admin session lifecycle (login / logout / presence)
// ============================================================================

use std::rc::Rc;
use async_trait::async_trait;
use crate::errors::{ClientError, ClientResult};
use crate::platform::Navigator;
use crate::services::api_client::ApiClient;
use crate::stores::SessionStore;
use crate::utils::{MSG_WRONG_PASSWORD, ROOT_PATH};

/// Injectable view of the admin session
#[async_trait(?Send)]
pub trait SessionContext {
    fn is_authenticated(&self) -> bool;

    fn token(&self) -> Option<String>;

    /// Persist a fresh token on success.
    ///
    /// Non-2xx answers become `Rejected` with the "Wrong password" detail and
    /// leave any stored token untouched; transport failures are logged and
    /// returned as they are.
    async fn login(&self, password: &str) -> ClientResult<()>;

    /// Drop the token and go back to the site root
    fn logout(&self);
}

pub struct AdminSession {
    store: SessionStore,
    api: ApiClient,
    navigator: Rc<dyn Navigator>,
}

impl AdminSession {
    pub fn new(store: SessionStore, api: ApiClient, navigator: Rc<dyn Navigator>) -> Self {
        Self { store, api, navigator }
    }
}

#[async_trait(?Send)]
impl SessionContext for AdminSession {
    fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    fn token(&self) -> Option<String> {
        self.store.token()
    }

    async fn login(&self, password: &str) -> ClientResult<()> {
        log::info!("🔐 Admin login attempt");

        match self.api.login(password).await {
            Ok(response) => {
                self.store.save_token(&response.access_token)?;
                log::info!("✅ Admin token stored");
                Ok(())
            }
            Err(ClientError::Rejected { status, .. }) => {
                log::warn!("⚠️ Admin login rejected (HTTP {})", status);
                Err(ClientError::Rejected {
                    status,
                    detail: Some(MSG_WRONG_PASSWORD.to_string()),
                })
            }
            Err(e) => {
                log::error!("❌ Admin login failed: {}", e);
                Err(e)
            }
        }
    }

    fn logout(&self) {
        if let Err(e) = self.store.clear() {
            log::error!("❌ Could not clear admin token: {}", e);
        }
        log::info!("👋 Admin logged out");
        self.navigator.assign(ROOT_PATH);
    }
}
