// ============================================================================
// AUTHORIZED CLIENT - bearer token on the way out, 401 handling on the way in
// ============================================================================
// The only place that interprets an authorization failure.
// ============================================================================

use std::rc::Rc;
use crate::errors::{ClientError, ClientResult};
use crate::platform::{Navigator, Notifier};
use crate::services::auth_service::SessionContext;
use crate::services::http::{
    HttpRequest, HttpResponse, HttpTransport, APPLICATION_JSON, AUTHORIZATION, CONTENT_TYPE,
};
use crate::utils::{MSG_MUST_LOG_IN, MSG_SESSION_EXPIRED, ROOT_PATH};

const UNAUTHORIZED: u16 = 401;

#[derive(Clone)]
pub struct AuthorizedClient {
    session: Rc<dyn SessionContext>,
    transport: Rc<dyn HttpTransport>,
    notifier: Rc<dyn Notifier>,
    navigator: Rc<dyn Navigator>,
}

impl AuthorizedClient {
    pub fn new(
        session: Rc<dyn SessionContext>,
        transport: Rc<dyn HttpTransport>,
        notifier: Rc<dyn Notifier>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self { session, transport, notifier, navigator }
    }

    /// Send `request` with the admin token attached.
    ///
    /// `Err(Unauthenticated)`: no (or an empty) token, nothing was sent, the user was sent home.
    /// `Err(Unauthorized)`: the server answered 401, the session is gone.
    /// Any other status comes back untouched for the caller to interpret.
    pub async fn send(&self, mut request: HttpRequest) -> ClientResult<HttpResponse> {
        let Some(token) = self.session.token().filter(|token| !token.is_empty()) else {
            log::warn!("⚠️ Admin request without a session: {}", request.url);
            self.notifier.notify(MSG_MUST_LOG_IN);
            self.navigator.assign(ROOT_PATH);
            return Err(ClientError::Unauthenticated);
        };

        request.set_header(AUTHORIZATION, format!("Bearer {}", token));
        if request.header_value(CONTENT_TYPE).is_none() {
            request.set_header(CONTENT_TYPE, APPLICATION_JSON);
        }

        let url = request.url.clone();
        let response = self.transport.send(request).await?;

        if response.status == UNAUTHORIZED {
            log::warn!("⚠️ Session rejected by {}, forcing logout", url);
            self.notifier.notify(MSG_SESSION_EXPIRED);
            self.session.logout();
            return Err(ClientError::Unauthorized);
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::ApiClient;
    use crate::services::auth_service::AdminSession;
    use crate::stores::SessionStore;
    use crate::testing::{FakeNavigator, MemoryStore, RecordingNotifier, ScriptedTransport};

    const KEY: &str = "lorian_admin_token";

    struct Fixture {
        transport: Rc<ScriptedTransport>,
        notifier: Rc<RecordingNotifier>,
        navigator: Rc<FakeNavigator>,
        session: Rc<AdminSession>,
        client: AuthorizedClient,
    }

    fn fixture(storage: MemoryStore, transport: ScriptedTransport) -> Fixture {
        let transport = Rc::new(transport);
        let notifier = Rc::new(RecordingNotifier::default());
        let navigator = Rc::new(FakeNavigator::at("/manage/42"));
        let session = Rc::new(AdminSession::new(
            SessionStore::new(Rc::new(storage), KEY),
            ApiClient::new("", transport.clone()),
            navigator.clone(),
        ));
        let client = AuthorizedClient::new(
            session.clone(),
            transport.clone(),
            notifier.clone(),
            navigator.clone(),
        );
        Fixture { transport, notifier, navigator, session, client }
    }

    #[tokio::test]
    async fn attaches_bearer_and_json() {
        let f = fixture(MemoryStore::with(KEY, "tok"), ScriptedTransport::replying(200, "{}"));

        let response = f.client.send(HttpRequest::post("/api/admin/42/start")).await.unwrap();
        assert_eq!(response.status, 200);

        let sent = f.transport.sent();
        assert_eq!(sent[0].header_value(AUTHORIZATION), Some("Bearer tok"));
        assert_eq!(sent[0].header_value(CONTENT_TYPE), Some(APPLICATION_JSON));
        assert!(f.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn caller_content_type_is_kept() {
        let f = fixture(MemoryStore::with(KEY, "tok"), ScriptedTransport::replying(200, ""));

        let request = HttpRequest::post("/upload").header("content-type", "text/plain");
        f.client.send(request).await.unwrap();
        assert_eq!(f.transport.sent()[0].header_value(CONTENT_TYPE), Some("text/plain"));
    }

    #[tokio::test]
    async fn no_token_never_hits_the_network() {
        let f = fixture(MemoryStore::default(), ScriptedTransport::replying(200, ""));

        let err = f.client.send(HttpRequest::delete("/api/admin/42")).await.unwrap_err();
        assert_eq!(err, ClientError::Unauthenticated);
        assert!(f.transport.sent().is_empty());
        assert_eq!(f.notifier.messages(), vec![MSG_MUST_LOG_IN.to_string()]);
        assert_eq!(f.navigator.assigned(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn empty_token_counts_as_logged_out() {
        let f = fixture(MemoryStore::with(KEY, ""), ScriptedTransport::replying(200, ""));

        let err = f.client.send(HttpRequest::post("/api/admin/42/start")).await.unwrap_err();
        assert_eq!(err, ClientError::Unauthenticated);
        assert!(f.transport.sent().is_empty());
        assert_eq!(f.notifier.messages(), vec![MSG_MUST_LOG_IN.to_string()]);
        assert_eq!(f.navigator.assigned(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn transport_failure_keeps_session() {
        let f = fixture(MemoryStore::with(KEY, "tok"), ScriptedTransport::failing("offline"));

        let err = f.client.send(HttpRequest::post("/api/admin/42/start")).await.unwrap_err();
        assert_eq!(err, ClientError::Transport("offline".into()));
        assert!(f.session.is_authenticated());
        assert!(f.notifier.messages().is_empty());
        assert!(f.navigator.assigned().is_empty());
    }

    #[tokio::test]
    async fn unauthorized_forces_logout() {
        let f = fixture(
            MemoryStore::with(KEY, "stale"),
            ScriptedTransport::replying(401, r#"{"detail":"Invalid Token"}"#),
        );

        let err = f.client.send(HttpRequest::post("/api/admin/create")).await.unwrap_err();
        assert_eq!(err, ClientError::Unauthorized);
        assert!(!f.session.is_authenticated());
        assert_eq!(f.notifier.messages(), vec![MSG_SESSION_EXPIRED.to_string()]);
        assert_eq!(f.navigator.assigned(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn no_request_after_forced_logout() {
        let f = fixture(MemoryStore::with(KEY, "stale"), ScriptedTransport::replying(401, ""));
        f.transport.push(200, "");

        let _ = f.client.send(HttpRequest::post("/api/admin/create")).await;
        let err = f.client.send(HttpRequest::post("/api/admin/create")).await.unwrap_err();

        assert_eq!(err, ClientError::Unauthenticated);
        assert_eq!(f.transport.sent().len(), 1);
    }

    #[tokio::test]
    async fn other_failures_are_left_to_the_caller() {
        let f = fixture(
            MemoryStore::with(KEY, "tok"),
            ScriptedTransport::replying(400, r#"{"detail":"Cannot start"}"#),
        );

        let response = f.client.send(HttpRequest::post("/api/admin/42/start")).await.unwrap();
        assert_eq!(response.status, 400);
        assert!(f.session.is_authenticated());
        assert!(f.notifier.messages().is_empty());
    }
}
