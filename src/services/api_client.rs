// ============================================================================
// API CLIENT - public endpoints of the bracket service (stateless)
// ============================================================================
// No session handling here; admin endpoints go through AuthorizedClient
// ============================================================================

use std::rc::Rc;
use crate::errors::{ClientError, ClientResult};
use crate::models::{
    ErrorDetail, LoginRequest, LoginResponse, Tournament, TournamentSummary, VoteRequest,
};
use crate::services::http::{HttpRequest, HttpResponse, HttpTransport};
use crate::utils::{LOGIN_PATH, TOURNAMENTS_PATH, TOURNAMENT_PATH};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchange the admin password for a bearer token
    pub async fn login(&self, password: &str) -> ClientResult<LoginResponse> {
        let request = HttpRequest::post(self.url(LOGIN_PATH)).json(&LoginRequest {
            password: password.to_string(),
        })?;

        let response = self.transport.send(request).await?;
        if !response.ok() {
            return Err(rejection(&response));
        }
        response.json::<LoginResponse>()
    }

    /// Cast a vote; no body, no credentials
    pub async fn vote(&self, vote: &VoteRequest) -> ClientResult<()> {
        let response = self.transport.send(HttpRequest::post(self.url(&vote.path()))).await?;
        if response.ok() {
            Ok(())
        } else {
            Err(rejection(&response))
        }
    }

    /// Active and completed tournaments
    pub async fn list_tournaments(&self) -> ClientResult<Vec<TournamentSummary>> {
        let response = self.transport.send(HttpRequest::get(self.url(TOURNAMENTS_PATH))).await?;
        if !response.ok() {
            return Err(rejection(&response));
        }
        response.json()
    }

    /// Full bracket; the server advances expired rounds before answering
    pub async fn get_bracket(&self, tournament_id: &str) -> ClientResult<Tournament> {
        let url = self.url(&format!("{}/{}", TOURNAMENT_PATH, tournament_id));
        let response = self.transport.send(HttpRequest::get(url)).await?;
        if !response.ok() {
            return Err(rejection(&response));
        }
        response.json()
    }
}

/// Non-2xx response as `Rejected`, keeping the `detail` of the error body
pub fn rejection(response: &HttpResponse) -> ClientError {
    ClientError::Rejected {
        status: response.status,
        detail: ErrorDetail::from_body(&response.body),
    }
}
