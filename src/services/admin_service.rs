// ============================================================================
// ADMIN SERVICE - tournament management, every call through AuthorizedClient
// ============================================================================

use crate::errors::ClientResult;
use crate::models::{CreatedTournament, MessageResponse, TournamentCreate};
use crate::services::api_client::rejection;
use crate::services::authorized_client::AuthorizedClient;
use crate::services::http::{HttpRequest, HttpResponse};
use crate::utils::ADMIN_PATH;

#[derive(Clone)]
pub struct AdminService {
    base_url: String,
    client: AuthorizedClient,
}

impl AdminService {
    pub fn new(base_url: impl Into<String>, client: AuthorizedClient) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, ADMIN_PATH, path)
    }

    async fn expect_message(&self, request: HttpRequest) -> ClientResult<MessageResponse> {
        let response = checked(self.client.send(request).await?)?;
        response.json()
    }

    /// Create a draft from Spotify track / album / playlist links
    pub async fn create_tournament(&self, payload: &TournamentCreate) -> ClientResult<CreatedTournament> {
        log::info!("🏆 Creating tournament draft: {}", payload.name);
        let request = HttpRequest::post(self.url("/create")).json(payload)?;
        let response = checked(self.client.send(request).await?)?;
        let created: CreatedTournament = response.json()?;
        log::info!("✅ Draft created: {}", created.tournament_id);
        Ok(created)
    }

    pub async fn add_song(&self, tournament_id: &str, url: &str) -> ClientResult<MessageResponse> {
        let request = HttpRequest::post(self.url(&format!("/{}/add-song", tournament_id)))
            .json(&serde_json::json!({ "url": url }))?;
        self.expect_message(request).await
    }

    pub async fn remove_song(&self, tournament_id: &str, song_id: &str) -> ClientResult<MessageResponse> {
        let request = HttpRequest::post(self.url(&format!("/{}/remove-song", tournament_id)))
            .json(&serde_json::json!({ "song_id": song_id }))?;
        self.expect_message(request).await
    }

    /// Seed the first round of a draft
    pub async fn start_tournament(&self, tournament_id: &str) -> ClientResult<MessageResponse> {
        log::info!("▶️ Starting tournament {}", tournament_id);
        self.expect_message(HttpRequest::post(self.url(&format!("/{}/start", tournament_id))))
            .await
    }

    pub async fn delete_tournament(&self, tournament_id: &str) -> ClientResult<MessageResponse> {
        log::info!("🗑️ Deleting tournament {}", tournament_id);
        self.expect_message(HttpRequest::delete(self.url(&format!("/{}", tournament_id))))
            .await
    }
}

fn checked(response: HttpResponse) -> ClientResult<HttpResponse> {
    if response.ok() {
        Ok(response)
    } else {
        Err(rejection(&response))
    }
}
