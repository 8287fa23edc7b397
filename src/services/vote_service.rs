use std::rc::Rc;
use crate::errors::ClientError;
use crate::models::VoteRequest;
use crate::platform::{Navigator, Notifier};
use crate::services::api_client::ApiClient;
use crate::services::context::ContextResolver;
use crate::utils::MSG_VOTING_FAILED;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOutcome {
    Counted,
    /// Server refused; the user saw the message and the page reloads
    Rejected(String),
    /// Request never completed; only logged
    Failed(String),
}

/// Casts votes for the tournament of the current page
#[derive(Clone)]
pub struct VoteService {
    api: ApiClient,
    context: ContextResolver,
    notifier: Rc<dyn Notifier>,
    navigator: Rc<dyn Navigator>,
}

impl VoteService {
    pub fn new(
        api: ApiClient,
        context: ContextResolver,
        notifier: Rc<dyn Notifier>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self { api, context, notifier, navigator }
    }

    pub async fn vote(&self, match_id: u32, option: &str) -> VoteOutcome {
        let request = VoteRequest::new(self.context.resolve_tournament_id(), match_id, option);
        log::info!("🗳️ Voting {} on match {} of {}", request.option, match_id, request.tournament_id);

        match self.api.vote(&request).await {
            Ok(()) => {
                log::info!("✅ Vote counted");
                VoteOutcome::Counted
            }
            Err(ClientError::Rejected { status, detail }) => {
                let message = detail.unwrap_or_else(|| MSG_VOTING_FAILED.to_string());
                log::warn!("⚠️ Vote rejected (HTTP {}): {}", status, message);
                self.notifier.notify(&message);
                // Displayed tallies may be stale, resync from the server
                self.navigator.reload();
                VoteOutcome::Rejected(message)
            }
            Err(e) => {
                log::error!("❌ Vote request failed: {}", e);
                VoteOutcome::Failed(e.to_string())
            }
        }
    }
}
