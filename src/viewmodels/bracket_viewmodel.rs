// ============================================================================
// BRACKET VIEWMODEL - page actions (login, logout, vote, countdown, admin)
// ============================================================================
// Wires the services together and turns their results into user feedback.
// ============================================================================

use std::rc::Rc;
use crate::config::AppConfig;
use crate::errors::{ClientError, ClientResult};
use crate::models::{CreatedTournament, MessageResponse, Tournament, TournamentCreate, TournamentSummary};
use crate::platform::{Navigator, Notifier, Platform, Scheduler};
use crate::services::{
    AdminService, AdminSession, ApiClient, AuthorizedClient, ContextResolver, SessionContext,
    VoteOutcome, VoteService,
};
use crate::state::{CountdownPhase, CountdownTimer};
use crate::stores::SessionStore;
use crate::utils::{
    MSG_ADMIN_FAILED, MSG_BRACKET_FAILED, MSG_CONFIRM_DELETE, MSG_LOGGED_IN, MSG_LOGIN_ERROR, MSG_PASSWORD_PROMPT,
    MSG_WRONG_PASSWORD,
};

pub struct BracketViewModel<S: Scheduler> {
    session: Rc<dyn SessionContext>,
    api: ApiClient,
    context: ContextResolver,
    votes: VoteService,
    admin: AdminService,
    timer: CountdownTimer<S>,
    notifier: Rc<dyn Notifier>,
    navigator: Rc<dyn Navigator>,
}

impl<S: Scheduler + 'static> BracketViewModel<S> {
    pub fn new(config: &AppConfig, platform: Platform<S>) -> Self {
        let api = ApiClient::new(config.api_base_url.clone(), platform.transport.clone());
        let context = ContextResolver::new(platform.navigator.clone());

        let session: Rc<dyn SessionContext> = Rc::new(AdminSession::new(
            SessionStore::new(platform.storage.clone(), config.auth_storage_key.clone()),
            api.clone(),
            platform.navigator.clone(),
        ));
        let authorized = AuthorizedClient::new(
            session.clone(),
            platform.transport.clone(),
            platform.notifier.clone(),
            platform.navigator.clone(),
        );

        Self {
            votes: VoteService::new(
                api.clone(),
                context.clone(),
                platform.notifier.clone(),
                platform.navigator.clone(),
            ),
            admin: AdminService::new(config.api_base_url.clone(), authorized),
            timer: CountdownTimer::new(
                platform.scheduler,
                platform.clock,
                platform.timer_target,
                platform.navigator.clone(),
                config.timer.clone(),
            ),
            session,
            api,
            context,
            notifier: platform.notifier,
            navigator: platform.navigator,
        }
    }

    pub fn tournament_id(&self) -> String {
        self.context.resolve_tournament_id()
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    pub fn is_logged_in(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Ask for the admin password and log in; reloads the page on success
    pub async fn login_admin(&self) -> bool {
        let password = match self.notifier.prompt(MSG_PASSWORD_PROMPT) {
            Some(password) if !password.is_empty() => password,
            _ => return false,
        };

        match self.session.login(&password).await {
            Ok(()) => {
                self.notifier.notify(MSG_LOGGED_IN);
                self.navigator.reload();
                true
            }
            Err(ClientError::Rejected { detail, .. }) => {
                self.notifier.notify(detail.as_deref().unwrap_or(MSG_WRONG_PASSWORD));
                false
            }
            Err(_) => {
                self.notifier.notify(MSG_LOGIN_ERROR);
                false
            }
        }
    }

    pub fn logout_admin(&self) {
        self.session.logout();
    }

    // ------------------------------------------------------------------
    // Voting page
    // ------------------------------------------------------------------

    pub async fn vote(&self, match_id: u32, option: &str) -> VoteOutcome {
        self.votes.vote(match_id, option).await
    }

    pub fn start_timer(&self, end_time: Option<&str>) -> CountdownPhase {
        self.timer.start(end_time)
    }

    pub fn stop_timer(&self) {
        self.timer.stop();
    }

    pub fn timer_phase(&self) -> CountdownPhase {
        self.timer.phase()
    }

    /// Fetch the bracket of this page and count down to its current round
    pub async fn load_bracket(&self) -> ClientResult<Tournament> {
        let tournament_id = self.tournament_id();
        match self.api.get_bracket(&tournament_id).await {
            Ok(tournament) => {
                log::info!(
                    "📋 Bracket {} loaded, round {} ({:?})",
                    tournament.name, tournament.current_round_index, tournament.status
                );
                self.timer.start(tournament.current_deadline());
                Ok(tournament)
            }
            Err(e) => {
                log::error!("❌ Could not load bracket {}: {}", tournament_id, e);
                self.notifier.notify(e.detail().unwrap_or(MSG_BRACKET_FAILED));
                Err(e)
            }
        }
    }

    pub async fn list_tournaments(&self) -> ClientResult<Vec<TournamentSummary>> {
        self.api.list_tournaments().await.map_err(|e| {
            log::error!("❌ Could not list tournaments: {}", e);
            e
        })
    }

    // ------------------------------------------------------------------
    // Admin
    // ------------------------------------------------------------------

    pub async fn create_tournament(&self, payload: &TournamentCreate) -> ClientResult<CreatedTournament> {
        let result = self.admin.create_tournament(payload).await;
        self.report(result)
    }

    pub async fn add_song(&self, tournament_id: &str, url: &str) -> ClientResult<MessageResponse> {
        let result = self.admin.add_song(tournament_id, url).await;
        self.report(result)
    }

    pub async fn remove_song(&self, tournament_id: &str, song_id: &str) -> ClientResult<MessageResponse> {
        let result = self.admin.remove_song(tournament_id, song_id).await;
        self.report(result)
    }

    pub async fn start_tournament(&self, tournament_id: &str) -> ClientResult<MessageResponse> {
        let result = self.admin.start_tournament(tournament_id).await;
        self.report(result)
    }

    /// `Ok(false)` when the user declined the confirmation
    pub async fn delete_tournament(&self, tournament_id: &str) -> ClientResult<bool> {
        if !self.notifier.confirm(MSG_CONFIRM_DELETE) {
            return Ok(false);
        }
        let result = self.admin.delete_tournament(tournament_id).await;
        self.report(result).map(|_| true)
    }

    /// Tell the user about an admin failure the wrapper has not already reported
    fn report<T>(&self, result: ClientResult<T>) -> ClientResult<T> {
        if let Err(e) = &result {
            match e {
                e if e.is_session_failure() => {}
                ClientError::Rejected { detail, .. } => {
                    self.notifier.notify(detail.as_deref().unwrap_or(MSG_ADMIN_FAILED));
                }
                other => {
                    log::error!("❌ Admin request failed: {}", other);
                    self.notifier.notify(MSG_ADMIN_FAILED);
                }
            }
        }
        result
    }
}
