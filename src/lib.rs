// ============================================================================
// BRACKET VOTE CLIENT - browser control layer of the live bracket page
// ============================================================================
// - Services: HTTP only (public API, admin API behind the bearer wrapper)
// - Stores: persisted admin token
// - State: countdown state machine
// - ViewModels: page actions and user feedback
// - Platform: browser capabilities behind traits, so everything above is
//   testable on the host
// ============================================================================

pub mod config;
pub mod errors;
pub mod models;
pub mod platform;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(test)]
mod testing;

pub use errors::{ClientError, ClientResult};

#[cfg(target_arch = "wasm32")]
pub use exports::*;

#[cfg(target_arch = "wasm32")]
mod exports {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use crate::app::{App, BrowserViewModel};
    use crate::config::CONFIG;
    use crate::models::TournamentCreate;

    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    fn view_model() -> Option<Rc<BrowserViewModel>> {
        let vm = APP.with(|app| app.borrow().as_ref().map(App::view_model));
        if vm.is_none() {
            log::warn!("⚠️ App not initialized");
        }
        vm
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        if CONFIG.is_logging_enabled() {
            wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
        }
        log::info!("🚀 Bracket vote client ({})", CONFIG.environment);

        APP.with(|app| {
            *app.borrow_mut() = Some(App::new());
        });

        Ok(())
    }

    #[wasm_bindgen(js_name = getTournamentIdFromUrl)]
    pub fn get_tournament_id() -> String {
        view_model().map(|vm| vm.tournament_id()).unwrap_or_default()
    }

    /// Start (or replace) the countdown toward a server-rendered deadline
    #[wasm_bindgen(js_name = startTimer)]
    pub fn start_timer(end_time: Option<String>) {
        if let Some(vm) = view_model() {
            vm.start_timer(end_time.as_deref());
        }
    }

    #[wasm_bindgen(js_name = stopTimer)]
    pub fn stop_timer() {
        if let Some(vm) = view_model() {
            vm.stop_timer();
        }
    }

    #[wasm_bindgen(js_name = isLoggedIn)]
    pub fn is_logged_in() -> bool {
        view_model().map(|vm| vm.is_logged_in()).unwrap_or(false)
    }

    #[wasm_bindgen(js_name = loginAdmin)]
    pub fn login_admin() {
        if let Some(vm) = view_model() {
            wasm_bindgen_futures::spawn_local(async move {
                vm.login_admin().await;
            });
        }
    }

    #[wasm_bindgen(js_name = logoutAdmin)]
    pub fn logout_admin() {
        if let Some(vm) = view_model() {
            vm.logout_admin();
        }
    }

    #[wasm_bindgen]
    pub fn vote(match_id: u32, option: String) {
        if let Some(vm) = view_model() {
            wasm_bindgen_futures::spawn_local(async move {
                vm.vote(match_id, &option).await;
            });
        }
    }

    /// Fetch this page's bracket and start its countdown
    #[wasm_bindgen(js_name = loadBracket)]
    pub fn load_bracket() {
        if let Some(vm) = view_model() {
            wasm_bindgen_futures::spawn_local(async move {
                let _ = vm.load_bracket().await;
            });
        }
    }

    /// Resolves to an array of `{ _id, name, status }`, or `null` on failure
    #[wasm_bindgen(js_name = listTournaments)]
    pub async fn list_tournaments() -> JsValue {
        let Some(vm) = view_model() else {
            return JsValue::NULL;
        };
        match vm.list_tournaments().await {
            Ok(tournaments) => serde_wasm_bindgen::to_value(&tournaments).unwrap_or(JsValue::NULL),
            Err(_) => JsValue::NULL,
        }
    }

    /// Resolves to the new tournament id, or `null` on failure
    #[wasm_bindgen(js_name = createTournament)]
    pub async fn create_tournament(name: String, voting_duration_minutes: u32, urls: Vec<String>) -> JsValue {
        let Some(vm) = view_model() else {
            return JsValue::NULL;
        };
        let payload = TournamentCreate { name, voting_duration_minutes, urls };
        match vm.create_tournament(&payload).await {
            Ok(created) => JsValue::from(created.tournament_id),
            Err(_) => JsValue::NULL,
        }
    }

    #[wasm_bindgen(js_name = addSong)]
    pub async fn add_song(tournament_id: String, url: String) -> bool {
        match view_model() {
            Some(vm) => vm.add_song(&tournament_id, &url).await.is_ok(),
            None => false,
        }
    }

    #[wasm_bindgen(js_name = removeSong)]
    pub async fn remove_song(tournament_id: String, song_id: String) -> bool {
        match view_model() {
            Some(vm) => vm.remove_song(&tournament_id, &song_id).await.is_ok(),
            None => false,
        }
    }

    #[wasm_bindgen(js_name = startTournament)]
    pub async fn start_tournament(tournament_id: String) -> bool {
        match view_model() {
            Some(vm) => vm.start_tournament(&tournament_id).await.is_ok(),
            None => false,
        }
    }

    #[wasm_bindgen(js_name = deleteTournament)]
    pub async fn delete_tournament(tournament_id: String) -> bool {
        match view_model() {
            Some(vm) => vm.delete_tournament(&tournament_id).await.unwrap_or(false),
            None => false,
        }
    }
}
