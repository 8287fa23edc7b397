// ============================================================================
// APP - browser wiring of the bracket page
// ============================================================================

use std::rc::Rc;
use crate::config::CONFIG;
use crate::platform::web::{BrowserNavigator, BrowserNotifier, BrowserScheduler, ElementText};
use crate::platform::{Platform, SystemClock};
use crate::services::http::GlooTransport;
use crate::utils::storage::BrowserStorage;
use crate::viewmodels::BracketViewModel;

pub type BrowserViewModel = BracketViewModel<BrowserScheduler>;

/// Page controller; one per loaded page
pub struct App {
    view_model: Rc<BrowserViewModel>,
}

impl App {
    pub fn new() -> Self {
        let platform = Platform {
            storage: Rc::new(BrowserStorage),
            notifier: Rc::new(BrowserNotifier),
            navigator: Rc::new(BrowserNavigator),
            timer_target: Rc::new(ElementText::new(CONFIG.timer.element_id.clone())),
            clock: Rc::new(SystemClock),
            scheduler: Rc::new(BrowserScheduler),
            transport: Rc::new(GlooTransport),
        };

        Self {
            view_model: Rc::new(BracketViewModel::new(&CONFIG, platform)),
        }
    }

    /// Shared handle for async actions that outlive the current borrow
    pub fn view_model(&self) -> Rc<BrowserViewModel> {
        self.view_model.clone()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
