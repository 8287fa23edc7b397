// ============================================================================
// WEB PLATFORM - window / document / timers behind the platform traits
// ============================================================================

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsValue;
use web_sys::window;
use super::{Navigator, Notifier, Scheduler, TextTarget};

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// alert / prompt / confirm on the current window
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, message: &str) {
        match window() {
            Some(win) => {
                if let Err(e) = win.alert_with_message(message) {
                    log::error!("❌ alert failed: {}", describe(e));
                }
            }
            None => log::warn!("⚠️ No window, dropping notification: {}", message),
        }
    }

    fn prompt(&self, message: &str) -> Option<String> {
        window()?.prompt_with_message(message).ok().flatten()
    }

    fn confirm(&self, message: &str) -> bool {
        window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// `window.location`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn pathname(&self) -> String {
        window()
            .and_then(|win| win.location().pathname().ok())
            .unwrap_or_default()
    }

    fn reload(&self) {
        if let Some(win) = window() {
            if let Err(e) = win.location().reload() {
                log::error!("❌ Reload failed: {}", describe(e));
            }
        }
    }

    fn assign(&self, href: &str) {
        if let Some(win) = window() {
            if let Err(e) = win.location().set_href(href) {
                log::error!("❌ Navigation to {} failed: {}", href, describe(e));
            }
        }
    }
}

/// Element looked up by id on every access, so it may come and go
#[derive(Debug, Clone)]
pub struct ElementText {
    element_id: String,
}

impl ElementText {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self { element_id: element_id.into() }
    }

    fn element(&self) -> Option<web_sys::Element> {
        window()?.document()?.get_element_by_id(&self.element_id)
    }
}

impl TextTarget for ElementText {
    fn is_present(&self) -> bool {
        self.element().is_some()
    }

    fn set_text(&self, text: &str) {
        if let Some(element) = self.element() {
            element.set_text_content(Some(text));
        }
    }
}

/// Recurring callback; dropping it clears the interval
pub struct WebInterval(Option<Interval>);

impl Drop for WebInterval {
    fn drop(&mut self) {
        if let Some(interval) = self.0.take() {
            // The handle may be dropped from inside its own callback: clear the
            // interval now, free the closure on the next turn of the event loop.
            let closure = interval.cancel();
            Timeout::new(0, move || drop(closure)).forget();
        }
    }
}

/// gloo-timers backed scheduler
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = WebInterval;

    fn every(&self, millis: u32, callback: Box<dyn FnMut()>) -> WebInterval {
        WebInterval(Some(Interval::new(millis, callback)))
    }

    fn once(&self, millis: u32, callback: Box<dyn FnOnce()>) {
        Timeout::new(millis, callback).forget();
    }
}
