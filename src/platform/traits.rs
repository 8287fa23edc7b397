use chrono::{DateTime, Utc};
use crate::errors::ClientResult;

/// Persistent browser-scoped key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> ClientResult<()>;
    fn remove(&self, key: &str) -> ClientResult<()>;
}

/// Blocking user interaction (alert / prompt / confirm)
pub trait Notifier {
    fn notify(&self, message: &str);

    /// `None` when the user cancelled
    fn prompt(&self, message: &str) -> Option<String>;

    fn confirm(&self, message: &str) -> bool;
}

/// Current page location
pub trait Navigator {
    /// Path part of the location, e.g. `/bracket/42`
    fn pathname(&self) -> String;

    fn reload(&self);

    /// Navigate to another url of the site
    fn assign(&self, href: &str);
}

/// Element that shows free-form text (the countdown)
pub trait TextTarget {
    /// False when the element is not in the page right now
    fn is_present(&self) -> bool;

    fn set_text(&self, text: &str);
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock; `Utc::now` reads `Date.now()` on wasm
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Event-loop timers.
///
/// Dropping the handle returned by `every` cancels the recurring callback.
/// `once` callbacks are detached and always run.
pub trait Scheduler {
    type Handle: 'static;

    fn every(&self, millis: u32, callback: Box<dyn FnMut()>) -> Self::Handle;

    fn once(&self, millis: u32, callback: Box<dyn FnOnce()>);
}
