// Platform capabilities: traits shared by every target, browser implementation on wasm

pub mod traits;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use traits::*;

use std::rc::Rc;
use crate::services::http::HttpTransport;

/// Everything the page needs from its host, bundled for wiring
pub struct Platform<S: Scheduler> {
    pub storage: Rc<dyn KeyValueStore>,
    pub notifier: Rc<dyn Notifier>,
    pub navigator: Rc<dyn Navigator>,
    pub timer_target: Rc<dyn TextTarget>,
    pub clock: Rc<dyn Clock>,
    pub scheduler: Rc<S>,
    pub transport: Rc<dyn HttpTransport>,
}
