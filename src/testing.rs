// Recording fakes of the platform traits for unit tests

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use crate::errors::{ClientError, ClientResult};
use crate::platform::{Clock, KeyValueStore, Navigator, Notifier, Scheduler, TextTarget};
use crate::services::http::{HttpRequest, HttpResponse, HttpTransport};

#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: RefCell<Vec<String>>,
    pub prompts: RefCell<Vec<String>>,
    pub prompt_answer: RefCell<Option<String>>,
    pub confirm_answer: Cell<bool>,
}

impl RecordingNotifier {
    pub fn answering(answer: &str) -> Self {
        let notifier = Self::default();
        *notifier.prompt_answer.borrow_mut() = Some(answer.to_string());
        notifier
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn prompt(&self, message: &str) -> Option<String> {
        self.prompts.borrow_mut().push(message.to_string());
        self.prompt_answer.borrow().clone()
    }

    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }
}

#[derive(Default)]
pub struct FakeNavigator {
    pub path: RefCell<String>,
    pub reloads: Cell<usize>,
    pub assigned: RefCell<Vec<String>>,
}

impl FakeNavigator {
    pub fn at(path: &str) -> Self {
        let navigator = Self::default();
        *navigator.path.borrow_mut() = path.to_string();
        navigator
    }

    pub fn assigned(&self) -> Vec<String> {
        self.assigned.borrow().clone()
    }
}

impl Navigator for FakeNavigator {
    fn pathname(&self) -> String {
        self.path.borrow().clone()
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }

    fn assign(&self, href: &str) {
        self.assigned.borrow_mut().push(href.to_string());
    }
}

pub struct FakeTarget {
    pub present: Cell<bool>,
    pub renders: RefCell<Vec<String>>,
}

impl Default for FakeTarget {
    fn default() -> Self {
        Self {
            present: Cell::new(true),
            renders: RefCell::new(Vec::new()),
        }
    }
}

impl FakeTarget {
    pub fn renders(&self) -> Vec<String> {
        self.renders.borrow().clone()
    }
}

impl TextTarget for FakeTarget {
    fn is_present(&self) -> bool {
        self.present.get()
    }

    fn set_text(&self, text: &str) {
        self.renders.borrow_mut().push(text.to_string());
    }
}

pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(rfc3339: &str) -> Self {
        let now = DateTime::parse_from_rfc3339(rfc3339)
            .expect("valid test timestamp")
            .with_timezone(&Utc);
        Self { now: Cell::new(now) }
    }

    pub fn advance_ms(&self, millis: i64) {
        self.now.set(self.now.get() + Duration::milliseconds(millis));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

struct Registered {
    active: bool,
    callback: Option<Box<dyn FnMut()>>,
}

/// Timers that only fire when the test says so
#[derive(Default)]
pub struct ManualScheduler {
    intervals: Rc<RefCell<Vec<Registered>>>,
    timeouts: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
}

pub struct ManualHandle {
    index: usize,
    intervals: Rc<RefCell<Vec<Registered>>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        let mut intervals = self.intervals.borrow_mut();
        intervals[self.index].active = false;
        intervals[self.index].callback = None;
    }
}

impl ManualScheduler {
    pub fn active_intervals(&self) -> usize {
        self.intervals.borrow().iter().filter(|r| r.active).count()
    }

    pub fn pending_timeouts(&self) -> Vec<u32> {
        self.timeouts.borrow().iter().map(|(ms, _)| *ms).collect()
    }

    /// Fire every active interval once
    pub fn tick(&self) {
        let count = self.intervals.borrow().len();
        for index in 0..count {
            let callback = {
                let mut intervals = self.intervals.borrow_mut();
                if !intervals[index].active {
                    continue;
                }
                intervals[index].callback.take()
            };
            if let Some(mut callback) = callback {
                callback();
                let mut intervals = self.intervals.borrow_mut();
                if intervals[index].active {
                    intervals[index].callback = Some(callback);
                }
            }
        }
    }

    pub fn run_timeouts(&self) {
        let due: Vec<_> = self.timeouts.borrow_mut().drain(..).collect();
        for (_, callback) in due {
            callback();
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn every(&self, _millis: u32, callback: Box<dyn FnMut()>) -> ManualHandle {
        let mut intervals = self.intervals.borrow_mut();
        intervals.push(Registered { active: true, callback: Some(callback) });
        ManualHandle {
            index: intervals.len() - 1,
            intervals: self.intervals.clone(),
        }
    }

    fn once(&self, millis: u32, callback: Box<dyn FnOnce()>) {
        self.timeouts.borrow_mut().push((millis, callback));
    }
}

/// Replays queued responses and records what was sent
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<ClientResult<HttpResponse>>>,
    pub sent: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        let transport = Self::default();
        transport.push(status, body);
        transport
    }

    pub fn failing(message: &str) -> Self {
        let transport = Self::default();
        transport.responses.borrow_mut().push_back(Err(ClientError::Transport(message.to_string())));
        transport
    }

    pub fn push(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> ClientResult<HttpResponse> {
        self.sent.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no scripted response".to_string())))
    }
}
