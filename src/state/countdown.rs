// ============================================================================
// COUNTDOWN - round deadline timer: Idle -> Running -> Expired
// ============================================================================
// One tick per second (plus one right away). On expiry the interval is
// cancelled, the end message shown and a single delayed reload scheduled.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use chrono::{DateTime, Utc};
use crate::config::TimerConfig;
use crate::errors::{ClientError, ClientResult};
use crate::platform::{Clock, Navigator, Scheduler, TextTarget};
use crate::utils::MSG_ROUND_ENDED;

const SECOND_MS: i64 = 1000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownPhase {
    Idle,
    Running,
    Expired,
}

/// What a tick renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerDisplayState {
    Remaining { hours: i64, minutes: i64, seconds: i64 },
    Expired,
}

impl fmt::Display for TimerDisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerDisplayState::Remaining { hours, minutes, seconds } => {
                write!(f, "{}h {}m {}s remaining", hours, minutes, seconds)
            }
            TimerDisplayState::Expired => f.write_str(MSG_ROUND_ENDED),
        }
    }
}

/// Server deadlines are UTC wall-clock time without a marker; add one if missing
pub fn normalize_deadline(raw: &str) -> String {
    let raw = raw.trim();
    if raw.ends_with('Z') || raw.ends_with('z') {
        raw.to_string()
    } else {
        format!("{}Z", raw)
    }
}

pub fn parse_deadline(raw: &str) -> ClientResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&normalize_deadline(raw))
        // Explicit offsets like `+02:00` are already unambiguous
        .or_else(|_| DateTime::parse_from_rfc3339(raw.trim()))
        .map(|deadline| deadline.with_timezone(&Utc))
        .map_err(|e| ClientError::InvalidDeadline(format!("{:?}: {}", raw, e)))
}

/// Time left until `end`; hours wrap every 24h
pub fn remaining(end: DateTime<Utc>, now: DateTime<Utc>) -> TimerDisplayState {
    let distance = (end - now).num_milliseconds();
    if distance < 0 {
        return TimerDisplayState::Expired;
    }

    TimerDisplayState::Remaining {
        hours: (distance % DAY_MS) / HOUR_MS,
        minutes: (distance % HOUR_MS) / MINUTE_MS,
        seconds: (distance % MINUTE_MS) / SECOND_MS,
    }
}

/// One countdown run; dropping it cancels its interval
pub(crate) struct Countdown<H> {
    deadline: DateTime<Utc>,
    phase: Rc<Cell<CountdownPhase>>,
    interval: Rc<RefCell<Option<H>>>,
}

impl<H> Countdown<H> {
    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    pub fn phase(&self) -> CountdownPhase {
        self.phase.get()
    }

    pub fn stop(&self) {
        let handle = self.interval.borrow_mut().take();
        drop(handle);
        if self.phase.get() == CountdownPhase::Running {
            self.phase.set(CountdownPhase::Idle);
        }
    }
}

impl<H> Drop for Countdown<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Owns the current countdown of the page; at most one interval is ever active
pub struct CountdownTimer<S: Scheduler> {
    scheduler: Rc<S>,
    clock: Rc<dyn Clock>,
    target: Rc<dyn TextTarget>,
    navigator: Rc<dyn Navigator>,
    config: TimerConfig,
    current: RefCell<Option<Countdown<S::Handle>>>,
}

impl<S: Scheduler + 'static> CountdownTimer<S> {
    pub fn new(
        scheduler: Rc<S>,
        clock: Rc<dyn Clock>,
        target: Rc<dyn TextTarget>,
        navigator: Rc<dyn Navigator>,
        config: TimerConfig,
    ) -> Self {
        Self {
            scheduler,
            clock,
            target,
            navigator,
            config,
            current: RefCell::new(None),
        }
    }

    pub fn phase(&self) -> CountdownPhase {
        self.current
            .borrow()
            .as_ref()
            .map(|countdown| countdown.phase())
            .unwrap_or(CountdownPhase::Idle)
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.current.borrow().as_ref().map(|countdown| countdown.deadline())
    }

    /// Cancel whatever runs, then count down to `end_time`.
    ///
    /// Empty, missing or unparseable deadlines leave the timer Idle without rendering.
    pub fn start(&self, end_time: Option<&str>) -> CountdownPhase {
        self.stop();

        let Some(raw) = end_time.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return CountdownPhase::Idle;
        };

        match parse_deadline(raw) {
            Ok(deadline) => self.run(deadline),
            Err(e) => {
                log::warn!("⚠️ Countdown not started: {}", e);
                CountdownPhase::Idle
            }
        }
    }

    /// Start over toward the current deadline
    pub fn restart(&self) -> CountdownPhase {
        match self.deadline() {
            Some(deadline) => {
                self.stop();
                self.run(deadline)
            }
            None => CountdownPhase::Idle,
        }
    }

    pub fn stop(&self) {
        let previous = self.current.borrow_mut().take();
        drop(previous);
    }

    fn run(&self, deadline: DateTime<Utc>) -> CountdownPhase {
        log::info!("⏱️ Countdown running until {}", deadline.to_rfc3339());

        let phase = Rc::new(Cell::new(CountdownPhase::Running));
        let interval: Rc<RefCell<Option<S::Handle>>> = Rc::new(RefCell::new(None));
        let tick = self.tick_fn(deadline, phase.clone(), Rc::downgrade(&interval));

        // First render right away, not one period later
        tick();
        if phase.get() == CountdownPhase::Running {
            let tick = tick.clone();
            let handle = self.scheduler.every(self.config.tick_ms, Box::new(move || tick()));
            *interval.borrow_mut() = Some(handle);
        }

        let current = phase.get();
        *self.current.borrow_mut() = Some(Countdown { deadline, phase, interval });
        current
    }

    fn tick_fn(
        &self,
        deadline: DateTime<Utc>,
        phase: Rc<Cell<CountdownPhase>>,
        interval: Weak<RefCell<Option<S::Handle>>>,
    ) -> Rc<dyn Fn()> {
        let scheduler = self.scheduler.clone();
        let clock = self.clock.clone();
        let target = self.target.clone();
        let navigator = self.navigator.clone();
        let reload_delay_ms = self.config.reload_delay_ms;

        Rc::new(move || {
            if phase.get() != CountdownPhase::Running || !target.is_present() {
                return;
            }

            match remaining(deadline, clock.now()) {
                TimerDisplayState::Expired => {
                    phase.set(CountdownPhase::Expired);
                    if let Some(slot) = interval.upgrade() {
                        let handle = slot.borrow_mut().take();
                        drop(handle);
                    }

                    target.set_text(&TimerDisplayState::Expired.to_string());
                    log::info!("🏁 Round ended, reloading in {} ms", reload_delay_ms);

                    let navigator = navigator.clone();
                    scheduler.once(reload_delay_ms, Box::new(move || navigator.reload()));
                }
                state => {
                    let text = state.to_string();
                    log::debug!("⏱️ {}", text);
                    target.set_text(&text);
                }
            }
        })
    }
}
