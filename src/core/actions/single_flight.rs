use parking_lot::{Condvar, Mutex};
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FlightState {
    Idle = 0,
    Computing = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission<T> {
    /// The caller owns the flight and must call
    /// [`SingleFlight::finish_or_next`] until it returns `None`.
    Begin(T),
    /// A flight is already running; the request was kept as the latest trigger.
    Stashed,
}

/// Guard allowing at most one computation at a time.
///
/// Triggers arriving while a computation runs are not queued. Only the most
/// recent one is kept, and the finisher runs it if it differs from what was
/// just computed. Every state transition happens under the `latest` lock, so a
/// trigger can never land between the finisher's last check and going idle.
#[derive(Debug)]
pub struct SingleFlight<T> {
    state: AtomicU8,
    latest: Mutex<Option<T>>,
    idle: Condvar,
}

impl<T: PartialEq> SingleFlight<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(FlightState::Idle as u8),
            latest: Mutex::new(None),
            idle: Condvar::new(),
        }
    }

    pub fn begin_or_stash(&self, request: T) -> Admission<T> {
        let mut latest = self.latest.lock();

        let began = self
            .state
            .compare_exchange(
                FlightState::Idle as u8,
                FlightState::Computing as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok();

        if began {
            *latest = None;
            Admission::Begin(request)
        } else {
            *latest = Some(request);
            Admission::Stashed
        }
    }

    /// Called by the flight owner after each computation.
    ///
    /// Returns the next request to compute, or `None` once the guard is idle.
    pub fn finish_or_next(&self, computed: &T) -> Option<T> {
        let mut latest = self.latest.lock();

        match latest.take() {
            Some(next) if next != *computed => Some(next),
            _ => {
                self.state.store(FlightState::Idle as u8, Ordering::Release);
                self.idle.notify_all();
                None
            }
        }
    }

    /// Returns to idle without running any stashed trigger.
    ///
    /// For an owner that could not start the computation it was admitted for.
    pub fn abandon(&self) {
        let mut latest = self.latest.lock();

        *latest = None;
        self.state.store(FlightState::Idle as u8, Ordering::Release);
        self.idle.notify_all();
    }

    #[must_use]
    pub fn state(&self) -> FlightState {
        match self.state.load(Ordering::Acquire) {
            0 => FlightState::Idle,
            _ => FlightState::Computing,
        }
    }

    #[must_use]
    pub fn is_computing(&self) -> bool {
        self.state() == FlightState::Computing
    }

    pub fn wait_idle(&self) {
        let mut latest = self.latest.lock();

        while self.is_computing() {
            self.idle.wait(&mut latest);
        }
    }

    /// Returns `false` if the guard was still computing when `timeout` elapsed.
    pub fn wait_idle_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut latest = self.latest.lock();

        while self.is_computing() {
            if self.idle.wait_until(&mut latest, deadline).timed_out() {
                return !self.is_computing();
            }
        }

        true
    }
}

impl<T: PartialEq> Default for SingleFlight<T> {
    fn default() -> Self {
        Self::new()
    }
}
