//! Timer controller: the keypad/start/stop state machine

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};
use tokio::{runtime::Handle, sync::watch, task::JoinHandle};
use tracing::{debug, info};

use super::{Clock, LifecycleState, TimerSnapshot};
use crate::{error::TimerError, tasks::countdown_task};

/// Default length of one countdown tick
pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

/// The running countdown, tagged so a stale task can recognise itself
#[derive(Debug)]
pub(crate) struct Countdown {
    pub(crate) generation: u64,
    pub(crate) handle: JoinHandle<()>,
}

/// State guarded by the controller lock
#[derive(Debug)]
pub(crate) struct Inner {
    pub(crate) clock: Clock,
    pub(crate) state: LifecycleState,
    pub(crate) countdown: Option<Countdown>,
    next_generation: u64,
}

impl Inner {
    fn new() -> Self {
        Self {
            clock: Clock::ZERO,
            state: LifecycleState::Prepare,
            countdown: None,
            next_generation: 0,
        }
    }

    pub(crate) fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot::new(self.clock, self.state)
    }

    /// Whether `generation` is still the countdown this controller is running
    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.countdown
            .as_ref()
            .is_some_and(|countdown| countdown.generation == generation)
    }

    /// Abort the running countdown, if any. Returns whether one was running.
    fn cancel_countdown(&mut self) -> bool {
        match self.countdown.take() {
            Some(countdown) => {
                countdown.handle.abort();
                debug!("Cancelled countdown #{}", countdown.generation);
                true
            }
            None => false,
        }
    }
}

/// Lock plus change feed shared between the controller and its countdown task
#[derive(Debug)]
pub(crate) struct Shared {
    inner: Mutex<Inner>,
    updates: watch::Sender<TimerSnapshot>,
}

impl Shared {
    /// Lock the timer state. Every mutation leaves `Inner` consistent, so a
    /// poisoned lock is still safe to use.
    pub(crate) fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Publish the current value to subscribers. Called with the lock held so
    /// observers see changes in the order they happened.
    pub(crate) fn publish(&self, inner: &Inner) -> TimerSnapshot {
        let snapshot = inner.snapshot();
        self.updates.send_replace(snapshot);
        snapshot
    }
}

/// Single-screen countdown timer driven by keypad digits, start and stop.
///
/// All operations are synchronous and run under one lock, so a countdown
/// tick can never interleave with a user intent. Cancelling the countdown
/// (via [`stop`](Self::stop) or [`enter_digit`](Self::enter_digit)) takes
/// effect before the next decrement.
#[derive(Debug)]
pub struct TimerController {
    shared: Arc<Shared>,
    tick: Duration,
    runtime: Handle,
}

impl TimerController {
    /// Create a controller at `00:00` / `PREPARE` that counts down in steps of `tick`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime, the same way
    /// `tokio::spawn` does.
    pub fn new(tick: Duration) -> Self {
        Self::with_handle(tick, Handle::current())
    }

    /// Create a controller whose countdown runs on `runtime`
    pub fn with_handle(tick: Duration, runtime: Handle) -> Self {
        let (updates, _) = watch::channel(TimerSnapshot::default());

        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner::new()),
                updates,
            }),
            tick,
            runtime,
        }
    }

    /// Length of one countdown step
    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Current minutes, seconds and lifecycle state
    pub fn snapshot(&self) -> TimerSnapshot {
        self.shared.lock().snapshot()
    }

    /// Subscribe to changes. The receiver starts with the current value.
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.shared.updates.subscribe()
    }

    /// Shift a keypad digit into the clock.
    ///
    /// A running countdown is cancelled and the clock wiped to `00:00` first.
    /// Entry is ignored while the tens-of-minutes digit is nonzero.
    pub fn enter_digit(&self, digit: u8) -> Result<TimerSnapshot, TimerError> {
        if digit > 9 {
            return Err(TimerError::InvalidDigit(digit));
        }

        let mut inner = self.shared.lock();

        if inner.cancel_countdown() {
            info!("Digit entered during countdown, clearing timer");
            inner.clock = Clock::ZERO;
            inner.state = LifecycleState::Prepare;
        }

        if !inner.clock.push_digit(digit) {
            debug!("Rejected digit {}: tens-of-minutes slot is occupied", digit);
            return Ok(inner.snapshot());
        }

        if !inner.clock.is_zero() {
            inner.state = LifecycleState::Ready;
        }

        let snapshot = self.shared.publish(&inner);
        debug!("Digit {} entered, timer now {} ({})", digit, snapshot.display(), snapshot.state);
        Ok(snapshot)
    }

    /// Start counting down. Does nothing unless the timer is `READY`.
    pub fn start(&self) -> TimerSnapshot {
        let mut inner = self.shared.lock();

        if inner.state != LifecycleState::Ready {
            debug!("Ignoring start in state {}", inner.state);
            return inner.snapshot();
        }

        let generation = inner.next_generation;
        inner.next_generation += 1;
        inner.state = LifecycleState::Started;

        // The task needs the lock before its first decrement, so it cannot
        // observe the controller before the handle is recorded below.
        let handle = self.runtime.spawn(countdown_task(
            Arc::clone(&self.shared),
            generation,
            self.tick,
        ));
        inner.countdown = Some(Countdown { generation, handle });

        let snapshot = self.shared.publish(&inner);
        info!("Countdown #{} started at {}", generation, snapshot.display());
        snapshot
    }

    /// Reset a set timer, or pause a running one.
    ///
    /// `READY` clears the clock back to `PREPARE`. `STARTED` cancels the
    /// countdown and returns to `READY` with the remaining time kept, so
    /// [`start`](Self::start) resumes it. `PREPARE` is left alone.
    pub fn stop(&self) -> TimerSnapshot {
        let mut inner = self.shared.lock();

        match inner.state {
            LifecycleState::Ready => {
                inner.clock = Clock::ZERO;
                inner.state = LifecycleState::Prepare;
                info!("Timer reset");
            }
            LifecycleState::Started => {
                inner.cancel_countdown();
                inner.state = LifecycleState::Ready;
                info!("Countdown paused at {}", inner.snapshot().display());
            }
            LifecycleState::Prepare => {
                debug!("Ignoring stop in state {}", inner.state);
                return inner.snapshot();
            }
        }

        self.shared.publish(&inner)
    }
}

impl Drop for TimerController {
    fn drop(&mut self) {
        self.shared.lock().cancel_countdown();
    }
}
