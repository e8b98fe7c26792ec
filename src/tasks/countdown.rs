//! Countdown background task

use std::{sync::Arc, time::Duration};
use tokio::time::sleep;
use tracing::{debug, info};

use crate::state::{controller::Shared, LifecycleState};

/// Decrement the clock once per `tick` until it reaches zero.
///
/// Spawned by `TimerController::start`. Each wake-up re-checks under the lock
/// that `generation` is still the active countdown, so a task cancelled while
/// it was waiting never takes another second off the clock.
pub(crate) async fn countdown_task(shared: Arc<Shared>, generation: u64, tick: Duration) {
    debug!("Countdown #{} running with {:?} ticks", generation, tick);

    loop {
        sleep(tick).await;

        let mut inner = shared.lock();
        if !inner.is_current(generation) {
            debug!("Countdown #{} was cancelled, exiting", generation);
            return;
        }

        inner.clock.tick();

        if inner.clock.is_zero() {
            inner.state = LifecycleState::Prepare;
            inner.countdown = None;
            shared.publish(&inner);
            info!("Countdown #{} finished", generation);
            return;
        }

        let snapshot = shared.publish(&inner);
        debug!("Countdown #{} tick: {}", generation, snapshot.display());
    }
}
