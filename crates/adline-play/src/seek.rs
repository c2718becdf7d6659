//! Coalesces bursts of remote-control seek presses.
//!
//! Three forward presses inside the window become one 15-second seek
//! instead of three player round-trips. Each press restarts the flush
//! timer; the accumulated amount is applied once the presses stop.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::types::SeekDirection;

/// Callback invoked with the net seek amount once a burst settles.
pub type OnSeekReady = Box<dyn Fn(f64) + Send + Sync>;

#[derive(Default)]
struct AccumState {
    accumulated: f64,
    /// Bumped on every press and reset; a flush task that lost the slot
    /// backs out instead of applying a stale amount.
    generation: u64,
    cancel: Option<CancellationToken>,
}

/// Accumulates seek presses within a time window, then applies them as one
/// seek via the callback.
pub struct SeekAccumulator {
    delta: f64,
    window: Duration,
    on_ready: OnSeekReady,
    state: Mutex<AccumState>,
}

impl SeekAccumulator {
    #[must_use]
    pub fn new(delta: f64, window: Duration, on_ready: OnSeekReady) -> Arc<Self> {
        Arc::new(Self {
            delta,
            window,
            on_ready,
            state: Mutex::new(AccumState::default()),
        })
    }

    /// Register one press. Requires a tokio runtime for the flush timer.
    pub fn register(self: &Arc<Self>, direction: SeekDirection) {
        let signed = match direction {
            SeekDirection::Forward => self.delta,
            SeekDirection::Backward => -self.delta,
        };

        let token = CancellationToken::new();
        let generation = {
            let mut state = self.state.lock();
            state.accumulated += signed;
            state.generation = state.generation.wrapping_add(1);
            if let Some(prev) = state.cancel.take() {
                prev.cancel();
            }
            state.cancel = Some(token.clone());
            state.generation
        };

        let this = Arc::clone(self);
        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => return,
                () = tokio::time::sleep(this.window) => {}
            }
            let amount = {
                let mut state = this.state.lock();
                if state.generation != generation {
                    return;
                }
                state.cancel = None;
                std::mem::take(&mut state.accumulated)
            };
            if amount.abs() > f64::EPSILON {
                debug!(amount, "applying accumulated seek");
                (this.on_ready)(amount);
            }
        });
    }

    /// Net amount currently pending, for display.
    #[must_use]
    pub fn accumulated(&self) -> f64 {
        self.state.lock().accumulated
    }

    /// Drop any pending amount and cancel the flush timer.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.accumulated = 0.0;
        state.generation = state.generation.wrapping_add(1);
        if let Some(token) = state.cancel.take() {
            token.cancel();
        }
    }

    /// Cancel outstanding work; no callback fires after this returns.
    pub fn dispose(&self) {
        self.reset();
    }
}
