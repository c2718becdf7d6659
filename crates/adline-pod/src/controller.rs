//! Drives the ads inside the active pod.
//!
//! The controller wraps the pure [`PodSequencer`] with the pieces that need
//! a runtime: the per-ad countdown timer and the event stream consumers use
//! to react to ad changes. Fallback video ads auto-advance when their
//! countdown reaches zero; interactive ads advance only on surface
//! completion events, delivered by the caller via [`PodController::advance`].

use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use adline_core::BreakId;
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::{PodAd, PodBreak};
use crate::events::PodEvent;
use crate::sequencer::{Advance, PodSequencer};

/// The one outstanding countdown. Every arm/disarm bumps the generation, so
/// a timer task that lost the slot can tell and back out: a stale timer must
/// never complete the wrong ad.
#[derive(Default)]
struct TimerSlot {
    cancel: Option<CancellationToken>,
    generation: u64,
}

/// Runtime driver for pod sequencing. Requires a tokio runtime for the
/// countdown timers; all methods are sync.
pub struct PodController {
    sequencer: Mutex<PodSequencer>,
    current_ad: Mutex<Option<PodAd>>,
    /// 1-based display index of the active ad; 0 outside a break.
    display_index: AtomicUsize,
    /// Seconds remaining on the active ad.
    countdown: AtomicU32,
    timer: Mutex<TimerSlot>,
    events_tx: broadcast::Sender<PodEvent>,
}

impl PodController {
    #[must_use]
    pub fn new() -> Arc<Self> {
        let (events_tx, _) = broadcast::channel(64);
        Arc::new(Self {
            sequencer: Mutex::new(PodSequencer::new()),
            current_ad: Mutex::new(None),
            display_index: AtomicUsize::new(0),
            countdown: AtomicU32::new(0),
            timer: Mutex::new(TimerSlot::default()),
            events_tx,
        })
    }

    /// Subscribe to pod lifecycle events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PodEvent> {
        self.events_tx.subscribe()
    }

    /// The pod that should start at `current_time`, if any.
    #[must_use]
    pub fn next_break_to_start(&self, breaks: &[PodBreak], current_time: f64) -> Option<PodBreak> {
        self.sequencer
            .lock()
            .next_break_to_start(breaks, current_time)
            .cloned()
    }

    /// Activate a pod and play its first ad. A pod with no playable ads
    /// completes synchronously without displaying anything.
    pub fn start_break(self: &Arc<Self>, pod: &PodBreak) {
        let first = {
            let mut seq = self.sequencer.lock();
            seq.start_break(pod);
            seq.current_ad()
        };
        debug!(break_id = %pod.break_id, ads = pod.ads.len(), "ad break started");
        let _ = self.events_tx.send(PodEvent::BreakStarted {
            break_id: pod.break_id.clone(),
        });
        self.apply(first);
    }

    /// Complete the active ad and move on: the next ad plays, or the break
    /// finishes when none remain. Called on countdown expiry and on every
    /// terminal surface event (completed, error, no fill).
    pub fn advance(self: &Arc<Self>) {
        self.disarm_countdown();
        let outcome = self.sequencer.lock().advance();
        self.apply(outcome);
    }

    /// The interactive ad granted an ad-free pod: skip every remaining ad
    /// and advance, which completes the break once nothing is left.
    pub fn grant_ad_free_pod(self: &Arc<Self>) {
        {
            let mut seq = self.sequencer.lock();
            if !seq.is_in_break() {
                return;
            }
            seq.grant_ad_free_pod();
        }
        debug!("ad-free pod credit granted");
        self.advance();
    }

    #[must_use]
    pub fn current_ad(&self) -> Option<PodAd> {
        self.current_ad.lock().clone()
    }

    /// 1-based index of the active ad for display; 0 outside a break.
    #[must_use]
    pub fn display_index(&self) -> usize {
        self.display_index.load(Ordering::Relaxed)
    }

    /// Seconds remaining on the active ad.
    #[must_use]
    pub fn countdown(&self) -> u32 {
        self.countdown.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn active_break_id(&self) -> Option<BreakId> {
        self.sequencer.lock().active_break_id().cloned()
    }

    #[must_use]
    pub fn is_in_break(&self) -> bool {
        self.sequencer.lock().is_in_break()
    }

    #[must_use]
    pub fn has_ad_free_pod(&self) -> bool {
        self.sequencer.lock().has_ad_free_pod()
    }

    #[must_use]
    pub fn completed_breaks(&self) -> Vec<BreakId> {
        self.sequencer.lock().completed_breaks().to_vec()
    }

    /// Forget all break history and stop any running countdown.
    pub fn reset(&self) {
        self.disarm_countdown();
        self.sequencer.lock().reset();
        *self.current_ad.lock() = None;
        self.display_index.store(0, Ordering::Relaxed);
        self.countdown.store(0, Ordering::Relaxed);
    }

    /// Cancel the countdown timer. No event fires after this returns.
    pub fn dispose(&self) {
        self.disarm_countdown();
    }

    fn apply(self: &Arc<Self>, outcome: Advance) {
        match outcome {
            Advance::Next(ad) => self.play_ad(ad),
            Advance::Completed(break_id) => self.finish_break(break_id),
            Advance::Idle => {}
        }
    }

    fn play_ad(self: &Arc<Self>, ad: PodAd) {
        let index = self.sequencer.lock().display_index();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seconds = ad.duration.max(0.0).ceil() as u32;
        let interactive = ad.is_interactive();

        self.display_index.store(index, Ordering::Relaxed);
        self.countdown.store(seconds, Ordering::Relaxed);
        *self.current_ad.lock() = Some(ad.clone());

        debug!(ad_id = %ad.ad_id, index, interactive, seconds, "ad started");
        let _ = self.events_tx.send(PodEvent::AdStarted {
            ad_id: ad.ad_id,
            index,
            interactive,
        });

        if interactive {
            // Completion comes from the ad surface, not a timer.
            self.disarm_countdown();
        } else {
            self.arm_countdown(seconds);
        }
    }

    fn finish_break(&self, break_id: BreakId) {
        self.disarm_countdown();
        *self.current_ad.lock() = None;
        self.display_index.store(0, Ordering::Relaxed);
        self.countdown.store(0, Ordering::Relaxed);
        debug!(break_id = %break_id, "ad break completed");
        let _ = self.events_tx.send(PodEvent::BreakCompleted { break_id });
    }

    fn disarm_countdown(&self) {
        let mut timer = self.timer.lock();
        timer.generation = timer.generation.wrapping_add(1);
        if let Some(token) = timer.cancel.take() {
            token.cancel();
        }
    }

    fn arm_countdown(self: &Arc<Self>, seconds: u32) {
        let token = CancellationToken::new();
        let generation = {
            let mut timer = self.timer.lock();
            timer.generation = timer.generation.wrapping_add(1);
            if let Some(prev) = timer.cancel.take() {
                prev.cancel();
            }
            timer.cancel = Some(token.clone());
            timer.generation
        };

        let this = Arc::clone(self);
        tokio::spawn(async move {
            let mut remaining = seconds;
            loop {
                tokio::select! {
                    () = token.cancelled() => return,
                    () = tokio::time::sleep(Duration::from_secs(1)) => {}
                }
                if this.timer.lock().generation != generation {
                    return;
                }
                remaining = remaining.saturating_sub(1);
                this.countdown.store(remaining, Ordering::Relaxed);
                let _ = this.events_tx.send(PodEvent::CountdownTick { remaining });
                if remaining == 0 {
                    this.advance();
                    return;
                }
            }
        });
    }
}
