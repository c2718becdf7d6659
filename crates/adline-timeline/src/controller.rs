//! Reconciles live player ticks against the ad playlist.
//!
//! The controller is a synchronous reducer: [`TimelineController::tick`]
//! takes the latest raw stream time and returns the side effects the host
//! must perform (corrective seeks, break-changed notifications). It never
//! touches the player itself, which keeps the state machine testable
//! without one.

use adline_core::TIME_EPSILON;
use tracing::debug;

use crate::{AdBreak, AdPlaylist};

/// How close (seconds) an observed tick must land to a pending seek target
/// for the seek to count as settled. Hosts do not deliver `seeked`
/// notifications reliably, so proximity is the fallback signal.
const SEEK_SETTLE_WINDOW: f64 = 2.0;

/// Floor for the coarse-navigation step, in seconds.
const MIN_STEP_SECONDS: f64 = 10.0;

/// A longer stream gets a proportionally longer step: duration divided by
/// this many steps end to end.
const STEPS_PER_STREAM: f64 = 70.0;

/// What a seek-step does while playback sits inside an ad break.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AdSeekPolicy {
    /// Stepping is ignored during ads.
    #[default]
    Block,
    /// The raw step is applied with no break arbitration.
    PassThrough,
}

/// Side effects requested by the reducer, to be performed by the caller.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum TimelineEffect {
    /// Seek the player to this raw stream position.
    Seek { target: f64 },
    /// The active break changed. Indices refer into the playlist; `None`
    /// means content.
    BreakChanged {
        previous: Option<usize>,
        current: Option<usize>,
    },
}

/// Per-break playback status, owned by the controller alone.
#[derive(Clone, Copy, Debug, Default)]
struct BreakStatus {
    started: bool,
    completed: bool,
}

/// Stateful timeline reconciler for one playback session.
pub struct TimelineController {
    playlist: AdPlaylist,
    statuses: Vec<BreakStatus>,
    ad_seek_policy: AdSeekPolicy,

    /// Raw stream position from the most recent tick.
    stream_time: f64,
    /// Whole second of the last processed tick; repeat seconds are no-ops.
    last_tick_second: Option<i64>,
    current_break: Option<usize>,
    /// Destination of an outstanding corrective or step seek.
    seek_target: Option<f64>,
    /// Raw stream duration (ads included), once reported by the player.
    stream_duration: Option<f64>,
}

impl TimelineController {
    #[must_use]
    pub fn new(playlist: AdPlaylist) -> Self {
        let statuses = vec![BreakStatus::default(); playlist.len()];
        Self {
            playlist,
            statuses,
            ad_seek_policy: AdSeekPolicy::default(),
            stream_time: 0.0,
            last_tick_second: None,
            current_break: None,
            seek_target: None,
            stream_duration: None,
        }
    }

    /// Replace the in-ad stepping policy.
    #[must_use]
    pub fn with_ad_seek_policy(mut self, policy: AdSeekPolicy) -> Self {
        self.ad_seek_policy = policy;
        self
    }

    #[must_use]
    pub fn playlist(&self) -> &AdPlaylist {
        &self.playlist
    }

    /// Record the raw stream duration reported by the player.
    pub fn set_stream_duration(&mut self, duration: f64) {
        self.stream_duration = Some(duration);
    }

    /// Viewer-facing duration: raw duration minus all ad time.
    #[must_use]
    pub fn content_duration(&self) -> Option<f64> {
        self.stream_duration
            .map(|d| (d - self.playlist.total_ad_duration()).max(0.0))
    }

    #[must_use]
    pub fn current_break(&self) -> Option<&AdBreak> {
        self.current_break.and_then(|i| self.playlist.get(i))
    }

    #[must_use]
    pub fn is_in_break(&self) -> bool {
        self.current_break.is_some()
    }

    #[must_use]
    pub fn break_started(&self, index: usize) -> bool {
        self.statuses.get(index).is_some_and(|s| s.started)
    }

    #[must_use]
    pub fn break_completed(&self, index: usize) -> bool {
        self.statuses.get(index).is_some_and(|s| s.completed)
    }

    /// Position on the viewer clock for the most recent tick. Inside a
    /// break this is the elapsed time into the ad.
    #[must_use]
    pub fn display_time(&self) -> f64 {
        self.playlist.content_time_at(self.stream_time)
    }

    #[must_use]
    pub fn seek_target(&self) -> Option<f64> {
        self.seek_target
    }

    /// The player confirmed a seek; clear the pending target.
    pub fn seek_settled(&mut self) {
        self.seek_target = None;
    }

    /// Forget all playback status, as for a fresh session.
    pub fn reset(&mut self) {
        self.statuses.fill(BreakStatus::default());
        self.stream_time = 0.0;
        self.last_tick_second = None;
        self.current_break = None;
        self.seek_target = None;
    }

    /// Process a time-update tick at raw stream position `t`.
    ///
    /// Ticks within the same whole second as the previous one are no-ops.
    /// Otherwise the controller resolves break membership (inclusive on both
    /// ends), drives started/completed transitions, refuses to re-enter a
    /// completed break by scheduling a seek one second past its end, and
    /// self-heals a pending seek whose `seeked` notification never arrived
    /// once the observed position lands within two seconds of the target.
    pub fn tick(&mut self, t: f64) -> Vec<TimelineEffect> {
        #[allow(clippy::cast_possible_truncation)]
        let second = t.floor() as i64;
        if self.last_tick_second == Some(second) {
            self.stream_time = t;
            return Vec::new();
        }
        self.last_tick_second = Some(second);
        self.stream_time = t;

        let previous = self.current_break;
        let mut corrective = None;

        match self.playlist.break_at(t) {
            Some(idx) if self.statuses[idx].completed => {
                // Never re-enter a watched break. Land one second past its
                // end so its last frame is not shown again.
                corrective = Some(self.playlist.breaks()[idx].end_time + 1.0);
            }
            Some(idx) => {
                self.statuses[idx].started = true;
                if t >= self.playlist.breaks()[idx].end_time {
                    self.statuses[idx].completed = true;
                }
                self.current_break = Some(idx);
            }
            None => self.current_break = None,
        }

        let mut effects = Vec::new();
        if self.current_break != previous {
            effects.push(TimelineEffect::BreakChanged {
                previous,
                current: self.current_break,
            });
        }

        if let Some(target) = corrective {
            if (target - t).abs() > TIME_EPSILON {
                debug!(target, from = t, "skipping completed ad break");
                self.seek_target = Some(target);
                effects.push(TimelineEffect::Seek { target });
            }
        } else if let Some(pending) = self.seek_target {
            if (t - pending).abs() <= SEEK_SETTLE_WINDOW {
                self.seek_target = None;
            }
        }

        effects
    }

    /// Step size for coarse navigation, scaled to the stream but never
    /// below ten seconds.
    #[must_use]
    pub fn step_seconds(&self) -> f64 {
        self.content_duration()
            .map_or(MIN_STEP_SECONDS, |d| {
                (d / STEPS_PER_STREAM).round().max(MIN_STEP_SECONDS)
            })
    }

    /// Coarse forward/backward navigation by `steps` (+1 forward, -1 back).
    ///
    /// The candidate target is computed on the viewer clock, converted to
    /// raw stream time, then arbitrated against the next break at-or-after
    /// the lesser of the current and candidate positions:
    ///
    /// - landing exactly on a completed break's start hops to one second
    ///   past its end;
    /// - crossing an uncompleted break clamps to its start (unwatched ads
    ///   cannot be jumped over);
    /// - crossing a completed break passes unclamped.
    ///
    /// Returns the seek effect, or `None` when stepping is blocked or the
    /// target equals the current position.
    pub fn seek_step(&mut self, steps: i32) -> Option<TimelineEffect> {
        if steps == 0 {
            return None;
        }

        let current = self.stream_time;
        let mut target;

        if self.current_break.is_some() {
            match self.ad_seek_policy {
                AdSeekPolicy::Block => return None,
                AdSeekPolicy::PassThrough => {
                    target = current + f64::from(steps) * self.step_seconds();
                }
            }
        } else {
            let candidate_content =
                self.playlist.content_time_at(current) + f64::from(steps) * self.step_seconds();
            target = self.playlist.stream_time_at(candidate_content.max(0.0));

            let lower = current.min(target);
            if let Some(idx) = self.playlist.next_break_at_or_after(lower) {
                let b = &self.playlist.breaks()[idx];
                let completed = self.statuses[idx].completed;
                if completed && (target - b.start_time).abs() < TIME_EPSILON {
                    target = b.end_time + 1.0;
                } else if !completed && b.start_time < current.max(target) {
                    target = b.start_time;
                }
            }
        }

        if let Some(duration) = self.stream_duration {
            target = target.clamp(0.0, duration);
        } else {
            target = target.max(0.0);
        }

        if (target - current).abs() < TIME_EPSILON {
            return None;
        }
        debug!(steps, target, from = current, "seek step");
        self.seek_target = Some(target);
        Some(TimelineEffect::Seek { target })
    }
}
