use adline_core::BreakId;

use crate::types::{PlaybackPhase, PlaybackState};

/// Events published by the playback session for UI consumers.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum SessionEvent {
    PhaseChanged { phase: PlaybackPhase },
    StateChanged { state: PlaybackState },
    /// Raw player position moved.
    TimeChanged { time: f64 },
    DurationChanged { duration: f64 },
    /// The active ad break changed; `None` means back to content.
    AdBreakChanged { break_id: Option<BreakId> },
    /// A seek was issued to the player (corrective, step, or accumulated).
    SeekApplied { target: f64 },
    /// The stream played to its end.
    Ended,
}
