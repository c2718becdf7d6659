use adline_core::{AdId, BreakId};

/// Events emitted by the pod controller as a break sequences through its
/// ads.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum PodEvent {
    /// A pod became active.
    BreakStarted { break_id: BreakId },
    /// An ad within the active pod started. `index` is 1-based for display.
    AdStarted {
        ad_id: AdId,
        index: usize,
        interactive: bool,
    },
    /// One second elapsed on the active fallback ad.
    CountdownTick { remaining: u32 },
    /// The pod ran out of ads (played or skipped) and is done.
    BreakCompleted { break_id: BreakId },
}
