use serde::{Deserialize, Serialize};

/// What the viewer is currently watching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PlaybackPhase {
    #[default]
    Content,
    Ad,
}

/// Transport state of the main content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PlaybackState {
    #[default]
    NotStarted,
    Playing,
    Paused,
}

/// How ads are delivered for a piece of content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertionKind {
    /// Client-side insertion: each pod is a list of separately loaded
    /// assets shown while the main content is paused.
    Csai,
    /// Server-stitched: ad segments are spliced into one continuous stream
    /// and the timeline controller arbitrates seeks around them.
    Ssai,
}

/// Direction of a coarse remote-control seek press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeekDirection {
    Forward,
    Backward,
}
