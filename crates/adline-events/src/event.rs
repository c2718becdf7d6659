use crate::{AdSurfaceEvent, PlayerEvent, RemoteEvent};

/// Unified event for the playback pipeline.
///
/// Hierarchical: each boundary has its own variant with a sub-enum.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Host media player event.
    Player(PlayerEvent),
    /// Interactive-ad surface event.
    Surface(AdSurfaceEvent),
    /// Remote-control action.
    Remote(RemoteEvent),
}

impl From<PlayerEvent> for Event {
    fn from(e: PlayerEvent) -> Self {
        Self::Player(e)
    }
}

impl From<AdSurfaceEvent> for Event {
    fn from(e: AdSurfaceEvent) -> Self {
        Self::Surface(e)
    }
}

impl From<RemoteEvent> for Event {
    fn from(e: RemoteEvent) -> Self {
        Self::Remote(e)
    }
}
