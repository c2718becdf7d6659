#![forbid(unsafe_code)]

//! # adline
//!
//! Facade crate for the adline playback stack: the ad-break timeline model
//! for stitched streams, CSAI pod sequencing, and the playback session that
//! ties them to a host media player.
//!
//! ## Quick start
//!
//! ```ignore
//! use adline::prelude::*;
//!
//! let content = ContentConfig::from_json(publisher_json)?;
//! let session = PlaybackSession::new(content, player, SessionConfig::default());
//! session.attach();
//! session.initialize()?;
//!
//! let context = session.context();
//! assert!(context.show_video_surface || context.show_interactive_ad);
//! ```

// ── Re-export sub-crates ────────────────────────────────────────────────

pub mod core {
    pub use adline_core::*;
}

pub mod events {
    pub use adline_events::*;
}

pub mod timeline {
    pub use adline_timeline::*;
}

pub mod pod {
    pub use adline_pod::*;
}

pub mod play {
    pub use adline_play::*;
}

/// The names most integrations need.
pub mod prelude {
    pub use adline_core::{AdId, BreakId};
    pub use adline_events::{AdSurfaceEvent, Event, EventBus, PlayerEvent, RemoteEvent};
    pub use adline_play::{
        ContentConfig, MediaPlayer, PlaybackContext, PlaybackError, PlaybackPhase,
        PlaybackSession, PlaybackState, SeekDirection, SessionConfig, SessionEvent,
    };
    pub use adline_pod::{PodAd, PodBreak, PodController, PodEvent};
    pub use adline_timeline::{AdPlaylist, AdSeekPolicy, TimelineController, TimelineEffect};
}
