#![forbid(unsafe_code)]

//! Playback session for ad-integrated streams.
//!
//! Ties the timeline and pod state machines to a host [`MediaPlayer`]: the
//! session consumes player ticks, remote-control actions, and interactive-ad
//! surface events, and exposes a reactive [`PlaybackContext`] snapshot plus
//! a [`SessionEvent`] stream for UI consumers.

mod config;
mod context;
mod error;
mod events;
mod player;
mod seek;
mod session;
mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use config::{ContentConfig, SessionConfig};
pub use context::PlaybackContext;
pub use error::PlaybackError;
pub use events::SessionEvent;
pub use player::MediaPlayer;
pub use seek::{OnSeekReady, SeekAccumulator};
pub use session::PlaybackSession;
pub use types::{InsertionKind, PlaybackPhase, PlaybackState, SeekDirection};
