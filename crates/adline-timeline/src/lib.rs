#![forbid(unsafe_code)]

//! Ad-break timeline model for streams with ads stitched into the media.
//!
//! A stitched stream is one continuous asset whose clock ("raw stream time")
//! includes every ad segment. The viewer-facing clock ("content time")
//! excludes them. This crate owns the mapping between the two, the playlist
//! of break intervals, and the [`TimelineController`] that reconciles live
//! player ticks against that playlist — deciding which break is active,
//! which breaks are done, and what corrective seeks keep the viewer from
//! scrubbing back into or jumping over the wrong ones.

mod ad_break;
mod controller;
mod playlist;

pub use ad_break::{AdBreak, AdBreakDescriptor, AdBreakSpec};
pub use controller::{AdSeekPolicy, TimelineController, TimelineEffect};
pub use playlist::AdPlaylist;
