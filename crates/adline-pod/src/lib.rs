#![forbid(unsafe_code)]

//! Ad pod sequencing for client-side ad insertion.
//!
//! In the CSAI model ad breaks are not stitched into the main stream: each
//! break ("pod") is a list of separately loaded assets — fallback video ads
//! plus at most one interactive experience — shown in sequence while the
//! main content is paused. This crate owns which pod should start, which ad
//! within it is active, the ad-free-pod skip credit, and the one-second
//! countdown that auto-advances fallback ads.

mod config;
mod controller;
mod events;
mod sequencer;

pub use config::{AdKind, BreakPosition, PodAd, PodBreak};
pub use controller::PodController;
pub use events::PodEvent;
pub use sequencer::{Advance, PodSequencer};
