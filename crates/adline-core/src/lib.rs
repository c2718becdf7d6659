#![forbid(unsafe_code)]

//! Shared building blocks for the adline playback crates: stable break/ad
//! identifiers, lenient time-label parsing, and display formatting.

mod ids;
mod label;

pub mod serde_ext;

pub use ids::{AdId, BreakId};
pub use label::{parse_time_label, time_label};

/// Tolerance for comparing positions expressed in seconds.
///
/// Player runtimes report fractional times; two positions closer than this
/// are treated as the same instant.
pub const TIME_EPSILON: f64 = 1e-6;
