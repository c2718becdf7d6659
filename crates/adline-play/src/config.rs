use std::time::Duration;

use adline_pod::{PodAd, PodBreak};
use adline_timeline::{AdBreakSpec, AdPlaylist, AdSeekPolicy};
use derivative::Derivative;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::PlaybackError;
use crate::types::InsertionKind;

// -- SessionConfig ----------------------------------------------------------------

/// Tunables for a playback session.
#[derive(Clone, Debug, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
pub struct SessionConfig {
    /// Seconds added per remote seek press. Default: 5.
    #[derivative(Default(value = "5.0"))]
    pub seek_delta: f64,
    /// Window within which repeated presses coalesce into one seek.
    /// Default: 2 seconds.
    #[derivative(Default(value = "Duration::from_millis(2000)"))]
    pub accumulation_window: Duration,
    /// What a seek-step does while inside an ad break (stitched streams).
    /// Default: blocked.
    pub ad_seek_policy: AdSeekPolicy,
}

// -- ContentConfig ----------------------------------------------------------------

/// One playable title with its ad schedule, as delivered by the publisher.
///
/// The `ad_breaks` structure is a parsed VAST/VMAP-style response; network
/// fetching and XML parsing happen upstream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentConfig {
    pub id: String,
    /// Ad delivery model for this title.
    #[serde(rename = "type")]
    pub insertion: InsertionKind,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover: Option<Url>,
    pub video_url: Url,
    #[serde(default)]
    pub ad_breaks: Vec<PodBreak>,
}

impl ContentConfig {
    /// Parse a content configuration from publisher JSON.
    pub fn from_json(json: &str) -> Result<Self, PlaybackError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Derive the stitched-stream ad playlist from the pod schedule.
    ///
    /// For stitched content each pod's start time is its content-clock
    /// insertion offset; the playlist assigns the raw stream intervals.
    #[must_use]
    pub fn stitched_playlist(&self) -> AdPlaylist {
        let specs = self
            .ad_breaks
            .iter()
            .map(|pod| AdBreakSpec {
                id: pod.break_id.clone(),
                content_time: pod.start_time,
                duration: pod.duration,
                interactive_ad_url: pod.interactive_ad().and_then(PodAd::vast_config_url),
            })
            .collect();
        AdPlaylist::from_specs(specs)
    }
}
