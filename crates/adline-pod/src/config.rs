use adline_core::{serde_ext, AdId, BreakId};
use serde::{Deserialize, Serialize};
use url::Url;

/// Where a pod sits relative to the main content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakPosition {
    /// Plays before content; triggers only at position zero.
    Preroll,
    /// Plays once content reaches the break's start time.
    Midroll,
}

/// Broad classification of an ad asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdKind {
    /// Web-rendered interactive experience; completion arrives via surface
    /// events, and it may grant an ad-free pod credit.
    Interactive,
    /// Plain video ad played on the video surface for its declared duration.
    Video,
}

/// One ad within a pod, as parsed from the publisher's break list.
///
/// Field names mirror the publisher JSON. `ad_parameters` is an opaque JSON
/// string handed to the interactive surface unmodified.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodAd {
    pub ad_id: AdId,
    #[serde(default)]
    pub ad_title: Option<String>,
    pub ad_system: String,
    #[serde(default)]
    pub ad_parameters: String,
    #[serde(deserialize_with = "serde_ext::lenient_f64")]
    pub duration: f64,
    #[serde(default)]
    pub video_url: Option<Url>,
}

impl PodAd {
    /// Classify by the publisher's ad-system tag. Interactive systems are
    /// matched case-insensitively; everything else is a plain video ad.
    #[must_use]
    pub fn kind(&self) -> AdKind {
        let system = self.ad_system.to_ascii_lowercase();
        if system == "truex" || system == "idvx" {
            AdKind::Interactive
        } else {
            AdKind::Video
        }
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.kind() == AdKind::Interactive
    }

    /// Parse `ad_parameters` as JSON for the interactive surface.
    ///
    /// Malformed input yields an empty object; the surface then reports an
    /// ad error, which sequences as a normal completion.
    #[must_use]
    pub fn parameters_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.ad_parameters)
            .unwrap_or_else(|_| serde_json::Value::Object(serde_json::Map::new()))
    }

    /// Interactive-ad configuration URL, when the parameters carry one.
    #[must_use]
    pub fn vast_config_url(&self) -> Option<Url> {
        self.parameters_json()
            .get("vast_config_url")
            .and_then(|v| v.as_str())
            .and_then(|raw| Url::parse(raw).ok())
    }
}

/// A scheduled pod: one or more ads shown in sequence at a content position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodBreak {
    pub break_id: BreakId,
    pub break_type: BreakPosition,
    /// Content-time position the pod triggers at, in seconds.
    #[serde(deserialize_with = "serde_ext::lenient_f64")]
    pub start_time: f64,
    /// Total seconds of ad content scheduled for this pod.
    #[serde(deserialize_with = "serde_ext::lenient_f64")]
    pub duration: f64,
    pub ads: Vec<PodAd>,
}

impl PodBreak {
    /// The pod's interactive ad, if it carries one.
    #[must_use]
    pub fn interactive_ad(&self) -> Option<&PodAd> {
        self.ads.iter().find(|ad| ad.is_interactive())
    }
}
