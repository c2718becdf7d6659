use adline_core::{parse_time_label, serde_ext, BreakId};
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

/// A single ad break stitched into the main stream.
///
/// `content_time` is the viewer-clock offset the break is inserted at;
/// `start_time`/`end_time` are raw stream positions, computed once when the
/// playlist is built by accumulating the durations of all earlier breaks.
///
/// Breaks carry no started/completed flags: playback status is owned
/// exclusively by the [`TimelineController`](crate::TimelineController).
#[derive(Clone, Debug, PartialEq)]
pub struct AdBreak {
    pub id: BreakId,
    /// Seconds of ad content occupying this break in the raw stream.
    pub duration: f64,
    /// Reference used to configure the interactive ad experience, when the
    /// break carries one.
    pub interactive_ad_url: Option<Url>,
    /// Insertion offset in content (ad-excluded) time.
    pub content_time: f64,
    /// Raw stream position where the break begins.
    pub start_time: f64,
    /// Raw stream position where the break ends (`start_time + duration`).
    pub end_time: f64,
}

impl AdBreak {
    /// Inclusive-on-both-ends membership test in raw stream time.
    ///
    /// Boundary seconds belong to the break so that crossing transitions are
    /// always observed, even at coarse tick granularity.
    #[must_use]
    pub fn contains(&self, stream_time: f64) -> bool {
        self.start_time <= stream_time && stream_time <= self.end_time
    }
}

/// Resolved inputs for one playlist entry: everything except the raw stream
/// interval, which the playlist computes.
#[derive(Clone, Debug, PartialEq)]
pub struct AdBreakSpec {
    pub id: BreakId,
    pub content_time: f64,
    pub duration: f64,
    pub interactive_ad_url: Option<Url>,
}

/// Raw break descriptor as delivered by publisher break lists.
///
/// Field names mirror the publisher JSON. Parsing is lenient throughout: a
/// duration may arrive as a numeric string, the time offset is a loose
/// `H:MM:SS` label, and a bad interactive-ad URL degrades to none.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdBreakDescriptor {
    pub break_id: String,
    #[serde(deserialize_with = "serde_ext::lenient_f64")]
    pub video_ad_duration: f64,
    pub time_offset: String,
    pub vast_url: Option<String>,
}

impl AdBreakDescriptor {
    pub(crate) fn to_spec(&self) -> AdBreakSpec {
        let interactive_ad_url = self.vast_url.as_deref().and_then(|raw| {
            Url::parse(raw)
                .map_err(|e| warn!(break_id = %self.break_id, error = %e, "ignoring bad ad url"))
                .ok()
        });
        AdBreakSpec {
            id: BreakId::new(self.break_id.clone()),
            content_time: parse_time_label(&self.time_offset),
            duration: self.video_ad_duration,
            interactive_ad_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_parses_publisher_json() {
        let json = r#"{
            "breakId": "midroll-1",
            "videoAdDuration": "92",
            "timeOffset": "00:08:05",
            "vastUrl": "https://ads.example.com/vast/config?pod=1"
        }"#;
        let descriptor: AdBreakDescriptor = serde_json::from_str(json).unwrap();
        let spec = descriptor.to_spec();
        assert_eq!(spec.id, BreakId::new("midroll-1"));
        assert!((spec.duration - 92.0).abs() < f64::EPSILON);
        assert!((spec.content_time - 485.0).abs() < f64::EPSILON);
        assert!(spec.interactive_ad_url.is_some());
    }

    #[test]
    fn descriptor_tolerates_missing_fields() {
        let descriptor: AdBreakDescriptor = serde_json::from_str(r#"{"breakId": "preroll"}"#).unwrap();
        let spec = descriptor.to_spec();
        assert!(spec.duration.abs() < f64::EPSILON);
        assert!(spec.content_time.abs() < f64::EPSILON);
        assert!(spec.interactive_ad_url.is_none());
    }

    #[test]
    fn bad_url_degrades_to_none() {
        let descriptor = AdBreakDescriptor {
            break_id: "b".into(),
            video_ad_duration: 30.0,
            time_offset: "0".into(),
            vast_url: Some("not a url".into()),
        };
        assert!(descriptor.to_spec().interactive_ad_url.is_none());
    }

    #[test]
    fn membership_is_inclusive_on_both_ends() {
        let b = AdBreak {
            id: BreakId::new("b"),
            duration: 92.0,
            interactive_ad_url: None,
            content_time: 0.0,
            start_time: 0.0,
            end_time: 92.0,
        };
        assert!(b.contains(0.0));
        assert!(b.contains(92.0));
        assert!(b.contains(45.5));
        assert!(!b.contains(92.1));
        assert!(!b.contains(-0.1));
    }
}
