use crate::ad_break::{AdBreak, AdBreakDescriptor, AdBreakSpec};

/// Ordered, boundary-resolved list of ad breaks for one playback session.
///
/// Built once from publisher descriptors; topology (offsets and raw
/// intervals) never changes afterwards. The resulting `[start_time,
/// end_time)` intervals are non-overlapping and ordered: for adjacent breaks
/// `end_time_i <= start_time_{i+1}`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdPlaylist {
    breaks: Vec<AdBreak>,
}

impl AdPlaylist {
    /// Empty playlist: every lookup degrades to "no break" and both time
    /// conversions become the identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw publisher descriptors. Never fails; an empty slice
    /// produces an empty playlist.
    #[must_use]
    pub fn from_descriptors(descriptors: &[AdBreakDescriptor]) -> Self {
        Self::from_specs(descriptors.iter().map(AdBreakDescriptor::to_spec).collect())
    }

    /// Build from already-resolved break specs.
    ///
    /// Specs are ordered by content offset, then raw stream intervals are
    /// assigned by accumulating the durations of all earlier breaks:
    /// `start = content_time + total_prior_ad_duration`.
    #[must_use]
    pub fn from_specs(mut specs: Vec<AdBreakSpec>) -> Self {
        specs.sort_by(|a, b| a.content_time.total_cmp(&b.content_time));

        let mut total_ads_duration = 0.0;
        let breaks = specs
            .into_iter()
            .map(|spec| {
                let start_time = spec.content_time + total_ads_duration;
                let end_time = start_time + spec.duration;
                total_ads_duration += spec.duration;
                AdBreak {
                    id: spec.id,
                    duration: spec.duration,
                    interactive_ad_url: spec.interactive_ad_url,
                    content_time: spec.content_time,
                    start_time,
                    end_time,
                }
            })
            .collect();
        Self { breaks }
    }

    #[must_use]
    pub fn breaks(&self) -> &[AdBreak] {
        &self.breaks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.breaks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.breaks.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AdBreak> {
        self.breaks.get(index)
    }

    /// Seconds of ad content across the whole playlist.
    #[must_use]
    pub fn total_ad_duration(&self) -> f64 {
        self.breaks.iter().map(|b| b.duration).sum()
    }

    /// Index of the break whose raw interval contains `stream_time`,
    /// inclusive on both ends.
    #[must_use]
    pub fn break_at(&self, stream_time: f64) -> Option<usize> {
        self.breaks.iter().position(|b| b.contains(stream_time))
    }

    /// Index of the next break that starts at or after `stream_time`.
    ///
    /// A position inside a break resolves to the following break, not the
    /// one it is inside.
    #[must_use]
    pub fn next_break_at_or_after(&self, stream_time: f64) -> Option<usize> {
        self.breaks
            .iter()
            .position(|b| stream_time <= b.start_time)
    }

    /// Map a raw stream position to the viewer-facing content clock.
    ///
    /// Breaks strictly in the future do not affect the result. Inside a
    /// break the value reported is the elapsed time *into the ad* — during
    /// an ad the position shown is the ad's own clock, not content time.
    /// Past a break, its duration is excluded from the running result.
    #[must_use]
    pub fn content_time_at(&self, stream_time: f64) -> f64 {
        let mut result = stream_time;
        for b in &self.breaks {
            if stream_time < b.start_time {
                break;
            }
            if stream_time <= b.end_time {
                return stream_time - b.start_time;
            }
            result -= b.duration;
        }
        result
    }

    /// Map a content-clock position back to raw stream time: every break
    /// inserted strictly before `content_time` adds its duration.
    #[must_use]
    pub fn stream_time_at(&self, content_time: f64) -> f64 {
        let mut result = content_time;
        for b in &self.breaks {
            if b.content_time < content_time {
                result += b.duration;
            } else {
                break;
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use adline_core::BreakId;

    use super::*;

    fn spec(id: &str, content_time: f64, duration: f64) -> AdBreakSpec {
        AdBreakSpec {
            id: BreakId::new(id),
            content_time,
            duration,
            interactive_ad_url: None,
        }
    }

    /// Preroll only: 92s at content offset 0.
    fn preroll_playlist() -> AdPlaylist {
        AdPlaylist::from_specs(vec![spec("preroll", 0.0, 92.0)])
    }

    /// Preroll plus midroll 8:05 into content, 92s each.
    fn two_break_playlist() -> AdPlaylist {
        AdPlaylist::from_specs(vec![spec("preroll", 0.0, 92.0), spec("midroll-1", 485.0, 92.0)])
    }

    #[test]
    fn builder_accumulates_prior_durations() {
        let playlist = two_break_playlist();
        let midroll = &playlist.breaks()[1];
        assert!((midroll.start_time - 577.0).abs() < f64::EPSILON);
        assert!((midroll.end_time - 669.0).abs() < f64::EPSILON);
    }

    #[test]
    fn builder_orders_and_separates_intervals() {
        // Deliberately out of order on input.
        let playlist = AdPlaylist::from_specs(vec![
            spec("c", 900.0, 30.0),
            spec("a", 0.0, 92.0),
            spec("b", 485.0, 92.0),
        ]);
        for pair in playlist.breaks().windows(2) {
            assert!(pair[0].end_time <= pair[1].start_time);
            assert!(pair[0].content_time <= pair[1].content_time);
        }
    }

    #[test]
    fn empty_playlist_is_identity() {
        let playlist = AdPlaylist::new();
        assert!(playlist.break_at(100.0).is_none());
        assert!(playlist.next_break_at_or_after(0.0).is_none());
        assert!((playlist.content_time_at(123.5) - 123.5).abs() < f64::EPSILON);
        assert!((playlist.stream_time_at(123.5) - 123.5).abs() < f64::EPSILON);
    }

    #[test]
    fn preroll_shifts_all_later_content() {
        let playlist = preroll_playlist();
        assert!((playlist.stream_time_at(0.0) - 0.0).abs() < f64::EPSILON);
        // Any content time after the preroll carries its 92s displacement.
        assert!((playlist.stream_time_at(300.0) - 392.0).abs() < f64::EPSILON);
        assert!((playlist.stream_time_at(600.0) - 692.0).abs() < f64::EPSILON);
    }

    #[test]
    fn inside_a_break_reports_elapsed_ad_time() {
        let playlist = two_break_playlist();
        // 600 is inside the midroll's raw interval [577, 669].
        assert!((playlist.content_time_at(600.0) - 23.0).abs() < f64::EPSILON);
    }

    #[test]
    fn break_boundaries_report_zero_and_duration() {
        let playlist = two_break_playlist();
        for b in playlist.breaks() {
            assert!(playlist.content_time_at(b.start_time).abs() < f64::EPSILON);
            assert!((playlist.content_time_at(b.end_time) - b.duration).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn round_trip_outside_breaks() {
        let playlist = two_break_playlist();
        // Raw times strictly outside every break interval.
        for t in [100.0, 300.0, 570.0, 700.0, 1000.0] {
            assert!(
                playlist.break_at(t).is_none(),
                "test fixture expects {t} outside all breaks"
            );
            let back = playlist.stream_time_at(playlist.content_time_at(t));
            assert!((back - t).abs() < 1e-9, "round trip failed for {t}: {back}");
        }
    }

    #[test]
    fn conversions_are_idempotent() {
        let playlist = two_break_playlist();
        assert_eq!(
            playlist.content_time_at(600.0).to_bits(),
            playlist.content_time_at(600.0).to_bits()
        );
        assert_eq!(
            playlist.stream_time_at(485.0).to_bits(),
            playlist.stream_time_at(485.0).to_bits()
        );
    }

    #[test]
    fn break_lookup_inclusive_bounds() {
        let playlist = two_break_playlist();
        assert_eq!(playlist.break_at(577.0), Some(1));
        assert_eq!(playlist.break_at(669.0), Some(1));
        assert_eq!(playlist.break_at(669.5), None);
        assert_eq!(playlist.break_at(576.9), None);
    }

    #[test]
    fn next_break_skips_past_and_inside_positions() {
        let playlist = two_break_playlist();
        // Before the preroll start: the preroll itself.
        assert_eq!(playlist.next_break_at_or_after(0.0), Some(0));
        // Between breaks: the midroll.
        assert_eq!(playlist.next_break_at_or_after(200.0), Some(1));
        // Inside the midroll: nothing follows.
        assert_eq!(playlist.next_break_at_or_after(600.0), None);
        // Past everything.
        assert_eq!(playlist.next_break_at_or_after(700.0), None);
    }

    #[test]
    fn total_ad_duration_sums_breaks() {
        assert!((two_break_playlist().total_ad_duration() - 184.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_descriptors_handles_empty_input() {
        assert!(AdPlaylist::from_descriptors(&[]).is_empty());
    }
}
