use adline_core::BreakId;
use adline_pod::PodAd;

use crate::types::{PlaybackPhase, PlaybackState};

/// Point-in-time snapshot of everything a playback UI renders.
///
/// The two visibility flags are pure functions of the phase and the current
/// ad: the video surface shows during content and during fallback video
/// ads; the interactive overlay shows only while an interactive ad is the
/// active one.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct PlaybackContext {
    pub phase: PlaybackPhase,
    pub state: PlaybackState,
    /// Position on the viewer clock, in seconds. During a stitched ad break
    /// this is the elapsed time into the ad.
    pub current_time: f64,
    /// Viewer-clock duration, in seconds.
    pub duration: f64,
    pub seeking: bool,
    pub buffering: bool,
    pub current_break: Option<BreakId>,
    pub current_ad: Option<PodAd>,
    /// 1-based index of the active ad within its pod; 0 outside a break.
    pub ad_index: usize,
    /// Seconds remaining on the active ad.
    pub ad_countdown: u32,
    pub show_video_surface: bool,
    pub show_interactive_ad: bool,
}

impl PlaybackContext {
    pub(crate) fn visibility(
        phase: PlaybackPhase,
        current_ad: Option<&PodAd>,
    ) -> (bool, bool) {
        let interactive = current_ad.is_some_and(PodAd::is_interactive);
        let show_video_surface =
            phase == PlaybackPhase::Content || (current_ad.is_some() && !interactive);
        let show_interactive_ad = phase == PlaybackPhase::Ad && interactive;
        (show_video_surface, show_interactive_ad)
    }
}

#[cfg(test)]
mod tests {
    use adline_core::AdId;
    use rstest::rstest;

    use super::*;

    fn ad(system: &str) -> PodAd {
        PodAd {
            ad_id: AdId::new("ad"),
            ad_title: None,
            ad_system: system.into(),
            ad_parameters: String::new(),
            duration: 30.0,
            video_url: None,
        }
    }

    #[rstest]
    #[case(PlaybackPhase::Content, None, true, false)]
    #[case(PlaybackPhase::Ad, None, false, false)]
    #[case(PlaybackPhase::Ad, Some("mp4"), true, false)]
    #[case(PlaybackPhase::Ad, Some("trueX"), false, true)]
    #[case(PlaybackPhase::Content, Some("mp4"), true, false)]
    fn visibility_follows_phase_and_ad_kind(
        #[case] phase: PlaybackPhase,
        #[case] system: Option<&str>,
        #[case] video: bool,
        #[case] interactive: bool,
    ) {
        let current = system.map(ad);
        assert_eq!(
            PlaybackContext::visibility(phase, current.as_ref()),
            (video, interactive)
        );
    }
}
