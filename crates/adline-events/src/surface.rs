/// Lifecycle events emitted by the interactive-ad rendering surface as the
/// ad experience progresses.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum AdSurfaceEvent {
    AdStarted,
    AdDisplayed,
    AdFetchCompleted,
    AdCompleted,
    AdError { message: String },
    NoAdsAvailable,
    /// The viewer earned an ad-free pod credit: remaining ads in the current
    /// break should be skipped.
    AdFreePod,
    UserCancelStream,
    UserCancel,
    OptIn,
    OptOut,
    SkipCardShown,
}

impl AdSurfaceEvent {
    /// Whether this event terminates the interactive experience.
    ///
    /// Errors and no-fill count as completion: the sequel is always "advance
    /// to the next ad", never a failure state.
    #[must_use]
    pub fn is_completion(&self) -> bool {
        matches!(
            self,
            Self::AdCompleted | Self::AdError { .. } | Self::NoAdsAvailable | Self::UserCancelStream
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(AdSurfaceEvent::AdCompleted, true)]
    #[case(AdSurfaceEvent::AdError { message: "bad vast".into() }, true)]
    #[case(AdSurfaceEvent::NoAdsAvailable, true)]
    #[case(AdSurfaceEvent::UserCancelStream, true)]
    #[case(AdSurfaceEvent::AdStarted, false)]
    #[case(AdSurfaceEvent::AdFreePod, false)]
    #[case(AdSurfaceEvent::OptIn, false)]
    #[case(AdSurfaceEvent::SkipCardShown, false)]
    fn completion_set(#[case] event: AdSurfaceEvent, #[case] expected: bool) {
        assert_eq!(event.is_completion(), expected);
    }
}
