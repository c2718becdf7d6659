use adline_core::{AdId, BreakId, TIME_EPSILON};

use crate::config::{BreakPosition, PodAd, PodBreak};

/// Outcome of moving the ad cursor.
#[derive(Clone, Debug, PartialEq)]
pub enum Advance {
    /// Another ad should play.
    Next(PodAd),
    /// The pod ran out of ads; the break is now complete.
    Completed(BreakId),
    /// No break is active.
    Idle,
}

/// Sequencing state for the pod that is currently showing.
#[derive(Clone, Debug)]
struct ActiveBreak {
    pod: PodBreak,
    current_index: usize,
    /// Ads skipped by an ad-free-pod credit.
    skipped: Vec<AdId>,
    ad_free_pod: bool,
}

/// Decides which pod should start and walks the ads inside it.
///
/// Pure state machine: no timers, no player. Completed pods are remembered
/// for the whole session so they never re-trigger; [`PodSequencer::reset`]
/// starts the history over.
#[derive(Debug, Default)]
pub struct PodSequencer {
    completed: Vec<BreakId>,
    active: Option<ActiveBreak>,
}

impl PodSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The pod that should start at `current_time`, if any.
    ///
    /// Scans in order, skipping completed pods. A preroll triggers only at
    /// position zero. A midroll triggers once `current_time` reaches its
    /// start, but never while it is already the active pod — repeated
    /// evaluation during the brief moments content resumes must not
    /// re-trigger the same break.
    #[must_use]
    pub fn next_break_to_start<'a>(
        &self,
        breaks: &'a [PodBreak],
        current_time: f64,
    ) -> Option<&'a PodBreak> {
        for pod in breaks {
            if self.completed.contains(&pod.break_id) {
                continue;
            }
            match pod.break_type {
                BreakPosition::Preroll => {
                    if current_time.abs() < TIME_EPSILON {
                        return Some(pod);
                    }
                }
                BreakPosition::Midroll => {
                    if current_time >= pod.start_time
                        && self.active_break_id() != Some(&pod.break_id)
                    {
                        return Some(pod);
                    }
                }
            }
        }
        None
    }

    /// Make `pod` the active break with a fresh cursor, empty skip set, and
    /// no ad-free-pod credit.
    pub fn start_break(&mut self, pod: &PodBreak) {
        self.active = Some(ActiveBreak {
            pod: pod.clone(),
            current_index: 0,
            skipped: Vec::new(),
            ad_free_pod: false,
        });
    }

    /// Resolve the ad at the cursor, hopping over skip-set entries. An
    /// exhausted or empty pod completes immediately.
    pub fn current_ad(&mut self) -> Advance {
        enum Cursor {
            Playable(PodAd),
            Skipped,
            Exhausted,
            Idle,
        }

        let cursor = match self.active.as_ref() {
            None => Cursor::Idle,
            Some(active) => match active.pod.ads.get(active.current_index) {
                Some(ad) if !active.skipped.contains(&ad.ad_id) => Cursor::Playable(ad.clone()),
                Some(_) => Cursor::Skipped,
                None => Cursor::Exhausted,
            },
        };
        match cursor {
            Cursor::Playable(ad) => Advance::Next(ad),
            Cursor::Skipped => self.advance(),
            Cursor::Exhausted => self.complete_active(),
            Cursor::Idle => Advance::Idle,
        }
    }

    /// Move the cursor to the next non-skipped ad, completing the break when
    /// none remain.
    pub fn advance(&mut self) -> Advance {
        let next = {
            let Some(active) = self.active.as_mut() else {
                return Advance::Idle;
            };
            let mut found = None;
            for i in active.current_index + 1..active.pod.ads.len() {
                let ad = &active.pod.ads[i];
                if !active.skipped.contains(&ad.ad_id) {
                    active.current_index = i;
                    found = Some(ad.clone());
                    break;
                }
            }
            found
        };
        match next {
            Some(ad) => Advance::Next(ad),
            None => self.complete_active(),
        }
    }

    /// Apply an ad-free-pod credit: every ad after the cursor joins the skip
    /// set, so the next advance completes the break.
    pub fn grant_ad_free_pod(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.ad_free_pod = true;
        for ad in active.pod.ads.iter().skip(active.current_index + 1) {
            active.skipped.push(ad.ad_id.clone());
        }
    }

    /// Retire the active break into the completed history.
    fn complete_active(&mut self) -> Advance {
        match self.active.take() {
            Some(active) => {
                let id = active.pod.break_id;
                self.completed.push(id.clone());
                Advance::Completed(id)
            }
            None => Advance::Idle,
        }
    }

    #[must_use]
    pub fn active_break_id(&self) -> Option<&BreakId> {
        self.active.as_ref().map(|a| &a.pod.break_id)
    }

    #[must_use]
    pub fn active_break(&self) -> Option<&PodBreak> {
        self.active.as_ref().map(|a| &a.pod)
    }

    /// 1-based index of the cursor for display; 0 when no break is active.
    #[must_use]
    pub fn display_index(&self) -> usize {
        self.active.as_ref().map_or(0, |a| a.current_index + 1)
    }

    #[must_use]
    pub fn is_in_break(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn has_ad_free_pod(&self) -> bool {
        self.active.as_ref().is_some_and(|a| a.ad_free_pod)
    }

    #[must_use]
    pub fn completed_breaks(&self) -> &[BreakId] {
        &self.completed
    }

    /// Forget all history, as for a fresh session.
    pub fn reset(&mut self) {
        self.completed.clear();
        self.active = None;
    }
}
