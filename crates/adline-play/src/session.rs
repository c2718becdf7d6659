//! The playback session: one content item, one player, one ad schedule.
//!
//! All state transitions are driven by discrete events — player ticks,
//! remote actions, ad-surface lifecycle — delivered either by hand (tests)
//! or by the pump task spawned with [`PlaybackSession::attach`]. Transport
//! calls to the player are fire-and-forget; their outcomes come back as
//! player events.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use adline_events::{AdSurfaceEvent, Event, EventBus, PlayerEvent, RemoteEvent};
use adline_pod::{PodController, PodEvent};
use adline_timeline::{TimelineController, TimelineEffect};
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use crate::config::{ContentConfig, SessionConfig};
use crate::context::PlaybackContext;
use crate::error::PlaybackError;
use crate::events::SessionEvent;
use crate::player::MediaPlayer;
use crate::seek::SeekAccumulator;
use crate::types::{InsertionKind, PlaybackPhase, PlaybackState, SeekDirection};

#[derive(Clone, Copy, Debug, Default)]
struct SessionState {
    phase: PlaybackPhase,
    playback: PlaybackState,
    current_time: f64,
    duration: f64,
    seeking: bool,
    buffering: bool,
}

/// Owns the playback state machine for one session.
///
/// The session holds exactly one player handle for its lifetime and is the
/// single writer of all playback state. Dropping or disposing it cancels
/// the pump task, the seek flush timer, and any ad countdown.
pub struct PlaybackSession {
    config: SessionConfig,
    content: ContentConfig,
    player: Arc<dyn MediaPlayer>,
    timeline: Mutex<TimelineController>,
    pod: Arc<PodController>,
    accumulator: Arc<SeekAccumulator>,
    state: Mutex<SessionState>,
    bound_surface: Mutex<Option<String>>,
    events_tx: broadcast::Sender<SessionEvent>,
    cancel: CancellationToken,
    disposed: AtomicBool,
}

impl PlaybackSession {
    #[must_use]
    pub fn new(
        content: ContentConfig,
        player: Arc<dyn MediaPlayer>,
        config: SessionConfig,
    ) -> Arc<Self> {
        let playlist = match content.insertion {
            InsertionKind::Ssai => content.stitched_playlist(),
            InsertionKind::Csai => adline_timeline::AdPlaylist::new(),
        };
        let timeline =
            TimelineController::new(playlist).with_ad_seek_policy(config.ad_seek_policy);
        let (events_tx, _) = broadcast::channel(64);

        Arc::new_cyclic(|weak: &Weak<Self>| {
            let seek_target = weak.clone();
            let accumulator = SeekAccumulator::new(
                config.seek_delta,
                config.accumulation_window,
                Box::new(move |delta| {
                    if let Some(session) = seek_target.upgrade() {
                        session.apply_seek_delta(delta);
                    }
                }),
            );
            Self {
                config,
                content,
                player,
                timeline: Mutex::new(timeline),
                pod: PodController::new(),
                accumulator,
                state: Mutex::new(SessionState::default()),
                bound_surface: Mutex::new(None),
                events_tx,
                cancel: CancellationToken::new(),
                disposed: AtomicBool::new(false),
            }
        })
    }

    /// Subscribe to session events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events_tx.subscribe()
    }

    #[must_use]
    pub fn content(&self) -> &ContentConfig {
        &self.content
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Spawn the pump task that feeds player and pod events into the
    /// session. Requires a tokio runtime; cancelled on dispose.
    pub fn attach(self: &Arc<Self>) {
        let mut player_rx = self.player.subscribe();
        let mut pod_rx = self.pod.subscribe();
        let cancel = self.cancel.clone();
        let weak = Arc::downgrade(self);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    () = cancel.cancelled() => return,
                    event = player_rx.recv() => match event {
                        Ok(event) => {
                            let Some(session) = weak.upgrade() else { return };
                            session.handle_player_event(event);
                        }
                        Err(broadcast::error::RecvError::Lagged(missed)) => {
                            warn!(missed, "player events lagged");
                        }
                        Err(broadcast::error::RecvError::Closed) => return,
                    },
                    event = pod_rx.recv() => match event {
                        Ok(event) => {
                            let Some(session) = weak.upgrade() else { return };
                            session.handle_pod_event(event);
                        }
                        Err(broadcast::error::RecvError::Lagged(missed)) => {
                            warn!(missed, "pod events lagged");
                        }
                        Err(broadcast::error::RecvError::Closed) => return,
                    },
                }
            }
        });
    }

    /// Route a unified platform bus into the session. Alternative to wiring
    /// the surface and remote sources by hand; cancelled on dispose.
    pub fn attach_bus(self: &Arc<Self>, bus: &EventBus) {
        let mut rx = bus.subscribe();
        let cancel = self.cancel.clone();
        let weak = Arc::downgrade(self);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    () = cancel.cancelled() => return,
                    event = rx.recv() => match event {
                        Ok(event) => {
                            let Some(session) = weak.upgrade() else { return };
                            match event {
                                Event::Player(e) => session.handle_player_event(e),
                                Event::Surface(e) => session.handle_surface_event(e),
                                Event::Remote(e) => session.handle_remote(e),
                            }
                        }
                        Err(broadcast::error::RecvError::Lagged(missed)) => {
                            warn!(missed, "bus events lagged");
                        }
                        Err(broadcast::error::RecvError::Closed) => return,
                    },
                }
            }
        });
    }

    /// Begin the session: probe for a preroll pod, otherwise start content.
    pub fn initialize(&self) -> Result<(), PlaybackError> {
        if self.disposed.load(Ordering::Acquire) {
            return Err(PlaybackError::Disposed);
        }
        match self.content.insertion {
            InsertionKind::Csai => {
                if let Some(pod) = self.pod.next_break_to_start(&self.content.ad_breaks, 0.0) {
                    debug!(break_id = %pod.break_id, "preroll pod at start");
                    self.set_phase(PlaybackPhase::Ad);
                    self.pod.start_break(&pod);
                } else {
                    self.start_content();
                }
            }
            // Stitched streams carry their preroll in the media itself.
            InsertionKind::Ssai => self.start_content(),
        }
        Ok(())
    }

    /// Attach a platform render surface and forward it to the player.
    pub fn bind_surface(&self, handle: &str) {
        *self.bound_surface.lock() = Some(handle.to_owned());
        self.player.bind_surface(handle);
    }

    /// Load the content and start playing at an optional position.
    pub fn start_at(&self, position: f64) {
        self.player.load(&self.content.video_url);
        if position > 0.0 {
            self.player.seek(position);
        }
        self.player.play();
    }

    pub fn play(&self) {
        self.player.play();
    }

    pub fn pause(&self) {
        self.player.pause();
    }

    /// Register a coarse seek press from the remote.
    ///
    /// Pod-based content accumulates presses and seeks the content clock;
    /// stitched content goes through the timeline's step arbitration.
    pub fn register_seek(&self, direction: SeekDirection) {
        match self.content.insertion {
            InsertionKind::Csai => {
                if self.state.lock().phase == PlaybackPhase::Content {
                    self.accumulator.register(direction);
                }
            }
            InsertionKind::Ssai => {
                let steps = match direction {
                    SeekDirection::Forward => 1,
                    SeekDirection::Backward => -1,
                };
                self.seek_step(steps);
            }
        }
    }

    /// Step the stitched timeline by signed `steps` and perform the result.
    pub fn seek_step(&self, steps: i32) {
        let effect = self.timeline.lock().seek_step(steps);
        if let Some(effect) = effect {
            self.apply_timeline_effect(effect);
        }
    }

    /// Complete the active pod ad (terminal surface event arrived out of
    /// band, or the host skipped it).
    pub fn advance_ad(&self) {
        self.pod.advance();
    }

    /// Current snapshot for rendering.
    #[must_use]
    pub fn context(&self) -> PlaybackContext {
        let state = *self.state.lock();
        let current_ad = self.pod.current_ad();
        let (show_video_surface, show_interactive_ad) =
            PlaybackContext::visibility(state.phase, current_ad.as_ref());

        let (current_time, duration, current_break) = match self.content.insertion {
            InsertionKind::Csai => (
                state.current_time,
                state.duration,
                self.pod.active_break_id(),
            ),
            InsertionKind::Ssai => {
                let timeline = self.timeline.lock();
                (
                    timeline.display_time(),
                    timeline.content_duration().unwrap_or(state.duration),
                    timeline.current_break().map(|b| b.id.clone()),
                )
            }
        };

        PlaybackContext {
            phase: state.phase,
            state: state.playback,
            current_time,
            duration,
            seeking: state.seeking,
            buffering: state.buffering,
            current_break,
            current_ad,
            ad_index: self.pod.display_index(),
            ad_countdown: self.pod.countdown(),
            show_video_surface,
            show_interactive_ad,
        }
    }

    /// Feed one player event into the state machine.
    pub fn handle_player_event(&self, event: PlayerEvent) {
        if self.disposed.load(Ordering::Acquire) {
            return;
        }
        match event {
            PlayerEvent::TimeUpdate { time } => self.on_time_update(time),
            PlayerEvent::DurationChanged { duration } => {
                self.state.lock().duration = duration;
                if self.content.insertion == InsertionKind::Ssai {
                    self.timeline.lock().set_stream_duration(duration);
                }
                let _ = self.events_tx.send(SessionEvent::DurationChanged { duration });
            }
            PlayerEvent::Playing => self.set_playback_state(PlaybackState::Playing),
            PlayerEvent::Paused => self.set_playback_state(PlaybackState::Paused),
            PlayerEvent::Seeking => self.state.lock().seeking = true,
            PlayerEvent::Seeked => {
                self.state.lock().seeking = false;
                self.timeline.lock().seek_settled();
            }
            PlayerEvent::Waiting => self.state.lock().buffering = true,
            PlayerEvent::CanPlay => self.state.lock().buffering = false,
            PlayerEvent::Ended => {
                let _ = self.events_tx.send(SessionEvent::Ended);
            }
            _ => trace!(?event, "unhandled player event"),
        }
    }

    /// Feed one pod event into the state machine.
    pub fn handle_pod_event(&self, event: PodEvent) {
        if self.disposed.load(Ordering::Acquire) {
            return;
        }
        match event {
            PodEvent::BreakStarted { break_id } => {
                let _ = self.events_tx.send(SessionEvent::AdBreakChanged {
                    break_id: Some(break_id),
                });
            }
            PodEvent::BreakCompleted { break_id } => {
                debug!(break_id = %break_id, "pod finished, resuming content");
                self.set_phase(PlaybackPhase::Content);
                let _ = self
                    .events_tx
                    .send(SessionEvent::AdBreakChanged { break_id: None });
                let not_started = self.state.lock().playback == PlaybackState::NotStarted;
                if not_started {
                    self.player.load(&self.content.video_url);
                }
                self.player.play();
            }
            PodEvent::AdStarted { .. } | PodEvent::CountdownTick { .. } => {}
            _ => trace!(?event, "unhandled pod event"),
        }
    }

    /// Feed one interactive-ad surface event into the state machine.
    ///
    /// Only two things matter here: the ad-free-pod credit mass-skips the
    /// rest of the pod, and every terminal event advances. Errors and
    /// no-fill are completions, not failures.
    pub fn handle_surface_event(&self, event: AdSurfaceEvent) {
        if self.disposed.load(Ordering::Acquire) {
            return;
        }
        match event {
            AdSurfaceEvent::AdFreePod => self.pod.grant_ad_free_pod(),
            event if event.is_completion() => self.pod.advance(),
            event => trace!(?event, "ignored surface event"),
        }
    }

    /// Route a remote-control action.
    pub fn handle_remote(&self, event: RemoteEvent) {
        if self.disposed.load(Ordering::Acquire) {
            return;
        }
        match event {
            RemoteEvent::Left | RemoteEvent::SkipBackward => {
                self.register_seek(SeekDirection::Backward);
            }
            RemoteEvent::Right | RemoteEvent::SkipForward => {
                self.register_seek(SeekDirection::Forward);
            }
            RemoteEvent::Play => self.play(),
            RemoteEvent::Pause => self.pause(),
            RemoteEvent::Select | RemoteEvent::Back => {}
            _ => trace!(?event, "unhandled remote event"),
        }
    }

    /// Tear down: cancel the pump, timers, and surface binding. Idempotent.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.cancel.cancel();
        self.accumulator.dispose();
        self.pod.dispose();
        if let Some(handle) = self.bound_surface.lock().take() {
            self.player.release_surface(&handle);
        }
        debug!("session disposed");
    }

    // -- Internal -------------------------------------------------------------

    fn start_content(&self) {
        self.player.load(&self.content.video_url);
        self.player.play();
    }

    fn on_time_update(&self, time: f64) {
        self.state.lock().current_time = time;
        let _ = self.events_tx.send(SessionEvent::TimeChanged { time });

        match self.content.insertion {
            InsertionKind::Ssai => {
                let effects = self.timeline.lock().tick(time);
                for effect in effects {
                    self.apply_timeline_effect(effect);
                }
            }
            InsertionKind::Csai => {
                let in_content = self.state.lock().phase == PlaybackPhase::Content;
                if in_content {
                    if let Some(pod) = self.pod.next_break_to_start(&self.content.ad_breaks, time)
                    {
                        debug!(break_id = %pod.break_id, time, "midroll pod reached");
                        self.player.pause();
                        self.set_phase(PlaybackPhase::Ad);
                        self.pod.start_break(&pod);
                    }
                }
            }
        }
    }

    fn apply_timeline_effect(&self, effect: TimelineEffect) {
        match effect {
            TimelineEffect::Seek { target } => {
                self.player.seek(target);
                let _ = self.events_tx.send(SessionEvent::SeekApplied { target });
            }
            TimelineEffect::BreakChanged { current, .. } => {
                let break_id = {
                    let timeline = self.timeline.lock();
                    current.and_then(|i| timeline.playlist().get(i).map(|b| b.id.clone()))
                };
                let phase = if break_id.is_some() {
                    PlaybackPhase::Ad
                } else {
                    PlaybackPhase::Content
                };
                self.set_phase(phase);
                let _ = self.events_tx.send(SessionEvent::AdBreakChanged { break_id });
            }
            _ => trace!(?effect, "unhandled timeline effect"),
        }
    }

    fn apply_seek_delta(&self, delta: f64) {
        let (current, duration) = {
            let state = self.state.lock();
            (state.current_time, state.duration)
        };
        let upper = if duration > 0.0 { duration } else { f64::INFINITY };
        let target = (current + delta).clamp(0.0, upper);
        debug!(delta, target, "seeking by accumulated delta");
        self.player.seek(target);
        let _ = self.events_tx.send(SessionEvent::SeekApplied { target });
    }

    fn set_phase(&self, phase: PlaybackPhase) {
        let changed = {
            let mut state = self.state.lock();
            if state.phase == phase {
                false
            } else {
                state.phase = phase;
                true
            }
        };
        if changed {
            let _ = self.events_tx.send(SessionEvent::PhaseChanged { phase });
        }
    }

    fn set_playback_state(&self, playback: PlaybackState) {
        let changed = {
            let mut state = self.state.lock();
            if state.playback == playback {
                false
            } else {
                state.playback = playback;
                true
            }
        };
        if changed {
            let _ = self
                .events_tx
                .send(SessionEvent::StateChanged { state: playback });
        }
    }
}

impl Drop for PlaybackSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use adline_core::BreakId;

    use crate::mock::MockPlayer;

    use super::*;

    const CSAI_CONTENT: &str = r#"{
        "id": "csai-example-1",
        "type": "csai",
        "title": "CSAI sample",
        "videoUrl": "https://media.example.com/stream-no-ads-720p.mp4",
        "adBreaks": [
            {
                "breakId": "preroll",
                "breakType": "preroll",
                "startTime": 0,
                "duration": 62,
                "ads": [
                    {"adId": "t-0", "adSystem": "trueX", "duration": 2,
                     "adParameters": "{\"vast_config_url\": \"https://ads.example.com/vast/config?pod=1\"}"},
                    {"adId": "v-1", "adSystem": "mp4", "duration": 30,
                     "videoUrl": "https://cdn.example.com/coffee-720p.mp4"},
                    {"adId": "v-2", "adSystem": "mp4", "duration": 30,
                     "videoUrl": "https://cdn.example.com/airline-720p.mp4"}
                ]
            },
            {
                "breakId": "midroll-1",
                "breakType": "midroll",
                "startTime": 485,
                "duration": 30,
                "ads": [
                    {"adId": "m-1", "adSystem": "mp4", "duration": 30,
                     "videoUrl": "https://cdn.example.com/petcare-720p.mp4"}
                ]
            }
        ]
    }"#;

    const SSAI_CONTENT: &str = r#"{
        "id": "ssai-example-1",
        "type": "ssai",
        "title": "Stitched sample",
        "videoUrl": "https://media.example.com/stream-with-ads-720p.mp4",
        "adBreaks": [
            {
                "breakId": "preroll",
                "breakType": "preroll",
                "startTime": 0,
                "duration": 92,
                "ads": []
            },
            {
                "breakId": "midroll-1",
                "breakType": "midroll",
                "startTime": 485,
                "duration": 92,
                "ads": []
            }
        ]
    }"#;

    fn csai_session() -> (Arc<PlaybackSession>, Arc<MockPlayer>) {
        let content = ContentConfig::from_json(CSAI_CONTENT).unwrap();
        let player = MockPlayer::new();
        let session = PlaybackSession::new(content, player.clone(), SessionConfig::default());
        (session, player)
    }

    fn ssai_session() -> (Arc<PlaybackSession>, Arc<MockPlayer>) {
        let content = ContentConfig::from_json(SSAI_CONTENT).unwrap();
        let player = MockPlayer::new();
        let session = PlaybackSession::new(content, player.clone(), SessionConfig::default());
        (session, player)
    }

    // -- CSAI ----------------------------------------------------------------

    #[test]
    fn initialize_with_preroll_enters_ad_phase() {
        let (session, player) = csai_session();
        session.initialize().unwrap();

        let context = session.context();
        assert_eq!(context.phase, PlaybackPhase::Ad);
        assert_eq!(context.current_break, Some(BreakId::new("preroll")));
        assert_eq!(context.ad_index, 1);
        assert!(context.show_interactive_ad);
        assert!(!context.show_video_surface);
        // Content has not been loaded yet.
        assert!(player.loaded_src().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn ad_free_pod_skips_rest_and_resumes_content() {
        let (session, player) = csai_session();
        session.attach();
        session.initialize().unwrap();

        // The interactive preroll ad grants the credit.
        session.handle_surface_event(AdSurfaceEvent::AdFreePod);
        tokio::time::sleep(Duration::from_millis(10)).await;

        let context = session.context();
        assert_eq!(context.phase, PlaybackPhase::Content);
        assert!(context.current_ad.is_none());
        assert!(context.show_video_surface);
        // The fallback ads never loaded; content did.
        assert!(player.loaded_src().is_some());
        assert!(!player.is_paused());
    }

    #[tokio::test(start_paused = true)]
    async fn midroll_triggers_once_and_not_while_active() {
        let (session, player) = csai_session();
        session.attach();
        session.initialize().unwrap();
        // Finish the preroll quickly via the credit.
        session.handle_surface_event(AdSurfaceEvent::AdFreePod);
        tokio::time::sleep(Duration::from_millis(10)).await;
        session.handle_player_event(PlayerEvent::Playing);

        session.handle_player_event(PlayerEvent::TimeUpdate { time: 484.0 });
        assert_eq!(session.context().phase, PlaybackPhase::Content);

        session.handle_player_event(PlayerEvent::TimeUpdate { time: 485.0 });
        assert_eq!(session.context().phase, PlaybackPhase::Ad);
        assert!(player.is_paused());
        assert_eq!(
            session.context().current_break,
            Some(BreakId::new("midroll-1"))
        );

        // Ticks keep arriving while the pod shows; nothing re-triggers.
        session.handle_player_event(PlayerEvent::TimeUpdate { time: 486.0 });
        session.handle_player_event(PlayerEvent::TimeUpdate { time: 490.0 });
        assert_eq!(
            session.context().current_break,
            Some(BreakId::new("midroll-1"))
        );

        // The single 30s fallback ad runs out; content resumes.
        tokio::time::sleep(Duration::from_secs(31)).await;
        assert_eq!(session.context().phase, PlaybackPhase::Content);
        assert!(!player.is_paused());
    }

    #[tokio::test(start_paused = true)]
    async fn seek_presses_coalesce_during_content() {
        let (session, player) = csai_session();
        session.attach();
        session.initialize().unwrap();
        session.handle_surface_event(AdSurfaceEvent::AdFreePod);
        tokio::time::sleep(Duration::from_millis(10)).await;

        player.set_duration(600.0);
        session.handle_player_event(PlayerEvent::DurationChanged { duration: 600.0 });
        session.handle_player_event(PlayerEvent::TimeUpdate { time: 100.0 });

        session.handle_remote(RemoteEvent::Right);
        session.handle_remote(RemoteEvent::Right);
        session.handle_remote(RemoteEvent::Right);
        tokio::time::sleep(Duration::from_millis(2100)).await;

        assert_eq!(player.seeks(), vec![115.0]);
    }

    #[test]
    fn seek_presses_during_ad_are_ignored() {
        let (session, _player) = csai_session();
        session.initialize().unwrap();
        assert_eq!(session.context().phase, PlaybackPhase::Ad);
        // No runtime here: if the press were accepted it would panic trying
        // to spawn the flush timer.
        session.register_seek(SeekDirection::Forward);
    }

    // -- SSAI ----------------------------------------------------------------

    #[test]
    fn stitched_stream_phases_follow_the_timeline() {
        let (session, _player) = ssai_session();
        session.initialize().unwrap();
        let mut rx = session.subscribe();

        session.handle_player_event(PlayerEvent::TimeUpdate { time: 0.0 });
        assert_eq!(session.context().phase, PlaybackPhase::Ad);
        assert_eq!(
            session.context().current_break,
            Some(BreakId::new("preroll"))
        );

        session.handle_player_event(PlayerEvent::TimeUpdate { time: 93.0 });
        assert_eq!(session.context().phase, PlaybackPhase::Content);
        // Viewer clock excludes the preroll.
        assert!((session.context().current_time - 1.0).abs() < f64::EPSILON);

        let mut saw_ad_phase = false;
        let mut saw_content_phase = false;
        while let Ok(event) = rx.try_recv() {
            match event {
                SessionEvent::PhaseChanged {
                    phase: PlaybackPhase::Ad,
                } => saw_ad_phase = true,
                SessionEvent::PhaseChanged {
                    phase: PlaybackPhase::Content,
                } => saw_content_phase = true,
                _ => {}
            }
        }
        assert!(saw_ad_phase);
        assert!(saw_content_phase);
    }

    #[test]
    fn scrubbing_back_into_watched_break_is_corrected() {
        let (session, player) = ssai_session();
        session.initialize().unwrap();

        // Watch the preroll to completion.
        for t in 0..=93 {
            session.handle_player_event(PlayerEvent::TimeUpdate { time: f64::from(t) });
        }
        // Host lets the user land back inside it.
        session.handle_player_event(PlayerEvent::TimeUpdate { time: 45.0 });
        assert_eq!(player.seeks(), vec![93.0]);
        assert_eq!(session.context().phase, PlaybackPhase::Content);
    }

    #[test]
    fn remote_press_steps_the_stitched_timeline() {
        let (session, player) = ssai_session();
        session.initialize().unwrap();
        player.set_duration(784.0);
        session.handle_player_event(PlayerEvent::DurationChanged { duration: 784.0 });

        // Watch the preroll, then sit 5s short of the unwatched midroll.
        for t in 0..=93 {
            session.handle_player_event(PlayerEvent::TimeUpdate { time: f64::from(t) });
        }
        session.handle_player_event(PlayerEvent::TimeUpdate { time: 572.0 });

        session.handle_remote(RemoteEvent::Right);
        assert_eq!(player.seeks(), vec![577.0]);
    }

    // -- lifecycle ------------------------------------------------------------

    #[test]
    fn dispose_makes_the_session_inert() {
        let (session, player) = csai_session();
        session.bind_surface("surface-1");
        session.dispose();

        assert!(matches!(
            session.initialize(),
            Err(PlaybackError::Disposed)
        ));
        session.handle_player_event(PlayerEvent::TimeUpdate { time: 10.0 });
        assert!(session.context().current_time.abs() < f64::EPSILON);
        // Surface was released on dispose.
        assert!(player.bound_surfaces().is_empty());
        // Dispose is idempotent.
        session.dispose();
    }

    #[test]
    fn start_at_loads_seeks_and_plays() {
        let (session, player) = ssai_session();
        session.start_at(120.0);
        assert!(player.loaded_src().is_some());
        assert_eq!(player.seeks(), vec![120.0]);
        assert!(!player.is_paused());
    }
}
