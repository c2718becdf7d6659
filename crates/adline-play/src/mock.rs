//! Scriptable in-memory player for tests and demos.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use adline_events::PlayerEvent;
use parking_lot::Mutex;
use tokio::sync::broadcast;
use url::Url;

use crate::player::MediaPlayer;

#[derive(Debug, Default)]
struct MockState {
    current_time: f64,
    duration: f64,
    paused: bool,
    src: Option<Url>,
    surfaces: Vec<String>,
    seeks: Vec<f64>,
}

/// In-memory [`MediaPlayer`] driven entirely by the test.
///
/// Ticks are injected with [`MockPlayer::emit_time_update`]; transport calls
/// mutate local state and publish the matching events synchronously. Seeked
/// delivery can be suppressed to exercise the session's proximity fallback.
pub struct MockPlayer {
    state: Mutex<MockState>,
    events_tx: broadcast::Sender<PlayerEvent>,
    deliver_seeked: AtomicBool,
}

impl MockPlayer {
    #[must_use]
    pub fn new() -> Arc<Self> {
        let (events_tx, _) = broadcast::channel(256);
        Arc::new(Self {
            state: Mutex::new(MockState {
                paused: true,
                ..MockState::default()
            }),
            events_tx,
            deliver_seeked: AtomicBool::new(true),
        })
    }

    /// Stop delivering `Seeked` events, as flaky hosts do.
    pub fn suppress_seeked(&self) {
        self.deliver_seeked.store(false, Ordering::Relaxed);
    }

    /// Report a media duration, as the host does once metadata loads.
    pub fn set_duration(&self, duration: f64) {
        self.state.lock().duration = duration;
        let _ = self.events_tx.send(PlayerEvent::DurationChanged { duration });
    }

    /// Inject a time-update tick at `time`.
    pub fn emit_time_update(&self, time: f64) {
        self.state.lock().current_time = time;
        let _ = self.events_tx.send(PlayerEvent::TimeUpdate { time });
    }

    /// Every seek target requested so far, in order.
    #[must_use]
    pub fn seeks(&self) -> Vec<f64> {
        self.state.lock().seeks.clone()
    }

    #[must_use]
    pub fn loaded_src(&self) -> Option<Url> {
        self.state.lock().src.clone()
    }

    #[must_use]
    pub fn bound_surfaces(&self) -> Vec<String> {
        self.state.lock().surfaces.clone()
    }
}

impl MediaPlayer for MockPlayer {
    fn load(&self, url: &Url) {
        let mut state = self.state.lock();
        state.src = Some(url.clone());
        state.current_time = 0.0;
    }

    fn play(&self) {
        self.state.lock().paused = false;
        let _ = self.events_tx.send(PlayerEvent::Playing);
    }

    fn pause(&self) {
        self.state.lock().paused = true;
        let _ = self.events_tx.send(PlayerEvent::Paused);
    }

    fn is_paused(&self) -> bool {
        self.state.lock().paused
    }

    fn current_time(&self) -> f64 {
        self.state.lock().current_time
    }

    fn seek(&self, time: f64) {
        {
            let mut state = self.state.lock();
            let upper = if state.duration > 0.0 {
                state.duration
            } else {
                f64::INFINITY
            };
            let clamped = time.clamp(0.0, upper);
            state.current_time = clamped;
            state.seeks.push(clamped);
        }
        let _ = self.events_tx.send(PlayerEvent::Seeking);
        if self.deliver_seeked.load(Ordering::Relaxed) {
            let _ = self.events_tx.send(PlayerEvent::Seeked);
        }
    }

    fn duration(&self) -> f64 {
        self.state.lock().duration
    }

    fn bind_surface(&self, handle: &str) {
        self.state.lock().surfaces.push(handle.to_owned());
    }

    fn release_surface(&self, handle: &str) {
        self.state.lock().surfaces.retain(|h| h != handle);
    }

    fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.events_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seek_clamps_into_known_duration() {
        let player = MockPlayer::new();
        player.set_duration(100.0);
        player.seek(150.0);
        player.seek(-5.0);
        assert_eq!(player.seeks(), vec![100.0, 0.0]);
    }

    #[test]
    fn transport_events_are_published() {
        let player = MockPlayer::new();
        let mut rx = player.subscribe();
        player.play();
        player.pause();
        assert_eq!(rx.try_recv().unwrap(), PlayerEvent::Playing);
        assert_eq!(rx.try_recv().unwrap(), PlayerEvent::Paused);
    }

    #[test]
    fn suppressed_seeked_only_sends_seeking() {
        let player = MockPlayer::new();
        player.suppress_seeked();
        let mut rx = player.subscribe();
        player.seek(10.0);
        assert_eq!(rx.try_recv().unwrap(), PlayerEvent::Seeking);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn surfaces_bind_and_release() {
        let player = MockPlayer::new();
        player.bind_surface("surface-1");
        assert_eq!(player.bound_surfaces(), vec!["surface-1".to_owned()]);
        player.release_surface("surface-1");
        assert!(player.bound_surfaces().is_empty());
    }
}
