use adline_events::PlayerEvent;
use tokio::sync::broadcast;
use url::Url;

/// Host media player the session drives.
///
/// Transport calls are fire-and-forget requests; the resulting state changes
/// arrive asynchronously on the event stream. Implementations must clamp
/// seek targets into `[0, duration]` rather than reject them, and should
/// not be assumed to deliver `Seeked` reliably.
pub trait MediaPlayer: Send + Sync + 'static {
    /// Point the player at a media URL and begin loading.
    fn load(&self, url: &Url);

    fn play(&self);

    fn pause(&self);

    fn is_paused(&self) -> bool;

    /// Current raw stream position in seconds.
    fn current_time(&self) -> f64;

    /// Request a seek to a raw stream position.
    fn seek(&self, time: f64);

    /// Raw stream duration in seconds; 0 until known.
    fn duration(&self) -> f64;

    /// Attach a platform render surface.
    fn bind_surface(&self, handle: &str);

    /// Detach a previously bound render surface.
    fn release_surface(&self, handle: &str);

    /// Subscribe to player events.
    fn subscribe(&self) -> broadcast::Receiver<PlayerEvent>;
}
