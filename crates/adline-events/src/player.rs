/// Events emitted by the host media player.
///
/// Mirrors the HTMLMediaElement-style event surface the playback session
/// subscribes to. Times are in seconds of raw stream position.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum PlayerEvent {
    /// Periodic position report. Cadence is host-defined (per frame down to
    /// once per second); consumers must not assume a fixed interval.
    TimeUpdate { time: f64 },
    /// Media duration became known or changed.
    DurationChanged { duration: f64 },
    /// Playback is progressing.
    Playing,
    /// Playback was paused.
    Paused,
    /// A seek started.
    Seeking,
    /// A seek finished. Hosts do not deliver this reliably; consumers keep a
    /// proximity fallback.
    Seeked,
    /// Playback stalled waiting for data.
    Waiting,
    /// Enough data buffered to resume.
    CanPlay,
    /// Playback reached the end of the stream.
    Ended,
}
