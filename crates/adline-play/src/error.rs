#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PlaybackError {
    #[error("malformed content configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("session already disposed")]
    Disposed,
}
