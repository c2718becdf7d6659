/// Discrete remote-control actions, already decoded from raw key events by
/// the platform layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RemoteEvent {
    Left,
    Right,
    SkipForward,
    SkipBackward,
    Play,
    Pause,
    Select,
    Back,
}
