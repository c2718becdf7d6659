#![forbid(unsafe_code)]

//! Unified event bus for the adline playback pipeline.
//!
//! The platform glue (video element bindings, remote-control decoding, the
//! interactive-ad web surface) publishes into one [`EventBus`]; the playback
//! session consumes from it. Event payloads carry plain values only so the
//! bus stays free of domain-type dependencies.

mod bus;
mod event;
mod player;
mod remote;
mod surface;

pub use bus::EventBus;
pub use event::Event;
pub use player::PlayerEvent;
pub use remote::RemoteEvent;
pub use surface::AdSurfaceEvent;
