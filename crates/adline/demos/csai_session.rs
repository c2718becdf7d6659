//! Walk a CSAI session end to end against the mock player: preroll pod,
//! ad-free-pod credit, content resume, and a midroll trigger.
//!
//! Run with `cargo run -p adline --example csai_session`.

use std::time::Duration;

use adline::prelude::*;
use adline_play::mock::MockPlayer;

const CONTENT: &str = r#"{
    "id": "csai-demo-1",
    "type": "csai",
    "title": "The Employee Experience",
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

fn print_context(label: &str, context: &PlaybackContext) {
    println!(
        "{label}: phase={:?} state={:?} break={:?} ad_index={} countdown={} video={} interactive={}",
        context.phase,
        context.state,
        context.current_break,
        context.ad_index,
        context.ad_countdown,
        context.show_video_surface,
        context.show_interactive_ad,
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), PlaybackError> {
    tracing_subscriber::fmt()
        .with_env_filter("adline_play=debug,adline_pod=debug")
        .init();

    // Simulated clock: ad countdowns elapse instantly instead of in real time.
    tokio::time::pause();

    let content = ContentConfig::from_json(CONTENT)?;
    let player = MockPlayer::new();
    let session = PlaybackSession::new(content, player.clone(), SessionConfig::default());
    session.attach();
    session.bind_surface("demo-surface");
    session.initialize()?;

    print_context("after initialize", &session.context());

    // The viewer finishes the interactive preroll ad and earns the credit:
    // the two fallback ads are skipped and content starts.
    session.handle_surface_event(AdSurfaceEvent::AdFreePod);
    tokio::time::sleep(Duration::from_millis(50)).await;
    print_context("after ad-free pod", &session.context());

    // Content plays up to the midroll.
    for t in [100.0, 300.0, 484.0, 485.0] {
        player.emit_time_update(t);
    }
    tokio::time::sleep(Duration::from_millis(50)).await;
    print_context("at midroll", &session.context());

    // The 30s fallback ad counts down and auto-advances; content resumes.
    tokio::time::sleep(Duration::from_secs(31)).await;
    print_context("after midroll", &session.context());

    session.dispose();
    Ok(())
}
