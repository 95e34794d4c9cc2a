// Signal wiring: a real SIGINT to this process stops a running dashboard cleanly.
// Kept to a single test so no other test in this binary races the signal.
#![cfg(unix)]

mod common;

use common::*;
use std::time::Duration;
use sysmonitor::config::DashboardConfig;
use sysmonitor::dashboard::{
    Dashboard, DashboardState, GOODBYE_MESSAGE, LayoutVariant, shutdown_channel,
};
use sysmonitor::shutdown;

#[tokio::test]
async fn test_sigint_stops_live_dashboard_and_restores_terminal() {
    let (tx, rx) = shutdown_channel();
    let forwarder = shutdown::forward_signals(tx).expect("register signal handlers");
    let mut dashboard = Dashboard::new(
        ScriptedSampler::repeating(scenario_snapshot()),
        RecordingRenderer::new(),
        &DashboardConfig {
            layout: LayoutVariant::Full,
            refresh_interval_ms: 60_000,
            startup_pause_ms: 0,
        },
    );
    let interrupt = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        let status = tokio::process::Command::new("kill")
            .arg("-INT")
            .arg(std::process::id().to_string())
            .status()
            .await
            .expect("run kill");
        assert!(status.success());
    };

    let (result, ()) = tokio::time::timeout(Duration::from_secs(10), async {
        tokio::join!(dashboard.run(rx), interrupt)
    })
    .await
    .expect("dashboard should stop after SIGINT");

    assert_eq!(result.expect("clean shutdown"), 1);
    forwarder.await.expect("forwarder task");
    assert_eq!(dashboard.state(), DashboardState::Terminated);
    let renderer = dashboard.renderer();
    assert!(!renderer.live);
    assert_eq!(
        &renderer.events[renderer.events.len() - 2..],
        &[
            RenderEvent::LeaveLive,
            RenderEvent::Line(GOODBYE_MESSAGE.to_string())
        ]
    );
}
