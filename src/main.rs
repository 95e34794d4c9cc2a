use anyhow::Result;
use std::sync::Mutex;
use sysmonitor::config::{AppConfig, LoggingConfig};
use sysmonitor::dashboard::{self, Dashboard};
use sysmonitor::sysinfo_repo::{MetricsSampler, SysinfoRepo};
use sysmonitor::{shutdown, tui, version};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

/// Logs go to the configured file, else stderr. RUST_LOG overrides the configured level.
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    match &logging.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| anyhow::anyhow!("log file {}: {}", path, e))?;
            tracing_subscriber::fmt()
                .with_timer(LocalTimer)
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_timer(LocalTimer)
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let app_config = AppConfig::load()?;
    init_tracing(&app_config.logging)?;
    tracing::info!(
        app = %version::describe(),
        layout = ?app_config.dashboard.layout,
        refresh_interval_ms = app_config.dashboard.refresh_interval_ms,
        disk_path = %app_config.disk.path,
        "Starting"
    );

    // Probe the provider before touching the screen; this also primes the CPU baseline.
    let mut sampler = SysinfoRepo::new(&app_config.disk.path);
    sampler
        .sample()
        .map_err(|e| anyhow::anyhow!("metrics provider: {}", e))?;

    let (shutdown_tx, shutdown_rx) = dashboard::shutdown_channel();
    shutdown::forward_signals(shutdown_tx)?;

    tui::install_panic_hook();
    let renderer =
        tui::TerminalRenderer::stdout().map_err(|e| anyhow::anyhow!("terminal: {}", e))?;
    let mut dashboard = Dashboard::new(sampler, renderer, &app_config.dashboard);

    match dashboard.run(shutdown_rx).await {
        Ok(ticks) => {
            tracing::info!(ticks, "Shut down cleanly");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, operation = "dashboard_run", "Dashboard failed");
            Err(e.into())
        }
    }
}
