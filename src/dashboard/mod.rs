// Dashboard loop: sample -> format -> render -> sleep until shutdown.
// Runs on the caller's task; the only suspension point is the sleep between ticks.

pub mod format;
pub mod layout;

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::sysinfo_repo::MetricsSampler;
use crate::tui::Renderer;
use layout::{Content, DashboardLayout};
use serde::Deserialize;
use tokio::sync::watch;
use tokio::time::Duration;

pub const STARTUP_BANNER: &str = "Starting SysMonitor... Press Ctrl+C to exit.";
pub const GOODBYE_MESSAGE: &str = "Exiting SysMonitor. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Cpu,
    Memory,
    Disk,
    Network,
}

impl PanelKind {
    /// Layout region the panel is drawn into.
    pub fn region(self) -> &'static str {
        match self {
            PanelKind::Cpu => "cpu",
            PanelKind::Memory => "mem",
            PanelKind::Disk => "disk",
            PanelKind::Network => "net",
        }
    }
}

/// Which panels are shown. Chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    /// CPU, memory, disk and network in a 2x2 grid; header shows uptime.
    #[default]
    Full,
    /// CPU, memory and disk in one row; plain header.
    Compact,
}

impl LayoutVariant {
    pub fn panels(self) -> &'static [PanelKind] {
        match self {
            LayoutVariant::Full => &[
                PanelKind::Cpu,
                PanelKind::Memory,
                PanelKind::Disk,
                PanelKind::Network,
            ],
            LayoutVariant::Compact => &[PanelKind::Cpu, PanelKind::Memory, PanelKind::Disk],
        }
    }

    pub fn shows_uptime(self) -> bool {
        matches!(self, LayoutVariant::Full)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardState {
    /// Banner shown, live mode not yet entered.
    Starting,
    Running,
    Terminated,
}

/// Shutdown flag: send `true` to stop the loop. Observed at every tick and during sleeps.
pub fn shutdown_channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}

pub struct Dashboard<S, R> {
    sampler: S,
    renderer: R,
    layout: DashboardLayout,
    variant: LayoutVariant,
    refresh_interval: Duration,
    startup_pause: Duration,
    state: DashboardState,
    ticks: u64,
}

impl<S: MetricsSampler, R: Renderer> Dashboard<S, R> {
    pub fn new(sampler: S, renderer: R, config: &DashboardConfig) -> Self {
        Self {
            sampler,
            renderer,
            layout: DashboardLayout::for_variant(config.layout),
            variant: config.layout,
            refresh_interval: config.refresh_interval(),
            startup_pause: config.startup_pause(),
            state: DashboardState::Starting,
            ticks: 0,
        }
    }

    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn state(&self) -> DashboardState {
        self.state
    }

    /// Completed sample+render cycles.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// One cycle: fresh snapshot into every panel, then a single draw.
    pub fn tick(&mut self) -> Result<(), DashboardError> {
        let snapshot = self.sampler.sample()?;
        self.layout.update(
            "header",
            Content::Banner(format::header_text(self.variant, snapshot.uptime_secs)),
        )?;
        for kind in self.variant.panels() {
            self.layout.update(
                kind.region(),
                Content::Panel(format::panel_for(*kind, &snapshot)),
            )?;
        }
        self.renderer.draw(&self.layout)?;
        self.ticks += 1;
        tracing::trace!(tick = self.ticks, "dashboard rendered");
        Ok(())
    }

    /// Startup banner, live loop until `shutdown` turns true, then restore the screen and say
    /// goodbye. Returns the number of ticks rendered. Sampling and render failures end the loop
    /// with an error, after a best-effort restore of the terminal.
    pub async fn run(
        &mut self,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<u64, DashboardError> {
        self.renderer.clear()?;
        self.renderer.print_banner(STARTUP_BANNER)?;

        if !sleep_or_shutdown(self.startup_pause, &mut shutdown).await {
            self.renderer.enter_live()?;
            self.state = DashboardState::Running;
            tracing::debug!(
                variant = ?self.variant,
                refresh_interval_ms = self.refresh_interval.as_millis() as u64,
                "Dashboard live"
            );

            if let Err(e) = self.run_ticks(&mut shutdown).await {
                self.state = DashboardState::Terminated;
                if let Err(restore_err) = self.renderer.leave_live() {
                    tracing::warn!(
                        error = %restore_err,
                        operation = "leave_live",
                        "terminal restore failed"
                    );
                }
                return Err(e);
            }
            self.renderer.leave_live()?;
        }

        self.state = DashboardState::Terminated;
        self.renderer.print_line(GOODBYE_MESSAGE)?;
        tracing::debug!(ticks = self.ticks, "Dashboard terminated");
        Ok(self.ticks)
    }

    async fn run_ticks(
        &mut self,
        shutdown: &mut watch::Receiver<bool>,
    ) -> Result<(), DashboardError> {
        loop {
            if *shutdown.borrow() {
                return Ok(());
            }
            self.tick()?;
            // Fixed sleep after the work; the period drifts with tick cost.
            if sleep_or_shutdown(self.refresh_interval, shutdown).await {
                return Ok(());
            }
        }
    }
}

/// Sleep for `duration`, waking early on shutdown. Returns whether shutdown was requested.
async fn sleep_or_shutdown(duration: Duration, shutdown: &mut watch::Receiver<bool>) -> bool {
    let sleep = tokio::time::sleep(duration);
    tokio::pin!(sleep);
    loop {
        if *shutdown.borrow_and_update() {
            return true;
        }
        tokio::select! {
            _ = &mut sleep => return *shutdown.borrow(),
            changed = shutdown.changed() => {
                if changed.is_err() {
                    // Sender gone; nothing can request shutdown any more
                    (&mut sleep).await;
                    return *shutdown.borrow();
                }
            }
        }
    }
}
