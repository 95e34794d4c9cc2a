// Shared test helpers: fixed snapshots, a scripted sampler and a recording renderer

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use sysmonitor::dashboard::layout::DashboardLayout;
use sysmonitor::error::MetricsError;
use sysmonitor::models::*;
use sysmonitor::sysinfo_repo::MetricsSampler;
use sysmonitor::tui::Renderer;
use tokio::sync::watch;

pub const GIB: u64 = 1024 * 1024 * 1024;

/// The 16 GiB / 500 GiB host used across the formatting tests.
pub fn scenario_snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        cpu: CpuStats {
            usage_percent: 12.5,
            frequency_mhz: None,
            core_count: 8,
        },
        memory: MemoryStats {
            total_bytes: 17_179_869_184,
            available_bytes: 8_589_934_592,
            used_percent: 50.0,
            swap_used_percent: 0.0,
        },
        disk: DiskStats {
            mount_point: "/".into(),
            total_bytes: 500 * GIB,
            used_bytes: 250 * GIB,
            free_bytes: 250 * GIB,
            used_percent: 50.0,
        },
        network: NetworkStats {
            bytes_sent: 5 * 1024 * 1024,
            bytes_received: 3 * 1024 * 1024 / 2,
            packets_sent: 4200,
            packets_received: 3100,
        },
        uptime_secs: 3_725,
    }
}

/// Snapshot whose CPU usage encodes the tick number, for telling frames apart.
pub fn numbered_snapshot(n: u32) -> MetricsSnapshot {
    let mut snapshot = scenario_snapshot();
    snapshot.cpu.usage_percent = n as f64;
    snapshot.uptime_secs += n as u64;
    snapshot
}

/// Hands out scripted results in order; repeats the last snapshot once the script runs out.
pub struct ScriptedSampler {
    script: VecDeque<Result<MetricsSnapshot, MetricsError>>,
    last: MetricsSnapshot,
    pub calls: usize,
}

impl ScriptedSampler {
    pub fn new(script: Vec<Result<MetricsSnapshot, MetricsError>>) -> Self {
        Self {
            script: script.into(),
            last: scenario_snapshot(),
            calls: 0,
        }
    }

    pub fn repeating(snapshot: MetricsSnapshot) -> Self {
        Self {
            script: VecDeque::new(),
            last: snapshot,
            calls: 0,
        }
    }
}

impl MetricsSampler for ScriptedSampler {
    fn sample(&mut self) -> Result<MetricsSnapshot, MetricsError> {
        self.calls += 1;
        match self.script.pop_front() {
            Some(Ok(snapshot)) => {
                self.last = snapshot.clone();
                Ok(snapshot)
            }
            Some(Err(e)) => Err(e),
            None => Ok(self.last.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Clear,
    Banner(String),
    Line(String),
    EnterLive,
    Draw,
    LeaveLive,
}

/// Records every call and keeps a copy of each drawn layout.
/// Optionally requests shutdown after a number of draws, or fails a chosen draw.
pub struct RecordingRenderer {
    pub events: Vec<RenderEvent>,
    pub frames: Vec<DashboardLayout>,
    pub live: bool,
    shutdown_after_draws: Option<(usize, watch::Sender<bool>)>,
    fail_on_draw: Option<usize>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            frames: Vec::new(),
            live: false,
            shutdown_after_draws: None,
            fail_on_draw: None,
        }
    }

    pub fn shutdown_after(draws: usize, tx: watch::Sender<bool>) -> Self {
        Self {
            shutdown_after_draws: Some((draws, tx)),
            ..Self::new()
        }
    }

    /// Fail the n-th draw (1-based).
    pub fn failing_on_draw(n: usize) -> Self {
        Self {
            fail_on_draw: Some(n),
            ..Self::new()
        }
    }

    pub fn draw_count(&self) -> usize {
        self.frames.len()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) -> io::Result<()> {
        self.events.push(RenderEvent::Clear);
        Ok(())
    }

    fn print_banner(&mut self, message: &str) -> io::Result<()> {
        self.events.push(RenderEvent::Banner(message.to_string()));
        Ok(())
    }

    fn print_line(&mut self, message: &str) -> io::Result<()> {
        self.events.push(RenderEvent::Line(message.to_string()));
        Ok(())
    }

    fn enter_live(&mut self) -> io::Result<()> {
        self.live = true;
        self.events.push(RenderEvent::EnterLive);
        Ok(())
    }

    fn draw(&mut self, layout: &DashboardLayout) -> io::Result<()> {
        if self.fail_on_draw == Some(self.frames.len() + 1) {
            return Err(io::Error::other("not a terminal"));
        }
        self.events.push(RenderEvent::Draw);
        self.frames.push(layout.clone());
        if let Some((after, tx)) = &self.shutdown_after_draws
            && self.frames.len() >= *after
        {
            let _ = tx.send(true);
        }
        Ok(())
    }

    fn leave_live(&mut self) -> io::Result<()> {
        self.live = false;
        self.events.push(RenderEvent::LeaveLive);
        Ok(())
    }
}
