// Snapshot -> panel text: unit conversion and per-category key/value rows

use ratatui::style::Color;

use super::{LayoutVariant, PanelKind};
use crate::models::{CpuStats, DiskStats, MemoryStats, MetricsSnapshot, NetworkStats};

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

pub const DASHBOARD_TITLE: &str = "SysMonitor - Live System Dashboard";

/// A titled, bordered two-column key/value table for one metric category.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub border_color: Color,
    pub key_color: Color,
    pub value_color: Color,
    pub rows: Vec<(String, String)>,
}

impl Panel {
    fn new(title: &str, border_color: Color, key_color: Color, value_color: Color) -> Self {
        Self {
            title: title.to_string(),
            border_color,
            key_color,
            value_color,
            rows: Vec::new(),
        }
    }

    fn row(mut self, key: &str, value: String) -> Self {
        self.rows.push((key.to_string(), value));
        self
    }

    pub fn keys(&self) -> Vec<&str> {
        self.rows.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

pub fn format_gb(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / BYTES_PER_GB)
}

pub fn format_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB)
}

/// Printed at the precision the sampler reported (`50.0%`, `12.5%`).
pub fn format_percent(percent: f64) -> String {
    format!("{percent:?}%")
}

pub fn format_mhz(mhz: f64) -> String {
    format!("{mhz:.2} Mhz")
}

/// `H:MM:SS`, prefixed with `N day(s), ` once past a day.
pub fn format_uptime(uptime_secs: u64) -> String {
    let days = uptime_secs / 86_400;
    let hours = (uptime_secs % 86_400) / 3_600;
    let minutes = (uptime_secs % 3_600) / 60;
    let seconds = uptime_secs % 60;
    let clock = format!("{hours}:{minutes:02}:{seconds:02}");
    match days {
        0 => clock,
        1 => format!("1 day, {clock}"),
        n => format!("{n} days, {clock}"),
    }
}

pub fn header_text(variant: LayoutVariant, uptime_secs: u64) -> String {
    if variant.shows_uptime() {
        format!(
            "{DASHBOARD_TITLE} | Uptime: {}",
            format_uptime(uptime_secs)
        )
    } else {
        DASHBOARD_TITLE.to_string()
    }
}

pub fn cpu_panel(cpu: &CpuStats) -> Panel {
    let mut panel = Panel::new("CPU Status", Color::Blue, Color::Cyan, Color::Green)
        .row("Usage", format_percent(cpu.usage_percent));
    if let Some(mhz) = cpu.frequency_mhz {
        panel = panel.row("Frequency", format_mhz(mhz));
    }
    panel.row("Cores", cpu.core_count.to_string())
}

pub fn memory_panel(memory: &MemoryStats) -> Panel {
    Panel::new("Memory Status", Color::Red, Color::Magenta, Color::Yellow)
        .row("Total", format_gb(memory.total_bytes))
        .row("Available", format_gb(memory.available_bytes))
        .row("Used", format_percent(memory.used_percent))
        .row("Swap Used", format_percent(memory.swap_used_percent))
}

pub fn disk_panel(disk: &DiskStats) -> Panel {
    Panel::new("Disk Status", Color::Green, Color::White, Color::Cyan)
        .row("Total", format_gb(disk.total_bytes))
        .row("Used", format_gb(disk.used_bytes))
        .row("Free", format_gb(disk.free_bytes))
        .row("Percentage", format_percent(disk.used_percent))
}

pub fn network_panel(network: &NetworkStats) -> Panel {
    Panel::new("Network Status", Color::Yellow, Color::Yellow, Color::Cyan)
        .row("Bytes Sent", format_mb(network.bytes_sent))
        .row("Bytes Recv", format_mb(network.bytes_received))
        .row("Packets Sent", network.packets_sent.to_string())
        .row("Packets Recv", network.packets_received.to_string())
}

pub fn panel_for(kind: PanelKind, snapshot: &MetricsSnapshot) -> Panel {
    match kind {
        PanelKind::Cpu => cpu_panel(&snapshot.cpu),
        PanelKind::Memory => memory_panel(&snapshot.memory),
        PanelKind::Disk => disk_panel(&snapshot.disk),
        PanelKind::Network => network_panel(&snapshot.network),
    }
}
