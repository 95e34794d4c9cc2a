// CPU, memory and the per-tick snapshot

use super::{DiskStats, NetworkStats};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuStats {
    pub usage_percent: f64,
    /// Current clock in MHz; `None` where the platform does not expose it.
    pub frequency_mhz: Option<f64>,
    /// Logical core count.
    pub core_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStats {
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub used_percent: f64,
    pub swap_used_percent: f64,
}

/// Point-in-time host metrics. Built whole by a sampler, consumed by one render, then dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub cpu: CpuStats,
    pub memory: MemoryStats,
    pub disk: DiskStats,
    pub network: NetworkStats,
    pub uptime_secs: u64,
}
