// Host metrics via sysinfo

mod linux;

use crate::error::MetricsError;
use crate::models::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use sysinfo::{Disks, Networks, System};
use tracing::instrument;

/// Source of one fresh snapshot per tick.
pub trait MetricsSampler {
    /// Query the host now. Consecutive calls are live samples and may differ.
    fn sample(&mut self) -> Result<MetricsSnapshot, MetricsError>;
}

pub struct SysinfoRepo {
    sys: System,
    disks: Disks,
    networks: Networks,
    disk_path: PathBuf,
    last_cpu_refresh: Option<(Instant, f64)>,
}

impl SysinfoRepo {
    pub fn new(disk_path: impl Into<PathBuf>) -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        sys.refresh_memory();
        Self {
            sys,
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
            disk_path: disk_path.into(),
            last_cpu_refresh: None,
        }
    }

    fn cpu_stats(&mut self) -> Result<CpuStats, MetricsError> {
        let now = Instant::now();
        let usage = match self.last_cpu_refresh {
            Some((prev_ts, prev_usage))
                if now.duration_since(prev_ts) < sysinfo::MINIMUM_CPU_UPDATE_INTERVAL =>
            {
                // Too soon for a meaningful delta; reuse the last reading without blocking
                prev_usage
            }
            Some(_) => {
                self.sys.refresh_cpu_all();
                let usage = self.sys.global_cpu_usage() as f64;
                self.last_cpu_refresh = Some((now, usage));
                usage
            }
            None => {
                // First call: establish the baseline
                self.sys.refresh_cpu_all();
                self.last_cpu_refresh = Some((now, 0.0));
                0.0
            }
        };

        let core_count = self.sys.cpus().len() as u32;
        if core_count == 0 {
            return Err(MetricsError::NoCpus);
        }
        let frequency_mhz = self
            .sys
            .cpus()
            .first()
            .map(|c| c.frequency())
            .filter(|mhz| *mhz > 0)
            .map(|mhz| mhz as f64)
            .or_else(linux::read_cpu_mhz_linux);

        Ok(CpuStats {
            usage_percent: round_percent(usage.clamp(0.0, 100.0)),
            frequency_mhz,
            core_count,
        })
    }

    fn memory_stats(&mut self) -> Result<MemoryStats, MetricsError> {
        self.sys.refresh_memory();

        let total = self.sys.total_memory();
        if total == 0 {
            return Err(MetricsError::MemoryUnavailable);
        }
        let available = self.sys.available_memory();
        let used = total.saturating_sub(available);
        let total_swap = self.sys.total_swap();
        let swap_used_percent = if total_swap > 0 {
            percent_of(self.sys.used_swap(), total_swap)
        } else {
            0.0
        };

        Ok(MemoryStats {
            total_bytes: total,
            available_bytes: available,
            used_percent: percent_of(used, total),
            swap_used_percent,
        })
    }

    fn disk_stats(&mut self) -> Result<DiskStats, MetricsError> {
        self.disks.refresh(true);
        let disk = find_mount(
            self.disks.list().iter().map(|d| d.mount_point()),
            &self.disk_path,
        )
        .and_then(|mount| self.disks.list().iter().find(|d| d.mount_point() == mount))
        .ok_or_else(|| MetricsError::DiskNotFound {
            path: self.disk_path.display().to_string(),
        })?;

        let total = disk.total_space();
        let free = disk.available_space();
        // sysinfo has no f_bfree; blocks reserved for root count as used
        let used = total.saturating_sub(free);
        Ok(DiskStats {
            mount_point: disk.mount_point().to_string_lossy().into_owned(),
            total_bytes: total,
            used_bytes: used,
            free_bytes: free,
            used_percent: if total > 0 { percent_of(used, total) } else { 0.0 },
        })
    }

    fn network_stats(&mut self) -> NetworkStats {
        self.networks.refresh(true);
        self.networks
            .list()
            .values()
            .fold(NetworkStats::default(), |mut acc, data| {
                acc.bytes_sent += data.total_transmitted();
                acc.bytes_received += data.total_received();
                acc.packets_sent += data.total_packets_transmitted();
                acc.packets_received += data.total_packets_received();
                acc
            })
    }
}

impl MetricsSampler for SysinfoRepo {
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "sample"))]
    fn sample(&mut self) -> Result<MetricsSnapshot, MetricsError> {
        Ok(MetricsSnapshot {
            cpu: self.cpu_stats()?,
            memory: self.memory_stats()?,
            disk: self.disk_stats()?,
            network: self.network_stats(),
            uptime_secs: System::uptime(),
        })
    }
}

/// Longest mount point that is a path prefix of `path`.
pub fn find_mount<'a>(mounts: impl Iterator<Item = &'a Path>, path: &Path) -> Option<&'a Path> {
    mounts
        .filter(|mount| path.starts_with(mount))
        .max_by_key(|mount| mount.components().count())
}

fn percent_of(part: u64, whole: u64) -> f64 {
    round_percent((part as f64 / whole as f64) * 100.0)
}

/// Percentages are reported to one decimal place.
fn round_percent(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
