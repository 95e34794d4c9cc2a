// Snapshot models: one immutable bundle of host metrics per tick

mod network;
mod storage;
mod system;

pub use network::NetworkStats;
pub use storage::DiskStats;
pub use system::{CpuStats, MemoryStats, MetricsSnapshot};
