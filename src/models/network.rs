// Network counter models

/// Cumulative network I/O counters since boot, summed over all interfaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkStats {
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub packets_sent: u64,
    pub packets_received: u64,
}
