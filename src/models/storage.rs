// Disk usage models

/// Usage of the filesystem backing the monitored path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskStats {
    pub mount_point: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub used_percent: f64,
}
