// Error types for sampling and rendering

use thiserror::Error;

/// The metrics provider could not be queried.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("no CPUs reported by the host")]
    NoCpus,
    #[error("memory statistics unavailable")]
    MemoryUnavailable,
    #[error("no mounted filesystem backs {path}")]
    DiskNotFound { path: String },
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("metrics unavailable: {0}")]
    MetricsUnavailable(#[from] MetricsError),
    #[error("render failure: {0}")]
    RenderFailure(#[from] std::io::Error),
    #[error("unknown layout region: {0}")]
    UnknownRegion(String),
}
