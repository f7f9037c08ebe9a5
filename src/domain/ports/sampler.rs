use thiserror::Error;

use crate::domain::entities::resources::ResourceUsage;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("system metrics unavailable: {0}")]
    MetricsUnavailable(String),
    #[error("permission denied reading system metrics: {0}")]
    PermissionDenied(String),
}

pub trait ResourceSampler: Send + Sync {
    /// Sample CPU load, memory usage, and per-volume disk usage.
    ///
    /// # Errors
    ///
    /// Returns `SampleError` if the underlying metrics source cannot
    /// be read.
    fn sample(&self) -> Result<ResourceUsage, SampleError>;

    /// Re-read memory usage alone, for the post-reclaim measurement.
    ///
    /// # Errors
    ///
    /// Returns `SampleError` if the underlying metrics source cannot
    /// be read.
    fn ram_percent(&self) -> Result<f64, SampleError>;
}
