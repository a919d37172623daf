//! Crate error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the partitioner
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid {name} ratio {value}: must be in [0, 1)")]
    InvalidRatio { name: &'static str, value: f64 },

    #[error("Invalid ratio sum {sum}: test + val must stay below 1")]
    RatioSum { sum: f64 },

    #[error("Pool exhausted: test + val would take {requested} of {available} images")]
    PoolExhausted { requested: usize, available: usize },

    #[error("Failed to read image directory {}: {source}", path.display())]
    ScanDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for partitioner operations
pub type Result<T> = std::result::Result<T, Error>;
