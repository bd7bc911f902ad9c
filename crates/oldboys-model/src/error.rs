use std::path::PathBuf;
use thiserror::Error;

/// Load-time chart failures. A chart that fails any of these is never played.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to read chart file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse chart: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Chart contains no notes")]
    Empty,

    #[error("Note {index}: invalid lane {lane}")]
    InvalidLane { index: usize, lane: i64 },

    #[error("Note {index}: invalid tick {tick}")]
    InvalidTick { index: usize, tick: f64 },
}
