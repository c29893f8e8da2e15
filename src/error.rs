use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Rejected game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must be at least 1x1 cells, got {width}x{height}")]
    EmptyGrid { width: u16, height: u16 },
    #[error("move delay must be at least one frame")]
    ZeroMoveDelay,
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("frame interval must be at least one millisecond")]
    ZeroFrameInterval,
    #[error("initial snake length must be at least 1")]
    ZeroInitialLength,
    #[error("initial snake of length {length} does not fit left of column {head_x}")]
    InitialLengthTooLong { length: u16, head_x: u16 },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw direction code outside the supported range.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum DirectionError {
    #[error("unknown direction code {0}")]
    Unknown(u8),
}

/// Top-level failure of the terminal frontend.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
