use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the tour runner and its checked helpers.
#[derive(Error, Debug)]
pub enum TourError {
    #[error("failed to write demo output")]
    Io(#[from] io::Error),

    #[error("could not read config file {path}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {path}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no demo or section named `{0}`")]
    UnknownDemo(String),

    #[error("`{0}` is not a weekday (expected Sun, Mon, ... or a full name)")]
    UnknownWeekday(String),

    #[error("slice bounds out of range [{lo}:{hi}] with capacity {cap}")]
    SliceBounds { lo: usize, hi: usize, cap: usize },
}

pub type Result<T> = std::result::Result<T, TourError>;
