//! Recorder error types

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecorderError {
    /// The recorder rejected the accumulated configuration in `prepare`
    #[error("recorder preparation failed: {0}")]
    Prepare(#[source] io::Error),

    #[error("unknown quality level: {0}")]
    UnknownQuality(String),
}

impl RecorderError {
    /// Kind of the underlying I/O error, if any
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            RecorderError::Prepare(e) => Some(e.kind()),
            RecorderError::UnknownQuality(_) => None,
        }
    }
}
