// Copyright 2025 Helium Client Contributors
// SPDX-License-Identifier: Apache-2.0

//! Serial transport error types

use std::io;
use std::path::PathBuf;

/// Errors surfaced by serial transports
///
/// Every failure of `open` collapses into [`SerialError::Open`] regardless of
/// which configuration step failed; the OS error is kept as the source.
#[derive(Debug, thiserror::Error)]
pub enum SerialError {
    #[error("Failed to open serial port {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Serial read failed: {0}")]
    Read(#[source] io::Error),

    #[error("Serial write failed: {0}")]
    Write(#[source] io::Error),

    /// A read transferred no data (EOF, the device went away)
    #[error("Serial device disconnected")]
    Disconnected,

    /// A write transferred no data
    #[error("Serial write transferred no data")]
    WriteZero,
}

impl SerialError {
    /// True for failures of a single byte transfer (as opposed to `open`)
    pub fn is_byte_io(&self) -> bool {
        !matches!(self, SerialError::Open { .. })
    }
}

/// Result type for serial transport operations
pub type SerialResult<T> = Result<T, SerialError>;
