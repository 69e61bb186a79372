// CLASSIFICATION: COMMUNITY
// Filename: error.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Errors raised by boot configuration discovery and its file helpers.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors returned by cmdline, ACPI and device-tree operations.
#[derive(Debug, Error)]
pub enum BootError {
    /// Open, read, write or stat failure on `path`.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Configuration file at `path` is not valid TOML for [`BootPaths`](crate::config::BootPaths).
    #[error("invalid boot config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// The ACPI firmware node does not carry the `CFG0` device signature.
    #[error("ACPI config node not present under '{}'", root.display())]
    AbsentAcpiNode { root: PathBuf },
    /// File is group- or world-writable and was refused.
    #[error("skipping insecure file '{}'", path.display())]
    InsecureFile { path: PathBuf },
    /// `path` did not appear before the deadline.
    #[error("timed out after {waited:?} waiting for '{}'", path.display())]
    Timeout { path: PathBuf, waited: Duration },
}

impl BootError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type BootResult<T> = Result<T, BootError>;
