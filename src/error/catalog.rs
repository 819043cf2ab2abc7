//! Catalog error module.
//!
//! Errors raised while reading a song catalog file. The lenient loader
//! reports these and falls back to an empty catalog.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be opened.
    #[error("Failed to open catalog file {path}: {source}")]
    Open {
        /// Path that was requested
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// The catalog file was opened but reading it failed part way.
    #[error("Failed to read catalog file {path}: {source}")]
    Read {
        /// Path being read
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Returns the path of the catalog that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } => path,
        }
    }
}
