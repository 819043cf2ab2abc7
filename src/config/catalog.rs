//! Catalog configuration module.
//!
//! Where the song catalog is read from at startup.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default catalog file, a flat `artist,song,...` export.
pub const DEFAULT_CATALOG_PATH: &str = "spotify_millsongdata.csv";

/// Catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Path to the delimited catalog file
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CATALOG_PATH),
        }
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "catalog path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
