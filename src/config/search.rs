//! Search configuration module.
//!
//! This module defines how queries are answered: how many rows are surfaced
//! and what an empty query means.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Number of result rows shown for a query.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// What to answer when a query has no letters left after normalization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmptyQueryPolicy {
    /// Treat the query as matching nothing
    #[default]
    NoResults,
    /// List the whole catalog in traversal order
    All,
}

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Maximum number of matches surfaced per query
    pub max_results: usize,

    /// Behaviour for queries that normalize to nothing
    pub empty_query: EmptyQueryPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            empty_query: EmptyQueryPolicy::default(),
        }
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_results == 0 {
            return Err(ConfigError::ValidationError(
                "max_results must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
