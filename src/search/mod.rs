// Copyright (c) 2025 Song Searcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Song search service.
//!
//! [`SongSearcher`] ties a built [`PrefixTrie`] to the search settings. It
//! decides what an empty query means and shapes matches into the rows the
//! presentation layer renders.

mod outcome;

use tracing::debug;

use crate::catalog::{load_catalog, Catalog, Record};
use crate::config::{EmptyQueryPolicy, SearchConfig, SearcherConfig};
use crate::data_structures::prefix_trie::{normalize, Matches, PrefixTrie};

pub use outcome::{no_results_message, shape_results, SearchOutcome};

/// Prefix search over a song catalog.
#[derive(Debug)]
pub struct SongSearcher {
    index: PrefixTrie,
    settings: SearchConfig,
}

impl SongSearcher {
    /// Builds the index for `catalog` with the given settings.
    pub fn new(catalog: &Catalog, settings: SearchConfig) -> Self {
        Self {
            index: PrefixTrie::build(catalog),
            settings,
        }
    }

    /// Loads the configured catalog and builds the index.
    ///
    /// An unreadable catalog is reported and yields a searcher that answers
    /// every query with no results.
    pub fn from_config(config: &SearcherConfig) -> Self {
        let catalog = load_catalog(&config.catalog.path);
        Self::new(&catalog, config.search.clone())
    }

    /// The underlying index.
    pub fn index(&self) -> &PrefixTrie {
        &self.index
    }

    /// The active search settings.
    pub fn settings(&self) -> &SearchConfig {
        &self.settings
    }

    /// Every record matching `query`, in traversal order, untruncated.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.matches(query).collect()
    }

    /// The first `max_results` matches for `query`, shaped for display.
    pub fn top_matches(&self, query: &str) -> SearchOutcome<'_> {
        let outcome =
            SearchOutcome::from_matches(query, self.matches(query), self.settings.max_results);
        debug!(
            query,
            shown = outcome.records().len(),
            "Answered query"
        );
        outcome
    }

    /// Display rows for `query`.
    pub fn render(&self, query: &str) -> Vec<String> {
        self.top_matches(query).lines()
    }

    fn matches(&self, query: &str) -> Matches<'_> {
        if self.settings.empty_query == EmptyQueryPolicy::All && normalize(query).is_empty() {
            return self.index.all();
        }
        self.index.matches(query)
    }
}
