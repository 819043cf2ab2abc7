// Copyright (c) 2025 Song Searcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Result shaping for display.
//!
//! A query produces at most `limit` rows of `"<title> by <author>"`. When
//! nothing matched, a single `no results for '<query>'` row replaces the
//! empty list, quoting the query exactly as the user typed it.

use std::fmt;

use crate::catalog::Record;

/// The shaped answer to one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// At least one record matched, already truncated to the result limit
    Matches(Vec<&'a Record>),
    /// Nothing matched the query
    NoResults {
        /// The query as originally supplied
        query: String,
    },
}

impl<'a> SearchOutcome<'a> {
    /// Shapes a traversal-ordered match sequence for `query`.
    ///
    /// Keeps the first `limit` matches; an empty sequence becomes
    /// [`SearchOutcome::NoResults`].
    pub fn from_matches<I>(query: &str, matches: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let records: Vec<_> = matches.into_iter().take(limit).collect();
        if records.is_empty() {
            Self::NoResults {
                query: query.to_string(),
            }
        } else {
            Self::Matches(records)
        }
    }

    /// The matched records, empty for [`SearchOutcome::NoResults`].
    pub fn records(&self) -> &[&'a Record] {
        match self {
            Self::Matches(records) => records.as_slice(),
            Self::NoResults { .. } => &[],
        }
    }

    /// Returns `true` if nothing matched.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoResults { .. })
    }

    /// Display rows for this outcome.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Matches(records) => records.iter().map(ToString::to_string).collect(),
            Self::NoResults { query } => vec![no_results_message(query)],
        }
    }
}

impl fmt::Display for SearchOutcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// The row shown when a query matched nothing.
pub fn no_results_message(query: &str) -> String {
    format!("no results for '{query}'")
}

/// Shapes matches into display rows without building a [`SearchOutcome`].
pub fn shape_results<'a, I>(query: &str, matches: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    SearchOutcome::from_matches(query, matches, limit).lines()
}
