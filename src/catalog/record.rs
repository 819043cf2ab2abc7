// Copyright (c) 2025 Song Searcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The (title, author) pair stored in the catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single song entry. Both fields are free-form and kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    title: String,
    author: String,
}

impl Record {
    /// Creates a record from a title and an author.
    pub fn new<T, A>(title: T, author: A) -> Self
    where
        T: Into<String>,
        A: Into<String>,
    {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    /// The song title, with original casing and punctuation.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The song author.
    pub fn author(&self) -> &str {
        &self.author
    }
}

/// Renders the `"<title> by <author>"` result row.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}
