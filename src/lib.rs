//! Song Searcher Library
//!
//! This library contains the core of the Song Searcher: the catalog loader,
//! the letter trie used for prefix lookup, and the search service that shapes
//! matches for display. The library is used by the binary crate, but it can
//! also serve as a dependency for other front ends.
//!
//! # Architecture
//!
//! - `catalog` parses the flat `author,title` file into records
//! - `data_structures::prefix_trie` indexes titles by their normalized letters
//! - `search` answers queries and applies result shaping
//! - `config` and `error` provide the ambient configuration and error layers
//!
//! The catalog is loaded and indexed once at startup; every query afterwards
//! is a read-only traversal.

pub mod catalog;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod search;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use catalog::{Catalog, Record};
pub use data_structures::PrefixTrie;
pub use search::{SearchOutcome, SongSearcher};

/// Version information for the Song Searcher.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
