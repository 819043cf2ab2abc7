//! Data structures for the Song Searcher.
//!
//! This module contains the index structures queries run against.
//! Indexes are built once at startup and are read-only afterwards, so they can
//! be shared across threads without locking.

pub mod prefix_trie;

pub use prefix_trie::{normalize, Matches, PrefixTrie};
