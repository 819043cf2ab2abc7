//! Test modules for the Song Searcher.
//!
//! This module contains the cross-component test suites:
//! - Configuration loading and validation
//! - Error reporting
//! - Catalog loading from files
//! - Property-based tests for the prefix trie
//! - Search service behaviour end to end

pub mod search_tests;
pub mod test_utils;
