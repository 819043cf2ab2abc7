//! Test utilities and fixtures for the Song Searcher.
//!
//! This module provides reusable fixtures and proptest strategies shared by
//! the property-based and integration-style tests.

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::catalog::{Catalog, Record};

/// Maximum number of records in a generated catalog.
const MAX_CATALOG_LEN: usize = 40;

/// Create a temporary directory for test files.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Strategy for song titles.
///
/// Titles draw from a small alphabet plus case, spaces and punctuation so that
/// generated catalogs share prefixes and normalize onto common paths.
pub fn title_strategy() -> BoxedStrategy<String> {
    prop::string::string_regex("[abcABC '!\\-1]{0,12}")
        .expect("valid title regex")
        .boxed()
}

/// Strategy for arbitrary query strings, including non-ASCII text.
pub fn query_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        prop::string::string_regex("[abcABC '!\\-1]{0,6}").expect("valid query regex"),
        proptest::collection::vec(proptest::char::any(), 0..12)
            .prop_map(|chars| chars.into_iter().collect::<String>()),
    ]
    .boxed()
}

/// Strategy for a single record.
pub fn record_strategy() -> BoxedStrategy<Record> {
    (title_strategy(), "[A-Z][a-z]{0,8}")
        .prop_map(|(title, author)| Record::new(title, author))
        .boxed()
}

/// Strategy for a whole catalog.
pub fn catalog_strategy() -> BoxedStrategy<Catalog> {
    proptest::collection::vec(record_strategy(), 0..MAX_CATALOG_LEN)
        .prop_map(Catalog::from)
        .boxed()
}

/// Test fixture holding a temporary directory for catalog and config files.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after tests
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: create_test_dir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Write a catalog file with the usual header line.
    pub fn create_catalog(&self, name: &str, rows: &[(&str, &str)]) -> std::io::Result<PathBuf> {
        let mut contents = String::from("artist,song,link,text\n");
        for (author, title) in rows {
            contents.push_str(&format!("{author},{title},/lyrics,la la la\n"));
        }
        self.create_file(name, contents)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
