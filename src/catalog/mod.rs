// Copyright (c) 2025 Song Searcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Song catalog and its flat-file loader.
//!
//! The catalog file is a header line followed by `author,title[,ignored...]`
//! lines. Only the first two comma-separated fields are read; there is no
//! quoting or escaping, so a title containing a comma is cut at that comma.
//!
//! # Example
//!
//! ```
//! use song_searcher_lib::catalog::Catalog;
//!
//! let data = "artist,song\nMichael Jackson,Thriller\n";
//! let catalog = Catalog::from_reader(data.as_bytes()).unwrap();
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.records()[0].title(), "Thriller");
//! ```

mod record;

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::catalog::CatalogError;
use crate::error::{report_error, ErrorContext};

pub use record::Record;

/// Result type for catalog loading.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// An ordered, immutable sequence of [`Record`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses catalog lines from a reader.
    ///
    /// The first line is discarded unconditionally. Lines that are empty or
    /// have no comma are skipped. Bytes that are not valid UTF-8 are replaced
    /// with `U+FFFD`, so only I/O failures are errors.
    pub fn from_reader<R: BufRead>(mut reader: R) -> std::io::Result<Self> {
        let mut records = Vec::new();
        let mut skipped = 0usize;
        let mut lossy = 0usize;
        let mut buf = Vec::new();
        let mut header = true;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if std::mem::take(&mut header) {
                continue;
            }

            let bytes = strip_line_ending(&buf);
            let line = String::from_utf8_lossy(bytes);
            if let Cow::Owned(_) = line {
                lossy += 1;
            }
            match parse_line(&line) {
                Some(record) => records.push(record),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!(skipped, "Skipped malformed catalog lines");
        }
        if lossy > 0 {
            debug!(lines = lossy, "Replaced invalid UTF-8 in catalog lines");
        }

        Ok(Self { records })
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterates the records in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl From<Vec<Record>> for Catalog {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for Catalog {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Catalog {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Drops a trailing `\n` or `\r\n`.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Splits one catalog line into a record.
///
/// Field one is the author and field two the title; anything after a second
/// comma is dropped.
fn parse_line(line: &str) -> Option<Record> {
    if line.is_empty() {
        return None;
    }
    let (author, rest) = line.split_once(',')?;
    let title = rest.split(',').next().unwrap_or(rest);
    Some(Record::new(title, author))
}

/// Reads a catalog file, surfacing failures to the caller.
///
/// # Errors
///
/// Returns [`CatalogError::Open`] when the file cannot be opened and
/// [`CatalogError::Read`] when reading fails part way through.
pub fn try_load_catalog<P: AsRef<Path>>(path: P) -> CatalogResult<Catalog> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CatalogError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog =
        Catalog::from_reader(BufReader::new(file)).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), records = catalog.len(), "Loaded song catalog");
    Ok(catalog)
}

/// Reads a catalog file, degrading to an empty catalog on failure.
///
/// The failure is reported through the global error reporter so the process
/// keeps running and answers every query with no results.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Catalog {
    match try_load_catalog(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            let details = format!("continuing with an empty catalog: {}", e.path().display());
            report_error(ErrorContext::new(e, "catalog").with_details(details));
            Catalog::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_discarded() {
        let data = "Michael Jackson,Thriller\nMichael Jackson,Bad\n";
        let catalog = Catalog::from_reader(data.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].title(), "Bad");
    }

    #[test]
    fn test_author_then_title() {
        let record = parse_line("ABBA,Dancing Queen,/a/abba/dancing+queen_20598417.html").unwrap();
        assert_eq!(record.author(), "ABBA");
        assert_eq!(record.title(), "Dancing Queen");
    }

    #[test]
    fn test_unsplittable_lines_are_skipped() {
        assert!(parse_line("").is_none());
        assert!(parse_line("no delimiter here").is_none());

        let data = "artist,song\n\njust some lyrics\nQueen,Bohemian Rhapsody\n";
        let catalog = Catalog::from_reader(data.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].author(), "Queen");
    }

    #[test]
    fn test_fields_are_kept_verbatim() {
        let record = parse_line("Beyoncé, Crazy In Love ").unwrap();
        assert_eq!(record.author(), "Beyoncé");
        assert_eq!(record.title(), " Crazy In Love ");

        let record = parse_line("Prince,").unwrap();
        assert_eq!(record.title(), "");
    }

    #[test]
    fn test_crlf_lines() {
        let data = "artist,song\r\nAdele,Hello\r\n";
        let catalog = Catalog::from_reader(data.as_bytes()).unwrap();
        assert_eq!(catalog.records()[0].title(), "Hello");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let data: &[u8] = b"artist,song\nBeyonc\xe9,Halo\r\nAdele,Hello";
        let catalog = Catalog::from_reader(data).unwrap();
        assert_eq!(
            catalog.records(),
            &[
                Record::new("Halo", "Beyonc\u{FFFD}"),
                Record::new("Hello", "Adele"),
            ]
        );
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending(b"a,b\r\n"), b"a,b");
        assert_eq!(strip_line_ending(b"a,b\n"), b"a,b");
        assert_eq!(strip_line_ending(b"a,b"), b"a,b");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = try_load_catalog("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, CatalogError::Open { .. }));
        assert!(load_catalog("/definitely/not/here.csv").is_empty());
    }
}
