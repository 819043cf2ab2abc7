// Copyright (c) 2025 Song Searcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Title and query normalization.
//!
//! The trie key of a string is its subsequence of ASCII letters, lowercased.
//! Everything else (spaces, digits, punctuation, non-ASCII letters) is elided
//! without acting as a boundary, so `"Don't Stop"` and `"dont stop"` share a
//! path.

/// Maps a character to its child slot, or `None` if it is not indexed.
#[inline]
pub fn letter_slot(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some(usize::from(c.to_ascii_lowercase() as u8 - b'a'))
    } else {
        None
    }
}

/// Iterates the child slots a string descends through.
pub fn slots(s: &str) -> impl Iterator<Item = usize> + '_ {
    s.chars().filter_map(letter_slot)
}

/// Returns the normalized form of `s`.
///
/// Normalization is idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
