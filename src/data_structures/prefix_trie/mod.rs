// Copyright (c) 2025 Song Searcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Trie for song title lookup.
//!
//! A 26-ary trie keyed by the normalized letters of each title. Lookup is
//! case- and punctuation-insensitive and returns every record whose
//! normalized title starts with the normalized query.
//!
//! # Features
//!
//! - Fixed 26-slot branching, so each query letter is one array index
//! - Single ownership: every node is owned by its parent through a `Box`
//! - Deterministic result order, see [`Matches`]
//! - Lazy collection, so taking the first few matches stops the traversal early
//!
//! # Example
//!
//! ```
//! use song_searcher_lib::catalog::{Catalog, Record};
//! use song_searcher_lib::data_structures::prefix_trie::PrefixTrie;
//!
//! let catalog = Catalog::from(vec![
//!     Record::new("Billie Jean", "Michael Jackson"),
//!     Record::new("Bad", "Michael Jackson"),
//!     Record::new("Beat It", "Michael Jackson"),
//! ]);
//! let trie = PrefixTrie::build(&catalog);
//!
//! let titles: Vec<_> = trie.search("B").iter().map(|r| r.title()).collect();
//! assert_eq!(titles, vec!["Bad", "Beat It", "Billie Jean"]);
//! assert!(trie.search("xyz").is_empty());
//! ```
//!
//! # Performance Characteristics
//!
//! - Build: O(total normalized letters across the catalog)
//! - Descent to the prefix root: O(normalized query length)
//! - Collection: O(nodes in the matched subtree), or less when the caller
//!   stops consuming [`Matches`] early

mod node;
pub mod normalize;

use std::iter::FusedIterator;

use tracing::info;

use crate::catalog::{Catalog, Record};

use node::TrieNode;
pub use normalize::normalize;

/// Prefix index over song titles.
///
/// Built once from a [`Catalog`] and read-only afterwards; every query is an
/// independent traversal, so a shared `&PrefixTrie` can be searched from
/// several threads at once.
///
/// Nodes are internal; the index can only be read through queries.
///
/// ```compile_fail
/// use song_searcher_lib::data_structures::prefix_trie::TrieNode;
/// ```
#[derive(Debug)]
pub struct PrefixTrie {
    root: TrieNode,
    len: usize,
    node_count: usize,
}

impl PrefixTrie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
            node_count: 1,
        }
    }

    /// Builds the index from a catalog, inserting records in catalog order.
    ///
    /// Records are copied into the trie; the catalog is only borrowed for the
    /// duration of the build.
    pub fn build(catalog: &Catalog) -> Self {
        let trie: Self = catalog.iter().cloned().collect();
        info!(
            records = trie.len(),
            nodes = trie.node_count(),
            "Built prefix index"
        );
        trie
    }

    /// Inserts a record at the end of its normalized title path.
    fn insert(&mut self, record: Record) {
        let mut node = &mut self.root;
        for slot in normalize::slots(record.title()) {
            if node.children[slot].is_none() {
                self.node_count += 1;
            }
            node = node.child_or_insert(slot);
        }
        node.is_terminal = true;
        node.records.push(record);
        self.len += 1;
    }

    /// Returns every record whose normalized title starts with the normalized
    /// query, in traversal order.
    ///
    /// A query with no letters after normalization matches nothing; use
    /// [`PrefixTrie::all`] to list the whole index explicitly.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.matches(query).collect()
    }

    /// Lazily yields the records matching `query`, in traversal order.
    pub fn matches(&self, query: &str) -> Matches<'_> {
        let mut slots = normalize::slots(query).peekable();
        if slots.peek().is_none() {
            return Matches::empty();
        }

        let mut node = &self.root;
        for slot in slots {
            match node.child(slot) {
                Some(child) => node = child,
                None => return Matches::empty(),
            }
        }
        Matches::from_root(node)
    }

    /// Lazily yields every record in the index, in traversal order.
    ///
    /// Records whose titles contain no letters are stored at the root and
    /// come first.
    pub fn all(&self) -> Matches<'_> {
        Matches::from_root(&self.root)
    }

    /// Number of records stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no records have been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the trie, including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Record> for PrefixTrie {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut trie = Self::new();
        for record in iter {
            trie.insert(record);
        }
        trie
    }
}

/// Depth-first iterator over the records under a prefix root.
///
/// A node's own records are yielded before any of its children, and children
/// are visited in ascending letter order. Records sharing a node keep their
/// insertion order. Result truncation relies on this order being stable.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    stack: Vec<&'a TrieNode>,
    pending: std::slice::Iter<'a, Record>,
}

impl<'a> Matches<'a> {
    fn empty() -> Self {
        Self {
            stack: Vec::new(),
            pending: <&[Record]>::default().iter(),
        }
    }

    fn from_root(root: &'a TrieNode) -> Self {
        Self {
            stack: vec![root],
            pending: <&[Record]>::default().iter(),
        }
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.pending.next() {
                return Some(record);
            }
            let node = self.stack.pop()?;
            // Reversed so that `a` is popped first.
            self.stack.extend(node.children().rev());
            if node.is_terminal {
                self.pending = node.records.iter();
            }
        }
    }
}

impl FusedIterator for Matches<'_> {}
