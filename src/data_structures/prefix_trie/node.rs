// Copyright (c) 2025 Song Searcher Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Prefix Trie.
//!
//! Each node owns up to 26 children, one per lowercase ASCII letter, so
//! descent is a single array index and iterating the slots in order visits
//! children from `a` to `z`.

use crate::catalog::Record;

/// Branching factor: one slot per letter `a..=z`.
pub(crate) const ALPHABET_SIZE: usize = 26;

/// A node in the Prefix Trie.
///
/// A node represents one normalized letter position. Terminal nodes hold every
/// record whose normalized title ends exactly here, in insertion order.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    /// Child slots indexed by letter (`0` is `a`)
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET_SIZE],

    /// Whether some inserted title ends at this node
    pub(crate) is_terminal: bool,

    /// Records whose normalized title ends at this node
    pub(crate) records: Vec<Record>,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the child for `slot`, if one has been created.
    pub(crate) fn child(&self, slot: usize) -> Option<&TrieNode> {
        self.children.get(slot).and_then(|child| child.as_deref())
    }

    /// Returns the child for `slot`, creating it when absent.
    ///
    /// `slot` must be below [`ALPHABET_SIZE`].
    pub(crate) fn child_or_insert(&mut self, slot: usize) -> &mut TrieNode {
        self.children[slot].get_or_insert_with(Box::default)
    }

    /// Iterates the existing children in ascending letter order.
    pub(crate) fn children(&self) -> impl DoubleEndedIterator<Item = &TrieNode> {
        self.children.iter().filter_map(|child| child.as_deref())
    }
}
