//! Character-level prefix tree recording where words and prefixes occur.
//!
//! Nodes live in an arena owned by the [`Trie`] and refer to their children by
//! [`NodeId`]. There are no parent links: the tree is append-only after
//! construction and every read hands out copies of occurrence lists.

use crate::index::types::{Column, NodeId, Occurrence, Row};

const ROOT: NodeId = 0;

/// Per-line column cursor threaded through construction.
///
/// Advances by each chunk's unformatted width plus one separator, so columns
/// index into the raw line rather than the normalized key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCursor {
    column: Column,
}

impl LineCursor {
    pub fn new() -> Self {
        Self { column: 1 }
    }

    #[inline]
    pub fn column(&self) -> Column {
        self.column
    }

    #[inline]
    pub fn advance(&mut self, width: usize) {
        self.column += width as Column;
    }

    /// Must run between lines, otherwise columns drift.
    pub fn reset(&mut self) {
        self.column = 1;
    }
}

impl Default for LineCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// A single character of some key
#[derive(Debug, Clone)]
pub struct TrieNode {
    ch: char,
    children: Vec<NodeId>,
    /// Every time a key passing through this node was inserted
    prefixes: Vec<Occurrence>,
    /// Every time a key ending at this node was inserted
    complete: Vec<Occurrence>,
    /// Some inserted key ends here, whether or not occurrences were recorded
    terminal: bool,
}

impl TrieNode {
    fn new(ch: char) -> Self {
        Self {
            ch,
            children: Vec::new(),
            prefixes: Vec::new(),
            complete: Vec::new(),
            terminal: false,
        }
    }

    pub fn character(&self) -> char {
        self.ch
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn prefix_occurrences(&self) -> &[Occurrence] {
        &self.prefixes
    }

    pub fn complete_occurrences(&self) -> &[Occurrence] {
        &self.complete
    }
}

/// Prefix tree rooted at a sentinel node
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    terminals: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new('\0')],
            terminals: 0,
        }
    }

    /// Insert `word` starting at the cursor's column.
    ///
    /// The cursor first skips `leading_symbols`; after the walk it advances by
    /// `unformatted_len` (the remaining raw width plus one separator). With
    /// `record_occurrences`, every node on the path gets a prefix occurrence
    /// and the final node a complete-word occurrence.
    pub fn insert(
        &mut self,
        word: &str,
        row: Row,
        record_occurrences: bool,
        cursor: &mut LineCursor,
        unformatted_len: usize,
        leading_symbols: usize,
    ) -> NodeId {
        cursor.advance(leading_symbols);
        let occurrence = Occurrence::new(row, cursor.column());

        let mut current = ROOT;
        for ch in word.chars() {
            current = match self.child(current, ch) {
                Some(next) => next,
                None => self.push_child(current, ch),
            };
            if record_occurrences {
                self.nodes[current as usize].prefixes.push(occurrence);
            }
        }

        if current != ROOT {
            let node = &mut self.nodes[current as usize];
            if !node.terminal {
                node.terminal = true;
                self.terminals += 1;
            }
            if record_occurrences {
                node.complete.push(occurrence);
            }
        }

        cursor.advance(unformatted_len);
        current
    }

    /// Append a complete-word occurrence to an already-known node.
    pub fn attach_complete_occurrence(&mut self, node: NodeId, row: Row, column: Column) {
        if let Some(node) = self.nodes.get_mut(node as usize) {
            node.complete.push(Occurrence::new(row, column));
        }
    }

    /// Descend along `key`. The key must already be normalized.
    pub fn find(&self, key: &str) -> Option<NodeId> {
        let mut current = ROOT;
        for ch in key.chars() {
            current = self.child(current, ch)?;
        }
        Some(current)
    }

    /// Like [`Trie::find`], but only for keys that were inserted whole.
    pub fn find_terminal(&self, key: &str) -> Option<NodeId> {
        self.find(key)
            .filter(|&id| id != ROOT && self.nodes[id as usize].terminal)
    }

    /// Copy of the complete-word occurrences for `key`.
    ///
    /// `None` means the path does not exist; `Some` of an empty list means the
    /// key only exists as a prefix of longer words.
    pub fn lookup_occurrences(&self, key: &str) -> Option<Vec<Occurrence>> {
        self.find(key)
            .map(|id| self.nodes[id as usize].complete.clone())
    }

    /// Copy of the prefix occurrences for `key`.
    pub fn lookup_prefix_occurrences(&self, key: &str) -> Option<Vec<Occurrence>> {
        self.find(key)
            .map(|id| self.nodes[id as usize].prefixes.clone())
    }

    pub fn node(&self, id: NodeId) -> Option<&TrieNode> {
        self.nodes.get(id as usize)
    }

    /// Number of nodes, excluding the sentinel root
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Number of distinct keys inserted
    pub fn word_count(&self) -> usize {
        self.terminals
    }

    /// Total complete-word occurrences across all keys
    pub fn occurrence_count(&self) -> usize {
        self.nodes.iter().map(|n| n.complete.len()).sum()
    }

    fn child(&self, parent: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[parent as usize]
            .children
            .iter()
            .copied()
            .find(|&id| self.nodes[id as usize].ch == ch)
    }

    fn push_child(&mut self, parent: NodeId, ch: char) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(TrieNode::new(ch));
        self.nodes[parent as usize].children.push(id);
        id
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
