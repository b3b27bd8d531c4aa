// Wordboggle – Find the words hidden in a Boggle board
// Copyright (C) 2024  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Prefix tree of the dictionary words.
//!
//! Every node lives in a single arena owned by the [`Trie`] and refers
//! to its children by index. The end of a word is marked with an extra
//! child whose character is [`END_OF_WORD`]. That end node is the one
//! that gets flagged when the search finds the word on the board.

use std::collections::BTreeMap;

/// Character of the nodes that mark the end of a word. The root also
/// uses it.
pub const END_OF_WORD: u8 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

#[derive(Debug)]
struct Node {
    character: u8,
    children: BTreeMap<u8, NodeId>,
    word_found: bool,
    is_follow_letter: bool,
}

impl Node {
    fn new(character: u8) -> Node {
        Node {
            character,
            children: BTreeMap::new(),
            word_found: false,
            is_follow_letter: false,
        }
    }
}

#[derive(Debug)]
pub struct Trie {
    nodes: Vec<Node>,
}

impl Default for Trie {
    fn default() -> Trie {
        Trie::new()
    }
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            nodes: vec![Node::new(END_OF_WORD)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes including the root and the end markers.
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }

    fn get_or_add_child(&mut self, parent: NodeId, character: u8) -> NodeId {
        if let Some(&child) = self.node(parent).children.get(&character) {
            return child;
        }

        let child = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(character));
        self.node_mut(parent).children.insert(character, child);

        child
    }

    /// Adds a word. The word must not contain [`END_OF_WORD`]. Adding
    /// the same word again leaves the trie unchanged.
    pub fn insert<W: AsRef<[u8]>>(&mut self, word: W) {
        let mut node = self.root();

        for &character in word.as_ref() {
            debug_assert_ne!(character, END_OF_WORD);
            node = self.get_or_add_child(node, character);
        }

        self.get_or_add_child(node, END_OF_WORD);
    }

    pub fn contains<W: AsRef<[u8]>>(&self, word: W) -> bool {
        self.node_for_prefix(self.root(), word)
            .is_some_and(|node| self.is_end(node))
    }

    pub fn step(&self, node: NodeId, character: u8) -> Option<NodeId> {
        self.node(node).children.get(&character).copied()
    }

    pub fn has_child(&self, node: NodeId, character: u8) -> bool {
        self.node(node).children.contains_key(&character)
    }

    /// Follows the letters of `prefix` down from `node`. Returns `None`
    /// if the trie has no word starting that way.
    pub fn node_for_prefix<P: AsRef<[u8]>>(
        &self,
        node: NodeId,
        prefix: P,
    ) -> Option<NodeId> {
        prefix.as_ref()
            .iter()
            .try_fold(node, |node, &character| self.step(node, character))
    }

    /// Whether a word ends at this node.
    pub fn is_end(&self, node: NodeId) -> bool {
        self.has_child(node, END_OF_WORD)
    }

    pub fn character(&self, node: NodeId) -> u8 {
        self.node(node).character
    }

    pub fn word_found(&self, node: NodeId) -> bool {
        self.node(node).word_found
    }

    pub fn is_follow_letter(&self, node: NodeId) -> bool {
        self.node(node).is_follow_letter
    }

    /// Children in ascending character order, the end marker first.
    pub fn children(
        &self,
        node: NodeId,
    ) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.node(node).children.values().copied()
    }

    /// Flags the word ending at `node` as found. Returns true if there
    /// is such a word and it wasn’t already flagged.
    pub fn mark_found(&mut self, node: NodeId) -> bool {
        let Some(end) = self.step(node, END_OF_WORD)
        else {
            return false;
        };

        let end = self.node_mut(end);

        if end.word_found {
            false
        } else {
            end.word_found = true;
            true
        }
    }

    pub fn mark_follow_letter(&mut self, node: NodeId) {
        self.node_mut(node).is_follow_letter = true;
    }

    /// Whether any word that has been flagged as found ends in the
    /// subtree rooted at `node`, including `node` itself if it is an end
    /// marker.
    pub fn subtree_has_found_word(&self, node: NodeId) -> bool {
        let mut stack = vec![node];

        while let Some(node) = stack.pop() {
            let node = self.node(node);

            if node.character == END_OF_WORD && node.word_found {
                return true;
            }

            stack.extend(node.children.values().copied());
        }

        false
    }
}
