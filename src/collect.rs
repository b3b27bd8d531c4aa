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

use std::fmt;
use serde::{Serialize, Serializer};
use super::trie::{Trie, NodeId, END_OF_WORD};

/// A letter that can be added to a partial word so that it still leads
/// to a word on the board. Anything that isn’t a letter, including the
/// end of the word, is a blank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowLetter {
    Letter(char),
    Blank,
}

impl FollowLetter {
    pub fn from_character(character: u8) -> FollowLetter {
        if character.is_ascii_alphabetic() {
            FollowLetter::Letter(character as char)
        } else {
            FollowLetter::Blank
        }
    }
}

impl fmt::Display for FollowLetter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FollowLetter::Letter(ch) => write!(f, "{}", ch),
            FollowLetter::Blank => write!(f, " "),
        }
    }
}

impl Serialize for FollowLetter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct StackEntry {
    node: NodeId,
    depth: usize,
}

/// Returns every word that the search flagged, in byte order.
pub fn found_words(trie: &Trie) -> Vec<String> {
    let mut words = Vec::new();
    let mut word = Vec::new();
    let mut stack = vec![StackEntry { node: trie.root(), depth: 0 }];

    while let Some(StackEntry { node, depth }) = stack.pop() {
        if depth > 0 {
            word.truncate(depth - 1);

            let character = trie.character(node);

            if character == END_OF_WORD {
                if trie.word_found(node) {
                    words.push(String::from_utf8_lossy(&word).into_owned());
                }
            } else {
                word.push(character);
            }
        }

        // Reversed so that the lowest character is popped first
        stack.extend(trie.children(node).rev().map(|child| {
            StackEntry { node: child, depth: depth + 1 }
        }));
    }

    words
}

/// Returns the characters after `node` that lead to at least one found
/// word and flags their nodes as follow letters.
pub fn follow_letters(trie: &mut Trie, node: NodeId) -> Vec<FollowLetter> {
    let children = trie.children(node).collect::<Vec<_>>();
    let mut letters = Vec::new();

    for child in children {
        if trie.subtree_has_found_word(child) {
            trie.mark_follow_letter(child);
            letters.push(FollowLetter::from_character(trie.character(child)));
        }
    }

    letters
}
