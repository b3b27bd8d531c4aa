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

use super::grid::Grid;
use super::adjacency::Adjacency;
use super::trie::{Trie, NodeId};
use log::{debug, trace};

struct StackEntry {
    tile: u32,
    node: NodeId,
    next_neighbour: u8,
}

struct Search<'a> {
    grid: &'a Grid,
    adjacency: &'a Adjacency,
    stack: Vec<StackEntry>,
    visited: Vec<bool>,
    n_found: usize,
}

impl<'a> Search<'a> {
    fn new(grid: &'a Grid, adjacency: &'a Adjacency) -> Search<'a> {
        assert_eq!(grid.dimension(), adjacency.dimension());

        Search {
            grid,
            adjacency,
            stack: Vec::new(),
            visited: vec![false; grid.n_tiles()],
            n_found: 0,
        }
    }

    fn letter(&self, tile: u32) -> u8 {
        self.grid.at_index(tile as usize).to_ascii_lowercase()
    }

    fn visit(&mut self, trie: &mut Trie, tile: u32, node: NodeId) {
        self.visited[tile as usize] = true;

        if trie.mark_found(node) {
            self.n_found += 1;

            trace!(
                "found a word ending at {:?}",
                self.grid.position(tile as usize),
            );
        }

        self.stack.push(StackEntry {
            tile,
            node,
            next_neighbour: 0,
        });
    }

    fn search_from_tile(&mut self, trie: &mut Trie, start: u32) {
        let Some(node) = trie.step(trie.root(), self.letter(start))
        else {
            return;
        };

        self.visit(trie, start, node);

        while let Some(entry) = self.stack.last_mut() {
            let next = self.adjacency
                .neighbours(entry.tile as usize)
                .get(entry.next_neighbour as usize)
                .copied();

            match next {
                Some(next) => {
                    entry.next_neighbour += 1;
                    let node = entry.node;

                    if self.visited[next as usize] {
                        continue;
                    }

                    if let Some(child) = trie.step(node, self.letter(next)) {
                        self.visit(trie, next, child);
                    }
                },
                None => {
                    // Backtrack
                    self.visited[entry.tile as usize] = false;
                    self.stack.pop();
                },
            }
        }
    }
}

/// Runs a search from every tile of the grid and flags every word of
/// the trie that can be traced on it. The flags accumulate in the trie
/// so a word that was already found by an earlier search isn’t counted
/// again. Returns the number of newly found words.
pub fn search_words(
    trie: &mut Trie,
    grid: &Grid,
    adjacency: &Adjacency,
) -> usize {
    let mut search = Search::new(grid, adjacency);

    for tile in 0..grid.n_tiles() as u32 {
        search.search_from_tile(trie, tile);
    }

    debug!(
        "searched {}×{} grid and found {} words",
        grid.dimension(),
        grid.dimension(),
        search.n_found,
    );

    search.n_found
}
