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

struct PathEntry {
    tile: u32,
    next_neighbour: u8,
}

/// Traces single words on a board without a dictionary. A route is
/// the list of flat tile indices that spell the word.
pub struct RouteFinder<'a> {
    grid: &'a Grid,
    adjacency: &'a Adjacency,
    path: Vec<PathEntry>,
    in_path: Vec<bool>,
    route: Vec<u32>,
}

impl<'a> RouteFinder<'a> {
    pub fn new(grid: &'a Grid, adjacency: &'a Adjacency) -> RouteFinder<'a> {
        assert_eq!(grid.dimension(), adjacency.dimension());

        RouteFinder {
            grid,
            adjacency,
            path: Vec::new(),
            in_path: vec![false; grid.n_tiles()],
            route: Vec::new(),
        }
    }

    fn letter(&self, tile: u32) -> u8 {
        self.grid.at_index(tile as usize).to_ascii_lowercase()
    }

    fn push(&mut self, tile: u32) {
        self.in_path[tile as usize] = true;
        self.path.push(PathEntry { tile, next_neighbour: 0 });
    }

    fn trace_from(&mut self, start: u32, word: &[u8]) -> bool {
        self.path.clear();
        self.in_path.fill(false);

        if word.first() != Some(&self.letter(start)) {
            return false;
        }

        self.push(start);

        loop {
            if self.path.len() >= word.len() {
                return true;
            }

            let Some(entry) = self.path.last_mut()
            else {
                return false;
            };

            let next = self.adjacency
                .neighbours(entry.tile as usize)
                .get(entry.next_neighbour as usize)
                .copied();

            let Some(next) = next
            else {
                self.in_path[entry.tile as usize] = false;
                self.path.pop();
                continue;
            };

            entry.next_neighbour += 1;

            if !self.in_path[next as usize] &&
                self.letter(next) == word[self.path.len()]
            {
                self.push(next);
            }
        }
    }

    /// Returns the first route that spells `word`, trying the starting
    /// tiles in reading order and then the neighbours in adjacency
    /// order. The board letters are compared in lower case.
    pub fn find(&mut self, word: &str) -> Option<&[u32]> {
        let word = word.as_bytes();

        for start in 0..self.grid.n_tiles() as u32 {
            if self.trace_from(start, word) {
                self.route.clear();
                self.route.extend(self.path.iter().map(|entry| entry.tile));
                return Some(&self.route);
            }
        }

        None
    }
}
