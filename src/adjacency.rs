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

use super::directions::{self, N_DIRECTIONS};

#[derive(Clone, Copy, Debug)]
struct Neighbours {
    indices: [u32; N_DIRECTIONS as usize],
    len: u8,
}

/// The tiles touching each tile of a square board, addressed by flat
/// index. The neighbours of a tile are listed in direction order and
/// tiles off the edge of the board are left out.
#[derive(Debug)]
pub struct Adjacency {
    neighbours: Box<[Neighbours]>,
    dimension: u32,
}

impl Adjacency {
    pub fn new(dimension: u32) -> Adjacency {
        let n_tiles = dimension as usize * dimension as usize;
        let mut neighbours = Vec::with_capacity(n_tiles);

        for y in 0..dimension {
            for x in 0..dimension {
                let mut entry = Neighbours {
                    indices: [0; N_DIRECTIONS as usize],
                    len: 0,
                };

                for direction in 0..N_DIRECTIONS {
                    let (nx, ny) = directions::step(x, y, direction);

                    if nx < dimension && ny < dimension {
                        entry.indices[entry.len as usize] =
                            ny * dimension + nx;
                        entry.len += 1;
                    }
                }

                neighbours.push(entry);
            }
        }

        Adjacency {
            neighbours: neighbours.into_boxed_slice(),
            dimension,
        }
    }

    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    pub fn n_tiles(&self) -> usize {
        self.neighbours.len()
    }

    pub fn neighbours(&self, index: usize) -> &[u32] {
        let entry = &self.neighbours[index];

        &entry.indices[0..entry.len as usize]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_tile() {
        let adjacency = Adjacency::new(1);

        assert_eq!(adjacency.n_tiles(), 1);
        assert!(adjacency.neighbours(0).is_empty());
    }

    #[test]
    fn order() {
        let adjacency = Adjacency::new(3);

        // 0 1 2
        // 3 4 5
        // 6 7 8
        assert_eq!(adjacency.neighbours(4), &[3, 5, 1, 7, 0, 2, 6, 8]);
        assert_eq!(adjacency.neighbours(0), &[1, 3, 4]);
        assert_eq!(adjacency.neighbours(2), &[1, 5, 4]);
        assert_eq!(adjacency.neighbours(6), &[7, 3, 4]);
        assert_eq!(adjacency.neighbours(8), &[7, 5, 4]);
        assert_eq!(adjacency.neighbours(1), &[0, 2, 4, 3, 5]);
        assert_eq!(adjacency.neighbours(7), &[6, 8, 4, 3, 5]);
    }

    #[test]
    fn neighbour_counts() {
        let adjacency = Adjacency::new(4);
        let counts = (0..adjacency.n_tiles())
            .map(|index| adjacency.neighbours(index).len())
            .collect::<Vec<_>>();

        assert_eq!(
            &counts,
            &[
                3, 5, 5, 3,
                5, 8, 8, 5,
                5, 8, 8, 5,
                3, 5, 5, 3,
            ],
        );
    }

    #[test]
    fn symmetric() {
        let adjacency = Adjacency::new(5);

        for index in 0..adjacency.n_tiles() {
            for &other in adjacency.neighbours(index) {
                assert!(
                    adjacency.neighbours(other as usize)
                        .contains(&(index as u32))
                );
            }
        }
    }
}
