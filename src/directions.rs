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

// Each tile touches up to eight others, including the diagonals. The
// directions are numbered in the order that the search tries them:
//
//   4 2 5
//   0 . 1
//   6 3 7

pub const N_DIRECTIONS: u8 = 8;

static OFFSETS: [(i32, i32); N_DIRECTIONS as usize] = [
    (-1, 0),  // left
    (1, 0),   // right
    (0, -1),  // up
    (0, 1),   // down
    (-1, -1), // up left
    (1, -1),  // up right
    (-1, 1),  // down left
    (1, 1),   // down right
];

pub fn step(x: u32, y: u32, direction: u8) -> (u32, u32) {
    assert!(direction < N_DIRECTIONS);

    let (x_off, y_off) = OFFSETS[direction as usize];

    (x.wrapping_add_signed(x_off), y.wrapping_add_signed(y_off))
}
