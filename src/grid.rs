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

/// A square board of ASCII letters stored row by row.
#[derive(Debug, Clone)]
pub struct Grid {
    values: Box<[u8]>,
    dimension: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyGrid,
    InvalidCharacter(char),
    RowLength {
        row: usize,
        length: usize,
        expected: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyGrid => write!(f, "empty grid"),
            Error::InvalidCharacter(ch) => {
                write!(f, "invalid character “{}” in grid", ch)
            },
            Error::RowLength { row, length, expected } => {
                write!(
                    f,
                    "row {} has {} letters but the first row has {}",
                    row,
                    length,
                    expected,
                )
            },
        }
    }
}

fn row_letters(line: &str) -> Result<Vec<u8>, Error> {
    line.chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| {
            if ch.is_ascii_alphabetic() {
                Ok(ch as u8)
            } else {
                Err(Error::InvalidCharacter(ch))
            }
        })
        .collect()
}

impl Grid {
    /// Parses a board. The number of letters on the first line sets
    /// the size of the board and the following lines must each have
    /// the same number of letters. Whitespace between the letters is
    /// ignored, as is anything after the last row.
    pub fn new(s: &str) -> Result<Grid, Error> {
        let mut lines = s.lines();

        let mut values = row_letters(lines.next().unwrap_or(""))?;
        let width = values.len();

        if width < 1 {
            return Err(Error::EmptyGrid);
        }

        values.reserve(width * width - width);

        for row in 1..width {
            let letters = row_letters(lines.next().unwrap_or(""))?;

            if letters.len() != width {
                return Err(Error::RowLength {
                    row: row + 1,
                    length: letters.len(),
                    expected: width,
                });
            }

            values.extend(letters);
        }

        Ok(Grid {
            values: values.into_boxed_slice(),
            dimension: width as u32,
        })
    }

    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    pub fn n_tiles(&self) -> usize {
        self.values.len()
    }

    pub fn at(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.dimension);

        self.values[(y * self.dimension + x) as usize]
    }

    pub fn at_index(&self, index: usize) -> u8 {
        self.values[index]
    }

    pub fn position(&self, index: usize) -> (u32, u32) {
        let index = index as u32;

        (index % self.dimension, index / self.dimension)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.values.chunks(self.dimension as usize) {
            for (x, &letter) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }

                write!(f, "{}", letter as char)?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
