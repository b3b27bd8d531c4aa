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

use serde::Serialize;
use log::debug;
use super::grid::Grid;
use super::adjacency::Adjacency;
use super::trie::Trie;
use super::search;
use super::collect::{self, FollowLetter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode<'a> {
    /// Find every dictionary word on the board.
    Exhaustive,
    /// Find every word and then the letters that can follow the given
    /// partial word.
    PrefixCompletion(&'a str),
    /// Like `Exhaustive` but only words that don’t repeat a letter are
    /// considered at all.
    UniqueLetters,
}

#[derive(Debug, Default, Serialize)]
pub struct Solution {
    pub found_words: Vec<String>,
    pub follow_letters: Vec<FollowLetter>,
}

impl Solution {
    pub fn found_word_count(&self) -> usize {
        self.found_words.len()
    }

    pub fn found_letter_count(&self) -> usize {
        self.follow_letters.len()
    }
}

pub fn has_unique_letters(word: &[u8]) -> bool {
    let mut seen = [false; 256];

    word.iter().all(|&ch| !std::mem::replace(&mut seen[ch as usize], true))
}

fn build_trie<I, W>(mode: Mode, dictionary: I) -> Trie
    where I: IntoIterator<Item = W>,
          W: AsRef<[u8]>
{
    let mut trie = Trie::new();
    let mut n_words = 0;
    let mut n_skipped = 0;

    for word in dictionary {
        let word = word.as_ref();

        n_words += 1;

        if mode == Mode::UniqueLetters && !has_unique_letters(word) {
            n_skipped += 1;
            continue;
        }

        trie.insert(word);
    }

    debug!(
        "built trie with {} nodes from {} words ({} skipped)",
        trie.n_nodes(),
        n_words,
        n_skipped,
    );

    trie
}

pub fn solve<I, W>(mode: Mode, dictionary: I, grid: &Grid) -> Solution
    where I: IntoIterator<Item = W>,
          W: AsRef<[u8]>
{
    let mut trie = build_trie(mode, dictionary);
    let adjacency = Adjacency::new(grid.dimension());

    let n_found = search::search_words(&mut trie, grid, &adjacency);

    let found_words = collect::found_words(&trie);

    debug_assert_eq!(n_found, found_words.len());

    let follow_letters = match mode {
        Mode::PrefixCompletion(partial) => {
            match trie.node_for_prefix(trie.root(), partial) {
                Some(node) => collect::follow_letters(&mut trie, node),
                None => {
                    debug!("“{}” doesn’t start any word", partial);
                    Vec::new()
                },
            }
        },
        Mode::Exhaustive | Mode::UniqueLetters => Vec::new(),
    };

    Solution {
        found_words,
        follow_letters,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::route_finder::RouteFinder;

    fn solve_str(mode: Mode, words: &[&str], grid: &str) -> Solution {
        solve(mode, words, &Grid::new(grid).unwrap())
    }

    static CAT_GRID: &str = "c a t\n\
                             o r z\n\
                             x x x";

    #[test]
    fn exhaustive() {
        let solution = solve_str(
            Mode::Exhaustive,
            &["cat", "car", "cot"],
            CAT_GRID,
        );

        assert_eq!(&solution.found_words, &["car", "cat"]);
        assert_eq!(solution.found_word_count(), 2);
        assert!(solution.follow_letters.is_empty());
    }

    #[test]
    fn duplicate_words() {
        let solution = solve_str(
            Mode::Exhaustive,
            &["cat", "car", "cat", "cot", "car"],
            CAT_GRID,
        );

        assert_eq!(&solution.found_words, &["car", "cat"]);
    }

    #[test]
    fn case_insensitive() {
        let words = ["cat", "car", "cot", "rot", "tar", "oar"];
        let lower = solve_str(Mode::Exhaustive, &words, CAT_GRID);
        let mixed = solve_str(
            Mode::Exhaustive,
            &words,
            "C a T\n\
             o R z\n\
             X x X",
        );

        assert_eq!(&lower.found_words, &mixed.found_words);
        assert_eq!(&lower.found_words, &["car", "cat", "oar", "tar"]);
    }

    #[test]
    fn boundaries() {
        let solution = solve_str(Mode::Exhaustive, &["a"], "a");
        assert_eq!(&solution.found_words, &["a"]);

        let solution = solve_str(Mode::Exhaustive, &[], CAT_GRID);
        assert_eq!(solution.found_word_count(), 0);

        let solution = solve_str(Mode::PrefixCompletion("c"), &[], CAT_GRID);
        assert_eq!(solution.found_letter_count(), 0);
    }

    #[test]
    fn unique_letters() {
        assert!(has_unique_letters(b"cart"));
        assert!(has_unique_letters(b""));
        assert!(!has_unique_letters(b"deed"));
        assert!(!has_unique_letters(b"aa"));

        let grid = "t o o\n\
                    x l x\n\
                    x x s";
        let words = ["too", "tool", "tools", "lot", "lots", "sol"];

        let solution = solve_str(Mode::Exhaustive, &words, grid);
        assert_eq!(&solution.found_words, &["lot", "too", "tool", "tools"]);

        let solution = solve_str(Mode::UniqueLetters, &words, grid);
        assert_eq!(&solution.found_words, &["lot"]);
    }

    #[test]
    fn follow_letters() {
        let grid = "c a t\n\
                    o r s\n\
                    x x x";
        let words = ["car", "cars", "cart", "cat", "cats", "cab", "cot"];

        let solution = solve_str(Mode::PrefixCompletion("ca"), &words, grid);

        // “cab” can’t be made so “b” isn’t included
        assert_eq!(
            &solution.follow_letters,
            &[FollowLetter::Letter('r'), FollowLetter::Letter('t')],
        );
        assert_eq!(solution.found_letter_count(), 2);
        assert_eq!(
            &solution.found_words,
            &["car", "cars", "cart", "cat", "cats"],
        );

        // “car” itself is a word so the end of the word is a blank
        let solution = solve_str(Mode::PrefixCompletion("car"), &words, grid);
        assert_eq!(
            &solution.follow_letters,
            &[
                FollowLetter::Blank,
                FollowLetter::Letter('s'),
                FollowLetter::Letter('t'),
            ],
        );

        let solution = solve_str(Mode::PrefixCompletion("cats"), &words, grid);
        assert_eq!(&solution.follow_letters, &[FollowLetter::Blank]);
    }

    #[test]
    fn follow_letters_later_branch() {
        // The first branch after “c” (“ca”) has no found words but the
        // second one does.
        let solution = solve_str(
            Mode::PrefixCompletion(""),
            &["cab", "cot"],
            "c o t\n\
             x x x\n\
             x x x",
        );

        assert_eq!(&solution.follow_letters, &[FollowLetter::Letter('c')]);

        let solution = solve_str(
            Mode::PrefixCompletion("c"),
            &["cab", "cot"],
            "c o t\n\
             x x x\n\
             x x x",
        );

        assert_eq!(&solution.follow_letters, &[FollowLetter::Letter('o')]);
    }

    #[test]
    fn unknown_prefix() {
        let solution = solve_str(
            Mode::PrefixCompletion("zz"),
            &["cat", "car"],
            CAT_GRID,
        );

        assert!(solution.follow_letters.is_empty());
        assert_eq!(solution.found_word_count(), 2);
    }

    struct Lcg(u32);

    impl Lcg {
        fn next(&mut self) -> u32 {
            self.0 = self.0.wrapping_mul(1103515245).wrapping_add(12345);
            (self.0 >> 16) & 0x7fff
        }

        fn letter(&mut self, alphabet: &[u8]) -> u8 {
            alphabet[self.next() as usize % alphabet.len()]
        }
    }

    #[test]
    fn matches_finder() {
        // Uses a small alphabet so that plenty of the random words are
        // on the board.
        static ALPHABET: &[u8] = b"aeilnrst";
        let mut rng = Lcg(42);

        for dimension in 1..=5 {
            let grid_str = (0..dimension).map(|_| {
                (0..dimension)
                    .map(|_| rng.letter(ALPHABET) as char)
                    .collect::<String>()
            }).collect::<Vec<_>>().join("\n");
            let grid = Grid::new(&grid_str).unwrap();

            let words = (0..400).map(|_| {
                let length = rng.next() as usize % 6 + 1;
                (0..length)
                    .map(|_| rng.letter(ALPHABET) as char)
                    .collect::<String>()
            }).collect::<Vec<_>>();

            let solution = solve(Mode::Exhaustive, &words, &grid);

            let adjacency = Adjacency::new(grid.dimension());
            let mut finder = RouteFinder::new(&grid, &adjacency);
            let mut expected = words.iter()
                .filter(|word| finder.find(word).is_some())
                .cloned()
                .collect::<Vec<_>>();
            expected.sort_unstable();
            expected.dedup();

            assert_eq!(solution.found_words, expected, "{}", grid_str);
        }
    }

    #[test]
    fn json() {
        let solution = solve_str(
            Mode::PrefixCompletion("ca"),
            &["cat", "car"],
            CAT_GRID,
        );

        assert_eq!(
            &serde_json::to_string(&solution).unwrap(),
            "{\"found_words\":[\"car\",\"cat\"],\
             \"follow_letters\":[\"r\",\"t\"]}",
        );
    }
}
