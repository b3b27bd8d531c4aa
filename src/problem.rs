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
use std::str::FromStr;
use log::warn;

/// A word list as read from a dictionary file. The file starts with
/// the number of words followed by one word per line.
#[derive(Debug)]
pub struct Dictionary {
    pub words: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingWordCount,
    InvalidWordCount(String),
    InvalidWord(usize),
    MissingPartialString,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingWordCount => write!(f, "missing word count"),
            Error::InvalidWordCount(s) => {
                write!(f, "invalid word count “{}”", s)
            },
            Error::InvalidWord(line) => {
                write!(f, "line {}: word contains a null character", line)
            },
            Error::MissingPartialString => write!(f, "missing partial string"),
        }
    }
}

fn split_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();

    if s.is_empty() {
        return None;
    }

    Some(s.split_at(s.find(char::is_whitespace).unwrap_or(s.len())))
}

impl FromStr for Dictionary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Dictionary, Error> {
        let Some((count, tail)) = split_token(s)
        else {
            return Err(Error::MissingWordCount);
        };

        // Zero or a negative count just means the size isn’t known
        let count = count.parse::<i64>()
            .map_err(|_| Error::InvalidWordCount(count.to_string()))?;

        // Line number of the count, where the tail starts
        let first_line = s[..s.len() - tail.len()].matches('\n').count() + 1;
        let mut words = Vec::with_capacity(count.clamp(0, 1 << 16) as usize);

        for (line_num, line) in tail.lines().enumerate() {
            let word = line.trim();

            if word.is_empty() {
                continue;
            }

            if word.contains('\0') {
                return Err(Error::InvalidWord(first_line + line_num));
            }

            words.push(word.to_string());
        }

        if count > 0 && words.len() as i64 != count {
            warn!(
                "dictionary claims to have {} words but has {}",
                count,
                words.len(),
            );
        }

        Ok(Dictionary { words })
    }
}

/// Extracts the partial word, which is the first token of the text.
pub fn parse_partial_string(s: &str) -> Result<&str, Error> {
    split_token(s)
        .map(|(token, _)| token)
        .ok_or(Error::MissingPartialString)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        let dictionary = "3\ncat\ncar\ncot\n".parse::<Dictionary>().unwrap();
        assert_eq!(&dictionary.words, &["cat", "car", "cot"]);

        let dictionary = "  2  \n\n  apple pie \r\nzoo".parse::<Dictionary>()
            .unwrap();
        assert_eq!(&dictionary.words, &["apple pie", "zoo"]);

        // The count is only a hint
        let dictionary = "5\na\nb".parse::<Dictionary>().unwrap();
        assert_eq!(&dictionary.words, &["a", "b"]);

        let dictionary = "0".parse::<Dictionary>().unwrap();
        assert!(dictionary.words.is_empty());

        // A word after the count on the same line is still a word
        let dictionary = "1 cat".parse::<Dictionary>().unwrap();
        assert_eq!(&dictionary.words, &["cat"]);
    }

    #[test]
    fn parse_error() {
        assert_eq!(
            "".parse::<Dictionary>().unwrap_err(),
            Error::MissingWordCount,
        );
        assert_eq!(
            &" \n ".parse::<Dictionary>().unwrap_err().to_string(),
            "missing word count",
        );
        assert_eq!(
            "cat\ncar".parse::<Dictionary>().unwrap_err(),
            Error::InvalidWordCount("cat".to_string()),
        );
        assert_eq!(
            &"1.5\ncat".parse::<Dictionary>().unwrap_err().to_string(),
            "invalid word count “1.5”",
        );
    }

    #[test]
    fn unknown_count() {
        let dictionary = "-1\ncat\ndog".parse::<Dictionary>().unwrap();
        assert_eq!(&dictionary.words, &["cat", "dog"]);

        let dictionary = "0\ncat".parse::<Dictionary>().unwrap();
        assert_eq!(&dictionary.words, &["cat"]);
    }

    #[test]
    fn null_in_word() {
        assert_eq!(
            "1\na\0b\n".parse::<Dictionary>().unwrap_err(),
            Error::InvalidWord(2),
        );
        assert_eq!(
            "3\ncat\n\ncar\0\ncot".parse::<Dictionary>().unwrap_err(),
            Error::InvalidWord(4),
        );
        assert_eq!(
            &"2 a\0".parse::<Dictionary>().unwrap_err().to_string(),
            "line 1: word contains a null character",
        );
    }

    #[test]
    fn partial_string() {
        assert_eq!(parse_partial_string("ca"), Ok("ca"));
        assert_eq!(parse_partial_string("\n  car  t\n"), Ok("car"));
        assert_eq!(
            parse_partial_string(" \n"),
            Err(Error::MissingPartialString),
        );
        assert_eq!(
            &parse_partial_string("").unwrap_err().to_string(),
            "missing partial string",
        );
    }
}
