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

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use clap::{Parser, ValueEnum};
use log::info;
use wordboggle::grid::Grid;
use wordboggle::adjacency::Adjacency;
use wordboggle::problem::{self, Dictionary};
use wordboggle::route_finder::RouteFinder;
use wordboggle::{FollowLetter, Mode, Solution};

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Find every word of the dictionary
    Exhaustive,
    /// Find the letters that can follow the partial word
    Prefix,
    /// Only use words that don’t repeat a letter
    Unique,
}

#[derive(Parser)]
#[command(name = "Solve")]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    dictionary: OsString,
    #[arg(short, long, value_name = "FILE")]
    board: OsString,
    #[arg(short, long, value_enum, default_value_t = ModeArg::Exhaustive)]
    mode: ModeArg,
    #[arg(
        short,
        long,
        value_name = "FILE",
        required_if_eq("mode", "prefix")
    )]
    partial: Option<OsString>,
    #[arg(short, long, value_name = "FILE")]
    output: Option<OsString>,
    #[arg(short, long, conflicts_with_all = ["human_readable", "routes"])]
    json: bool,
    #[arg(short, long, conflicts_with = "human_readable")]
    routes: bool,
    #[arg(short = 'H', long)]
    human_readable: bool,
}

fn read_input<T, E, F>(filename: &OsStr, parse: F) -> Result<T, String>
    where F: FnOnce(&str) -> Result<T, E>,
          E: fmt::Display
{
    let name = filename.to_string_lossy();

    let contents = std::fs::read_to_string(filename)
        .map_err(|e| format!("{}: {}", name, e))?;

    parse(&contents).map_err(|e| format!("{}: {}", name, e))
}

fn write_words<W: Write>(
    out: &mut W,
    grid: &Grid,
    solution: &Solution,
    routes: bool,
) -> io::Result<()> {
    let adjacency = Adjacency::new(grid.dimension());
    let mut finder = RouteFinder::new(grid, &adjacency);

    for word in solution.found_words.iter() {
        write!(out, "{}", word)?;

        if routes {
            for &tile in finder.find(word).unwrap_or_default() {
                let (x, y) = grid.position(tile as usize);
                write!(out, " {},{}", x, y)?;
            }
        }

        writeln!(out)?;
    }

    Ok(())
}

fn write_follow_letters<W: Write>(
    out: &mut W,
    solution: &Solution,
) -> io::Result<()> {
    for letter in solution.follow_letters.iter() {
        writeln!(out, "{}", letter)?;
    }

    Ok(())
}

const LINE_WIDTH: usize = 80;

/// Writes the words separated by spaces, starting a new line instead
/// of the space whenever the next word would go past `line_width`. A
/// word longer than the line is still written whole.
fn write_wrapped<W: Write>(
    out: &mut W,
    words: &[&str],
    line_width: usize,
) -> io::Result<()> {
    let mut column = 0;

    for word in words {
        if column > 0 {
            if column + 1 + word.len() > line_width {
                writeln!(out)?;
                column = 0;
            } else {
                write!(out, " ")?;
                column += 1;
            }
        }

        write!(out, "{}", word)?;
        column += word.len();
    }

    writeln!(out)
}

fn write_human_readable<W: Write>(
    out: &mut W,
    grid: &Grid,
    mode: Mode,
    solution: &Solution,
) -> io::Result<()> {
    write!(out, "{}", grid)?;

    let mut by_length = BTreeMap::<usize, Vec<&str>>::new();

    for word in solution.found_words.iter() {
        by_length.entry(word.len()).or_default().push(word);
    }

    for (length, words) in by_length {
        writeln!(out, "\n{} letters\n", length)?;
        write_wrapped(out, &words, LINE_WIDTH)?;
    }

    if let Mode::PrefixCompletion(partial) = mode {
        writeln!(out, "\nFollow letters for “{}”\n", partial)?;

        for letter in solution.follow_letters.iter() {
            match letter {
                FollowLetter::Letter(ch) => {
                    writeln!(out, "{}{}", partial, ch)?
                },
                FollowLetter::Blank => {
                    writeln!(out, "{} (end)", partial)?
                },
            }
        }
    }

    Ok(())
}

fn write_solution<W: Write>(
    mut out: W,
    cli: &Cli,
    grid: &Grid,
    mode: Mode,
    solution: &Solution,
) -> io::Result<()> {
    if cli.json {
        serde_json::to_writer_pretty(&mut out, solution)?;
        writeln!(out)?;
    } else if cli.human_readable {
        write_human_readable(&mut out, grid, mode, solution)?;
    } else {
        match mode {
            Mode::Exhaustive | Mode::UniqueLetters => {
                write_words(&mut out, grid, solution, cli.routes)?;
            },
            Mode::PrefixCompletion(_) => {
                write_follow_letters(&mut out, solution)?;
            },
        }
    }

    out.flush()
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let dictionary = match read_input(&cli.dictionary, str::parse::<Dictionary>) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    let grid = match read_input(&cli.board, Grid::new) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    let partial = match cli.partial.as_ref() {
        Some(filename) if cli.mode == ModeArg::Prefix => {
            match read_input(filename, |s| {
                problem::parse_partial_string(s).map(str::to_string)
            }) {
                Ok(p) => Some(p),
                Err(e) => {
                    eprintln!("{}", e);
                    return ExitCode::FAILURE;
                },
            }
        },
        _ => None,
    };

    let mode = match (cli.mode, partial.as_deref()) {
        (ModeArg::Prefix, Some(partial)) => Mode::PrefixCompletion(partial),
        (ModeArg::Unique, _) => Mode::UniqueLetters,
        _ => Mode::Exhaustive,
    };

    info!(
        "solving {}×{} board with {} words",
        grid.dimension(),
        grid.dimension(),
        dictionary.words.len(),
    );

    let solution = wordboggle::solve(mode, &dictionary.words, &grid);

    let result = match cli.output.as_ref() {
        Some(filename) => match File::create(filename) {
            Ok(file) => write_solution(
                BufWriter::new(file),
                &cli,
                &grid,
                mode,
                &solution,
            ),
            Err(e) => {
                eprintln!("{}: {}", filename.to_string_lossy(), e);
                return ExitCode::FAILURE;
            },
        },
        None => write_solution(
            BufWriter::new(io::stdout().lock()),
            &cli,
            &grid,
            mode,
            &solution,
        ),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
