//! Advent of Code Puzzle I/O
//!
//! Small helpers for the two chores every puzzle needs: reading the input file
//! line by line, and checking a solution against the known answer of the
//! worked example before trusting it on the real input.
//!
//! # Overview
//!
//! This library provides:
//! - [`read_lines`] for any text file
//! - [`read_puzzle_input`] for `input/day_<day>.txt`
//! - [`run_and_assert`] / [`assert_example`] for `input/day_<day>_example.txt`
//! - [`InputDir`] when the inputs live somewhere other than `./input`
//!
//! # Quick Example
//!
//! ```no_run
//! use aoc_puzzle_io::{read_puzzle_input, run_and_assert, ExampleError};
//!
//! fn part1(lines: Vec<String>) -> u32 {
//!     lines.iter().filter_map(|l| l.parse::<u32>().ok()).sum()
//! }
//!
//! fn main() -> Result<(), ExampleError> {
//!     run_and_assert(1, part1, 142)?;
//!     println!("{}", part1(read_puzzle_input(1)?));
//!     Ok(())
//! }
//! ```
//!
//! # Day labels
//!
//! Days are usually plain integers, but any string works too, which is handy
//! when part 2 ships its own example: `run_and_assert("1_2", part2, 281)`
//! reads `input/day_1_2_example.txt`.
//!
//! # Errors
//!
//! A missing file is always [`InputError::NotFound`] carrying the path that was
//! tried. A wrong answer is [`ExampleError::AssertionFailure`], displayed as
//! `Expected: <expected>, Got: <actual>`. Panics inside a solution are not
//! caught.

mod day;
mod error;
mod input_dir;
mod reader;

// Re-export public API
pub use day::Day;
pub use error::{ExampleError, InputError};
pub use input_dir::{DEFAULT_INPUT_DIR, INPUT_DIR_ENV, InputDir};
pub use reader::read_lines;

use std::fmt::Display;

/// Read `input/day_<day>.txt` relative to the working directory
///
/// Use [`InputDir::read_puzzle_input`] for any other location.
pub fn read_puzzle_input(day: impl Into<Day>) -> Result<Vec<String>, InputError> {
    InputDir::default().read_puzzle_input(day)
}

/// Check `solution` against `input/day_<day>_example.txt`
///
/// See [`InputDir::run_and_assert`].
pub fn run_and_assert<T, F>(
    day: impl Into<Day>,
    solution: F,
    expected: T,
) -> Result<(), ExampleError>
where
    F: FnOnce(Vec<String>) -> T,
    T: PartialEq + Display,
{
    InputDir::default().run_and_assert(day, solution, expected)
}

/// Panicking form of [`run_and_assert`] for use inside `#[test]` functions
#[track_caller]
pub fn assert_example<T, F>(day: impl Into<Day>, solution: F, expected: T)
where
    F: FnOnce(Vec<String>) -> T,
    T: PartialEq + Display,
{
    InputDir::default().assert_example(day, solution, expected)
}

// Re-export the attribute macro
pub use aoc_puzzle_io_macros::aoc_example;
