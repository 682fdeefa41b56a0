//! Advent of Code puzzle solutions
//!
//! Each day exposes one function per part taking the input lines. Every part
//! is checked against its published example through `aoc_puzzle_io` before
//! it is run on the real input in `input/`.

pub mod year_2023;
