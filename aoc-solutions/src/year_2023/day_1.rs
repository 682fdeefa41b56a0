//! Day 1: calibration values hidden in lines of text

use aoc_puzzle_io::{InputDir, InputError, aoc_example};

const DIGIT_WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Sum of first-digit/last-digit pairs, digits only
#[aoc_example(day = 1, expected = 142)]
pub fn part1(lines: Vec<String>) -> u32 {
    lines
        .iter()
        .map(|line| calibration(line, |rest| digit_at(rest, false)))
        .sum()
}

/// Same as part 1, but spelled-out digits count too
#[aoc_example(day = "1_2", expected = 281)]
pub fn part2(lines: Vec<String>) -> u32 {
    lines
        .iter()
        .map(|line| calibration(line, |rest| digit_at(rest, true)))
        .sum()
}

/// Solve both parts on the full puzzle input in `dir`
pub fn solve(dir: &InputDir) -> Result<(u32, u32), InputError> {
    let lines = dir.read_puzzle_input(1)?;
    Ok((part1(lines.clone()), part2(lines)))
}

/// Two-digit value from the first and last digit found in `line`
///
/// Words may overlap (`eightwo` yields 8 then 2), so every offset is probed.
fn calibration(line: &str, digit: impl Fn(&str) -> Option<u32>) -> u32 {
    let mut digits = line
        .char_indices()
        .filter_map(|(i, _)| digit(&line[i..]));

    match digits.next() {
        Some(first) => first * 10 + digits.last().unwrap_or(first),
        None => 0,
    }
}

fn digit_at(rest: &str, words: bool) -> Option<u32> {
    if let Some(d) = rest.chars().next().and_then(|c| c.to_digit(10)) {
        return Some(d);
    }
    if !words {
        return None;
    }
    DIGIT_WORDS
        .iter()
        .position(|w| rest.starts_with(w))
        .map(|i| i as u32 + 1)
}
