//! `#[aoc_example]` with an explicit fixture directory

use aoc_puzzle_io::{InputDir, aoc_example};

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

#[aoc_example(day = "words", expected = 3, dir = FIXTURES)]
fn word_count(lines: Vec<String>) -> usize {
    lines.iter().flat_map(|l| l.split_whitespace()).count()
}

#[aoc_example(
    day = "words",
    expected = "alpha beta||gamma".to_string(),
    dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"),
    name = raw_lines_example
)]
fn raw_lines(lines: Vec<String>) -> String {
    lines.join("|")
}

#[test]
fn test_fixture_matches_direct_read() {
    let lines = InputDir::new(FIXTURES).read_example("words").unwrap();
    assert_eq!(word_count(lines.clone()), 3);
    assert_eq!(raw_lines(lines.clone()), lines.join("|"));
}

#[test]
#[should_panic(expected = "File not found")]
fn test_missing_fixture_panics() {
    InputDir::new(FIXTURES).assert_example("absent", word_count, 0);
}
