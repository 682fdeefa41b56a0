//! Location of puzzle inputs and example fixtures

use crate::day::Day;
use crate::error::{ExampleError, InputError};
use crate::reader::read_lines;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory used when nothing else is configured
pub const DEFAULT_INPUT_DIR: &str = "input";

/// Environment variable consulted by [`InputDir::from_env`]
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";

/// Directory holding puzzle inputs and their example fixtures
///
/// Directory structure:
/// - `{base}/day_{day}.txt` for the full puzzle input
/// - `{base}/day_{day}_example.txt` for the known-answer example
///
/// Paths are built by formatting only; nothing is checked for existence
/// until a read is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDir {
    base: PathBuf,
}

impl Default for InputDir {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_DIR)
    }
}

impl InputDir {
    /// Create an input directory rooted at `base`
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Resolve the base directory from `AOC_INPUT_DIR`, falling back to `input`
    ///
    /// A leading `~` is expanded to the user's home directory.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(INPUT_DIR_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Self::new(expand_tilde(&v)),
            _ => Self::default(),
        }
    }

    /// The configured base directory
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path of the full puzzle input for `day`
    pub fn puzzle_path(&self, day: impl Into<Day>) -> PathBuf {
        self.base.join(format!("day_{}.txt", day.into()))
    }

    /// Path of the example fixture for `day`
    pub fn example_path(&self, day: impl Into<Day>) -> PathBuf {
        self.base.join(format!("day_{}_example.txt", day.into()))
    }

    /// Read the full puzzle input for `day`
    pub fn read_puzzle_input(&self, day: impl Into<Day>) -> Result<Vec<String>, InputError> {
        read_lines(self.puzzle_path(day))
    }

    /// Read the example fixture for `day`
    pub fn read_example(&self, day: impl Into<Day>) -> Result<Vec<String>, InputError> {
        read_lines(self.example_path(day))
    }

    /// Run `solution` once on the example for `day` and compare with `expected`
    ///
    /// The solution is not invoked when the example cannot be read. A panic
    /// inside the solution unwinds to the caller untouched.
    ///
    /// # Errors
    /// * `ExampleError::Input` - the example file is missing or unreadable
    /// * `ExampleError::AssertionFailure` - result differs from `expected`
    pub fn run_and_assert<T, F>(
        &self,
        day: impl Into<Day>,
        solution: F,
        expected: T,
    ) -> Result<(), ExampleError>
    where
        F: FnOnce(Vec<String>) -> T,
        T: PartialEq + Display,
    {
        let day = day.into();
        let lines = self.read_example(&day)?;
        let actual = solution(lines);

        if actual == expected {
            debug!(%day, "example matched");
            Ok(())
        } else {
            debug!(%day, %expected, %actual, "example mismatch");
            Err(ExampleError::mismatch(&expected, &actual))
        }
    }

    /// Like [`InputDir::run_and_assert`], but panics with the error message
    ///
    /// Intended for `#[test]` bodies.
    #[track_caller]
    pub fn assert_example<T, F>(&self, day: impl Into<Day>, solution: F, expected: T)
    where
        F: FnOnce(Vec<String>) -> T,
        T: PartialEq + Display,
    {
        if let Err(e) = self.run_and_assert(day, solution, expected) {
            panic!("{}", e);
        }
    }
}

/// Replace a leading `~` component with the home directory
fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(path),
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}
