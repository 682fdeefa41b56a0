//! Line-oriented reading of puzzle text files

use crate::error::InputError;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Read a text file into one `String` per line
///
/// `\n`, `\r\n` and a lone `\r` all end a line and are removed; every other
/// character, including surrounding spaces, is kept. A terminator at the very
/// end of the file does not start an extra empty line. The file handle is
/// closed before returning, on success or error.
///
/// # Errors
/// * `InputError::NotFound` - nothing exists at `path`
/// * `InputError::Io` - any other failure (permissions, invalid UTF-8, ...)
///
/// # Example
///
/// ```no_run
/// let lines = aoc_puzzle_io::read_lines("input/day_1.txt")?;
/// println!("{} lines", lines.len());
/// # Ok::<(), aoc_puzzle_io::InputError>(())
/// ```
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => InputError::NotFound {
            path: path.to_path_buf(),
        },
        _ => InputError::Io(e),
    })?;

    let mut content = String::new();
    BufReader::new(file).read_to_string(&mut content)?;
    let lines = split_lines(&content);

    debug!(path = %path.display(), lines = lines.len(), "read input file");
    Ok(lines)
}

fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(end) => {
                lines.push(rest[..end].to_owned());
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest.to_owned());
                break;
            }
        }
    }
    lines
}
