//! File format for set families, ported from the reference driver's two-pass reader.
//!
//! A file is a whitespace-separated stream of integers. Each non-negative integer is
//! a ground-set member of the set currently being read; any negative integer ends the
//! current set (and is dropped if it doesn't terminate a non-empty one). The ground
//! set size is inferred as one more than the largest member seen anywhere in the file.

use std::fmt;
use std::fs;
use std::path::Path;

use setfamily::{Family, FamilyError};

#[derive(Debug)]
pub enum ParseError {
    Io(std::io::Error),
    Token { token: String },
    Family(FamilyError),
    Empty,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(e) => write!(f, "could not read family file: {e}"),
            ParseError::Token { token } => write!(f, "not an integer: {token:?}"),
            ParseError::Family(e) => write!(f, "{e}"),
            ParseError::Empty => write!(f, "family file contains no sets"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            ParseError::Family(e) => Some(e),
            ParseError::Token { .. } | ParseError::Empty => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::Io(e)
    }
}

impl From<FamilyError> for ParseError {
    fn from(e: FamilyError) -> Self {
        ParseError::Family(e)
    }
}

/// Reads a set family from `path`.
///
/// First pass over the tokens just determines the ground set size (one more than the
/// largest member appearing anywhere); the second builds the family, flushing the
/// current set whenever a negative token is seen and again at end of input, in case
/// the file's last set isn't terminated by a trailing separator.
pub fn read_family(path: &Path) -> Result<Family, ParseError> {
    let contents = fs::read_to_string(path)?;

    let mut tokens = Vec::new();
    for raw in contents.split_whitespace() {
        let value: i64 = raw.parse().map_err(|_| ParseError::Token { token: raw.to_owned() })?;
        tokens.push(value);
    }

    let grnd_size = tokens.iter().filter(|&&v| v >= 0).map(|&v| v as usize + 1).max().unwrap_or(0);
    let mut family = Family::new(grnd_size);

    let mut current: Vec<usize> = Vec::new();
    for &value in &tokens {
        if value >= 0 {
            current.push(value as usize);
        } else if !current.is_empty() {
            family.add_set(&current)?;
            current.clear();
        }
    }
    if !current.is_empty() {
        family.add_set(&current)?;
    }

    if family.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(family)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("overlap-graph-cli-test-{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_sets_separated_by_negative_sentinels() {
        let path = write_temp("0 1 2 -1 1 2 3 -1\n");
        let family = read_family(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(family.len(), 2);
        assert_eq!(family.grnd_size(), 4);
    }

    #[test]
    fn flushes_a_trailing_set_with_no_terminating_sentinel() {
        let path = write_temp("0 1 -1 2 3");
        let family = read_family(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(family.len(), 2);
    }

    #[test]
    fn rejects_non_integer_tokens() {
        let path = write_temp("0 1 banana -1");
        let result = read_family(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ParseError::Token { .. })));
    }

    #[test]
    fn empty_file_is_an_error() {
        let path = write_temp("");
        let result = read_family(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ParseError::Empty)));
    }
}
