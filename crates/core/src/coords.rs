//! Coordinate triples typed or pasted as one piece of text.

use lazy_static::lazy_static;
use regex::Regex;

use crate::command::Triple;
use crate::error::{Error, Result};

lazy_static! {
    static ref TRIPLE: Regex = Regex::new(
        r"^\s*(-?\d+(?:\.\d+)?)(?:\s*,\s*|\s+)(-?\d+(?:\.\d+)?)(?:\s*,\s*|\s+)(-?\d+(?:\.\d+)?)"
    )
    .unwrap();
}

/// Reads the first three numbers of `0 0 0`, `0,0,0` or `0, 0, 0`.
///
/// Anything after the third number is ignored, so a pasted `12 64 -3 facing
/// north` still yields `12`, `64`, `-3`.
///
/// # Errors
///
/// Returns [`Error::InvalidTriple`] when the text does not start with three
/// numbers.
pub fn parse_triple(text: &str) -> Result<Triple<String>> {
    let captures = TRIPLE
        .captures(text)
        .ok_or_else(|| Error::InvalidTriple(text.to_string()))?;

    let group = |index: usize| {
        captures
            .get(index)
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| Error::InvalidTriple(text.to_string()))
    };

    Ok(Triple::new(group(1)?, group(2)?, group(3)?))
}
