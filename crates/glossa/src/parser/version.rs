//! Semantic version grammar: `major.minor.patch`.

use winnow::ascii::dec_uint;
use winnow::prelude::*;

use super::error::ParseError;
use crate::types::Version;

fn version(input: &mut &str) -> ModalResult<Version> {
    (dec_uint, '.', dec_uint, '.', dec_uint)
        .map(|(major, _, minor, _, patch)| Version {
            major,
            minor,
            patch,
        })
        .parse_next(input)
}

/// Parse a `major.minor.patch` version string.
///
/// ```
/// use glossa::parser::parse_version;
///
/// let v = parse_version("2.1.3").unwrap();
/// assert_eq!((v.major, v.minor, v.patch), (2, 1, 3));
/// assert!(parse_version("2.1").is_err());
/// ```
pub fn parse_version(input: &str) -> Result<Version, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut remaining = input;
    match version.parse_next(&mut remaining) {
        Ok(v) if remaining.is_empty() => Ok(v),
        Ok(_) => Err(ParseError::at(
            input,
            remaining,
            "unexpected trailing characters after version",
        )),
        Err(_) => Err(ParseError::at(
            input,
            remaining,
            "expected a version of the form major.minor.patch",
        )),
    }
}
