//! Shared nom parsers for whitespace delimited data files
//!
//! Numerical items in the FEFF and LOBSTER outputs do not need to be in the
//! columns implied by their fortran formats, only blank-delimited and in the
//! right order. Everything here therefore works on tokens rather than fixed
//! character offsets.

// crate modules
use crate::error::{Error, Result};

// nom parser combinators
use nom::character::complete::{digit1, space0};
use nom::multi::many1;
use nom::number::complete::double;
use nom::sequence::terminated;
use nom::IResult;

/// List of consecutive doubles as a vector of f64 values
pub fn vector_of_f64(i: &str) -> IResult<&str, Vec<f64>> {
    many1(terminated(double, space0))(i.trim_start())
}

/// Unsigned size value, trimming preceding whitespace
pub fn uint(i: &str) -> IResult<&str, usize> {
    let (i, value) = digit1(i.trim_start())?;
    let (_, v) = nom::character::complete::u64(value)?;
    Ok((i, v as usize))
}

/// Check for an empty line or a `#` comment line
///
/// ```rust
/// # use chemtools_utils::parsers::is_comment_or_blank;
/// assert!(is_comment_or_blank("# Fermi level (eV):   -11.537"));
/// assert!(is_comment_or_blank("   "));
/// assert!(!is_comment_or_blank("  -20.000  0.0  0.0"));
/// ```
pub fn is_comment_or_blank(i: &str) -> bool {
    let i = i.trim_start();
    i.is_empty() || i.starts_with('#')
}

/// Parse a complete data row into floats
///
/// Unlike [vector_of_f64] the whole line must be consumed, so a stray word in
/// a data table is an error rather than silently truncating the row.
///
/// ```rust
/// # use chemtools_utils::parsers::row_of_f64;
/// assert_eq!(row_of_f64(" -11.25  0.0  1.6 ").unwrap(), vec![-11.25, 0.0, 1.6]);
/// assert!(row_of_f64("1.0 2.0 abc").is_err());
/// assert!(row_of_f64("").is_err());
/// ```
pub fn row_of_f64(line: &str) -> Result<Vec<f64>> {
    match vector_of_f64(line) {
        Ok((rest, values)) if rest.trim().is_empty() => Ok(values),
        _ => Err(Error::TrailingCharacters {
            line: line.to_string(),
        }),
    }
}

/// Get the whitespace separated token at `index`
pub fn nth_token(line: &str, index: usize) -> Result<&str> {
    line.split_whitespace()
        .nth(index)
        .ok_or_else(|| Error::MissingToken {
            index,
            line: line.to_string(),
        })
}

/// Get the whitespace separated token at `index` as an f64
///
/// ```rust
/// # use chemtools_utils::parsers::nth_f64;
/// let line = "# Fermi level (eV):   -11.537";
/// assert_eq!(nth_f64(line, 4).unwrap(), -11.537);
/// assert!(nth_f64(line, 5).is_err());
/// assert!(nth_f64(line, 1).is_err());
/// ```
pub fn nth_f64(line: &str, index: usize) -> Result<f64> {
    let token = nth_token(line, index)?;
    token.parse::<f64>().map_err(|_| Error::InvalidNumber {
        token: token.to_string(),
    })
}

/// Get the whitespace separated token at `index` as a usize
pub fn nth_usize(line: &str, index: usize) -> Result<usize> {
    let token = nth_token(line, index)?;
    match uint(token) {
        Ok((rest, value)) if rest.is_empty() => Ok(value),
        _ => Err(Error::InvalidNumber {
            token: token.to_string(),
        }),
    }
}
