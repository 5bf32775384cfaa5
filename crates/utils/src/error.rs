//! Result and Error types for the utils module

/// Type alias for `Result<T, utils::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, PartialEq)]
/// The error type for `chemtools_utils`
pub enum Error {
    /// Fewer whitespace separated tokens on a line than required
    MissingToken { index: usize, line: String },

    /// A token expected to be numeric could not be converted
    InvalidNumber { token: String },

    /// Something other than numbers was left over on a data row
    TrailingCharacters { line: String },
}

// error boilerplate
impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

// implement standard error trait to use with ? operator
impl std::error::Error for Error {}
