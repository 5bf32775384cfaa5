//! Result and Error types for chemtools-lobster

/// Type alias for Result<T, lobster::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `chemtools-lobster` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed to (de)serialise")]
    FailedSerde(#[from] serde_json::Error),

    #[error("failed to read value: {0}")]
    FailedValue(#[from] chemtools_utils::Error),

    #[error(transparent)]
    Electronic(#[from] chemtools_electronic::Error),

    #[error("parser failed: {0}")]
    ParseError(String),

    #[error("unexpected end of file")]
    EndOfFile,

    #[error("missing header line {line} in {file}")]
    MissingHeader { file: String, line: usize },

    #[error("invalid bond label \"{0}\"")]
    InvalidBondLabel(String),

    #[error("expected 1 or 2 spin channels, found {0}")]
    UnexpectedSpinChannels(usize),

    #[error("unexpected number of columns on data line {line} (expected {expected}, found {found})")]
    UnexpectedColumns {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("inconsistent number of values in {context} (expected {expected}, found {found})")]
    UnexpectedLength {
        context: String,
        expected: usize,
        found: usize,
    },

    #[error("total dos has {0} columns, expected 3 (non-spin) or 5 (spin polarised)")]
    UnknownSpinPolarization(usize),

    #[error("no data rows found in {0}")]
    NoData(String),
}

// this should really implement nom::error::ParseError<&str> for Error
impl From<nom::Err<nom::error::Error<&str>>> for Error {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Self {
        Self::ParseError(format!("{err:?}"))
    }
}
