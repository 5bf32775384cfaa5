//! Result and Error types for chemtools-feff

/// Type alias for Result<T, feff::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `chemtools-feff` crate
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

    #[error("no {0} card found in feff.inp")]
    MissingCard(String),

    #[error("no absorbing atom (ipot 0) in the POTENTIALS card")]
    MissingAbsorber,

    #[error("no potential {0} listed in the POTENTIALS card")]
    MissingPotential(usize),

    #[error("species \"{0}\" has no matching potential")]
    UnknownSpecies(String),

    #[error("header declares {expected} sites but lists {found}")]
    UnexpectedSiteCount { expected: usize, found: usize },

    #[error("{file} ends before line {line} of the header")]
    TruncatedHeader { file: String, line: usize },

    #[error("unexpected number of columns on data line {line} (expected {expected}, found {found})")]
    UnexpectedColumns {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("inconsistent number of energy points in {context} (expected {expected}, found {found})")]
    UnexpectedLength {
        context: String,
        expected: usize,
        found: usize,
    },

    #[error("no data rows found in {0}")]
    NoData(String),
}

// this should really implement nom::error::ParseError<&str> for Error
impl From<nom::Err<nom::error::Error<&str>>> for Error {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Self {
        Self::ParseError(format!("{err:?}"))
    }
}
