//! Result and Error types for chemtools-electronic

/// Type alias for Result<T, electronic::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `chemtools-electronic` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed to (de)serialise")]
    FailedSerde(#[from] serde_json::Error),

    #[error("unknown orbital label \"{0}\"")]
    UnknownOrbital(String),

    #[error("unknown orbital type \"{0}\"")]
    UnknownOrbitalType(String),

    #[error("inconsistent number of density values for {context} (expected {expected}, found {found})")]
    InconsistentLength {
        context: String,
        expected: usize,
        found: usize,
    },

    #[error("site index {index} out of range for {n_sites} sites")]
    SiteOutOfRange { index: usize, n_sites: usize },

    #[error("number of sites provided does not match the projections (expected {expected}, found {found})")]
    SiteCountMismatch { expected: usize, found: usize },
}
