//! Error types for the crate.
//!
//! Backend implementations (blstrs, the in-crate test group) report
//! [`BackendError`]s; the sharing API wraps them in [`Error`], which also
//! carries the domain and decoding failures of the VSS primitives.
//!
//! A share that fails verification is *not* an error: it is reported as
//! [`Verification::Invalid`](crate::Verification::Invalid) so the caller can
//! raise a complaint.
//!
//! # Examples
//!
//! ```rust
//! use feldman_vss::{Error, ShareIndex};
//!
//! let err = ShareIndex::new(256).unwrap_err();
//! assert!(err.is_domain());
//! assert!(matches!(err, Error::IndexOutOfRange(256)));
//! ```

use thiserror::Error;

/// Errors bubbled up from backend implementations.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("serialization failure: {0}")]
    Serialization(&'static str),
    #[error("math error: {0}")]
    Math(&'static str),
    #[error("{0}")]
    Other(String),
}

/// High-level errors returned by the secret sharing API.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
    #[error("share index {0} outside [1, 255]")]
    IndexOutOfRange(u32),
    #[error("threshold {0} outside [1, 255]")]
    ThresholdOutOfRange(usize),
    #[error("vector of {0} elements exceeds the 255 element limit")]
    CountOutOfRange(usize),
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("element {position} failed to decode: {source}")]
    Decoding {
        position: usize,
        #[source]
        source: BackendError,
    },
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("insufficient shares: required {required}, provided {provided}")]
    NotEnoughShares { required: usize, provided: usize },
}

impl Error {
    /// Returns `true` for errors raised before any arithmetic because an
    /// index, threshold or length fell outside its domain.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Error::IndexOutOfRange(_)
                | Error::ThresholdOutOfRange(_)
                | Error::CountOutOfRange(_)
                | Error::LengthMismatch { .. }
        )
    }

    /// Returns `true` when a byte encoding did not decode to a valid element.
    pub fn is_decoding(&self) -> bool {
        matches!(self, Error::Decoding { .. })
    }
}
