//! Error handling for the hash engine
//!
//! The algorithm itself is total over byte-sequence inputs; every error in
//! this crate is a contract violation surfaced to the caller immediately
//! rather than silently recovered.

use core::fmt;

/// The error type for hash operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Operation on a hasher that has already produced its digest
    AlreadyFinalized {
        /// Algorithm whose state was misused
        algorithm: &'static str,
    },

    /// Total message length exceeds what the 64-bit bit-length field can encode
    InputTooLarge {
        /// Algorithm that rejected the input
        algorithm: &'static str,
        /// Maximum message length in bytes
        max_bytes: u64,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for hash operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::AlreadyFinalized { algorithm } => {
                write!(f, "{} state already finalized", algorithm)
            }
            Error::InputTooLarge {
                algorithm,
                max_bytes,
            } => {
                write!(
                    f,
                    "{} message exceeds maximum length of {} bytes",
                    algorithm, max_bytes
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
