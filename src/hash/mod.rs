//! Hash function implementations
//!
//! This module contains the streaming SHA-2 hashers together with the traits
//! describing their algorithm parameters and incremental interface.

use subtle::ConstantTimeEq as SubtleCtEq;

use crate::error::Result;

pub mod sha2;

// Re-exports
pub use sha2::{Sha224, Sha256};

/// Compile-time parameters of a hash algorithm
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;
    /// Block size in bytes processed by one compression
    const BLOCK_SIZE: usize;
    /// Canonical algorithm name
    const ALGORITHM_ID: &'static str;
}

/// Trait for incremental cryptographic hash functions
///
/// A hasher is created with [`new`](HashFunction::new), absorbs the message
/// through any number of [`update`](HashFunction::update) calls (bytes are
/// logically concatenated in call order, independent of chunking), and
/// produces its digest exactly once with [`finalize`](HashFunction::finalize).
/// After finalization the state is wiped; further calls fail with
/// [`Error::AlreadyFinalized`](crate::Error::AlreadyFinalized), and a fresh
/// hasher must be created to hash another message.
pub trait HashFunction: Sized {
    /// Marker type carrying the algorithm parameters
    type Algorithm: HashAlgorithm;
    /// Digest type produced on finalization
    type Output: AsRef<[u8]>;

    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Updates the hash function state with new data
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Finalizes the hash computation and returns the digest
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Returns the block size of the hash function in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the hash function
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Hash `data` and compare the digest against `expected` in constant time
    fn verify(data: &[u8], expected: &[u8]) -> Result<bool> {
        let digest = Self::digest(data)?;
        Ok(bool::from(digest.as_ref().ct_eq(expected)))
    }
}
