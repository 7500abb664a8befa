//! Type-safe wrappers for hash outputs
//!
//! Provides the fixed-size [`Digest`] type together with the comparison
//! traits digests are expected to support.

// Submodules
pub mod digest;

// Re-export main types
pub use digest::Digest;

/// Trait for cryptographic types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}
