//! Incremental SHA-256 and SHA-224 digest engine
//!
//! This crate implements the SHA-256 family of cryptographic hash functions
//! as specified in FIPS PUB 180-3, exposed as streaming hashers: the message
//! is fed in arbitrary-sized chunks through [`HashFunction::update`] and the
//! digest is retrieved once with [`HashFunction::finalize`]. The library is
//! designed to be usable in both `std` and `no_std` environments.
//!
//! # Security Features
//!
//! - Hash state and message schedule are zeroized after finalization and on drop
//! - Constant-time digest comparison via [`HashFunction::verify`]
//! - Misuse of a finalized hasher is rejected with an explicit error
//!
//! # Example
//!
//! ```
//! use sha2_stream::{HashFunction, Sha256};
//!
//! let mut hasher = Sha256::new();
//! hasher.update(b"ab")?.update(b"c")?;
//! let digest = hasher.finalize()?;
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! # Ok::<(), sha2_stream::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{HashAlgorithm, HashFunction, Sha224, Sha256};

// Type system
pub mod types;
pub use types::{ConstantTimeEq, Digest};
