//! Type-safe digest implementation with size guarantees
//!
//! Provides the `Digest` type, representing the output of a
//! cryptographic hash function with compile-time size guarantees.

use core::fmt;
use core::ops::Deref;

#[cfg(feature = "alloc")]
use alloc::string::String;

use subtle::ConstantTimeEq as SubtleCtEq;
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};
use crate::types::ConstantTimeEq;

/// A cryptographic digest with a fixed size
#[derive(Clone, Zeroize)]
pub struct Digest<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Digest<N> {
    /// Create a new digest from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Digest::from_slice", slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Get the length of the digest in bytes
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the digest is empty
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Convert to a hexadecimal string
    #[cfg(feature = "alloc")]
    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }

    /// Create from a hexadecimal string
    #[cfg(feature = "alloc")]
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)
            .map_err(|_| Error::param("hex_str", "Invalid hexadecimal string"))?;

        Self::from_slice(&bytes)
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Digest<N> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> From<Digest<N>> for [u8; N] {
    fn from(digest: Digest<N>) -> Self {
        digest.data
    }
}

impl<const N: usize> PartialEq for Digest<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<const N: usize> Eq for Digest<N> {}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>(", N)?;
        for byte in &self.data {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.data {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl<const N: usize> ConstantTimeEq for Digest<N> {
    fn ct_eq(&self, other: &Self) -> bool {
        bool::from(self.data[..].ct_eq(&other.data[..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_length_check() {
        let bytes = [0xabu8; 32];
        let digest = Digest::<32>::from_slice(&bytes).unwrap();
        assert_eq!(digest.as_ref(), &bytes);

        let err = Digest::<32>::from_slice(&bytes[..28]).unwrap_err();
        match err {
            Error::Length {
                expected, actual, ..
            } => {
                assert_eq!(expected, 32);
                assert_eq!(actual, 28);
            }
            _ => panic!("Expected Length error"),
        }
    }

    #[test]
    fn test_hex_round_trip() {
        let digest = Digest::new([0x01u8, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]);
        assert_eq!(digest.to_hex(), "0123456789abcdef");
        assert_eq!(format!("{}", digest), "0123456789abcdef");

        let parsed = Digest::<8>::from_hex("0123456789abcdef").unwrap();
        assert_eq!(parsed, digest);

        assert!(Digest::<8>::from_hex("not hex!").is_err());
        assert!(Digest::<8>::from_hex("0123").is_err());
    }

    #[test]
    fn test_constant_time_eq() {
        let a = Digest::new([0x55u8; 28]);
        let b = Digest::new([0x55u8; 28]);
        let c = Digest::new([0x56u8; 28]);

        assert!(ConstantTimeEq::ct_eq(&a, &b));
        assert!(!ConstantTimeEq::ct_eq(&a, &c));
    }
}
