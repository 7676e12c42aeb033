//! Traits for byte serialization of ring-signature types.

use crate::Result;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// A trait for public types that can be serialized to and from bytes.
///
/// Implementations must be canonical: equal values encode to equal bytes,
/// and `from_bytes(to_bytes(x)) == x` for every valid `x`. Secret types
/// deliberately do not implement this trait; key material never leaves the
/// signer's process through this library.
pub trait Serialize: Sized {
    /// Creates an object from a byte slice.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the object to a byte vector.
    fn to_bytes(&self) -> Vec<u8>;
}
