//! Core types shared across the sshring workspace
//!
//! This module provides the algorithm classification, the verification
//! report returned for untrusted signature blobs, and a fixed-size secret
//! buffer with guaranteed zeroization.

use core::fmt;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{Error, Result};

/// Key algorithms recognized in SSH public key material.
///
/// Only Ed25519 keys can participate in signing and verification; the other
/// variants exist so that callers get a precise `MixedAlgorithms` or
/// `UnsupportedAlgorithm` error instead of a generic parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyAlgorithm {
    /// `ssh-ed25519`
    Ed25519,
    /// `ecdsa-sha2-nistp256`
    EcdsaP256,
    /// `ssh-rsa`
    Rsa,
}

impl KeyAlgorithm {
    /// The SSH wire name of this algorithm
    pub fn ssh_name(&self) -> &'static str {
        match self {
            Self::Ed25519 => "ssh-ed25519",
            Self::EcdsaP256 => "ecdsa-sha2-nistp256",
            Self::Rsa => "ssh-rsa",
        }
    }

    /// Classify an SSH wire name
    pub fn from_ssh_name(name: &str) -> Result<Self> {
        match name {
            "ssh-ed25519" => Ok(Self::Ed25519),
            "ecdsa-sha2-nistp256" => Ok(Self::EcdsaP256),
            "ssh-rsa" => Ok(Self::Rsa),
            _ => Err(Error::UnsupportedAlgorithm {
                context: "KeyAlgorithm::from_ssh_name",
                #[cfg(feature = "std")]
                message: format!("unrecognized key type {:?}", name),
            }),
        }
    }

    /// Whether this algorithm can produce and verify ring signatures
    pub fn is_signable(&self) -> bool {
        matches!(self, Self::Ed25519)
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ssh_name())
    }
}

/// Outcome of verifying an untrusted signature blob.
///
/// Verification never surfaces adversarial input as `Err`; every outcome is
/// data, and a blob off the network lands in exactly one of these buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerificationOutcome {
    /// The signature verifies against the supplied ring
    Valid,
    /// Structurally sound but cryptographically wrong
    Invalid,
    /// The bytes do not decode as a signature
    Malformed,
    /// The blob names an algorithm this build cannot verify
    UnsupportedAlgorithm,
}

/// Verdict for one verification call.
///
/// Created fresh per call and never cached across differing inputs. On
/// `Valid`, `key_image` carries the signer's linkage tag so storage can
/// index it for double-signing detection; it identifies a key, never a
/// ring position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VerificationReport {
    /// The verdict
    pub outcome: VerificationOutcome,
    /// Human-readable cause for non-valid outcomes
    pub reason: Option<&'static str>,
    /// Linkage tag, present only when `outcome` is `Valid`
    pub key_image: Option<[u8; 32]>,
}

impl VerificationReport {
    /// A valid verdict carrying the signature's linkage tag
    pub fn valid(key_image: [u8; 32]) -> Self {
        Self {
            outcome: VerificationOutcome::Valid,
            reason: None,
            key_image: Some(key_image),
        }
    }

    /// An invalid verdict with a cause
    pub fn invalid(reason: &'static str) -> Self {
        Self {
            outcome: VerificationOutcome::Invalid,
            reason: Some(reason),
            key_image: None,
        }
    }

    /// A malformed-input verdict with a cause
    pub fn malformed(reason: &'static str) -> Self {
        Self {
            outcome: VerificationOutcome::Malformed,
            reason: Some(reason),
            key_image: None,
        }
    }

    /// An unsupported-algorithm verdict with a cause
    pub fn unsupported(reason: &'static str) -> Self {
        Self {
            outcome: VerificationOutcome::UnsupportedAlgorithm,
            reason: Some(reason),
            key_image: None,
        }
    }

    /// Whether the signature verified
    pub fn is_valid(&self) -> bool {
        self.outcome == VerificationOutcome::Valid
    }
}

/// A fixed-size array of bytes that is securely zeroed when dropped
///
/// This type provides:
/// - Compile-time size guarantees via const generics
/// - Secure zeroing when dropped
/// - Constant-time equality comparison
/// - Debug implementation that hides the actual bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBytes<N> {
    /// Create a new instance from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != N {
            return Err(Error::InvalidLength {
                context: "SecretBytes::from_slice",
                expected: N,
                actual: slice.len(),
            });
        }

        let mut data = [0u8; N];
        data.copy_from_slice(slice);

        Ok(Self { data })
    }

    /// Create an instance filled with zeros
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Generate a random instance
    pub fn random<R: rand::RngCore + rand::CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; N];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Get the length of the contained data
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the buffer is empty (always false for non-zero N)
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Get a reference to the inner data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> PartialEq for SecretBytes<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data.as_slice().ct_eq(other.data.as_slice()).into()
    }
}

impl<const N: usize> Eq for SecretBytes<N> {}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{}>([REDACTED])", N)
    }
}
