//! Linkable ring signatures over SSH Ed25519 keys
//!
//! This crate is the cryptographic core of sshring: it assembles rings of
//! SSH public keys, produces bLSAG-style linkable ring signatures with a
//! member's private key, and verifies untrusted signature blobs without
//! ever revealing, or being able to reveal, which member signed.
//!
//! # Example
//!
//! ```
//! use rand::rngs::OsRng;
//! use sshring_api::{RingScheme, Serialize};
//! use sshring_keys::SecretKey;
//! use sshring_sign::{BlsagEd25519, RingBuilder, Verifier};
//!
//! # fn main() -> sshring_api::Result<()> {
//! let mut rng = OsRng;
//! let me = SecretKey::generate(&mut rng)?;
//! let decoy_a = SecretKey::generate(&mut rng)?;
//! let decoy_b = SecretKey::generate(&mut rng)?;
//!
//! let candidates = [
//!     decoy_a.public_key().clone(),
//!     me.public_key().clone(),
//!     decoy_b.public_key().clone(),
//! ];
//! let ring = RingBuilder::new().build(&candidates, me.public_key())?;
//!
//! let signature = BlsagEd25519::sign(&ring, &me, b"hello", &mut rng)?;
//! let blob = signature.to_bytes();
//!
//! let report = Verifier::verify_detached(&blob, &ring, b"hello");
//! assert!(report.is_valid());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod blsag;
pub mod constants;
pub mod ring;
pub mod signature;
pub mod transcript;
pub mod verify;

pub use blsag::BlsagEd25519;
pub use ring::{GatherOutcome, RejectedCandidate, Ring, RingBuilder};
pub use signature::RingSignature;
pub use verify::Verifier;
