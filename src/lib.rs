//! # sshring
//!
//! Linkable ring signatures over SSH Ed25519 keys.
//!
//! A member of a group (the contributors to a repository, the members of
//! an organization) proves that *someone* in the group signed a message
//! without revealing who. The anonymity set (the "ring") is built from the
//! SSH public keys a code host already publishes; the signer's own OpenSSH
//! private key closes the ring. Signatures carry a key image so repeated
//! signing by the same key is detectable without deanonymizing anyone.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sshring = "0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`sshring_api`]: Error taxonomy, traits, and shared types
//! - [`sshring_keys`]: SSH public key and OpenSSH private key parsing
//! - [`sshring_sign`]: Ring assembly, the bLSAG engine, the transport
//!   format, and the verifier
//!
//! ## Example
//!
//! ```
//! use rand::rngs::OsRng;
//! use sshring::prelude::*;
//!
//! # fn main() -> sshring::api::Result<()> {
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
//! let signature = BlsagEd25519::sign(&ring, &me, b"an anonymous post", &mut rng)?;
//! assert!(Verifier::verify(&signature.to_bytes(), &ring).is_valid());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use sshring_api as api;
pub use sshring_keys as keys;
pub use sshring_sign as sign;

/// Common imports for sshring users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{RingScheme, Serialize};

    // Re-export verification outcome types
    pub use crate::api::{KeyAlgorithm, VerificationOutcome, VerificationReport};

    // Re-export the working set
    pub use crate::keys::{PublicKey, SecretKey};
    pub use crate::sign::{BlsagEd25519, Ring, RingBuilder, RingSignature, Verifier};
}
