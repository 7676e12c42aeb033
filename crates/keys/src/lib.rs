//! SSH key parsing and canonical encoding for the sshring library
//!
//! This crate turns the key material a code host publishes, `ssh-ed25519`
//! public key lines and OpenSSH private key files, into the algebraic
//! types the signature engine consumes. Parsing is strict: every length
//! field is validated, trailing bytes are rejected, and Ed25519 material
//! must decompress to a curve point, so a key that parses here is safe to
//! place in a ring.
//!
//! # Example
//!
//! ```
//! use sshring_keys::{PublicKey, SecretKey};
//!
//! # fn main() -> sshring_api::Result<()> {
//! let line = "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIN5wj5FtJnCER2vhURAbAZ46cyX3ZMvr8NFzSUs67Vjk alice@example.com";
//! let key = PublicKey::parse(line)?;
//! assert_eq!(key.comment(), Some("alice@example.com"));
//! assert_eq!(key.to_text(), line);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod private;
pub mod public;
pub mod wire;

pub use private::{SecretKey, ED25519_SEED_SIZE};
pub use public::{PublicKey, ED25519_KEY_SIZE};
