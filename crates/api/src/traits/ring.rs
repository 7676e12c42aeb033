//! Ring-signature scheme trait
//!
//! This module defines the trait a ring-signature construction implements.
//! The design mirrors an ordinary signature trait, with two differences: the
//! verification key is a whole ring rather than a single public key, and a
//! signature carries a linkage tag identifying repeated use of one secret
//! key without identifying which ring member it is.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for linkable ring-signature schemes
///
/// Secret keys are opaque types that cannot be directly manipulated as
/// bytes. This trait intentionally does not require `AsRef<[u8]>` for
/// secret keys; use explicit serialization methods if persistence is
/// needed.
pub trait RingScheme {
    /// Public key type for this scheme
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize;

    /// The assembled anonymity set this scheme signs under
    type Ring;

    /// Signature object produced by `sign`
    type Signature: Clone;

    /// Returns the name of this scheme
    fn name() -> &'static str;

    /// Sign a message as an anonymous member of `ring`
    ///
    /// The ring must contain the public key derived from `secret_key`, or
    /// signing fails with `KeyNotInRing`. Implementations must consume
    /// randomness only from the provided RNG and must not retain key
    /// material beyond the call.
    fn sign<R: CryptoRng + RngCore>(
        ring: &Self::Ring,
        secret_key: &Self::SecretKey,
        message: &[u8],
        rng: &mut R,
    ) -> Result<Self::Signature>;

    /// Verify a signature against a ring and return the linkage tag
    ///
    /// Returns `Ok` with the signature's key image iff the signature was
    /// produced by a holder of one of the ring's secret keys over this
    /// exact ring.
    fn verify(signature: &Self::Signature, ring: &Self::Ring) -> Result<[u8; 32]>;
}
