//! Hashing primitives shared by signing and verification
//!
//! Every hash use is domain-separated, and challenges bind the ring
//! fingerprint and the message digest so a signature cannot be replayed
//! against a different ring or message.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::IsIdentity;
use sha2::{Digest, Sha256, Sha512};

use crate::constants::{
    CHALLENGE_DOMAIN, HASH_POINT_DOMAIN, MESSAGE_DIGEST_SIZE, MESSAGE_DOMAIN,
};

/// Digest the caller's message for inclusion in the transcript.
pub fn message_digest(message: &[u8]) -> [u8; MESSAGE_DIGEST_SIZE] {
    let mut hasher = Sha256::new();
    hasher.update(MESSAGE_DOMAIN);
    hasher.update(message);
    hasher.finalize().into()
}

/// Derive one challenge scalar of the ring walk.
///
/// Binds the ring fingerprint, the message digest, and the two commitment
/// points of the current step.
pub(crate) fn challenge(
    fingerprint: &[u8; 32],
    digest: &[u8; MESSAGE_DIGEST_SIZE],
    base_commitment: &EdwardsPoint,
    image_commitment: &EdwardsPoint,
) -> Scalar {
    let mut hasher = Sha512::new();
    hasher.update(CHALLENGE_DOMAIN);
    hasher.update(fingerprint);
    hasher.update(digest);
    hasher.update(base_commitment.compress().as_bytes());
    hasher.update(image_commitment.compress().as_bytes());
    Scalar::from_hash(hasher)
}

/// Hash 32 bytes of key material to a point in the prime-order subgroup.
///
/// Try-and-increment: hash with a counter until the candidate decompresses,
/// then clear the cofactor. The expected iteration count is two, and the
/// counter is part of the hash so the map is deterministic.
pub(crate) fn hash_to_point(material: &[u8; 32]) -> EdwardsPoint {
    let mut counter: u8 = 0;
    loop {
        let mut hasher = Sha512::new();
        hasher.update(HASH_POINT_DOMAIN);
        hasher.update(material);
        hasher.update([counter]);
        let output = hasher.finalize();

        let mut candidate = [0u8; 32];
        candidate.copy_from_slice(&output[..32]);
        if let Some(point) = CompressedEdwardsY(candidate).decompress() {
            let point = point.mul_by_cofactor();
            if !point.is_identity() {
                return point;
            }
        }
        counter = counter.wrapping_add(1);
    }
}
