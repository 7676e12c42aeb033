//! bLSAG signature engine over Ed25519
//!
//! A linkable Schnorr ring signature in the AOS/LSAG family. Signing walks
//! the ring cyclically starting just after the real signer: each step's
//! challenge is a hash of the previous step's commitments, so the walk
//! cannot be parallelized and only the holder of a member's secret scalar
//! can close the loop. The key image `I = a * Hp(P)` rides along in every
//! commitment, which links two signatures by the same key across any rings
//! and messages without revealing which member signed.
//!
//! Verification recomputes the whole challenge chain from `c0` and accepts
//! iff it closes.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use rand::{CryptoRng, RngCore};
use sshring_api::{Error, KeyAlgorithm, Result, RingScheme};
use sshring_keys::{PublicKey, SecretKey};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::ring::{fingerprint_of, Ring};
use crate::signature::RingSignature;
use crate::transcript::{challenge, hash_to_point, message_digest};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{vec, vec::Vec};


/// The bLSAG construction over the Ed25519 group.
pub struct BlsagEd25519;

impl RingScheme for BlsagEd25519 {
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
    type Ring = Ring;
    type Signature = RingSignature;

    fn name() -> &'static str {
        "blsag-ed25519"
    }

    fn sign<R: CryptoRng + RngCore>(
        ring: &Ring,
        secret_key: &SecretKey,
        message: &[u8],
        rng: &mut R,
    ) -> Result<RingSignature> {
        if ring.algorithm() != KeyAlgorithm::Ed25519 {
            return Err(Error::UnsupportedAlgorithm {
                context: "BlsagEd25519::sign",
                #[cfg(feature = "std")]
                message: format!("cannot sign over a {} ring", ring.algorithm()),
            });
        }

        let index = ring
            .position(secret_key.public_key())
            .ok_or(Error::KeyNotInRing {
                context: "BlsagEd25519::sign",
            })?;

        let points = decompress_members(ring.members())?;
        let scalar = secret_key.signing_scalar();
        if EdwardsPoint::mul_base(scalar) != points[index] {
            return Err(Error::InvalidPrivateKey {
                context: "BlsagEd25519::sign",
                #[cfg(feature = "std")]
                message: String::from("scalar does not match the ring member"),
            });
        }

        let n = ring.len();
        let fingerprint = ring.fingerprint();
        let digest = message_digest(message);
        let image_bases = hash_members(ring.members())?;

        // I = a * Hp(P_i); deterministic per key, independent of ring and
        // message
        let key_image = scalar * image_bases[index];

        let mut challenges = vec![Scalar::ZERO; n];
        let mut responses = vec![Scalar::ZERO; n];

        // Commit at the signer's slot with a fresh nonce
        let mut alpha = Scalar::random(rng);
        challenges[(index + 1) % n] = challenge(
            &fingerprint,
            &digest,
            &EdwardsPoint::mul_base(&alpha),
            &(alpha * image_bases[index]),
        );

        // Walk the ring from the slot after the signer back around to the
        // signer; each challenge depends on the previous commitment, so the
        // order is forced
        for step in 1..n {
            let j = (index + step) % n;
            responses[j] = Scalar::random(rng);
            let base_commitment = EdwardsPoint::vartime_double_scalar_mul_basepoint(
                &challenges[j],
                &points[j],
                &responses[j],
            );
            let image_commitment = responses[j] * image_bases[j] + challenges[j] * key_image;
            challenges[(j + 1) % n] = challenge(
                &fingerprint,
                &digest,
                &base_commitment,
                &image_commitment,
            );
        }

        // Close the loop; this consumes knowledge of the secret scalar
        responses[index] = alpha - challenges[index] * scalar;
        alpha.zeroize();

        Ok(RingSignature::from_parts(
            ring.members().to_vec(),
            fingerprint,
            digest,
            key_image.compress().to_bytes(),
            challenges[0],
            responses,
        ))
    }

    fn verify(signature: &RingSignature, ring: &Ring) -> Result<[u8; 32]> {
        if signature.algorithm() != KeyAlgorithm::Ed25519
            || ring.algorithm() != KeyAlgorithm::Ed25519
        {
            return Err(Error::UnsupportedAlgorithm {
                context: "BlsagEd25519::verify",
                #[cfg(feature = "std")]
                message: String::from("only ed25519 rings can be verified"),
            });
        }

        let n = signature.ring_size();
        if n == 0 || signature.responses().len() != n {
            return Err(Error::MalformedSignature {
                context: "BlsagEd25519::verify",
                #[cfg(feature = "std")]
                message: String::from("response count does not match ring"),
            });
        }

        // The signature must bind to exactly the ring the caller supplies:
        // a blob replayed against a different ring fails here
        let expected = ring.fingerprint();
        if !bool::from(expected.as_slice().ct_eq(signature.fingerprint().as_slice())) {
            return Err(Error::InvalidSignature {
                context: "BlsagEd25519::verify",
                #[cfg(feature = "std")]
                message: String::from("ring fingerprint mismatch"),
            });
        }
        // ... and its embedded snapshot must fingerprint to the same value
        let snapshot = fingerprint_of(signature.members());
        if !bool::from(snapshot.as_slice().ct_eq(signature.fingerprint().as_slice())) {
            return Err(Error::InvalidSignature {
                context: "BlsagEd25519::verify",
                #[cfg(feature = "std")]
                message: String::from("ring snapshot does not match fingerprint"),
            });
        }

        let key_image = CompressedEdwardsY(*signature.key_image())
            .decompress()
            .ok_or(Error::MalformedSignature {
                context: "BlsagEd25519::verify",
                #[cfg(feature = "std")]
                message: String::from("key image is not a curve point"),
            })?;
        // A key image with a torsion component could make one key yield
        // several "distinct" tags, defeating linkage
        if key_image.is_small_order() || !key_image.is_torsion_free() {
            return Err(Error::InvalidSignature {
                context: "BlsagEd25519::verify",
                #[cfg(feature = "std")]
                message: String::from("key image outside the prime-order subgroup"),
            });
        }

        let points = decompress_members(signature.members())?;
        let image_bases = hash_members(signature.members())?;
        let digest = signature.message_digest();

        let mut current = *signature.c0();
        for j in 0..n {
            let base_commitment = EdwardsPoint::vartime_double_scalar_mul_basepoint(
                &current,
                &points[j],
                &signature.responses()[j],
            );
            let image_commitment =
                signature.responses()[j] * image_bases[j] + current * key_image;
            current = challenge(
                signature.fingerprint(),
                digest,
                &base_commitment,
                &image_commitment,
            );
        }

        if bool::from(current.ct_eq(signature.c0())) {
            Ok(*signature.key_image())
        } else {
            Err(Error::InvalidSignature {
                context: "BlsagEd25519::verify",
                #[cfg(feature = "std")]
                message: String::from("challenge chain does not close"),
            })
        }
    }
}

/// Decompress every member to an Edwards point.
fn decompress_members(members: &[PublicKey]) -> Result<Vec<EdwardsPoint>> {
    members.iter().map(|m| m.ed25519_point()).collect()
}

/// Hash every member to its key-image base `Hp(P)`.
fn hash_members(members: &[PublicKey]) -> Result<Vec<EdwardsPoint>> {
    members
        .iter()
        .map(|m| Ok(hash_to_point(&m.ed25519_bytes()?)))
        .collect()
}
