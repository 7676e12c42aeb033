//! Outcome-typed verification of untrusted signature blobs
//!
//! The verifier is the boundary where adversarial network input meets the
//! engine: nothing a blob contains can make it return an error, panic, or
//! allocate unboundedly. Every call is a pure function of its inputs, so
//! any number of verifications can run concurrently with no locking.

use sshring_api::{Error, Serialize, VerificationReport};

use crate::blsag::BlsagEd25519;
use crate::ring::Ring;
use crate::signature::RingSignature;
use crate::transcript::message_digest;
use sshring_api::RingScheme as _;
use subtle::ConstantTimeEq;

#[cfg(test)]
mod tests;

/// Stateless verifier for ring-signature blobs.
pub struct Verifier;

impl Verifier {
    /// Verify a signature blob against the ring the caller expects.
    ///
    /// Decode failures surface as `Malformed` (or `UnsupportedAlgorithm`
    /// for an unknown algorithm id); a signature bound to any other ring,
    /// including one replayed against an attacker-chosen ring, is
    /// `Invalid` with reason "ring mismatch". On `Valid` the report carries
    /// the key image for uniqueness indexing by storage.
    pub fn verify(blob: &[u8], ring: &Ring) -> VerificationReport {
        let signature = match RingSignature::from_bytes(blob) {
            Ok(signature) => signature,
            Err(error) => return Self::report_decode_error(error),
        };
        Self::check(&signature, ring, None)
    }

    /// Verify a blob and additionally bind the plaintext the caller will
    /// display: the message must hash to the digest the signature binds.
    pub fn verify_detached(blob: &[u8], ring: &Ring, message: &[u8]) -> VerificationReport {
        let signature = match RingSignature::from_bytes(blob) {
            Ok(signature) => signature,
            Err(error) => return Self::report_decode_error(error),
        };
        Self::check(&signature, ring, Some(message))
    }

    /// Verify an already-decoded signature object.
    pub fn verify_signature(signature: &RingSignature, ring: &Ring) -> VerificationReport {
        Self::check(signature, ring, None)
    }

    fn check(
        signature: &RingSignature,
        ring: &Ring,
        message: Option<&[u8]>,
    ) -> VerificationReport {
        let expected = ring.fingerprint();
        if !bool::from(expected.as_slice().ct_eq(signature.fingerprint().as_slice())) {
            return VerificationReport::invalid("ring mismatch");
        }

        if let Some(message) = message {
            let digest = message_digest(message);
            if !bool::from(digest.as_slice().ct_eq(signature.message_digest().as_slice())) {
                return VerificationReport::invalid("message digest mismatch");
            }
        }

        match BlsagEd25519::verify(signature, ring) {
            Ok(key_image) => VerificationReport::valid(key_image),
            Err(Error::UnsupportedAlgorithm { .. }) => {
                VerificationReport::unsupported("ring algorithm cannot be verified")
            }
            Err(Error::InvalidSignature { .. }) => {
                VerificationReport::invalid("signature does not verify over this ring")
            }
            Err(_) => VerificationReport::malformed("signature fails structural checks"),
        }
    }

    fn report_decode_error(error: Error) -> VerificationReport {
        match error {
            Error::UnsupportedVersion { .. } => {
                VerificationReport::malformed("unsupported format version")
            }
            Error::UnsupportedAlgorithm { .. } => {
                VerificationReport::unsupported("unknown ring algorithm")
            }
            _ => VerificationReport::malformed("undecodable signature"),
        }
    }
}
