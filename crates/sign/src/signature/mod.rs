//! The ring signature object and its transport format
//!
//! The binary format is canonical and versioned: one byte of version, one
//! of algorithm, a big-endian `u16` member count validated against the
//! ring cap *before* anything is allocated, then fixed-width fields only.
//! All scalars must be fully reduced; a non-canonical encoding of the same
//! signature is rejected rather than accepted as an alias.
//!
//! ```text
//! [0]        version        u8    (currently 1)
//! [1]        algorithm      u8    (1 = Ed25519)
//! [2..4]     ring count n   u16be (2 <= n <= 512)
//! [4..36]    ring fingerprint     32 bytes
//! [36..68]   message digest       32 bytes
//! [68..100]  key image            32 bytes, compressed point
//! [100..132] initial challenge c0 32 bytes, canonical scalar
//! [132..]    n ring members       32 bytes each, snapshot order
//!            n responses          32 bytes each
//! ```
//!
//! Total length is exactly `132 + 64*n`; trailing bytes are malformed.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use curve25519_dalek::scalar::Scalar;
use sshring_api::{Error, KeyAlgorithm, Result, Serialize};
use sshring_keys::PublicKey;

use crate::constants::{
    ALGORITHM_ED25519, FINGERPRINT_SIZE, FORMAT_VERSION, MAX_RING_SIZE, MESSAGE_DIGEST_SIZE,
    MIN_RING_SIZE, POINT_SIZE, SCALAR_SIZE, SIGNATURE_HEADER_SIZE,
};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{string::String, vec::Vec};

#[cfg(test)]
mod tests;

const ARMOR_BEGIN: &str = "-----BEGIN SSHRING SIGNATURE-----";
const ARMOR_END: &str = "-----END SSHRING SIGNATURE-----";
const ARMOR_WIDTH: usize = 70;

/// A linkable ring signature.
///
/// Immutable once produced. Carries the ring snapshot as signed, the
/// digests binding ring and message, the key image, and the challenge and
/// response scalars. Nothing in here encodes the signer's position; the
/// response sequence is the only part that varies between signers, and it
/// is uniformly distributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingSignature {
    version: u8,
    algorithm: KeyAlgorithm,
    members: Vec<PublicKey>,
    fingerprint: [u8; FINGERPRINT_SIZE],
    message_digest: [u8; MESSAGE_DIGEST_SIZE],
    key_image: [u8; POINT_SIZE],
    c0: Scalar,
    responses: Vec<Scalar>,
}

impl RingSignature {
    /// Assemble a signature from freshly computed parts.
    ///
    /// Internal to the crate; the engine is the only producer.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        members: Vec<PublicKey>,
        fingerprint: [u8; FINGERPRINT_SIZE],
        message_digest: [u8; MESSAGE_DIGEST_SIZE],
        key_image: [u8; POINT_SIZE],
        c0: Scalar,
        responses: Vec<Scalar>,
    ) -> Self {
        debug_assert_eq!(members.len(), responses.len());
        Self {
            version: FORMAT_VERSION,
            algorithm: KeyAlgorithm::Ed25519,
            members,
            fingerprint,
            message_digest,
            key_image,
            c0,
            responses,
        }
    }

    /// Format version this signature was decoded from or built with
    pub fn version(&self) -> u8 {
        self.version
    }

    /// The ring algorithm
    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    /// The ring snapshot, in the order it was signed
    pub fn members(&self) -> &[PublicKey] {
        &self.members
    }

    /// Number of ring members
    pub fn ring_size(&self) -> usize {
        self.members.len()
    }

    /// The embedded canonical ring fingerprint
    pub fn fingerprint(&self) -> &[u8; FINGERPRINT_SIZE] {
        &self.fingerprint
    }

    /// The embedded message digest
    pub fn message_digest(&self) -> &[u8; MESSAGE_DIGEST_SIZE] {
        &self.message_digest
    }

    /// The linkage tag: identical for every signature one key produces,
    /// unlinkable to a ring position
    pub fn key_image(&self) -> &[u8; POINT_SIZE] {
        &self.key_image
    }

    pub(crate) fn c0(&self) -> &Scalar {
        &self.c0
    }

    pub(crate) fn responses(&self) -> &[Scalar] {
        &self.responses
    }

    /// Encode as ASCII armor for transports that mangle binary.
    pub fn to_armored(&self) -> String {
        let encoded = BASE64.encode(self.to_bytes());
        let mut out = String::with_capacity(encoded.len() + 80);
        out.push_str(ARMOR_BEGIN);
        out.push('\n');
        let mut rest = encoded.as_str();
        while !rest.is_empty() {
            let take = rest.len().min(ARMOR_WIDTH);
            out.push_str(&rest[..take]);
            out.push('\n');
            rest = &rest[take..];
        }
        out.push_str(ARMOR_END);
        out.push('\n');
        out
    }

    /// Decode ASCII armor produced by [`Self::to_armored`].
    pub fn from_armored(armored: &str) -> Result<Self> {
        let mut lines = armored.lines().map(str::trim).filter(|l| !l.is_empty());
        if lines.next() != Some(ARMOR_BEGIN) {
            return Err(Error::MalformedSignature {
                context: "RingSignature::from_armored",
                #[cfg(feature = "std")]
                message: "missing armor header".into(),
            });
        }
        let mut body = String::new();
        let mut terminated = false;
        for line in lines {
            if line == ARMOR_END {
                terminated = true;
                break;
            }
            body.push_str(line);
        }
        if !terminated {
            return Err(Error::MalformedSignature {
                context: "RingSignature::from_armored",
                #[cfg(feature = "std")]
                message: "missing armor footer".into(),
            });
        }
        let bytes = BASE64.decode(body.as_bytes()).map_err(|_| {
            Error::MalformedSignature {
                context: "RingSignature::from_armored",
                #[cfg(feature = "std")]
                message: "invalid base64 body".into(),
            }
        })?;
        Self::from_bytes(&bytes)
    }
}

fn read_scalar(bytes: &[u8]) -> Result<Scalar> {
    let mut buf = [0u8; SCALAR_SIZE];
    buf.copy_from_slice(bytes);
    let scalar: Option<Scalar> = Scalar::from_canonical_bytes(buf).into();
    scalar.ok_or(Error::MalformedSignature {
        context: "RingSignature::from_bytes",
        #[cfg(feature = "std")]
        message: String::from("non-canonical scalar"),
    })
}

impl Serialize for RingSignature {
    fn to_bytes(&self) -> Vec<u8> {
        let n = self.members.len();
        let mut out = Vec::with_capacity(SIGNATURE_HEADER_SIZE + n * (POINT_SIZE + SCALAR_SIZE));
        out.push(self.version);
        out.push(ALGORITHM_ED25519);
        out.extend_from_slice(&(n as u16).to_be_bytes());
        out.extend_from_slice(&self.fingerprint);
        out.extend_from_slice(&self.message_digest);
        out.extend_from_slice(&self.key_image);
        out.extend_from_slice(self.c0.as_bytes());
        for member in &self.members {
            let material = member
                .ed25519_bytes()
                .expect("ring signature members are ed25519 by construction");
            out.extend_from_slice(&material);
        }
        for response in &self.responses {
            out.extend_from_slice(response.as_bytes());
        }
        out
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < SIGNATURE_HEADER_SIZE {
            return Err(Error::MalformedSignature {
                context: "RingSignature::from_bytes",
                #[cfg(feature = "std")]
                message: format!("{} bytes is shorter than the header", bytes.len()),
            });
        }

        let version = bytes[0];
        if version != FORMAT_VERSION {
            return Err(Error::UnsupportedVersion {
                context: "RingSignature::from_bytes",
                version,
            });
        }
        let algorithm = bytes[1];
        if algorithm != ALGORITHM_ED25519 {
            return Err(Error::UnsupportedAlgorithm {
                context: "RingSignature::from_bytes",
                #[cfg(feature = "std")]
                message: format!("unknown ring algorithm id {}", algorithm),
            });
        }

        // Validate the count against the cap before allocating anything;
        // a hostile length field must not size a buffer
        let n = u16::from_be_bytes([bytes[2], bytes[3]]) as usize;
        if !(MIN_RING_SIZE..=MAX_RING_SIZE).contains(&n) {
            return Err(Error::MalformedSignature {
                context: "RingSignature::from_bytes",
                #[cfg(feature = "std")]
                message: format!("ring count {} outside [{}, {}]", n, MIN_RING_SIZE, MAX_RING_SIZE),
            });
        }
        let expected = SIGNATURE_HEADER_SIZE + n * (POINT_SIZE + SCALAR_SIZE);
        if bytes.len() != expected {
            return Err(Error::InvalidLength {
                context: "RingSignature::from_bytes",
                expected,
                actual: bytes.len(),
            });
        }

        let mut offset = 4;
        let mut fingerprint = [0u8; FINGERPRINT_SIZE];
        fingerprint.copy_from_slice(&bytes[offset..offset + FINGERPRINT_SIZE]);
        offset += FINGERPRINT_SIZE;

        let mut message_digest = [0u8; MESSAGE_DIGEST_SIZE];
        message_digest.copy_from_slice(&bytes[offset..offset + MESSAGE_DIGEST_SIZE]);
        offset += MESSAGE_DIGEST_SIZE;

        let mut key_image = [0u8; POINT_SIZE];
        key_image.copy_from_slice(&bytes[offset..offset + POINT_SIZE]);
        offset += POINT_SIZE;

        let c0 = read_scalar(&bytes[offset..offset + SCALAR_SIZE])?;
        offset += SCALAR_SIZE;

        let mut members = Vec::with_capacity(n);
        for _ in 0..n {
            let mut material = [0u8; POINT_SIZE];
            material.copy_from_slice(&bytes[offset..offset + POINT_SIZE]);
            offset += POINT_SIZE;
            let member = PublicKey::from_ed25519_bytes(&material).map_err(|_| {
                Error::MalformedSignature {
                    context: "RingSignature::from_bytes",
                    #[cfg(feature = "std")]
                    message: String::from("ring member is not a curve point"),
                }
            })?;
            members.push(member);
        }

        let mut responses = Vec::with_capacity(n);
        for _ in 0..n {
            responses.push(read_scalar(&bytes[offset..offset + SCALAR_SIZE])?);
            offset += SCALAR_SIZE;
        }

        Ok(Self {
            version,
            algorithm: KeyAlgorithm::Ed25519,
            members,
            fingerprint,
            message_digest,
            key_image,
            c0,
            responses,
        })
    }
}
