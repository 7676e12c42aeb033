//! Format and policy constants for ring signatures

/// Transport format version emitted by this build
pub const FORMAT_VERSION: u8 = 1;

/// Algorithm identifier for Ed25519 rings in the transport format
pub const ALGORITHM_ED25519: u8 = 1;

/// Hard floor on ring size; a ring of one provides no anonymity
pub const MIN_RING_SIZE: usize = 2;

/// Default minimum enforced by `RingBuilder`; a ring of two only hides
/// "which of two"
pub const DEFAULT_MIN_RING_SIZE: usize = 3;

/// Upper bound on ring size, enforced at build and before decode allocates
pub const MAX_RING_SIZE: usize = 512;

/// Size of a ring fingerprint in bytes (SHA-256)
pub const FINGERPRINT_SIZE: usize = 32;

/// Size of a message digest in bytes (SHA-256)
pub const MESSAGE_DIGEST_SIZE: usize = 32;

/// Size of an encoded scalar in bytes
pub const SCALAR_SIZE: usize = 32;

/// Size of a compressed Edwards point in bytes
pub const POINT_SIZE: usize = 32;

/// Fixed-size prefix of the transport format: version, algorithm, ring
/// count, fingerprint, message digest, key image, initial challenge
pub const SIGNATURE_HEADER_SIZE: usize = 2 + 2 + FINGERPRINT_SIZE + MESSAGE_DIGEST_SIZE + POINT_SIZE + SCALAR_SIZE;

// Domain separation tags. Each hash use gets its own tag so transcripts
// from different contexts can never collide.
pub(crate) const CHALLENGE_DOMAIN: &[u8] = b"sshring.blsag.challenge.v1";
pub(crate) const HASH_POINT_DOMAIN: &[u8] = b"sshring.blsag.hash-to-point.v1";
pub(crate) const MESSAGE_DOMAIN: &[u8] = b"sshring.message.v1";
pub(crate) const FINGERPRINT_DOMAIN: &[u8] = b"sshring.ring-fingerprint.v1";
