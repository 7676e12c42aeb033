//! Ring assembly
//!
//! A `Ring` is the anonymity set a signature claims one member of: an
//! ordered, deduplicated, algorithm-homogeneous list of public keys.
//! Member order in the ring is insertion order, but the fingerprint sorts
//! members by raw key bytes first, so two rings with the same member set
//! fingerprint identically no matter how they were assembled.

use sha2::{Digest, Sha256};
use sshring_api::{Error, KeyAlgorithm, Result};
use sshring_keys::PublicKey;

use crate::constants::{
    DEFAULT_MIN_RING_SIZE, FINGERPRINT_DOMAIN, FINGERPRINT_SIZE, MAX_RING_SIZE, MIN_RING_SIZE,
};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;


/// An assembled anonymity set.
///
/// Constructed only through [`RingBuilder`], which guarantees the
/// invariants: length within bounds, one algorithm, no duplicate key
/// material.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring {
    members: Vec<PublicKey>,
    algorithm: KeyAlgorithm,
}

impl Ring {
    /// Reconstruct a ring from an exact member list, e.g. for verifying a
    /// signature against its advertised ring.
    ///
    /// Unlike [`RingBuilder::build`] this neither deduplicates nor requires
    /// any particular member: a verifier holds no key of its own. Duplicate
    /// material, mixed algorithms, and out-of-bounds sizes are rejected.
    pub fn new(members: &[PublicKey]) -> Result<Self> {
        if members.len() < MIN_RING_SIZE {
            return Err(Error::InsufficientRingSize {
                context: "Ring::new",
                minimum: MIN_RING_SIZE,
                actual: members.len(),
            });
        }
        if members.len() > MAX_RING_SIZE {
            return Err(Error::RingTooLarge {
                context: "Ring::new",
                maximum: MAX_RING_SIZE,
                actual: members.len(),
            });
        }
        let algorithm = members[0].algorithm();
        if members.iter().any(|m| m.algorithm() != algorithm) {
            return Err(Error::MixedAlgorithms { context: "Ring::new" });
        }
        for (i, member) in members.iter().enumerate() {
            if members[..i].contains(member) {
                return Err(Error::Other {
                    context: "Ring::new",
                    #[cfg(feature = "std")]
                    message: "duplicate ring member".into(),
                });
            }
        }
        Ok(Self {
            members: members.to_vec(),
            algorithm,
        })
    }

    /// The members in insertion order
    pub fn members(&self) -> &[PublicKey] {
        &self.members
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; a ring never has fewer than two members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The algorithm every member shares
    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    /// Whether `key` is a member (by key material)
    pub fn contains(&self, key: &PublicKey) -> bool {
        self.members.iter().any(|m| m == key)
    }

    /// The member index of `key`, if present
    pub fn position(&self, key: &PublicKey) -> Option<usize> {
        self.members.iter().position(|m| m == key)
    }

    /// The canonical fingerprint of the member set.
    ///
    /// Insertion-order independent: members are sorted by raw key bytes
    /// before hashing.
    pub fn fingerprint(&self) -> [u8; FINGERPRINT_SIZE] {
        fingerprint_of(&self.members)
    }
}

/// Canonical fingerprint over any member list.
///
/// Shared with verification, which must re-derive the fingerprint of a
/// signature's embedded ring snapshot byte-for-byte.
pub(crate) fn fingerprint_of(members: &[PublicKey]) -> [u8; FINGERPRINT_SIZE] {
    let mut blobs: Vec<&[u8]> = members.iter().map(|m| m.as_blob()).collect();
    blobs.sort_unstable();

    let mut hasher = Sha256::new();
    hasher.update(FINGERPRINT_DOMAIN);
    hasher.update((blobs.len() as u32).to_be_bytes());
    for blob in blobs {
        hasher.update((blob.len() as u32).to_be_bytes());
        hasher.update(blob);
    }
    hasher.finalize().into()
}

/// One rejected entry from [`RingBuilder::gather`]
#[derive(Debug)]
pub struct RejectedCandidate {
    /// Zero-based index of the line in the input batch
    pub line: usize,
    /// Why it was rejected
    pub error: Error,
}

/// Result of ingesting a batch of untrusted candidate key lines
#[derive(Debug, Default)]
pub struct GatherOutcome {
    /// Keys that parsed, in input order, duplicates included
    pub accepted: Vec<PublicKey>,
    /// Entries that failed to parse, with their input positions
    pub rejected: Vec<RejectedCandidate>,
}

/// Assembles a [`Ring`] from candidate public keys.
///
/// Pure over its inputs: building neither fetches keys nor mutates the
/// candidates. The defaults require at least three members (a ring of two
/// only hides "which of two") and cap the ring well above what a code
/// host's contributor listing can produce.
#[derive(Debug, Clone)]
pub struct RingBuilder {
    min_size: usize,
    max_size: usize,
}

impl Default for RingBuilder {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_RING_SIZE,
            max_size: MAX_RING_SIZE,
        }
    }
}

impl RingBuilder {
    /// Builder with the default size policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum ring size.
    ///
    /// Values below the hard floor of two are raised to it; anonymity
    /// requires at least one decoy.
    pub fn min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size.max(MIN_RING_SIZE);
        self
    }

    /// Set the maximum ring size. Values above the format's cap are
    /// clamped to it.
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size.min(MAX_RING_SIZE);
        self
    }

    /// Parse a batch of `authorized_keys`-style lines from an untrusted
    /// source.
    ///
    /// A line that fails to parse is reported and skipped; it never aborts
    /// the batch. Blank lines are ignored without being reported.
    pub fn gather<'a, I>(lines: I) -> GatherOutcome
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut outcome = GatherOutcome::default();
        for (line_index, line) in lines.into_iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match PublicKey::parse(line) {
                Ok(key) => outcome.accepted.push(key),
                Err(error) => outcome.rejected.push(RejectedCandidate {
                    line: line_index,
                    error,
                }),
            }
        }
        outcome
    }

    /// Assemble a ring from candidates.
    ///
    /// Deduplicates by key material keeping first-seen order, then checks
    /// that all members share one algorithm, that `self_key` is a member,
    /// and that the result is within the size bounds.
    pub fn build(&self, candidates: &[PublicKey], self_key: &PublicKey) -> Result<Ring> {
        let mut members: Vec<PublicKey> = Vec::with_capacity(candidates.len().min(self.max_size));
        for candidate in candidates {
            if !members.iter().any(|m| m == candidate) {
                members.push(candidate.clone());
            }
        }

        let algorithm = self_key.algorithm();
        if members.iter().any(|m| m.algorithm() != algorithm) {
            return Err(Error::MixedAlgorithms {
                context: "RingBuilder::build",
            });
        }

        if !members.iter().any(|m| m == self_key) {
            return Err(Error::SelfKeyMissing {
                context: "RingBuilder::build",
            });
        }

        let minimum = self.min_size.max(MIN_RING_SIZE);
        if members.len() < minimum {
            return Err(Error::InsufficientRingSize {
                context: "RingBuilder::build",
                minimum,
                actual: members.len(),
            });
        }
        if members.len() > self.max_size {
            return Err(Error::RingTooLarge {
                context: "RingBuilder::build",
                maximum: self.max_size,
                actual: members.len(),
            });
        }

        Ok(Ring { members, algorithm })
    }
}
