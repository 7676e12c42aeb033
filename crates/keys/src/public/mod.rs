//! SSH public key parsing and canonical encoding
//!
//! Public keys arrive as `authorized_keys`-style text lines
//! (`<algorithm> <base64-blob> [comment]`, the shape a code host's API
//! returns) or as raw wire blobs. Parsing validates structure completely:
//! every length field, no trailing bytes, and for Ed25519 that the key
//! material decompresses to a curve point. The stored blob is therefore
//! canonical, and equality, ordering, and hashing are defined on it alone;
//! the comment is display metadata.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use sshring_api::{Error, KeyAlgorithm, Result, Serialize};

use crate::wire::{SshReader, SshWriter};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{string::String, vec::Vec};

#[cfg(test)]
mod tests;

/// Size of Ed25519 key material in bytes (a compressed Edwards point)
pub const ED25519_KEY_SIZE: usize = 32;

/// A parsed SSH public key.
///
/// Immutable once parsed. Only `Ed25519` keys can participate in ring
/// signatures; `EcdsaP256` and `Rsa` keys parse structurally so ring
/// assembly can report mixed-algorithm candidate sets precisely instead of
/// failing with a generic parse error.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKey {
    algorithm: KeyAlgorithm,
    blob: Vec<u8>,
    comment: Option<String>,
}

impl PublicKey {
    /// Parse an `authorized_keys`-style text line.
    ///
    /// The comment field is optional and may contain spaces; the declared
    /// algorithm must match the one embedded in the blob.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let mut fields = line.splitn(3, char::is_whitespace);
        let (name, b64) = match (fields.next(), fields.next()) {
            (Some(name), Some(b64)) if !name.is_empty() && !b64.is_empty() => (name, b64),
            _ => {
                return Err(Error::MalformedKey {
                    context: "PublicKey::parse",
                    #[cfg(feature = "std")]
                    message: "expected <algorithm> <base64> [comment]".into(),
                })
            }
        };
        let declared = KeyAlgorithm::from_ssh_name(name)?;

        let blob = BASE64.decode(b64).map_err(|_| Error::MalformedKey {
            context: "PublicKey::parse",
            #[cfg(feature = "std")]
            message: "invalid base64 key material".into(),
        })?;

        let mut key = Self::from_blob(&blob)?;
        if key.algorithm != declared {
            return Err(Error::MalformedKey {
                context: "PublicKey::parse",
                #[cfg(feature = "std")]
                message: "declared algorithm does not match blob".into(),
            });
        }
        key.comment = fields
            .next()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from);
        Ok(key)
    }

    /// Parse a raw SSH wire blob.
    pub fn from_blob(blob: &[u8]) -> Result<Self> {
        let mut reader = SshReader::new(blob);
        let algorithm = KeyAlgorithm::from_ssh_name(reader.read_str()?)?;
        match algorithm {
            KeyAlgorithm::Ed25519 => {
                let material = reader.read_string()?;
                if material.len() != ED25519_KEY_SIZE {
                    return Err(Error::MalformedKey {
                        context: "PublicKey::from_blob",
                        #[cfg(feature = "std")]
                        message: format!(
                            "ed25519 key material of {} bytes, expected {}",
                            material.len(),
                            ED25519_KEY_SIZE
                        ),
                    });
                }
                let mut bytes = [0u8; ED25519_KEY_SIZE];
                bytes.copy_from_slice(material);
                decompress_checked(&bytes)?;
            }
            KeyAlgorithm::EcdsaP256 => {
                let curve = reader.read_str()?;
                if curve != "nistp256" {
                    return Err(Error::MalformedKey {
                        context: "PublicKey::from_blob",
                        #[cfg(feature = "std")]
                        message: format!("ecdsa curve {:?} under ecdsa-sha2-nistp256", curve),
                    });
                }
                let point = reader.read_string()?;
                // SEC1: uncompressed (0x04, 65 bytes) or compressed (0x02/0x03, 33)
                let well_formed = matches!(
                    (point.first().copied(), point.len()),
                    (Some(0x04), 65) | (Some(0x02), 33) | (Some(0x03), 33)
                );
                if !well_formed {
                    return Err(Error::MalformedKey {
                        context: "PublicKey::from_blob",
                        #[cfg(feature = "std")]
                        message: "malformed SEC1 point".into(),
                    });
                }
            }
            KeyAlgorithm::Rsa => {
                reader.read_mpint()?; // e
                reader.read_mpint()?; // n
            }
        }
        reader.finish()?;
        Ok(Self {
            algorithm,
            blob: blob.to_vec(),
            comment: None,
        })
    }

    /// Construct an Ed25519 key directly from its 32-byte material.
    pub fn from_ed25519_bytes(bytes: &[u8; ED25519_KEY_SIZE]) -> Result<Self> {
        decompress_checked(bytes)?;
        let mut writer = SshWriter::new();
        writer.write_str(KeyAlgorithm::Ed25519.ssh_name());
        writer.write_string(bytes);
        Ok(Self {
            algorithm: KeyAlgorithm::Ed25519,
            blob: writer.into_bytes(),
            comment: None,
        })
    }

    /// The key's algorithm
    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    /// The comment/owner label, if one was parsed
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Return a copy carrying the given comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// The canonical SSH wire blob
    pub fn as_blob(&self) -> &[u8] {
        &self.blob
    }

    /// Re-encode as an `authorized_keys`-style line
    pub fn to_text(&self) -> String {
        let mut line = String::new();
        line.push_str(self.algorithm.ssh_name());
        line.push(' ');
        line.push_str(&BASE64.encode(&self.blob));
        if let Some(comment) = &self.comment {
            line.push(' ');
            line.push_str(comment);
        }
        line
    }

    /// The 32-byte Ed25519 key material.
    ///
    /// Fails with `UnsupportedAlgorithm` for non-Ed25519 keys.
    pub fn ed25519_bytes(&self) -> Result<[u8; ED25519_KEY_SIZE]> {
        if self.algorithm != KeyAlgorithm::Ed25519 {
            return Err(Error::UnsupportedAlgorithm {
                context: "PublicKey::ed25519_bytes",
                #[cfg(feature = "std")]
                message: format!("{} key cannot join an ed25519 ring", self.algorithm),
            });
        }
        let mut reader = SshReader::new(&self.blob);
        reader.read_str()?;
        let material = reader.read_string()?;
        if material.len() != ED25519_KEY_SIZE {
            return Err(Error::InvalidLength {
                context: "PublicKey::ed25519_bytes",
                expected: ED25519_KEY_SIZE,
                actual: material.len(),
            });
        }
        let mut bytes = [0u8; ED25519_KEY_SIZE];
        bytes.copy_from_slice(material);
        Ok(bytes)
    }

    /// The key as an Edwards point.
    ///
    /// Fails with `UnsupportedAlgorithm` for non-Ed25519 keys. Cannot fail
    /// decompression for a key that parsed successfully.
    pub fn ed25519_point(&self) -> Result<EdwardsPoint> {
        let bytes = self.ed25519_bytes()?;
        decompress_checked(&bytes)
    }
}

/// Decompress 32 bytes into a curve point, rejecting non-points and
/// small-order (degenerate) points.
fn decompress_checked(bytes: &[u8; ED25519_KEY_SIZE]) -> Result<EdwardsPoint> {
    let point = CompressedEdwardsY(*bytes)
        .decompress()
        .ok_or(Error::MalformedKey {
            context: "PublicKey::decompress",
            #[cfg(feature = "std")]
            message: "not a curve point".into(),
        })?;
    if point.is_small_order() {
        return Err(Error::MalformedKey {
            context: "PublicKey::decompress",
            #[cfg(feature = "std")]
            message: "small-order point".into(),
        });
    }
    Ok(point)
}

impl Serialize for PublicKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_blob(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.blob.clone()
    }
}

impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// Equality, ordering, and hashing ignore the comment: two keys with the
// same material are the same ring member regardless of labeling.
impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.blob == other.blob
    }
}

impl Eq for PublicKey {}

impl PartialOrd for PublicKey {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PublicKey {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.blob.cmp(&other.blob)
    }
}

impl Hash for PublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.blob.hash(state);
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("algorithm", &self.algorithm)
            .field("comment", &self.comment)
            .finish()
    }
}
