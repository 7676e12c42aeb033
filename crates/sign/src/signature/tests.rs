//! Tests for the transport format

use super::*;
use crate::blsag::BlsagEd25519;
use crate::constants::{MAX_RING_SIZE, SIGNATURE_HEADER_SIZE};
use crate::ring::{Ring, RingBuilder};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sshring_api::RingScheme as _;
use sshring_keys::SecretKey;

fn fixture() -> (RingSignature, Ring) {
    let keys: Vec<SecretKey> = (1u8..=3)
        .map(|tag| SecretKey::from_seed(&[tag; 32]).unwrap())
        .collect();
    let candidates: Vec<_> = keys.iter().map(|k| k.public_key().clone()).collect();
    let ring = RingBuilder::new().build(&candidates, keys[1].public_key()).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let signature = BlsagEd25519::sign(&ring, &keys[1], b"fixture", &mut rng).unwrap();
    (signature, ring)
}

#[test]
fn binary_round_trip() {
    let (signature, _) = fixture();
    let blob = signature.to_bytes();
    assert_eq!(
        blob.len(),
        SIGNATURE_HEADER_SIZE + signature.ring_size() * 64
    );
    let decoded = RingSignature::from_bytes(&blob).unwrap();
    assert_eq!(decoded, signature);
    // Canonical: re-encoding reproduces the bytes exactly
    assert_eq!(decoded.to_bytes(), blob);
}

#[test]
fn armor_round_trip() {
    let (signature, _) = fixture();
    let armored = signature.to_armored();
    assert!(armored.starts_with(ARMOR_BEGIN));
    assert!(armored.trim_end().ends_with(ARMOR_END));
    let decoded = RingSignature::from_armored(&armored).unwrap();
    assert_eq!(decoded, signature);
}

#[test]
fn armor_rejects_tampering() {
    let (signature, _) = fixture();
    let armored = signature.to_armored();

    let headless = armored.replace(ARMOR_BEGIN, "");
    assert!(RingSignature::from_armored(&headless).is_err());

    let footless = armored.replace(ARMOR_END, "");
    assert!(RingSignature::from_armored(&footless).is_err());

    let garbled = armored.replacen('A', "#", 1);
    assert!(RingSignature::from_armored(&garbled).is_err());
}

#[test]
fn every_truncation_is_rejected() {
    let (signature, _) = fixture();
    let blob = signature.to_bytes();
    for len in 0..blob.len() {
        assert!(
            RingSignature::from_bytes(&blob[..len]).is_err(),
            "accepted truncation to {} bytes",
            len
        );
    }
}

#[test]
fn trailing_bytes_are_rejected() {
    let (signature, _) = fixture();
    let mut blob = signature.to_bytes();
    blob.push(0);
    assert!(matches!(
        RingSignature::from_bytes(&blob),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn unknown_version_is_rejected() {
    let (signature, _) = fixture();
    let mut blob = signature.to_bytes();
    blob[0] = 2;
    assert!(matches!(
        RingSignature::from_bytes(&blob),
        Err(Error::UnsupportedVersion { version: 2, .. })
    ));
}

#[test]
fn unknown_algorithm_is_rejected() {
    let (signature, _) = fixture();
    let mut blob = signature.to_bytes();
    blob[1] = 0x7F;
    assert!(matches!(
        RingSignature::from_bytes(&blob),
        Err(Error::UnsupportedAlgorithm { .. })
    ));
}

#[test]
fn count_tampering_cannot_smuggle_members() {
    let (signature, _) = fixture();
    let mut blob = signature.to_bytes();
    // Claim one more member than the buffer carries
    blob[3] += 1;
    assert!(matches!(
        RingSignature::from_bytes(&blob),
        Err(Error::InvalidLength { .. })
    ));

    // Claim an absurd count; must fail before any allocation
    blob[2] = 0xFF;
    blob[3] = 0xFF;
    assert!(matches!(
        RingSignature::from_bytes(&blob),
        Err(Error::MalformedSignature { .. })
    ));
    assert!(0xFFFF > MAX_RING_SIZE);
}

#[test]
fn degenerate_counts_are_rejected() {
    let (signature, _) = fixture();
    let blob = signature.to_bytes();
    for count in [0u16, 1] {
        let mut doctored = blob[..SIGNATURE_HEADER_SIZE].to_vec();
        doctored[2..4].copy_from_slice(&count.to_be_bytes());
        doctored.extend(core::iter::repeat(0u8).take(count as usize * 64));
        assert!(RingSignature::from_bytes(&doctored).is_err());
    }
}

#[test]
fn non_canonical_scalar_is_rejected() {
    let (signature, _) = fixture();
    let mut blob = signature.to_bytes();
    // c0 lives at [100..132]; the all-ones pattern exceeds the group order
    for byte in &mut blob[100..132] {
        *byte = 0xFF;
    }
    assert!(matches!(
        RingSignature::from_bytes(&blob),
        Err(Error::MalformedSignature { .. })
    ));
}

#[test]
fn non_point_ring_member_is_rejected() {
    let (signature, _) = fixture();
    let mut blob = signature.to_bytes();
    // First snapshot member starts right after the header; y = 1 with the
    // sign bit set never decompresses
    blob[SIGNATURE_HEADER_SIZE..SIGNATURE_HEADER_SIZE + 32].fill(0);
    blob[SIGNATURE_HEADER_SIZE] = 1;
    blob[SIGNATURE_HEADER_SIZE + 31] = 0x80;
    assert!(matches!(
        RingSignature::from_bytes(&blob),
        Err(Error::MalformedSignature { .. })
    ));
}

#[test]
fn single_byte_mutations_never_validate() {
    // Decode may succeed or fail on a mutated blob, but it must never
    // panic, and a mutated blob must never verify
    use rand::Rng;

    let (signature, ring) = fixture();
    let blob = signature.to_bytes();
    let mut rng = ChaCha20Rng::seed_from_u64(123);

    for _ in 0..128 {
        let mut mutated = blob.clone();
        let position = rng.gen_range(0..mutated.len());
        let flip: u8 = rng.gen_range(1..=255);
        mutated[position] ^= flip;

        if let Ok(decoded) = RingSignature::from_bytes(&mutated) {
            assert!(
                BlsagEd25519::verify(&decoded, &ring).is_err(),
                "mutation at byte {} still verified",
                position
            );
        }
    }
}
