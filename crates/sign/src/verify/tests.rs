//! Tests for outcome-typed verification

use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sshring_api::{RingScheme, VerificationOutcome};
use sshring_keys::{PublicKey, SecretKey};

fn keypair(tag: u8) -> SecretKey {
    SecretKey::from_seed(&[tag; 32]).unwrap()
}

fn ring_of(members: &[&SecretKey]) -> Ring {
    let keys: Vec<PublicKey> = members.iter().map(|k| k.public_key().clone()).collect();
    Ring::new(&keys).unwrap()
}

#[test]
fn the_hello_scenario() {
    // Ring of three keys [A, B, C]; the signer holds B
    let (a, b, c, d) = (keypair(1), keypair(2), keypair(3), keypair(4));
    let ring = ring_of(&[&a, &b, &c]);
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let blob = BlsagEd25519::sign(&ring, &b, b"hello", &mut rng)
        .unwrap()
        .to_bytes();

    let report = Verifier::verify(&blob, &ring);
    assert!(report.is_valid());
    assert!(report.key_image.is_some());

    // Any other ring rejects the blob as a replay
    let other = ring_of(&[&a, &c, &d]);
    let report = Verifier::verify(&blob, &other);
    assert_eq!(report.outcome, VerificationOutcome::Invalid);
    assert_eq!(report.reason, Some("ring mismatch"));
}

#[test]
fn detached_verification_binds_the_plaintext() {
    let keys = [keypair(1), keypair(2), keypair(3)];
    let ring = ring_of(&[&keys[0], &keys[1], &keys[2]]);
    let mut rng = ChaCha20Rng::seed_from_u64(6);
    let blob = BlsagEd25519::sign(&ring, &keys[0], b"displayed text", &mut rng)
        .unwrap()
        .to_bytes();

    assert!(Verifier::verify_detached(&blob, &ring, b"displayed text").is_valid());

    let report = Verifier::verify_detached(&blob, &ring, b"different text");
    assert_eq!(report.outcome, VerificationOutcome::Invalid);
    assert_eq!(report.reason, Some("message digest mismatch"));
}

#[test]
fn garbage_is_malformed_not_an_error() {
    let keys = [keypair(1), keypair(2)];
    let ring = ring_of(&[&keys[0], &keys[1]]);
    for blob in [&b""[..], &[0u8; 7][..], &[0xFFu8; 4096][..]] {
        let report = Verifier::verify(blob, &ring);
        assert_eq!(report.outcome, VerificationOutcome::Malformed);
        assert!(report.key_image.is_none());
    }
}

#[test]
fn unknown_version_reports_malformed() {
    let keys = [keypair(1), keypair(2), keypair(3)];
    let ring = ring_of(&[&keys[0], &keys[1], &keys[2]]);
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let mut blob = BlsagEd25519::sign(&ring, &keys[0], b"x", &mut rng)
        .unwrap()
        .to_bytes();
    blob[0] = 9;
    let report = Verifier::verify(&blob, &ring);
    assert_eq!(report.outcome, VerificationOutcome::Malformed);
    assert_eq!(report.reason, Some("unsupported format version"));
}

#[test]
fn unknown_algorithm_reports_unsupported() {
    let keys = [keypair(1), keypair(2), keypair(3)];
    let ring = ring_of(&[&keys[0], &keys[1], &keys[2]]);
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let mut blob = BlsagEd25519::sign(&ring, &keys[0], b"x", &mut rng)
        .unwrap()
        .to_bytes();
    blob[1] = 9;
    let report = Verifier::verify(&blob, &ring);
    assert_eq!(report.outcome, VerificationOutcome::UnsupportedAlgorithm);
}

#[test]
fn valid_report_carries_the_signature_key_image() {
    let keys = [keypair(1), keypair(2), keypair(3)];
    let ring = ring_of(&[&keys[0], &keys[1], &keys[2]]);
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let signature = BlsagEd25519::sign(&ring, &keys[2], b"indexed", &mut rng).unwrap();

    let report = Verifier::verify(&signature.to_bytes(), &ring);
    assert_eq!(report.key_image.as_ref(), Some(signature.key_image()));

    // Same linkage tag surfaces for a second post by the same key
    let again = BlsagEd25519::sign(&ring, &keys[2], b"another", &mut rng).unwrap();
    let second = Verifier::verify_signature(&again, &ring);
    assert_eq!(second.key_image, report.key_image);
}

#[test]
fn verification_is_pure() {
    // Same inputs, same verdict, call after call; reports are created
    // fresh and never cached
    let keys = [keypair(1), keypair(2), keypair(3)];
    let ring = ring_of(&[&keys[0], &keys[1], &keys[2]]);
    let mut rng = ChaCha20Rng::seed_from_u64(10);
    let blob = BlsagEd25519::sign(&ring, &keys[1], b"idempotent", &mut rng)
        .unwrap()
        .to_bytes();
    let first = Verifier::verify(&blob, &ring);
    let second = Verifier::verify(&blob, &ring);
    assert_eq!(first, second);
}
