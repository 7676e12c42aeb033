//! Tests for SSH public key parsing

use super::*;
use sshring_api::KeyAlgorithm;

// Keys generated with `ssh-keygen -t {ed25519,rsa,ecdsa}`
const ED25519_LINE: &str =
    "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIN5wj5FtJnCER2vhURAbAZ46cyX3ZMvr8NFzSUs67Vjk alice@example.com";
const ED25519_MATERIAL_HEX: &str =
    "de708f916d267084476be151101b019e3a7325f764cbebf0d173494b3aed58e4";
const RSA_LINE: &str = "ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAABAQCvTUAyp+TJ0UZIGEt/EqZZtVOTbpLIrOTnBu4QUvODOP0qNd5XCBgOR3W7HmNEWwww2ZT3xtZMJqy+6wGtLd0n2PvjtmzlukvE4WeFqBmw1ODa08pMe5tF4exl1fNxBUGLtr7nOB/57zvVwRz4sy3lsR8BmTdOCU5lTsJbNPiDlJ7x1lOGv3Pf8NyAjQboEpnZo0F307aE5n9y/wjqcktofE6r1tn3QsYGtN9OAcg8FUKF/bCLOR7s5ex/96mRtmxK2darW/v27GsV+Q6FcqXHBo9pTF6Ths6/GHlpNexNCe/LLQri18NmeP9wv4XqKeBVo3EeMNRT9Eh3W1r+q4LP carol@example.com";
const ECDSA_LINE: &str = "ecdsa-sha2-nistp256 AAAAE2VjZHNhLXNoYTItbmlzdHAyNTYAAAAIbmlzdHAyNTYAAABBBByO4ZgVNnScpNmuDEup08dpqhos4a5hL+oFeTD92wr+SJGoHZdpp9oYY+gDokqZtODvD+qi3GrHFy/nlDhTzk0= dave@example.com";

#[test]
fn parses_ed25519_line() {
    let key = PublicKey::parse(ED25519_LINE).unwrap();
    assert_eq!(key.algorithm(), KeyAlgorithm::Ed25519);
    assert_eq!(key.comment(), Some("alice@example.com"));
    assert_eq!(
        hex::encode(key.ed25519_bytes().unwrap()),
        ED25519_MATERIAL_HEX
    );
    key.ed25519_point().unwrap();
}

#[test]
fn parses_line_without_comment() {
    // The code-host API returns bare "<algorithm> <base64>" entries
    let bare: String = ED25519_LINE.rsplitn(2, ' ').nth(1).unwrap().into();
    let key = PublicKey::parse(&bare).unwrap();
    assert_eq!(key.comment(), None);
    assert_eq!(key, PublicKey::parse(ED25519_LINE).unwrap());
}

#[test]
fn parses_rsa_and_ecdsa_structurally() {
    let rsa = PublicKey::parse(RSA_LINE).unwrap();
    assert_eq!(rsa.algorithm(), KeyAlgorithm::Rsa);
    assert!(rsa.ed25519_bytes().is_err());

    let ecdsa = PublicKey::parse(ECDSA_LINE).unwrap();
    assert_eq!(ecdsa.algorithm(), KeyAlgorithm::EcdsaP256);
    assert!(matches!(
        ecdsa.ed25519_point(),
        Err(Error::UnsupportedAlgorithm { .. })
    ));
}

#[test]
fn text_round_trip() {
    for line in [ED25519_LINE, RSA_LINE, ECDSA_LINE] {
        let key = PublicKey::parse(line).unwrap();
        assert_eq!(key.to_text(), line);
        assert_eq!(PublicKey::parse(&key.to_text()).unwrap(), key);
    }
}

#[test]
fn blob_round_trip() {
    let key = PublicKey::parse(ED25519_LINE).unwrap();
    let blob = key.to_bytes();
    let reparsed = PublicKey::from_bytes(&blob).unwrap();
    // Comment is not part of the blob
    assert_eq!(reparsed, key);
    assert_eq!(reparsed.comment(), None);
}

#[test]
fn equality_ignores_comment() {
    let a = PublicKey::parse(ED25519_LINE).unwrap();
    let b = a.clone().with_comment("somebody else");
    assert_eq!(a, b);
}

#[test]
fn rejects_unknown_algorithm() {
    let line = ED25519_LINE.replace("ssh-ed25519", "ssh-dss");
    assert!(matches!(
        PublicKey::parse(&line),
        Err(Error::UnsupportedAlgorithm { .. })
    ));
}

#[test]
fn rejects_mismatched_declaration() {
    // ssh-rsa declared, ed25519 blob attached
    let blob_b64 = ED25519_LINE.split(' ').nth(1).unwrap();
    let line = format!("ssh-rsa {}", blob_b64);
    assert!(matches!(
        PublicKey::parse(&line),
        Err(Error::MalformedKey { .. })
    ));
}

#[test]
fn rejects_bad_base64() {
    assert!(matches!(
        PublicKey::parse("ssh-ed25519 ####"),
        Err(Error::MalformedKey { .. })
    ));
}

#[test]
fn rejects_trailing_bytes_in_blob() {
    let key = PublicKey::parse(ED25519_LINE).unwrap();
    let mut blob = key.to_bytes();
    blob.push(0);
    assert!(matches!(
        PublicKey::from_blob(&blob),
        Err(Error::MalformedKey { .. })
    ));
}

#[test]
fn rejects_truncated_blob() {
    let key = PublicKey::parse(ED25519_LINE).unwrap();
    let blob = key.to_bytes();
    for len in [0, 3, 10, blob.len() - 1] {
        assert!(PublicKey::from_blob(&blob[..len]).is_err(), "len {}", len);
    }
}

#[test]
fn rejects_non_point_material() {
    // y = 1 with the sign bit set encodes x = 0 with a negative sign,
    // which RFC 8032 decompression rejects
    let mut bytes = [0u8; ED25519_KEY_SIZE];
    bytes[0] = 0x01;
    bytes[31] = 0x80;
    assert!(matches!(
        PublicKey::from_ed25519_bytes(&bytes),
        Err(Error::MalformedKey { .. })
    ));
}

#[test]
fn rejects_small_order_material() {
    // y = 1 is the identity point
    let mut bytes = [0u8; ED25519_KEY_SIZE];
    bytes[0] = 0x01;
    assert!(matches!(
        PublicKey::from_ed25519_bytes(&bytes),
        Err(Error::MalformedKey { .. })
    ));
}

#[test]
fn ordering_is_stable_on_material() {
    let a = PublicKey::parse(ED25519_LINE).unwrap();
    let r = PublicKey::parse(RSA_LINE).unwrap();
    assert_eq!(a.cmp(&r), a.as_blob().cmp(r.as_blob()));
}

mod properties {
    use super::*;
    use crate::private::SecretKey;
    use proptest::prelude::*;

    proptest! {
        // parse(encode(k)) == k for every valid key
        #[test]
        fn derived_keys_round_trip(seed in any::<[u8; 32]>()) {
            let key = SecretKey::from_seed(&seed).unwrap();
            let public = key.public_key().clone();

            let text = public.to_text();
            prop_assert_eq!(&PublicKey::parse(&text).unwrap(), &public);

            let blob = public.to_bytes();
            prop_assert_eq!(&PublicKey::from_bytes(&blob).unwrap(), &public);
        }

        #[test]
        fn random_blobs_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            // Outcome does not matter; parsing adversarial bytes must
            // return, not crash
            let _ = PublicKey::from_blob(&bytes);
        }
    }
}
