//! Hashing, key handling and JSON value coercion.

use lite_client::crypto::ed25519::{generate_keypair, sign, verify};
use lite_client::crypto::hash::{sha256, simple_hash_from_byte_vectors};
use lite_client::types::safe_int::{coerce_safe_integer, parse_safe_integer};
use lite_client::types::*;
use serde_json::json;

#[test]
fn test_merkle_root_shapes() {
    let empty: [&[u8]; 0] = [];
    assert_eq!(simple_hash_from_byte_vectors(&empty), sha256(b""));

    // single leaf is domain separated from a plain digest
    let one = simple_hash_from_byte_vectors(&[b"a"]);
    assert_eq!(one, sha256(&[0x00, b'a']));

    let two = simple_hash_from_byte_vectors(&[b"a", b"b"]);
    let mut inner = vec![0x01];
    inner.extend_from_slice(&sha256(&[0x00, b'a']).0);
    inner.extend_from_slice(&sha256(&[0x00, b'b']).0);
    assert_eq!(two, sha256(&inner));
}

#[test]
fn test_merkle_root_uneven_split() {
    // 3 leaves split as [a, b] | [c]
    let left = simple_hash_from_byte_vectors(&[b"a", b"b"]);
    let right = simple_hash_from_byte_vectors(&[b"c"]);
    let mut inner = vec![0x01];
    inner.extend_from_slice(&left.0);
    inner.extend_from_slice(&right.0);
    assert_eq!(simple_hash_from_byte_vectors(&[b"a", b"b", b"c"]), sha256(&inner));
}

#[test]
fn test_random_keypair_signs() {
    let (sk, vk) = generate_keypair();
    let sig = sign(&sk, b"precommit");
    assert!(verify(&vk, b"precommit", &sig));
    assert!(!verify(&vk, b"prevote", &sig));

    let pk = PublicKey::from(vk);
    assert_eq!(pk.verifying_key().unwrap(), vk);
    assert_eq!(&derive_address(&pk).0[..], &sha256(pk.as_bytes()).0[..20]);
}

#[test]
fn test_public_key_json_shape() {
    let (_, vk) = generate_keypair();
    let pk = PublicKey::from(vk);
    let value = serde_json::to_value(pk).unwrap();
    assert_eq!(value["type"], json!("tendermint/PubKeyEd25519"));
    assert_eq!(serde_json::from_value::<PublicKey>(value).unwrap(), pk);

    let short = json!({ "type": "tendermint/PubKeyEd25519", "value": "AAEC" });
    assert!(serde_json::from_value::<PublicKey>(short).is_err());
}

#[test]
fn test_hash_and_address_text() {
    assert_eq!(Hash::ZERO.to_string(), "");
    assert_eq!("".parse::<Hash>().unwrap(), Hash::ZERO);

    let h = sha256(b"block");
    assert_eq!(h.to_string().parse::<Hash>().unwrap(), h);
    assert_eq!(h.to_string().to_lowercase().parse::<Hash>().unwrap(), h);
    assert!("ABCD".parse::<Hash>().is_err());

    let addr = Address([0xab; 20]);
    assert_eq!(addr.to_string(), "AB".repeat(20));
    assert_eq!(addr.to_string().parse::<Address>().unwrap(), addr);
}

#[test]
fn test_timestamp_rfc3339() {
    let ts: Timestamp = "2019-01-02T03:04:05.123456789Z".parse().unwrap();
    assert_eq!(ts.seconds, 1_546_398_245);
    assert_eq!(ts.nanos, 123_456_789);
    assert_eq!(ts.to_string().parse::<Timestamp>().unwrap(), ts);
    assert!("yesterday".parse::<Timestamp>().is_err());
}

#[test]
fn test_safe_integer_coercion() {
    assert_eq!(parse_safe_integer("42").unwrap(), 42);
    assert_eq!(parse_safe_integer("9007199254740991").unwrap(), 9_007_199_254_740_991);
    assert!(parse_safe_integer("9007199254740992").is_err());
    assert!(parse_safe_integer("1e3").is_err());
    assert!(parse_safe_integer("").is_err());

    assert_eq!(coerce_safe_integer(&json!(7)).unwrap(), 7);
    assert_eq!(coerce_safe_integer(&json!("7")).unwrap(), 7);
    assert_eq!(coerce_safe_integer(&json!(7.0)).unwrap(), 7);
    assert!(coerce_safe_integer(&json!(7.5)).is_err());
    assert!(coerce_safe_integer(&json!(null)).is_err());
}

#[test]
fn test_vote_type_tags() {
    assert_eq!(VoteType::Precommit.tag(), 2);
    assert_eq!(serde_json::to_value(VoteType::Prevote).unwrap(), json!(1));
    // unknown tags survive decoding and are rejected by verification
    assert_eq!(serde_json::from_value::<VoteType>(json!(3)).unwrap(), VoteType::Unknown(3));
    assert_eq!(VoteType::Unknown(3).tag(), 3);
    assert!(serde_json::from_value::<VoteType>(json!(300)).is_err());
}
