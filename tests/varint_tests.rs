//! Varint codec tests. Sign bytes depend on these encodings byte for byte.

use proptest::prelude::*;

use lite_client::types::safe_int::MAX_SAFE_INTEGER;
use lite_client::types::{VarBuffer, VarInt, VarintError};

#[test]
fn test_unsigned_known_encodings() {
    let cases: &[(i64, &[u8])] = &[
        (0, &[0x00]),
        (1, &[0x01]),
        (127, &[0x7f]),
        (128, &[0x80, 0x01]),
        (300, &[0xac, 0x02]),
        (16_384, &[0x80, 0x80, 0x01]),
    ];
    for (n, expected) in cases {
        assert_eq!(VarInt::UNSIGNED.encode(*n).unwrap(), *expected, "unsigned {}", n);
    }
}

#[test]
fn test_signed_doubles_value() {
    assert_eq!(VarInt::SIGNED.encode(0).unwrap(), vec![0x00]);
    assert_eq!(VarInt::SIGNED.encode(1).unwrap(), vec![0x02]);
    assert_eq!(VarInt::SIGNED.encode(63).unwrap(), vec![0x7e]);
    assert_eq!(VarInt::SIGNED.encode(64).unwrap(), vec![0x80, 0x01]);
    assert_eq!(VarInt::SIGNED.encode(300).unwrap(), vec![0xd8, 0x04]);
}

#[test]
fn test_negative_rejected() {
    assert_eq!(
        VarInt::UNSIGNED.encode(-1).unwrap_err(),
        VarintError::OutOfBounds { value: -1 }
    );
    assert!(VarInt::UNSIGNED.encoding_length(-5).is_err());
    assert!(VarInt::SIGNED.encode(-1).is_err(), "doubling scheme has no negative form");
}

#[test]
fn test_safe_integer_bound() {
    let max = MAX_SAFE_INTEGER as i64;
    assert_eq!(VarInt::UNSIGNED.encoding_length(max).unwrap(), 8);
    assert_eq!(VarInt::UNSIGNED.encode(max).unwrap().len(), 8);
    assert!(VarInt::UNSIGNED.encode(max + 1).is_err());

    // signed bound applies to the doubled value
    assert!(VarInt::SIGNED.encode(max / 2).is_ok());
    assert!(VarInt::SIGNED.encode(max / 2 + 1).is_err());
    assert!(VarInt::SIGNED.encoding_length(i64::MAX).is_err());
}

#[test]
fn test_length_at_power_of_two_boundaries() {
    for k in 0..53u32 {
        let n = 1i64 << k;
        for v in [n - 1, n, n + 1] {
            if v as u64 > MAX_SAFE_INTEGER {
                continue;
            }
            assert_eq!(
                VarInt::UNSIGNED.encoding_length(v).unwrap(),
                VarInt::UNSIGNED.encode(v).unwrap().len(),
                "unsigned length mismatch at {}",
                v
            );
        }
    }
}

#[test]
fn test_encode_into_appends() {
    let mut buf = vec![0xff];
    let written = VarInt::UNSIGNED.encode_into(300, &mut buf).unwrap();
    assert_eq!(written, 2);
    assert_eq!(buf, vec![0xff, 0xac, 0x02]);
}

#[test]
fn test_decode_is_unsupported() {
    assert_eq!(VarInt::UNSIGNED.decode(&[0x01]).unwrap_err(), VarintError::DecodeUnsupported);
    assert_eq!(VarInt::SIGNED.decode(&[]).unwrap_err(), VarintError::DecodeUnsupported);
    assert!(VarBuffer::decode(&[0x01, 0x00]).is_err());
}

#[test]
fn test_var_buffer_prefix() {
    assert_eq!(VarBuffer::encode(&[]).unwrap(), vec![0x00]);
    assert_eq!(VarBuffer::encode(&[1, 2, 3]).unwrap(), vec![3, 1, 2, 3]);

    let long = vec![0xabu8; 200];
    let out = VarBuffer::encode(&long).unwrap();
    assert_eq!(&out[..2], &[0xc8, 0x01]);
    assert_eq!(&out[2..], long.as_slice());
    assert_eq!(VarBuffer::encoding_length(&long).unwrap(), out.len());
}

proptest! {
    #[test]
    fn prop_unsigned_length_matches_encoding(n in 0i64..=MAX_SAFE_INTEGER as i64) {
        let encoded = VarInt::UNSIGNED.encode(n).unwrap();
        prop_assert_eq!(VarInt::UNSIGNED.encoding_length(n).unwrap(), encoded.len());
        // continuation bit on every byte but the last
        let (last, rest) = encoded.split_last().unwrap();
        prop_assert!(last & 0x80 == 0);
        prop_assert!(rest.iter().all(|b| b & 0x80 != 0));
    }

    #[test]
    fn prop_signed_length_matches_encoding(n in 0i64..=(MAX_SAFE_INTEGER / 2) as i64) {
        let encoded = VarInt::SIGNED.encode(n).unwrap();
        prop_assert_eq!(VarInt::SIGNED.encoding_length(n).unwrap(), encoded.len());
        prop_assert_eq!(encoded, VarInt::UNSIGNED.encode(n * 2).unwrap());
    }
}
