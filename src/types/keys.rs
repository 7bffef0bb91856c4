use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use ed25519_dalek::VerifyingKey;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::types::serialization::CodecError;

pub const PUB_KEY_TYPE_ED25519: &str = "tendermint/PubKeyEd25519";
pub const SIGNATURE_TYPE_ED25519: &str = "tendermint/SignatureEd25519";

pub const PUB_KEY_SIZE: usize = 32;
pub const SIGNATURE_SIZE: usize = 64;

/// Raw Ed25519 public key bytes as carried in validator sets.
///
/// Only the byte length is checked on decode; whether the bytes are a valid
/// curve point is decided at signature verification time.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublicKey(pub [u8; PUB_KEY_SIZE]);

impl PublicKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn verifying_key(&self) -> Result<VerifyingKey, CodecError> {
        VerifyingKey::from_bytes(&self.0).map_err(|_| CodecError::Invalid("ed25519 public key"))
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(vk: VerifyingKey) -> Self {
        PublicKey(vk.to_bytes())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode_upper(self.0))
    }
}

#[derive(Serialize, Deserialize)]
struct TypedValue {
    #[serde(rename = "type")]
    kind: String,
    value: String,
}

fn decode_fixed<const N: usize>(what: &'static str, b64: &str) -> Result<[u8; N], CodecError> {
    let bytes = STANDARD.decode(b64)?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| CodecError::InvalidLength { what, expected: N, got: bytes.len() })
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TypedValue {
            kind: PUB_KEY_TYPE_ED25519.to_string(),
            value: STANDARD.encode(self.0),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let typed = TypedValue::deserialize(deserializer)?;
        if typed.kind != PUB_KEY_TYPE_ED25519 {
            return Err(serde::de::Error::custom(CodecError::UnsupportedKeyType(typed.kind)));
        }
        decode_fixed::<PUB_KEY_SIZE>("public key", &typed.value)
            .map(PublicKey)
            .map_err(serde::de::Error::custom)
    }
}

/// Ed25519 signature over canonical sign bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature(pub [u8; SIGNATURE_SIZE]);

impl Signature {
    /// Placeholder carried by a vote before it is signed.
    pub const EMPTY: Signature = Signature([0u8; SIGNATURE_SIZE]);

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", hex::encode_upper(self.0))
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(self.0))
    }
}

// RPC responses carry either a bare base64 string or a typed envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum SignatureRepr {
    Bare(String),
    Typed { value: String },
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let b64 = match SignatureRepr::deserialize(deserializer)? {
            SignatureRepr::Bare(s) => s,
            SignatureRepr::Typed { value } => value,
        };
        decode_fixed::<SIGNATURE_SIZE>("signature", &b64)
            .map(Signature)
            .map_err(serde::de::Error::custom)
    }
}
