use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::crypto::hash::sha256;
use crate::types::keys::PublicKey;
use crate::types::serialization::CodecError;

pub const ADDRESS_SIZE: usize = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub [u8; ADDRESS_SIZE]);

impl Address {
    pub const ZERO: Address = Address([0u8; ADDRESS_SIZE]);

    /// Address of an Ed25519 validator key: the first 20 bytes of
    /// SHA-256 over the raw key bytes.
    pub fn from_pub_key(pub_key: &PublicKey) -> Self {
        let digest = sha256(pub_key.as_bytes());
        let mut out = [0u8; ADDRESS_SIZE];
        out.copy_from_slice(&digest.0[..ADDRESS_SIZE]);
        Address(out)
    }
}

pub fn derive_address(pub_key: &PublicKey) -> Address {
    Address::from_pub_key(pub_key)
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.0))
    }
}

impl FromStr for Address {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        let arr: [u8; ADDRESS_SIZE] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| CodecError::InvalidLength { what: "address", expected: ADDRESS_SIZE, got: bytes.len() })?;
        Ok(Address(arr))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
