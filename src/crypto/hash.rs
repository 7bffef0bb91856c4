use crate::types::serialization::{encode_header_fields, encode_validator};
use crate::types::varint::VarintError;
use crate::types::{Hash, Header, ValidatorSet};
use sha2::{Digest, Sha256};

pub fn sha256(data: &[u8]) -> Hash {
    let mut h = Sha256::new();
    h.update(data);
    let out = h.finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&out);
    Hash(bytes)
}

fn leaf_hash(bytes: &[u8]) -> Hash {
    let mut h = Sha256::new();
    h.update([0x00]);
    h.update(bytes);
    Hash(h.finalize().into())
}

fn inner_hash(left: &Hash, right: &Hash) -> Hash {
    let mut h = Sha256::new();
    h.update([0x01]);
    h.update(left.0);
    h.update(right.0);
    Hash(h.finalize().into())
}

/// Simple Merkle root over `items` in order. Splits at the largest power
/// of two strictly below the item count; the empty tree hashes to
/// SHA-256 of nothing.
pub fn simple_hash_from_byte_vectors(items: &[impl AsRef<[u8]>]) -> Hash {
    match items.len() {
        0 => sha256(&[]),
        1 => leaf_hash(items[0].as_ref()),
        n => {
            let split = n.next_power_of_two() / 2;
            let left = simple_hash_from_byte_vectors(&items[..split]);
            let right = simple_hash_from_byte_vectors(&items[split..]);
            inner_hash(&left, &right)
        }
    }
}

pub fn compute_block_hash(header: &Header) -> Result<Hash, VarintError> {
    Ok(simple_hash_from_byte_vectors(&encode_header_fields(header)?))
}

pub fn compute_validator_set_hash(validators: &ValidatorSet) -> Result<Hash, VarintError> {
    let leaves = validators
        .iter()
        .map(encode_validator)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(simple_hash_from_byte_vectors(&leaves))
}
