use crate::types::{
    block::{BlockId, Header, PartSetHeader},
    hash::Hash,
    safe_int::to_safe_i64,
    timestamp::Timestamp,
    validator::Validator,
    varint::{VarBuffer, VarInt, VarintError},
    vote::{Vote, VoteType},
};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid {what} length: expected {expected}, got {got}")]
    InvalidLength { what: &'static str, expected: usize, got: usize },
    #[error("unsupported key type {0}")]
    UnsupportedKeyType(String),
    #[error("value {0} is not a safe integer")]
    UnsafeInteger(String),
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("invalid json: {0}")]
    Json(String),
    #[error("invalid data: {0}")]
    Invalid(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
enum WireType {
    Varint = 0,
    Fixed64 = 1,
    Bytes = 2,
}

/// Field-tagged binary writer. Keys are unsigned varints of
/// `field << 3 | wire_type`; zero values and empty byte strings are
/// omitted so the output is canonical.
pub struct Encoder {
    buf: Vec<u8>,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn put_key(&mut self, field: u32, wire: WireType) -> Result<(), VarintError> {
        let key = (i64::from(field) << 3) | wire as i64;
        VarInt::UNSIGNED.encode_into(key, &mut self.buf)?;
        Ok(())
    }

    pub fn put_uvarint(&mut self, field: u32, v: i64) -> Result<(), VarintError> {
        if v == 0 {
            return Ok(());
        }
        self.put_key(field, WireType::Varint)?;
        VarInt::UNSIGNED.encode_into(v, &mut self.buf)?;
        Ok(())
    }

    pub fn put_varint(&mut self, field: u32, v: i64) -> Result<(), VarintError> {
        if v == 0 {
            return Ok(());
        }
        self.put_key(field, WireType::Varint)?;
        VarInt::SIGNED.encode_into(v, &mut self.buf)?;
        Ok(())
    }

    pub fn put_fixed64(&mut self, field: u32, v: i64) -> Result<(), VarintError> {
        if v == 0 {
            return Ok(());
        }
        self.put_key(field, WireType::Fixed64)?;
        self.buf.extend_from_slice(&v.to_le_bytes());
        Ok(())
    }

    pub fn put_bytes(&mut self, field: u32, data: &[u8]) -> Result<(), VarintError> {
        if data.is_empty() {
            return Ok(());
        }
        self.put_key(field, WireType::Bytes)?;
        VarBuffer::encode_into(data, &mut self.buf)?;
        Ok(())
    }

    pub fn put_str(&mut self, field: u32, s: &str) -> Result<(), VarintError> {
        self.put_bytes(field, s.as_bytes())
    }

    pub fn put_hash(&mut self, field: u32, h: &Hash) -> Result<(), VarintError> {
        if h.is_zero() {
            return Ok(());
        }
        self.put_bytes(field, h.as_bytes())
    }

    /// Embedded message, already encoded; empty messages are omitted.
    pub fn put_message(&mut self, field: u32, encoded: &[u8]) -> Result<(), VarintError> {
        self.put_bytes(field, encoded)
    }
}

// ---- Canonical vote ----

/// The record a validator signs for a vote: the vote with integer fields
/// normalized and the chain id of the header being verified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalVote {
    pub vote_type: VoteType,
    pub height: i64,
    pub round: i64,
    pub timestamp: Timestamp,
    pub block_id: BlockId,
    pub chain_id: String,
}

impl CanonicalVote {
    pub fn new(chain_id: &str, vote: &Vote) -> Result<Self, CodecError> {
        Ok(Self {
            vote_type: vote.vote_type,
            height: to_safe_i64(vote.height)?,
            round: i64::from(vote.round),
            timestamp: vote.timestamp,
            block_id: vote.block_id,
            chain_id: chain_id.to_string(),
        })
    }
}

pub fn encode_canonical_vote(v: &CanonicalVote) -> Result<Vec<u8>, VarintError> {
    let mut e = Encoder::new();
    e.put_uvarint(1, i64::from(v.vote_type.tag()))?;
    e.put_fixed64(2, v.height)?;
    e.put_fixed64(3, v.round)?;
    e.put_message(4, &encode_timestamp(&v.timestamp)?)?;
    e.put_message(5, &encode_block_id(&v.block_id)?)?;
    e.put_str(6, &v.chain_id)?;
    Ok(e.into_bytes())
}

pub fn encode_timestamp(t: &Timestamp) -> Result<Vec<u8>, VarintError> {
    let mut e = Encoder::new();
    e.put_varint(1, t.seconds)?;
    e.put_uvarint(2, i64::from(t.nanos))?;
    Ok(e.into_bytes())
}

pub fn encode_part_set_header(p: &PartSetHeader) -> Result<Vec<u8>, VarintError> {
    let mut e = Encoder::new();
    e.put_varint(1, i64::from(p.total))?;
    e.put_hash(2, &p.hash)?;
    Ok(e.into_bytes())
}

pub fn encode_block_id(b: &BlockId) -> Result<Vec<u8>, VarintError> {
    let mut e = Encoder::new();
    e.put_hash(1, &b.hash)?;
    e.put_message(2, &encode_part_set_header(&b.parts)?)?;
    Ok(e.into_bytes())
}

// ---- Header ----

fn safe_u64(n: u64) -> Result<i64, VarintError> {
    to_safe_i64(n).map_err(|_| VarintError::OutOfBounds { value: i64::try_from(n).unwrap_or(i64::MAX) })
}

/// Per-field encodings of a header, in declaration order. These are the
/// leaves of the header's Merkle hash.
pub fn encode_header_fields(h: &Header) -> Result<Vec<Vec<u8>>, VarintError> {
    let mut version = Encoder::new();
    version.put_uvarint(1, safe_u64(h.version.block)?)?;
    version.put_uvarint(2, safe_u64(h.version.app)?)?;

    Ok(vec![
        version.into_bytes(),
        VarBuffer::encode(h.chain_id.as_bytes())?,
        VarInt::SIGNED.encode(safe_u64(h.height)?)?,
        encode_timestamp(&h.time)?,
        VarInt::SIGNED.encode(safe_u64(h.num_txs)?)?,
        VarInt::SIGNED.encode(safe_u64(h.total_txs)?)?,
        encode_block_id(&h.last_block_id)?,
        encode_hash_leaf(&h.last_commit_hash)?,
        encode_hash_leaf(&h.data_hash)?,
        encode_hash_leaf(&h.validators_hash)?,
        encode_hash_leaf(&h.next_validators_hash)?,
        encode_hash_leaf(&h.consensus_hash)?,
        encode_hash_leaf(&h.app_hash)?,
        encode_hash_leaf(&h.last_results_hash)?,
        encode_hash_leaf(&h.evidence_hash)?,
        VarBuffer::encode(&h.proposer_address.0)?,
    ])
}

fn encode_hash_leaf(h: &Hash) -> Result<Vec<u8>, VarintError> {
    if h.is_zero() {
        return VarBuffer::encode(&[]);
    }
    VarBuffer::encode(h.as_bytes())
}

// ---- Validator ----

/// Leaf encoding of a validator inside the set hash: key and power only.
pub fn encode_validator(v: &Validator) -> Result<Vec<u8>, VarintError> {
    let mut e = Encoder::new();
    e.put_bytes(1, v.pub_key.as_bytes())?;
    e.put_uvarint(2, safe_u64(v.voting_power)?)?;
    Ok(e.into_bytes())
}
