use serde::{Deserialize, Serialize};

use crate::crypto::hash::compute_block_hash;
use crate::types::safe_int;
use crate::types::varint::VarintError;
use crate::types::{Address, Hash, Timestamp, Vote};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    #[serde(with = "safe_int::as_u64")]
    pub block: u64,
    #[serde(with = "safe_int::as_u64")]
    pub app: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartSetHeader {
    #[serde(with = "safe_int::as_u32")]
    pub total: u32,
    pub hash: Hash,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockId {
    pub hash: Hash,
    pub parts: PartSetHeader,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub version: Version,
    pub chain_id: String,
    #[serde(with = "safe_int::as_u64")]
    pub height: u64,
    pub time: Timestamp,
    #[serde(with = "safe_int::as_u64", default)]
    pub num_txs: u64,
    #[serde(with = "safe_int::as_u64", default)]
    pub total_txs: u64,
    #[serde(default)]
    pub last_block_id: BlockId,
    #[serde(default)]
    pub last_commit_hash: Hash,
    #[serde(default)]
    pub data_hash: Hash,
    pub validators_hash: Hash,
    pub next_validators_hash: Hash,
    #[serde(default)]
    pub consensus_hash: Hash,
    #[serde(default)]
    pub app_hash: Hash,
    #[serde(default)]
    pub last_results_hash: Hash,
    #[serde(default)]
    pub evidence_hash: Hash,
    pub proposer_address: Address,
}

impl Header {
    /// Content hash of the header; this is the block hash a commit signs.
    pub fn hash(&self) -> Result<Hash, VarintError> {
        compute_block_hash(self)
    }
}

/// Precommits claimed to finalize `block_id`, one slot per validator
/// index. `None` marks a validator that did not vote.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub block_id: BlockId,
    pub precommits: Vec<Option<Vote>>,
}

impl Commit {
    pub fn new(block_id: BlockId, precommits: Vec<Option<Vote>>) -> Self {
        Self { block_id, precommits }
    }

    pub fn present(&self) -> impl Iterator<Item = (usize, &Vote)> {
        self.precommits
            .iter()
            .enumerate()
            .filter_map(|(slot, p)| p.as_ref().map(|v| (slot, v)))
    }
}
