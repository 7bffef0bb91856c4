use serde::{Deserialize, Serialize};

use crate::types::safe_int;
use crate::types::{Address, BlockId, Signature, Timestamp};

/// Vote kind as tagged on the wire. Tags other than 1 and 2 decode to
/// `Unknown` so verification can reject them with the offending tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum VoteType {
    Prevote,
    Precommit,
    Unknown(u8),
}

impl VoteType {
    pub fn tag(self) -> u8 {
        match self {
            VoteType::Prevote => 1,
            VoteType::Precommit => 2,
            VoteType::Unknown(tag) => tag,
        }
    }
}

impl From<u8> for VoteType {
    fn from(tag: u8) -> Self {
        match tag {
            1 => VoteType::Prevote,
            2 => VoteType::Precommit,
            other => VoteType::Unknown(other),
        }
    }
}

impl From<VoteType> for u8 {
    fn from(t: VoteType) -> u8 {
        t.tag()
    }
}

/// A single validator's signed vote. Inside a commit every vote is expected
/// to be a precommit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub validator_address: Address,
    #[serde(with = "safe_int::as_u32")]
    pub validator_index: u32,
    #[serde(with = "safe_int::as_u64")]
    pub height: u64,
    #[serde(with = "safe_int::as_u32")]
    pub round: u32,
    pub timestamp: Timestamp,
    #[serde(rename = "type")]
    pub vote_type: VoteType,
    pub block_id: BlockId,
    pub signature: Signature,
}

impl Vote {
    /// Unsigned precommit for `block_id`; sign it with
    /// [`crate::verifier::sign_vote`].
    pub fn precommit(
        validator_address: Address,
        validator_index: u32,
        height: u64,
        round: u32,
        timestamp: Timestamp,
        block_id: BlockId,
    ) -> Self {
        Self {
            validator_address,
            validator_index,
            height,
            round,
            timestamp,
            vote_type: VoteType::Precommit,
            block_id,
            signature: Signature::EMPTY,
        }
    }
}
