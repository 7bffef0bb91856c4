use serde::{Deserialize, Serialize};

use crate::types::serialization::CodecError;
use crate::types::{Commit, Header, ValidatorSet};

/// A header with the commit that finalized it and, when known, the
/// validator set that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainState {
    pub header: Header,
    pub commit: Commit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validators: Option<ValidatorSet>,
}

impl ChainState {
    pub fn new(header: Header, commit: Commit, validators: Option<ValidatorSet>) -> Self {
        Self { header, commit, validators }
    }

    /// Decodes a state from RPC-shaped JSON.
    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        serde_json::from_str(json).map_err(|e| CodecError::Json(e.to_string()))
    }

    pub fn height(&self) -> u64 {
        self.header.height
    }
}
