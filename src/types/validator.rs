use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::crypto::hash::compute_validator_set_hash;
use crate::types::safe_int;
use crate::types::varint::VarintError;
use crate::types::{Address, Hash, PublicKey};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    pub address: Address,
    pub pub_key: PublicKey,
    #[serde(with = "safe_int::as_u64")]
    pub voting_power: u64,
    // proposer priority bookkeeping; not read by verification
    #[serde(with = "safe_int::as_i64", default)]
    pub accum: i64,
}

impl Validator {
    /// Builds a validator whose address is derived from `pub_key`.
    pub fn new(pub_key: PublicKey, voting_power: u64) -> Self {
        Self {
            address: Address::from_pub_key(&pub_key),
            pub_key,
            voting_power,
            accum: 0,
        }
    }
}

/// Ordered validator list. Position matters: a precommit's
/// `validator_index` points into it and the set hash is order-sensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidatorSet {
    validators: Vec<Validator>,
}

impl ValidatorSet {
    pub fn new(validators: Vec<Validator>) -> Self {
        Self { validators }
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Validator> {
        self.validators.get(index)
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    pub fn iter(&self) -> impl Iterator<Item = &Validator> {
        self.validators.iter()
    }

    /// Sum of all voting power; saturates instead of wrapping so an
    /// oversized set still trips the aggregate bound.
    pub fn total_power(&self) -> u64 {
        self.validators
            .iter()
            .fold(0u64, |total, v| total.saturating_add(v.voting_power))
    }

    pub fn by_address(&self) -> HashMap<Address, &Validator> {
        self.validators.iter().map(|v| (v.address, v)).collect()
    }

    pub fn compute_hash(&self) -> Result<Hash, VarintError> {
        compute_validator_set_hash(self)
    }
}

impl From<Vec<Validator>> for ValidatorSet {
    fn from(validators: Vec<Validator>) -> Self {
        Self::new(validators)
    }
}
