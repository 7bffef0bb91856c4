//! Light-client verification: commits, validator sets and trusted-state
//! transitions.
//!
//! Structural checks always run before any signature is verified so that
//! malformed input is rejected before the expensive public-key work.

pub mod errors;
pub mod commit;
pub mod validator_set;
pub mod sign_bytes;
pub mod transition;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::VerifierSection;
use crate::types::{ChainState, Commit, Hash, Header, ValidatorSet};

pub use errors::VerifyError;
pub use sign_bytes::{get_vote_sign_bytes, sign_vote};
pub use validator_set::ValidatedSet;

/// Outcome of a successful signature tally.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingPowerTally {
    /// Total voting power of the set the commit was checked against.
    pub total: u64,
    /// Power of members whose signatures verified.
    pub signed: u64,
    /// `ceil(total * 2 / 3)`.
    pub threshold: u64,
}

impl VotingPowerTally {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            signed: 0,
            threshold: two_thirds_ceil(total),
        }
    }

    fn tally(&mut self, power: u64) {
        self.signed = self.signed.saturating_add(power);
    }

    pub fn has_quorum(&self) -> bool {
        self.signed >= self.threshold
    }
}

impl fmt::Display for VotingPowerTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VotingPower(total={} signed={} threshold={})",
            self.total, self.signed, self.threshold
        )
    }
}

pub fn two_thirds_ceil(total: u64) -> u64 {
    let doubled = u128::from(total) * 2;
    doubled.div_ceil(3) as u64
}

/// Stateless verifier carrying its policy. Safe to share across threads;
/// every call is independent.
#[derive(Clone, Debug, Default)]
pub struct Verifier {
    config: VerifierSection,
}

impl Verifier {
    pub fn new(config: VerifierSection) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerifierSection {
        &self.config
    }

    fn check_set_size(&self, validators: &ValidatorSet) -> Result<(), VerifyError> {
        if validators.len() > self.config.max_validators {
            return Err(VerifyError::MalformedInput(format!(
                "validator set has {} members, limit is {}",
                validators.len(),
                self.config.max_validators
            )));
        }
        Ok(())
    }
}

/// Verifies the transition from `old` to `new` with the default policy.
pub fn verify(old: &ChainState, new: &ChainState) -> Result<(), VerifyError> {
    Verifier::default().verify(old, new)
}

pub fn verify_commit(
    header: &Header,
    commit: &Commit,
    validators: &ValidatorSet,
) -> Result<VotingPowerTally, VerifyError> {
    Verifier::default().verify_commit(header, commit, validators)
}

pub fn verify_commit_sigs(
    header: &Header,
    commit: &Commit,
    validators: &ValidatorSet,
) -> Result<VotingPowerTally, VerifyError> {
    Verifier::default().verify_commit_sigs(header, commit, validators)
}

pub fn verify_validator_set(
    validators: &ValidatorSet,
    expected_hash: Option<&Hash>,
) -> Result<ValidatedSet, VerifyError> {
    Verifier::default().verify_validator_set(validators, expected_hash)
}
