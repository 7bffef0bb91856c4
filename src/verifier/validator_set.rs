use tracing::{debug, warn};

use crate::types::safe_int::MAX_SAFE_INTEGER;
use crate::types::{Address, Hash, ValidatorSet};
use crate::verifier::{Verifier, VerifyError};

/// A validator set that passed [`Verifier::verify_validator_set`], together
/// with its computed hash. The input set is left untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedSet {
    validators: ValidatorSet,
    hash: Hash,
}

impl ValidatedSet {
    pub fn validators(&self) -> &ValidatorSet {
        &self.validators
    }

    pub fn hash(&self) -> Hash {
        self.hash
    }

    pub fn into_inner(self) -> ValidatorSet {
        self.validators
    }
}

impl Verifier {
    /// Checks every validator's address against its key and its voting
    /// power against the safe-integer bound, then the set hash against
    /// `expected_hash` when one is given.
    pub fn verify_validator_set(
        &self,
        validators: &ValidatorSet,
        expected_hash: Option<&Hash>,
    ) -> Result<ValidatedSet, VerifyError> {
        let result = self.check_validator_set(validators, expected_hash);
        if let Err(err) = &result {
            warn!(validators = validators.len(), error = %err, "validator set rejected");
        }
        result
    }

    pub(crate) fn check_validator_set(
        &self,
        validators: &ValidatorSet,
        expected_hash: Option<&Hash>,
    ) -> Result<ValidatedSet, VerifyError> {
        self.check_set_size(validators)?;

        for validator in validators.iter() {
            let derived = Address::from_pub_key(&validator.pub_key);
            if derived != validator.address {
                return Err(VerifyError::AddressMismatch {
                    stated: validator.address,
                    derived,
                });
            }

            if validator.voting_power == 0 || validator.voting_power > MAX_SAFE_INTEGER {
                return Err(VerifyError::InvalidVotingPower {
                    address: validator.address,
                    power: validator.voting_power,
                });
            }
        }

        let computed = validators.compute_hash()?;
        if let Some(expected) = expected_hash {
            if computed != *expected {
                return Err(VerifyError::ValidatorSetHashMismatch {
                    expected: *expected,
                    computed,
                });
            }
        }

        debug!(validators = validators.len(), hash = %computed, "validator set verified");
        Ok(ValidatedSet {
            validators: validators.clone(),
            hash: computed,
        })
    }
}
