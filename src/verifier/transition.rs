use tracing::{debug, info, warn};

use crate::types::ChainState;
use crate::verifier::{Verifier, VerifyError};

impl Verifier {
    /// Verifies that `new` may be trusted given the already trusted `old`.
    ///
    /// Intermediate headers are not needed: when the validator set changed,
    /// either `old` announced the new set through `next_validators_hash`, or
    /// the new commit must also carry 2/3+ of the old set's power.
    pub fn verify(&self, old: &ChainState, new: &ChainState) -> Result<(), VerifyError> {
        let result = self.verify_transition(old, new);
        match &result {
            Ok(()) => info!(
                chain_id = %new.header.chain_id,
                from = old.header.height,
                to = new.header.height,
                "state transition verified"
            ),
            Err(err) => warn!(
                chain_id = %new.header.chain_id,
                from = old.header.height,
                to = new.header.height,
                error = %err,
                "state transition rejected"
            ),
        }
        result
    }

    fn verify_transition(&self, old: &ChainState, new: &ChainState) -> Result<(), VerifyError> {
        let old_header = &old.header;
        let new_header = &new.header;

        if new_header.chain_id != old_header.chain_id {
            return Err(VerifyError::ChainIdMismatch {
                trusted: old_header.chain_id.clone(),
                untrusted: new_header.chain_id.clone(),
            });
        }
        if new_header.height <= old_header.height {
            return Err(VerifyError::NonIncreasingHeight {
                old: old_header.height,
                new: new_header.height,
            });
        }

        let set_changed = new_header.validators_hash != old_header.validators_hash;
        let active = if set_changed {
            new.validators.as_ref()
        } else {
            old.validators.as_ref()
        }
        .ok_or(VerifyError::MissingValidatorSet)?;

        self.check_commit(new_header, &new.commit, active)?;

        if !set_changed {
            return Ok(());
        }

        self.check_validator_set(active, Some(&new_header.validators_hash))?;

        if self.config.allow_trust_skip && old_header.next_validators_hash == new_header.validators_hash {
            debug!(height = new_header.height, "validator set pre-announced by trusted header");
            return Ok(());
        }

        let old_validators = old.validators.as_ref().ok_or(VerifyError::MissingValidatorSet)?;
        let tally = self.check_commit_sigs(new_header, &new.commit, old_validators)?;
        debug!(height = new_header.height, %tally, "validator set change bridged by trusted set");
        Ok(())
    }
}
