use std::collections::HashSet;

use tracing::{debug, warn};

use crate::crypto::ed25519;
use crate::types::{Commit, Header, ValidatorSet, VoteType};
use crate::verifier::{get_vote_sign_bytes, Verifier, VerifyError, VotingPowerTally};

impl Verifier {
    /// Checks that `commit` finalizes `header` and is signed by 2/3+ of
    /// `validators`' voting power.
    pub fn verify_commit(
        &self,
        header: &Header,
        commit: &Commit,
        validators: &ValidatorSet,
    ) -> Result<VotingPowerTally, VerifyError> {
        let result = self.check_commit(header, commit, validators);
        if let Err(err) = &result {
            warn!(height = header.height, error = %err, "commit rejected");
        }
        result
    }

    /// Verifies the signatures of every precommit cast by a member of
    /// `validators` and requires 2/3+ of the set's power to have signed.
    ///
    /// Precommits from validators outside the set are skipped: during a
    /// transition the same commit is checked against both the old and the
    /// new set.
    pub fn verify_commit_sigs(
        &self,
        header: &Header,
        commit: &Commit,
        validators: &ValidatorSet,
    ) -> Result<VotingPowerTally, VerifyError> {
        let result = self.check_commit_sigs(header, commit, validators);
        if let Err(err) = &result {
            warn!(height = header.height, error = %err, "commit signatures rejected");
        }
        result
    }

    pub(crate) fn check_commit(
        &self,
        header: &Header,
        commit: &Commit,
        validators: &ValidatorSet,
    ) -> Result<VotingPowerTally, VerifyError> {
        self.check_set_size(validators)?;

        let block_hash = header.hash()?;
        if block_hash != commit.block_id.hash {
            return Err(VerifyError::HashMismatch {
                header: block_hash,
                commit: commit.block_id.hash,
            });
        }

        // one flag per validator position, scoped to this call
        let mut counted = vec![false; validators.len()];
        let mut commit_round: Option<u32> = None;

        for (slot, precommit) in commit.present() {
            if precommit.block_id != commit.block_id {
                return Err(VerifyError::PrecommitMismatch { slot });
            }

            if precommit.height != header.height {
                return Err(VerifyError::HeightMismatch {
                    slot,
                    expected: header.height,
                    got: precommit.height,
                });
            }

            match commit_round {
                None => commit_round = Some(precommit.round),
                Some(round) if round != precommit.round => {
                    return Err(VerifyError::RoundMismatch {
                        slot,
                        expected: round,
                        got: precommit.round,
                    });
                }
                Some(_) => {}
            }

            if precommit.vote_type != VoteType::Precommit {
                return Err(VerifyError::InvalidVoteType {
                    slot,
                    tag: precommit.vote_type.tag(),
                });
            }

            let index = precommit.validator_index as usize;
            if let Some(seen) = counted.get_mut(index) {
                if *seen {
                    return Err(VerifyError::DuplicateVote {
                        validator_index: precommit.validator_index,
                    });
                }
                *seen = true;
            }

            match validators.get(index) {
                Some(v) if v.address == precommit.validator_address => {}
                _ => {
                    return Err(VerifyError::ValidatorMismatch {
                        slot,
                        validator_index: precommit.validator_index,
                    });
                }
            }
        }

        debug!(
            height = header.height,
            round = ?commit_round,
            precommits = commit.present().count(),
            "commit structure verified"
        );

        self.check_commit_sigs(header, commit, validators)
    }

    pub(crate) fn check_commit_sigs(
        &self,
        header: &Header,
        commit: &Commit,
        validators: &ValidatorSet,
    ) -> Result<VotingPowerTally, VerifyError> {
        self.check_set_size(validators)?;

        let by_address = validators.by_address();
        let mut signed_power = 0u64;
        let mut tallied = HashSet::new();

        for (_, precommit) in commit.present() {
            let Some(validator) = by_address.get(&precommit.validator_address) else {
                continue;
            };

            // the index checks in check_commit do not run when the commit
            // is tallied against a different set
            if !tallied.insert(validator.address) {
                return Err(VerifyError::DuplicateVote {
                    validator_index: precommit.validator_index,
                });
            }

            let sign_bytes = get_vote_sign_bytes(&header.chain_id, precommit)?;
            let invalid = || VerifyError::InvalidSignature {
                validator: validator.address,
            };
            let vk = validator.pub_key.verifying_key().map_err(|_| invalid())?;
            if !ed25519::verify(&vk, &sign_bytes, precommit.signature.as_bytes()) {
                return Err(invalid());
            }

            signed_power = signed_power.saturating_add(validator.voting_power);
        }

        let total = validators.total_power();
        if total > self.config.max_total_voting_power {
            return Err(VerifyError::VotingPowerOverflow {
                total,
                max: self.config.max_total_voting_power,
            });
        }

        let mut tally = VotingPowerTally::new(total);
        tally.tally(signed_power);
        debug!(
            height = header.height,
            signed = tally.signed,
            total = tally.total,
            threshold = tally.threshold,
            "commit signatures tallied"
        );

        if !tally.has_quorum() {
            return Err(VerifyError::InsufficientVotingPower {
                signed: tally.signed,
                required: tally.threshold,
                total: tally.total,
            });
        }
        Ok(tally)
    }
}
