//! Trust-verification core of a BFT light client.
//!
//! Given a trusted [`ChainState`] and a candidate one, [`verify`] decides
//! whether the candidate may be trusted without downloading the headers in
//! between. The finer-grained checks ([`verify_commit`],
//! [`verify_commit_sigs`], [`verify_validator_set`],
//! [`get_vote_sign_bytes`]) are exposed for callers that need them on their
//! own.

pub mod config;
pub mod crypto;
pub mod types;
pub mod verifier;

pub use config::{LiteConfig, VerifierSection};
pub use types::ChainState;
pub use verifier::{
    get_vote_sign_bytes, sign_vote, verify, verify_commit, verify_commit_sigs, verify_validator_set,
    ValidatedSet, Verifier, VerifyError, VotingPowerTally,
};
