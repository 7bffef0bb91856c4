use ed25519_dalek::SigningKey;

use crate::crypto::ed25519;
use crate::types::serialization::{encode_canonical_vote, CanonicalVote};
use crate::types::{Signature, VarBuffer, Vote};
use crate::verifier::VerifyError;

/// Bytes a validator signs for `vote` on chain `chain_id`: the canonical
/// vote encoding behind an unsigned-varint length prefix.
pub fn get_vote_sign_bytes(chain_id: &str, vote: &Vote) -> Result<Vec<u8>, VerifyError> {
    let canonical = CanonicalVote::new(chain_id, vote)?;
    let encoded = encode_canonical_vote(&canonical)?;
    Ok(VarBuffer::encode(&encoded)?)
}

/// Fills in `vote.signature` with `key`'s signature over its sign bytes.
pub fn sign_vote(chain_id: &str, vote: &mut Vote, key: &SigningKey) -> Result<(), VerifyError> {
    let sign_bytes = get_vote_sign_bytes(chain_id, vote)?;
    vote.signature = Signature(ed25519::sign(key, &sign_bytes));
    Ok(())
}
