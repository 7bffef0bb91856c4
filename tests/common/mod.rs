#![allow(dead_code)]

use ed25519_dalek::SigningKey;

use lite_client::crypto::ed25519::keypair_from_seed;
use lite_client::crypto::hash::sha256;
use lite_client::sign_vote;
use lite_client::types::*;

pub const CHAIN_ID: &str = "test-chain";

pub struct Fixture {
    pub keys: Vec<SigningKey>,
    pub vset: ValidatorSet,
}

/// `n` validators with deterministic keys derived from `group`.
pub fn make_validators(group: u8, n: usize, power: u64) -> Fixture {
    let mut keys = Vec::with_capacity(n);
    let mut validators = Vec::with_capacity(n);
    for i in 0..n {
        let mut seed = [group; 32];
        seed[1] = i as u8;
        seed[2] = (i >> 8) as u8;
        let (sk, vk) = keypair_from_seed(&seed);
        validators.push(Validator::new(PublicKey::from(vk), power));
        keys.push(sk);
    }
    Fixture { keys, vset: ValidatorSet::new(validators) }
}

pub fn make_header(chain_id: &str, height: u64, vset: &ValidatorSet, next: &ValidatorSet) -> Header {
    Header {
        version: Version { block: 10, app: 1 },
        chain_id: chain_id.to_string(),
        height,
        time: Timestamp::from_unix(1_700_000_000 + height as i64, 0),
        num_txs: 0,
        total_txs: 0,
        last_block_id: BlockId::default(),
        last_commit_hash: Hash::ZERO,
        data_hash: Hash::ZERO,
        validators_hash: vset.compute_hash().unwrap(),
        next_validators_hash: next.compute_hash().unwrap(),
        consensus_hash: sha256(b"consensus"),
        app_hash: Hash::ZERO,
        last_results_hash: Hash::ZERO,
        evidence_hash: Hash::ZERO,
        proposer_address: Address([7u8; 20]),
    }
}

pub fn block_id_for(header: &Header) -> BlockId {
    BlockId {
        hash: header.hash().unwrap(),
        parts: PartSetHeader { total: 1, hash: sha256(b"parts") },
    }
}

/// Commit over `header` with one slot per validator in `fx`; the first
/// `signers` validators sign, the rest are absent.
pub fn make_commit(header: &Header, fx: &Fixture, signers: usize) -> Commit {
    make_commit_on(header.chain_id.as_str(), header, fx, signers)
}

/// Like [`make_commit`] but signs under `chain_id`.
pub fn make_commit_on(chain_id: &str, header: &Header, fx: &Fixture, signers: usize) -> Commit {
    let block_id = block_id_for(header);
    let precommits = fx
        .vset
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if i >= signers {
                return None;
            }
            let mut vote = Vote::precommit(
                v.address,
                i as u32,
                header.height,
                0,
                Timestamp::from_unix(header.time.seconds + 1, i as u32 * 1000),
                block_id,
            );
            sign_vote(chain_id, &mut vote, &fx.keys[i]).unwrap();
            Some(vote)
        })
        .collect();
    Commit::new(block_id, precommits)
}

pub fn make_state(header: Header, fx: &Fixture, signers: usize, with_validators: bool) -> ChainState {
    let commit = make_commit(&header, fx, signers);
    let validators = with_validators.then(|| fx.vset.clone());
    ChainState::new(header, commit, validators)
}
