use crate::types::serialization::CodecError;
use crate::types::varint::VarintError;
use crate::types::{Address, Hash};

/// Every way a verification call can reject its input. Verification fails
/// closed: any of these means the candidate state is not trusted.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("chain ids do not match: trusted {trusted}, untrusted {untrusted}")]
    ChainIdMismatch { trusted: String, untrusted: String },
    #[error("new state height {new} must be higher than old state height {old}")]
    NonIncreasingHeight { old: u64, new: u64 },
    #[error("validator set changed but no validator set was supplied")]
    MissingValidatorSet,
    #[error("commit does not match block hash: header {header}, commit {commit}")]
    HashMismatch { header: Hash, commit: Hash },
    #[error("precommit {slot} block id does not match commit")]
    PrecommitMismatch { slot: usize },
    #[error("precommit {slot} height {got} does not match header height {expected}")]
    HeightMismatch { slot: usize, expected: u64, got: u64 },
    #[error("precommit {slot} round {got} does not match commit round {expected}")]
    RoundMismatch { slot: usize, expected: u32, got: u32 },
    #[error("precommit {slot} has invalid vote type {tag}")]
    InvalidVoteType { slot: usize, tag: u8 },
    #[error("validator {validator_index} has multiple precommits")]
    DuplicateVote { validator_index: u32 },
    #[error("precommit {slot} does not match validator at index {validator_index}")]
    ValidatorMismatch { slot: usize, validator_index: u32 },
    #[error("invalid precommit signature from validator {validator}")]
    InvalidSignature { validator: Address },
    #[error("total voting power {total} exceeds maximum {max}")]
    VotingPowerOverflow { total: u64, max: u64 },
    #[error("not enough committed voting power: signed {signed}, required {required} of {total}")]
    InsufficientVotingPower { signed: u64, required: u64, total: u64 },
    #[error("validator address {stated} does not match pubkey (derived {derived})")]
    AddressMismatch { stated: Address, derived: Address },
    #[error("validator {address} has invalid voting power {power}")]
    InvalidVotingPower { address: Address, power: u64 },
    #[error("validator set hash {computed} does not match expected {expected}")]
    ValidatorSetHashMismatch { expected: Hash, computed: Hash },
    #[error("varint value {value} is out of bounds")]
    VarintOutOfBounds { value: i64 },
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl VerifyError {
    /// True when the commit was well formed but carried too little signed
    /// power; waiting for more precommits may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, VerifyError::InsufficientVotingPower { .. })
    }
}

impl From<VarintError> for VerifyError {
    fn from(e: VarintError) -> Self {
        match e {
            VarintError::OutOfBounds { value } => VerifyError::VarintOutOfBounds { value },
            VarintError::DecodeUnsupported => VerifyError::MalformedInput(e.to_string()),
        }
    }
}

impl From<CodecError> for VerifyError {
    fn from(e: CodecError) -> Self {
        VerifyError::MalformedInput(e.to_string())
    }
}
