pub mod hash;
pub mod address;
pub mod keys;
pub mod safe_int;
pub mod timestamp;
pub mod varint;
pub mod vote;
pub mod block;
pub mod validator;
pub mod state;
pub mod serialization;

pub use hash::Hash;
pub use address::{derive_address, Address};
pub use keys::{PublicKey, Signature};
pub use timestamp::Timestamp;
pub use varint::{VarBuffer, VarInt, VarintError};
pub use vote::{Vote, VoteType};
pub use block::{BlockId, Commit, Header, PartSetHeader, Version};
pub use validator::{Validator, ValidatorSet};
pub use state::ChainState;
pub use serialization::CodecError;
