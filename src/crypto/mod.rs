pub mod ed25519;
pub mod hash;
