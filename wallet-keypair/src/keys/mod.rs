// wallet-keypair/src/keys/mod.rs

//! Key Pair Module
//!
//! - **KeyPair**: full or watch-only secp256k1 key pair with network/compression metadata via [`KeyPair`].
//! - **WIF**: Wallet Import Format encode/decode via [`WifCodec`].
//! - **Random generation**: rejection sampling over `[1, n-1]` via [`RandomKeyGenerator`].

pub mod keypair;
pub mod random;
pub mod scalar;
pub mod wif;

// Re-exports for cleaner API access
pub use keypair::{KeyMaterial, KeyPair, KeyPairOptions};
pub use random::{RandomKeyGenerator, DEFAULT_MAX_ATTEMPTS};
pub use scalar::PrivateScalar;
pub use wif::WifCodec;
