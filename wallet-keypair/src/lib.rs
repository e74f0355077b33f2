// wallet-keypair/src/lib.rs

//! secp256k1 key pairs for Bitcoin-style networks
//!
//! Private/public key pairs with compression and network metadata, WIF
//! import/export, rejection-sampled random keys, P2PKH addresses, and ECDSA
//! signing over a libsecp256k1 fast path with a pure-Rust `k256` fallback.

pub mod address;
pub mod api;
pub mod crypto;
pub mod error;
pub mod keys;
pub mod network;
pub mod signer;

pub use address::P2pkhAddress;
pub use error::{EncodingError, KeyError, SignatureError, WalletError, WalletResult, WifError};
pub use keys::{KeyMaterial, KeyPair, KeyPairOptions, PrivateScalar, RandomKeyGenerator, WifCodec};
pub use network::{NetworkParams, NetworkRegistry};
pub use signer::{Attempt, SignDispatcher, Signature};
