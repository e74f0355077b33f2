// wallet-keypair/src/crypto/mod.rs

//! Cryptographic Primitives
//!
//! Thin adapters over the external crates the key pair logic depends on:
//!
//! - **Curve**: secp256k1 group order, `d · G`, SEC1 point encoding via [`Secp256k1Curve`] (`k256`).
//! - **Hashing**: SHA-256, double SHA-256 and HASH160 (`sha2`, `ripemd`).
//! - **Base58Check**: checksummed base58 text encoding via [`Base58Check`] (`bs58`).

pub mod base58check;
pub mod curve;
pub mod hash;

// Re-exports for cleaner API access
pub use base58check::Base58Check;
pub use curve::{Secp256k1Curve, CURVE_HALF_ORDER, CURVE_ORDER};
