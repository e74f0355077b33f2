// wallet-keypair/src/crypto/hash.rs
//
// Hash primitives: SHA-256, double SHA-256, HASH160 (RIPEMD160(SHA256(x)))

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA256(SHA256(data)), dùng cho base58check checksum
#[inline]
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data)).into()
}

/// RIPEMD160(SHA256(data)): public key hash cho P2PKH address
#[inline]
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(Sha256::digest(data)).into()
}
