// wallet-keypair/src/crypto/curve.rs
//
// secp256k1 Curve Adapter
//
// Toàn bộ arithmetic (scalar · G, SEC1 encode/decode) nằm trong `k256`.
// Module này chỉ expose các constant và thao tác mà KeyPair cần.

use crate::error::{KeyError, WalletResult};
use k256::{elliptic_curve::sec1::ToEncodedPoint, PublicKey, SecretKey};

/// secp256k1 group order n (big-endian)
pub const CURVE_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// floor(n / 2), ngưỡng low-S của ECDSA signature
pub const CURVE_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// Compressed public key length (prefix 0x02/0x03 + x)
pub const COMPRESSED_PUBLIC_KEY_LEN: usize = 33;
/// Uncompressed public key length (prefix 0x04 + x + y)
pub const UNCOMPRESSED_PUBLIC_KEY_LEN: usize = 65;

pub struct Secp256k1Curve;

impl Secp256k1Curve {
    /// `value < n` (big-endian so sánh lexicographic = so sánh số)
    #[inline]
    pub fn is_below_order(value: &[u8; 32]) -> bool {
        value < &CURVE_ORDER
    }

    /// `1 <= value <= n-1`
    #[inline]
    pub fn is_valid_scalar(value: &[u8; 32]) -> bool {
        value.iter().any(|&b| b != 0) && Self::is_below_order(value)
    }

    /// scalar · G
    pub fn multiply_generator(scalar: &[u8; 32]) -> WalletResult<PublicKey> {
        let secret = SecretKey::from_slice(scalar).map_err(|_| KeyError::InvalidPrivateKey)?;
        Ok(secret.public_key())
    }

    /// SEC1 encoding: 33 bytes nếu compressed, 65 bytes nếu không
    pub fn encode_point(point: &PublicKey, compressed: bool) -> Vec<u8> {
        point.to_encoded_point(compressed).as_bytes().to_vec()
    }

    /// Parse SEC1 bytes (compressed hoặc uncompressed), reject identity
    ///
    /// Chỉ nhận `0x02`/`0x03` + 32 bytes hoặc `0x04` + 64 bytes.
    pub fn decode_point(bytes: &[u8]) -> WalletResult<PublicKey> {
        match (bytes.len(), bytes.first()) {
            (COMPRESSED_PUBLIC_KEY_LEN, Some(0x02 | 0x03)) => {}
            (UNCOMPRESSED_PUBLIC_KEY_LEN, Some(0x04)) => {}
            (COMPRESSED_PUBLIC_KEY_LEN | UNCOMPRESSED_PUBLIC_KEY_LEN, Some(tag)) => {
                return Err(KeyError::InvalidPublicKey(format!(
                    "invalid SEC1 tag 0x{:02x} for {}-byte key",
                    tag,
                    bytes.len()
                ))
                .into());
            }
            (len, _) => {
                return Err(KeyError::InvalidPublicKey(format!(
                    "expected 33 or 65 bytes, got {}",
                    len
                ))
                .into());
            }
        }

        PublicKey::from_sec1_bytes(bytes)
            .map_err(|e| KeyError::InvalidPublicKey(e.to_string()).into())
    }
}
