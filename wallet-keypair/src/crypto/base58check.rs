// wallet-keypair/src/crypto/base58check.rs
//
// Base58Check = base58(payload ++ SHA256(SHA256(payload))[..4])

use crate::crypto::hash::sha256d;
use crate::error::{EncodingError, WalletResult};
use k256::elliptic_curve::subtle::ConstantTimeEq;

const CHECKSUM_LEN: usize = 4;
/// WIF / address dài tối đa ~52 ký tự; bs58 decode tốn O(n²)
pub const MAX_ENCODED_LEN: usize = 128;

/// Base58Check codec (Bitcoin alphabet)
pub struct Base58Check;

impl Base58Check {
    pub fn encode(payload: &[u8]) -> String {
        let checksum = sha256d(payload);
        let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
        data.extend_from_slice(payload);
        data.extend_from_slice(&checksum[..CHECKSUM_LEN]);
        bs58::encode(data).into_string()
    }

    /// Decode và verify checksum, trả về payload (không gồm checksum)
    pub fn decode(encoded: &str) -> WalletResult<Vec<u8>> {
        if encoded.len() > MAX_ENCODED_LEN {
            return Err(EncodingError::InvalidBase58(format!(
                "input too long: {} chars (max {})",
                encoded.len(),
                MAX_ENCODED_LEN
            ))
            .into());
        }

        let mut data = bs58::decode(encoded)
            .into_vec()
            .map_err(|e| EncodingError::InvalidBase58(e.to_string()))?;

        if data.len() <= CHECKSUM_LEN {
            return Err(EncodingError::TooShort(data.len()).into());
        }

        let split = data.len() - CHECKSUM_LEN;
        let expected = sha256d(&data[..split]);
        if !bool::from(data[split..].ct_eq(&expected[..CHECKSUM_LEN])) {
            return Err(EncodingError::InvalidChecksum.into());
        }

        data.truncate(split);
        Ok(data)
    }
}
