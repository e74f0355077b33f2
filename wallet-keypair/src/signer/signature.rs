// wallet-keypair/src/signer/signature.rs
//
// ECDSA Signature - compact `r ‖ s` (64 bytes), DER khi cần serialize ra ngoài

use crate::crypto::CURVE_HALF_ORDER;
use crate::error::{SignatureError, WalletResult};
use k256::ecdsa::Signature as K256Signature;

/// secp256k1 ECDSA signature, independent of which backend produced it
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; 64]);

impl Signature {
    /// Parse compact 64-byte `r ‖ s`
    ///
    /// Chỉ kiểm tra độ dài; r/s ngoài range sẽ bị verifier từ chối.
    pub fn from_compact(bytes: &[u8]) -> WalletResult<Self> {
        let compact: [u8; 64] = bytes.try_into().map_err(|_| {
            SignatureError::InvalidSignature(format!(
                "compact signature must be 64 bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(compact))
    }

    pub fn from_der(der: &[u8]) -> WalletResult<Self> {
        K256Signature::from_der(der)
            .map(Self::from)
            .map_err(|e| SignatureError::InvalidSignature(e.to_string()).into())
    }

    #[inline]
    pub fn to_compact(&self) -> [u8; 64] {
        self.0
    }

    pub fn to_der(&self) -> WalletResult<Vec<u8>> {
        let signature = K256Signature::from_slice(&self.0)
            .map_err(|e| SignatureError::InvalidSignature(e.to_string()))?;
        Ok(signature.to_der().as_bytes().to_vec())
    }

    #[inline]
    pub fn r(&self) -> &[u8] {
        &self.0[..32]
    }

    #[inline]
    pub fn s(&self) -> &[u8] {
        &self.0[32..]
    }

    /// `s <= n/2` (BIP-62 canonical form)
    pub fn is_low_s(&self) -> bool {
        self.s() <= &CURVE_HALF_ORDER[..]
    }
}

impl From<K256Signature> for Signature {
    fn from(signature: K256Signature) -> Self {
        let mut compact = [0u8; 64];
        compact.copy_from_slice(&signature.to_bytes());
        Self(compact)
    }
}

impl From<secp256k1::ecdsa::Signature> for Signature {
    fn from(signature: secp256k1::ecdsa::Signature) -> Self {
        Self(signature.serialize_compact())
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature({})", hex::encode(self.0))
    }
}
