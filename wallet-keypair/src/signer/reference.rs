// wallet-keypair/src/signer/reference.rs
//
// Reference backend: k256 (pure Rust), RFC 6979 deterministic nonce

use crate::error::{SignatureError, WalletResult};
use crate::keys::PrivateScalar;
use crate::signer::backend::ReferenceBackend;
use crate::signer::signature::Signature;
use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::{Signature as K256Signature, SigningKey, VerifyingKey};
use k256::PublicKey;

#[derive(Debug, Clone, Copy, Default)]
pub struct K256Backend;

impl ReferenceBackend for K256Backend {
    fn sign(&self, hash: &[u8; 32], secret: &PrivateScalar) -> WalletResult<Signature> {
        let signing_key = SigningKey::from_slice(secret.as_bytes())
            .map_err(|e| SignatureError::SigningFailed(e.to_string()))?;

        let signature: K256Signature = signing_key
            .sign_prehash(hash)
            .map_err(|e| SignatureError::SigningFailed(e.to_string()))?;

        // Chuẩn hoá low-S để output giống libsecp256k1
        let signature = signature.normalize_s().unwrap_or(signature);
        Ok(Signature::from(signature))
    }

    fn verify(&self, hash: &[u8; 32], signature: &Signature, public_key: &PublicKey) -> bool {
        let Ok(signature) = K256Signature::from_slice(&signature.to_compact()) else {
            return false;
        };

        VerifyingKey::from(public_key)
            .verify_prehash(hash, &signature)
            .is_ok()
    }
}
