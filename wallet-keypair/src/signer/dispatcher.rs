// wallet-keypair/src/signer/dispatcher.rs
//
// SignDispatcher - thử fast backend trước, chỉ fallback khi nó abstain
//
// Một câu trả lời `Done(false)` từ fast backend là final: dispatcher
// KHÔNG hỏi lại reference backend trong trường hợp đó.

use crate::error::{KeyError, WalletResult};
use crate::keys::KeyPair;
use crate::signer::backend::{Attempt, FastBackend, NoFastPath, ReferenceBackend};
use crate::signer::libsecp::Libsecp256k1Backend;
use crate::signer::reference::K256Backend;
use crate::signer::signature::Signature;
use tracing::debug;

#[derive(Debug)]
pub struct SignDispatcher<F = Libsecp256k1Backend, R = K256Backend> {
    fast: F,
    reference: R,
}

impl<F: FastBackend, R: ReferenceBackend> SignDispatcher<F, R> {
    pub fn new(fast: F, reference: R) -> Self {
        Self { fast, reference }
    }

    pub fn fast(&self) -> &F {
        &self.fast
    }

    pub fn reference(&self) -> &R {
        &self.reference
    }

    /// Sign a 32-byte hash with the key pair's private scalar
    pub fn sign(&self, key_pair: &KeyPair, hash: &[u8; 32]) -> WalletResult<Signature> {
        let secret = key_pair
            .private_scalar()
            .ok_or(KeyError::MissingPrivateKey)?;

        match self.fast.sign(hash, secret) {
            Attempt::Done(signature) => Ok(signature),
            Attempt::Abstain => {
                debug!("fast backend abstained on sign, using reference backend");
                self.reference.sign(hash, secret)
            }
        }
    }

    /// Verify a signature against the key pair's public key
    pub fn verify(&self, key_pair: &KeyPair, hash: &[u8; 32], signature: &Signature) -> bool {
        let public_key = key_pair.public_key_buffer();

        match self.fast.verify(hash, signature, &public_key) {
            Attempt::Done(valid) => valid,
            Attempt::Abstain => {
                debug!("fast backend abstained on verify, using reference backend");
                self.reference.verify(hash, signature, key_pair.public_key())
            }
        }
    }
}

impl SignDispatcher<NoFastPath, K256Backend> {
    /// Dispatcher chỉ dùng k256
    pub fn reference_only() -> Self {
        Self::new(NoFastPath, K256Backend)
    }
}

impl Default for SignDispatcher {
    fn default() -> Self {
        Self::new(Libsecp256k1Backend::new(), K256Backend)
    }
}
