// wallet-keypair/src/signer/backend.rs
//
// Signature Backends - capability interface cho sign / verify
//
// ┌─────────────────────────┐  Abstain  ┌─────────────────────────┐
// │  FastBackend            │ ────────▶ │  ReferenceBackend       │
// │  (libsecp256k1)         │           │  (k256, pure Rust)      │
// │  Done(answer) = final   │           │  luôn trả lời           │
// └─────────────────────────┘           └─────────────────────────┘

use crate::error::WalletResult;
use crate::keys::PrivateScalar;
use crate::signer::signature::Signature;
use k256::PublicKey;

/// Kết quả của fast backend: có câu trả lời, hoặc từ chối trả lời
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt<T> {
    /// Backend commit một kết quả, kết quả này là final
    Done(T),
    /// Input nằm ngoài fast path, cần hỏi reference backend
    Abstain,
}

/// Fast-path backend, có thể abstain nhưng không bao giờ trả lời sai
pub trait FastBackend: Send + Sync {
    fn sign(&self, hash: &[u8; 32], secret: &PrivateScalar) -> Attempt<Signature>;

    /// `public_key` là SEC1 bytes (33 hoặc 65)
    fn verify(&self, hash: &[u8; 32], signature: &Signature, public_key: &[u8]) -> Attempt<bool>;
}

/// Reference backend, correctness of last resort
pub trait ReferenceBackend: Send + Sync {
    fn sign(&self, hash: &[u8; 32], secret: &PrivateScalar) -> WalletResult<Signature>;

    fn verify(&self, hash: &[u8; 32], signature: &Signature, public_key: &PublicKey) -> bool;
}

/// Fast backend luôn abstain, dùng để chạy reference backend một mình
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFastPath;

impl FastBackend for NoFastPath {
    fn sign(&self, _hash: &[u8; 32], _secret: &PrivateScalar) -> Attempt<Signature> {
        Attempt::Abstain
    }

    fn verify(&self, _hash: &[u8; 32], _signature: &Signature, _public_key: &[u8]) -> Attempt<bool> {
        Attempt::Abstain
    }
}
