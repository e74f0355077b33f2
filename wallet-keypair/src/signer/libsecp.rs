// wallet-keypair/src/signer/libsecp.rs
//
// Fast backend: libsecp256k1 (qua crate `secp256k1`)
//
// Abstain khi:
// - secret bytes không load được
// - public key / compact signature không parse được
//
// High-S signature: libsecp256k1 trả `Done(false)`. k256 cũng reject
// high-S, nên cả hai backend chỉ chấp nhận dạng low-S (BIP-62).

use crate::keys::PrivateScalar;
use crate::signer::backend::{Attempt, FastBackend};
use crate::signer::signature::Signature;
use secp256k1::{ecdsa, All, Message, PublicKey, Secp256k1, SecretKey};

/// libsecp256k1 backend, giữ một context dùng chung (sign + verify)
pub struct Libsecp256k1Backend {
    ctx: Secp256k1<All>,
}

impl Libsecp256k1Backend {
    pub fn new() -> Self {
        Self {
            ctx: Secp256k1::new(),
        }
    }
}

impl Default for Libsecp256k1Backend {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Libsecp256k1Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Libsecp256k1Backend")
    }
}

impl FastBackend for Libsecp256k1Backend {
    fn sign(&self, hash: &[u8; 32], secret: &PrivateScalar) -> Attempt<Signature> {
        let Ok(secret_key) = SecretKey::from_slice(secret.as_bytes()) else {
            return Attempt::Abstain;
        };

        let message = Message::from_digest(*hash);
        let signature = self.ctx.sign_ecdsa(&message, &secret_key);
        Attempt::Done(Signature::from(signature))
    }

    fn verify(&self, hash: &[u8; 32], signature: &Signature, public_key: &[u8]) -> Attempt<bool> {
        let Ok(public_key) = PublicKey::from_slice(public_key) else {
            return Attempt::Abstain;
        };
        let Ok(sig) = ecdsa::Signature::from_compact(&signature.to_compact()) else {
            return Attempt::Abstain;
        };

        let message = Message::from_digest(*hash);
        Attempt::Done(self.ctx.verify_ecdsa(&message, &sig, &public_key).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{hash::sha256, Secp256k1Curve, CURVE_ORDER};

    fn secret() -> PrivateScalar {
        PrivateScalar::from_be_bytes([0x04; 32])
    }

    fn public_key_bytes() -> Vec<u8> {
        let point = Secp256k1Curve::multiply_generator(secret().as_bytes()).unwrap();
        Secp256k1Curve::encode_point(&point, true)
    }

    #[test]
    fn test_sign_then_verify() {
        let backend = Libsecp256k1Backend::new();
        let hash = sha256(b"fast path");

        let Attempt::Done(signature) = backend.sign(&hash, &secret()) else {
            panic!("libsecp256k1 should sign a valid scalar");
        };
        assert!(signature.is_low_s());
        assert_eq!(
            backend.verify(&hash, &signature, &public_key_bytes()),
            Attempt::Done(true)
        );
        assert_eq!(
            backend.verify(&sha256(b"other"), &signature, &public_key_bytes()),
            Attempt::Done(false)
        );
    }

    #[test]
    fn test_sign_abstains_on_unloadable_secret() {
        let backend = Libsecp256k1Backend::new();
        let hash = sha256(b"x");
        assert_eq!(
            backend.sign(&hash, &PrivateScalar::from_be_bytes([0u8; 32])),
            Attempt::Abstain
        );
        assert_eq!(
            backend.sign(&hash, &PrivateScalar::from_be_bytes(CURVE_ORDER)),
            Attempt::Abstain
        );
    }

    #[test]
    fn test_verify_abstains_on_bad_public_key() {
        let backend = Libsecp256k1Backend::new();
        let hash = sha256(b"x");
        let Attempt::Done(signature) = backend.sign(&hash, &secret()) else {
            panic!("sign failed");
        };
        // x = 5 không nằm trên curve
        let mut off_curve = [0u8; 33];
        off_curve[0] = 0x02;
        off_curve[32] = 0x05;
        assert_eq!(backend.verify(&hash, &signature, &off_curve), Attempt::Abstain);
        assert_eq!(backend.verify(&hash, &signature, &[]), Attempt::Abstain);
    }

    #[test]
    fn test_verify_rejects_high_s() {
        let backend = Libsecp256k1Backend::new();
        let mut bytes = [0u8; 64];
        bytes[31] = 1;
        bytes[32..].copy_from_slice(&CURVE_ORDER);
        bytes[63] -= 1; // s = n - 1
        let high_s = Signature::from_compact(&bytes).unwrap();

        assert_eq!(
            backend.verify(&sha256(b"x"), &high_s, &public_key_bytes()),
            Attempt::Done(false)
        );
    }
}
