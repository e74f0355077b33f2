// wallet-keypair/src/keys/random.rs
//
// Random Key Generation - Rejection Sampling
//
// Lặp: lấy 32 bytes từ RNG → d (big-endian)
//      1 <= d <= n-1 ? chấp nhận : bỏ và lấy lại
//
// KHÔNG dùng `d mod n`: reduction làm lệch phân phối về phía các giá trị nhỏ.

use crate::crypto::Secp256k1Curve;
use crate::error::{KeyError, WalletResult};
use crate::keys::keypair::{KeyPair, KeyPairOptions};
use crate::keys::scalar::PrivateScalar;
use rand::{rngs::OsRng, CryptoRng, RngCore};
use tracing::{trace, warn};
use zeroize::Zeroizing;

/// Retry ceiling. Với RNG chuẩn, xác suất bị reject mỗi lần ~ 2^-128.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000;

/// Random KeyPair generator
///
/// # Security
/// - **CSPRNG**: mặc định dùng `OsRng`
/// - Candidate bytes nằm trong `Zeroizing`, tự xóa sau mỗi lần thử
pub struct RandomKeyGenerator<R = OsRng> {
    rng: R,
    options: KeyPairOptions,
    max_attempts: usize,
}

impl RandomKeyGenerator<OsRng> {
    pub fn new(options: KeyPairOptions) -> Self {
        Self::with_rng(OsRng, options)
    }
}

impl<R: RngCore + CryptoRng> RandomKeyGenerator<R> {
    /// Generator với RNG tùy chỉnh (e.g. deterministic RNG cho test vectors)
    pub fn with_rng(rng: R, options: KeyPairOptions) -> Self {
        Self {
            rng,
            options,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sinh KeyPair mới bằng rejection sampling
    pub fn generate(&mut self) -> WalletResult<KeyPair> {
        let mut candidate = Zeroizing::new([0u8; 32]);

        for attempt in 1..=self.max_attempts {
            self.rng.fill_bytes(&mut candidate[..]);

            if Secp256k1Curve::is_valid_scalar(&candidate) {
                let secret = PrivateScalar::from_be_bytes(*candidate);
                return KeyPair::from_private_scalar(secret, self.options.clone());
            }

            trace!(attempt, "discarded out-of-range candidate scalar");
        }

        warn!(
            attempts = self.max_attempts,
            "random key generation exhausted retry ceiling"
        );
        Err(KeyError::RandomGenerationExhausted(self.max_attempts).into())
    }
}

// =============================================================================
// TESTS
// =============================================================================
