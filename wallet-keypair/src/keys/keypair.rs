// wallet-keypair/src/keys/keypair.rs
//
// KeyPair - secp256k1 key pair với network + compression metadata
//
// Lifecycle:
// ┌──────────────────────────────────────────────────────────────┐
// │  new / from_private_key_buffer / from_wif / make_random      │
// │                         │                                    │
// │              range check 1 <= d <= n-1 (một lần)             │
// │                         ▼                                    │
// │  KeyPair { Full | PublicOnly, compressed, network }          │
// │     ├─ public_key_buffer / address / to_wif                  │
// │     └─ sign / verify (SignDispatcher)                        │
// └──────────────────────────────────────────────────────────────┘

use crate::address::P2pkhAddress;
use crate::crypto::{hash::hash160, Secp256k1Curve};
use crate::error::{KeyError, WalletResult};
use crate::keys::random::RandomKeyGenerator;
use crate::keys::scalar::PrivateScalar;
use crate::keys::wif::WifCodec;
use crate::network::NetworkParams;
use crate::signer::{Signature, DEFAULT_DISPATCHER};
use k256::PublicKey;
use zeroize::Zeroizing;

// =============================================================================
// OPTIONS
// =============================================================================

/// Options khi tạo KeyPair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPairOptions {
    /// Serialize public key dạng compressed (33 bytes) hay không (65 bytes)
    pub compressed: bool,
    /// Network của key pair
    pub network: NetworkParams,
    /// Khi truyền cả private scalar lẫn public point: kiểm tra `d · G == Q`
    pub check_consistency: bool,
}

impl Default for KeyPairOptions {
    fn default() -> Self {
        Self {
            compressed: true,
            network: NetworkParams::default(),
            check_consistency: false,
        }
    }
}

impl KeyPairOptions {
    pub fn with_compressed(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }

    pub fn with_network(mut self, network: NetworkParams) -> Self {
        self.network = network;
        self
    }

    pub fn with_consistency_check(mut self, check: bool) -> Self {
        self.check_consistency = check;
        self
    }
}

// =============================================================================
// KEY MATERIAL
// =============================================================================

/// Full key pair hoặc watch-only (chỉ có public key)
#[derive(Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    Full {
        secret: PrivateScalar,
        public: PublicKey,
    },
    PublicOnly {
        public: PublicKey,
    },
}

impl KeyMaterial {
    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        match self {
            KeyMaterial::Full { public, .. } | KeyMaterial::PublicOnly { public } => public,
        }
    }

    #[inline]
    pub fn secret(&self) -> Option<&PrivateScalar> {
        match self {
            KeyMaterial::Full { secret, .. } => Some(secret),
            KeyMaterial::PublicOnly { .. } => None,
        }
    }
}

// =============================================================================
// KEY PAIR
// =============================================================================

/// secp256k1 key pair
///
/// # Invariants
/// - Nếu có private scalar thì `1 <= d <= n-1`, kiểm tra đúng một lần khi tạo
/// - Immutable: mọi thay đổi (network, compression, bỏ private key) tạo KeyPair mới
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    material: KeyMaterial,
    compressed: bool,
    network: NetworkParams,
}

// Custom Debug - KHÔNG BAO GIỜ hiển thị private key
impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &hex::encode(self.public_key_buffer()))
            .field("has_private_key", &self.has_private_key())
            .field("compressed", &self.compressed)
            .field("network", &self.network.name)
            .finish()
    }
}

impl KeyPair {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Tạo KeyPair từ private scalar và/hoặc public point
    ///
    /// - Có `secret`: validate `1 <= d <= n-1`, derive `d · G` nếu thiếu `public`
    /// - Chỉ có `public`: watch-only key pair
    /// - Không có gì: `InvalidArguments`
    pub fn new(
        secret: Option<PrivateScalar>,
        public: Option<PublicKey>,
        options: KeyPairOptions,
    ) -> WalletResult<Self> {
        let material = match (secret, public) {
            (Some(secret), public) => {
                if !Secp256k1Curve::is_valid_scalar(secret.as_bytes()) {
                    return Err(KeyError::InvalidPrivateKey.into());
                }

                let public = match public {
                    Some(public) => {
                        if options.check_consistency
                            && Secp256k1Curve::multiply_generator(secret.as_bytes())? != public
                        {
                            return Err(KeyError::PublicKeyMismatch.into());
                        }
                        public
                    }
                    None => Secp256k1Curve::multiply_generator(secret.as_bytes())?,
                };

                KeyMaterial::Full { secret, public }
            }
            (None, Some(public)) => KeyMaterial::PublicOnly { public },
            (None, None) => return Err(KeyError::InvalidArguments.into()),
        };

        Ok(Self {
            material,
            compressed: options.compressed,
            network: options.network,
        })
    }

    #[inline]
    pub fn from_private_scalar(secret: PrivateScalar, options: KeyPairOptions) -> WalletResult<Self> {
        Self::new(Some(secret), None, options)
    }

    #[inline]
    pub fn from_public_key(public: PublicKey, options: KeyPairOptions) -> WalletResult<Self> {
        Self::new(None, Some(public), options)
    }

    /// Import raw 32-byte private key (compressed, default network)
    pub fn from_private_key_buffer(buffer: &[u8]) -> WalletResult<Self> {
        Self::from_private_key_buffer_with(buffer, KeyPairOptions::default())
    }

    pub fn from_private_key_buffer_with(
        buffer: &[u8],
        options: KeyPairOptions,
    ) -> WalletResult<Self> {
        let bytes: Zeroizing<[u8; 32]> = Zeroizing::new(
            buffer
                .try_into()
                .map_err(|_| KeyError::InvalidPrivateKeyBuffer(buffer.len()))?,
        );

        if !Secp256k1Curve::is_valid_scalar(&bytes) {
            return Err(KeyError::PrivateKeyOutOfRange.into());
        }

        Self::from_private_scalar(PrivateScalar::from_be_bytes(*bytes), options)
    }

    /// Import SEC1 public key (watch-only)
    ///
    /// `options.compressed` quyết định format khi serialize lại,
    /// không phụ thuộc vào format của `buffer`.
    pub fn from_public_key_buffer(buffer: &[u8], options: KeyPairOptions) -> WalletResult<Self> {
        let public = Secp256k1Curve::decode_point(buffer)?;
        Self::from_public_key(public, options)
    }

    /// Decode WIF, network phải khớp `network`
    #[inline]
    pub fn from_wif(wif: &str, network: &NetworkParams) -> WalletResult<Self> {
        WifCodec::decode(wif, network)
    }

    /// Decode WIF, thử lần lượt từng network (first match wins)
    #[inline]
    pub fn from_wif_with_networks(wif: &str, networks: &[NetworkParams]) -> WalletResult<Self> {
        WifCodec::decode_with_networks(wif, networks)
    }

    /// Random key pair (OsRng, default options)
    pub fn make_random() -> WalletResult<Self> {
        Self::make_random_with(KeyPairOptions::default())
    }

    pub fn make_random_with(options: KeyPairOptions) -> WalletResult<Self> {
        RandomKeyGenerator::new(options).generate()
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    #[inline]
    pub fn material(&self) -> &KeyMaterial {
        &self.material
    }

    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        self.material.public_key()
    }

    #[inline]
    pub fn private_scalar(&self) -> Option<&PrivateScalar> {
        self.material.secret()
    }

    #[inline]
    pub fn has_private_key(&self) -> bool {
        self.material.secret().is_some()
    }

    #[inline]
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Lấy network hiện tại
    #[inline]
    pub fn network(&self) -> &NetworkParams {
        &self.network
    }

    // =========================================================================
    // SERIALIZATION
    // =========================================================================

    /// 32-byte big-endian private key, left-padded bằng 0
    ///
    /// Kiểm tra lại `d < n` tại thời điểm encode, độc lập với lần kiểm tra
    /// lúc khởi tạo.
    pub fn private_key_buffer(&self) -> WalletResult<Zeroizing<[u8; 32]>> {
        let secret = self.material.secret().ok_or(KeyError::MissingPrivateKey)?;

        if !Secp256k1Curve::is_below_order(secret.as_bytes()) {
            return Err(KeyError::PrivateKeyOutOfRange.into());
        }

        Ok(Zeroizing::new(*secret.as_bytes()))
    }

    /// SEC1 public key: 33 bytes (compressed) hoặc 65 bytes
    pub fn public_key_buffer(&self) -> Vec<u8> {
        Secp256k1Curve::encode_point(self.public_key(), self.compressed)
    }

    /// HASH160(public_key_buffer)
    pub fn public_key_hash(&self) -> [u8; 20] {
        hash160(&self.public_key_buffer())
    }

    /// P2PKH address theo `network.pub_key_hash`
    pub fn address(&self) -> String {
        P2pkhAddress::from_hash160(&self.public_key_hash(), &self.network)
    }

    #[inline]
    pub fn to_wif(&self) -> WalletResult<String> {
        WifCodec::encode(self)
    }

    // =========================================================================
    // CONVERSIONS (luôn tạo KeyPair mới)
    // =========================================================================

    /// Watch-only copy: bỏ private key, giữ public key / compression / network
    pub fn neutered(&self) -> Self {
        Self {
            material: KeyMaterial::PublicOnly {
                public: *self.public_key(),
            },
            compressed: self.compressed,
            network: self.network.clone(),
        }
    }

    pub fn with_network(&self, network: NetworkParams) -> WalletResult<Self> {
        self.rebuild(self.compressed, network)
    }

    pub fn with_compression(&self, compressed: bool) -> WalletResult<Self> {
        self.rebuild(compressed, self.network.clone())
    }

    fn rebuild(&self, compressed: bool, network: NetworkParams) -> WalletResult<Self> {
        let options = KeyPairOptions::default()
            .with_compressed(compressed)
            .with_network(network);
        Self::new(
            self.private_scalar().cloned(),
            Some(*self.public_key()),
            options,
        )
    }

    // =========================================================================
    // SIGNING
    // =========================================================================

    /// Ký 32-byte hash qua default dispatcher (libsecp256k1 → k256 fallback)
    pub fn sign(&self, hash: &[u8; 32]) -> WalletResult<Signature> {
        DEFAULT_DISPATCHER.sign(self, hash)
    }

    pub fn verify(&self, hash: &[u8; 32], signature: &Signature) -> bool {
        DEFAULT_DISPATCHER.verify(self, hash, signature)
    }

    /// Bypass range check, chỉ dùng để test lớp validate thứ hai
    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(
        material: KeyMaterial,
        compressed: bool,
        network: NetworkParams,
    ) -> Self {
        Self {
            material,
            compressed,
            network,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
