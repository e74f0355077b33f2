// wallet-keypair/src/error.rs

use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Key Error: {0}")]
    Key(#[from] KeyError),

    #[error("WIF Error: {0}")]
    Wif(#[from] WifError),

    #[error("Encoding Error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Signature Error: {0}")]
    Signature(#[from] SignatureError),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Config Error: {0}")]
    Config(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("private key outside curve-order range")]
    InvalidPrivateKey,

    #[error("expected a private scalar, a public point, or both")]
    InvalidArguments,

    #[error("invalid private key buffer: expected 32 bytes, got {0}")]
    InvalidPrivateKeyBuffer(usize),

    #[error("private key must be less than the curve order")]
    PrivateKeyOutOfRange,

    #[error("missing private key")]
    MissingPrivateKey,

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("public key does not match private key")]
    PublicKeyMismatch,

    #[error("no valid private key after {0} random draws")]
    RandomGenerationExhausted(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WifError {
    #[error("invalid WIF payload length: {0}")]
    InvalidLength(usize),

    #[error("invalid compression flag: 0x{0:02x}")]
    InvalidCompressionFlag(u8),

    #[error("unknown network version: 0x{0:02x}")]
    UnknownNetworkVersion(u8),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("invalid base58 string: {0}")]
    InvalidBase58(String),

    #[error("invalid checksum")]
    InvalidChecksum,

    #[error("base58check data too short: {0} bytes")]
    TooShort(usize),

    #[error("invalid payload length: {0}")]
    InvalidPayloadLength(usize),

    #[error("version mismatch: expected 0x{expected:02x}, found 0x{found:02x}")]
    VersionMismatch { expected: u8, found: u8 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),
}
