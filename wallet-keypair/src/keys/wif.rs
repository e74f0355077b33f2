// wallet-keypair/src/keys/wif.rs
//
// Wallet Import Format (WIF)
//
// Payload layout:
// ┌──────────┬──────────────────────────┬────────────────────┐
// │ version  │ private key (32B, BE)    │ 0x01 (compressed)  │
// │ 1 byte   │                          │ optional           │
// └──────────┴──────────────────────────┴────────────────────┘
// WIF = Base58Check(payload)

use crate::crypto::Base58Check;
use crate::error::{WalletResult, WifError};
use crate::keys::keypair::{KeyPair, KeyPairOptions};
use crate::keys::scalar::PrivateScalar;
use crate::network::NetworkParams;
use zeroize::Zeroizing;

const PRIVATE_KEY_LEN: usize = 32;
const COMPRESSION_FLAG: u8 = 0x01;

/// WIF encoder / decoder
pub struct WifCodec;

impl WifCodec {
    /// Encode private key của `key` sang WIF
    ///
    /// Fails với `MissingPrivateKey` nếu key pair là watch-only.
    pub fn encode(key: &KeyPair) -> WalletResult<String> {
        let secret = key.private_key_buffer()?;

        let mut payload = Zeroizing::new(Vec::with_capacity(1 + PRIVATE_KEY_LEN + 1));
        payload.push(key.network().wif);
        payload.extend_from_slice(&*secret);
        if key.is_compressed() {
            payload.push(COMPRESSION_FLAG);
        }

        Ok(Base58Check::encode(&payload))
    }

    /// Decode WIF cho một network duy nhất
    #[inline]
    pub fn decode(wif: &str, network: &NetworkParams) -> WalletResult<KeyPair> {
        Self::decode_with_networks(wif, std::slice::from_ref(network))
    }

    /// Decode WIF, so version byte với từng network theo thứ tự
    ///
    /// # Validation order
    /// 1. Base58 + checksum
    /// 2. Payload length / compression flag
    /// 3. Version byte (first match wins)
    /// 4. Private key range (qua constructor của KeyPair)
    pub fn decode_with_networks(wif: &str, networks: &[NetworkParams]) -> WalletResult<KeyPair> {
        let payload = Zeroizing::new(Base58Check::decode(wif)?);

        let (&version, body) = payload
            .split_first()
            .ok_or(WifError::InvalidLength(0))?;

        let compressed = match body.len() {
            PRIVATE_KEY_LEN => false,
            len if len == PRIVATE_KEY_LEN + 1 => {
                let flag = body[PRIVATE_KEY_LEN];
                if flag != COMPRESSION_FLAG {
                    return Err(WifError::InvalidCompressionFlag(flag).into());
                }
                true
            }
            len => return Err(WifError::InvalidLength(len).into()),
        };

        let network = networks
            .iter()
            .find(|n| n.wif == version)
            .ok_or(WifError::UnknownNetworkVersion(version))?;

        let secret = PrivateScalar::from_be_slice(&body[..PRIVATE_KEY_LEN])?;
        let options = KeyPairOptions::default()
            .with_compressed(compressed)
            .with_network(network.clone());

        KeyPair::from_private_scalar(secret, options)
    }
}

// =============================================================================
// TESTS
// =============================================================================
