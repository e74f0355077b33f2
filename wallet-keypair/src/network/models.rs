// wallet-keypair/src/network/models.rs
//
// Network Parameters - Per-network byte constants
//
// Mỗi network (Bitcoin, Testnet, Litecoin, ...) chỉ khác nhau ở các version byte:
// - `wif`          : byte đầu tiên của WIF payload (private key)
// - `pub_key_hash` : byte đầu tiên của P2PKH address payload
// - `script_hash`  : byte đầu tiên của P2SH address payload

use serde::{Deserialize, Serialize};

/// Thông tin một network (version bytes + metadata)
///
/// Serialize theo camelCase để load được từ JSON config
/// (giống format `networks.js` của các ví JavaScript).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkParams {
    /// Tên network (e.g., "bitcoin", "testnet")
    pub name: String,
    /// Prefix dùng cho signed message
    #[serde(default)]
    pub message_prefix: String,
    /// Bech32 human-readable part (nếu có)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bech32: Option<String>,
    /// P2PKH address version byte
    pub pub_key_hash: u8,
    /// P2SH address version byte
    pub script_hash: u8,
    /// WIF version byte
    pub wif: u8,
}

// =============================================================================
// PRESETS
// =============================================================================

impl NetworkParams {
    /// Bitcoin mainnet (default network)
    pub fn bitcoin() -> Self {
        Self {
            name: "bitcoin".to_string(),
            message_prefix: "\x18Bitcoin Signed Message:\n".to_string(),
            bech32: Some("bc".to_string()),
            pub_key_hash: 0x00,
            script_hash: 0x05,
            wif: 0x80,
        }
    }

    pub fn testnet() -> Self {
        Self {
            name: "testnet".to_string(),
            message_prefix: "\x18Bitcoin Signed Message:\n".to_string(),
            bech32: Some("tb".to_string()),
            pub_key_hash: 0x6f,
            script_hash: 0xc4,
            wif: 0xef,
        }
    }

    /// Regtest dùng chung version bytes với testnet, chỉ khác bech32 HRP
    pub fn regtest() -> Self {
        Self {
            name: "regtest".to_string(),
            message_prefix: "\x18Bitcoin Signed Message:\n".to_string(),
            bech32: Some("bcrt".to_string()),
            pub_key_hash: 0x6f,
            script_hash: 0xc4,
            wif: 0xef,
        }
    }

    pub fn litecoin() -> Self {
        Self {
            name: "litecoin".to_string(),
            message_prefix: "\x19Litecoin Signed Message:\n".to_string(),
            bech32: Some("ltc".to_string()),
            pub_key_hash: 0x30,
            script_hash: 0x32,
            wif: 0xb0,
        }
    }

    pub fn dogecoin() -> Self {
        Self {
            name: "dogecoin".to_string(),
            message_prefix: "\x19Dogecoin Signed Message:\n".to_string(),
            bech32: None,
            pub_key_hash: 0x1e,
            script_hash: 0x16,
            wif: 0x9e,
        }
    }
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self::bitcoin()
    }
}
