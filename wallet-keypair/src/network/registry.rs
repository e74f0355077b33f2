// wallet-keypair/src/network/registry.rs
//
// Network Registry - Ordered list of known presets
//
// Thứ tự trong registry là contract: khi nhiều network dùng chung một
// version byte (testnet / regtest), network đứng trước sẽ thắng.

use crate::error::{WalletError, WalletResult};
use crate::network::models::NetworkParams;
use std::path::Path;
use tracing::debug;

/// Ordered collection of [`NetworkParams`], searched first-match-wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRegistry {
    networks: Vec<NetworkParams>,
}

impl NetworkRegistry {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Registry với các preset có sẵn: bitcoin, testnet, regtest, litecoin, dogecoin
    pub fn builtin() -> Self {
        Self {
            networks: vec![
                NetworkParams::bitcoin(),
                NetworkParams::testnet(),
                NetworkParams::regtest(),
                NetworkParams::litecoin(),
                NetworkParams::dogecoin(),
            ],
        }
    }

    pub fn new(networks: Vec<NetworkParams>) -> Self {
        Self { networks }
    }

    /// Load registry từ JSON array, giữ nguyên thứ tự trong file
    ///
    /// ```json
    /// [{ "name": "bitcoin", "pubKeyHash": 0, "scriptHash": 5, "wif": 128 }]
    /// ```
    pub fn from_json_str(json: &str) -> WalletResult<Self> {
        let networks: Vec<NetworkParams> = serde_json::from_str(json)
            .map_err(|e| WalletError::Config(format!("Invalid network registry JSON: {}", e)))?;

        if networks.is_empty() {
            return Err(WalletError::Config(
                "Network registry must contain at least one network".to_string(),
            ));
        }

        debug!(count = networks.len(), "loaded network registry");
        Ok(Self { networks })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> WalletResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            WalletError::Config(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    // =========================================================================
    // LOOKUP
    // =========================================================================

    /// Network đầu tiên có WIF version byte khớp
    pub fn find_by_wif_version(&self, version: u8) -> Option<&NetworkParams> {
        self.networks.iter().find(|n| n.wif == version)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&NetworkParams> {
        self.networks.iter().find(|n| n.name == name)
    }

    /// Thêm network vào cuối danh sách (priority thấp nhất)
    pub fn push(&mut self, network: NetworkParams) {
        self.networks.push(network);
    }

    #[inline]
    pub fn as_slice(&self) -> &[NetworkParams] {
        &self.networks
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AsRef<[NetworkParams]> for NetworkRegistry {
    fn as_ref(&self) -> &[NetworkParams] {
        &self.networks
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let registry = NetworkRegistry::builtin();
        let names: Vec<&str> = registry.as_slice().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["bitcoin", "testnet", "regtest", "litecoin", "dogecoin"]
        );
    }

    #[test]
    fn test_first_match_wins() {
        let registry = NetworkRegistry::builtin();
        let found = registry.find_by_wif_version(0xef).unwrap();
        assert_eq!(found.name, "testnet");

        let reversed =
            NetworkRegistry::new(vec![NetworkParams::regtest(), NetworkParams::testnet()]);
        assert_eq!(reversed.find_by_wif_version(0xef).unwrap().name, "regtest");
    }

    #[test]
    fn test_unknown_version() {
        let registry = NetworkRegistry::builtin();
        assert!(registry.find_by_wif_version(0x42).is_none());
    }

    #[test]
    fn test_find_by_name() {
        let registry = NetworkRegistry::builtin();
        assert_eq!(registry.find_by_name("litecoin").unwrap().wif, 0xb0);
        assert!(registry.find_by_name("solana").is_none());
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            { "name": "custom", "pubKeyHash": 60, "scriptHash": 85, "wif": 188 },
            { "name": "bitcoin", "messagePrefix": "\u0018Bitcoin Signed Message:\n",
              "bech32": "bc", "pubKeyHash": 0, "scriptHash": 5, "wif": 128 }
        ]"#;

        let registry = NetworkRegistry::from_json_str(json).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.as_slice()[0].name, "custom");
        assert_eq!(registry.as_slice()[0].message_prefix, "");
        assert_eq!(registry.as_slice()[1], NetworkParams::bitcoin());
    }

    #[test]
    fn test_from_json_rejects_empty_and_malformed() {
        assert!(matches!(
            NetworkRegistry::from_json_str("[]"),
            Err(WalletError::Config(_))
        ));
        assert!(matches!(
            NetworkRegistry::from_json_str("{ not json"),
            Err(WalletError::Config(_))
        ));
        // wif phải là u8
        assert!(matches!(
            NetworkRegistry::from_json_str(
                r#"[{ "name": "x", "pubKeyHash": 0, "scriptHash": 5, "wif": 300 }]"#
            ),
            Err(WalletError::Config(_))
        ));
    }

    #[test]
    fn test_from_missing_file() {
        let result = NetworkRegistry::from_json_file("/nonexistent/networks.json");
        assert!(matches!(result, Err(WalletError::Config(_))));
    }

    #[test]
    fn test_push_appends_with_lowest_priority() {
        let mut registry = NetworkRegistry::new(vec![NetworkParams::testnet()]);
        registry.push(NetworkParams::regtest());
        assert_eq!(registry.find_by_wif_version(0xef).unwrap().name, "testnet");
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }
}
