// wallet-keypair/src/api/mod.rs
//
// String/hex facade cho FFI callers (mobile bridge)

use crate::error::{WalletError, WalletResult};
use crate::keys::{KeyPair, KeyPairOptions};
use crate::network::{NetworkParams, NetworkRegistry};
use crate::signer::Signature;

// --- Key Management ---

/// Random compressed key pair, trả về WIF cho network `network_name`
pub fn generate_wif(network_name: String) -> WalletResult<String> {
    let registry = NetworkRegistry::builtin();
    let network = registry
        .find_by_name(&network_name)
        .ok_or_else(|| WalletError::Config(format!("Unknown network: {}", network_name)))?;

    let key_pair = KeyPair::make_random_with(KeyPairOptions::default().with_network(network.clone()))?;
    key_pair.to_wif()
}

/// WIF → P2PKH address, network suy ra từ version byte của WIF
pub fn wif_to_address(wif: String) -> WalletResult<String> {
    let registry = NetworkRegistry::builtin();
    let key_pair = KeyPair::from_wif_with_networks(&wif, registry.as_slice())?;
    Ok(key_pair.address())
}

// --- Signing ---

/// Ký 32-byte hash (hex), trả về DER signature (hex)
pub fn sign_hash_hex(wif: String, hash_hex: String) -> WalletResult<String> {
    let registry = NetworkRegistry::builtin();
    let key_pair = KeyPair::from_wif_with_networks(&wif, registry.as_slice())?;
    let hash = parse_hash(&hash_hex)?;

    let signature = key_pair.sign(&hash)?;
    Ok(hex::encode(signature.to_der()?))
}

/// Verify signature (DER hoặc compact 64-byte, hex) với SEC1 public key (hex)
pub fn verify_hash_hex(
    public_key_hex: String,
    hash_hex: String,
    signature_hex: String,
) -> WalletResult<bool> {
    let public_key = parse_hex("public key", &public_key_hex)?;
    let key_pair = KeyPair::from_public_key_buffer(&public_key, KeyPairOptions::default())?;
    let hash = parse_hash(&hash_hex)?;

    let signature_bytes = parse_hex("signature", &signature_hex)?;
    let signature = if signature_bytes.len() == 64 {
        Signature::from_compact(&signature_bytes)?
    } else {
        Signature::from_der(&signature_bytes)?
    };

    Ok(key_pair.verify(&hash, &signature))
}

// --- Config Helpers ---

pub fn default_networks() -> Vec<NetworkParams> {
    NetworkRegistry::builtin().as_slice().to_vec()
}

fn parse_hex(field: &str, value: &str) -> WalletResult<Vec<u8>> {
    hex::decode(value.strip_prefix("0x").unwrap_or(value))
        .map_err(|e| WalletError::Validation(format!("Invalid {} hex: {}", field, e)))
}

fn parse_hash(hash_hex: &str) -> WalletResult<[u8; 32]> {
    let bytes = parse_hex("hash", hash_hex)?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| WalletError::Validation(format!("Hash must be 32 bytes, got {}", bytes.len())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::P2pkhAddress;
    use crate::crypto::hash::sha256;
    use crate::error::{EncodingError, KeyError};

    const WIF_ONE: &str = "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn";
    const WIF_ONE_TESTNET: &str = "cMahea7zqjxrtgAbB7LSGbcQUr1uX1ojuat9jZodMN87JcbXMTcA";
    const G_COMPRESSED: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    #[test]
    fn test_wif_to_address() {
        assert_eq!(
            wif_to_address(WIF_ONE.to_string()).unwrap(),
            "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"
        );
        assert_eq!(
            wif_to_address(WIF_ONE_TESTNET.to_string()).unwrap(),
            "mrCDrCybB6J1vRfbwM5hemdJz73FwDBC8r"
        );
    }

    #[test]
    fn test_wif_to_address_rejects_bad_checksum() {
        let mut corrupted = WIF_ONE.to_string();
        corrupted.pop();
        corrupted.push('o');
        assert_eq!(
            wif_to_address(corrupted),
            Err(WalletError::Encoding(EncodingError::InvalidChecksum))
        );
    }

    #[test]
    fn test_generate_wif() {
        let wif = generate_wif("bitcoin".to_string()).unwrap();
        assert!(wif.starts_with('K') || wif.starts_with('L'));

        let address = wif_to_address(wif).unwrap();
        assert!(P2pkhAddress::is_valid(&address, &NetworkParams::bitcoin()));
    }

    #[test]
    fn test_generate_wif_unknown_network() {
        assert!(matches!(
            generate_wif("nonexistent".to_string()),
            Err(WalletError::Config(_))
        ));
    }

    #[test]
    fn test_sign_and_verify_hex() {
        let hash_hex = hex::encode(sha256(b"api"));
        let der_hex = sign_hash_hex(WIF_ONE.to_string(), hash_hex.clone()).unwrap();

        assert!(verify_hash_hex(G_COMPRESSED.to_string(), hash_hex.clone(), der_hex.clone()).unwrap());

        // Compact form cũng được chấp nhận
        let compact = Signature::from_der(&hex::decode(&der_hex).unwrap()).unwrap();
        let compact_hex = hex::encode(compact.to_compact());
        assert!(verify_hash_hex(G_COMPRESSED.to_string(), hash_hex, compact_hex).unwrap());

        let other_hash = hex::encode(sha256(b"other"));
        assert!(!verify_hash_hex(G_COMPRESSED.to_string(), other_hash, der_hex).unwrap());
    }

    #[test]
    fn test_sign_rejects_bad_hash() {
        assert!(matches!(
            sign_hash_hex(WIF_ONE.to_string(), "abcd".to_string()),
            Err(WalletError::Validation(_))
        ));
        assert!(matches!(
            sign_hash_hex(WIF_ONE.to_string(), "zz".repeat(32)),
            Err(WalletError::Validation(_))
        ));
    }

    #[test]
    fn test_hex_prefix_stripped_once() {
        let hash_hex = hex::encode(sha256(b"prefix"));
        assert!(sign_hash_hex(WIF_ONE.to_string(), format!("0x{}", hash_hex)).is_ok());
        assert!(matches!(
            sign_hash_hex(WIF_ONE.to_string(), format!("0x0x{}", hash_hex)),
            Err(WalletError::Validation(_))
        ));
    }

    #[test]
    fn test_verify_rejects_bad_public_key() {
        let hash_hex = hex::encode(sha256(b"api"));
        let der_hex = sign_hash_hex(WIF_ONE.to_string(), hash_hex.clone()).unwrap();
        assert!(matches!(
            // x = 5 không nằm trên curve
            verify_hash_hex(format!("02{}05", "00".repeat(31)), hash_hex, der_hex),
            Err(WalletError::Key(KeyError::InvalidPublicKey(_)))
        ));
    }

    #[test]
    fn test_default_networks() {
        let networks = default_networks();
        assert_eq!(networks.len(), 5);
        assert_eq!(networks[0], NetworkParams::bitcoin());
    }
}
