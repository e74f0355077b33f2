// wallet-keypair/src/address.rs
//
// P2PKH Address Module
//
// # Flow:  Public Key (33/65B) → SHA256 → RIPEMD160 → version ++ hash160 → Base58Check

use crate::crypto::{hash::hash160, Base58Check};
use crate::error::{EncodingError, WalletResult};
use crate::network::NetworkParams;

const HASH160_LEN: usize = 20;

/// P2PKH Address Generator
///
/// Không lưu state, chỉ là namespace cho các hàm encode/decode.
pub struct P2pkhAddress;

impl P2pkhAddress {
    // =========================================================================
    // DERIVATION
    // =========================================================================

    /// Address từ SEC1 public key bytes (compressed hoặc uncompressed)
    ///
    /// Lưu ý: cùng một key, compressed và uncompressed cho ra 2 address khác nhau.
    #[inline]
    pub fn from_public_key(public_key: &[u8], network: &NetworkParams) -> String {
        Self::from_hash160(&hash160(public_key), network)
    }

    /// `Base58Check(network.pub_key_hash ++ hash)`
    pub fn from_hash160(hash: &[u8; HASH160_LEN], network: &NetworkParams) -> String {
        let mut payload = [0u8; 1 + HASH160_LEN];
        payload[0] = network.pub_key_hash;
        payload[1..].copy_from_slice(hash);
        Base58Check::encode(&payload)
    }

    // =========================================================================
    // DECODING / VALIDATION
    // =========================================================================

    /// Decode address về hash160, kiểm tra version byte của `network`
    pub fn decode(address: &str, network: &NetworkParams) -> WalletResult<[u8; HASH160_LEN]> {
        let payload = Base58Check::decode(address)?;

        if payload.len() != 1 + HASH160_LEN {
            return Err(EncodingError::InvalidPayloadLength(payload.len()).into());
        }

        if payload[0] != network.pub_key_hash {
            return Err(EncodingError::VersionMismatch {
                expected: network.pub_key_hash,
                found: payload[0],
            }
            .into());
        }

        let mut hash = [0u8; HASH160_LEN];
        hash.copy_from_slice(&payload[1..]);
        Ok(hash)
    }

    #[inline]
    pub fn is_valid(address: &str, network: &NetworkParams) -> bool {
        Self::decode(address, network).is_ok()
    }

    /// So sánh 2 address theo payload đã decode (version + hash160)
    pub fn equals(addr1: &str, addr2: &str) -> bool {
        match (Base58Check::decode(addr1), Base58Check::decode(addr2)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;

    const G_COMPRESSED: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const ADDRESS_ONE: &str = "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH";
    const ADDRESS_ONE_TESTNET: &str = "mrCDrCybB6J1vRfbwM5hemdJz73FwDBC8r";

    #[test]
    fn test_from_public_key() {
        let public_key = hex::decode(G_COMPRESSED).unwrap();
        assert_eq!(
            P2pkhAddress::from_public_key(&public_key, &NetworkParams::bitcoin()),
            ADDRESS_ONE
        );
        assert_eq!(
            P2pkhAddress::from_public_key(&public_key, &NetworkParams::testnet()),
            ADDRESS_ONE_TESTNET
        );
    }

    #[test]
    fn test_decode() {
        let hash = P2pkhAddress::decode(ADDRESS_ONE, &NetworkParams::bitcoin()).unwrap();
        assert_eq!(hex::encode(hash), "751e76e8199196d454941c45d1b3a323f1433bd6");
    }

    #[test]
    fn test_decode_wrong_network() {
        assert_eq!(
            P2pkhAddress::decode(ADDRESS_ONE_TESTNET, &NetworkParams::bitcoin()),
            Err(WalletError::Encoding(EncodingError::VersionMismatch {
                expected: 0x00,
                found: 0x6f
            }))
        );
    }

    #[test]
    fn test_decode_wrong_length() {
        // WIF cũng là base58check hợp lệ nhưng payload dài 34 bytes
        let wif = "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn";
        assert_eq!(
            P2pkhAddress::decode(wif, &NetworkParams::bitcoin()),
            Err(WalletError::Encoding(EncodingError::InvalidPayloadLength(34)))
        );
    }

    #[test]
    fn test_is_valid() {
        assert!(P2pkhAddress::is_valid(ADDRESS_ONE, &NetworkParams::bitcoin()));
        assert!(P2pkhAddress::is_valid(ADDRESS_ONE_TESTNET, &NetworkParams::regtest()));

        assert!(!P2pkhAddress::is_valid(ADDRESS_ONE, &NetworkParams::testnet()));
        assert!(!P2pkhAddress::is_valid("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMi", &NetworkParams::bitcoin()));
        assert!(!P2pkhAddress::is_valid("not an address", &NetworkParams::bitcoin()));
        assert!(!P2pkhAddress::is_valid("", &NetworkParams::bitcoin()));
    }

    #[test]
    fn test_equals() {
        assert!(P2pkhAddress::equals(ADDRESS_ONE, ADDRESS_ONE));
        assert!(!P2pkhAddress::equals(ADDRESS_ONE, ADDRESS_ONE_TESTNET));
        assert!(!P2pkhAddress::equals(ADDRESS_ONE, "garbage"));
    }
}
