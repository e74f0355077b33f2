// wallet-keypair/src/keys/scalar.rs

use crate::error::{KeyError, WalletResult};
use k256::elliptic_curve::subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// 256-bit private scalar, big-endian.
///
/// Không tự validate range: việc kiểm tra `1 <= d <= n-1` thuộc về
/// [`KeyPair`](crate::keys::KeyPair) lúc khởi tạo.
///
/// # Security
/// - **ZeroizeOnDrop**: bytes bị ghi đè bằng 0 khi drop
/// - **No Debug Leak**: Debug không in giá trị
/// - Equality so sánh constant-time
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateScalar([u8; 32]);

impl PrivateScalar {
    #[inline]
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse big-endian magnitude có độ dài bất kỳ.
    ///
    /// Leading zero bytes được bỏ qua; giá trị vượt quá 256 bit
    /// trả về `InvalidPrivateKey`.
    pub fn from_be_slice(bytes: &[u8]) -> WalletResult<Self> {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let significant = &bytes[start..];
        if significant.len() > 32 {
            return Err(KeyError::InvalidPrivateKey.into());
        }

        let mut out = [0u8; 32];
        out[32 - significant.len()..].copy_from_slice(significant);
        Ok(Self(out))
    }

    pub fn from_u64(value: u64) -> Self {
        let mut out = [0u8; 32];
        out[24..].copy_from_slice(&value.to_be_bytes());
        Self(out)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl PartialEq for PrivateScalar {
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl Eq for PrivateScalar {}

impl std::fmt::Debug for PrivateScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PrivateScalar([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;

    #[test]
    fn test_from_be_slice_pads_left() {
        let scalar = PrivateScalar::from_be_slice(&[0x01, 0x02]).unwrap();
        let mut expected = [0u8; 32];
        expected[30] = 0x01;
        expected[31] = 0x02;
        assert_eq!(scalar.as_bytes(), &expected);
    }

    #[test]
    fn test_from_be_slice_strips_leading_zeros() {
        let mut long = vec![0u8; 8];
        long.extend_from_slice(&[0xAB; 32]);
        let scalar = PrivateScalar::from_be_slice(&long).unwrap();
        assert_eq!(scalar.as_bytes(), &[0xAB; 32]);
    }

    #[test]
    fn test_from_be_slice_too_large() {
        let mut too_big = vec![0x01];
        too_big.extend_from_slice(&[0u8; 32]);
        assert_eq!(
            PrivateScalar::from_be_slice(&too_big),
            Err(WalletError::Key(KeyError::InvalidPrivateKey))
        );
    }

    #[test]
    fn test_from_u64() {
        let scalar = PrivateScalar::from_u64(0x0102);
        assert_eq!(scalar, PrivateScalar::from_be_slice(&[0x01, 0x02]).unwrap());
        assert_ne!(scalar, PrivateScalar::from_u64(0x0103));
    }

    #[test]
    fn test_debug_redacted() {
        let scalar = PrivateScalar::from_be_bytes([0x42; 32]);
        let debug_output = format!("{:?}", scalar);
        assert!(!debug_output.contains("42"));
        assert!(debug_output.contains("REDACTED"));
    }
}
