// wallet-keypair/src/network/mod.rs
//
// Network Module - Version bytes cho từng network
//
// Cung cấp:
// - Models: NetworkParams + presets (bitcoin, testnet, regtest, litecoin, dogecoin)
// - Registry: danh sách có thứ tự, dùng khi decode WIF

pub mod models;
pub mod registry;

// Re-export cho convenience
pub use models::*;
pub use registry::*;
