// wallet-keypair/src/signer/mod.rs

//! ECDSA Signing
//!
//! - **Backends**: fast path (`secp256k1` / libsecp256k1) that may abstain,
//!   reference path (`k256`) that always answers. See [`FastBackend`], [`ReferenceBackend`].
//! - **Dispatcher**: fast backend first, reference backend only on [`Attempt::Abstain`] via [`SignDispatcher`].
//! - **Signature**: compact `r ‖ s` with DER conversion via [`Signature`].

pub mod backend;
pub mod dispatcher;
pub mod libsecp;
pub mod reference;
pub mod signature;

use once_cell::sync::Lazy;

// Re-exports for cleaner API access
pub use backend::{Attempt, FastBackend, NoFastPath, ReferenceBackend};
pub use dispatcher::SignDispatcher;
pub use libsecp::Libsecp256k1Backend;
pub use reference::K256Backend;
pub use signature::Signature;

/// Process-wide dispatcher used by [`crate::keys::KeyPair::sign`] / [`crate::keys::KeyPair::verify`]
pub static DEFAULT_DISPATCHER: Lazy<SignDispatcher> = Lazy::new(SignDispatcher::default);
