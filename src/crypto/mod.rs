// src/crypto/mod.rs

//! Core Cryptography Module
//!
//! The three derivation primitives behind the public account API:
//!
//! - **Mnemonic Encoding**: private-key bytes → BIP-39 phrase (the
//!   deterministic entropy bridge) via [`mnemonic`].
//! - **Derivation Paths**: EIP-2645 account-path construction via [`paths`].
//! - **Key Derivation**: BIP-32 walk plus stark key grinding via
//!   [`key_derive`], producing a [`StarkKeyPair`].

pub mod key_derive;
pub mod mnemonic;
pub mod paths;
pub mod stark;

// Re-exports for cleaner API access
pub use key_derive::keypair_from_path;
pub use paths::account_path;
pub use stark::StarkKeyPair;
