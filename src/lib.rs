//! # stark-key
//!
//! Deterministic key derivation for the stark-friendly elliptic curve used
//! by StarkEx-style layer-2 settlement systems.
//!
//! Two independent entry points:
//!
//! - [`derive_hd_account`]: turn a secp256k1 (Ethereum) private key into a
//!   stark key pair by folding its Ethereum address, an operating layer, an
//!   application name and an index into an EIP-2645 derivation path, reusing
//!   the key bytes as BIP-39 mnemonic entropy, and walking the path down to
//!   a child key on the stark curve.
//! - [`derive_from_private_key`]: load a key pair directly from a
//!   hex-encoded stark-curve scalar.
//!
//! Every operation is a synchronous pure function over its inputs — no I/O,
//! no shared state, no randomness. Identical inputs always produce identical
//! key pairs, which is the property wallet integrations rely on.
//!
//! ```no_run
//! use stark_key::derive_hd_account;
//!
//! let pair = derive_hd_account(
//!     "501c797c4b1fdfa88fb7efdf7c9871b8e0f46dbc44259e3e270e0d4c938165f5",
//!     "starkex",
//!     "starkexdvf",
//!     0,
//! )?;
//! println!("stark key: {}", pair.pub_key);
//! # Ok::<(), stark_key::StarkKeyError>(())
//! ```

pub mod account;
pub mod crypto;
pub mod error;
pub mod eth;

// Re-exports for cleaner API access
pub use account::{derive_from_private_key, derive_hd_account, KeyPair};
pub use error::{StarkKeyError, StarkKeyResult};
