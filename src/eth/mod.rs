//! Ethereum-side primitives.
//!
//! The only thing this crate needs from the Ethereum world is the canonical
//! address of a secp256k1 private key: the address is folded into the
//! EIP-2645 derivation path, tying the stark identity to the Ethereum one.

pub mod address;

pub use address::{ensure_hex_prefix, from_private_key, is_hex_prefixed};
