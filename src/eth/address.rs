// src/eth/address.rs
//
// Ethereum Address Derivation — Keccak-256, secp256k1

use k256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey};
use tiny_keccak::{Hasher, Keccak};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{StarkKeyError, StarkKeyResult};

/// True if the string carries a `0x` prefix.
#[inline]
pub fn is_hex_prefixed(s: &str) -> bool {
    s.starts_with("0x")
}

/// Normalize a hex string to the canonical `0x`-prefixed form.
///
/// The address hashing below always produces an unprefixed string; downstream
/// consumers (path construction in particular) rely on the prefixed form, so
/// the invariant is enforced here rather than trusted.
#[inline]
pub fn ensure_hex_prefix(s: String) -> String {
    if is_hex_prefixed(&s) {
        s
    } else {
        format!("0x{s}")
    }
}

/// Derive the canonical Ethereum address of a secp256k1 private key.
///
/// # Algorithm
/// 1. `priv_key` (32B) → secp256k1 → public key (uncompressed, 65B)
/// 2. drop the 0x04 prefix byte → 64B
/// 3. Keccak-256 → 32B
/// 4. last 20 bytes → address
///
/// Returned as lowercase hex with a `0x` prefix — this system's canonical
/// address form (no EIP-55 checksum; the derivation path hashes the
/// lowercase rendering).
///
/// Intermediate key material is zeroized before returning. The caller is
/// responsible for zeroing `priv_key` itself.
pub fn from_private_key(priv_key: &[u8]) -> StarkKeyResult<String> {
    let secret_key = SecretKey::from_slice(priv_key).map_err(|e| {
        StarkKeyError::DerivationFailed(format!("invalid secp256k1 private key: {e}"))
    })?;

    let public_key = secret_key.public_key();
    let encoded = Zeroizing::new(public_key.to_encoded_point(false));
    let pub_key_raw = &encoded.as_bytes()[1..];

    let mut hasher = Keccak::v256();
    let mut hash = [0u8; 32];
    hasher.update(pub_key_raw);
    hasher.finalize(&mut hash);

    let address = ensure_hex_prefix(hex::encode(&hash[12..]));
    hash.zeroize();

    Ok(address)
}
