// src/crypto/key_derive.rs
//
// Hierarchical Key Derivation — BIP-32 walk + stark key grinding
//
// A BIP-39 seed is walked down an EIP-2645 path with plain BIP-32
// (HMAC-SHA512); the resulting secp256k1-sized child key is then "ground"
// onto the stark curve's scalar field.

use std::str::FromStr;

use bip32::{DerivationPath, XPrv};
use bip39::Mnemonic;
use num_bigint::BigUint;
use num_traits::One;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::crypto::mnemonic;
use crate::crypto::stark::{ec_order, StarkKeyPair};
use crate::error::{StarkKeyError, StarkKeyResult};

/// Derive the stark key pair at `path` from a mnemonic.
///
/// Deterministic given (mnemonic, path): same inputs, same pair, always.
pub fn keypair_from_path(mnemonic: &Mnemonic, path: &str) -> StarkKeyResult<StarkKeyPair> {
    let seed = mnemonic::to_seed(mnemonic);

    let root_xprv = XPrv::new(&seed[..])
        .map_err(|e| StarkKeyError::DerivationFailed(e.to_string()))?;

    let derivation_path = DerivationPath::from_str(path).map_err(|e| {
        StarkKeyError::DerivationFailed(format!("invalid path '{path}': {e}"))
    })?;

    let mut child_xprv = root_xprv;
    for child_num in derivation_path {
        child_xprv = child_xprv
            .derive_child(child_num)
            .map_err(|e| StarkKeyError::DerivationFailed(e.to_string()))?;
    }

    let child_key = Zeroizing::new(child_xprv.private_key().to_bytes().to_vec());
    let scalar = grind_key(&child_key)?;
    StarkKeyPair::from_scalar(&scalar)
}

/// Map a 256-bit key onto a uniformly distributed stark-curve scalar.
///
/// This is the StarkWare `grindKey` procedure, byte-exact:
/// candidates are `SHA-256(key ‖ index)` with a single-byte index; any
/// candidate at or above `2^256 - (2^256 mod n)` is rejected (it would bias
/// the final `mod n` reduction) and re-hashed with the next index. Rejection
/// happens with probability < 2^-4 per round, so the loop all but always
/// terminates on the first candidate.
fn grind_key(key_seed: &[u8]) -> StarkKeyResult<BigUint> {
    let order = ec_order();
    let two_pow_256 = BigUint::one() << 256u32;
    let max_allowed = &two_pow_256 - (&two_pow_256 % &order);

    let mut candidate = hash_key_with_index(key_seed, 0);
    let mut index: u8 = 1;
    while candidate >= max_allowed {
        candidate = hash_key_with_index(&to_fixed_bytes(&candidate), index);
        index = index.checked_add(1).ok_or_else(|| {
            StarkKeyError::DerivationFailed("key grinding did not converge".to_string())
        })?;
    }
    Ok(candidate % order)
}

fn hash_key_with_index(key: &[u8], index: u8) -> BigUint {
    let mut hasher = Sha256::new();
    hasher.update(key);
    hasher.update([index]);
    BigUint::from_bytes_be(&hasher.finalize())
}

fn to_fixed_bytes(value: &BigUint) -> [u8; 32] {
    let bytes = value.to_bytes_be();
    let mut buf = [0u8; 32];
    buf[32 - bytes.len()..].copy_from_slice(&bytes);
    buf
}
