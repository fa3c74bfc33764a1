// src/account.rs
//
// Public Account API — the two derivation entry points

use zeroize::Zeroizing;

use crate::crypto::{key_derive, mnemonic, paths, stark::StarkKeyPair};
use crate::error::{StarkKeyError, StarkKeyResult};
use crate::eth;

/// A derived stark-curve key pair, both halves as `0x`-prefixed hex.
///
/// Plain immutable value: no identity, no caching, no relation to any other
/// pair. Each derivation call produces an independent instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub pub_key: String,
    pub priv_key: String,
}

impl From<StarkKeyPair> for KeyPair {
    fn from(pair: StarkKeyPair) -> Self {
        Self {
            pub_key: pair.public_hex(),
            priv_key: pair.private_hex(),
        }
    }
}

/// Derive the stark HD account for an Ethereum private key.
///
/// # Arguments
/// * `priv_key` - secp256k1 private key in hex (optional `0x` prefix)
/// * `layer` - operating-layer name (usually `"starkex"`)
/// * `application` - application name; the domain separator, so different
///   applications derive unrelated keys from the same Ethereum key
/// * `index` - account index among the wallets derivable from this seed
///
/// # Pipeline
/// 1. hex-decode and require exactly 32 bytes (the one explicit validation;
///    everything after is pure derivation)
/// 2. Ethereum address of the key
/// 3. the same 32 bytes become BIP-39 mnemonic entropy
/// 4. EIP-2645 path from (layer, application, address, index)
/// 5. BIP-32 walk + grinding onto the stark curve
///
/// The address derivation and the mnemonic consume the same decoded buffer,
/// so both see byte-for-byte identical key material.
pub fn derive_hd_account(
    priv_key: &str,
    layer: &str,
    application: &str,
    index: u32,
) -> StarkKeyResult<KeyPair> {
    let trimmed = priv_key.strip_prefix("0x").unwrap_or(priv_key);
    let key_bytes = Zeroizing::new(
        hex::decode(trimmed).map_err(|e| StarkKeyError::InvalidHexEncoding(e.to_string()))?,
    );
    if key_bytes.len() != 32 {
        return Err(StarkKeyError::InvalidEntropySize(key_bytes.len()));
    }

    let eth_address = eth::address::from_private_key(&key_bytes)?;
    let mnemonic = mnemonic::from_entropy(&key_bytes)?;
    let path = paths::account_path(layer, application, &eth_address, index)?;
    let pair = key_derive::keypair_from_path(&mnemonic, &path)?;

    Ok(pair.into())
}

/// Load a stark key pair directly from a stark-curve private key.
///
/// No hierarchical derivation and no mnemonic involved; the scalar is
/// validated against the curve order and the public key computed from it.
pub fn derive_from_private_key(private_key: &str) -> StarkKeyResult<KeyPair> {
    StarkKeyPair::from_private_hex(private_key).map(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PRIV_KEY: &str =
        "501c797c4b1fdfa88fb7efdf7c9871b8e0f46dbc44259e3e270e0d4c938165f5";
    const LAYER: &str = "starkex";
    const APPLICATION: &str = "starkexdvf";

    #[test]
    fn test_hd_account_deterministic() {
        let a = derive_hd_account(TEST_PRIV_KEY, LAYER, APPLICATION, 0).unwrap();
        let b = derive_hd_account(TEST_PRIV_KEY, LAYER, APPLICATION, 0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_hd_account_key_shape() {
        let pair = derive_hd_account(TEST_PRIV_KEY, LAYER, APPLICATION, 0).unwrap();
        for key in [&pair.pub_key, &pair.priv_key] {
            assert!(key.starts_with("0x"));
            assert_eq!(key.len(), 66);
        }
    }

    #[test]
    fn test_prefixed_input_equivalent() {
        let bare = derive_hd_account(TEST_PRIV_KEY, LAYER, APPLICATION, 0).unwrap();
        let prefixed =
            derive_hd_account(&format!("0x{TEST_PRIV_KEY}"), LAYER, APPLICATION, 0).unwrap();
        assert_eq!(bare, prefixed);
    }

    #[test]
    fn test_index_separates_accounts() {
        let index_0 = derive_hd_account(TEST_PRIV_KEY, LAYER, APPLICATION, 0).unwrap();
        let index_1 = derive_hd_account(TEST_PRIV_KEY, LAYER, APPLICATION, 1).unwrap();
        assert_ne!(index_0, index_1);
    }

    #[test]
    fn test_application_separates_accounts() {
        let dvf = derive_hd_account(TEST_PRIV_KEY, LAYER, APPLICATION, 0).unwrap();
        let other = derive_hd_account(TEST_PRIV_KEY, LAYER, "starkexdex", 0).unwrap();
        assert_ne!(dvf, other);
    }

    #[test]
    fn test_layer_separates_accounts() {
        let starkex = derive_hd_account(TEST_PRIV_KEY, LAYER, APPLICATION, 0).unwrap();
        let other = derive_hd_account(TEST_PRIV_KEY, "starknet", APPLICATION, 0).unwrap();
        assert_ne!(starkex, other);
    }

    #[test]
    fn test_derived_key_round_trips_through_direct_load() {
        let derived = derive_hd_account(TEST_PRIV_KEY, LAYER, APPLICATION, 3).unwrap();
        let reloaded = derive_from_private_key(&derived.priv_key).unwrap();
        assert_eq!(derived, reloaded);
    }

    #[test]
    fn test_wrong_entropy_size_fails_fast() {
        // 31 bytes
        let short = &TEST_PRIV_KEY[..62];
        assert_eq!(
            derive_hd_account(short, LAYER, APPLICATION, 0),
            Err(StarkKeyError::InvalidEntropySize(31))
        );
        // 33 bytes
        let long = format!("{TEST_PRIV_KEY}ff");
        assert_eq!(
            derive_hd_account(&long, LAYER, APPLICATION, 0),
            Err(StarkKeyError::InvalidEntropySize(33))
        );
    }

    #[test]
    fn test_malformed_hex_rejected() {
        assert!(matches!(
            derive_hd_account("not hex at all", LAYER, APPLICATION, 0),
            Err(StarkKeyError::InvalidHexEncoding(_))
        ));
        // Odd-length input must fail the hex decode, never be truncated.
        let odd = &TEST_PRIV_KEY[..63];
        assert!(matches!(
            derive_hd_account(odd, LAYER, APPLICATION, 0),
            Err(StarkKeyError::InvalidHexEncoding(_))
        ));
    }

    #[test]
    fn test_hardened_index_rejected() {
        assert_eq!(
            derive_hd_account(TEST_PRIV_KEY, LAYER, APPLICATION, u32::MAX),
            Err(StarkKeyError::InvalidIndex(u32::MAX))
        );
    }

    #[test]
    fn test_direct_load_known_vector() {
        let pair = derive_from_private_key(
            "0x03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc",
        )
        .unwrap();
        assert_eq!(
            pair.pub_key,
            "0x077a3b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43"
        );
    }

    #[test]
    fn test_direct_load_invalid_scalar() {
        assert_eq!(
            derive_from_private_key("0x00"),
            Err(StarkKeyError::InvalidPrivateKey)
        );
    }
}
