// src/crypto/paths.rs
//
// Derivation Path Builder — EIP-2645 hierarchical key layout
// Reference: https://github.com/ethereum/EIPs/blob/master/EIPS/eip-2645.md

use sha2::{Digest, Sha256};

use crate::error::{StarkKeyError, StarkKeyResult};

/// EIP-2645 purpose field, registered for layer-2 wallet key derivation.
const PURPOSE: u32 = 2645;

/// BIP-32 hardened-derivation threshold; path indices must stay below it.
const HARDENED_BIT: u32 = 0x8000_0000;

/// Build an EIP-2645 account path from its four domain segments.
///
/// Layout: `m/2645'/layer'/application'/eth_address_1'/eth_address_2'/index`
///
/// - `layer'` — low 31 bits of SHA-256 of the operating-layer name
/// - `application'` — low 31 bits of SHA-256 of the application name
///   (the domain separator: different applications get unrelated keys)
/// - `eth_address_1'` — low 31 bits of the Ethereum address
/// - `eth_address_2'` — bits 31..62 of the Ethereum address
/// - `index` — the caller's account index, non-hardened
///
/// Construction is pure and deterministic. Layer and application strings
/// are hashed as-is, so the caller is trusted for their well-formedness;
/// the address must be valid hex (an optional `0x` prefix is accepted) and
/// the index must fit in 31 bits, anything else is rejected.
pub fn account_path(
    layer: &str,
    application: &str,
    eth_address: &str,
    index: u32,
) -> StarkKeyResult<String> {
    if index >= HARDENED_BIT {
        return Err(StarkKeyError::InvalidIndex(index));
    }

    let layer_int = low_31_bits(&Sha256::digest(layer.as_bytes()));
    let application_int = low_31_bits(&Sha256::digest(application.as_bytes()));

    let address_bytes = hex::decode(eth_address.strip_prefix("0x").unwrap_or(eth_address))
        .map_err(|e| StarkKeyError::InvalidHexEncoding(e.to_string()))?;
    let address_tail = tail_u64(&address_bytes);
    let eth_address_1 = (address_tail & 0x7FFF_FFFF) as u32;
    let eth_address_2 = ((address_tail >> 31) & 0x7FFF_FFFF) as u32;

    Ok(format!(
        "m/{PURPOSE}'/{layer_int}'/{application_int}'/{eth_address_1}'/{eth_address_2}'/{index}"
    ))
}

/// Low 31 bits of a big-endian byte string, as required for each hardened
/// path segment (BIP-32 child numbers are 31-bit).
fn low_31_bits(bytes: &[u8]) -> u32 {
    (tail_u64(bytes) & 0x7FFF_FFFF) as u32
}

/// Last 8 bytes as a big-endian integer, left-padded with zeros when the
/// input is shorter.
fn tail_u64(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    let take = bytes.len().min(8);
    buf[8 - take..].copy_from_slice(&bytes[bytes.len() - take..]);
    u64::from_be_bytes(buf)
}
