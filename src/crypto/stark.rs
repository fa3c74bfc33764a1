// src/crypto/stark.rs
//
// Stark Curve Key Pairs — scalar validation, point derivation, hex rendering

use num_bigint::BigUint;
use num_traits::Zero;
use starknet_crypto::{get_public_key, Felt};

use crate::error::{StarkKeyError, StarkKeyResult};

/// Order of the stark-friendly curve's generator subgroup (n).
/// Valid private keys are scalars in the open range (0, n).
const EC_ORDER_HEX: &str = "0800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2f";

pub(crate) fn ec_order() -> BigUint {
    BigUint::parse_bytes(EC_ORDER_HEX.as_bytes(), 16).expect("curve order constant is valid hex")
}

/// An immutable key pair on the stark-friendly curve.
///
/// The public key is the x-coordinate of `private · G` — the "stark key" as
/// consumed by StarkEx-style systems. Both halves render as `0x`-prefixed,
/// 64-digit zero-padded lowercase hex, so rendering is unambiguous and a
/// rendered private key loads back to the identical pair.
#[derive(Clone, PartialEq, Eq)]
pub struct StarkKeyPair {
    private: Felt,
    public: Felt,
}

// Custom Debug — never displays the private scalar.
impl std::fmt::Debug for StarkKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StarkKeyPair")
            .field("public", &self.public_hex())
            .field("private", &"[REDACTED]")
            .finish()
    }
}

impl StarkKeyPair {
    /// Load a key pair directly from a hex-encoded private scalar.
    ///
    /// An optional `0x` prefix is accepted; inputs shorter than 32 bytes are
    /// left-padded (scalar semantics). Malformed hex is
    /// [`StarkKeyError::InvalidHexEncoding`]; a scalar of zero, at or above
    /// the curve order, or wider than 32 bytes is
    /// [`StarkKeyError::InvalidPrivateKey`].
    pub fn from_private_hex(private_key: &str) -> StarkKeyResult<Self> {
        let trimmed = private_key.strip_prefix("0x").unwrap_or(private_key);
        let bytes = hex::decode(trimmed)
            .map_err(|e| StarkKeyError::InvalidHexEncoding(e.to_string()))?;
        if bytes.len() > 32 {
            return Err(StarkKeyError::InvalidPrivateKey);
        }
        Self::from_scalar(&BigUint::from_bytes_be(&bytes))
    }

    /// Build a key pair from a private scalar, rejecting values outside (0, n).
    pub(crate) fn from_scalar(scalar: &BigUint) -> StarkKeyResult<Self> {
        if scalar.is_zero() || *scalar >= ec_order() {
            return Err(StarkKeyError::InvalidPrivateKey);
        }
        let private = felt_from_biguint(scalar);
        let public = get_public_key(&private);
        Ok(Self { private, public })
    }

    pub fn public_hex(&self) -> String {
        felt_to_padded_hex(&self.public)
    }

    pub fn private_hex(&self) -> String {
        felt_to_padded_hex(&self.private)
    }
}

fn felt_from_biguint(value: &BigUint) -> Felt {
    let bytes = value.to_bytes_be();
    let mut buf = [0u8; 32];
    buf[32 - bytes.len()..].copy_from_slice(&bytes);
    Felt::from_bytes_be(&buf)
}

fn felt_to_padded_hex(value: &Felt) -> String {
    format!("0x{}", hex::encode(value.to_bytes_be()))
}
