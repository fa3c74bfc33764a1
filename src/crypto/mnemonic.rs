// src/crypto/mnemonic.rs
//
// Mnemonic Encoding — BIP-39 entropy bridge

use bip39::Mnemonic;
use zeroize::Zeroizing;

use crate::error::{StarkKeyError, StarkKeyResult};

/// Encode raw entropy bytes as a BIP-39 mnemonic.
///
/// The entropy here is deliberately the caller's secp256k1 private key, not
/// fresh randomness: reusing the key bytes as mnemonic entropy is the
/// deterministic link between the Ethereum identity and the stark-curve
/// identity. Do not replace this with random entropy — callers rely on
/// reproducible derivation.
///
/// 32 bytes of entropy yield a 24-word phrase. Unsupported sizes surface as
/// [`StarkKeyError::InvalidEntropyLength`]; the orchestration layer already
/// enforces 32 bytes, so this is a defensive boundary.
pub fn from_entropy(entropy: &[u8]) -> StarkKeyResult<Mnemonic> {
    Mnemonic::from_entropy(entropy)
        .map_err(|e| StarkKeyError::InvalidEntropyLength(e.to_string()))
}

/// Derive the 64-byte BIP-39 seed of a mnemonic (PBKDF2-HMAC-SHA512).
///
/// The empty passphrase is part of the derivation contract; a passphrase
/// would change every downstream key.
pub fn to_seed(mnemonic: &Mnemonic) -> Zeroizing<[u8; 64]> {
    Zeroizing::new(mnemonic.to_seed(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_32_byte_entropy_gives_24_words() {
        let entropy = [0x80u8; 32];
        let mnemonic = from_entropy(&entropy).unwrap();
        assert_eq!(mnemonic.word_count(), 24);
    }

    #[test]
    fn test_known_entropy_vector() {
        // BIP-39 reference vector for 32 bytes of 0x80.
        let entropy = [0x80u8; 32];
        let mnemonic = from_entropy(&entropy).unwrap();
        assert_eq!(
            mnemonic.to_string(),
            "letter advice cage absurd amount doctor acoustic avoid \
             letter advice cage absurd amount doctor acoustic avoid \
             letter advice cage absurd amount doctor acoustic bless"
        );
    }

    #[test]
    fn test_deterministic() {
        let entropy = [0x42u8; 32];
        let m1 = from_entropy(&entropy).unwrap();
        let m2 = from_entropy(&entropy).unwrap();
        assert_eq!(m1.to_string(), m2.to_string());
    }

    #[test]
    fn test_different_entropy_different_phrase() {
        let m1 = from_entropy(&[0x01u8; 32]).unwrap();
        let m2 = from_entropy(&[0x02u8; 32]).unwrap();
        assert_ne!(m1.to_string(), m2.to_string());
    }

    #[test]
    fn test_unsupported_entropy_length() {
        assert!(matches!(
            from_entropy(&[0u8; 31]),
            Err(StarkKeyError::InvalidEntropyLength(_))
        ));
        assert!(matches!(
            from_entropy(&[]),
            Err(StarkKeyError::InvalidEntropyLength(_))
        ));
    }

    #[test]
    fn test_seed_length_and_determinism() {
        let mnemonic = from_entropy(&[0x11u8; 32]).unwrap();
        let s1 = to_seed(&mnemonic);
        let s2 = to_seed(&mnemonic);
        assert_eq!(s1.len(), 64);
        assert_eq!(*s1, *s2);
    }
}
