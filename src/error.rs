use thiserror::Error;

pub type StarkKeyResult<T> = std::result::Result<T, StarkKeyError>;

/// Errors produced by the key-derivation pipeline.
///
/// All variants are deterministic input-validation or collaborator failures;
/// nothing here is transient or retryable. The library never logs and never
/// returns partial results: callers get a full `KeyPair` or one of these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StarkKeyError {
    #[error("input is not valid hexadecimal: {0}")]
    InvalidHexEncoding(String),

    #[error("invalid entropy size: expected 32 bytes, got {0}")]
    InvalidEntropySize(usize),

    #[error("entropy length not supported by BIP-39: {0}")]
    InvalidEntropyLength(String),

    #[error("derivation index {0} out of range (must be below 2^31)")]
    InvalidIndex(u32),

    #[error("private key is not a valid stark curve scalar")]
    InvalidPrivateKey,

    #[error("key derivation failed: {0}")]
    DerivationFailed(String),
}
