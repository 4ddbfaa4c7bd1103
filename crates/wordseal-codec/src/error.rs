/// Unified error type for mnemonic encoding and decoding.
///
/// Every variant is terminal for the call that produced it; no partial
/// result is returned alongside an error.
#[derive(Debug, thiserror::Error)]
pub enum MnemonicError {
    #[error("insufficient words: expected at least {expected}, got {got}")]
    InsufficientWords { expected: usize, got: usize },

    #[error("invalid word: {0:?}")]
    InvalidWord(String),

    #[error("checksum mismatch")]
    Checksum,

    #[error("digit {0} out of range, must be below 1024")]
    InvalidDigit(u16),

    #[error("decoded payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("invalid word list: {0}")]
    InvalidWordlist(String),
}
