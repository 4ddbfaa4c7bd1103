//! Wordseal - Checksummed word mnemonics for arbitrary byte strings.
//!
//! This crate turns bytes (or UTF-8 text) into a sequence of dictionary
//! words that can be read aloud, written down or typed, and back again:
//! - Base-1024 digit conversion of a byte string treated as one big integer
//! - A 3-word polynomial checksum over the 1024-symbol alphabet
//! - The built-in 1024-word English word list with a reverse index
//! - Text cleanup and best-effort prefix correction of mistyped words

pub mod wordlist;
pub mod digits;
pub mod checksum;
pub mod mnemonic;
pub mod cleanup;
pub mod correction;
pub mod config;

mod error;
pub use error::MnemonicError;

pub use checksum::CHECKSUM_LENGTH_WORDS;
pub use config::CodecConfig;
pub use correction::{heuristic_mnemonic, heuristic_word};
pub use mnemonic::MnemonicCodec;
pub use wordlist::Wordlist;

/// Encode UTF-8 text into a mnemonic using the English word list.
///
/// # Arguments
/// * `text` - The text to encode.
///
/// # Returns
/// The mnemonic words, data words first and the 3 checksum words last.
pub fn encode(text: &str) -> Vec<&'static str> {
    MnemonicCodec::english().encode(text)
}

/// Decode a mnemonic produced by [`encode`] back into text.
///
/// # Arguments
/// * `words` - The mnemonic words, already normalized.
///
/// # Returns
/// `Ok(String)` on success, or an error for short input, unknown words,
/// a checksum mismatch, or non-UTF-8 payloads.
pub fn decode<S: AsRef<str>>(words: &[S]) -> Result<String, MnemonicError> {
    MnemonicCodec::english().decode(words)
}
