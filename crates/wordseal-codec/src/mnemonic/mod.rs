//! Mnemonic encoding and decoding.
//!
//! A mnemonic is the base-1024 digits of the payload, each written as a
//! word from the list, followed by three checksum words. Decoding checks
//! the word count, resolves every word, verifies the checksum, and only
//! then rebuilds the payload.

use tracing::debug;

use crate::checksum::{create_checksum, verify_checksum, CHECKSUM_LENGTH_WORDS};
use crate::cleanup;
use crate::config::CodecConfig;
use crate::correction;
use crate::digits::{bytes_to_digits, digits_to_bytes};
use crate::wordlist::{self, Wordlist};
use crate::MnemonicError;

/// Separator between words in the text form of a mnemonic.
pub const WORD_SEPARATOR: &str = " ";

/// Fewest words a decodable mnemonic can have: one data word plus checksum.
pub const MIN_WORDS: usize = CHECKSUM_LENGTH_WORDS + 1;

/// Encoder and decoder bound to a word list and checksum customization.
///
/// Holds no mutable state; one codec can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MnemonicCodec<'w> {
    wordlist: &'w Wordlist,
    customization: Vec<u16>,
}

impl MnemonicCodec<'static> {
    /// Codec over the built-in English list with no customization.
    pub fn english() -> Self {
        MnemonicCodec::new(wordlist::english())
    }
}

impl<'w> MnemonicCodec<'w> {
    /// Codec over `wordlist` with no customization.
    pub fn new(wordlist: &'w Wordlist) -> Self {
        MnemonicCodec {
            wordlist,
            customization: Vec::new(),
        }
    }

    /// Codec over `wordlist` whose checksums mix in `customization`.
    ///
    /// Mnemonics produced with one customization fail checksum
    /// verification under any other.
    ///
    /// # Returns
    /// `InvalidDigit` if any customization digit is 1024 or above.
    pub fn with_customization(
        wordlist: &'w Wordlist,
        customization: Vec<u16>,
    ) -> Result<Self, MnemonicError> {
        Self::from_config(wordlist, &CodecConfig::new(customization))
    }

    /// Codec over `wordlist` configured by `config`.
    pub fn from_config(wordlist: &'w Wordlist, config: &CodecConfig) -> Result<Self, MnemonicError> {
        config.validate()?;
        Ok(MnemonicCodec {
            wordlist,
            customization: config.customization.clone(),
        })
    }

    /// The word list this codec maps digits through.
    pub fn wordlist(&self) -> &'w Wordlist {
        self.wordlist
    }

    /// The checksum customization prefix.
    pub fn customization(&self) -> &[u16] {
        &self.customization
    }

    /// Encode raw bytes as mnemonic words.
    ///
    /// Leading zero bytes are not represented; see [`crate::digits`].
    ///
    /// # Arguments
    /// * `bytes` - The payload.
    ///
    /// # Returns
    /// At least four words: one or more data words, then the checksum.
    pub fn encode_bytes(&self, bytes: &[u8]) -> Vec<&'static str> {
        let data = bytes_to_digits(bytes);
        let checksum = create_checksum(&data, &self.customization);
        let words = self.wordlist.words();
        data.iter()
            .chain(checksum.iter())
            .map(|&d| words[usize::from(d)])
            .collect()
    }

    /// Encode UTF-8 text as mnemonic words.
    pub fn encode(&self, text: &str) -> Vec<&'static str> {
        self.encode_bytes(text.as_bytes())
    }

    /// Encode UTF-8 text as a single space-separated mnemonic.
    pub fn encode_to_string(&self, text: &str) -> String {
        self.encode(text).join(WORD_SEPARATOR)
    }

    /// Resolve words to their digits without checking the checksum.
    ///
    /// # Returns
    /// `InvalidWord` naming the first word missing from the list.
    pub fn to_digits<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<u16>, MnemonicError> {
        self.wordlist.to_digits(words)
    }

    /// Check word count, word validity and checksum without decoding.
    pub fn validate<S: AsRef<str>>(&self, words: &[S]) -> Result<(), MnemonicError> {
        self.verified_data(words).map(|_| ())
    }

    /// Decode mnemonic words back into raw bytes.
    ///
    /// # Arguments
    /// * `words` - Normalized mnemonic words, checksum last.
    ///
    /// # Returns
    /// `Ok(Vec<u8>)` on success, or `InsufficientWords`, `InvalidWord` or
    /// `Checksum`.
    pub fn decode_bytes<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<u8>, MnemonicError> {
        let data = self.verified_data(words)?;
        digits_to_bytes(&data)
    }

    /// Decode mnemonic words back into UTF-8 text.
    ///
    /// # Returns
    /// As [`decode_bytes`](Self::decode_bytes), plus `InvalidUtf8` when the
    /// payload was not text.
    pub fn decode<S: AsRef<str>>(&self, words: &[S]) -> Result<String, MnemonicError> {
        let bytes = self.decode_bytes(words)?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Decode a space-separated mnemonic.
    ///
    /// The text must already be normalized: words separated by exactly one
    /// ASCII space. Use [`decode_text`](Self::decode_text) for raw input.
    pub fn decode_str(&self, mnemonic: &str) -> Result<String, MnemonicError> {
        self.decode(&split_words(mnemonic))
    }

    /// Normalize hand-entered text, then decode it.
    pub fn decode_text(&self, text: &str) -> Result<String, MnemonicError> {
        let normalized = cleanup::normalize_with(text, self.wordlist);
        self.decode_str(&normalized)
    }

    /// Normalize and prefix-correct hand-entered text, then decode it.
    ///
    /// Corrections are guesses; the checksum still has the final say.
    pub fn recover(&self, text: &str) -> Result<String, MnemonicError> {
        let corrected = correction::heuristic_mnemonic_with(text, self.wordlist);
        self.decode_str(&corrected)
    }

    /// Data digits of a mnemonic whose checksum verifies.
    fn verified_data<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<u16>, MnemonicError> {
        if words.len() < MIN_WORDS {
            debug!("rejected mnemonic of {} words", words.len());
            return Err(MnemonicError::InsufficientWords {
                expected: MIN_WORDS,
                got: words.len(),
            });
        }

        let split = words.len() - CHECKSUM_LENGTH_WORDS;
        let (data_words, checksum_words) = words.split_at(split);
        let mut full = self.to_digits(data_words).inspect_err(log_invalid_word)?;
        full.extend(self.to_digits(checksum_words).inspect_err(log_invalid_word)?);

        if !verify_checksum(&full, &self.customization) {
            debug!("checksum mismatch over {} words", words.len());
            return Err(MnemonicError::Checksum);
        }

        full.truncate(split);
        Ok(full)
    }
}

impl Default for MnemonicCodec<'static> {
    fn default() -> Self {
        MnemonicCodec::english()
    }
}

/// Split normalized mnemonic text into words. Empty text has no words.
pub fn split_words(mnemonic: &str) -> Vec<&str> {
    if mnemonic.is_empty() {
        return Vec::new();
    }
    mnemonic.split(WORD_SEPARATOR).collect()
}

fn log_invalid_word(err: &MnemonicError) {
    debug!("rejected mnemonic: {}", err);
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_WORLD: [&str; 14] = [
        "access", "major", "forget", "hockey", "route", "search", "bid", "hunt",
        "sister", "shock", "ancient", "clap", "smoke", "network",
    ];

    #[test]
    fn test_encode_hello_world() {
        let codec = MnemonicCodec::english();
        assert_eq!(codec.encode("Hello, World!"), HELLO_WORLD.to_vec());
        assert_eq!(codec.decode(&HELLO_WORLD).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_encode_empty_string() {
        let codec = MnemonicCodec::english();
        let words = codec.encode("");
        assert_eq!(words, vec!["able", "brave", "dust", "theory"]);
        assert_eq!(codec.decode(&words).unwrap(), "");
    }

    #[test]
    fn test_encode_short_strings() {
        let codec = MnemonicCodec::english();
        assert_eq!(codec.encode("a"), vec!["blush", "master", "attract", "worry"]);
        assert_eq!(codec.encode_to_string("hi"), "alone box bid critic list");
        assert_eq!(codec.decode_str("alone box bid critic list").unwrap(), "hi");
    }

    #[test]
    fn test_multibyte_roundtrip() {
        let codec = MnemonicCodec::english();
        let words = codec.encode("héllo ✓");
        assert_eq!(
            words,
            vec!["happy", "attract", "nothing", "brave", "hundred", "lonely", "claw", "celery", "skull", "radio", "best"]
        );
        assert_eq!(codec.decode(&words).unwrap(), "héllo ✓");
    }

    #[test]
    fn test_length_is_data_plus_checksum() {
        let codec = MnemonicCodec::english();
        for text in ["", "a", "hi", "Hello, World!"] {
            let data = bytes_to_digits(text.as_bytes());
            assert_eq!(codec.encode(text).len(), data.len() + CHECKSUM_LENGTH_WORDS);
        }
    }

    #[test]
    fn test_leading_zero_bytes_lost() {
        let codec = MnemonicCodec::english();
        let words = codec.encode_bytes(&[0x00, 0x01]);
        assert_eq!(words.len(), 4);
        assert_eq!(codec.decode_bytes(&words).unwrap(), vec![0x01]);
        assert_eq!(codec.decode(&codec.encode("\u{0}hi")).unwrap(), "hi");
    }

    #[test]
    fn test_insufficient_words() {
        let codec = MnemonicCodec::english();
        for n in 0..MIN_WORDS {
            let words = &HELLO_WORLD[..n];
            match codec.decode(words) {
                Err(MnemonicError::InsufficientWords { expected, got }) => {
                    assert_eq!(expected, 4);
                    assert_eq!(got, n);
                }
                other => panic!("unexpected: {:?}", other),
            }
        }
        assert!(matches!(
            codec.decode_str(""),
            Err(MnemonicError::InsufficientWords { got: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_word_is_named() {
        let codec = MnemonicCodec::english();
        let mut words = HELLO_WORLD.to_vec();
        words[3] = "hockeyy";
        match codec.decode(&words) {
            Err(MnemonicError::InvalidWord(w)) => assert_eq!(w, "hockeyy"),
            other => panic!("unexpected: {:?}", other),
        }

        let mut words = HELLO_WORLD.to_vec();
        words[13] = "Network";
        match codec.decode(&words) {
            Err(MnemonicError::InvalidWord(w)) => assert_eq!(w, "Network"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_checksum_mismatch() {
        let codec = MnemonicCodec::english();
        let mut words = HELLO_WORLD.to_vec();
        words[0] = "major";
        assert!(matches!(codec.decode(&words), Err(MnemonicError::Checksum)));
        assert!(matches!(codec.validate(&words), Err(MnemonicError::Checksum)));
        assert!(codec.validate(&HELLO_WORLD).is_ok());
    }

    #[test]
    fn test_decode_str_requires_single_spaces() {
        let codec = MnemonicCodec::english();
        let doubled = HELLO_WORLD.join("  ");
        assert!(matches!(codec.decode_str(&doubled), Err(MnemonicError::InvalidWord(w)) if w.is_empty()));
    }

    #[test]
    fn test_decode_text_normalizes() {
        let codec = MnemonicCodec::english();
        let messy = "  Access, MAJOR forget-\nhockey. route search bid hunt sister shock ancient clap smoke network\n";
        assert_eq!(codec.decode_text(messy).unwrap(), "Hello, World!");
        assert_eq!(codec.decode_text(messy).unwrap(), codec.decode(&HELLO_WORLD).unwrap());
    }

    #[test]
    fn test_recover_corrects_typos() {
        let codec = MnemonicCodec::english();
        let typed = "acces majr forgett hockey route searh bid hunt sistr shock ancient clap smoke network";
        assert!(matches!(codec.decode_text(typed), Err(MnemonicError::InvalidWord(_))));
        assert_eq!(codec.recover(typed).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_recover_wrong_guess_fails_checksum() {
        let codec = MnemonicCodec::english();
        // "serch" falls back to "ser" and picks "series", not "search".
        let typed = "access major forget hockey route serch bid hunt sister shock ancient clap smoke network";
        assert!(matches!(codec.recover(typed), Err(MnemonicError::Checksum)));
    }

    #[test]
    fn test_customization_separates_domains() {
        let list = wordlist::english();
        let custom = MnemonicCodec::with_customization(list, vec![7]).unwrap();
        let words = custom.encode("Hello, World!");
        assert_eq!(&words[11..], &["enhance", "goat", "still"]);
        assert_eq!(custom.decode(&words).unwrap(), "Hello, World!");
        assert!(matches!(
            MnemonicCodec::english().decode(&words),
            Err(MnemonicError::Checksum)
        ));
        assert!(matches!(
            custom.decode(&HELLO_WORLD),
            Err(MnemonicError::Checksum)
        ));
        assert_eq!(custom.customization(), &[7]);
    }

    #[test]
    fn test_customization_rejects_large_digit() {
        let err = MnemonicCodec::with_customization(wordlist::english(), vec![1024]).unwrap_err();
        assert!(matches!(err, MnemonicError::InvalidDigit(1024)));
    }

    #[test]
    fn test_non_utf8_payload() {
        let codec = MnemonicCodec::english();
        let words = codec.encode_bytes(&[0xff, 0xfe]);
        assert_eq!(codec.decode_bytes(&words).unwrap(), vec![0xff, 0xfe]);
        assert!(matches!(codec.decode(&words), Err(MnemonicError::InvalidUtf8(_))));
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(MnemonicCodec::default(), MnemonicCodec::english());
        assert!(MnemonicCodec::default().customization().is_empty());
    }
}
