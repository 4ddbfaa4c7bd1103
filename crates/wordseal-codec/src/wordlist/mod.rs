//! Word lists mapping digits 0-1023 to words and back.
//!
//! A `Wordlist` wraps a static table of exactly 1024 unique lowercase
//! words together with a reverse index built once at construction. The
//! built-in English list is shared process-wide through [`english`].

pub mod english;

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::MnemonicError;
pub use english::WORDLIST_SIZE;

static ENGLISH: LazyLock<Wordlist> =
    LazyLock::new(|| Wordlist::new(&english::WORDS).expect("built-in English word list is valid"));

/// The built-in English word list.
pub fn english() -> &'static Wordlist {
    &ENGLISH
}

/// An ordered table of 1024 words with a word-to-digit reverse index.
#[derive(Clone)]
pub struct Wordlist {
    words: &'static [&'static str],
    index: HashMap<&'static str, u16>,
}

impl Wordlist {
    /// Build a word list from a static table.
    ///
    /// The table must hold exactly 1024 entries, each a non-empty run of
    /// lowercase ASCII letters, with no duplicates.
    ///
    /// # Arguments
    /// * `words` - The table, indexed by digit value.
    ///
    /// # Returns
    /// `Ok(Wordlist)` on success, or `InvalidWordlist` describing the
    /// first problem found.
    pub fn new(words: &'static [&'static str]) -> Result<Self, MnemonicError> {
        if words.len() != WORDLIST_SIZE {
            return Err(MnemonicError::InvalidWordlist(format!(
                "expected {} words, got {}",
                WORDLIST_SIZE,
                words.len()
            )));
        }

        let mut index = HashMap::with_capacity(WORDLIST_SIZE);
        for (i, &word) in words.iter().enumerate() {
            if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(MnemonicError::InvalidWordlist(format!(
                    "word {} ({:?}) is not lowercase ASCII letters",
                    i, word
                )));
            }
            // i < 1024 after the length check above.
            if index.insert(word, i as u16).is_some() {
                return Err(MnemonicError::InvalidWordlist(format!(
                    "duplicate word {:?} at index {}",
                    word, i
                )));
            }
        }

        Ok(Wordlist { words, index })
    }

    /// Look up the word for a digit.
    ///
    /// # Returns
    /// `None` if `digit` is 1024 or above.
    pub fn word(&self, digit: u16) -> Option<&'static str> {
        self.words.get(usize::from(digit)).copied()
    }

    /// Look up the digit for a word. Matching is exact and case-sensitive.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    /// Whether `word` is an entry of this list.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// First entry, in table order, that starts with `prefix`.
    pub fn first_with_prefix(&self, prefix: &str) -> Option<&'static str> {
        self.words.iter().copied().find(|w| w.starts_with(prefix))
    }

    /// The underlying table.
    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    /// Map a digit sequence to words.
    ///
    /// # Returns
    /// `InvalidDigit` for the first digit outside `0..1024`.
    pub fn to_words(&self, digits: &[u16]) -> Result<Vec<&'static str>, MnemonicError> {
        digits
            .iter()
            .map(|&d| self.word(d).ok_or(MnemonicError::InvalidDigit(d)))
            .collect()
    }

    /// Map words to their digits.
    ///
    /// # Returns
    /// `InvalidWord` carrying the first word not found in the list.
    pub fn to_digits<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<u16>, MnemonicError> {
        words
            .iter()
            .map(|w| {
                let w = w.as_ref();
                self.index_of(w)
                    .ok_or_else(|| MnemonicError::InvalidWord(w.to_string()))
            })
            .collect()
    }
}

impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wordlist")
            .field("first", &self.words[0])
            .field("last", &self.words[WORDLIST_SIZE - 1])
            .finish()
    }
}

impl PartialEq for Wordlist {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for Wordlist {}
