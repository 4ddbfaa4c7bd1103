//! Best-effort repair of mistyped mnemonic words.
//!
//! A token missing from the word list is replaced by the first entry, in
//! list order, sharing its first four characters, or failing that its
//! first three. Tokens with no such entry pass through unchanged and are
//! left for the decoder to reject. The first-match rule is part of the
//! format: mnemonics repaired by other implementations must repair the
//! same way here.

use tracing::trace;

use crate::cleanup;
use crate::wordlist::{self, Wordlist};

/// Prefix lengths tried, longest first.
const PREFIX_LENGTHS: [usize; 2] = [4, 3];

/// Correct a single normalized token against the English word list.
///
/// An empty token comes back unchanged.
pub fn heuristic_word(word: &str) -> &str {
    heuristic_word_with(word, wordlist::english())
}

/// Correct a single normalized token against `wordlist`.
///
/// # Arguments
/// * `word` - A lowercase token without surrounding whitespace.
/// * `wordlist` - The list to correct against.
///
/// # Returns
/// `word` itself if it is a list entry or nothing matches its prefix,
/// otherwise the first matching entry. An empty `word` is returned as is
/// rather than matching the first entry on an empty prefix.
pub fn heuristic_word_with<'a>(word: &'a str, wordlist: &Wordlist) -> &'a str {
    if word.is_empty() || wordlist.contains(word) {
        return word;
    }

    for len in PREFIX_LENGTHS {
        let prefix = char_prefix(word, len);
        if let Some(found) = wordlist.first_with_prefix(prefix) {
            trace!("corrected {:?} to {:?} on prefix {:?}", word, found, prefix);
            return found;
        }
    }
    word
}

/// Normalize free text and correct every token against the English list.
pub fn heuristic_mnemonic(text: &str) -> String {
    heuristic_mnemonic_with(text, wordlist::english())
}

/// Normalize free text and correct every token against `wordlist`.
///
/// The checksum is not consulted; the result may still fail to decode.
///
/// # Arguments
/// * `text` - Free-form mnemonic text.
/// * `wordlist` - The list to normalize and correct against.
///
/// # Returns
/// Corrected tokens joined by single spaces.
pub fn heuristic_mnemonic_with(text: &str, wordlist: &Wordlist) -> String {
    let normalized = cleanup::normalize_with(text, wordlist);
    normalized
        .split_whitespace()
        .map(|w| heuristic_word_with(w, wordlist))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The first `len` characters of `s`, or all of `s` if it is shorter.
fn char_prefix(s: &str, len: usize) -> &str {
    match s.char_indices().nth(len) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
