//! Normalization of hand-entered mnemonic text.
//!
//! Lowercases, strips `-`, `.` and `,`, collapses every run of whitespace
//! (newlines included) to a single space, then repairs a few known
//! transcription collisions:
//!
//! - a standalone `and` followed by `X` becomes `enX` when that is a list
//!   entry (`and sure` for `ensure`);
//! - an article `a` split off the front of a word (`a gain` for `again`) is
//!   joined back when the joined form is a list entry;
//! - British spellings of list entries are mapped to the listed spelling.

use crate::wordlist::{self, Wordlist};

/// Characters removed outright.
const STRIPPED: [char; 3] = ['-', '.', ','];

/// Standalone tokens that stand for a split-off word start, with the
/// prefix they are joined back as.
const SPLIT_JOINS: &[(&str, &str)] = &[("and", "en"), ("a", "a")];

/// Literal token replacements, applied before joining.
const SPELLING_VARIANTS: &[(&str, &str)] = &[
    ("colour", "color"),
    ("grey", "gray"),
    ("centre", "center"),
    ("metre", "meter"),
];

/// Normalize text against the English word list.
pub fn normalize(text: &str) -> String {
    normalize_with(text, wordlist::english())
}

/// Normalize text against `wordlist`.
///
/// # Arguments
/// * `text` - Free-form mnemonic text.
/// * `wordlist` - List used to decide whether a split word may be joined.
///
/// # Returns
/// Lowercase tokens separated by single spaces, with no leading or
/// trailing whitespace.
pub fn normalize_with(text: &str, wordlist: &Wordlist) -> String {
    let lowered: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .collect();

    let tokens: Vec<&str> = lowered.split_whitespace().map(replace_variant).collect();

    let mut out: Vec<String> = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        if let Some(joined) = join_split(&tokens[i..], wordlist) {
            out.push(joined);
            i += 2;
            continue;
        }
        out.push(tokens[i].to_string());
        i += 1;
    }

    out.join(" ")
}

/// Join `tokens[0]` with `tokens[1]` when the first is a split-off word
/// start and the joined form is listed.
fn join_split(tokens: &[&str], wordlist: &Wordlist) -> Option<String> {
    let (head, next) = match tokens {
        [head, next, ..] => (*head, *next),
        _ => return None,
    };
    let &(_, prefix) = SPLIT_JOINS.iter().find(|(token, _)| *token == head)?;
    let joined = format!("{}{}", prefix, next);
    wordlist.contains(&joined).then_some(joined)
}

fn replace_variant(token: &str) -> &str {
    SPELLING_VARIANTS
        .iter()
        .find(|(from, _)| *from == token)
        .map_or(token, |&(_, to)| to)
}
