use proptest::prelude::*;

use wordseal_codec::checksum::{create_checksum, verify_checksum, CHECKSUM_LENGTH_WORDS};
use wordseal_codec::digits::{bytes_to_digits, digits_to_bytes};
use wordseal_codec::wordlist;
use wordseal_codec::{heuristic_word, MnemonicCodec, MnemonicError};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn bytes_roundtrip_without_leading_zero(
        first in 1u8..=255,
        rest in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut bytes = vec![first];
        bytes.extend(rest);
        let codec = MnemonicCodec::english();
        let words = codec.encode_bytes(&bytes);
        prop_assert_eq!(words.len(), bytes_to_digits(&bytes).len() + CHECKSUM_LENGTH_WORDS);
        prop_assert_eq!(codec.decode_bytes(&words).unwrap(), bytes);
    }

    #[test]
    fn leading_zeros_decode_to_stripped_bytes(
        zeros in 1usize..4,
        bytes in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        let mut padded = vec![0u8; zeros];
        padded.extend(&bytes);
        let expected: Vec<u8> = bytes.iter().copied().skip_while(|&b| b == 0).collect();
        let codec = MnemonicCodec::english();
        prop_assert_eq!(codec.decode_bytes(&codec.encode_bytes(&padded)).unwrap(), expected);
    }

    #[test]
    fn text_roundtrip(text in "[^\\x00]\\PC{0,40}") {
        let codec = MnemonicCodec::english();
        let mnemonic = codec.encode_to_string(&text);
        prop_assert_eq!(codec.decode_str(&mnemonic).unwrap(), text);
    }

    #[test]
    fn digits_stay_in_range(bytes in prop::collection::vec(any::<u8>(), 0..96)) {
        let digits = bytes_to_digits(&bytes);
        prop_assert!(!digits.is_empty());
        prop_assert!(digits.iter().all(|&d| d < 1024));
        prop_assert!(digits.len() == 1 || digits[0] != 0);
        let back = digits_to_bytes(&digits).unwrap();
        prop_assert!(back.first().map_or(true, |&b| b != 0));
    }

    #[test]
    fn single_substitution_is_detected(
        bytes in prop::collection::vec(any::<u8>(), 1..48),
        pos_seed in any::<usize>(),
        replacement in 0u16..1024,
    ) {
        let data = bytes_to_digits(&bytes);
        let mut full = data.clone();
        full.extend(create_checksum(&data, &[]));
        let pos = pos_seed % full.len();
        prop_assume!(full[pos] != replacement);
        full[pos] = replacement;
        prop_assert!(!verify_checksum(&full, &[]));
    }

    #[test]
    fn substituted_word_fails_decode(
        bytes in prop::collection::vec(any::<u8>(), 1..48),
        pos_seed in any::<usize>(),
        replacement in 0u16..1024,
    ) {
        let codec = MnemonicCodec::english();
        let mut words = codec.encode_bytes(&bytes);
        let pos = pos_seed % words.len();
        let new_word = wordlist::english().word(replacement).unwrap();
        prop_assume!(words[pos] != new_word);
        words[pos] = new_word;
        prop_assert!(matches!(codec.decode_bytes(&words), Err(MnemonicError::Checksum)));
    }

    #[test]
    fn customization_roundtrip(
        customization in prop::collection::vec(0u16..1024, 0..6),
        bytes in prop::collection::vec(any::<u8>(), 1..32),
    ) {
        let codec = MnemonicCodec::with_customization(wordlist::english(), customization).unwrap();
        let words = codec.encode_bytes(&bytes);
        let data = bytes_to_digits(&bytes);
        let mut full = data.clone();
        full.extend(create_checksum(&data, codec.customization()));
        prop_assert_eq!(codec.to_digits(&words).unwrap(), full);
        prop_assert!(codec.validate(&words).is_ok());
    }

    #[test]
    fn heuristic_word_is_idempotent(token in "[a-z]{1,10}") {
        let once = heuristic_word(&token);
        prop_assert_eq!(heuristic_word(once), once);
    }

    #[test]
    fn heuristic_word_keeps_list_entries(index in 0u16..1024) {
        let word = wordlist::english().word(index).unwrap();
        prop_assert_eq!(heuristic_word(word), word);
    }
}
