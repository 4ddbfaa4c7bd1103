//! Polynomial checksum over 10-bit symbols.
//!
//! A BCH-style cyclic code in the family used by mnemonic-seed standards.
//! Each digit is folded into a 30-bit state; the state's top 10 bits select
//! which generator constants are XORed back in. A valid sequence (data
//! followed by its checksum) always folds to exactly 1.
//!
//! The generator table and shift amounts define the format. Any change
//! yields checksums that are incompatible with existing mnemonics, and
//! nothing in a mnemonic identifies which variant produced it.

/// Number of checksum words appended to every mnemonic.
pub const CHECKSUM_LENGTH_WORDS: usize = 3;

/// Generator constants, one per bit of the state's top symbol.
const GEN: [u32; 10] = [
    0xE0E040, 0x1C1C080, 0x3838100, 0x7070200, 0xE0E0009,
    0x1C0C2412, 0x38086C24, 0x3090FC48, 0x21B1F890, 0x03F3F120,
];

/// Low 20 bits of the state, kept across each fold.
const STATE_MASK: u32 = 0xFFFFF;

/// Mask for one 10-bit symbol.
const SYMBOL_MASK: u32 = 0x3FF;

/// Fold a digit sequence into the 30-bit checksum state.
///
/// The state starts at 1. It never exceeds 30 bits: the kept 20 bits are
/// shifted up by 10 and every generator fits in 30 bits.
///
/// # Arguments
/// * `values` - Digits in `0..1024`.
///
/// # Returns
/// The final state.
pub fn polymod(values: &[u16]) -> u32 {
    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 20;
        chk = ((chk & STATE_MASK) << 10) ^ u32::from(v);
        for (i, g) in GEN.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }
    chk
}

/// Compute the checksum digits for `data`.
///
/// # Arguments
/// * `data` - The data digits.
/// * `customization` - Digit prefix mixed in ahead of the data; empty for
///   the default format.
///
/// # Returns
/// Three digits, most significant first.
pub fn create_checksum(data: &[u16], customization: &[u16]) -> [u16; CHECKSUM_LENGTH_WORDS] {
    let mut values = Vec::with_capacity(customization.len() + data.len() + CHECKSUM_LENGTH_WORDS);
    values.extend_from_slice(customization);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0; CHECKSUM_LENGTH_WORDS]);

    let poly = polymod(&values) ^ 1;
    let mut checksum = [0u16; CHECKSUM_LENGTH_WORDS];
    for (i, digit) in checksum.iter_mut().enumerate() {
        let shift = 10 * (CHECKSUM_LENGTH_WORDS - 1 - i);
        *digit = ((poly >> shift) & SYMBOL_MASK) as u16;
    }
    checksum
}

/// Verify a digit sequence whose last three digits are its checksum.
///
/// # Arguments
/// * `full` - Data digits followed by the checksum digits.
/// * `customization` - The same prefix used when the checksum was created.
///
/// # Returns
/// `true` iff the sequence folds to 1.
pub fn verify_checksum(full: &[u16], customization: &[u16]) -> bool {
    let mut values = Vec::with_capacity(customization.len() + full.len());
    values.extend_from_slice(customization);
    values.extend_from_slice(full);
    polymod(&values) == 1
}
