//! Conversion between byte strings and base-1024 digits.
//!
//! The byte string is read as a single big-endian unsigned integer and
//! re-expressed most-significant digit first in base 1024. Because the
//! whole input is one number, leading `0x00` bytes carry no weight and do
//! not survive a round trip: `[0x00, 0x01]` comes back as `[0x01]`, and
//! `[0x00]` (like the empty input) comes back as `[]`.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::MnemonicError;

/// Number base of a digit.
pub const DIGIT_BASE: u32 = 1024;

/// Largest valid digit value.
pub const MAX_DIGIT: u16 = 1023;

/// Encode a byte string as base-1024 digits, most significant first.
///
/// An input whose integer value is zero (including the empty input)
/// encodes to the single digit `[0]`.
///
/// # Arguments
/// * `bytes` - Big-endian integer bytes.
///
/// # Returns
/// A non-empty vector of digits in `0..1024`.
pub fn bytes_to_digits(bytes: &[u8]) -> Vec<u16> {
    let mut value = BigUint::from_bytes_be(bytes);
    if value.is_zero() {
        return vec![0];
    }

    let base = BigUint::from(DIGIT_BASE);
    let mut digits = Vec::with_capacity(bytes.len() * 8 / 10 + 1);
    while !value.is_zero() {
        // The remainder is below 1024: no limbs for zero, otherwise one.
        let rem = (&value % &base).to_u32_digits();
        digits.push(rem.first().map_or(0, |&limb| limb as u16));
        value /= &base;
    }
    digits.reverse();
    digits
}

/// Decode base-1024 digits, most significant first, into a byte string.
///
/// A sequence whose value is zero decodes to the empty byte string.
///
/// # Arguments
/// * `digits` - Digits in `0..1024`.
///
/// # Returns
/// `Ok(Vec<u8>)` with no leading zero bytes, or `InvalidDigit` for the
/// first digit above 1023.
pub fn digits_to_bytes(digits: &[u16]) -> Result<Vec<u8>, MnemonicError> {
    let mut value = BigUint::zero();
    for &d in digits {
        if d > MAX_DIGIT {
            return Err(MnemonicError::InvalidDigit(d));
        }
        value = value * DIGIT_BASE + u32::from(d);
    }

    if value.is_zero() {
        return Ok(Vec::new());
    }
    Ok(value.to_bytes_be())
}
