//! Serializable codec settings.

use serde::{Deserialize, Serialize};

use crate::digits::MAX_DIGIT;
use crate::MnemonicError;

/// Settings that change the checksum of every mnemonic a codec produces.
///
/// The default is the empty customization used by the reference format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Digit prefix mixed into the checksum ahead of the data.
    pub customization: Vec<u16>,
}

impl CodecConfig {
    /// Create a config with the given customization prefix.
    pub fn new(customization: Vec<u16>) -> Self {
        CodecConfig { customization }
    }

    /// Check that every customization digit is below 1024.
    pub fn validate(&self) -> Result<(), MnemonicError> {
        match self.customization.iter().find(|&&d| d > MAX_DIGIT) {
            Some(&d) => Err(MnemonicError::InvalidDigit(d)),
            None => Ok(()),
        }
    }
}
