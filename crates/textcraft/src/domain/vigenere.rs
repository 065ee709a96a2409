//! Vigenere ciphering machine
//!
//! A machine is either direct or reverse. A reverse machine emits its output
//! characters back to front. Both kinds uppercase the whole output.
//!
//! Only ASCII letters are substituted; every other character passes through
//! and does not advance the key cursor.

use crate::constants::{ALPHABET_LEN, INCORRECT_ARGUMENTS, LOWER_BASE, UPPER_BASE};
use thiserror::Error;

/// Cipher argument errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Message or key is empty
    #[error("{}", INCORRECT_ARGUMENTS)]
    IncorrectArguments,
    /// Key contains a character outside A-Z / a-z
    #[error("Invalid key character {character:?} at position {position}: key must be ASCII letters")]
    InvalidKey { character: char, position: usize },
}

/// Substitution direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Shift forward by the key letter
    Encrypt,
    /// Shift backward by the key letter
    Decrypt,
}

/// Vigenere ciphering machine
///
/// The direction flag is fixed at construction and is the only state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VigenereCipheringMachine {
    direct: bool,
}

impl VigenereCipheringMachine {
    /// Create a machine; `direct = false` reverses the output
    pub fn new(direct: bool) -> Self {
        Self { direct }
    }

    /// Create a reverse machine
    pub fn reverse() -> Self {
        Self::new(false)
    }

    /// Check if the machine keeps output order
    pub fn is_direct(&self) -> bool {
        self.direct
    }

    /// Encrypt `message` with `key`
    ///
    /// # Errors
    /// * `CipherError::IncorrectArguments` - empty message or key
    /// * `CipherError::InvalidKey` - key has a non-letter character
    pub fn encrypt(&self, message: &str, key: &str) -> Result<String, CipherError> {
        self.process(message, key, Operation::Encrypt)
    }

    /// Decrypt `message` with `key`
    ///
    /// Same validation as [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, message: &str, key: &str) -> Result<String, CipherError> {
        self.process(message, key, Operation::Decrypt)
    }

    /// Run one operation and apply the machine's output rules
    pub fn process(
        &self,
        message: &str,
        key: &str,
        operation: Operation,
    ) -> Result<String, CipherError> {
        if message.is_empty() || key.is_empty() {
            return Err(CipherError::IncorrectArguments);
        }
        let shifts = key_shifts(key)?;

        let mut output = substitute(message, &shifts, operation);
        if !self.direct {
            output.reverse();
        }

        Ok(output.into_iter().collect::<String>().to_uppercase())
    }
}

impl Default for VigenereCipheringMachine {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Convert key letters to shifts (A=0 ... Z=25, case-insensitive)
pub fn key_shifts(key: &str) -> Result<Vec<u8>, CipherError> {
    key.chars()
        .enumerate()
        .map(|(position, character)| {
            if character.is_ascii_alphabetic() {
                Ok(character.to_ascii_uppercase() as u8 - UPPER_BASE)
            } else {
                Err(CipherError::InvalidKey {
                    character,
                    position,
                })
            }
        })
        .collect()
}

/// Substitute every ASCII letter, cycling through `shifts`
///
/// `shifts` must be non-empty. Case is preserved at this stage.
fn substitute(message: &str, shifts: &[u8], operation: Operation) -> Vec<char> {
    let mut cursor = shifts.iter().cycle();
    message
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                cursor
                    .next()
                    .map_or(c, |&shift| shift_letter(c, shift, operation))
            } else {
                c
            }
        })
        .collect()
}

/// Shift one ASCII letter modulo 26 relative to its own case base
#[inline]
pub fn shift_letter(letter: char, shift: u8, operation: Operation) -> char {
    let base = if letter.is_ascii_lowercase() {
        LOWER_BASE
    } else {
        UPPER_BASE
    };
    let offset = letter as u8 - base;
    let shift = shift % ALPHABET_LEN;
    let shifted = match operation {
        Operation::Encrypt => (offset + shift) % ALPHABET_LEN,
        Operation::Decrypt => (offset + ALPHABET_LEN - shift) % ALPHABET_LEN,
    };
    (base + shifted) as char
}
