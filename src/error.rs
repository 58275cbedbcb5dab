//! Error types for the classic_ciphers library.

use std::fmt;

/// Errors produced by the cipher transforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Mode string is neither `encode` nor `decode`.
    InvalidMode(String),
    /// Playfair key places the same letter twice.
    DuplicateKeyLetter(char),
    /// Character has no index in the 26-letter alphabet.
    NotInAlphabet(char),
    /// Character does not occur in the Playfair cipher matrix.
    NotInMatrix(char),
    /// Running key is empty.
    EmptyKey,
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::InvalidMode(mode) => {
                write!(f, "Invalid mode parameter: '{}'", mode)
            }
            CipherError::DuplicateKeyLetter(c) => {
                write!(f, "Key letter '{}' appears more than once", c)
            }
            CipherError::NotInAlphabet(c) => {
                write!(f, "Character '{}' is not in the alphabet", c)
            }
            CipherError::NotInMatrix(c) => {
                write!(f, "Character '{}' is not in the cipher matrix", c)
            }
            CipherError::EmptyKey => write!(f, "Key must be at least 1 character long"),
        }
    }
}

impl std::error::Error for CipherError {}
