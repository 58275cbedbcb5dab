//! Direction selector for the keyed, reversible transforms.

use std::fmt;
use std::str::FromStr;

use crate::error::CipherError;

/// Direction of a keyed transform.
///
/// Parsed from the exact lowercase strings `encode` and `decode`; any other
/// input is rejected with [`CipherError::InvalidMode`] before a transform
/// starts.
///
/// # Examples
///
/// ```
/// use classic_ciphers::{CipherError, Mode};
///
/// assert_eq!("decode".parse::<Mode>(), Ok(Mode::Decode));
/// assert_eq!(
///     "encrypt".parse::<Mode>(),
///     Err(CipherError::InvalidMode("encrypt".to_string()))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Plaintext to ciphertext.
    Encode,
    /// Ciphertext to plaintext.
    Decode,
}

impl Mode {
    /// Returns the canonical string form (`encode` or `decode`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Encode => "encode",
            Mode::Decode => "decode",
        }
    }
}

impl FromStr for Mode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "encode" => Ok(Mode::Encode),
            "decode" => Ok(Mode::Decode),
            other => Err(CipherError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
