//! Running-key (Vigenère-style) cipher.
//!
//! The key is laid over the space-stripped text in whole blocks, with the
//! last block cut short so the keystream ends exactly where the text does.
//! Each output letter is the text letter shifted forward (encode) or back
//! (decode) by the keystream letter's weight, modulo 26.
//!
//! Keystream letters weigh their 1-based position: `a` shifts by 1, `z` by
//! 26 (a full turn).

use tracing::debug;

use crate::alphabet::{letter_to_index, wrapped_letter};
use crate::error::CipherError;
use crate::mode::Mode;

/// Builds the keystream for a text of `len` letters.
///
/// The key is repeated block by block; the final block is truncated to fit.
///
/// # Errors
/// Returns [`CipherError::EmptyKey`] if `key` is empty.
pub(crate) fn keystream(key: &[char], len: usize) -> Result<Vec<char>, CipherError> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    let mut stream = Vec::with_capacity(len);
    for offset in (0..len).step_by(key.len()) {
        let take = key.len().min(len - offset);
        stream.extend_from_slice(&key[..take]);
    }
    Ok(stream)
}

/// Looks up the alphabet index of `c`, failing on anything outside it.
fn index_of(c: char) -> Result<i64, CipherError> {
    letter_to_index(c)
        .map(|i| i as i64)
        .ok_or(CipherError::NotInAlphabet(c))
}

/// Shift applied by keystream letter `c`.
fn key_weight(c: char) -> Result<i64, CipherError> {
    Ok(index_of(c)? + 1)
}

/// Encodes or decodes `text` with the running key `key`.
///
/// All spaces are removed from `text` first; the output never contains them.
/// Both the remaining text and the key must consist only of lowercase
/// letters.
///
/// # Errors
/// - [`CipherError::EmptyKey`] if `key` is empty.
/// - [`CipherError::NotInAlphabet`] for the first non-letter found in the
///   stripped text or in the part of the key that is used.
///
/// # Examples
///
/// ```
/// use classic_ciphers::{running_key, Mode};
///
/// let cipher = running_key("batmanandrobin", "joker", Mode::Encode).unwrap();
/// assert_eq!(cipher, "lpersxpyijyqts");
/// assert_eq!(
///     running_key(&cipher, "joker", Mode::Decode).unwrap(),
///     "batmanandrobin"
/// );
/// ```
pub fn running_key(text: &str, key: &str, mode: Mode) -> Result<String, CipherError> {
    let letters: Vec<char> = text.chars().filter(|&c| c != ' ').collect();
    let key: Vec<char> = key.chars().collect();
    let stream = keystream(&key, letters.len())?;
    debug!(
        mode = %mode,
        text_len = letters.len(),
        key_len = key.len(),
        "derived running-key keystream"
    );

    let mut out = String::with_capacity(letters.len());
    for (&t, &k) in letters.iter().zip(stream.iter()) {
        let (t, k) = (index_of(t)?, key_weight(k)?);
        let shifted = match mode {
            Mode::Encode => t + k,
            Mode::Decode => t - k,
        };
        out.push(wrapped_letter(shifted));
    }
    Ok(out)
}
