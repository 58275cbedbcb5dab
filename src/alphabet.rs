//! The 26-letter lowercase alphabet shared by every transform.
//!
//! Index `i` maps to letter `i` (`a` = 0, `z` = 25). Only the ASCII letters
//! `a..=z` have an index; uppercase letters, whitespace, digits and
//! punctuation are outside the alphabet.

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// The alphabet in index order.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// The alphabet read back to front: `REVERSED_ALPHABET[i] == ALPHABET[25 - i]`.
pub const REVERSED_ALPHABET: [char; ALPHABET_LEN] = reverse(ALPHABET);

const fn reverse(letters: [char; ALPHABET_LEN]) -> [char; ALPHABET_LEN] {
    let mut out = ['a'; ALPHABET_LEN];
    let mut i = 0;
    while i < ALPHABET_LEN {
        out[i] = letters[ALPHABET_LEN - 1 - i];
        i += 1;
    }
    out
}

/// Returns `true` if `c` is one of the 26 lowercase letters.
pub fn contains(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Returns the alphabet index of `c`, or `None` if `c` is not a letter.
///
/// # Examples
///
/// ```
/// use classic_ciphers::alphabet::letter_to_index;
///
/// assert_eq!(letter_to_index('a'), Some(0));
/// assert_eq!(letter_to_index('z'), Some(25));
/// assert_eq!(letter_to_index('A'), None);
/// ```
pub fn letter_to_index(c: char) -> Option<usize> {
    if contains(c) {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Returns the letter at `index`, or `None` if `index >= 26`.
pub fn index_to_letter(index: usize) -> Option<char> {
    ALPHABET.get(index).copied()
}

/// Maps any integer onto a letter, reducing it modulo 26 first.
///
/// Negative values wrap from the end: `-1` is `z`.
pub(crate) fn wrapped_letter(index: i64) -> char {
    ALPHABET[index.rem_euclid(ALPHABET_LEN as i64) as usize]
}
