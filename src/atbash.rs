//! Atbash reciprocal substitution.

use crate::alphabet::{letter_to_index, REVERSED_ALPHABET};

/// Replaces each letter with its mirror in the alphabet (`a`↔`z`, `b`↔`y`, ...).
///
/// The transform is its own inverse. Characters outside the alphabet are
/// copied unchanged.
///
/// # Examples
///
/// ```
/// use classic_ciphers::atbash;
///
/// assert_eq!(atbash("hello there"), "svool gsviv");
/// assert_eq!(atbash("svool gsviv"), "hello there");
/// ```
pub fn atbash(text: &str) -> String {
    text.chars()
        .map(|c| match letter_to_index(c) {
            Some(i) => REVERSED_ALPHABET[i],
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vectors() {
        assert_eq!(atbash("hello there"), "svool gsviv");
        assert_eq!(atbash("svool gsviv"), "hello there");
        assert_eq!(atbash("tvmvizo pvmlyr"), "general kenobi");
    }

    #[test]
    fn test_full_alphabet() {
        assert_eq!(
            atbash("abcdefghijklmnopqrstuvwxyz"),
            "zyxwvutsrqponmlkjihgfedcba"
        );
    }

    #[test]
    fn test_non_letters_in_place() {
        assert_eq!(atbash("A-b c.9"), "A-y x.9");
    }

    #[test]
    fn test_empty() {
        assert_eq!(atbash(""), "");
    }
}
