//! Caesar shift cipher.

use crate::alphabet::{letter_to_index, wrapped_letter, ALPHABET_LEN};

/// Shifts every letter of `text` forward by `key` positions.
///
/// Letters wrap around the end of the alphabet and any key, including a
/// negative one, is reduced modulo 26. Characters outside the alphabet are
/// copied unchanged.
///
/// To decode, call again with `26 - key`, or use [`caesar_decode`].
///
/// # Examples
///
/// ```
/// use classic_ciphers::caesar;
///
/// assert_eq!(caesar("high ground", 66), "vwuv ufcibr");
/// assert_eq!(caesar("fmvhc", 26 - 4), "birdy");
/// ```
pub fn caesar(text: &str, key: i64) -> String {
    let shift = key.rem_euclid(ALPHABET_LEN as i64);
    text.chars()
        .map(|c| match letter_to_index(c) {
            Some(i) => wrapped_letter(i as i64 + shift),
            None => c,
        })
        .collect()
}

/// Reverses [`caesar`] by shifting with the complementary key `26 - key`.
pub fn caesar_decode(text: &str, key: i64) -> String {
    caesar(text, ALPHABET_LEN as i64 - key.rem_euclid(ALPHABET_LEN as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vectors() {
        assert_eq!(caesar("high ground", 66), "vwuv ufcibr");
        assert_eq!(caesar("birdy", 4), "fmvhc");
        assert_eq!(caesar("fmvhc", 22), "birdy");
    }

    #[test]
    fn test_zero_and_full_shift_are_identity() {
        assert_eq!(caesar("abcxyz", 0), "abcxyz");
        assert_eq!(caesar("abcxyz", 26), "abcxyz");
    }

    #[test]
    fn test_wraps_past_z() {
        assert_eq!(caesar("xyz", 3), "abc");
    }

    #[test]
    fn test_negative_key() {
        assert_eq!(caesar("abc", -1), "zab");
        assert_eq!(caesar("abc", -27), "zab");
    }

    #[test]
    fn test_extreme_keys() {
        // i64::MAX = 7 (mod 26), i64::MIN = 18 (mod 26)
        assert_eq!(caesar("z", i64::MAX), "g");
        assert_eq!(caesar("abc", i64::MIN), "stu");
        assert_eq!(caesar_decode(&caesar("birdy", i64::MAX), i64::MAX), "birdy");
        assert_eq!(caesar_decode(&caesar("birdy", i64::MIN), i64::MIN), "birdy");
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(caesar("Hi, there!", 1), "Hj, uifsf!");
    }

    #[test]
    fn test_decode() {
        assert_eq!(caesar_decode("fmvhc", 4), "birdy");
        assert_eq!(caesar_decode(&caesar("attack at dawn", 66), 66), "attack at dawn");
        assert_eq!(caesar_decode(&caesar("attack", -5), -5), "attack");
    }
}
