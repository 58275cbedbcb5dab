//! Baconian encoding (encode only).
//!
//! Each letter is replaced by its 0-based alphabet index written as a
//! five-digit binary number, with `a` standing for `0` and `b` for `1`.

use crate::alphabet::letter_to_index;

/// Number of symbols in one Baconian code.
pub const BACON_CODE_LEN: usize = 5;

/// Returns the five-symbol code for alphabet index `index` (0..26).
fn bacon_code(index: usize) -> [char; BACON_CODE_LEN] {
    let mut code = ['a'; BACON_CODE_LEN];
    for (bit, slot) in code.iter_mut().enumerate() {
        if (index >> (BACON_CODE_LEN - 1 - bit)) & 1 == 1 {
            *slot = 'b';
        }
    }
    code
}

/// Encodes every letter of `text` as a five-symbol `a`/`b` code.
///
/// Characters outside the alphabet are copied unchanged, so the output is
/// five times longer than the input only for pure-letter text.
///
/// # Examples
///
/// ```
/// use classic_ciphers::baconian;
///
/// assert_eq!(baconian("a"), "aaaaa");
/// assert_eq!(baconian("z"), "bbaab");
/// assert_eq!(baconian("b c"), "aaaab aaaba");
/// ```
pub fn baconian(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len() * BACON_CODE_LEN);
    for c in text.chars() {
        match letter_to_index(c) {
            Some(i) => encoded.extend(bacon_code(i)),
            None => encoded.push(c),
        }
    }
    encoded
}
