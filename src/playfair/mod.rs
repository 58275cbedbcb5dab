//! Playfair digraph cipher.
//!
//! Text is split into letter pairs (digraphs) and each pair is replaced
//! according to where its two letters sit in a 5×5 key square:
//!
//! ```text
//! rectangle   (different row and column)  swap columns inside the bounding box
//! same row                                 step one column right / left
//! same column                              step one row down / up
//! ```
//!
//! Steps off the edge of the square wrap to the opposite side in both
//! directions. Encoding splits doubled letters with the filler `x` and pads
//! odd-length text with a trailing `x`; decoding drops an `x` only when it
//! sits between two identical letters.

mod matrix;

use tracing::trace;

use crate::error::CipherError;
use crate::mode::Mode;

pub use matrix::{CipherMatrix, Position, MATRIX_SIZE, OMITTED_LETTER};

/// Letter used to split doubled letters and to pad odd-length text.
pub const FILLER: char = 'x';

/// Splits `text` into the digraphs that Playfair encoding operates on.
///
/// Spaces are removed, a filler is inserted between every two identical
/// adjacent letters, and a trailing filler is appended if the result has
/// odd length.
///
/// # Examples
///
/// ```
/// use classic_ciphers::playfair::digraphs;
///
/// assert_eq!(
///     digraphs("balloon"),
///     vec![['b', 'a'], ['l', 'x'], ['l', 'o'], ['x', 'o'], ['n', 'x']]
/// );
/// ```
pub fn digraphs(text: &str) -> Vec<[char; 2]> {
    let letters: Vec<char> = text.chars().filter(|&c| c != ' ').collect();
    let mut prepared = Vec::with_capacity(letters.len() * 2);
    for (i, &c) in letters.iter().enumerate() {
        prepared.push(c);
        if letters.get(i + 1) == Some(&c) {
            prepared.push(FILLER);
        }
    }
    pair_up(prepared)
}

/// Groups letters into consecutive pairs, padding an odd tail with [`FILLER`].
fn pair_up(mut letters: Vec<char>) -> Vec<[char; 2]> {
    if !letters.len().is_multiple_of(2) {
        letters.push(FILLER);
    }
    letters.chunks_exact(2).map(|p| [p[0], p[1]]).collect()
}

/// Removes fillers that sit strictly between two identical letters.
///
/// A leading or trailing `x` has only one neighbour and is always kept.
fn remove_filler(letters: &[char]) -> String {
    letters
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            let flanked = c == FILLER
                && i > 0
                && i + 1 < letters.len()
                && letters[i - 1] == letters[i + 1];
            !flanked
        })
        .map(|(_, &c)| c)
        .collect()
}

/// Moves one cell along a row or column, wrapping at either edge.
fn step(index: usize, mode: Mode) -> usize {
    match mode {
        Mode::Encode => (index + 1) % MATRIX_SIZE,
        Mode::Decode => (index + MATRIX_SIZE - 1) % MATRIX_SIZE,
    }
}

fn locate(matrix: &CipherMatrix, c: char) -> Result<Position, CipherError> {
    matrix.locate(c).ok_or(CipherError::NotInMatrix(c))
}

/// Resolves a single digraph against `matrix`.
///
/// The rectangle rule is its own inverse, so only the row and column rules
/// depend on `mode`.
fn resolve_pair(
    matrix: &CipherMatrix,
    pair: [char; 2],
    mode: Mode,
) -> Result<[char; 2], CipherError> {
    let a = locate(matrix, pair[0])?;
    let b = locate(matrix, pair[1])?;

    let out = if a.row != b.row && a.col != b.col {
        let bounds = matrix.sub_grid(a, b);
        let (top, left) = (a.row.min(b.row), a.col.min(b.col));
        let width = bounds[0].len();
        let mirror = |p: Position| bounds[p.row - top][width - 1 - (p.col - left)];
        [mirror(a), mirror(b)]
    } else if a.row == b.row {
        [
            matrix.get(Position::new(a.row, step(a.col, mode))),
            matrix.get(Position::new(b.row, step(b.col, mode))),
        ]
    } else {
        [
            matrix.get(Position::new(step(a.row, mode), a.col)),
            matrix.get(Position::new(step(b.row, mode), b.col)),
        ]
    };
    trace!(
        from_a = ?a,
        from_b = ?b,
        mode = %mode,
        "resolved digraph"
    );
    Ok(out)
}

fn encode(text: &str, matrix: &CipherMatrix) -> Result<String, CipherError> {
    let mut out = String::with_capacity(text.len() + 2);
    for pair in digraphs(text) {
        out.extend(resolve_pair(matrix, pair, Mode::Encode)?);
    }
    Ok(out)
}

fn decode(text: &str, matrix: &CipherMatrix) -> Result<String, CipherError> {
    let letters: Vec<char> = text.chars().filter(|&c| c != ' ').collect();
    let mut decoded = Vec::with_capacity(letters.len() + 1);
    for pair in pair_up(letters) {
        decoded.extend(resolve_pair(matrix, pair, Mode::Decode)?);
    }
    Ok(remove_filler(&decoded))
}

/// Encodes or decodes `text` with the Playfair cipher keyed by `key`.
///
/// Spaces in `text` are dropped and are not restored by decoding. Every
/// remaining character must be a lowercase letter other than `j`; other
/// characters are rejected rather than passed through.
///
/// Decoding an odd-length ciphertext pads the last letter with [`FILLER`]
/// before pairing, so the trailing digraph decodes instead of failing.
///
/// # Errors
/// - [`CipherError::DuplicateKeyLetter`] if `key` repeats a letter.
/// - [`CipherError::NotInMatrix`] for a character of `key` or `text` that
///   has no cell in the key square (`j`, uppercase, digits, punctuation).
///
/// # Examples
///
/// ```
/// use classic_ciphers::{playfair, Mode};
///
/// let cipher = playfair("secret message", "keyword", Mode::Encode).unwrap();
/// assert_eq!(cipher, "nordkunkqzpcnd");
/// assert_eq!(
///     playfair(&cipher, "keyword", Mode::Decode).unwrap(),
///     "secretmessage"
/// );
/// ```
pub fn playfair(text: &str, key: &str, mode: Mode) -> Result<String, CipherError> {
    let matrix = CipherMatrix::from_key(key)?;
    match mode {
        Mode::Encode => encode(text, &matrix),
        Mode::Decode => decode(text, &matrix),
    }
}
