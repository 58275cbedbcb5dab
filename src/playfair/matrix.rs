//! Playfair key square.
//!
//! A 5×5 grid holding the 25 letters other than `j`. The key's letters fill
//! the grid first, row by row, and the unused letters follow in alphabetical
//! order.

use tracing::debug;

use crate::alphabet::ALPHABET;
use crate::error::CipherError;

/// Side length of the key square.
pub const MATRIX_SIZE: usize = 5;

/// The letter left out of the key square.
pub const OMITTED_LETTER: char = 'j';

/// Row and column of a cell in the key square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// 5×5 Playfair key square built from a key.
///
/// Immutable once built; every non-`j` letter occurs exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherMatrix {
    grid: [[char; MATRIX_SIZE]; MATRIX_SIZE],
}

impl CipherMatrix {
    /// Builds the key square for `key`.
    ///
    /// # Parameters
    /// - `key`: Lowercase letters, none repeated and none equal to `j`.
    ///
    /// # Errors
    /// - [`CipherError::DuplicateKeyLetter`] if a key letter was already placed.
    /// - [`CipherError::NotInMatrix`] for `j` or any character outside the
    ///   alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ciphers::playfair::CipherMatrix;
    ///
    /// let m = CipherMatrix::from_key("keyword").unwrap();
    /// assert_eq!(m.rows()[0], ['k', 'e', 'y', 'w', 'o']);
    /// assert_eq!(m.rows()[1], ['r', 'd', 'a', 'b', 'c']);
    /// ```
    pub fn from_key(key: &str) -> Result<Self, CipherError> {
        let mut pool: Vec<char> = ALPHABET
            .iter()
            .copied()
            .filter(|&c| c != OMITTED_LETTER)
            .collect();
        let mut placed: Vec<char> = Vec::with_capacity(MATRIX_SIZE * MATRIX_SIZE);

        for c in key.chars() {
            match pool.iter().position(|&p| p == c) {
                Some(i) => placed.push(pool.remove(i)),
                None if placed.contains(&c) => return Err(CipherError::DuplicateKeyLetter(c)),
                None => return Err(CipherError::NotInMatrix(c)),
            }
        }
        let key_len = placed.len();
        placed.extend(pool);

        let mut grid = [[OMITTED_LETTER; MATRIX_SIZE]; MATRIX_SIZE];
        for (i, c) in placed.into_iter().enumerate() {
            grid[i / MATRIX_SIZE][i % MATRIX_SIZE] = c;
        }
        debug!(key_len, "built playfair cipher matrix");
        Ok(CipherMatrix { grid })
    }

    /// Returns the grid rows, top to bottom.
    pub fn rows(&self) -> &[[char; MATRIX_SIZE]; MATRIX_SIZE] {
        &self.grid
    }

    /// Returns the letter at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` lies outside the 5×5 grid.
    pub fn get(&self, pos: Position) -> char {
        self.grid[pos.row][pos.col]
    }

    /// Finds the first cell holding `c`, scanning row-major.
    pub fn locate(&self, c: char) -> Option<Position> {
        self.grid.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .position(|&cell| cell == c)
                .map(|col| Position::new(row, col))
        })
    }

    /// Extracts the smallest rectangle of the grid containing both `a` and `b`.
    ///
    /// The rectangle's rows are returned top to bottom, each as a slice of
    /// the columns between the two positions inclusive.
    pub fn sub_grid(&self, a: Position, b: Position) -> Vec<&[char]> {
        let (top, bottom) = (a.row.min(b.row), a.row.max(b.row));
        let (left, right) = (a.col.min(b.col), a.col.max(b.col));
        self.grid[top..=bottom]
            .iter()
            .map(|row| &row[left..=right])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(s: &str) -> [char; MATRIX_SIZE] {
        let v: Vec<char> = s.chars().collect();
        [v[0], v[1], v[2], v[3], v[4]]
    }

    #[test]
    fn test_keyword_matrix() {
        let m = CipherMatrix::from_key("keyword").unwrap();
        assert_eq!(
            m.rows(),
            &[
                row("keywo"),
                row("rdabc"),
                row("fghil"),
                row("mnpqs"),
                row("tuvxz"),
            ]
        );
    }

    #[test]
    fn test_empty_key_is_alphabetical() {
        let m = CipherMatrix::from_key("").unwrap();
        assert_eq!(
            m.rows(),
            &[
                row("abcde"),
                row("fghik"),
                row("lmnop"),
                row("qrstu"),
                row("vwxyz"),
            ]
        );
    }

    #[test]
    fn test_key_spanning_rows() {
        let m = CipherMatrix::from_key("playfirex").unwrap();
        assert_eq!(m.rows()[0], row("playf"));
        assert_eq!(m.rows()[1], row("irexb"));
        assert_eq!(m.rows()[2], row("cdghk"));
    }

    #[test]
    fn test_duplicate_key_letter() {
        assert_eq!(
            CipherMatrix::from_key("letter"),
            Err(CipherError::DuplicateKeyLetter('t'))
        );
    }

    #[test]
    fn test_key_with_j_or_non_letter() {
        assert_eq!(
            CipherMatrix::from_key("jack"),
            Err(CipherError::NotInMatrix('j'))
        );
        assert_eq!(
            CipherMatrix::from_key("my key"),
            Err(CipherError::NotInMatrix(' '))
        );
    }

    #[test]
    fn test_every_letter_once() {
        let m = CipherMatrix::from_key("zebrafish").unwrap();
        let mut letters: Vec<char> = m.rows().iter().flatten().copied().collect();
        letters.sort();
        let expected: Vec<char> = ALPHABET.iter().copied().filter(|&c| c != 'j').collect();
        assert_eq!(letters, expected);
    }

    #[test]
    fn test_locate() {
        let m = CipherMatrix::from_key("keyword").unwrap();
        assert_eq!(m.locate('k'), Some(Position::new(0, 0)));
        assert_eq!(m.locate('s'), Some(Position::new(3, 4)));
        assert_eq!(m.locate('z'), Some(Position::new(4, 4)));
        assert_eq!(m.locate('j'), None);
        assert_eq!(m.locate(' '), None);
    }

    #[test]
    fn test_get_matches_locate() {
        let m = CipherMatrix::from_key("keyword").unwrap();
        for c in m.rows().iter().flatten() {
            let pos = m.locate(*c).unwrap();
            assert_eq!(m.get(pos), *c);
        }
    }

    #[test]
    fn test_sub_grid() {
        let m = CipherMatrix::from_key("keyword").unwrap();
        // s at (3,4), e at (0,1)
        let sub = m.sub_grid(Position::new(3, 4), Position::new(0, 1));
        assert_eq!(sub.len(), 4);
        assert_eq!(sub[0], &['e', 'y', 'w', 'o'][..]);
        assert_eq!(sub[3], &['n', 'p', 'q', 's'][..]);
    }

    #[test]
    fn test_sub_grid_single_cell() {
        let m = CipherMatrix::from_key("keyword").unwrap();
        let p = Position::new(2, 2);
        assert_eq!(m.sub_grid(p, p), vec![&['h'][..]]);
    }
}
