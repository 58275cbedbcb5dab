//! Classical cipher transforms.
//!
//! A small library of pre-modern substitution and transposition ciphers over
//! the 26-letter lowercase alphabet: Caesar shift, Atbash, Baconian encoding,
//! a Vigenère-style running-key cipher and the Playfair digraph cipher.
//!
//! These are historical ciphers. They offer no security and are meant for
//! teaching, puzzles and interoperability with existing reference vectors.
//!
//! # Architecture
//!
//! ```text
//! alphabet ─┬─ caesar
//!           ├─ atbash
//!           ├─ baconian      (encode only)
//!           ├─ running_key   (Mode)
//!           └─ playfair::CipherMatrix ── playfair (Mode)
//! ```
//!
//! Every transform is a pure function of its inputs. The alphabet tables are
//! compile-time constants, so all transforms can be called from any thread.
//!
//! # Examples
//!
//! Unkeyed and integer-keyed transforms never fail:
//!
//! ```
//! use classic_ciphers::{atbash, baconian, caesar};
//!
//! assert_eq!(caesar("birdy", 4), "fmvhc");
//! assert_eq!(atbash("general kenobi"), "tvmvizo pvmlyr");
//! assert_eq!(baconian("ab"), "aaaaaaaaab");
//! ```
//!
//! String-keyed transforms take a [`Mode`], which can be parsed from text:
//!
//! ```
//! use classic_ciphers::{playfair, running_key, CipherError, Mode};
//!
//! let mode: Mode = "encode".parse().unwrap();
//! assert_eq!(
//!     playfair("secret message", "keyword", mode).unwrap(),
//!     "nordkunkqzpcnd"
//! );
//! assert_eq!(
//!     running_key("batmanandrobin", "joker", mode).unwrap(),
//!     "lpersxpyijyqts"
//! );
//!
//! let bad = "encrypt".parse::<Mode>();
//! assert_eq!(bad, Err(CipherError::InvalidMode("encrypt".to_string())));
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;
pub mod playfair;

mod atbash;
mod baconian;
mod caesar;
mod mode;
mod running_key;

pub use atbash::atbash;
pub use baconian::{baconian, BACON_CODE_LEN};
pub use caesar::{caesar, caesar_decode};
pub use error::CipherError;
pub use mode::Mode;
pub use playfair::playfair;
pub use running_key::running_key;
