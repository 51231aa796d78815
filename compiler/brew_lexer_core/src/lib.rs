//! Low-level tokenizer for Brew.
//!
//! This crate is standalone: it knows nothing about token kinds, keywords
//! or diagnostics. It scans source text into `(RawTag, len)` pairs that the
//! `brew_lexer` crate cooks into classified tokens.
//!
//! # Layers
//!
//! - [`Cursor`]: byte cursor over the source, with memchr-accelerated skips
//! - [`RawScanner`]: maximal-munch scanner producing [`RawToken`]s
//!
//! Every byte of the input belongs to exactly one raw token, trivia included,
//! so the lengths of all tokens before `Eof` sum to the scanned length.

mod cursor;
mod raw_scanner;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use tag::{RawTag, RawToken};
