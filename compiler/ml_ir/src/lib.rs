//! ML IR - shared lexical types
//!
//! This crate contains the data the lexer hands to its consumers:
//! - `Position` and `Span` for source locations (file, line, line start, offset)
//! - `TokenKind` and `Token` for lexer output
//! - `IntKind` for the integer literal widths
//!
//! Nothing here performs any lexing. `ml_lexer` builds these values and
//! parsers or tools consume them.

mod span;
mod token;

pub use span::{Position, Span};
pub use token::{IntKind, Token, TokenKind};
