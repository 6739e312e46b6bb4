//! ML Lexer Core - incremental raw scanning
//!
//! The bottom layer of the ML lexer, with no `ml_*` dependencies:
//! - [`SourceWindow`]: chunked input with absolute offsets
//! - [`Cursor`]: byte reads that report when more input is needed
//! - [`RawScanner`]: longest-match rules for every lexer mode, producing
//!   `(tag, len)` pairs or [`Scan::Starved`]
//! - [`Refill`]: suspendable computations that the session layer uses to
//!   hand control back to the input driver
//!
//! Nothing here decodes literals, resolves keywords or tracks line
//! numbers. That happens in `ml_lexer`.

mod char_class;
mod cursor;
mod raw_scanner;
mod refill;
mod source_window;
mod tag;

pub use char_class::{
    class_of, is_blank, is_decimal, is_hex, is_identchar, is_lowercase, is_symbolchar,
    is_uppercase, ByteClass,
};
pub use cursor::Cursor;
pub use raw_scanner::{RawScanner, Scan};
pub use refill::{Refill, Resume};
pub use source_window::SourceWindow;
pub use tag::{CommentTag, QuotationTag, QuotedTag, RawToken, ShebangTag, StringTag, TokenTag};
