//! Command handlers for the `mlc` CLI.

mod lex;

pub use lex::{lex_file, parse_lex_options, LexOptions, LexSummary};
