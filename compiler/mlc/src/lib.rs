//! Command-line front end for the ML lexer.
//!
//! `mlc lex <file>` streams a file through the lexer in fixed-size chunks
//! and prints every token with its span; lexical errors and warnings are
//! rendered against the source.

pub mod commands;
mod error;
pub mod report;
mod tracing_setup;

pub use error::CliError;
pub use tracing_setup::init_tracing;
