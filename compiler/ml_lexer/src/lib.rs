//! Incremental, resumable lexer for ML source.
//!
//! The lexer accepts its input in chunks of any size. Whenever the bytes
//! buffered so far cannot decide the next lexeme, it suspends with a
//! continuation instead of blocking; the caller feeds more input and
//! resumes. Splitting the input differently never changes the tokens,
//! warnings or errors produced.
//!
//! - [`Lexer`]: the session, driven token by token.
//! - [`TokenStream`]: an iterator that pulls chunks from a [`ChunkSource`].
//! - [`lex`]: one-shot lexing of complete input.

mod config;
mod keywords;
mod lex_error;
mod lexer;
mod literal;
mod stream;

pub use config::{LexerConfig, DEFAULT_FILE_NAME};
pub use keywords::Keywords;
pub use lex_error::{LexError, LexErrorContext, LexErrorKind, LexSuggestion, Warning, WarningKind};
pub use lexer::{Lex, Lexer};
pub use ml_lexer_core::{Refill, Resume};
pub use stream::{
    ChunkSource, IterSource, ReadSource, StreamError, TokenStream, DEFAULT_CHUNK_SIZE,
};

use ml_ir::Token;

/// Everything produced by lexing one complete input.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    /// Tokens in source order; ends with `Eof` unless lexing failed.
    pub tokens: Vec<Token>,
    pub warnings: Vec<Warning>,
    /// The error that stopped lexing, if any.
    pub error: Option<LexError>,
}

impl LexOutput {
    #[inline]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Lex complete input in one go.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &[u8], config: LexerConfig) -> LexOutput {
    let mut lexer = Lexer::from_source(config, source);
    let mut output = LexOutput::default();
    loop {
        match lexer.token().run_with(&mut lexer, Lexer::finish) {
            Ok(token) => {
                let eof = token.kind.is_eof();
                output.tokens.push(token);
                if eof {
                    break;
                }
            }
            Err(err) => {
                output.error = Some(err);
                break;
            }
        }
    }
    output.warnings = lexer.take_warnings();
    tracing::debug!(
        tokens = output.tokens.len(),
        warnings = output.warnings.len(),
        failed = output.error.is_some(),
        "lexed"
    );
    output
}
