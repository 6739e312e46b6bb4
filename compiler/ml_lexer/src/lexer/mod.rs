//! The lexing session.
//!
//! A [`Lexer`] owns one input stream and everything needed to resume
//! scanning it: the buffered window, the current position, the stack of
//! nested modes, and the scratch state of the composite token (string,
//! comment or quotation) being assembled.
//!
//! # Suspension
//!
//! [`Lexer::token`] returns a [`Lex`]. When the buffered bytes cannot
//! decide the next lexeme, it returns `Refill::NeedMore`; the caller feeds
//! more input (or calls [`Lexer::finish`]) and resumes. Every step either
//! commits a whole lexeme or touches nothing, so resuming re-runs the
//! undecided match from the same offset and no byte is stored twice.
//!
//! Nested scanning (a string inside a comment, a nested comment) is an
//! explicit mode stack in the session, not host call frames, so a
//! continuation only has to re-enter the state machine.

mod modes;

use std::fmt;
use std::sync::Arc;

use ml_ir::{Position, Span, Token};
use ml_lexer_core::{RawScanner, Refill, Scan, SourceWindow};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::config::LexerConfig;
use crate::keywords::Keywords;
use crate::lex_error::{LexError, LexErrorKind, Warning, WarningKind};

/// A lexing step that may need more input.
pub type Lex<T> = Refill<Lexer, T, LexError>;

/// Nested scan modes; the main token mode is the empty stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Comment,
    String,
    QuotedString,
    Quotation,
}

/// Outcome of one committed lexeme.
enum Step {
    /// Consumed without producing a token.
    Continue,
    Emit(Token),
    /// Undecided; nothing was consumed.
    Starved,
}

/// State of the composite token under construction.
#[derive(Debug, Default)]
struct Scratch {
    /// Decoded text of the string or comment.
    buffer: Vec<u8>,
    /// Where the composite token began.
    start: Option<Position>,
    /// Opening quote of the current string.
    string_start: Option<Span>,
    /// Id of the current `{id|` string.
    delimiter: Vec<u8>,
    /// Open comments, outermost first.
    comment_starts: SmallVec<[Span; 4]>,
    /// Outermost opener of the current quotation.
    quotation_start: Option<Span>,
    quotation_depth: u32,
}

/// An incremental lexing session over one input stream.
pub struct Lexer {
    window: SourceWindow,
    pos: Position,
    modes: Vec<Mode>,
    scratch: Scratch,
    keywords: Keywords,
    shebang_pending: bool,
    warnings: Vec<Warning>,
    halted: Option<LexError>,
}

impl Lexer {
    /// Session over input that will arrive through [`feed`](Self::feed).
    pub fn new(config: LexerConfig) -> Self {
        Self::with_window(config, SourceWindow::new())
    }

    /// Session over input that is already complete.
    pub fn from_source(config: LexerConfig, source: &[u8]) -> Self {
        Self::with_window(config, SourceWindow::complete(source))
    }

    fn with_window(config: LexerConfig, window: SourceWindow) -> Self {
        debug!(
            file = %config.file_name,
            overrides = config.keywords.override_count(),
            complete = window.is_complete(),
            "lexer session created"
        );
        Lexer {
            window,
            pos: Position::start_of(config.file_name),
            modes: Vec::new(),
            scratch: Scratch::default(),
            keywords: config.keywords,
            shebang_pending: config.skip_shebang,
            warnings: Vec::new(),
            halted: None,
        }
    }

    // ─── Input ───

    /// Append a chunk of input.
    ///
    /// Bytes before the current position are released first. Chunks fed
    /// after [`finish`](Self::finish) are ignored.
    pub fn feed(&mut self, chunk: &[u8]) {
        self.window.release_before(self.pos.offset);
        if self.window.push(chunk) {
            trace!(len = chunk.len(), end = self.window.end(), "input fed");
        } else {
            warn!(len = chunk.len(), "input fed after end of input, ignored");
        }
    }

    /// Mark end of input: no further chunk will arrive.
    pub fn finish(&mut self) {
        if !self.window.is_complete() {
            debug!(end = self.window.end(), "end of input");
        }
        self.window.close();
    }

    #[inline]
    pub fn is_input_complete(&self) -> bool {
        self.window.is_complete()
    }

    // ─── Inspection ───

    /// Position of the next unconsumed byte.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.pos
    }

    /// Number of comments currently open.
    #[inline]
    pub fn comment_depth(&self) -> usize {
        self.scratch.comment_starts.len()
    }

    /// Warnings recorded so far, in source order.
    #[inline]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    // ─── Tokens ───

    /// The next token, comments included.
    ///
    /// End of input yields `TokenKind::Eof`, again on every later call.
    /// After an error every later call fails with the same error.
    pub fn token(&mut self) -> Lex<Token> {
        if let Some(err) = &self.halted {
            return Refill::Failed(err.clone());
        }
        self.run().catch(self, |lexer, err| {
            let err = lexer.attribute_to_comment(err);
            Refill::Failed(lexer.halt(err))
        })
    }

    /// The next token that is not a comment.
    pub fn significant_token(&mut self) -> Lex<Token> {
        loop {
            match self.token() {
                Refill::Done(token) if token.kind.is_comment() => {}
                Refill::NeedMore(k) => {
                    return Refill::NeedMore(k).and_then(self, |lexer, token| {
                        if token.kind.is_comment() {
                            lexer.significant_token()
                        } else {
                            Refill::Done(token)
                        }
                    });
                }
                done_or_failed => return done_or_failed,
            }
        }
    }

    /// Drive the mode stack until a token is emitted or input runs out.
    fn run(&mut self) -> Lex<Token> {
        loop {
            let step = match self.modes.last().copied() {
                None => self.step_token(),
                Some(Mode::Comment) => self.step_comment(),
                Some(Mode::String) => self.step_string(),
                Some(Mode::QuotedString) => self.step_quoted_string(),
                Some(Mode::Quotation) => self.step_quotation(),
            };
            match step {
                Ok(Step::Continue) => {}
                Ok(Step::Emit(token)) => {
                    trace!(token = ?token, "token");
                    return Refill::Done(token);
                }
                Ok(Step::Starved) => {
                    trace!(
                        offset = self.pos.offset,
                        buffered = self.window.end().saturating_sub(self.pos.offset),
                        "suspended for input"
                    );
                    return Refill::suspend(Lexer::run);
                }
                Err(err) => return Refill::Failed(err),
            }
        }
    }

    /// An unterminated string inside a comment is reported against the
    /// outermost comment.
    fn attribute_to_comment(&self, err: LexError) -> LexError {
        match (&err.kind, self.scratch.comment_starts.first()) {
            (LexErrorKind::UnterminatedString, Some(comment_start)) => {
                LexError::unterminated_string_in_comment(
                    comment_start.clone(),
                    err.span,
                    self.comment_depth(),
                )
            }
            _ => err,
        }
    }

    /// Poison the session with `err`.
    fn halt(&mut self, err: LexError) -> LexError {
        debug!(error = %err, span = %err.span, "lexing halted");
        self.modes.clear();
        self.scratch = Scratch::default();
        self.halted = Some(err.clone());
        err
    }

    // ─── Shared step helpers ───

    /// Run one matcher of the raw scanner at the current offset.
    fn scan<T>(&self, rule: impl FnOnce(&mut RawScanner<'_>) -> Scan<T>) -> Scan<T> {
        let mut scanner = RawScanner::new(self.window.cursor_at(self.pos.offset));
        rule(&mut scanner)
    }

    /// Consume `len` bytes, returning where they started.
    #[inline]
    fn advance(&mut self, len: usize) -> Position {
        let start = self.pos.clone();
        self.pos.offset += len;
        start
    }

    /// Bytes from `start` to the current position.
    #[inline]
    fn lexeme(&self, start: &Position) -> &[u8] {
        self.window.slice(start.offset, self.pos.offset)
    }

    #[inline]
    fn span_from(&self, start: &Position) -> Span {
        Span::new(start.clone(), self.pos.clone())
    }

    /// Append the lexeme since `start` to the buffer verbatim.
    fn store(&mut self, start: &Position) {
        let bytes = self.window.slice(start.offset, self.pos.offset);
        self.scratch.buffer.extend_from_slice(bytes);
    }

    /// A line ended; the next one begins at absolute offset `bol`.
    #[inline]
    fn new_line(&mut self, bol: usize) {
        self.pos.line = self.pos.line.saturating_add(1);
        self.pos.bol = bol;
    }

    fn report(&mut self, kind: WarningKind, span: Span) {
        warn!(%span, "{kind}");
        self.warnings.push(Warning { span, kind });
    }

    fn enter(&mut self, mode: Mode) {
        self.modes.push(mode);
        trace!(?mode, depth = self.modes.len(), "enter mode");
    }

    fn leave(&mut self) {
        if let Some(mode) = self.modes.pop() {
            trace!(?mode, depth = self.modes.len(), "leave mode");
        }
    }

    #[inline]
    fn in_comment(&self) -> bool {
        !self.scratch.comment_starts.is_empty()
    }

    /// Span of the finished composite token, ending here.
    fn composite_span(&mut self) -> Span {
        let start = self.scratch.start.take().unwrap_or_else(|| self.pos.clone());
        Span::new(start, self.pos.clone())
    }

    /// Replace the file name of every later position.
    fn set_file(&mut self, name: String) {
        self.pos.file = Arc::from(name);
    }
}

impl fmt::Debug for Lexer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("pos", &self.pos)
            .field("modes", &self.modes)
            .field("buffered", &(self.window.base()..self.window.end()))
            .field("complete", &self.window.is_complete())
            .field("halted", &self.halted.is_some())
            .finish_non_exhaustive()
    }
}
