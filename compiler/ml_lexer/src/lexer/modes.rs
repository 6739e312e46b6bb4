//! One step of each scan mode.
//!
//! A step asks the raw scanner for the next lexeme of its mode and, only
//! once a rule has matched, applies the rule's action: position
//! bookkeeping, buffer writes, mode transitions, warnings. A starved
//! match returns before touching any state.

use std::mem;

use ml_ir::{IntKind, Position, Token, TokenKind};
use ml_lexer_core::{
    CommentTag, QuotationTag, QuotedTag, RawToken, Scan, ShebangTag, StringTag, TokenTag,
};
use tracing::{debug, trace};

use super::{Lexer, Mode, Step};
use crate::lex_error::{LexError, LexErrorContext, WarningKind};
use crate::literal::{
    char_for_backslash, char_for_decimal, char_for_hex, int_value, latin1, parse_line_directive,
    strip_underscores,
};

/// Unwrap a scan result, returning `Step::Starved` from the step if the
/// scanner could not decide.
macro_rules! matched {
    ($scan:expr) => {
        match $scan {
            Scan::Matched(raw) => raw,
            Scan::Starved => return Ok(Step::Starved),
        }
    };
}

impl Lexer {
    // ─── Token mode ───

    pub(super) fn step_token(&mut self) -> Result<Step, LexError> {
        if self.shebang_pending {
            return Ok(self.skip_shebang());
        }
        let RawToken { tag, len } = matched!(self.scan(|s| s.next_token()));
        let start = self.advance(len);

        let kind = match tag {
            // Trivia and directives
            TokenTag::Blank => return Ok(Step::Continue),
            TokenTag::Newline => {
                self.new_line(self.pos.offset);
                return Ok(Step::Continue);
            }
            TokenTag::LineDirective => {
                self.line_directive(&start);
                return Ok(Step::Continue);
            }

            // Openers of nested modes
            TokenTag::StringOpen => {
                self.open_string(start, None);
                return Ok(Step::Continue);
            }
            TokenTag::QuotedStringOpen => {
                let lexeme = self.lexeme(&start);
                let delimiter = lexeme[1..lexeme.len() - 1].to_vec();
                self.open_string(start, Some(delimiter));
                return Ok(Step::Continue);
            }
            TokenTag::CommentOpen | TokenTag::CommentOpenAmbiguous => {
                let span = self.span_from(&start);
                if tag == TokenTag::CommentOpenAmbiguous {
                    self.report(WarningKind::CommentStart, span.clone());
                }
                self.scratch.buffer.clear();
                self.scratch.start = Some(start);
                self.scratch.comment_starts.clear();
                self.scratch.comment_starts.push(span);
                self.enter(Mode::Comment);
                return Ok(Step::Continue);
            }
            TokenTag::QuotationOpen => {
                self.scratch.quotation_start = Some(self.span_from(&start));
                self.scratch.quotation_depth = 1;
                self.scratch.start = Some(start);
                self.enter(Mode::Quotation);
                return Ok(Step::Continue);
            }

            // `*)` outside a comment: warn, then back up so `)` is read
            // again and only the `*` is emitted.
            TokenTag::CommentCloseStray => {
                let span = self.span_from(&start);
                self.report(WarningKind::CommentNotEnd, span);
                self.pos.offset -= 1;
                TokenKind::Star
            }

            // Names
            TokenTag::Lowercase => self.identifier(&start, TokenKind::Lident),
            TokenTag::Uppercase => self.identifier(&start, TokenKind::Uident),
            TokenTag::Label => self.label(&start, TokenKind::Label)?,
            TokenTag::OptLabel => self.label(&start, TokenKind::OptLabel)?,
            TokenTag::Underscore => TokenKind::Underscore,
            TokenTag::Tilde => TokenKind::Tilde,
            TokenTag::Question => TokenKind::Question,
            TokenTag::QuestionQuestion => TokenKind::QuestionQuestion,

            // Numbers
            TokenTag::Int => self.integer(&start, IntKind::Int)?,
            TokenTag::Int32 => self.integer(&start, IntKind::Int32)?,
            TokenTag::Int64 => self.integer(&start, IntKind::Int64)?,
            TokenTag::NativeInt => self.integer(&start, IntKind::NativeInt)?,
            TokenTag::Float => TokenKind::Float(strip_underscores(&latin1(self.lexeme(&start)))),

            // Characters
            TokenTag::CharNewline => {
                let c = self.lexeme(&start)[1];
                self.new_line(self.pos.offset - 1);
                TokenKind::Char(c)
            }
            TokenTag::Char => TokenKind::Char(self.lexeme(&start)[1]),
            TokenTag::CharEscape => TokenKind::Char(char_for_backslash(self.lexeme(&start)[2])),
            TokenTag::CharDecimal => {
                let lexeme = self.lexeme(&start);
                match char_for_decimal(&lexeme[2..5]) {
                    Some(c) => TokenKind::Char(c),
                    None => {
                        return Err(LexError::illegal_escape(
                            self.span_from(&start),
                            latin1(&lexeme[1..5]),
                        ))
                    }
                }
            }
            TokenTag::CharHex => TokenKind::Char(char_for_hex(&self.lexeme(&start)[3..5])),
            TokenTag::CharIllegalEscape => {
                let escape = latin1(&self.lexeme(&start)[1..]);
                return Err(LexError::illegal_escape(self.span_from(&start), escape));
            }
            TokenTag::Quote => TokenKind::Quote,

            // Operator classes
            TokenTag::Prefix => TokenKind::Prefix(latin1(self.lexeme(&start))),
            TokenTag::Infix0 => TokenKind::Infix0(latin1(self.lexeme(&start))),
            TokenTag::Infix1 => TokenKind::Infix1(latin1(self.lexeme(&start))),
            TokenTag::Infix2 => TokenKind::Infix2(latin1(self.lexeme(&start))),
            TokenTag::Infix3 => TokenKind::Infix3(latin1(self.lexeme(&start))),
            TokenTag::Infix4 => TokenKind::Infix4(latin1(self.lexeme(&start))),

            // Fixed punctuation
            TokenTag::AmperAmper => TokenKind::AmperAmper,
            TokenTag::Ampersand => TokenKind::Ampersand,
            TokenTag::Backquote => TokenKind::Backquote,
            TokenTag::Bang => TokenKind::Bang,
            TokenTag::Bar => TokenKind::Bar,
            TokenTag::BarBar => TokenKind::BarBar,
            TokenTag::BarRBracket => TokenKind::BarRBracket,
            TokenTag::Colon => TokenKind::Colon,
            TokenTag::ColonColon => TokenKind::ColonColon,
            TokenTag::ColonEqual => TokenKind::ColonEqual,
            TokenTag::ColonGreater => TokenKind::ColonGreater,
            TokenTag::Comma => TokenKind::Comma,
            TokenTag::Dot => TokenKind::Dot,
            TokenTag::DotDot => TokenKind::DotDot,
            TokenTag::Equal => TokenKind::Equal,
            TokenTag::Greater => TokenKind::Greater,
            TokenTag::GreaterRBrace => TokenKind::GreaterRBrace,
            TokenTag::GreaterRBracket => TokenKind::GreaterRBracket,
            TokenTag::LBrace => TokenKind::LBrace,
            TokenTag::LBraceLess => TokenKind::LBraceLess,
            TokenTag::LBracket => TokenKind::LBracket,
            TokenTag::LBracketBar => TokenKind::LBracketBar,
            TokenTag::LBracketLess => TokenKind::LBracketLess,
            TokenTag::LBracketGreater => TokenKind::LBracketGreater,
            TokenTag::LBracketPercent => TokenKind::LBracketPercent,
            TokenTag::LBracketPercent2 => TokenKind::LBracketPercent2,
            TokenTag::LBracketAt => TokenKind::LBracketAt,
            TokenTag::LBracketAt2 => TokenKind::LBracketAt2,
            TokenTag::LBracketAt3 => TokenKind::LBracketAt3,
            TokenTag::Less => TokenKind::Less,
            TokenTag::LessMinus => TokenKind::LessMinus,
            TokenTag::LParen => TokenKind::LParen,
            TokenTag::Minus => TokenKind::Minus,
            TokenTag::MinusDot => TokenKind::MinusDot,
            TokenTag::MinusGreater => TokenKind::MinusGreater,
            TokenTag::Percent => TokenKind::Percent,
            TokenTag::Plus => TokenKind::Plus,
            TokenTag::PlusDot => TokenKind::PlusDot,
            TokenTag::PlusEq => TokenKind::PlusEq,
            TokenTag::RBrace => TokenKind::RBrace,
            TokenTag::RBracket => TokenKind::RBracket,
            TokenTag::RParen => TokenKind::RParen,
            TokenTag::Semi => TokenKind::Semi,
            TokenTag::SemiSemi => TokenKind::SemiSemi,
            TokenTag::Sharp => TokenKind::Sharp,
            TokenTag::Star => TokenKind::Star,

            // Errors and control
            TokenTag::IllegalChar => {
                let byte = self.lexeme(&start)[0];
                return Err(LexError::illegal_character(self.span_from(&start), byte));
            }
            TokenTag::Eof => TokenKind::Eof,
        };
        Ok(Step::Emit(Token::new(kind, self.span_from(&start))))
    }

    fn skip_shebang(&mut self) -> Step {
        let RawToken { tag, len } = match self.scan(|s| s.shebang()) {
            Scan::Matched(raw) => raw,
            Scan::Starved => return Step::Starved,
        };
        self.shebang_pending = false;
        if tag != ShebangTag::Absent {
            self.advance(len);
            self.pos.line = self.pos.line.saturating_add(tag.lines());
            self.pos.bol = self.pos.offset;
            debug!(lines = tag.lines(), "skipped shebang");
        }
        Step::Continue
    }

    /// Apply `# line "file"`: absolute line number, optional new file name.
    fn line_directive(&mut self, start: &Position) {
        let directive = parse_line_directive(self.lexeme(start));
        trace!(line = directive.line, file = ?directive.file, "line directive");
        if let Some(file) = directive.file {
            self.set_file(file);
        }
        self.pos.line = directive.line;
        self.pos.bol = self.pos.offset;
    }

    fn identifier(&self, start: &Position, make: fn(String) -> TokenKind) -> TokenKind {
        let text = latin1(self.lexeme(start));
        self.keywords.lookup(&text).unwrap_or_else(|| make(text))
    }

    /// `~name:` or `?name:`; reserved names are rejected.
    fn label(&self, start: &Position, make: fn(String) -> TokenKind) -> Result<TokenKind, LexError> {
        let lexeme = self.lexeme(start);
        let name = latin1(&lexeme[1..lexeme.len() - 1]);
        if self.keywords.is_reserved(&name) {
            return Err(LexError::keyword_as_label(self.span_from(start), name));
        }
        Ok(make(name))
    }

    fn integer(&self, start: &Position, kind: IntKind) -> Result<TokenKind, LexError> {
        let lexeme = self.lexeme(start);
        let digits = match kind {
            IntKind::Int => lexeme,
            IntKind::Int32 | IntKind::Int64 | IntKind::NativeInt => &lexeme[..lexeme.len() - 1],
        };
        let overflow = || LexError::literal_overflow(self.span_from(start), kind);
        let value = int_value(digits, kind).ok_or_else(overflow)?;
        Ok(match kind {
            IntKind::Int => TokenKind::Int(value),
            IntKind::Int32 => TokenKind::Int32(i32::try_from(value).map_err(|_| overflow())?),
            IntKind::Int64 => TokenKind::Int64(value),
            IntKind::NativeInt => TokenKind::NativeInt(value),
        })
    }

    /// Enter a `"` string, or a `{id|` string when `delimiter` is given.
    fn open_string(&mut self, start: Position, delimiter: Option<Vec<u8>>) {
        self.scratch.buffer.clear();
        self.scratch.string_start = Some(self.span_from(&start));
        self.scratch.start = Some(start);
        match delimiter {
            Some(delimiter) => {
                self.scratch.delimiter = delimiter;
                self.enter(Mode::QuotedString);
            }
            None => self.enter(Mode::String),
        }
    }

    // ─── Comment mode ───

    pub(super) fn step_comment(&mut self) -> Result<Step, LexError> {
        let RawToken { tag, len } = matched!(self.scan(|s| s.next_comment()));
        let start = self.advance(len);

        match tag {
            CommentTag::Open => {
                let span = self.span_from(&start);
                self.scratch.comment_starts.push(span);
                trace!(depth = self.comment_depth(), "nested comment");
                self.store(&start);
            }
            CommentTag::Close => {
                if self.scratch.comment_starts.len() > 1 {
                    self.scratch.comment_starts.pop();
                    self.store(&start);
                } else {
                    self.scratch.comment_starts.clear();
                    self.leave();
                    let text = latin1(&mem::take(&mut self.scratch.buffer));
                    let span = self.composite_span();
                    return Ok(Step::Emit(Token::new(TokenKind::Comment(text), span)));
                }
            }
            CommentTag::StringOpen => {
                self.scratch.string_start = Some(self.span_from(&start));
                self.scratch.buffer.push(b'"');
                self.enter(Mode::String);
            }
            CommentTag::QuotedStringOpen => {
                self.scratch.string_start = Some(self.span_from(&start));
                let lexeme = self.lexeme(&start);
                let delimiter = lexeme[1..lexeme.len() - 1].to_vec();
                self.scratch.delimiter = delimiter;
                self.store(&start);
                self.enter(Mode::QuotedString);
            }
            CommentTag::Char | CommentTag::Other => self.store(&start),
            CommentTag::CharNewline => {
                self.store(&start);
                self.new_line(self.pos.offset - 1);
            }
            CommentTag::Newline => {
                self.store(&start);
                self.new_line(self.pos.offset);
            }
            CommentTag::Eof => {
                let depth = self.comment_depth();
                let outermost = match self.scratch.comment_starts.first() {
                    Some(span) => span.clone(),
                    None => self.span_from(&start),
                };
                return Err(LexError::unterminated_comment(outermost, depth));
            }
        }
        Ok(Step::Continue)
    }

    // ─── String mode ───

    pub(super) fn step_string(&mut self) -> Result<Step, LexError> {
        let RawToken { tag, len } = matched!(self.scan(|s| s.next_string()));
        let start = self.advance(len);

        match tag {
            StringTag::Close => return Ok(self.close_string(b"\"")),
            StringTag::LineContinuation => {
                let bol = match self.lexeme(&start).iter().position(|&b| b == b'\n') {
                    Some(i) => start.offset + i + 1,
                    None => self.pos.offset,
                };
                self.new_line(bol);
            }
            StringTag::Escape => {
                let c = char_for_backslash(self.lexeme(&start)[1]);
                self.scratch.buffer.push(c);
            }
            StringTag::DecimalEscape => {
                let lexeme = self.lexeme(&start);
                let c = match char_for_decimal(&lexeme[1..4]) {
                    Some(c) => c,
                    None if self.in_comment() => b'x',
                    None => {
                        return Err(
                            LexError::illegal_escape(self.span_from(&start), latin1(lexeme))
                                .with_context(LexErrorContext::InsideString),
                        )
                    }
                };
                self.scratch.buffer.push(c);
            }
            StringTag::HexEscape => {
                let c = char_for_hex(&self.lexeme(&start)[2..4]);
                self.scratch.buffer.push(c);
            }
            StringTag::IllegalEscape => {
                let span = self.span_from(&start);
                self.report(WarningKind::IllegalBackslash, span);
                self.store(&start);
            }
            StringTag::Newline => {
                if !self.in_comment() {
                    let span = self.span_from(&start);
                    self.report(WarningKind::EolInString, span);
                }
                self.store(&start);
                self.new_line(self.pos.offset);
            }
            StringTag::Other => self.store(&start),
            StringTag::Eof => return Err(self.unterminated_string(&start)),
        }
        Ok(Step::Continue)
    }

    pub(super) fn step_quoted_string(&mut self) -> Result<Step, LexError> {
        let RawToken { tag, len } = matched!(self.scan(|s| s.next_quoted()));
        let start = self.advance(len);

        match tag {
            QuotedTag::Terminator => {
                let lexeme = self.lexeme(&start);
                if lexeme[1..lexeme.len() - 1] == self.scratch.delimiter[..] {
                    let terminator = lexeme.to_vec();
                    return Ok(self.close_string(&terminator));
                }
                self.store(&start);
            }
            QuotedTag::Newline => {
                self.store(&start);
                self.new_line(self.pos.offset);
            }
            QuotedTag::Other => self.store(&start),
            QuotedTag::Eof => return Err(self.unterminated_string(&start)),
        }
        Ok(Step::Continue)
    }

    /// Leave string mode. Inside a comment the closing `terminator` joins
    /// the comment text; otherwise the string token is emitted.
    fn close_string(&mut self, terminator: &[u8]) -> Step {
        let quoted = self.modes.last() == Some(&Mode::QuotedString);
        self.leave();
        self.scratch.string_start = None;
        let delimiter = mem::take(&mut self.scratch.delimiter);
        if self.in_comment() {
            self.scratch.buffer.extend_from_slice(terminator);
            return Step::Continue;
        }
        let text = mem::take(&mut self.scratch.buffer);
        let delimiter = quoted.then(|| latin1(&delimiter));
        let span = self.composite_span();
        Step::Emit(Token::new(TokenKind::String { text, delimiter }, span))
    }

    /// Anchored at the opening quote; promoted to the enclosing comment by
    /// `Lexer::token`.
    fn unterminated_string(&self, start: &Position) -> LexError {
        let span = match &self.scratch.string_start {
            Some(span) => span.clone(),
            None => self.span_from(start),
        };
        LexError::unterminated_string(span)
    }

    // ─── Quotation mode ───

    pub(super) fn step_quotation(&mut self) -> Result<Step, LexError> {
        let RawToken { tag, len } = matched!(self.scan(|s| s.next_quotation()));
        let start = self.advance(len);

        match tag {
            QuotationTag::Open => {
                self.scratch.quotation_depth += 1;
                trace!(depth = self.scratch.quotation_depth, "nested quotation");
            }
            QuotationTag::Close => {
                self.scratch.quotation_depth = self.scratch.quotation_depth.saturating_sub(1);
                if self.scratch.quotation_depth == 0 {
                    self.leave();
                    self.scratch.quotation_start = None;
                    let span = self.composite_span();
                    return Ok(Step::Emit(Token::new(TokenKind::Quotation, span)));
                }
            }
            QuotationTag::Newline => self.new_line(self.pos.offset),
            QuotationTag::Other => {}
            QuotationTag::Eof => {
                let span = match &self.scratch.quotation_start {
                    Some(span) => span.clone(),
                    None => self.span_from(&start),
                };
                return Err(LexError::unterminated_quotation(span));
            }
        }
        Ok(Step::Continue)
    }
}
