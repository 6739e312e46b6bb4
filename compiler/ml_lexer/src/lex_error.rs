//! Lexer errors and warnings.
//!
//! Errors follow the WHERE+WHAT+WHY+HOW shape:
//! - WHERE: `span` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` telling which lexer mode was active
//! - HOW: `suggestions` providing actionable fixes
//!
//! Every error is fatal for the session that raised it. Warnings never
//! change the token stream; they are collected on the side.

use std::fmt;

use ml_ir::{IntKind, Span};
use thiserror::Error;

/// A fatal lexical error with context for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHY we were checking (lexer mode at the point of error).
    pub context: LexErrorContext,
    /// HOW to fix.
    pub suggestions: Vec<LexSuggestion>,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    // === Characters ===
    /// A byte no rule accepts.
    #[error("illegal character ({})", .0.escape_ascii())]
    IllegalCharacter(u8),
    /// Unknown or out-of-range escape in a character literal.
    #[error("illegal backslash escape in string or character ({0})")]
    IllegalEscape(String),

    // === Unterminated constructs ===
    #[error("comment not terminated")]
    UnterminatedComment,
    /// Also raised for quotations that never close.
    #[error("string literal not terminated")]
    UnterminatedString,
    /// A string opened inside a comment ran to end of input.
    ///
    /// The error span is the outermost comment opener.
    #[error("this comment contains an unterminated string literal")]
    UnterminatedStringInComment { string_start: Span },

    // === Names and literals ===
    #[error("`{0}` is a keyword, it cannot be used as label name")]
    KeywordAsLabel(String),
    #[error("integer literal exceeds the range of representable integers of type {0}")]
    LiteralOverflow(IntKind),
}

/// Lexer mode at the point of error, the WHY.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorContext {
    /// Main token mode.
    #[default]
    TopLevel,
    /// Inside `depth` nested comments.
    InsideComment { depth: usize },
    /// Inside a `"` or `{id|` string.
    InsideString,
    /// Inside a quotation.
    InsideQuotation,
    /// Converting a numeric literal.
    NumberLiteral,
    /// Decoding a character literal.
    CharLiteral,
}

/// Suggestion for fixing a lexical error, the HOW.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexSuggestion {
    pub message: String,
    /// Priority (lower = more likely relevant). 0 = most likely.
    pub priority: u8,
}

impl LexSuggestion {
    pub fn text(message: impl Into<String>, priority: u8) -> Self {
        LexSuggestion {
            message: message.into(),
            priority,
        }
    }
}

impl LexError {
    #[cold]
    pub fn illegal_character(span: Span, byte: u8) -> Self {
        Self {
            span,
            kind: LexErrorKind::IllegalCharacter(byte),
            context: LexErrorContext::TopLevel,
            suggestions: Vec::new(),
        }
    }

    /// `escape` is the offending lexeme as written.
    #[cold]
    pub fn illegal_escape(span: Span, escape: impl Into<String>) -> Self {
        Self {
            span,
            kind: LexErrorKind::IllegalEscape(escape.into()),
            context: LexErrorContext::CharLiteral,
            suggestions: vec![LexSuggestion::text(
                r#"valid escapes are \\, \', \", \n, \t, \b, \r, \ , \ddd (up to \255) and \xhh"#,
                0,
            )],
        }
    }

    /// Anchored at the outermost comment opener.
    #[cold]
    pub fn unterminated_comment(span: Span, depth: usize) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedComment,
            context: LexErrorContext::InsideComment { depth },
            suggestions: vec![LexSuggestion::text("add closing `*)`", 0)],
        }
    }

    /// Anchored at the opening quote.
    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedString,
            context: LexErrorContext::InsideString,
            suggestions: vec![LexSuggestion::text("add closing `\"`", 0)],
        }
    }

    /// Anchored at the outermost opening marker.
    #[cold]
    pub fn unterminated_quotation(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedString,
            context: LexErrorContext::InsideQuotation,
            suggestions: vec![LexSuggestion::text("add closing `>>`", 0)],
        }
    }

    #[cold]
    pub fn unterminated_string_in_comment(
        comment_start: Span,
        string_start: Span,
        depth: usize,
    ) -> Self {
        Self {
            span: comment_start,
            kind: LexErrorKind::UnterminatedStringInComment { string_start },
            context: LexErrorContext::InsideComment { depth },
            suggestions: vec![
                LexSuggestion::text("close the string literal", 0),
                LexSuggestion::text("a `\"` inside a comment starts a string", 1),
            ],
        }
    }

    #[cold]
    pub fn keyword_as_label(span: Span, name: impl Into<String>) -> Self {
        let name = name.into();
        let hint = format!("rename the label, for example `{name}_`");
        Self {
            span,
            kind: LexErrorKind::KeywordAsLabel(name),
            context: LexErrorContext::TopLevel,
            suggestions: vec![LexSuggestion::text(hint, 0)],
        }
    }

    #[cold]
    pub fn literal_overflow(span: Span, kind: IntKind) -> Self {
        let suggestions = match kind {
            IntKind::Int | IntKind::Int32 => {
                vec![LexSuggestion::text("use the `L` suffix for a 64-bit literal", 1)]
            }
            IntKind::Int64 | IntKind::NativeInt => Vec::new(),
        };
        Self {
            span,
            kind: LexErrorKind::LiteralOverflow(kind),
            context: LexErrorContext::NumberLiteral,
            suggestions,
        }
    }

    #[must_use]
    pub fn with_context(mut self, ctx: LexErrorContext) -> Self {
        self.context = ctx;
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: LexSuggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

// ─── Warnings ───

/// A non-fatal lexical diagnostic.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Warning {
    pub span: Span,
    pub kind: WarningKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum WarningKind {
    /// `(*)` opens a comment.
    CommentStart,
    /// `*)` outside any comment.
    CommentNotEnd,
    /// Unknown backslash escape in a string, kept verbatim.
    IllegalBackslash,
    /// Unescaped newline in a string literal.
    EolInString,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WarningKind::CommentStart => "this is the start of a comment",
            WarningKind::CommentNotEnd => "this is not the end of a comment",
            WarningKind::IllegalBackslash => "illegal backslash escape in string",
            WarningKind::EolInString => {
                "unescaped end-of-line in a string constant (non-portable code)"
            }
        })
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: warning: {}", self.span, self.kind)
    }
}

#[cfg(test)]
mod tests;
