//! Source-annotated rendering of lexical errors and warnings.
//!
//! Lexer offsets are byte offsets. UTF-8 input is rendered with byte
//! indexing; anything else is decoded as Latin-1, one char per byte, so
//! char indexing lines up with the same offsets.

use std::io::Write;
use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use ml_ir::Span;
use ml_lexer::{LexError, LexErrorContext, LexErrorKind, Warning};

/// Label span: source id and byte range.
pub type DiagnosticSpan = (String, Range<usize>);

/// One source file prepared for rendering.
pub struct SourceText {
    id: String,
    cache: (String, Source),
    index_type: IndexType,
    color: bool,
}

impl SourceText {
    pub fn new(id: impl Into<String>, bytes: &[u8]) -> Self {
        let id = id.into();
        let (text, index_type) = match std::str::from_utf8(bytes) {
            Ok(text) => (text.to_owned(), IndexType::Byte),
            Err(_) => (bytes.iter().map(|&b| char::from(b)).collect(), IndexType::Char),
        };
        SourceText {
            cache: (id.clone(), Source::from(text)),
            id,
            index_type,
            color: true,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn config(&self) -> Config {
        Config::default()
            .with_index_type(self.index_type)
            .with_color(self.color)
    }

    fn label(&self, span: &Span) -> Label<DiagnosticSpan> {
        Label::new((self.id.clone(), span.to_range()))
    }

    pub fn error_report(&self, err: &LexError) -> Report<'static, DiagnosticSpan> {
        let mut builder = Report::build(ReportKind::Error, self.id.clone(), err.span.start.offset)
            .with_config(self.config())
            .with_message(err.to_string())
            .with_label(
                self.label(&err.span)
                    .with_message(primary_label(&err.kind))
                    .with_color(Color::Red),
            );
        if let LexErrorKind::UnterminatedStringInComment { string_start } = &err.kind {
            builder = builder.with_label(
                self.label(string_start)
                    .with_message("string literal starts here")
                    .with_color(Color::Yellow),
            );
        }
        if let Some(note) = context_note(&err.context) {
            builder = builder.with_note(note);
        }
        if let Some(note) = self.logical_location(&err.span) {
            builder = builder.with_note(note);
        }
        let mut suggestions: Vec<_> = err.suggestions.iter().collect();
        suggestions.sort_by_key(|s| s.priority);
        if let Some(best) = suggestions.first() {
            builder = builder.with_help(best.message.clone());
        }
        builder.finish()
    }

    pub fn warning_report(&self, warning: &Warning) -> Report<'static, DiagnosticSpan> {
        let mut builder =
            Report::build(ReportKind::Warning, self.id.clone(), warning.span.start.offset)
                .with_config(self.config())
                .with_message(warning.kind.to_string())
                .with_label(self.label(&warning.span).with_color(Color::Yellow));
        if let Some(note) = self.logical_location(&warning.span) {
            builder = builder.with_note(note);
        }
        builder.finish()
    }

    /// Render `report` against this source.
    pub fn write(
        &mut self,
        report: &Report<'static, DiagnosticSpan>,
        out: impl Write,
    ) -> std::io::Result<()> {
        report.write(&mut self.cache, out)
    }

    /// A line directive may have renamed the file or renumbered lines.
    fn logical_location(&self, span: &Span) -> Option<String> {
        (*span.start.file != *self.id).then(|| format!("reported as {span}"))
    }
}

fn primary_label(kind: &LexErrorKind) -> &'static str {
    match kind {
        LexErrorKind::IllegalCharacter(_) => "not valid here",
        LexErrorKind::IllegalEscape(_) => "unknown escape",
        LexErrorKind::UnterminatedComment | LexErrorKind::UnterminatedStringInComment { .. } => {
            "comment opened here"
        }
        LexErrorKind::UnterminatedString => "opened here",
        LexErrorKind::KeywordAsLabel(_) => "reserved word",
        LexErrorKind::LiteralOverflow(_) => "out of range",
    }
}

fn context_note(context: &LexErrorContext) -> Option<String> {
    match context {
        LexErrorContext::TopLevel | LexErrorContext::NumberLiteral => None,
        LexErrorContext::InsideComment { depth: 1 } => Some("inside a comment".to_owned()),
        LexErrorContext::InsideComment { depth } => {
            Some(format!("inside {depth} nested comments"))
        }
        LexErrorContext::InsideString => Some("inside a string literal".to_owned()),
        LexErrorContext::InsideQuotation => Some("inside a quotation".to_owned()),
        LexErrorContext::CharLiteral => Some("in a character literal".to_owned()),
    }
}

#[cfg(test)]
mod tests;
