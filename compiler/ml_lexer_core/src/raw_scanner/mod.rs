//! Hand-written longest-match scanner, one entry point per lexer mode.
//!
//! Each entry point looks at the bytes buffered from the current lexeme
//! start and reports which rule matches the longest prefix, earlier rules
//! winning ties. It never decides on incomplete information: if any rule
//! needed a byte past the end of an open window, the answer is
//! [`Scan::Starved`] and the caller retries from the same lexeme start
//! once more input has arrived. Matching is pure, so a retry can never
//! duplicate an effect.
//!
//! # Design
//!
//! Dispatch is on the first byte. Every arm probes the candidate rules
//! with `peek_at` from offset 0, collects the longest in a [`Longest`],
//! and commits it. Plain runs inside comment and string bodies are the
//! exception: they stop at the buffer end without starving, so a long
//! comment is consumed in pieces as chunks arrive.

use crate::char_class::{
    class_of, is_binary, is_blank, is_decimal, is_hex, is_identchar, is_lowercase,
    is_named_escape, is_octal, is_symbolchar, is_uppercase, ByteClass,
};
use crate::cursor::Cursor;
use crate::tag::{
    CommentTag, QuotationTag, QuotedTag, RawToken, ShebangTag, StringTag, TokenTag,
};

/// Result of one matching attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scan<T> {
    /// A rule matched.
    Matched(RawToken<T>),
    /// No decision possible until more input arrives.
    Starved,
}

/// Longest candidate so far; on equal lengths the first offer stays.
struct Longest<T> {
    tag: T,
    len: usize,
}

impl<T> Longest<T> {
    fn new(tag: T, len: usize) -> Self {
        Longest { tag, len }
    }

    fn offer(&mut self, tag: T, len: Option<usize>) {
        if let Some(len) = len {
            if len > self.len {
                self.tag = tag;
                self.len = len;
            }
        }
    }
}

/// Shape of a well-formed character literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CharForm {
    Newline,
    Plain,
    Escape,
    Decimal,
    Hex,
}

/// Scanner over the buffered bytes of one lexeme attempt.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a scanner whose cursor sits at the lexeme start.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    #[inline]
    fn finish<T>(&self, tag: T) -> Scan<T> {
        if self.cursor.is_starved() {
            Scan::Starved
        } else {
            Scan::Matched(RawToken {
                tag,
                len: self.cursor.pos(),
            })
        }
    }

    #[inline]
    fn accept<T>(&mut self, best: Longest<T>) -> T {
        self.cursor.advance_n(best.len);
        best.tag
    }

    #[inline]
    fn single<T>(&mut self, tag: T) -> T {
        self.cursor.advance();
        tag
    }

    /// Longest of a list of multi-byte spellings, falling back to the
    /// one-byte token already under the cursor.
    fn fixed(&mut self, spellings: &[(&str, TokenTag)], fallback: TokenTag) -> Longest<TokenTag> {
        let mut best = Longest::new(fallback, 1);
        for &(text, tag) in spellings {
            let matched = text
                .bytes()
                .enumerate()
                .all(|(i, b)| self.cursor.at(i, b));
            best.offer(tag, matched.then_some(text.len()));
        }
        best
    }

    /// Length of `first symbolchar*`.
    fn class_len(&mut self) -> usize {
        1 + self.cursor.run_len(1, is_symbolchar)
    }

    // ─── Token mode ───

    /// Produce the next raw token of the main mode.
    ///
    /// Returns `TokenTag::Eof` with `len == 0` once the window is complete
    /// and exhausted; later calls keep returning it.
    pub fn next_token(&mut self) -> Scan<TokenTag> {
        let Some(b) = self.cursor.current() else {
            return self.finish(TokenTag::Eof);
        };
        let tag = match b {
            b' ' | b'\t' | 0x0C => {
                self.cursor.eat_while(is_blank);
                TokenTag::Blank
            }
            b'\r' | b'\n' => self.newline(),
            b'_' => self.underscore(),
            b'~' => self.tilde(),
            b'?' => self.question(),
            b'!' => self.bang(),
            b'0'..=b'9' => self.number(),
            b'"' => self.single(TokenTag::StringOpen),
            b'\'' => self.quote(),
            b'#' => self.sharp(),
            b'(' => {
                let best = self.fixed(
                    &[("(*", TokenTag::CommentOpen), ("(*)", TokenTag::CommentOpenAmbiguous)],
                    TokenTag::LParen,
                );
                self.accept(best)
            }
            b'*' => self.star(),
            b'<' => self.less(),
            b'>' => self.infix0(&[
                (">]", TokenTag::GreaterRBracket),
                (">}", TokenTag::GreaterRBrace),
            ], TokenTag::Greater),
            b'|' => self.infix0(&[
                ("||", TokenTag::BarBar),
                ("|]", TokenTag::BarRBracket),
            ], TokenTag::Bar),
            b'&' => self.infix0(&[("&&", TokenTag::AmperAmper)], TokenTag::Ampersand),
            b'=' => self.infix0(&[], TokenTag::Equal),
            b'$' => {
                let len = self.class_len();
                self.cursor.advance_n(len);
                TokenTag::Infix0
            }
            b'@' | b'^' => {
                let len = self.class_len();
                self.cursor.advance_n(len);
                TokenTag::Infix1
            }
            b'+' => self.operator(
                &[("+.", TokenTag::PlusDot), ("+=", TokenTag::PlusEq)],
                TokenTag::Plus,
                TokenTag::Infix2,
            ),
            b'-' => self.operator(
                &[("-.", TokenTag::MinusDot), ("->", TokenTag::MinusGreater)],
                TokenTag::Minus,
                TokenTag::Infix2,
            ),
            b'%' => self.operator(&[], TokenTag::Percent, TokenTag::Infix3),
            b'/' => {
                let len = self.class_len();
                self.cursor.advance_n(len);
                TokenTag::Infix3
            }
            b'[' => {
                let best = self.fixed(
                    &[
                        ("[|", TokenTag::LBracketBar),
                        ("[<", TokenTag::LBracketLess),
                        ("[>", TokenTag::LBracketGreater),
                        ("[%", TokenTag::LBracketPercent),
                        ("[%%", TokenTag::LBracketPercent2),
                        ("[@", TokenTag::LBracketAt),
                        ("[@@", TokenTag::LBracketAt2),
                        ("[@@@", TokenTag::LBracketAt3),
                    ],
                    TokenTag::LBracket,
                );
                self.accept(best)
            }
            b'{' => {
                let mut best = self.fixed(&[("{<", TokenTag::LBraceLess)], TokenTag::LBrace);
                best.offer(TokenTag::QuotedStringOpen, quoted_opener_len(&mut self.cursor));
                self.accept(best)
            }
            b':' => {
                let best = self.fixed(
                    &[
                        ("::", TokenTag::ColonColon),
                        (":=", TokenTag::ColonEqual),
                        (":>", TokenTag::ColonGreater),
                    ],
                    TokenTag::Colon,
                );
                self.accept(best)
            }
            b'.' => {
                let best = self.fixed(&[("..", TokenTag::DotDot)], TokenTag::Dot);
                self.accept(best)
            }
            b';' => {
                let best = self.fixed(&[(";;", TokenTag::SemiSemi)], TokenTag::Semi);
                self.accept(best)
            }
            b')' => self.single(TokenTag::RParen),
            b']' => self.single(TokenTag::RBracket),
            b'}' => self.single(TokenTag::RBrace),
            b',' => self.single(TokenTag::Comma),
            b'`' => self.single(TokenTag::Backquote),
            _ if is_lowercase(b) => {
                self.cursor.advance();
                self.cursor.eat_while(is_identchar);
                TokenTag::Lowercase
            }
            _ if is_uppercase(b) => {
                self.cursor.advance();
                self.cursor.eat_while(is_identchar);
                TokenTag::Uppercase
            }
            _ => self.single(TokenTag::IllegalChar),
        };
        self.finish(tag)
    }

    fn newline(&mut self) -> TokenTag {
        if let Some(n) = self.cursor.newline_len(0) {
            self.cursor.advance_n(n);
            TokenTag::Newline
        } else {
            self.single(TokenTag::IllegalChar)
        }
    }

    fn underscore(&mut self) -> TokenTag {
        self.cursor.advance();
        if self.cursor.eat_while(is_identchar) > 0 {
            TokenTag::Lowercase
        } else {
            TokenTag::Underscore
        }
    }

    // ─── Labels and prefix operators ───

    /// `name:` after a one-byte `~` or `?`.
    fn label_len(&mut self) -> Option<usize> {
        if !self.cursor.at_if(1, is_lowercase) {
            return None;
        }
        let n = 2 + self.cursor.run_len(2, is_identchar);
        self.cursor.at(n, b':').then_some(n + 1)
    }

    /// One byte followed by `symbolchar+`.
    fn prefix_len(&mut self) -> Option<usize> {
        let n = self.cursor.run_len(1, is_symbolchar);
        (n > 0).then_some(n + 1)
    }

    fn tilde(&mut self) -> TokenTag {
        let mut best = Longest::new(TokenTag::Tilde, 1);
        let label = self.label_len();
        best.offer(TokenTag::Label, label);
        let prefix = self.prefix_len();
        best.offer(TokenTag::Prefix, prefix);
        self.accept(best)
    }

    fn question(&mut self) -> TokenTag {
        let mut best = self.fixed(&[("??", TokenTag::QuestionQuestion)], TokenTag::Question);
        let label = self.label_len();
        best.offer(TokenTag::OptLabel, label);
        let prefix = self.prefix_len();
        best.offer(TokenTag::Prefix, prefix);
        self.accept(best)
    }

    fn bang(&mut self) -> TokenTag {
        let mut best = self.fixed(&[("!=", TokenTag::Infix0)], TokenTag::Bang);
        let prefix = self.prefix_len();
        best.offer(TokenTag::Prefix, prefix);
        self.accept(best)
    }

    // ─── Infix operators ───

    /// Fixed spellings first, then the operator class on ties.
    fn operator(
        &mut self,
        spellings: &[(&str, TokenTag)],
        single: TokenTag,
        class: TokenTag,
    ) -> TokenTag {
        let mut best = self.fixed(spellings, single);
        let len = self.class_len();
        best.offer(class, Some(len));
        self.accept(best)
    }

    fn infix0(&mut self, spellings: &[(&str, TokenTag)], single: TokenTag) -> TokenTag {
        self.operator(spellings, single, TokenTag::Infix0)
    }

    fn star(&mut self) -> TokenTag {
        let mut best = self.fixed(&[("*)", TokenTag::CommentCloseStray)], TokenTag::Star);
        let len = self.class_len();
        if self.cursor.at(1, b'*') {
            best.offer(TokenTag::Infix4, Some(len));
        }
        best.offer(TokenTag::Infix3, Some(len));
        self.accept(best)
    }

    fn less(&mut self) -> TokenTag {
        let mut best = self.fixed(&[("<-", TokenTag::LessMinus)], TokenTag::Less);
        best.offer(TokenTag::QuotationOpen, quotation_opener_len(&mut self.cursor));
        let len = self.class_len();
        best.offer(TokenTag::Infix0, Some(len));
        self.accept(best)
    }

    // ─── Numbers ───

    fn number(&mut self) -> TokenTag {
        let c = &mut self.cursor;
        let decimal_or_underscore = |b: u8| is_decimal(b) || b == b'_';

        let dec = 1 + c.run_len(1, decimal_or_underscore);
        let mut int_len = dec;
        if c.at(0, b'0') {
            let digit: Option<fn(u8) -> bool> = match c.peek_at(1) {
                Some(b'x' | b'X') => Some(is_hex),
                Some(b'o' | b'O') => Some(is_octal),
                Some(b'b' | b'B') => Some(is_binary),
                _ => None,
            };
            if let Some(digit) = digit {
                if c.at_if(2, digit) {
                    int_len = 3 + c.run_len(3, |b| digit(b) || b == b'_');
                }
            }
        }

        let mut float_len = dec;
        if c.at(float_len, b'.') {
            float_len += 1;
            float_len += c.run_len(float_len, decimal_or_underscore);
        }
        if c.at_if(float_len, |b| b == b'e' || b == b'E') {
            let mut e = float_len + 1;
            if c.at_if(e, |b| b == b'+' || b == b'-') {
                e += 1;
            }
            if c.at_if(e, is_decimal) {
                float_len = e + 1 + c.run_len(e + 1, decimal_or_underscore);
            }
        }

        let suffixed = match c.peek_at(int_len) {
            Some(b'l') => Some(TokenTag::Int32),
            Some(b'L') => Some(TokenTag::Int64),
            Some(b'n') => Some(TokenTag::NativeInt),
            _ => None,
        };

        let mut best = Longest::new(TokenTag::Int, int_len);
        best.offer(TokenTag::Float, Some(float_len));
        if let Some(tag) = suffixed {
            best.offer(tag, Some(int_len + 1));
        }
        self.accept(best)
    }

    // ─── Characters ───

    fn quote(&mut self) -> TokenTag {
        let mut best = Longest::new(TokenTag::Quote, 1);
        if let Some((form, len)) = char_literal_len(&mut self.cursor) {
            let tag = match form {
                CharForm::Newline => TokenTag::CharNewline,
                CharForm::Plain => TokenTag::Char,
                CharForm::Escape => TokenTag::CharEscape,
                CharForm::Decimal => TokenTag::CharDecimal,
                CharForm::Hex => TokenTag::CharHex,
            };
            best.offer(tag, Some(len));
        }
        if self.cursor.at(1, b'\\') && self.cursor.peek_at(2).is_some() {
            best.offer(TokenTag::CharIllegalEscape, Some(3));
        }
        self.accept(best)
    }

    // ─── Directives ───

    fn sharp(&mut self) -> TokenTag {
        let mut best = Longest::new(TokenTag::Sharp, 1);
        let directive = self.line_directive_len();
        best.offer(TokenTag::LineDirective, directive);
        self.accept(best)
    }

    /// `# [ \t]* digits ... newline`; the optional quoted file name is
    /// covered by the rest-of-line run.
    fn line_directive_len(&mut self) -> Option<usize> {
        let c = &mut self.cursor;
        let mut i = 1 + c.run_len(1, |b| b == b' ' || b == b'\t');
        let digits = c.run_len(i, is_decimal);
        if digits == 0 {
            return None;
        }
        i += digits;
        i += c.run_len(i, |b| b != b'\n' && b != b'\r');
        c.newline_len(i).map(|nl| i + nl)
    }

    // ─── Comment mode ───

    /// Produce the next raw token inside a comment body.
    pub fn next_comment(&mut self) -> Scan<CommentTag> {
        let Some(b) = self.cursor.current() else {
            return self.finish(CommentTag::Eof);
        };
        let tag = match b {
            b'(' => self.pair(b'*', CommentTag::Open, CommentTag::Other),
            b'*' => self.pair(b')', CommentTag::Close, CommentTag::Other),
            b'"' => self.single(CommentTag::StringOpen),
            b'{' => match quoted_opener_len(&mut self.cursor) {
                Some(n) => {
                    self.cursor.advance_n(n);
                    CommentTag::QuotedStringOpen
                }
                None => self.single(CommentTag::Other),
            },
            b'\'' => self.comment_quote(),
            b'\r' | b'\n' => self.body_newline(CommentTag::Newline, CommentTag::Other),
            _ => {
                self.cursor
                    .eat_plain_until(|b| class_of(b).contains(ByteClass::COMMENT_STOP));
                CommentTag::Other
            }
        };
        self.finish(tag)
    }

    fn comment_quote(&mut self) -> CommentTag {
        if self.cursor.at(1, b'\'') {
            self.cursor.advance_n(2);
            return CommentTag::Char;
        }
        match char_literal_len(&mut self.cursor) {
            Some((CharForm::Newline, len)) => {
                self.cursor.advance_n(len);
                CommentTag::CharNewline
            }
            Some((_, len)) => {
                self.cursor.advance_n(len);
                CommentTag::Char
            }
            None => self.single(CommentTag::Other),
        }
    }

    // ─── String mode ───

    /// Produce the next raw token inside a `"` string.
    pub fn next_string(&mut self) -> Scan<StringTag> {
        let Some(b) = self.cursor.current() else {
            return self.finish(StringTag::Eof);
        };
        let tag = match b {
            b'"' => self.single(StringTag::Close),
            b'\\' => self.backslash(),
            b'\r' | b'\n' => self.body_newline(StringTag::Newline, StringTag::Other),
            _ => {
                self.cursor.skip_to_string_delim();
                StringTag::Other
            }
        };
        self.finish(tag)
    }

    fn backslash(&mut self) -> StringTag {
        let c = &mut self.cursor;
        if let Some(nl) = c.newline_len(1) {
            let blanks = c.run_len(1 + nl, |b| b == b' ' || b == b'\t');
            c.advance_n(1 + nl + blanks);
            return StringTag::LineContinuation;
        }
        let (tag, len) = match c.peek_at(1) {
            Some(e) if is_named_escape(e) => (StringTag::Escape, 2),
            Some(e) if is_decimal(e) && c.at_if(2, is_decimal) && c.at_if(3, is_decimal) => {
                (StringTag::DecimalEscape, 4)
            }
            Some(b'x') if c.at_if(2, is_hex) && c.at_if(3, is_hex) => (StringTag::HexEscape, 4),
            Some(_) => (StringTag::IllegalEscape, 2),
            None => (StringTag::Other, 1),
        };
        c.advance_n(len);
        tag
    }

    // ─── Quoted string mode ───

    /// Produce the next raw token inside a `{id|...|id}` string.
    pub fn next_quoted(&mut self) -> Scan<QuotedTag> {
        let Some(b) = self.cursor.current() else {
            return self.finish(QuotedTag::Eof);
        };
        let tag = match b {
            b'|' => {
                let n = self.cursor.run_len(1, is_lowercase);
                if self.cursor.at(1 + n, b'}') {
                    self.cursor.advance_n(n + 2);
                    QuotedTag::Terminator
                } else {
                    self.single(QuotedTag::Other)
                }
            }
            b'\r' | b'\n' => self.body_newline(QuotedTag::Newline, QuotedTag::Other),
            _ => {
                self.cursor.skip_to3(b'|', b'\r', b'\n');
                QuotedTag::Other
            }
        };
        self.finish(tag)
    }

    // ─── Quotation mode ───

    /// Produce the next raw token inside a quotation.
    pub fn next_quotation(&mut self) -> Scan<QuotationTag> {
        let Some(b) = self.cursor.current() else {
            return self.finish(QuotationTag::Eof);
        };
        let tag = match b {
            b'>' => self.pair(b'>', QuotationTag::Close, QuotationTag::Other),
            b'<' => match quotation_opener_len(&mut self.cursor) {
                Some(n) => {
                    self.cursor.advance_n(n);
                    QuotationTag::Open
                }
                None => self.single(QuotationTag::Other),
            },
            b'\r' | b'\n' => self.body_newline(QuotationTag::Newline, QuotationTag::Other),
            _ => {
                self.cursor
                    .eat_plain_until(|b| matches!(b, b'>' | b'<' | b'\r' | b'\n'));
                QuotationTag::Other
            }
        };
        self.finish(tag)
    }

    // ─── Shebang ───

    /// Match the optional `#!` header at the very start of the input.
    pub fn shebang(&mut self) -> Scan<ShebangTag> {
        let mut best = Longest::new(ShebangTag::Absent, 0);
        let c = &mut self.cursor;
        if c.at(0, b'#') && c.at(1, b'!') {
            let first = 2 + c.run_len(2, |b| b != b'\n');
            if c.at(first, b'\n') {
                let one = first + 1;
                best.offer(ShebangTag::OneLine, Some(one));
                let second = one + c.run_len(one, |b| b != b'\n');
                let closed = c.at(second, b'\n')
                    && c.at(second + 1, b'!')
                    && c.at(second + 2, b'#')
                    && c.at(second + 3, b'\n');
                if closed {
                    best.offer(ShebangTag::ThreeLines, Some(second + 4));
                }
            }
        }
        let tag = self.accept(best);
        self.finish(tag)
    }

    // ─── Shared pieces ───

    /// Two-byte rule if `second` follows, else the one-byte fallback.
    fn pair<T>(&mut self, second: u8, both: T, one: T) -> T {
        if self.cursor.at(1, second) {
            self.cursor.advance_n(2);
            both
        } else {
            self.single(one)
        }
    }

    /// `\r*\n` inside a body; a lone `\r` is an ordinary byte.
    fn body_newline<T>(&mut self, newline: T, other: T) -> T {
        if let Some(n) = self.cursor.newline_len(0) {
            self.cursor.advance_n(n);
            newline
        } else {
            self.single(other)
        }
    }
}

/// `{` lowercase* `|`, with the cursor on the `{`.
fn quoted_opener_len(c: &mut Cursor<'_>) -> Option<usize> {
    let n = c.run_len(1, is_lowercase);
    c.at(1 + n, b'|').then_some(n + 2)
}

/// `<:id<`, `<:id@id<` or `<@id<`, with the cursor on the `<`.
fn quotation_opener_len(c: &mut Cursor<'_>) -> Option<usize> {
    match c.peek_at(1) {
        Some(b':') => {
            let i = 2 + c.run_len(2, is_identchar);
            if c.at(i, b'<') {
                return Some(i + 1);
            }
            if c.at(i, b'@') {
                let j = i + 1 + c.run_len(i + 1, is_identchar);
                if c.at(j, b'<') {
                    return Some(j + 1);
                }
            }
            None
        }
        Some(b'@') => {
            let i = 2 + c.run_len(2, is_identchar);
            c.at(i, b'<').then_some(i + 1)
        }
        _ => None,
    }
}

/// A well-formed character literal, with the cursor on the opening `'`.
fn char_literal_len(c: &mut Cursor<'_>) -> Option<(CharForm, usize)> {
    if let Some(nl) = c.newline_len(1) {
        if c.at(1 + nl, b'\'') {
            return Some((CharForm::Newline, nl + 2));
        }
    }
    match c.peek_at(1)? {
        b'\\' => {
            let e = c.peek_at(2)?;
            if is_named_escape(e) && c.at(3, b'\'') {
                Some((CharForm::Escape, 4))
            } else if is_decimal(e)
                && c.at_if(3, is_decimal)
                && c.at_if(4, is_decimal)
                && c.at(5, b'\'')
            {
                Some((CharForm::Decimal, 6))
            } else if e == b'x' && c.at_if(3, is_hex) && c.at_if(4, is_hex) && c.at(5, b'\'') {
                Some((CharForm::Hex, 6))
            } else {
                None
            }
        }
        b'\'' | b'\n' | b'\r' => None,
        _ => c.at(2, b'\'').then_some((CharForm::Plain, 3)),
    }
}
