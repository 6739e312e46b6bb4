//! Raw token tags produced by the scanner, one tag enum per lexer mode.
//!
//! A tag names the rule that matched; the matched length travels with it
//! in a [`RawToken`]. Tags carry no decoded payload. Keyword resolution,
//! escape decoding and literal conversion happen in the session layer.

/// A matched rule and the number of bytes it consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken<T> {
    pub tag: T,
    pub len: usize,
}

/// Rules of the main token mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenTag {
    // ─── Trivia ───
    Blank = 0,
    Newline = 1,
    /// `# 12 "file"` line directive, through its newline.
    LineDirective = 2,

    // ─── Identifiers and labels ───
    Underscore = 8,
    Lowercase = 9,
    Uppercase = 10,
    Tilde = 11,
    Label = 12,
    Question = 13,
    QuestionQuestion = 14,
    OptLabel = 15,

    // ─── Numbers ───
    Int = 16,
    Int32 = 17,
    Int64 = 18,
    NativeInt = 19,
    Float = 20,

    // ─── Characters ───
    /// `'` newline `'`
    CharNewline = 24,
    /// `'c'`
    Char = 25,
    /// `'\n'` and the other named escapes
    CharEscape = 26,
    /// `'\ddd'`
    CharDecimal = 27,
    /// `'\xhh'`
    CharHex = 28,
    /// `'\` followed by anything else
    CharIllegalEscape = 29,
    Quote = 30,

    // ─── Openers of nested modes ───
    StringOpen = 32,
    /// `{id|`
    QuotedStringOpen = 33,
    /// `(*`
    CommentOpen = 34,
    /// `(*)`
    CommentOpenAmbiguous = 35,
    /// `*)` outside any comment
    CommentCloseStray = 36,
    /// `<:id<`, `<:id@id<`, `<@id<`
    QuotationOpen = 37,

    // ─── Operator classes ───
    Prefix = 40,
    Infix0 = 41,
    Infix1 = 42,
    Infix2 = 43,
    Infix3 = 44,
    Infix4 = 45,

    // ─── Fixed punctuation ───
    AmperAmper = 64,
    Ampersand = 65,
    Backquote = 66,
    Bang = 67,
    Bar = 68,
    BarBar = 69,
    BarRBracket = 70,
    Colon = 71,
    ColonColon = 72,
    ColonEqual = 73,
    ColonGreater = 74,
    Comma = 75,
    Dot = 76,
    DotDot = 77,
    Equal = 78,
    Greater = 79,
    GreaterRBrace = 80,
    GreaterRBracket = 81,
    LBrace = 82,
    LBraceLess = 83,
    LBracket = 84,
    LBracketBar = 85,
    LBracketLess = 86,
    LBracketGreater = 87,
    LBracketPercent = 88,
    LBracketPercent2 = 89,
    LBracketAt = 90,
    LBracketAt2 = 91,
    LBracketAt3 = 92,
    Less = 93,
    LessMinus = 94,
    LParen = 95,
    Minus = 96,
    MinusDot = 97,
    MinusGreater = 98,
    Percent = 99,
    Plus = 100,
    PlusDot = 101,
    PlusEq = 102,
    RBrace = 103,
    RBracket = 104,
    RParen = 105,
    Semi = 106,
    SemiSemi = 107,
    Sharp = 108,
    Star = 109,

    // ─── Errors and control ───
    IllegalChar = 240,
    Eof = 255,
}

impl TokenTag {
    /// The exact text of tags that only ever match one spelling.
    pub fn lexeme(self) -> Option<&'static str> {
        let s = match self {
            TokenTag::Underscore => "_",
            TokenTag::Tilde => "~",
            TokenTag::Question => "?",
            TokenTag::QuestionQuestion => "??",
            TokenTag::Quote => "'",
            TokenTag::StringOpen => "\"",
            TokenTag::CommentOpen => "(*",
            TokenTag::CommentOpenAmbiguous => "(*)",
            TokenTag::CommentCloseStray => "*)",
            TokenTag::AmperAmper => "&&",
            TokenTag::Ampersand => "&",
            TokenTag::Backquote => "`",
            TokenTag::Bang => "!",
            TokenTag::Bar => "|",
            TokenTag::BarBar => "||",
            TokenTag::BarRBracket => "|]",
            TokenTag::Colon => ":",
            TokenTag::ColonColon => "::",
            TokenTag::ColonEqual => ":=",
            TokenTag::ColonGreater => ":>",
            TokenTag::Comma => ",",
            TokenTag::Dot => ".",
            TokenTag::DotDot => "..",
            TokenTag::Equal => "=",
            TokenTag::Greater => ">",
            TokenTag::GreaterRBrace => ">}",
            TokenTag::GreaterRBracket => ">]",
            TokenTag::LBrace => "{",
            TokenTag::LBraceLess => "{<",
            TokenTag::LBracket => "[",
            TokenTag::LBracketBar => "[|",
            TokenTag::LBracketLess => "[<",
            TokenTag::LBracketGreater => "[>",
            TokenTag::LBracketPercent => "[%",
            TokenTag::LBracketPercent2 => "[%%",
            TokenTag::LBracketAt => "[@",
            TokenTag::LBracketAt2 => "[@@",
            TokenTag::LBracketAt3 => "[@@@",
            TokenTag::Less => "<",
            TokenTag::LessMinus => "<-",
            TokenTag::LParen => "(",
            TokenTag::Minus => "-",
            TokenTag::MinusDot => "-.",
            TokenTag::MinusGreater => "->",
            TokenTag::Percent => "%",
            TokenTag::Plus => "+",
            TokenTag::PlusDot => "+.",
            TokenTag::PlusEq => "+=",
            TokenTag::RBrace => "}",
            TokenTag::RBracket => "]",
            TokenTag::RParen => ")",
            TokenTag::Semi => ";",
            TokenTag::SemiSemi => ";;",
            TokenTag::Sharp => "#",
            TokenTag::Star => "*",
            _ => return None,
        };
        Some(s)
    }
}

/// Rules inside a comment body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommentTag {
    /// `(*`, a nested comment.
    Open,
    /// `*)`
    Close,
    /// `"`, a string inside the comment.
    StringOpen,
    /// `{id|`, a quoted string inside the comment.
    QuotedStringOpen,
    /// A character literal, kept verbatim so `'"'` does not open a string.
    Char,
    /// `'` newline `'`
    CharNewline,
    Newline,
    /// Anything else, possibly a run of plain bytes.
    Other,
    Eof,
}

/// Rules inside a `"` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StringTag {
    /// The closing `"`.
    Close,
    /// `\` newline, then leading blanks of the next line.
    LineContinuation,
    /// `\\ \' \" \n \t \b \r` and `\ `.
    Escape,
    /// `\ddd`
    DecimalEscape,
    /// `\xhh`
    HexEscape,
    /// `\` followed by any other byte; kept as is.
    IllegalEscape,
    Newline,
    Other,
    Eof,
}

/// Rules inside a `{id|...|id}` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuotedTag {
    /// `|id}`; closes only if `id` matches the opener.
    Terminator,
    Newline,
    Other,
    Eof,
}

/// Rules inside a quotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuotationTag {
    /// A nested opener.
    Open,
    /// `>>`
    Close,
    Newline,
    Other,
    Eof,
}

/// Shebang header at the very start of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShebangTag {
    /// `#!...\n...\n!#\n`
    ThreeLines,
    /// `#!...\n`
    OneLine,
    /// No header; length 0.
    Absent,
}

impl ShebangTag {
    /// Lines the header occupies.
    pub fn lines(self) -> u32 {
        match self {
            ShebangTag::ThreeLines => 3,
            ShebangTag::OneLine => 1,
            ShebangTag::Absent => 0,
        }
    }
}

#[cfg(test)]
mod tests;
