//! Token types for the ML lexer.
//!
//! `TokenKind` is a closed set of lexical categories: reserved words,
//! punctuation, operators grouped by precedence class, literals with their
//! decoded payloads, comments, quotations and end of input.

use super::Span;
use std::fmt;
use std::hash::Hash;

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Integer literal widths.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum IntKind {
    /// Native `int`: 63 bits.
    Int,
    /// `l` suffix.
    Int32,
    /// `L` suffix.
    Int64,
    /// `n` suffix, sized like a 64-bit target word.
    NativeInt,
}

impl IntKind {
    /// Number of bits a literal of this kind must fit in.
    pub const fn bits(self) -> u32 {
        match self {
            IntKind::Int => 63,
            IntKind::Int32 => 32,
            IntKind::Int64 | IntKind::NativeInt => 64,
        }
    }

    /// The literal suffix, if any.
    pub const fn suffix(self) -> Option<char> {
        match self {
            IntKind::Int => None,
            IntKind::Int32 => Some('l'),
            IntKind::Int64 => Some('L'),
            IntKind::NativeInt => Some('n'),
        }
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IntKind::Int => "int",
            IntKind::Int32 => "int32",
            IntKind::Int64 => "int64",
            IntKind::NativeInt => "nativeint",
        })
    }
}

/// Token kinds.
///
/// Text payloads hold the lexeme decoded byte-per-char (Latin-1), so any
/// input byte sequence round-trips through `String`. String literal
/// payloads stay raw bytes.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // ─── Identifiers and labels ───
    /// Lowercase identifier: `x`, `_tmp`, `foo'`
    Lident(String),
    /// Capitalized identifier: `List`, `Some`
    Uident(String),
    /// `~name:`
    Label(String),
    /// `?name:`
    OptLabel(String),

    // ─── Literals ───
    /// Native int literal, already range-checked.
    Int(i64),
    /// `l`-suffixed literal.
    Int32(i32),
    /// `L`-suffixed literal.
    Int64(i64),
    /// `n`-suffixed literal.
    NativeInt(i64),
    /// Float literal with underscores removed: `1.5e3`
    Float(String),
    /// Character literal, as a byte.
    Char(u8),
    /// String literal. `delimiter` is set for `{id|...|id}` strings.
    String {
        text: Vec<u8>,
        delimiter: Option<String>,
    },

    // ─── Comments and quotations ───
    /// Comment body, without the outer `(*` and `*)`.
    Comment(String),
    /// A `<:name< ... >>` quotation; the contents are not interpreted.
    Quotation,

    // ─── Operators by precedence class ───
    /// `!op`, `~op`, `?op`
    Prefix(String),
    /// `= < > | & $` led operators and `!=`
    Infix0(String),
    /// `@ ^` led operators
    Infix1(String),
    /// `+ -` led operators
    Infix2(String),
    /// `* / %` led operators, `mod`, `land`, `lor`, `lxor`
    Infix3(String),
    /// `**` led operators, `lsl`, `lsr`, `asr`
    Infix4(String),

    // ─── Keywords ───
    And,
    As,
    Assert,
    Begin,
    Class,
    Constraint,
    Do,
    Done,
    Downto,
    Else,
    End,
    Exception,
    External,
    False,
    For,
    Fun,
    Function,
    Functor,
    If,
    In,
    Include,
    Inherit,
    Initializer,
    Lazy,
    Let,
    Match,
    Method,
    Module,
    Mutable,
    New,
    Nonrec,
    Object,
    Of,
    Open,
    Or,
    Private,
    Rec,
    Sig,
    Struct,
    Then,
    To,
    True,
    Try,
    Type,
    Val,
    Virtual,
    When,
    While,
    With,

    // ─── Punctuation ───
    AmperAmper,       // &&
    Ampersand,        // &
    Backquote,        // `
    Bang,             // !
    Bar,              // |
    BarBar,           // ||
    BarRBracket,      // |]
    Colon,            // :
    ColonColon,       // ::
    ColonEqual,       // :=
    ColonGreater,     // :>
    Comma,            // ,
    Dot,              // .
    DotDot,           // ..
    Equal,            // =
    Greater,          // >
    GreaterRBrace,    // >}
    GreaterRBracket,  // >]
    LBrace,           // {
    LBraceLess,       // {<
    LBracket,         // [
    LBracketBar,      // [|
    LBracketLess,     // [<
    LBracketGreater,  // [>
    LBracketPercent,  // [%
    LBracketPercent2, // [%%
    LBracketAt,       // [@
    LBracketAt2,      // [@@
    LBracketAt3,      // [@@@
    Less,             // <
    LessMinus,        // <-
    LParen,           // (
    Minus,            // -
    MinusDot,         // -.
    MinusGreater,     // ->
    Percent,          // %
    Plus,             // +
    PlusDot,          // +.
    PlusEq,           // +=
    Question,         // ?
    QuestionQuestion, // ??
    Quote,            // '
    RBrace,           // }
    RBracket,         // ]
    RParen,           // )
    Semi,             // ;
    SemiSemi,         // ;;
    Sharp,            // #
    Star,             // *
    Tilde,            // ~
    Underscore,       // _

    /// End of input. Returned again on every later request.
    Eof,
}

impl TokenKind {
    #[inline]
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::Comment(_))
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    /// Source spelling of tokens that have a fixed one.
    pub fn fixed_spelling(&self) -> Option<&'static str> {
        let s = match self {
            TokenKind::And => "and",
            TokenKind::As => "as",
            TokenKind::Assert => "assert",
            TokenKind::Begin => "begin",
            TokenKind::Class => "class",
            TokenKind::Constraint => "constraint",
            TokenKind::Do => "do",
            TokenKind::Done => "done",
            TokenKind::Downto => "downto",
            TokenKind::Else => "else",
            TokenKind::End => "end",
            TokenKind::Exception => "exception",
            TokenKind::External => "external",
            TokenKind::False => "false",
            TokenKind::For => "for",
            TokenKind::Fun => "fun",
            TokenKind::Function => "function",
            TokenKind::Functor => "functor",
            TokenKind::If => "if",
            TokenKind::In => "in",
            TokenKind::Include => "include",
            TokenKind::Inherit => "inherit",
            TokenKind::Initializer => "initializer",
            TokenKind::Lazy => "lazy",
            TokenKind::Let => "let",
            TokenKind::Match => "match",
            TokenKind::Method => "method",
            TokenKind::Module => "module",
            TokenKind::Mutable => "mutable",
            TokenKind::New => "new",
            TokenKind::Nonrec => "nonrec",
            TokenKind::Object => "object",
            TokenKind::Of => "of",
            TokenKind::Open => "open",
            TokenKind::Or => "or",
            TokenKind::Private => "private",
            TokenKind::Rec => "rec",
            TokenKind::Sig => "sig",
            TokenKind::Struct => "struct",
            TokenKind::Then => "then",
            TokenKind::To => "to",
            TokenKind::True => "true",
            TokenKind::Try => "try",
            TokenKind::Type => "type",
            TokenKind::Val => "val",
            TokenKind::Virtual => "virtual",
            TokenKind::When => "when",
            TokenKind::While => "while",
            TokenKind::With => "with",
            TokenKind::AmperAmper => "&&",
            TokenKind::Ampersand => "&",
            TokenKind::Backquote => "`",
            TokenKind::Bang => "!",
            TokenKind::Bar => "|",
            TokenKind::BarBar => "||",
            TokenKind::BarRBracket => "|]",
            TokenKind::Colon => ":",
            TokenKind::ColonColon => "::",
            TokenKind::ColonEqual => ":=",
            TokenKind::ColonGreater => ":>",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::Equal => "=",
            TokenKind::Greater => ">",
            TokenKind::GreaterRBrace => ">}",
            TokenKind::GreaterRBracket => ">]",
            TokenKind::LBrace => "{",
            TokenKind::LBraceLess => "{<",
            TokenKind::LBracket => "[",
            TokenKind::LBracketBar => "[|",
            TokenKind::LBracketLess => "[<",
            TokenKind::LBracketGreater => "[>",
            TokenKind::LBracketPercent => "[%",
            TokenKind::LBracketPercent2 => "[%%",
            TokenKind::LBracketAt => "[@",
            TokenKind::LBracketAt2 => "[@@",
            TokenKind::LBracketAt3 => "[@@@",
            TokenKind::Less => "<",
            TokenKind::LessMinus => "<-",
            TokenKind::LParen => "(",
            TokenKind::Minus => "-",
            TokenKind::MinusDot => "-.",
            TokenKind::MinusGreater => "->",
            TokenKind::Percent => "%",
            TokenKind::Plus => "+",
            TokenKind::PlusDot => "+.",
            TokenKind::PlusEq => "+=",
            TokenKind::Question => "?",
            TokenKind::QuestionQuestion => "??",
            TokenKind::Quote => "'",
            TokenKind::RBrace => "}",
            TokenKind::RBracket => "]",
            TokenKind::RParen => ")",
            TokenKind::Semi => ";",
            TokenKind::SemiSemi => ";;",
            TokenKind::Sharp => "#",
            TokenKind::Star => "*",
            TokenKind::Tilde => "~",
            TokenKind::Underscore => "_",
            _ => return None,
        };
        Some(s)
    }

    /// Short category name for diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Lident(_) => "identifier",
            TokenKind::Uident(_) => "constructor",
            TokenKind::Label(_) => "label",
            TokenKind::OptLabel(_) => "optional label",
            TokenKind::Int(_)
            | TokenKind::Int32(_)
            | TokenKind::Int64(_)
            | TokenKind::NativeInt(_) => "integer",
            TokenKind::Float(_) => "float",
            TokenKind::Char(_) => "char",
            TokenKind::String { .. } => "string",
            TokenKind::Comment(_) => "comment",
            TokenKind::Quotation => "quotation",
            TokenKind::Prefix(_) => "prefix operator",
            TokenKind::Infix0(_)
            | TokenKind::Infix1(_)
            | TokenKind::Infix2(_)
            | TokenKind::Infix3(_)
            | TokenKind::Infix4(_) => "infix operator",
            TokenKind::Eof => "end of file",
            other => other.fixed_spelling().unwrap_or("token"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Lident(s)
            | TokenKind::Uident(s)
            | TokenKind::Float(s)
            | TokenKind::Prefix(s)
            | TokenKind::Infix0(s)
            | TokenKind::Infix1(s)
            | TokenKind::Infix2(s)
            | TokenKind::Infix3(s)
            | TokenKind::Infix4(s) => f.write_str(s),
            TokenKind::Label(s) => write!(f, "~{s}:"),
            TokenKind::OptLabel(s) => write!(f, "?{s}:"),
            TokenKind::Int(n) | TokenKind::Int64(n) | TokenKind::NativeInt(n) => {
                let suffix = match self {
                    TokenKind::Int64(_) => "L",
                    TokenKind::NativeInt(_) => "n",
                    _ => "",
                };
                write!(f, "{n}{suffix}")
            }
            TokenKind::Int32(n) => write!(f, "{n}l"),
            TokenKind::Char(c) => write!(f, "'{}'", std::ascii::escape_default(*c)),
            TokenKind::String { text, delimiter } => match delimiter {
                Some(d) => write!(f, "{{{d}|{}|{d}}}", text.escape_ascii()),
                None => write!(f, "\"{}\"", text.escape_ascii()),
            },
            TokenKind::Comment(text) => write!(f, "(*{text}*)"),
            TokenKind::Quotation => f.write_str("<quotation>"),
            TokenKind::Eof => f.write_str("<eof>"),
            other => f.write_str(other.fixed_spelling().unwrap_or("?")),
        }
    }
}

#[cfg(test)]
mod tests;
