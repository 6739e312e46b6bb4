//! Keyword resolution.
//!
//! Two layers, consulted in order:
//! 1. **Overrides**: a caller-supplied table, for alternate reserved-word
//!    sets such as test DSL keywords
//! 2. **Reserved keywords**: the fixed table, length-bucketed
//!
//! The override layer always wins. Both layers also decide which names
//! cannot be used as labels.
//!
//! The fixed table includes the operator keywords `mod land lor lxor`
//! (infix level 3) and `lsl lsr asr` (infix level 4).

use ml_ir::TokenKind;
use rustc_hash::FxHashMap;

/// Look up a reserved keyword in the fixed table.
///
/// Uses length-bucketing for fast rejection: keywords are 2-11 chars and
/// start with a lowercase ASCII letter.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    if !(2..=11).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "as" => Some(TokenKind::As),
            "do" => Some(TokenKind::Do),
            "if" => Some(TokenKind::If),
            "in" => Some(TokenKind::In),
            "of" => Some(TokenKind::Of),
            "or" => Some(TokenKind::Or),
            "to" => Some(TokenKind::To),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "end" => Some(TokenKind::End),
            "for" => Some(TokenKind::For),
            "fun" => Some(TokenKind::Fun),
            "let" => Some(TokenKind::Let),
            "new" => Some(TokenKind::New),
            "rec" => Some(TokenKind::Rec),
            "sig" => Some(TokenKind::Sig),
            "try" => Some(TokenKind::Try),
            "val" => Some(TokenKind::Val),
            "mod" | "lor" => Some(TokenKind::Infix3(text.to_owned())),
            "lsl" | "lsr" | "asr" => Some(TokenKind::Infix4(text.to_owned())),
            _ => None,
        },
        4 => match text {
            "done" => Some(TokenKind::Done),
            "else" => Some(TokenKind::Else),
            "lazy" => Some(TokenKind::Lazy),
            "open" => Some(TokenKind::Open),
            "then" => Some(TokenKind::Then),
            "true" => Some(TokenKind::True),
            "type" => Some(TokenKind::Type),
            "when" => Some(TokenKind::When),
            "with" => Some(TokenKind::With),
            "land" | "lxor" => Some(TokenKind::Infix3(text.to_owned())),
            _ => None,
        },
        5 => match text {
            "begin" => Some(TokenKind::Begin),
            "class" => Some(TokenKind::Class),
            "false" => Some(TokenKind::False),
            "match" => Some(TokenKind::Match),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "assert" => Some(TokenKind::Assert),
            "downto" => Some(TokenKind::Downto),
            "method" => Some(TokenKind::Method),
            "module" => Some(TokenKind::Module),
            "nonrec" => Some(TokenKind::Nonrec),
            "object" => Some(TokenKind::Object),
            "struct" => Some(TokenKind::Struct),
            _ => None,
        },
        7 => match text {
            "functor" => Some(TokenKind::Functor),
            "include" => Some(TokenKind::Include),
            "inherit" => Some(TokenKind::Inherit),
            "mutable" => Some(TokenKind::Mutable),
            "private" => Some(TokenKind::Private),
            "virtual" => Some(TokenKind::Virtual),
            _ => None,
        },
        8 => match text {
            "external" => Some(TokenKind::External),
            "function" => Some(TokenKind::Function),
            _ => None,
        },
        9 => match text {
            "exception" => Some(TokenKind::Exception),
            _ => None,
        },
        10 => match text {
            "constraint" => Some(TokenKind::Constraint),
            _ => None,
        },
        11 => match text {
            "initializer" => Some(TokenKind::Initializer),
            _ => None,
        },
        _ => None,
    }
}

/// Keyword table of one lexing session.
///
/// Built once, read-only while scanning.
#[derive(Clone, Debug, Default)]
pub struct Keywords {
    overrides: FxHashMap<String, TokenKind>,
}

impl Keywords {
    /// The fixed table only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `spelling` as `kind`, ahead of the fixed table.
    #[must_use]
    pub fn with_override(mut self, spelling: impl Into<String>, kind: TokenKind) -> Self {
        self.overrides.insert(spelling.into(), kind);
        self
    }

    /// Classification of an identifier spelling, if it is reserved.
    pub fn lookup(&self, text: &str) -> Option<TokenKind> {
        match self.overrides.get(text) {
            Some(kind) => Some(kind.clone()),
            None => lookup(text),
        }
    }

    /// Reserved words cannot be used as label names.
    pub fn is_reserved(&self, text: &str) -> bool {
        self.overrides.contains_key(text) || lookup(text).is_some()
    }

    /// Number of override entries.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

impl<S: Into<String>> FromIterator<(S, TokenKind)> for Keywords {
    fn from_iter<I: IntoIterator<Item = (S, TokenKind)>>(iter: I) -> Self {
        Keywords {
            overrides: iter.into_iter().map(|(s, k)| (s.into(), k)).collect(),
        }
    }
}

#[cfg(test)]
mod tests;
