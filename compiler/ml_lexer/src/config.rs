//! Session configuration.

use std::sync::Arc;

use crate::keywords::Keywords;

/// File name used when the caller gives none.
pub const DEFAULT_FILE_NAME: &str = "_none_";

/// Settings for one lexing session.
#[derive(Clone, Debug)]
pub struct LexerConfig {
    /// Logical file name of every position, until a line directive
    /// replaces it.
    pub file_name: Arc<str>,
    pub keywords: Keywords,
    /// Consume a leading `#!` header before the first token.
    pub skip_shebang: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            file_name: Arc::from(DEFAULT_FILE_NAME),
            keywords: Keywords::new(),
            skip_shebang: true,
        }
    }
}

impl LexerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn file_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.file_name = name.into();
        self
    }

    #[must_use]
    pub fn keywords(mut self, keywords: Keywords) -> Self {
        self.keywords = keywords;
        self
    }

    #[must_use]
    pub fn skip_shebang(mut self, skip: bool) -> Self {
        self.skip_shebang = skip;
        self
    }
}
