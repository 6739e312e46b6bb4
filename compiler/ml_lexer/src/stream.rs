//! Token-stream drivers.
//!
//! A [`TokenStream`] turns a [`Lexer`] plus a [`ChunkSource`] into a plain
//! iterator: whenever the lexer suspends, the next chunk is pulled from
//! the source and the lexer resumed; when the source runs dry the input
//! is marked complete. The stream ends after `Eof` or the first error.

use std::io::{self, Read};

use ml_ir::Token;
use ml_lexer_core::Refill;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::LexerConfig;
use crate::lex_error::LexError;
use crate::lexer::Lexer;

/// Default chunk size of [`ReadSource`].
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// Pull-based provider of input chunks.
pub trait ChunkSource {
    /// The next chunk, or `None` once input is exhausted.
    fn next_chunk(&mut self) -> io::Result<Option<Vec<u8>>>;
}

/// Chunks from an in-memory iterator.
#[derive(Clone, Debug)]
pub struct IterSource<I> {
    chunks: I,
}

impl<I: Iterator<Item = Vec<u8>>> IterSource<I> {
    pub fn new(chunks: impl IntoIterator<IntoIter = I>) -> Self {
        IterSource {
            chunks: chunks.into_iter(),
        }
    }
}

impl<I: Iterator<Item = Vec<u8>>> ChunkSource for IterSource<I> {
    fn next_chunk(&mut self) -> io::Result<Option<Vec<u8>>> {
        Ok(self.chunks.next())
    }
}

/// Fixed-size chunks from a reader.
#[derive(Debug)]
pub struct ReadSource<R> {
    reader: R,
    chunk_size: usize,
}

impl<R: Read> ReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, DEFAULT_CHUNK_SIZE)
    }

    /// `chunk_size` is clamped to at least one byte.
    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        ReadSource {
            reader,
            chunk_size: chunk_size.max(1),
        }
    }
}

impl<R: Read> ChunkSource for ReadSource<R> {
    fn next_chunk(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut buf = vec![0; self.chunk_size];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(n) => {
                    buf.truncate(n);
                    return Ok(Some(buf));
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }
}

/// Failure of a token stream.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Iterator over the tokens of a chunked input.
///
/// Yields `Eof` as its last token, or stops after the first error.
pub struct TokenStream<S> {
    lexer: Lexer,
    source: S,
    skip_comments: bool,
    done: bool,
}

impl<S: ChunkSource> TokenStream<S> {
    pub fn new(config: LexerConfig, source: S) -> Self {
        TokenStream {
            lexer: Lexer::new(config),
            source,
            skip_comments: false,
            done: false,
        }
    }

    /// Drop comment tokens from the stream.
    #[must_use]
    pub fn skip_comments(mut self) -> Self {
        self.skip_comments = true;
        self
    }

    /// The underlying session, for warnings and the current position.
    pub fn lexer(&self) -> &Lexer {
        &self.lexer
    }

    pub fn into_lexer(self) -> Lexer {
        self.lexer
    }

    /// Supply the lexer with the next chunk, or mark end of input.
    fn refill(&mut self) -> io::Result<()> {
        match self.source.next_chunk()? {
            Some(chunk) => {
                trace!(len = chunk.len(), "chunk pulled");
                self.lexer.feed(&chunk);
            }
            None => self.lexer.finish(),
        }
        Ok(())
    }
}

impl<S: ChunkSource> Iterator for TokenStream<S> {
    type Item = Result<Token, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut step = if self.skip_comments {
            self.lexer.significant_token()
        } else {
            self.lexer.token()
        };
        loop {
            match step {
                Refill::Done(token) => {
                    self.done = token.kind.is_eof();
                    return Some(Ok(token));
                }
                Refill::Failed(err) => {
                    self.done = true;
                    return Some(Err(err.into()));
                }
                Refill::NeedMore(k) => {
                    if let Err(err) = self.refill() {
                        debug!(error = %err, "input source failed");
                        self.done = true;
                        return Some(Err(err.into()));
                    }
                    step = k.resume(&mut self.lexer);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
