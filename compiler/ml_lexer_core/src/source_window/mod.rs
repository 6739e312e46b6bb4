//! Sliding window over a chunked input stream.
//!
//! Input arrives in arbitrary chunks. The window appends them, remembers
//! whether the producer has signalled end of input, and drops bytes the
//! lexer has already consumed. All offsets taken or returned here are
//! absolute stream offsets; `base` is the absolute offset of the first
//! byte still held.
//!
//! ```text
//! stream:  [ released ... | held bytes ............ ]
//!          0              base                      end
//! ```

use crate::Cursor;

/// Buffered tail of an input stream.
#[derive(Clone, Debug, Default)]
pub struct SourceWindow {
    /// Bytes from `base` to `end`.
    bytes: Vec<u8>,
    /// Absolute offset of `bytes[0]`.
    base: usize,
    /// The producer signalled end of input; no more bytes will follow.
    complete: bool,
}

impl SourceWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// A window holding all of `source`, already marked complete.
    pub fn complete(source: &[u8]) -> Self {
        SourceWindow {
            bytes: source.to_vec(),
            base: 0,
            complete: true,
        }
    }

    /// Append the next chunk of the stream.
    ///
    /// Chunks pushed after [`close`](Self::close) are ignored; returns
    /// whether the chunk was accepted.
    pub fn push(&mut self, chunk: &[u8]) -> bool {
        if self.complete {
            return false;
        }
        self.bytes.extend_from_slice(chunk);
        true
    }

    /// Signal end of input.
    pub fn close(&mut self) {
        self.complete = true;
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Absolute offset of the first held byte.
    #[inline]
    pub fn base(&self) -> usize {
        self.base
    }

    /// Absolute offset one past the last held byte.
    #[inline]
    pub fn end(&self) -> usize {
        self.base + self.bytes.len()
    }

    /// Drop every held byte before absolute offset `offset`.
    pub fn release_before(&mut self, offset: usize) {
        if offset <= self.base {
            return;
        }
        let n = (offset - self.base).min(self.bytes.len());
        self.bytes.drain(..n);
        self.base += n;
    }

    /// Cursor over the held bytes starting at absolute offset `offset`.
    ///
    /// Cursor positions are relative to `offset`.
    pub fn cursor_at(&self, offset: usize) -> Cursor<'_> {
        debug_assert!(
            offset >= self.base,
            "offset {offset} was already released (base {})",
            self.base
        );
        let rel = offset.saturating_sub(self.base).min(self.bytes.len());
        Cursor::new(&self.bytes[rel..], self.complete)
    }

    /// Held bytes in the absolute range `start..end`.
    pub fn slice(&self, start: usize, end: usize) -> &[u8] {
        debug_assert!(start >= self.base && start <= end && end <= self.end());
        let len = self.bytes.len();
        let lo = start.saturating_sub(self.base).min(len);
        let hi = end.saturating_sub(self.base).clamp(lo, len);
        &self.bytes[lo..hi]
    }
}

#[cfg(test)]
mod tests;
