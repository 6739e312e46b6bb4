//! Starvation-aware cursor over a partially buffered input.
//!
//! The cursor reads the bytes buffered from the current lexeme start. A
//! read past the end of the buffer returns `None`; when the window is not
//! yet complete that read also marks the cursor *starved*, meaning the
//! answer could change once more bytes arrive. A matcher that finishes on
//! a starved cursor has not decided anything and must be rerun after a
//! refill.
//!
//! Reads past the end of a complete window are plain end of input and do
//! not starve.

/// Returns the earliest (minimum) of two optional positions.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Cursor over the buffered bytes of one lexeme attempt.
///
/// [`Copy`], so alternatives can be probed on a snapshot. Use
/// [`absorb`](Self::absorb) to carry a snapshot's starvation back.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
    complete: bool,
    starved: bool,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8], complete: bool) -> Self {
        Cursor {
            buf,
            pos: 0,
            complete,
            starved: false,
        }
    }

    /// Byte `n` positions ahead of current.
    #[inline]
    pub fn peek_at(&mut self, n: usize) -> Option<u8> {
        let i = self.pos + n;
        if let Some(&b) = self.buf.get(i) {
            Some(b)
        } else {
            if !self.complete {
                self.starved = true;
            }
            None
        }
    }

    #[inline]
    pub fn current(&mut self) -> Option<u8> {
        self.peek_at(0)
    }

    #[inline]
    pub fn peek(&mut self) -> Option<u8> {
        self.peek_at(1)
    }

    /// Whether the byte `n` ahead is `b`.
    #[inline]
    pub fn at(&mut self, n: usize, b: u8) -> bool {
        self.peek_at(n) == Some(b)
    }

    /// Whether the byte `n` ahead satisfies `pred`.
    #[inline]
    pub fn at_if(&mut self, n: usize, pred: impl Fn(u8) -> bool) -> bool {
        self.peek_at(n).is_some_and(pred)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Bytes consumed since the cursor was created.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// A read went past the buffer of an incomplete window.
    #[inline]
    pub fn is_starved(&self) -> bool {
        self.starved
    }

    /// Definite end of input: nothing left and nothing more coming.
    ///
    /// Starves instead when the window is still open.
    pub fn is_eof(&mut self) -> bool {
        self.current().is_none() && self.complete
    }

    /// Merge the starvation of a probe snapshot into `self`.
    #[inline]
    pub fn absorb(&mut self, probe: &Cursor<'_>) {
        self.starved |= probe.starved;
    }

    /// Number of consecutive bytes satisfying `pred`, starting `from` ahead.
    ///
    /// Reading up to the first non-matching byte means the run may starve.
    pub fn run_len(&mut self, from: usize, pred: impl Fn(u8) -> bool) -> usize {
        let mut n = 0;
        while self.at_if(from + n, &pred) {
            n += 1;
        }
        n
    }

    /// Advance while `pred` holds; returns the count.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let n = self.run_len(0, pred);
        self.pos += n;
        n
    }

    /// Advance past `b` if it is current.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if self.at(0, b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Length of `\r*\n` starting `from` ahead, if one is there.
    pub fn newline_len(&mut self, from: usize) -> Option<usize> {
        let cr = self.run_len(from, |b| b == b'\r');
        self.at(from + cr, b'\n').then_some(cr + 1)
    }

    /// Advance over buffered bytes until `stop` holds, never starving.
    ///
    /// Plain runs inside comment and string bodies are committed as far as
    /// the buffer goes: splitting such a run across chunks changes nothing
    /// about what it means.
    pub fn eat_plain_until(&mut self, stop: impl Fn(u8) -> bool) -> usize {
        let rest = &self.buf[self.pos.min(self.buf.len())..];
        let n = rest.iter().position(|&b| stop(b)).unwrap_or(rest.len());
        self.pos += n;
        n
    }

    /// Advance over buffered string body bytes up to the next `"`, `\`,
    /// `\n` or `\r`, never starving.
    pub fn skip_to_string_delim(&mut self) -> usize {
        let rest = &self.buf[self.pos.min(self.buf.len())..];
        let primary = memchr::memchr3(b'"', b'\\', b'\n', rest);
        let cr = memchr::memchr(b'\r', rest);
        let n = earliest_of(primary, cr).unwrap_or(rest.len());
        self.pos += n;
        n
    }

    /// Advance over buffered bytes up to the next of `a`, `b`, `c`, never
    /// starving.
    pub fn skip_to3(&mut self, a: u8, b: u8, c: u8) -> usize {
        let rest = &self.buf[self.pos.min(self.buf.len())..];
        let n = memchr::memchr3(a, b, c, rest).unwrap_or(rest.len());
        self.pos += n;
        n
    }

    /// The buffered bytes from the cursor start to `end`.
    pub fn slice_to(&self, end: usize) -> &'a [u8] {
        &self.buf[..end.min(self.buf.len())]
    }
}

#[cfg(test)]
mod tests;
