//! Suspendable computations over a mutable state.
//!
//! A lexing step over a partially buffered input either finishes with a
//! value, fails with an error, or discovers that it cannot decide without
//! more bytes. `Refill` makes the third outcome a first-class value: the
//! computation hands back a [`Resume`] continuation, the driver supplies
//! more input to the state, then resumes.
//!
//! Continuations receive the state by `&mut` when resumed instead of
//! capturing it, so a suspended computation holds no borrows and can be
//! stored or returned freely. All progress that must survive a suspension
//! lives in the state itself.
//!
//! # Laws
//!
//! `Refill::Done(v).and_then(s, f)` behaves as `f(s, v)`;
//! `m.and_then(s, |_, v| Refill::Done(v))` behaves as `m`; `and_then` is
//! associative. `catch` sees failures only, `and_then` sees values only,
//! and both thread themselves through any number of suspensions.

use std::fmt;

/// Continuation of a suspended computation.
pub struct Resume<S, T, E>(Box<dyn FnOnce(&mut S) -> Refill<S, T, E>>);

impl<S, T, E> Resume<S, T, E> {
    /// Continue the computation after more input has been supplied to `state`.
    #[inline]
    pub fn resume(self, state: &mut S) -> Refill<S, T, E> {
        (self.0)(state)
    }
}

impl<S, T, E> fmt::Debug for Resume<S, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Resume(..)")
    }
}

/// Outcome of a step that may need more input.
#[must_use = "a suspended computation does nothing unless resumed"]
pub enum Refill<S, T, E> {
    /// Finished with a value.
    Done(T),
    /// Waiting for more input.
    NeedMore(Resume<S, T, E>),
    /// Finished with an error.
    Failed(E),
}

impl<S: 'static, T: 'static, E: 'static> Refill<S, T, E> {
    /// Suspend; `k` runs when the driver resumes.
    #[inline]
    pub fn suspend(k: impl FnOnce(&mut S) -> Refill<S, T, E> + 'static) -> Self {
        Refill::NeedMore(Resume(Box::new(k)))
    }

    /// Sequence `f` after this computation.
    ///
    /// A finished value is passed to `f` right away; a suspension is
    /// re-wrapped so `f` runs once the inner computation finishes; a
    /// failure short-circuits.
    pub fn and_then<U: 'static>(
        self,
        state: &mut S,
        f: impl FnOnce(&mut S, T) -> Refill<S, U, E> + 'static,
    ) -> Refill<S, U, E> {
        match self {
            Refill::Done(value) => f(state, value),
            Refill::Failed(err) => Refill::Failed(err),
            Refill::NeedMore(k) => Refill::suspend(move |s| k.resume(s).and_then(s, f)),
        }
    }

    /// Handle a failure with `handler`, possibly recovering.
    ///
    /// Suspensions are threaded through, so a failure raised after any
    /// number of refills still reaches the handler.
    pub fn catch(
        self,
        state: &mut S,
        handler: impl FnOnce(&mut S, E) -> Refill<S, T, E> + 'static,
    ) -> Refill<S, T, E> {
        match self {
            Refill::Done(value) => Refill::Done(value),
            Refill::Failed(err) => handler(state, err),
            Refill::NeedMore(k) => Refill::suspend(move |s| k.resume(s).catch(s, handler)),
        }
    }

    /// Transform the finished value.
    pub fn map<U: 'static>(self, f: impl FnOnce(T) -> U + 'static) -> Refill<S, U, E> {
        match self {
            Refill::Done(value) => Refill::Done(f(value)),
            Refill::Failed(err) => Refill::Failed(err),
            Refill::NeedMore(k) => Refill::suspend(move |s| k.resume(s).map(f)),
        }
    }
}

impl<S, T, E> Refill<S, T, E> {
    #[inline]
    pub fn is_suspended(&self) -> bool {
        matches!(self, Refill::NeedMore(_))
    }

    /// Convert a finished computation into a `Result`; `None` while suspended.
    pub fn finished(self) -> Option<Result<T, E>> {
        match self {
            Refill::Done(value) => Some(Ok(value)),
            Refill::Failed(err) => Some(Err(err)),
            Refill::NeedMore(_) => None,
        }
    }

    /// Drive to completion, calling `refill` before every resume.
    ///
    /// `refill` must eventually make progress possible (supply bytes or
    /// signal end of input), otherwise this loops forever.
    pub fn run_with(self, state: &mut S, mut refill: impl FnMut(&mut S)) -> Result<T, E> {
        let mut step = self;
        loop {
            match step {
                Refill::Done(value) => return Ok(value),
                Refill::Failed(err) => return Err(err),
                Refill::NeedMore(k) => {
                    refill(state);
                    step = k.resume(state);
                }
            }
        }
    }
}

impl<S, T: fmt::Debug, E: fmt::Debug> fmt::Debug for Refill<S, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Refill::Done(value) => f.debug_tuple("Done").field(value).finish(),
            Refill::NeedMore(k) => f.debug_tuple("NeedMore").field(k).finish(),
            Refill::Failed(err) => f.debug_tuple("Failed").field(err).finish(),
        }
    }
}
