//! Position, width, and line tracking over an immutable input.
//!
//! The cursor reads one code point at a time. Each read remembers the byte
//! width of the code point so that exactly one read can be undone; undo is
//! a single slot, not a stack.
//!
//! # Invariants
//!
//! - `start <= pos <= input.len()`, both on UTF-8 character boundaries.
//! - `width` is the byte width of the last read, or `0` when there is
//!   nothing to undo (after an undo, at end of input, after a bulk skip,
//!   or after the pending span was committed).
//! - `line == 1 + count('\n' in input[..pos])`.

use std::sync::Arc;

use crate::token::{Token, TokenType};

/// Cursor over an input buffer.
///
/// `start` marks the beginning of the pending span, the text that the next
/// emission turns into a token. `pos` is the next byte to read.
#[derive(Clone, Debug)]
pub struct Cursor {
    input: Arc<str>,
    start: usize,
    pos: usize,
    width: usize,
    line: usize,
    /// Line at `start`.
    start_line: usize,
}

impl Cursor {
    /// Cursor at the beginning of `input`, on line 1.
    pub fn new(input: impl Into<Arc<str>>) -> Self {
        Cursor {
            input: input.into(),
            start: 0,
            pos: 0,
            width: 0,
            line: 1,
            start_line: 1,
        }
    }

    /// Byte offset where the pending span begins.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the next code point.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Byte width of the last read, `0` if nothing can be undone.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// 1-based line of `pos`.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based line of `start`.
    #[inline]
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    /// Read the code point at `pos` and step past it.
    ///
    /// Returns `None` at end of input, with `width` cleared.
    #[allow(
        clippy::should_implement_trait,
        reason = "reads are undoable; an Iterator would hide backup()"
    )]
    pub fn next(&mut self) -> Option<char> {
        let Some(c) = self.current() else {
            self.width = 0;
            return None;
        };
        self.width = c.len_utf8();
        self.pos += self.width;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Undo the last [`next`](Self::next) and return the code point now at
    /// `pos`.
    ///
    /// A second call without an intervening read does not move; it only
    /// re-reads the current code point.
    pub fn backup(&mut self) -> Option<char> {
        if self.width == 0 {
            return self.current();
        }
        self.pos -= self.width;
        self.width = 0;
        let c = self.current();
        if c == Some('\n') {
            self.line -= 1;
        }
        c
    }

    /// The next code point, without consuming it.
    ///
    /// Implemented as a read followed by an undo, so it clears `width`.
    pub fn peek(&mut self) -> Option<char> {
        let c = self.next();
        self.backup();
        c
    }

    /// Consume one code point if it is in `valid`.
    pub fn accept(&mut self, valid: &str) -> bool {
        self.accept_if(|c| valid.contains(c))
    }

    /// Consume one code point if `pred` holds for it.
    pub fn accept_if(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.next() {
            Some(c) if pred(c) => true,
            _ => {
                self.backup();
                false
            }
        }
    }

    /// Consume a maximal run of code points from `valid`.
    pub fn accept_run(&mut self, valid: &str) {
        self.accept_run_while(|c| valid.contains(c));
    }

    /// Consume a maximal run of code points satisfying `pred`.
    pub fn accept_run_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.next() {
            if !pred(c) {
                self.backup();
                return;
            }
        }
    }

    /// Read forward `n` times, or undo `-n` times when `n` is negative.
    ///
    /// Since undo is single-slot, any `n < -1` moves back at most one code
    /// point.
    pub fn step(&mut self, n: isize) {
        if n < 0 {
            for _ in 0..n.unsigned_abs() {
                self.backup();
            }
        } else {
            for _ in 0..n.unsigned_abs() {
                self.next();
            }
        }
    }

    /// Skip forward to the next occurrence of `needle`, or to the end of
    /// input if there is none. Returns whether `needle` was found.
    ///
    /// The cursor lands on the first byte of the match. The skip cannot be
    /// undone.
    pub fn skip_until(&mut self, needle: &str) -> bool {
        let rest = &self.input.as_bytes()[self.pos..];
        let (offset, found) = match memchr::memmem::find(rest, needle.as_bytes()) {
            Some(offset) => (offset, true),
            None => (rest.len(), false),
        };
        self.line += memchr::memchr_iter(b'\n', &rest[..offset]).count();
        self.pos += offset;
        self.width = 0;
        found
    }

    /// Input from `pos` to the end.
    #[inline]
    pub fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    /// The pending span, `input[start..pos]`.
    #[inline]
    pub fn pending(&self) -> &str {
        &self.input[self.start..self.pos]
    }

    /// `pos` has moved past `start`.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pos > self.start
    }

    /// `pos` is at the end of the input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Line of `pos`, recomputed by counting newlines.
    pub fn line_number(&self) -> usize {
        1 + memchr::memchr_iter(b'\n', &self.input.as_bytes()[..self.pos]).count()
    }

    /// Package the pending span as a token of `kind`.
    pub(crate) fn pending_token(&self, kind: TokenType) -> Token {
        Token {
            kind,
            value: self.pending().to_owned(),
            line: self.start_line,
            start: self.start,
            width: self.pos - self.start,
        }
    }

    /// Drop the pending span: `start` moves up to `pos`.
    ///
    /// Also clears `width`, since an undo past `start` would break
    /// `start <= pos`.
    pub fn ignore(&mut self) {
        self.start = self.pos;
        self.start_line = self.line;
        self.width = 0;
    }

    #[inline]
    fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }
}
