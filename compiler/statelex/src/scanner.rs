//! The scanner handed to state functions.
//!
//! Wraps a [`Cursor`] and the token sink. Navigation comes from the cursor;
//! emission, ignoring, and errors are added here. Most navigation methods
//! take a list of [`Hook`]s that run after the move, so a grammar can say
//! "consume, then emit" or "consume, then drop" in one call.

use std::sync::Arc;

use tracing::trace;

use crate::channel::Sink;
use crate::chars;
use crate::cursor::Cursor;
use crate::state::Transition;
use crate::token::{Token, TokenType};

/// Side effect run after a navigation primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hook {
    /// Drop the pending span.
    Ignore,
    /// Emit the pending span as a token of this type.
    Emit(TokenType),
}

/// Scanning state: cursor plus the destination of emitted tokens.
///
/// Only reachable from inside a state function.
#[derive(Debug)]
pub struct Scanner {
    cursor: Cursor,
    sink: Sink,
    emitted: usize,
}

impl Scanner {
    pub(crate) fn new(input: Arc<str>, sink: Sink) -> Self {
        Scanner {
            cursor: Cursor::new(input),
            sink,
            emitted: 0,
        }
    }

    /// Read-only view of the cursor.
    #[inline]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    // === Navigation ===

    /// Read one code point. `None` at end of input.
    #[allow(
        clippy::should_implement_trait,
        reason = "reads are undoable; an Iterator would hide backup()"
    )]
    #[inline]
    pub fn next(&mut self) -> Option<char> {
        self.cursor.next()
    }

    /// Read one code point, then run `hooks` unless at end of input.
    pub fn next_with(&mut self, hooks: &[Hook]) -> Option<char> {
        let c = self.cursor.next();
        if c.is_some() {
            self.run_hooks(hooks);
        }
        c
    }

    /// Undo the last read. See [`Cursor::backup`].
    #[inline]
    pub fn backup(&mut self) -> Option<char> {
        self.cursor.backup()
    }

    /// Undo the last read, then run `hooks` if the cursor moved.
    pub fn backup_with(&mut self, hooks: &[Hook]) -> Option<char> {
        let moved = self.cursor.width() != 0;
        let c = self.cursor.backup();
        if moved {
            self.run_hooks(hooks);
        }
        c
    }

    /// Next code point without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Option<char> {
        self.cursor.peek()
    }

    /// Consume one code point from `valid`; `hooks` run only on a match.
    pub fn accept(&mut self, valid: &str, hooks: &[Hook]) -> bool {
        let matched = self.cursor.accept(valid);
        if matched {
            self.run_hooks(hooks);
        }
        matched
    }

    /// Consume a maximal run from `valid`, then run `hooks`.
    pub fn accept_run(&mut self, valid: &str, hooks: &[Hook]) {
        self.cursor.accept_run(valid);
        self.run_hooks(hooks);
    }

    /// Consume a maximal run satisfying `pred`, then run `hooks`.
    pub fn accept_run_while(&mut self, pred: impl Fn(char) -> bool, hooks: &[Hook]) {
        self.cursor.accept_run_while(pred);
        self.run_hooks(hooks);
    }

    /// Consume a run of whitespace and line breaks, then run `hooks`.
    ///
    /// If the run reaches the end of input, an EndOfFile token is emitted
    /// after the hooks.
    pub fn accept_whitespace(&mut self, hooks: &[Hook]) {
        loop {
            match self.cursor.next() {
                None => {
                    self.run_hooks(hooks);
                    self.emit(TokenType::EOF);
                    return;
                }
                Some(c) if chars::is_whitespace(c) => {}
                Some(_) => {
                    self.cursor.backup();
                    self.run_hooks(hooks);
                    return;
                }
            }
        }
    }

    /// Read `n` times (or undo for negative `n`), then run `hooks`.
    pub fn step(&mut self, n: isize, hooks: &[Hook]) {
        self.cursor.step(n);
        self.run_hooks(hooks);
    }

    /// Skip to the next occurrence of `needle`. See [`Cursor::skip_until`].
    pub fn skip_until(&mut self, needle: &str) -> bool {
        self.cursor.skip_until(needle)
    }

    // === Emission ===

    /// Emit the pending span as a token of `kind` and start a new span.
    ///
    /// [`TokenType::IGNORE`] only starts the new span. Blocks while the
    /// token channel is full.
    pub fn emit(&mut self, kind: TokenType) {
        if kind != TokenType::IGNORE {
            let token = self.cursor.pending_token(kind);
            self.deliver(token);
        }
        self.cursor.ignore();
    }

    /// Drop the pending span without emitting.
    #[inline]
    pub fn ignore(&mut self) {
        self.cursor.ignore();
    }

    /// Stop the scan with an error token carrying `message`.
    ///
    /// Nothing is emitted until the engine sees the returned transition,
    /// so the call must be the state's result: `return s.error(..)`.
    /// Dropping it is rejected at compile time:
    ///
    /// ```compile_fail
    /// #![deny(unused_must_use)]
    /// use statelex::{Scanner, Transition};
    ///
    /// pub fn lex_value(s: &mut Scanner) -> Transition {
    ///     s.next();
    ///     s.error("bad input");
    ///     Transition::Stop
    /// }
    /// ```
    #[must_use = "return this from the state function to stop the scan"]
    #[allow(
        clippy::unused_self,
        reason = "called as `return s.error(..)` alongside the other scanner operations"
    )]
    pub fn error(&self, message: impl Into<String>) -> Transition {
        Transition::Fail(message.into())
    }

    // === Queries ===

    /// Input from the current position to the end.
    #[inline]
    pub fn rest(&self) -> &str {
        self.cursor.rest()
    }

    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.cursor.rest().starts_with(prefix)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Something has been read since the last emit or ignore.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.cursor.has_pending()
    }

    /// The text the next emit would produce.
    #[inline]
    pub fn pending(&self) -> &str {
        self.cursor.pending()
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.cursor.start()
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    /// Line of the current position, recomputed from the input.
    pub fn line_number(&self) -> usize {
        self.cursor.line_number()
    }

    /// Tokens delivered so far, excluding ignored spans.
    #[inline]
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    // === Engine ===

    /// The consumer has gone away; nothing emitted from now on is seen.
    pub(crate) fn is_closed(&self) -> bool {
        self.sink.is_closed()
    }

    /// Emit the error token for a failed scan.
    pub(crate) fn emit_error(&mut self, message: String) {
        let token = Token {
            kind: TokenType::ERROR,
            value: message,
            line: self.cursor.line(),
            start: self.cursor.start(),
            width: 0,
        };
        self.deliver(token);
    }

    pub(crate) fn into_tokens(self) -> Vec<Token> {
        self.sink.into_tokens()
    }

    fn deliver(&mut self, token: Token) {
        trace!(
            kind = token.kind.0,
            line = token.line,
            start = token.start,
            width = token.width,
            "emit"
        );
        if self.sink.send(token) {
            self.emitted += 1;
        }
    }

    fn run_hooks(&mut self, hooks: &[Hook]) {
        for hook in hooks {
            match *hook {
                Hook::Ignore => self.ignore(),
                Hook::Emit(kind) => self.emit(kind),
            }
        }
    }
}

#[cfg(test)]
mod tests;
