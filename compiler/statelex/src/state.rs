//! State functions and transitions.
//!
//! A grammar is a graph of states. Each state reads from the [`Scanner`],
//! may emit tokens, and returns a [`Transition`] naming what runs next.

use std::fmt;

use crate::scanner::Scanner;
use crate::token::TokenType;

/// One step of a grammar.
///
/// Wraps any `FnOnce(&mut Scanner) -> Transition` that can move to the
/// scanning thread, so both plain `fn` items and capturing closures work.
pub struct State(Box<dyn FnOnce(&mut Scanner) -> Transition + Send>);

impl State {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(&mut Scanner) -> Transition + Send + 'static,
    {
        State(Box::new(f))
    }

    /// A state that consumes exactly `text`, emits it as `kind`, and then
    /// continues with `then`.
    ///
    /// Fails on the first character that does not match.
    pub fn literal(text: impl Into<String>, kind: TokenType, then: State) -> State {
        let text = text.into();
        State::new(move |s| {
            for expected in text.chars() {
                match s.next() {
                    Some(c) if c == expected => {}
                    got => {
                        return s.error(format!("expected {expected:?}, got {got:?}"));
                    }
                }
            }
            s.emit(kind);
            Transition::Continue(then)
        })
    }

    pub(crate) fn run(self, scanner: &mut Scanner) -> Transition {
        (self.0)(scanner)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("State(..)")
    }
}

/// What a state returns.
#[derive(Debug)]
#[must_use = "return the transition from the state function"]
pub enum Transition {
    /// Run this state next.
    Continue(State),
    /// The scan is complete.
    Stop,
    /// The input cannot be accepted. The engine emits one
    /// [`TokenType::ERROR`] token carrying the message and stops.
    Fail(String),
}

impl Transition {
    /// Continue with `f`.
    pub fn to<F>(f: F) -> Self
    where
        F: FnOnce(&mut Scanner) -> Transition + Send + 'static,
    {
        Transition::Continue(State::new(f))
    }
}
