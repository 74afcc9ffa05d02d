//! Token hand-off from the scanner to the consumer.
//!
//! A threaded scan sends into a bounded `crossbeam` channel: `emit` blocks
//! while the channel is full and the consumer's receive blocks while it is
//! empty. Tokens arrive in emission order.
//!
//! An inline scan (see [`tokenize`](crate::tokenize)) has no consumer
//! running alongside it, so it collects into a plain buffer instead.

use crossbeam::channel::{self, Receiver, Sender};
use tracing::debug;

use crate::token::Token;

/// Where emitted tokens go.
#[derive(Debug)]
pub(crate) enum Sink {
    Channel {
        tx: Sender<Token>,
        /// Set once the receiving side is gone; later sends are dropped.
        closed: bool,
    },
    Buffer(Vec<Token>),
}

impl Sink {
    /// Bounded channel holding at most `capacity` undelivered tokens.
    pub(crate) fn channel(capacity: usize) -> (Sink, Receiver<Token>) {
        let (tx, rx) = channel::bounded(capacity);
        (Sink::Channel { tx, closed: false }, rx)
    }

    pub(crate) fn buffer() -> Sink {
        Sink::Buffer(Vec::new())
    }

    /// Deliver `token`, blocking while a channel is full.
    ///
    /// Returns `false` if the consumer has gone away.
    pub(crate) fn send(&mut self, token: Token) -> bool {
        match self {
            Sink::Channel { tx, closed } => {
                if *closed {
                    return false;
                }
                if tx.send(token).is_err() {
                    debug!("token receiver dropped; discarding further tokens");
                    *closed = true;
                    return false;
                }
                true
            }
            Sink::Buffer(tokens) => {
                tokens.push(token);
                true
            }
        }
    }

    pub(crate) fn is_closed(&self) -> bool {
        matches!(self, Sink::Channel { closed: true, .. })
    }

    /// Tokens collected by a buffer sink; empty for a channel.
    pub(crate) fn into_tokens(self) -> Vec<Token> {
        match self {
            Sink::Buffer(tokens) => tokens,
            Sink::Channel { .. } => Vec::new(),
        }
    }
}
