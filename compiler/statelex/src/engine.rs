//! The state-machine run loop and the consumer-side [`Lexer`] handle.
//!
//! A [`Lexer`] starts one scanning thread at construction. The thread runs
//! the grammar's states until one returns [`Transition::Stop`] or
//! [`Transition::Fail`], sending tokens through a bounded channel. The
//! consumer pulls them with [`Lexer::next_token`].
//!
//! # Termination
//!
//! The engine has no step limit. A grammar whose states never stop or fail
//! keeps the scanning thread alive forever.
//!
//! # Abandoning a scan
//!
//! Dropping the handle (or calling [`Lexer::shutdown`]) drops the receiving
//! end of the channel. A scanner blocked in `emit` wakes up, and the engine
//! stops at the next state boundary. A grammar that loops without ever
//! emitting never notices, and its thread is leaked.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam::channel::Receiver;
use tracing::{debug, debug_span, trace, warn};

use crate::channel::Sink;
use crate::config::LexerConfig;
use crate::error::LexError;
use crate::scanner::Scanner;
use crate::state::{State, Transition};
use crate::token::Token;

/// Run states until the grammar stops, fails, or the consumer is gone.
pub(crate) fn drive(scanner: &mut Scanner, initial: State) {
    let mut state = initial;
    let mut steps: u64 = 0;
    loop {
        if scanner.is_closed() {
            debug!(steps, "consumer gone, abandoning scan");
            return;
        }
        match state.run(scanner) {
            Transition::Continue(next) => {
                steps += 1;
                trace!(steps, pos = scanner.pos(), line = scanner.line(), "transition");
                state = next;
            }
            Transition::Stop => {
                debug!(steps, emitted = scanner.emitted(), "scan finished");
                return;
            }
            Transition::Fail(message) => {
                debug!(steps, %message, line = scanner.line(), "scan failed");
                scanner.emit_error(message);
                return;
            }
        }
    }
}

/// Run a grammar over `input` on the calling thread and collect every
/// token it emits.
///
/// Same engine as [`Lexer`] but without a channel: nothing blocks, and
/// the result includes any tokens emitted after the first EndOfFile.
pub fn tokenize<F>(input: &str, initial: F) -> Vec<Token>
where
    F: FnOnce(&mut Scanner) -> Transition + Send + 'static,
{
    let mut scanner = Scanner::new(Arc::from(input), Sink::buffer());
    drive(&mut scanner, State::new(initial));
    scanner.into_tokens()
}

/// Consumer handle for a scan running on its own thread.
#[derive(Debug)]
pub struct Lexer {
    name: String,
    input: Arc<str>,
    tokens: Receiver<Token>,
    worker: Option<JoinHandle<()>>,
    /// An EndOfFile or Error token has been returned by the iterator.
    finished: bool,
    /// The joined worker ended in a panic.
    panicked: bool,
}

impl Lexer {
    /// Start scanning `input` with `initial` as the first state, using the
    /// default [`LexerConfig`].
    pub fn new<F>(
        name: impl Into<String>,
        input: impl Into<Arc<str>>,
        initial: F,
    ) -> Result<Self, LexError>
    where
        F: FnOnce(&mut Scanner) -> Transition + Send + 'static,
    {
        Self::with_config(name, input, initial, &LexerConfig::default())
    }

    /// Start scanning with an explicit configuration.
    pub fn with_config<F>(
        name: impl Into<String>,
        input: impl Into<Arc<str>>,
        initial: F,
        config: &LexerConfig,
    ) -> Result<Self, LexError>
    where
        F: FnOnce(&mut Scanner) -> Transition + Send + 'static,
    {
        let name = name.into();
        let input = input.into();
        let (sink, tokens) = Sink::channel(config.effective_capacity());

        let span_name = name.clone();
        let scan_input = Arc::clone(&input);
        let worker = thread::Builder::new()
            .name(config.thread_name_for(&name))
            .spawn(move || {
                let _span = debug_span!("scan", lexer = %span_name).entered();
                debug!(bytes = scan_input.len(), "scan started");
                let mut scanner = Scanner::new(scan_input, sink);
                drive(&mut scanner, State::new(initial));
            })
            .map_err(|source| LexError::Spawn {
                name: name.clone(),
                source,
            })?;

        Ok(Lexer {
            name,
            input,
            tokens,
            worker: Some(worker),
            finished: false,
            panicked: false,
        })
    }

    /// Name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The input being scanned.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Receive the next token, blocking until one is available.
    ///
    /// Returns [`LexError::Closed`] once the scan has ended and every token
    /// has been received, or [`LexError::ScannerPanicked`] (on this and
    /// every later call) if a state function panicked.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        match self.tokens.recv() {
            Ok(token) => Ok(token),
            Err(_) => {
                self.join_worker()?;
                Err(LexError::Closed)
            }
        }
    }

    /// Tokens sent but not yet received.
    pub fn pending(&self) -> usize {
        self.tokens.len()
    }

    /// Channel capacity.
    pub fn capacity(&self) -> usize {
        self.tokens.capacity().unwrap_or(usize::MAX)
    }

    /// Stop consuming and wait for the scanning thread to exit.
    ///
    /// The scanner sees the closed channel the next time it emits (or at
    /// once, if it is blocked in `emit`). Waits forever on a grammar that
    /// never emits and never stops.
    pub fn shutdown(self) -> Result<(), LexError> {
        let Lexer {
            name,
            tokens,
            worker,
            panicked,
            ..
        } = self;
        drop(tokens);
        let panicked = match worker {
            Some(worker) => worker.join().is_err(),
            None => panicked,
        };
        if panicked {
            return Err(LexError::ScannerPanicked { name });
        }
        Ok(())
    }

    fn join_worker(&mut self) -> Result<(), LexError> {
        if let Some(worker) = self.worker.take() {
            self.panicked = worker.join().is_err();
        }
        if self.panicked {
            return Err(LexError::ScannerPanicked {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// Yields tokens up to and including the first EndOfFile or Error token.
///
/// A panicking state ends the iteration like a closed stream. The panic is
/// logged, and [`Lexer::next_token`] still reports it afterwards.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = match self.next_token() {
            Ok(token) => Some(token),
            Err(err @ LexError::ScannerPanicked { .. }) => {
                warn!(lexer = %self.name, error = %err, "token stream ended by a panic");
                None
            }
            Err(err) => {
                debug!(lexer = %self.name, error = %err, "token stream ended");
                None
            }
        };
        match &token {
            Some(token) if !token.is_terminal() => {}
            _ => self.finished = true,
        }
        token
    }
}
