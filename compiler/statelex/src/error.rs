//! Errors raised by the [`Lexer`](crate::Lexer) handle.
//!
//! Grammar failures are not errors here: they arrive as
//! [`TokenType::ERROR`](crate::TokenType::ERROR) tokens in the stream.

use thiserror::Error;

/// Failure of the lexer handle itself.
#[derive(Debug, Error)]
pub enum LexError {
    /// The scanning thread could not be started.
    #[error("failed to start scanning thread for lexer `{name}`")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The scan finished and every token has been received, or the handle
    /// was shut down.
    #[error("token stream closed")]
    Closed,

    /// A state function panicked on the scanning thread.
    #[error("scanner for lexer `{name}` panicked")]
    ScannerPanicked { name: String },
}
