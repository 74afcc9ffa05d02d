//! State-function lexing engine.
//!
//! A tokenizer is defined by two things: a set of [`TokenType`] tags and a
//! graph of state functions. The engine owns cursor movement, UTF-8
//! decoding, line tracking, one-step backup, and token emission; the
//! grammar only decides what the characters mean.
//!
//! # Architecture
//!
//! - **cursor** - byte offset, last-read width, and line over the input
//! - **token** - [`Token`] record and [`TokenType`] tags (reserved + custom)
//! - **names** - caller-owned [`TokenNames`] table for rendering tags
//! - **channel** - bounded hand-off queue from scanner to consumer
//! - **scanner** - the [`Scanner`] handed to state functions
//! - **engine** - the run loop, the [`Lexer`] handle, and [`tokenize`]
//!
//! # Usage
//!
//! ```text
//! const WORD: TokenType = TokenType::custom(0);
//!
//! fn lex_words(s: &mut Scanner) -> Transition {
//!     s.accept_whitespace(&[Hook::Ignore]);
//!     if s.is_eof() {
//!         return Transition::Stop;
//!     }
//!     s.accept_run_while(chars::is_alphanumeric, &[Hook::Emit(WORD)]);
//!     if !s.has_pending() && s.peek().is_some() {
//!         return s.error(format!("unexpected character {:?}", s.peek()));
//!     }
//!     Transition::to(lex_words)
//! }
//!
//! let mut lexer = Lexer::new("words", "hello world", lex_words)?;
//! while let Ok(token) = lexer.next_token() {
//!     if token.is_terminal() {
//!         break;
//!     }
//!     println!("{token}");
//! }
//! ```
//!
//! Tokens render as `[Type(<name-or-number>) <line>:<start>+<width>] <value>`.

pub mod chars;
mod channel;
mod config;
mod cursor;
mod engine;
mod error;
mod names;
mod scanner;
mod state;
mod token;
mod trace;

pub use config::{LexerConfig, DEFAULT_CAPACITY};
pub use cursor::Cursor;
pub use engine::{tokenize, Lexer};
pub use error::LexError;
pub use names::{TokenDisplay, TokenNames};
pub use scanner::{Hook, Scanner};
pub use state::{State, Transition};
pub use token::{Token, TokenType};
pub use trace::init_tracing;
