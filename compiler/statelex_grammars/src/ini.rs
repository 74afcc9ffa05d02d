//! INI-style tokenizer.
//!
//! ```text
//! key=abcdefg
//!
//! [User]
//! userName=otm
//! ```
//!
//! Layout between entries is skipped. A value runs to the end of its line
//! and may be empty. Section names may not span lines.

use std::sync::Arc;

use statelex::{chars, Hook, LexError, Lexer, Scanner, Token, TokenNames, TokenType, Transition};

pub const LEFT_BRACKET: TokenType = TokenType::custom(0);
pub const RIGHT_BRACKET: TokenType = TokenType::custom(1);
pub const EQUALS: TokenType = TokenType::custom(2);
pub const SECTION: TokenType = TokenType::custom(3);
pub const KEY: TokenType = TokenType::custom(4);
pub const VALUE: TokenType = TokenType::custom(5);

/// Display names, in tag order.
pub const NAMES: [&str; 6] = [
    "LeftBracket",
    "RightBracket",
    "Equals",
    "Section",
    "Key",
    "Value",
];

/// Name table for rendering INI tokens.
pub fn names() -> TokenNames {
    TokenNames::with_custom(NAMES)
}

/// Start a threaded scan of `source`.
pub fn lexer(source: impl Into<Arc<str>>) -> Result<Lexer, LexError> {
    Lexer::new("ini", source, lex_start)
}

/// Scan `source` on the calling thread.
pub fn tokenize(source: &str) -> Vec<Token> {
    statelex::tokenize(source, lex_start)
}

/// Entry state: skip layout, then dispatch on the next character.
pub fn lex_start(s: &mut Scanner) -> Transition {
    s.accept_whitespace(&[Hook::Ignore]);
    if s.is_eof() {
        return Transition::Stop;
    }
    match s.peek() {
        Some('[') => Transition::to(lex_left_bracket),
        Some(c) if chars::is_alphanumeric(c) => Transition::to(lex_key),
        Some(c) => {
            s.next();
            s.error(format!("unknown character: {c:?}"))
        }
        None => Transition::Stop,
    }
}

fn lex_left_bracket(s: &mut Scanner) -> Transition {
    s.accept("[", &[Hook::Emit(LEFT_BRACKET)]);
    Transition::to(lex_section)
}

fn lex_section(s: &mut Scanner) -> Transition {
    loop {
        match s.next() {
            None => return s.error("unexpected end of input in section"),
            Some(c) if chars::is_end_of_line(c) => {
                return s.error("section: missing right bracket");
            }
            Some(']') => {
                s.backup();
                s.emit(SECTION);
                return Transition::to(lex_right_bracket);
            }
            Some(_) => {}
        }
    }
}

fn lex_right_bracket(s: &mut Scanner) -> Transition {
    s.accept("]", &[Hook::Emit(RIGHT_BRACKET)]);
    Transition::to(lex_start)
}

fn lex_key(s: &mut Scanner) -> Transition {
    loop {
        match s.next() {
            None => return s.error("unexpected end of input in key"),
            Some('=') => {
                s.backup();
                if !s.has_pending() {
                    return s.error("unexpected equal sign");
                }
                s.emit(KEY);
                return Transition::to(lex_equals);
            }
            Some(c) if chars::is_end_of_line(c) => {
                let key = s.pending().trim_end();
                return s.error(format!("missing equal sign after key {key:?}"));
            }
            Some(_) => {}
        }
    }
}

fn lex_equals(s: &mut Scanner) -> Transition {
    s.accept("=", &[Hook::Emit(EQUALS)]);
    Transition::to(lex_value)
}

fn lex_value(s: &mut Scanner) -> Transition {
    loop {
        match s.next() {
            None => {
                s.emit(VALUE);
                s.emit(TokenType::EOF);
                return Transition::Stop;
            }
            Some(c) if chars::is_end_of_line(c) => {
                s.backup();
                s.emit(VALUE);
                return Transition::to(lex_start);
            }
            Some(_) => {}
        }
    }
}
