//! Comment extraction for Lua-style source.
//!
//! `--text` runs to the end of the line; `--[[text]]` may span lines.
//! Everything else is skipped as code.

use statelex::{chars, Hook, LexError, Lexer, Scanner, Token, TokenType, Transition};
use thiserror::Error;
use tracing::debug;

pub const COMMENT: TokenType = TokenType::custom(0);

const LINE_MARKER: &str = "--";
const BLOCK_OPEN: &str = "[[";
const BLOCK_CLOSE: &str = "]]";

#[derive(Debug, Error)]
pub enum CommentError {
    #[error("no comment ends on line {row}")]
    NoMatch { row: usize },

    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error(transparent)]
    Lex(#[from] LexError),
}

/// One comment, without its markers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub value: String,
    /// Line of the opening marker.
    pub line: usize,
    /// Last line the comment text touches.
    pub end_line: usize,
}

impl Comment {
    fn from_token(token: Token) -> Self {
        let end_line = token.line + token.value.matches('\n').count();
        Comment {
            value: token.value,
            line: token.line,
            end_line,
        }
    }
}

/// Comments in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Comments(Vec<Comment>);

impl Comments {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Comment> {
        self.0.iter()
    }

    /// The comment block ending on `row`.
    ///
    /// Starts from the comment whose last line is `row` and extends upward
    /// through comments on directly preceding lines. Their values are
    /// joined top to bottom with newlines.
    pub fn get(&self, row: usize) -> Result<Comment, CommentError> {
        let last = self
            .0
            .iter()
            .rposition(|c| c.end_line == row)
            .ok_or(CommentError::NoMatch { row })?;

        let mut first = last;
        while first > 0 && self.0[first - 1].end_line + 1 == self.0[first].line {
            first -= 1;
        }

        let block = &self.0[first..=last];
        let value = block
            .iter()
            .map(|c| c.value.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Ok(Comment {
            value,
            line: block[0].line,
            end_line: row,
        })
    }
}

impl FromIterator<Comment> for Comments {
    fn from_iter<I: IntoIterator<Item = Comment>>(iter: I) -> Self {
        Comments(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Comments {
    type Item = &'a Comment;
    type IntoIter = std::slice::Iter<'a, Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Comments {
    type Item = Comment;
    type IntoIter = std::vec::IntoIter<Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Collect every comment in `source`, scanning on a worker thread.
pub fn extract(source: &str) -> Result<Comments, CommentError> {
    let mut lexer = Lexer::new("comments", source, lex_begin)?;
    let mut comments = Vec::new();
    loop {
        let token = lexer.next_token()?;
        match token.kind {
            COMMENT => comments.push(Comment::from_token(token)),
            TokenType::EOF => break,
            TokenType::ERROR => {
                return Err(CommentError::Syntax {
                    line: token.line,
                    message: token.value,
                });
            }
            _ => {}
        }
    }
    debug!(count = comments.len(), "extracted comments");
    Ok(Comments(comments))
}

/// Scan `source` on the calling thread.
pub fn tokenize(source: &str) -> Vec<Token> {
    statelex::tokenize(source, lex_begin)
}

/// Entry state: skip layout, then decide between comment and code.
pub fn lex_begin(s: &mut Scanner) -> Transition {
    s.accept_whitespace(&[Hook::Ignore]);
    if s.is_eof() {
        return Transition::Stop;
    }
    if s.starts_with(LINE_MARKER) {
        Transition::to(lex_comment)
    } else {
        Transition::to(lex_code)
    }
}

fn lex_comment(s: &mut Scanner) -> Transition {
    s.step(2, &[Hook::Ignore]);
    if s.starts_with(BLOCK_OPEN) {
        return Transition::to(lex_block_comment);
    }
    s.accept_run_while(|c| !chars::is_end_of_line(c), &[Hook::Emit(COMMENT)]);
    Transition::to(lex_begin)
}

fn lex_block_comment(s: &mut Scanner) -> Transition {
    s.step(2, &[Hook::Ignore]);
    if !s.skip_until(BLOCK_CLOSE) {
        return s.error("unterminated block comment");
    }
    s.emit(COMMENT);
    s.step(2, &[Hook::Ignore]);
    Transition::to(lex_begin)
}

fn lex_code(s: &mut Scanner) -> Transition {
    let found = s.skip_until(LINE_MARKER);
    s.ignore();
    if found {
        return Transition::to(lex_comment);
    }
    s.emit(TokenType::EOF);
    Transition::Stop
}
