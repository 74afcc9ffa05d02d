//! Token record and token-type tags.
//!
//! Tags are plain integers. The range `[0, RESERVED_COUNT)` belongs to the
//! engine; grammars number their own tags from [`TokenType::custom`].
//! Tags carry no grammar identity, so unrelated grammars may reuse the
//! same numbers.

use std::fmt;

/// Display names of the reserved tags, indexed by tag value.
pub(crate) const RESERVED_NAMES: [&str; TokenType::RESERVED_COUNT as usize] =
    ["Error", "Ignore", "EndOfFile", "Newline"];

/// Integer tag identifying the kind of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenType(pub u32);

impl TokenType {
    /// Scan failure; the value holds the diagnostic message.
    pub const ERROR: TokenType = TokenType(0);
    /// Emitting this tag discards the pending span.
    pub const IGNORE: TokenType = TokenType(1);
    /// End of input.
    pub const EOF: TokenType = TokenType(2);
    /// Line break, for grammars that tokenize them.
    pub const NEWLINE: TokenType = TokenType(3);

    /// Number of engine-owned tags. Custom tags start here.
    pub const RESERVED_COUNT: u32 = 4;

    /// The `n`th grammar-defined tag.
    #[inline]
    pub const fn custom(n: u32) -> TokenType {
        TokenType(Self::RESERVED_COUNT + n)
    }

    /// Returns `true` for the engine-owned tags.
    #[inline]
    pub const fn is_reserved(self) -> bool {
        self.0 < Self::RESERVED_COUNT
    }

    /// Name of a reserved tag, `None` for custom tags.
    pub fn reserved_name(self) -> Option<&'static str> {
        RESERVED_NAMES.get(self.0 as usize).copied()
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reserved_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// A token produced by a scan.
///
/// `value` is the exact input text `input[start..start + width]`, except for
/// [`TokenType::ERROR`] tokens where it holds the diagnostic and `width`
/// is zero. `line` is the 1-based line on which the token begins.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenType,
    pub value: String,
    pub line: usize,
    /// Byte offset of the first byte.
    pub start: usize,
    /// Width in bytes.
    pub width: usize,
}

impl Token {
    /// Byte offset one past the last byte.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.width
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenType::EOF
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenType::ERROR
    }

    /// End-of-input or error: nothing follows this token.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.is_eof() || self.is_error()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Type({}) {}:{}+{}] <{}>",
            self.kind, self.line, self.start, self.width, self.value
        )
    }
}
