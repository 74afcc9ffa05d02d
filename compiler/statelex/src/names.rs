//! Caller-owned display names for token tags.
//!
//! Names only affect rendering. Each grammar keeps its own table, so two
//! scans with overlapping tag numbers never see each other's names.

use std::borrow::Cow;
use std::fmt;

use crate::token::{Token, TokenType, RESERVED_NAMES};

/// Tag-to-name lookup table used when rendering tokens.
///
/// Index `i` holds the name of `TokenType(i)`. The first
/// [`TokenType::RESERVED_COUNT`] entries are the reserved names; custom
/// names are appended after them by [`register`](Self::register).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenNames {
    entries: Vec<Cow<'static, str>>,
}

impl Default for TokenNames {
    fn default() -> Self {
        Self::reserved()
    }
}

impl TokenNames {
    /// A table holding only the reserved names.
    pub fn reserved() -> Self {
        TokenNames {
            entries: RESERVED_NAMES.iter().map(|&name| Cow::Borrowed(name)).collect(),
        }
    }

    /// Reserved names followed by `names`, the first of which names
    /// `TokenType::custom(0)`.
    pub fn with_custom<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        let mut table = Self::reserved();
        table.register(names);
        table
    }

    /// Append `names` after the reserved names and any names already
    /// registered. Returns the tag the first appended name was given.
    pub fn register<I, S>(&mut self, names: I) -> TokenType
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        let first = self.next_tag();
        self.entries.extend(names.into_iter().map(Into::into));
        first
    }

    /// Replace the name of an existing entry, reserved or custom.
    ///
    /// Returns `false` if `kind` has no entry yet.
    pub fn rename(&mut self, kind: TokenType, name: impl Into<Cow<'static, str>>) -> bool {
        match self.entries.get_mut(kind.0 as usize) {
            Some(slot) => {
                *slot = name.into();
                true
            }
            None => false,
        }
    }

    /// Drop every custom registration and undo any renames, leaving the
    /// reserved baseline.
    pub fn restore(&mut self) {
        *self = Self::reserved();
    }

    /// Name for `kind`, if one is registered.
    pub fn name(&self, kind: TokenType) -> Option<&str> {
        self.entries.get(kind.0 as usize).map(AsRef::as_ref)
    }

    /// Number of custom names registered.
    pub fn custom_count(&self) -> usize {
        self.entries.len() - RESERVED_NAMES.len()
    }

    /// Render `token` using this table.
    pub fn display<'a>(&'a self, token: &'a Token) -> TokenDisplay<'a> {
        TokenDisplay { token, names: self }
    }

    fn next_tag(&self) -> TokenType {
        TokenType(u32::try_from(self.entries.len()).unwrap_or(u32::MAX))
    }
}

/// A [`Token`] rendered with a [`TokenNames`] table.
///
/// Tags without a name fall back to their number.
#[derive(Clone, Copy, Debug)]
pub struct TokenDisplay<'a> {
    token: &'a Token,
    names: &'a TokenNames,
}

impl fmt::Display for TokenDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self.token;
        f.write_str("[Type(")?;
        match self.names.name(token.kind) {
            Some(name) => f.write_str(name)?,
            None => write!(f, "{}", token.kind.0)?,
        }
        write!(
            f,
            ") {}:{}+{}] <{}>",
            token.line, token.start, token.width, token.value
        )
    }
}

#[cfg(test)]
mod tests;
