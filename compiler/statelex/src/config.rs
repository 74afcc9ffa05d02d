//! Lexer configuration.

/// Default token channel capacity.
///
/// Small on purpose: the scanner runs at most this many tokens ahead of the
/// consumer before `emit` blocks.
pub const DEFAULT_CAPACITY: usize = 3;

/// Configuration for a threaded [`Lexer`](crate::Lexer).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LexerConfig {
    /// Number of tokens the channel buffers before `emit` blocks.
    /// Values below 1 are treated as 1.
    pub capacity: usize,
    /// Name of the scanning thread. Defaults to `statelex:<lexer name>`.
    pub thread_name: Option<String>,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            capacity: DEFAULT_CAPACITY,
            thread_name: None,
        }
    }
}

impl LexerConfig {
    /// Default config with the given channel capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        LexerConfig {
            capacity,
            ..Default::default()
        }
    }

    /// Set the scanning thread's name.
    #[must_use]
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = Some(name.into());
        self
    }

    /// Capacity actually used for the channel.
    pub(crate) fn effective_capacity(&self) -> usize {
        self.capacity.max(1)
    }

    pub(crate) fn thread_name_for(&self, lexer_name: &str) -> String {
        self.thread_name
            .clone()
            .unwrap_or_else(|| format!("statelex:{lexer_name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LexerConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.thread_name_for("ini"), "statelex:ini");
    }

    #[test]
    fn zero_capacity_is_clamped() {
        assert_eq!(LexerConfig::with_capacity(0).effective_capacity(), 1);
        assert_eq!(LexerConfig::with_capacity(8).effective_capacity(), 8);
    }

    #[test]
    fn explicit_thread_name() {
        let config = LexerConfig::default().thread_name("worker");
        assert_eq!(config.thread_name_for("ini"), "worker");
    }
}
