//! Naming conventions for different target languages.

/// Language-specific reserved words and how to escape them.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Language identifier (e.g., "erlang")
    pub language: &'static str,
    /// Reserved words, stored lowercase
    pub reserved_words: &'static phf::Set<&'static str>,
    /// Escape a reserved word (e.g., "end" -> "end_" in Erlang)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word, ignoring ASCII case.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words
            .contains(name.to_ascii_lowercase().as_str())
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Iterate the reserved words in no particular order.
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.reserved_words.iter().copied()
    }
}
