use std::fmt;
use std::sync::Arc;

/// Opaque text passed from a sender to its peers.
///
/// Immutable once built; clones share the same buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    text: Arc<str>,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Arc::from(text.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
