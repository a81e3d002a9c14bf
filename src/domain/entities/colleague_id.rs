use std::fmt;
use uuid::Uuid;

/// Identity of a colleague, assigned once at construction.
///
/// Two colleagues sharing a display name are still different colleagues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColleagueId(Uuid);

impl ColleagueId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ColleagueId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ColleagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
