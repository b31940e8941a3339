use std::fmt;

/// Selection text that means "no constraint"
pub const WILDCARD: &str = "all";

/// The active choice for one field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Any value passes
    #[default]
    All,
    /// Only this exact (case-sensitive) value passes
    Exactly(String),
}

impl Selection {
    /// Interpret selection text, where `"all"` is the wildcard
    pub fn parse(value: &str) -> Self {
        if value == WILDCARD {
            Selection::All
        } else {
            Selection::Exactly(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Does a listing value satisfy this selection?
    ///
    /// An absent value only passes the wildcard.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Exactly(expected) => value == Some(expected.as_str()),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(WILDCARD),
            Selection::Exactly(value) => f.write_str(value),
        }
    }
}
