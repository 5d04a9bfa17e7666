//! Lab capabilities
//!
//! Each lab page enables a different subset of commands. The page passes a
//! token (`lab1`, `lab2`, ...) once at startup and it never changes.

use std::fmt;

/// Which lab the session belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Capability {
    /// No lab token was supplied
    #[default]
    None,
    /// First lab: listing only
    Lab1,
    /// Second lab: listing and navigation
    Lab2,
    /// Any other token. Enables nothing beyond the always-on commands.
    Other(String),
}

impl Capability {
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            None => Capability::None,
            Some("lab1") => Capability::Lab1,
            Some("lab2") => Capability::Lab2,
            Some(other) => Capability::Other(other.to_string()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Capability::None => None,
            Capability::Lab1 => Some("lab1"),
            Capability::Lab2 => Some("lab2"),
            Capability::Other(token) => Some(token.as_str()),
        }
    }

    /// Whether a known command may run under this capability
    pub fn permits(&self, verb: &str) -> bool {
        match verb {
            "ls" => matches!(self, Capability::Lab1 | Capability::Lab2),
            "cd" => matches!(self, Capability::Lab2),
            _ => true,
        }
    }
}

impl From<Option<String>> for Capability {
    fn from(token: Option<String>) -> Self {
        Self::from_token(token.as_deref())
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token().unwrap_or("none"))
    }
}
