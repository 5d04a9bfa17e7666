//! Virtual File System
//!
//! A static directory tree for the lab terminal. The tree is seeded once
//! when the session starts and never changes afterwards: commands only
//! navigate it and list it.
//!
//! Design: an ordered tree of tagged entries, addressed by logical paths
//! that always start at the fixed root label.

pub mod path;
pub mod tree;

pub use path::LogicalPath;
pub use tree::{DirectoryNode, Entry, VirtualTree};

/// Label of the root directory. The root doubles as the home directory.
pub const ROOT_LABEL: &str = "home";

/// Separator between logical path segments
pub const SEPARATOR: char = '/';

/// Names starting with this marker are hidden from a plain `ls`
pub const HIDDEN_MARKER: char = '.';

/// Error resolving a logical path against the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A segment is absent, or names a file where a directory was needed
    NotADirectoryOrMissing { path: String, segment: String },
    /// The path does not start at the root label
    OutsideRoot(String),
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotADirectoryOrMissing { path, segment } => {
                write!(f, "{}: {}: Not a directory or missing", path, segment)
            }
            Self::OutsideRoot(path) => write!(f, "{}: outside of {}", path, ROOT_LABEL),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Error building a directory tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Entry name is empty or contains the separator
    InvalidName(String),
    /// Entry name already present in the directory
    DuplicateName(String),
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "invalid entry name: {:?}", name),
            Self::DuplicateName(name) => write!(f, "duplicate entry name: {}", name),
        }
    }
}

impl std::error::Error for TreeError {}

/// Check that a name can be stored as a single directory entry
pub fn validate_name(name: &str) -> Result<(), TreeError> {
    if name.is_empty() || name.contains(SEPARATOR) {
        Err(TreeError::InvalidName(name.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("projects").is_ok());
        assert!(validate_name(".gitignore").is_ok());
        assert_eq!(validate_name(""), Err(TreeError::InvalidName(String::new())));
        assert!(matches!(validate_name("a/b"), Err(TreeError::InvalidName(_))));
    }

    #[test]
    fn test_resolve_error_display() {
        let err = ResolveError::NotADirectoryOrMissing {
            path: "home/nope".into(),
            segment: "nope".into(),
        };
        assert_eq!(err.to_string(), "home/nope: nope: Not a directory or missing");
    }
}
