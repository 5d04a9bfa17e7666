//! Logical paths
//!
//! A logical path is the list of directory names from the root label down
//! to a directory, written `home/projects`. It never has a leading or
//! trailing separator and never holds an empty segment.

use super::{validate_name, ResolveError, TreeError, ROOT_LABEL, SEPARATOR};
use std::fmt;
use std::str::FromStr;

/// Path from the root to a directory. Always holds at least the root label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogicalPath {
    segments: Vec<String>,
}

impl LogicalPath {
    /// The root path, which is also the home directory
    pub fn home() -> Self {
        Self {
            segments: vec![ROOT_LABEL.to_string()],
        }
    }

    /// Parse `home/a/b`. Empty segments are skipped, so `/home//a/` is
    /// accepted and canonicalized.
    pub fn parse(s: &str) -> Result<Self, ResolveError> {
        let segments: Vec<String> = s
            .split(SEPARATOR)
            .filter(|seg| !seg.is_empty())
            .map(String::from)
            .collect();

        match segments.first() {
            Some(first) if first == ROOT_LABEL => Ok(Self { segments }),
            _ => Err(ResolveError::OutsideRoot(s.to_string())),
        }
    }

    /// Segments from the root down
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.as_str())
    }

    /// Number of segments, 1 at home
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_home(&self) -> bool {
        self.segments.len() == 1
    }

    /// Parent directory, or `None` at home
    pub fn parent(&self) -> Option<Self> {
        if self.is_home() {
            return None;
        }
        let mut parent = self.clone();
        parent.segments.pop();
        Some(parent)
    }

    /// Path of a child directory
    pub fn join(&self, name: &str) -> Result<Self, TreeError> {
        validate_name(name)?;
        let mut child = self.clone();
        child.segments.push(name.to_string());
        Ok(child)
    }
}

impl Default for LogicalPath {
    fn default() -> Self {
        Self::home()
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            f.write_str(seg)?;
        }
        Ok(())
    }
}

impl FromStr for LogicalPath {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home() {
        let path = LogicalPath::home();
        assert_eq!(path.to_string(), "home");
        assert_eq!(path.depth(), 1);
        assert!(path.is_home());
    }

    #[test]
    fn test_parse_canonical() {
        let path = LogicalPath::parse("home/projects/site").unwrap();
        assert_eq!(path.depth(), 3);
        assert_eq!(path.to_string(), "home/projects/site");
    }

    #[test]
    fn test_parse_drops_empty_segments() {
        let path: LogicalPath = "/home//projects/".parse().unwrap();
        assert_eq!(path.to_string(), "home/projects");
    }

    #[test]
    fn test_parse_outside_root() {
        assert!(matches!(
            LogicalPath::parse("etc/passwd"),
            Err(ResolveError::OutsideRoot(_))
        ));
        assert!(LogicalPath::parse("").is_err());
    }

    #[test]
    fn test_parent_stops_at_home() {
        let path = LogicalPath::parse("home/projects").unwrap();
        let parent = path.parent().unwrap();
        assert_eq!(parent, LogicalPath::home());
        assert_eq!(parent.parent(), None);
    }

    #[test]
    fn test_join() {
        let path = LogicalPath::home().join("documents").unwrap();
        assert_eq!(path.to_string(), "home/documents");
        assert_eq!(path.parent(), Some(LogicalPath::home()));
    }

    #[test]
    fn test_join_rejects_separator() {
        assert!(LogicalPath::home().join("a/b").is_err());
        assert!(LogicalPath::home().join("").is_err());
    }
}
