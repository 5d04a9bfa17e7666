//! Session configuration
//!
//! A session is configured once, when the page (or CLI) starts: which lab
//! it belongs to and which directory tree it explores. Both can come from
//! a JSON document:
//!
//! ```json
//! { "lab": "lab2", "filesystem": { "projects": {}, "notes.txt": "..." } }
//! ```
//!
//! The `filesystem` object is the content of the home directory. Objects are
//! directories, strings are files, and key order is listing order.

use crate::shell::Capability;
use crate::vfs::{DirectoryNode, VirtualTree};
use serde::Deserialize;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Malformed JSON, or a tree with invalid entries
    Json(String),
    /// Config file could not be read
    Io(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Json(s) => write!(f, "invalid config: {}", s),
            ConfigError::Io(s) => write!(f, "cannot read config: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e.to_string())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e.to_string())
    }
}

/// On-disk shape of the config document
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    lab: Option<String>,
    #[serde(default)]
    filesystem: Option<DirectoryNode>,
}

/// Everything a session needs at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub capability: Capability,
    pub tree: VirtualTree,
}

impl SessionConfig {
    /// Default tree with the given capability
    pub fn new(capability: Capability) -> Self {
        Self {
            capability,
            tree: VirtualTree::lab_default(),
        }
    }

    /// Config for a lab token as found on the page
    pub fn from_lab(token: Option<&str>) -> Self {
        Self::new(Capability::from_token(token))
    }

    pub fn with_tree(mut self, tree: VirtualTree) -> Self {
        self.tree = tree;
        self
    }

    /// Parse a JSON config document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        let tree = raw
            .filesystem
            .map(VirtualTree::new)
            .unwrap_or_default();
        Ok(Self {
            capability: Capability::from(raw.lab),
            tree,
        })
    }

    /// Replace the tree with one parsed from a JSON filesystem object
    pub fn with_tree_json(self, json: &str) -> Result<Self, ConfigError> {
        let tree = VirtualTree::from_json(json)?;
        Ok(self.with_tree(tree))
    }
}
