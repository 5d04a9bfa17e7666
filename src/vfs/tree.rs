//! Directory tree
//!
//! Directories keep their entries in insertion order, which is also the
//! order `ls` shows them in. Trees can be seeded from JSON, where objects
//! are directories and strings are files.

use super::{validate_name, LogicalPath, ResolveError, TreeError, ROOT_LABEL};
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;

/// A named child of a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Directory(DirectoryNode),
    /// File content. Never shown by the lab commands, only its kind matters.
    File(String),
}

impl Entry {
    pub fn file(content: impl Into<String>) -> Self {
        Entry::File(content.into())
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Entry::Directory(_))
    }

    pub fn as_dir(&self) -> Option<&DirectoryNode> {
        match self {
            Entry::Directory(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }
}

/// A directory: entry names mapped to entries, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryNode {
    entries: Vec<(String, Entry)>,
}

impl DirectoryNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry at the end of the listing
    pub fn insert(&mut self, name: impl Into<String>, entry: Entry) -> Result<(), TreeError> {
        let name = name.into();
        validate_name(&name)?;
        if self.get(&name).is_some() {
            return Err(TreeError::DuplicateName(name));
        }
        self.entries.push((name, entry));
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert) for a subdirectory
    pub fn with_dir(mut self, name: &str, dir: DirectoryNode) -> Result<Self, TreeError> {
        self.insert(name, Entry::Directory(dir))?;
        Ok(self)
    }

    /// Builder form of [`insert`](Self::insert) for a file
    pub fn with_file(mut self, name: &str, content: &str) -> Result<Self, TreeError> {
        self.insert(name, Entry::file(content))?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, entry)| entry)
    }

    /// Look up a child that is a directory
    pub fn subdir(&self, name: &str) -> Option<&DirectoryNode> {
        self.get(name).and_then(Entry::as_dir)
    }

    /// Entries in display order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The session's directory tree, rooted at [`ROOT_LABEL`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualTree {
    root: DirectoryNode,
}

impl VirtualTree {
    /// Wrap a directory as the content of the root
    pub fn new(root: DirectoryNode) -> Self {
        Self { root }
    }

    /// The tree every lab page starts with
    pub fn lab_default() -> Self {
        let entries = vec![
            ("projects".to_string(), Entry::Directory(DirectoryNode::new())),
            ("documents".to_string(), Entry::Directory(DirectoryNode::new())),
            ("file1.txt".to_string(), Entry::file("This is a sample file.")),
            ("readme.md".to_string(), Entry::file("This is a readme file.")),
            (".gitignore".to_string(), Entry::file("A hidden file.")),
        ];
        Self::new(DirectoryNode { entries })
    }

    /// Parse the content of the root directory from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<DirectoryNode>(json).map(Self::new)
    }

    pub fn root(&self) -> &DirectoryNode {
        &self.root
    }

    /// Walk `path` from the root, one segment at a time
    pub fn resolve(&self, path: &LogicalPath) -> Result<&DirectoryNode, ResolveError> {
        let mut segments = path.segments();
        if segments.next() != Some(ROOT_LABEL) {
            return Err(ResolveError::OutsideRoot(path.to_string()));
        }

        let mut node = &self.root;
        for segment in segments {
            node = node
                .subdir(segment)
                .ok_or_else(|| ResolveError::NotADirectoryOrMissing {
                    path: path.to_string(),
                    segment: segment.to_string(),
                })?;
        }
        Ok(node)
    }
}

impl Default for VirtualTree {
    fn default() -> Self {
        Self::lab_default()
    }
}

// ============ JSON seeding ============

impl<'de> Deserialize<'de> for DirectoryNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DirectoryVisitor)
    }
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EntryVisitor)
    }
}

struct DirectoryVisitor;

impl<'de> Visitor<'de> for DirectoryVisitor {
    type Value = DirectoryNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a directory object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut dir = DirectoryNode::new();
        while let Some((name, entry)) = map.next_entry::<String, Entry>()? {
            dir.insert(name, entry).map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(dir)
    }
}

struct EntryVisitor;

impl<'de> Visitor<'de> for EntryVisitor {
    type Value = Entry;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a directory object or file content string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Entry::file(v))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Entry::File(v))
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        DirectoryVisitor.visit_map(map).map(Entry::Directory)
    }
}
