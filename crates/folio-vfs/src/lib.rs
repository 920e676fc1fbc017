//! Virtual Filesystem (VFS) Layer
//!
//! A static, read-only directory tree used for in-terminal navigation. The
//! tree is built once at startup and never mutated afterwards. Lookups walk
//! from the root (`~`) one segment at a time and fail as soon as a segment
//! is missing or names a file where a directory is needed.
//!
//! File nodes do not hold their text. They carry a content key which the
//! shell resolves against its own content table.

mod path;

pub use path::{ROOT, VPath};

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Filesystem error type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FsError {
    /// File or directory not found
    #[error("Not found")]
    NotFound,
    /// Path is not a directory
    #[error("Not a directory")]
    NotADirectory,
    /// Path is not a file
    #[error("Not a file")]
    NotAFile,
}

// ============================================================================
// File System Node
// ============================================================================

/// Opaque reference into the content table
pub type ContentKey = &'static str;

/// Children of a directory, keyed by name
pub type Children = BTreeMap<&'static str, FsNode>;

/// A node in the filesystem tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsNode {
    /// A directory containing child nodes
    Directory { children: Children },
    /// A file pointing at its content
    File { content: ContentKey },
}

impl FsNode {
    /// Build a directory from `(name, node)` pairs
    pub fn dir<I>(children: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, FsNode)>,
    {
        FsNode::Directory {
            children: children.into_iter().collect(),
        }
    }

    pub fn file(content: ContentKey) -> Self {
        FsNode::File { content }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, FsNode::Directory { .. })
    }
}

// ============================================================================
// Directory Entry
// ============================================================================

/// Directory entry information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirEntry {
    /// Name of the file or directory
    pub name: &'static str,
    /// Whether this is a directory
    pub is_dir: bool,
}

// ============================================================================
// Filesystem
// ============================================================================

/// The biographical tree served by the terminal
static PORTFOLIO: Lazy<Filesystem> = Lazy::new(|| {
    Filesystem::new(FsNode::dir([
        (
            "life",
            FsNode::dir([
                ("about", FsNode::file("about")),
                ("hobbies", FsNode::file("hobbies")),
                ("past", FsNode::file("past")),
                ("now", FsNode::file("now")),
                ("future", FsNode::file("future")),
            ]),
        ),
        ("find_my", FsNode::file("find_my")),
    ]))
});

/// Immutable directory tree rooted at `~`
#[derive(Debug, Clone)]
pub struct Filesystem {
    root: FsNode,
}

impl Filesystem {
    /// Wrap a tree. The root must be a directory for any lookup to succeed.
    pub fn new(root: FsNode) -> Self {
        Self { root }
    }

    /// The tree shipped with the site
    pub fn portfolio() -> &'static Filesystem {
        &PORTFOLIO
    }

    pub fn root(&self) -> &FsNode {
        &self.root
    }

    /// Walk to the node at `path`
    fn navigate(&self, path: &VPath) -> Result<&FsNode, FsError> {
        let mut current = &self.root;
        for component in path.segments() {
            match current {
                FsNode::Directory { children } => {
                    current = children.get(component).ok_or(FsError::NotFound)?;
                }
                FsNode::File { .. } => return Err(FsError::NotADirectory),
            }
        }
        Ok(current)
    }

    /// Children of the directory at `path`
    pub fn resolve_directory(&self, path: &VPath) -> Result<&Children, FsError> {
        match self.navigate(path)? {
            FsNode::Directory { children } => Ok(children),
            FsNode::File { .. } => Err(FsError::NotADirectory),
        }
    }

    /// Content key of the file `name` inside the directory at `path`
    pub fn resolve_file(&self, path: &VPath, name: &str) -> Result<ContentKey, FsError> {
        let children = self.resolve_directory(path)?;
        match children.get(name).ok_or(FsError::NotFound)? {
            FsNode::File { content } => Ok(*content),
            FsNode::Directory { .. } => Err(FsError::NotAFile),
        }
    }

    /// True if `name` is a directory directly under `path`
    pub fn is_directory(&self, path: &VPath, name: &str) -> bool {
        self.resolve_directory(path)
            .ok()
            .and_then(|children| children.get(name))
            .is_some_and(FsNode::is_dir)
    }

    /// List a directory: directories first, then files, each sorted by name
    pub fn read_dir(&self, path: &VPath) -> Result<Vec<DirEntry>, FsError> {
        let children = self.resolve_directory(path)?;
        let mut entries: Vec<DirEntry> = children
            .iter()
            .map(|(name, node)| DirEntry {
                name: *name,
                is_dir: node.is_dir(),
            })
            .collect();
        entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(b.name)));
        Ok(entries)
    }
}
