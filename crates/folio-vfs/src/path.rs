//! Virtual Paths
//!
//! A `VPath` is a position in the virtual tree. It always starts at the root
//! `~`; only the segments below the root are stored.

use core::fmt;

/// Name of the root directory
pub const ROOT: &str = "~";

/// Position in the virtual filesystem, rendered as `~` or `~/seg1/seg2`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VPath {
    segments: Vec<String>,
}

impl VPath {
    /// The root path `~`
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments below the root, outermost first
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Number of segments below the root
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Last segment, or `~` at the root
    pub fn name(&self) -> &str {
        self.segments.last().map_or(ROOT, String::as_str)
    }

    /// Path of a child of this directory
    pub fn join(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(String::from(name));
        Self { segments }
    }

    /// Drop the last segment. Returns false (and leaves the path alone) at the root.
    pub fn pop(&mut self) -> bool {
        self.segments.pop().is_some()
    }

    /// Parent directory; the root is its own parent
    pub fn parent(&self) -> Self {
        let mut parent = self.clone();
        parent.pop();
        parent
    }
}

impl fmt::Display for VPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ROOT)?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}
