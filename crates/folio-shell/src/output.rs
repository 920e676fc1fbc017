//! Command Output
//!
//! Rendering-agnostic results. The interpreter never produces styled or
//! positioned text; a frontend decides how each variant looks.

use folio_vfs::DirEntry;

use crate::ShellError;

/// Kind of a listed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One item of a directory listing. Frontends may offer it as a shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl ListEntry {
    /// Name as shown by `ls`: directories get a trailing `/`
    pub fn label(&self) -> String {
        match self.kind {
            EntryKind::Directory => format!("{}/", self.name),
            EntryKind::File => self.name.clone(),
        }
    }
}

impl From<DirEntry> for ListEntry {
    fn from(entry: DirEntry) -> Self {
        Self {
            name: String::from(entry.name),
            kind: if entry.is_dir {
                EntryKind::Directory
            } else {
                EntryKind::File
            },
        }
    }
}

/// Result of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Nothing to show below the echoed prompt
    Empty,
    /// Plain text, lines separated by `\n`
    Text(String),
    /// Directory listing
    List(Vec<ListEntry>),
    /// Failure message
    Error(String),
}

impl Output {
    pub fn text(text: impl Into<String>) -> Self {
        Output::Text(text.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Output::Error(_))
    }

    /// Plain-text lines, for frontends without richer rendering
    pub fn lines(&self) -> Vec<String> {
        match self {
            Output::Empty => Vec::new(),
            Output::Text(text) | Output::Error(text) => text.lines().map(String::from).collect(),
            Output::List(entries) => {
                let labels: Vec<String> = entries.iter().map(ListEntry::label).collect();
                vec![labels.join("  ")]
            }
        }
    }
}

impl From<ShellError> for Output {
    fn from(err: ShellError) -> Self {
        Output::Error(err.to_string())
    }
}

/// One entry of the output log: the echoed prompt plus what the command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Prompt and command as typed, e.g. `~/life$ cat now`
    pub echo: String,
    pub output: Output,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_labels() {
        let dir = ListEntry::from(DirEntry { name: "life", is_dir: true });
        let file = ListEntry::from(DirEntry { name: "find_my", is_dir: false });
        assert_eq!(dir.label(), "life/");
        assert_eq!(file.label(), "find_my");
        assert_eq!(Output::List(vec![dir, file]).lines(), ["life/  find_my"]);
    }

    #[test]
    fn test_error_from_shell_error() {
        let output = Output::from(ShellError::NoSuchFile(String::from("x")));
        assert!(output.is_error());
        assert_eq!(output.lines(), ["cat: x: No such file"]);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(Output::Empty.lines().is_empty());
        assert!(Output::text("").lines().is_empty());
    }
}
