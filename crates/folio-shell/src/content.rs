//! Content Table
//!
//! Text behind the files of the virtual tree. File nodes only carry a key;
//! `cat` resolves the key here.

use folio_vfs::{Filesystem, VPath};

use crate::ShellError;
use crate::config::{FIND_MY, LIFE_DIR};

/// A readable file: a heading, body lines and an optional closing line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document {
    pub heading: &'static str,
    pub lines: &'static [&'static str],
    pub footer: Option<&'static str>,
}

impl Document {
    /// Plain text with one body line per row
    pub fn render(&self) -> String {
        let mut out = String::from(self.heading);
        for line in self.lines {
            out.push('\n');
            out.push_str(line);
        }
        if let Some(footer) = self.footer {
            out.push_str("\n\n");
            out.push_str(footer);
        }
        out
    }
}

static FIND_MY_DOC: Document = Document {
    heading: "ways to reach me:",
    lines: &[
        "→ github.com/bshaurya",
        "→ linkedin.com/in/sbisht314",
        "→ bishtshaurya314@gmail.com",
    ],
    footer: Some("always down to chat about anything interesting!"),
};

static LIFE_DOCS: [(&str, Document); 5] = [
    (
        "about",
        Document {
            heading: "who i am:",
            lines: &[
                "born and raised in northern virginia, currently a student at tjhsst \
                 exploring math and computation while figuring out how to make \
                 meaningful positive impact.",
            ],
            footer: None,
        },
    ),
    (
        "hobbies",
        Document {
            heading: "things i love doing:",
            lines: &[
                "  • building at hackathons",
                "  • playing and watching cricket",
                "  • cooking, eating, and discovering new foods",
            ],
            footer: None,
        },
    ),
    (
        "past",
        Document {
            heading: "things i've done:",
            lines: &[
                "  • competed in chess for 9 years, reaching (inter)national youth levels",
                "  • built pieces of software that attracted investment and recognition",
                "  • created a low-cost emg glove with friends to help people with hand \
                 motor impairments, inspired to help a friend",
                "  • researched computational approaches to human flourishing alongside \
                 industry professionals",
            ],
            footer: None,
        },
    ),
    (
        "now",
        Document {
            heading: "things i do:",
            lines: &[
                "  • co-directing hacktj - the world's largest high school hackathon with \
                 ~500 students",
                "  • junior captain of tj's computer team",
                "  • researching in computational approaches to sleep and human flourishing",
                "  • shipping software projects",
                "  • observing and understanding the fast-moving tech era, startup \
                 ecosystem, and learning from founders",
            ],
            footer: None,
        },
    ),
    (
        "future",
        Document {
            heading: "things i want to do",
            lines: &[
                "  • answer \"how can humans sleep optimally?\"",
                "  • watch more sunsets and sunrises",
                "  • understand what matters to people and why",
            ],
            footer: None,
        },
    ),
];

/// Document stored under a content key
pub fn document(key: &str) -> Option<&'static Document> {
    if key == FIND_MY {
        return Some(&FIND_MY_DOC);
    }
    LIFE_DOCS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, doc)| doc)
}

/// Resolve `name` for `cat` from the directory `cwd`.
///
/// `find_my` resolves from anywhere. Everything else must be a file of the
/// `life` section and the session must be inside `~/life`.
pub fn lookup(fs: &Filesystem, cwd: &VPath, name: &str) -> Result<&'static Document, ShellError> {
    let not_found = || ShellError::NoSuchFile(String::from(name));

    if name == FIND_MY {
        return Ok(&FIND_MY_DOC);
    }
    if cwd.depth() != 1 || cwd.name() != LIFE_DIR {
        return Err(not_found());
    }
    let key = fs.resolve_file(cwd, name).map_err(|_| not_found())?;
    document(key).ok_or_else(not_found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn life() -> VPath {
        VPath::root().join(LIFE_DIR)
    }

    #[test]
    fn test_find_my_from_anywhere() {
        let fs = Filesystem::portfolio();
        let from_root = lookup(fs, &VPath::root(), "find_my").unwrap();
        let from_life = lookup(fs, &life(), "find_my").unwrap();
        assert_eq!(from_root, from_life);
        assert!(from_root.render().starts_with("ways to reach me:"));
    }

    #[test]
    fn test_life_files_need_life_dir() {
        let fs = Filesystem::portfolio();
        assert!(lookup(fs, &life(), "hobbies").is_ok());
        assert_eq!(
            lookup(fs, &VPath::root(), "hobbies"),
            Err(ShellError::NoSuchFile(String::from("hobbies")))
        );
    }

    #[test]
    fn test_unknown_file() {
        let fs = Filesystem::portfolio();
        assert!(lookup(fs, &life(), "secrets").is_err());
        assert!(lookup(fs, &VPath::root(), "life").is_err());
    }

    #[test]
    fn test_every_life_file_has_content() {
        let fs = Filesystem::portfolio();
        for entry in fs.read_dir(&life()).unwrap() {
            assert!(document(entry.name).is_some(), "{} has no content", entry.name);
        }
    }

    #[test]
    fn test_render_layout() {
        let text = document("future").unwrap().render();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "things i want to do");
        assert_eq!(lines.len(), 4);
        let text = FIND_MY_DOC.render();
        assert!(text.ends_with("\n\nalways down to chat about anything interesting!"));
    }
}
