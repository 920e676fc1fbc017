//! Filesystem Commands
//!
//! Commands for moving around the virtual tree: ls, cd, cat, tree

use log::debug;

use super::{Command, CommandContext};
use crate::ShellError;
use crate::content;
use crate::output::{ListEntry, Output};

// ============================================================================
// Ls Command
// ============================================================================

/// Ls command - list the current directory
pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }
    fn description(&self) -> &'static str {
        "list directory contents"
    }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Output, ShellError> {
        let entries = ctx.fs.read_dir(ctx.state.cwd())?;
        Ok(Output::List(entries.into_iter().map(ListEntry::from).collect()))
    }
}

/// Static instance
pub static LS_CMD: LsCommand = LsCommand;

// ============================================================================
// Cd Command
// ============================================================================

/// Cd command - change directory, one level at a time
pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }
    fn description(&self) -> &'static str {
        "change directory"
    }

    fn execute(&self, args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Output, ShellError> {
        let Some(&target) = args.first() else {
            return Err(ShellError::MissingArgument { command: "cd" });
        };

        if target == ".." {
            // Popping the root is a no-op
            let parent = ctx.state.cwd().parent();
            ctx.state.set_cwd(parent);
        } else if ctx.fs.is_directory(ctx.state.cwd(), target) {
            let child = ctx.state.cwd().join(target);
            ctx.state.set_cwd(child);
        } else {
            return Err(ShellError::NoSuchDirectory(String::from(target)));
        }

        debug!("cd: now at {}", ctx.state.cwd());
        Ok(Output::Empty)
    }
}

/// Static instance
pub static CD_CMD: CdCommand = CdCommand;

// ============================================================================
// Cat Command
// ============================================================================

/// Cat command - display file contents
pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }
    fn description(&self) -> &'static str {
        "display file contents"
    }

    fn execute(&self, args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Output, ShellError> {
        let Some(&name) = args.first() else {
            return Err(ShellError::MissingArgument { command: "cat" });
        };
        let doc = content::lookup(ctx.fs, ctx.state.cwd(), name)?;
        Ok(Output::Text(doc.render()))
    }
}

/// Static instance
pub static CAT_CMD: CatCommand = CatCommand;

// ============================================================================
// Tree Command
// ============================================================================

/// Fixed diagram; not derived from the live tree
const TREE: &str = "~
├── life/
│   ├── about
│   ├── hobbies
│   ├── past
│   ├── now
│   └── future
└── find_my";

/// Tree command - show the directory hierarchy
pub struct TreeCommand;

impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }
    fn description(&self) -> &'static str {
        "show directory tree"
    }

    fn execute(&self, _args: &[&str], _ctx: &mut CommandContext<'_>) -> Result<Output, ShellError> {
        Ok(Output::text(TREE))
    }
}

/// Static instance
pub static TREE_CMD: TreeCommand = TreeCommand;
