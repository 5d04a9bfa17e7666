//! Built-in shell commands
//!
//! The lab shell knows three commands: `ls`, `cd` and `clear`. Handlers
//! never touch shell state directly. They return an [`Effect`] and the
//! executor applies it, so a failed command cannot leave the session in a
//! broken state.

use crate::platform::OutputSink;
use crate::vfs::{DirectoryNode, Entry, LogicalPath, ResolveError, VirtualTree, HIDDEN_MARKER};

/// `cd` argument that goes back home
const HOME_MARKER: &str = "~";
/// `cd` argument that goes up one level
const PARENT_MARKER: &str = "..";

// Placeholder columns for `ls -l`
const DIR_MODE: &str = "drwxr-xr-x";
const FILE_MODE: &str = "-rw-r--r--";
const LINK_COUNT: u32 = 1;
const OWNER: &str = "user";
const GROUP: &str = "staff";
const SIZE: u64 = 4096;
const DATE: &str = "Jan 1 00:00";

/// What running a command line does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Echo of the submitted line, with the prompt that was live at the time
    Echo { prompt: String, line: String },
    /// Text output, possibly several lines
    Output(String),
    /// Request to change directory. Shown as a blank line.
    Cd(LogicalPath),
    /// Request to clear the screen
    Clear,
    /// Command failed; the message is shown as plain output
    Error(CommandError),
}

impl Effect {
    /// Send this effect to a sink
    pub fn render<S: OutputSink + ?Sized>(&self, sink: &mut S) {
        match self {
            Effect::Echo { prompt, line } => {
                sink.set_prompt(prompt);
                sink.emit_line(line, true);
            }
            Effect::Output(text) => sink.emit_line(text, false),
            Effect::Cd(_) => sink.emit_line("", false),
            Effect::Clear => sink.clear(),
            Effect::Error(err) => sink.emit_line(&err.to_string(), false),
        }
    }
}

/// A command failure, displayed exactly as the user sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command, or one the lab has not enabled yet
    NotFound(String),
    /// `cd` target is missing or is not a directory
    NoSuchDirectory(String),
    /// The working directory no longer resolves
    Resolve { verb: String, source: ResolveError },
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(verb) => write!(f, "{}: command not found", verb),
            Self::NoSuchDirectory(target) => {
                write!(f, "cd: {}: No such file or directory", target)
            }
            Self::Resolve { verb, source } => write!(f, "{}: {}", verb, source),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resolve { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Shell state accessible to built-in commands
#[derive(Debug, Clone, Default)]
pub struct ShellState {
    /// The session's directory tree
    pub tree: VirtualTree,
    /// Current working directory
    pub cwd: LogicalPath,
}

impl ShellState {
    pub fn new(tree: VirtualTree) -> Self {
        Self {
            tree,
            cwd: LogicalPath::home(),
        }
    }

    /// Prompt shown before input and on echoed lines
    pub fn prompt(&self) -> String {
        format!("user@devops-lab:~/{}$", self.cwd)
    }

    /// Directory node for the current working directory
    pub fn cwd_node(&self) -> Result<&DirectoryNode, ResolveError> {
        self.tree.resolve(&self.cwd)
    }
}

/// Check if a command name is a built-in
pub fn is_builtin(name: &str) -> bool {
    matches!(name, "ls" | "cd" | "clear")
}

/// Execute a built-in command
pub fn execute(name: &str, args: &[String], state: &ShellState) -> Effect {
    match name {
        "ls" => builtin_ls(args, state),
        "cd" => builtin_cd(args, state),
        "clear" => Effect::Clear,
        _ => Effect::Error(CommandError::NotFound(name.to_string())),
    }
}

/// ls - list the working directory
fn builtin_ls(args: &[String], state: &ShellState) -> Effect {
    // Flags are whole tokens: `-la` is recognized, `-a -l` is too, `-lah` is not.
    let has = |flags: &[&str]| args.iter().any(|a| flags.contains(&a.as_str()));
    let show_all = has(&["-a", "-la", "-al"]);
    let long = has(&["-l", "-la", "-al"]);

    let dir = match state.cwd_node() {
        Ok(dir) => dir,
        Err(source) => {
            return Effect::Error(CommandError::Resolve {
                verb: "ls".into(),
                source,
            })
        }
    };

    let visible = dir
        .entries()
        .filter(|(name, _)| show_all || !name.starts_with(HIDDEN_MARKER));

    let output = if long {
        visible
            .map(|(name, entry)| long_line(name, entry))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        visible.map(|(name, _)| name).collect::<Vec<_>>().join("  ")
    };

    Effect::Output(output)
}

/// One `ls -l` line
fn long_line(name: &str, entry: &Entry) -> String {
    let mode = match entry {
        Entry::Directory(_) => DIR_MODE,
        Entry::File(_) => FILE_MODE,
    };
    format!(
        "{} {} {} {} {} {} {}",
        mode, LINK_COUNT, OWNER, GROUP, SIZE, DATE, name
    )
}

/// cd - change directory
fn builtin_cd(args: &[String], state: &ShellState) -> Effect {
    let target = match args.first().map(|s| s.as_str()) {
        None | Some(HOME_MARKER) => return Effect::Cd(LogicalPath::home()),
        Some(PARENT_MARKER) => {
            // Going above home is a silent no-op
            return match state.cwd.parent() {
                Some(parent) => Effect::Cd(parent),
                None => Effect::Output(String::new()),
            };
        }
        Some(target) => target,
    };

    let dir = match state.cwd_node() {
        Ok(dir) => dir,
        Err(source) => {
            return Effect::Error(CommandError::Resolve {
                verb: "cd".into(),
                source,
            })
        }
    };

    match dir.get(target) {
        Some(Entry::Directory(_)) => match state.cwd.join(target) {
            Ok(path) => Effect::Cd(path),
            Err(_) => Effect::Error(CommandError::NoSuchDirectory(target.to_string())),
        },
        Some(Entry::File(_)) | None => {
            Effect::Error(CommandError::NoSuchDirectory(target.to_string()))
        }
    }
}
