//! Shell - Command-line interpreter
//!
//! The lab shell behind the terminal page. Features:
//! - Whitespace command parsing
//! - Built-in commands (ls, cd, clear)
//! - Per-lab command gating
//! - Terminal with scrollback and a live prompt

pub mod builtins;
pub mod capability;
pub mod executor;
pub mod parser;
pub mod terminal;

pub use builtins::{execute as execute_builtin, is_builtin, CommandError, Effect, ShellState};
pub use capability::Capability;
pub use executor::{ExecResult, Executor};
pub use parser::{parse, ParsedCommand};
pub use terminal::{Terminal, TerminalLine};
