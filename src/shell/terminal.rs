//! Terminal - Text-based interface for the shell
//!
//! Provides:
//! - Scrolling text buffer for output
//! - The live prompt
//! - Connection to the shell executor
//!
//! Platform-neutral: the browser renders through the DOM sink instead, but
//! the CLI and the tests drive a session through this type.

use super::executor::{ExecResult, Executor};
use crate::config::SessionConfig;
use crate::platform::OutputSink;
use std::collections::VecDeque;

/// Maximum lines to keep in scrollback buffer.
/// When exceeded, oldest lines are discarded from the top (FIFO).
const MAX_LINES: usize = 1000;

/// A line in the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub text: String,
    pub is_input: bool, // Was this an echoed command line?
}

impl TerminalLine {
    pub fn output(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_input: false }
    }

    pub fn input(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_input: true }
    }
}

/// Terminal state
pub struct Terminal {
    /// Output buffer (scrollback)
    lines: VecDeque<TerminalLine>,

    /// Shell executor
    executor: Executor,

    /// Prompt string
    prompt: String,
}

impl Terminal {
    pub fn new(config: SessionConfig) -> Self {
        let executor = Executor::from_config(config);
        let prompt = executor.prompt();
        Self {
            lines: VecDeque::with_capacity(64),
            executor,
            prompt,
        }
    }

    /// Print text, one buffer line per text line
    pub fn print(&mut self, text: &str) {
        for line in text.lines() {
            self.lines.push_back(TerminalLine::output(line));
        }
        // Also add if the text was empty (prints blank line)
        if text.is_empty() {
            self.lines.push_back(TerminalLine::output(""));
        }
        self.trim();
    }

    /// Submit a command line
    pub fn submit(&mut self, input: &str) -> ExecResult {
        let result = self.executor.execute_line(input);
        result.render_to(self);

        // Update prompt with cwd
        let prompt = self.executor.prompt();
        self.set_prompt(&prompt);
        result
    }

    fn trim(&mut self) {
        while self.lines.len() > MAX_LINES {
            self.lines.pop_front();
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn lines(&self) -> impl Iterator<Item = &TerminalLine> {
        self.lines.iter()
    }

    /// Get line count
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl OutputSink for Terminal {
    fn emit_line(&mut self, text: &str, styled: bool) {
        if styled {
            let echoed = format!("{} {}", self.prompt, text);
            self.lines.push_back(TerminalLine::input(echoed));
            self.trim();
        } else {
            self.print(text);
        }
    }

    fn clear(&mut self) {
        self.lines.clear();
    }

    fn set_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
    }
}
