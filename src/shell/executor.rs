//! Shell command executor
//!
//! Runs one command line to completion:
//! 1. Echoes the line with the prompt that was live when it was typed
//! 2. Parses it into a verb and arguments
//! 3. Checks the verb against the lab capability
//! 4. Runs the built-in and applies its effect to the shell state

use super::builtins::{self, CommandError, Effect, ShellState};
use super::capability::Capability;
use super::parser::{self, ParsedCommand};
use crate::config::SessionConfig;
use crate::platform::OutputSink;

/// Result of executing a command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecResult {
    /// Effects in the order they must be rendered. The echo is always first.
    pub effects: Vec<Effect>,
}

impl ExecResult {
    /// Did the command ask for the screen to be cleared?
    pub fn clears_screen(&self) -> bool {
        self.effects.iter().any(|e| matches!(e, Effect::Clear))
    }

    /// The command's error, if it failed
    pub fn error(&self) -> Option<&CommandError> {
        self.effects.iter().find_map(|e| match e {
            Effect::Error(err) => Some(err),
            _ => None,
        })
    }

    /// Render every effect, in order
    pub fn render_to<S: OutputSink + ?Sized>(&self, sink: &mut S) {
        for effect in &self.effects {
            effect.render(sink);
        }
    }
}

/// The shell executor
#[derive(Debug, Clone, Default)]
pub struct Executor {
    pub state: ShellState,
    capability: Capability,
}

impl Executor {
    /// Executor over the default lab tree
    pub fn new(capability: Capability) -> Self {
        Self {
            state: ShellState::default(),
            capability,
        }
    }

    pub fn with_state(state: ShellState, capability: Capability) -> Self {
        Self { state, capability }
    }

    pub fn from_config(config: SessionConfig) -> Self {
        Self::with_state(ShellState::new(config.tree), config.capability)
    }

    pub fn capability(&self) -> &Capability {
        &self.capability
    }

    /// The live prompt
    pub fn prompt(&self) -> String {
        self.state.prompt()
    }

    /// Execute a command line string
    pub fn execute_line(&mut self, line: &str) -> ExecResult {
        let cmd = parser::parse(line);
        // Blank input echoes as an empty line
        let echoed = if cmd.is_empty() { "" } else { line };
        let mut effects = vec![Effect::Echo {
            prompt: self.state.prompt(),
            line: echoed.to_string(),
        }];

        if cmd.is_empty() {
            return ExecResult { effects };
        }

        #[cfg(all(target_arch = "wasm32", not(test)))]
        crate::console_log!("[exec] Running: {}", line);

        let effect = self.dispatch(&cmd);
        self.apply(&effect);

        #[cfg(all(target_arch = "wasm32", not(test)))]
        if let Effect::Error(e) = &effect {
            crate::console_log!("[exec] Error: {}", e);
        }

        effects.push(effect);
        ExecResult { effects }
    }

    /// Execute a line and render its effects. The sink's prompt is refreshed
    /// afterwards so the next echo carries the new working directory.
    pub fn submit<S: OutputSink + ?Sized>(&mut self, line: &str, sink: &mut S) -> ExecResult {
        let result = self.execute_line(line);
        result.render_to(sink);
        sink.set_prompt(&self.prompt());
        result
    }

    /// Pick the handler for a parsed command.
    ///
    /// Commands the lab has not enabled report the same error as unknown
    /// ones, and never reach their handler.
    pub fn dispatch(&self, cmd: &ParsedCommand) -> Effect {
        if !builtins::is_builtin(&cmd.verb) || !self.capability.permits(&cmd.verb) {
            return Effect::Error(CommandError::NotFound(cmd.verb.clone()));
        }
        builtins::execute(&cmd.verb, &cmd.args, &self.state)
    }

    /// Apply an effect to shell state
    fn apply(&mut self, effect: &Effect) {
        if let Effect::Cd(path) = effect {
            // Only move to paths that resolve
            if self.state.tree.resolve(path).is_ok() {
                self.state.cwd = path.clone();
            } else {
                #[cfg(all(target_arch = "wasm32", not(test)))]
                crate::console_log!("[exec] Refusing cd to unresolvable {}", path);
            }
        }
    }
}
