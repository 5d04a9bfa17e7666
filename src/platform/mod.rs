//! Platform Abstraction Layer
//!
//! The shell never touches a rendering surface. It hands lines to an
//! [`OutputSink`], which the host implements:
//!
//! - Browser (via wasm-bindgen, web-sys): DOM lines in the lab page
//! - Native CLI: stdout
//! - Tests and the platform-neutral [`Terminal`](crate::shell::Terminal):
//!   an in-memory scrollback buffer

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Result type for platform operations
pub type PlatformResult<T> = Result<T, PlatformError>;

/// Platform-specific errors
#[derive(Debug, Clone)]
pub enum PlatformError {
    /// A DOM call failed
    Dom(String),
    /// Initialization failed
    InitFailed(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformError::Dom(s) => write!(f, "DOM error: {}", s),
            PlatformError::InitFailed(s) => write!(f, "Init failed: {}", s),
        }
    }
}

impl std::error::Error for PlatformError {}

/// Where terminal output goes
pub trait OutputSink {
    /// Emit one block of text. `styled` marks a command echo; the sink
    /// prefixes it with its current prompt and may style it differently.
    /// Plain blocks may span several lines.
    fn emit_line(&mut self, text: &str, styled: bool);

    /// Discard everything rendered so far
    fn clear(&mut self);

    /// The prompt changed (called after every command)
    fn set_prompt(&mut self, _prompt: &str) {}
}
