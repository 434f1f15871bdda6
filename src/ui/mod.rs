//! Operator-facing output and prompts.

pub mod output;
pub mod prompt;

pub use output::Reporter;
pub use prompt::{LinePrompter, Prompter, ScriptedPrompter, TerminalPrompter, is_affirmative};
