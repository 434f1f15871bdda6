use std::{cell::RefCell, collections::HashMap};

use anyhow::{Result, bail};

use super::runner::{GitOutput, GitRunner};

/// In-memory `GitRunner` that records every invocation and replays canned
/// responses. Unknown invocations succeed with empty output.
#[derive(Debug)]
pub struct FakeGit {
    responses: HashMap<String, GitOutput>,
    calls: RefCell<Vec<String>>,
    available: bool,
}

impl Default for FakeGit {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeGit {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: RefCell::new(Vec::new()),
            available: true,
        }
    }

    /// A runner whose binary cannot be spawned.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Reply with `output` when invoked with exactly `args` (space separated).
    #[must_use]
    pub fn respond(mut self, args: &str, output: GitOutput) -> Self {
        self.responses.insert(args.to_string(), output);
        self
    }

    /// Every invocation so far, arguments joined by spaces.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether any invocation started with the given git subcommand.
    pub fn called(&self, subcommand: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|c| c.split(' ').next() == Some(subcommand))
    }
}

impl GitRunner for FakeGit {
    fn run(&self, args: &[&str]) -> Result<GitOutput> {
        if !self.available {
            bail!("git executable not found");
        }
        let key = args.join(" ");
        self.calls.borrow_mut().push(key.clone());
        Ok(self
            .responses
            .get(&key)
            .cloned()
            .unwrap_or_else(|| GitOutput::ok("")))
    }

    fn run_interactive(&self, args: &[&str]) -> Result<()> {
        self.run_checked(args).map(|_| ())
    }
}
