use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::{
    config::RepoConfig,
    core::git::GitRunner,
    ui::{Prompter, Reporter},
};

/// Everything a step needs: where to work, how to talk to git, and how to
/// talk to the operator.
pub struct AppContext<'a> {
    pub root: PathBuf,
    pub cfg: RepoConfig,
    pub verbosity: u8,
    pub git: &'a dyn GitRunner,
    pub prompt: &'a dyn Prompter,
    pub out: Reporter,
}

impl<'a> AppContext<'a> {
    pub fn new(
        root: PathBuf,
        cfg: RepoConfig,
        verbosity: u8,
        git: &'a dyn GitRunner,
        prompt: &'a dyn Prompter,
    ) -> Self {
        Self {
            root,
            cfg,
            verbosity,
            git,
            prompt,
            out: Reporter,
        }
    }

    /// Path of the git metadata directory in the working directory.
    pub fn git_dir(&self) -> PathBuf {
        self.root.join(".git")
    }

    pub fn is_repo(&self) -> bool {
        self.git_dir().exists()
    }

    /// Fail unless the working directory already holds a git repository.
    ///
    /// # Errors
    /// Returns an error naming the remedy when `.git` is missing.
    pub fn require_repo(&self) -> Result<()> {
        if !self.is_repo() {
            bail!(
                "not a git repository: {} has no .git directory; run with --init first",
                self.root.display()
            )
        }
        Ok(())
    }

    /// Whether `-v` or more was given.
    pub const fn verbose(&self) -> bool {
        self.verbosity > 0
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(Path::new(relative))
    }
}
