use anyhow::{Context, Result};

use super::runner::GitRunner;

/// Run `git init` in the working directory.
pub fn init_repo(git: &dyn GitRunner) -> Result<()> {
    git.run_checked(&["init"])
        .context("failed to initialize git repository")?;
    Ok(())
}

/// True when the working tree differs from HEAD, untracked files included.
pub fn has_changes(git: &dyn GitRunner) -> Result<bool> {
    let out = git
        .run_checked(&["status", "--porcelain"])
        .context("failed to read repository status")?;
    Ok(!out.stdout.trim().is_empty())
}

/// Short-form status lines for display.
pub fn short_status(git: &dyn GitRunner) -> Result<Vec<String>> {
    let out = git.run_checked(&["status", "--short"])?;
    Ok(out
        .stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Stage every change in the working tree, deletions included.
pub fn stage_all(git: &dyn GitRunner) -> Result<()> {
    git.run_checked(&["add", "-A"])
        .context("failed to stage changes")?;
    Ok(())
}

/// Create a commit and return git's report of it.
pub fn commit(git: &dyn GitRunner, message: &str) -> Result<String> {
    let out = git
        .run_checked(&["commit", "-m", message])
        .context("failed to create commit")?;
    Ok(out.stdout)
}

/// One-line summary (`<short sha> <subject>`) of HEAD.
pub fn head_summary(git: &dyn GitRunner) -> Result<String> {
    let out = git.run_checked(&["log", "-1", "--oneline"])?;
    Ok(out.stdout.trim().to_string())
}
