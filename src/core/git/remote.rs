use anyhow::{Context, Result, bail};

use super::runner::GitRunner;

/// Names of all configured remotes.
pub fn remote_names(git: &dyn GitRunner) -> Result<Vec<String>> {
    let out = git
        .run_checked(&["remote"])
        .context("failed to list remotes")?;
    Ok(out
        .stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn has_remote(git: &dyn GitRunner, name: &str) -> Result<bool> {
    Ok(remote_names(git)?.iter().any(|r| r == name))
}

/// Name of the checked-out branch. Fails on a detached HEAD.
pub fn current_branch(git: &dyn GitRunner) -> Result<String> {
    let out = git
        .run_checked(&["branch", "--show-current"])
        .context("failed to determine current branch")?;
    let branch = out.stdout.trim();
    if branch.is_empty() {
        bail!("HEAD is detached; check out a branch before pushing")
    }
    Ok(branch.to_string())
}

pub fn remote_url(git: &dyn GitRunner, remote: &str) -> Result<String> {
    let out = git
        .run_checked(&["remote", "get-url", remote])
        .with_context(|| format!("failed to read URL of remote '{remote}'"))?;
    Ok(out.stdout.trim().to_string())
}

/// Push `branch` to `remote` and set it as upstream. git's progress and any
/// credential prompts go straight to the terminal.
pub fn push(git: &dyn GitRunner, remote: &str, branch: &str) -> Result<()> {
    git.run_interactive(&["push", "-u", remote, branch])
        .with_context(|| format!("failed to push {branch} to {remote}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::git::{FakeGit, GitOutput};

    #[test]
    fn remote_names_ignores_blank_lines() {
        let git = FakeGit::new().respond("remote", GitOutput::ok("origin\n\nupstream\n"));
        assert_eq!(remote_names(&git).unwrap(), vec!["origin", "upstream"]);
        assert!(has_remote(&git, "upstream").unwrap());
        assert!(!has_remote(&git, "fork").unwrap());
    }

    #[test]
    fn detached_head_is_an_error() {
        let git = FakeGit::new().respond("branch --show-current", GitOutput::ok("\n"));
        let err = current_branch(&git).unwrap_err();
        assert!(err.to_string().contains("detached"));
    }
}
