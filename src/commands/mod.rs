use anyhow::Result;

use crate::app::{AppContext, Options, Step};

pub mod commit;
pub mod init;
pub mod push;
pub mod update;

/// Unified interface implemented by each step handler.
pub trait Command {
    /// Execute the step. Declined confirmations and no-ops return `Ok`.
    ///
    /// # Errors
    /// Returns an error if the step fails; the run stops there.
    fn run(&self, ctx: &AppContext<'_>) -> Result<()>;
}

/// Handler for a step.
pub fn command_for(step: Step) -> &'static dyn Command {
    match step {
        Step::Init => &init::InitCommand,
        Step::Update => &update::UpdateCommand,
        Step::Commit => &commit::CommitCommand,
        Step::Push => &push::PushCommand,
    }
}

/// Central dispatcher: runs every enabled step in fixed order, stopping at
/// the first error.
///
/// # Errors
/// Returns the error of the first step that fails.
pub fn dispatch(opts: Options, ctx: &AppContext<'_>) -> Result<()> {
    for step in opts.steps() {
        tracing::debug!(?step, "running step");
        command_for(step).run(ctx)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::path::Path;

    use crate::{
        app::AppContext,
        config::RepoConfig,
        core::git::FakeGit,
        ui::ScriptedPrompter,
    };

    pub fn ctx<'a>(root: &Path, git: &'a FakeGit, prompt: &'a ScriptedPrompter) -> AppContext<'a> {
        AppContext::new(root.to_path_buf(), RepoConfig::default(), 0, git, prompt)
    }

    /// Temporary directory that already looks like a git repository.
    pub fn repo_dir() -> tempfile::TempDir {
        let td = tempfile::tempdir().unwrap();
        std::fs::create_dir(td.path().join(".git")).unwrap();
        td
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::{
        commands::testing::{ctx, repo_dir},
        core::{
            git::{FakeGit, GitOutput},
            manifest::CRITICAL_FILES,
        },
        ui::ScriptedPrompter,
    };

    fn with_critical_files(root: &std::path::Path) {
        for f in CRITICAL_FILES {
            fs::write(root.join(f), "content").unwrap();
        }
    }

    #[test]
    fn all_runs_steps_in_order() {
        let td = repo_dir();
        with_critical_files(td.path());
        let git = FakeGit::new()
            .respond("status --porcelain", GitOutput::ok("?? README.md\n"))
            .respond("remote", GitOutput::ok("origin\n"))
            .respond("branch --show-current", GitOutput::ok("main\n"));
        let prompt = ScriptedPrompter::new(["y", "y", "", "y"]);

        dispatch(Options::all(), &ctx(td.path(), &git, &prompt)).unwrap();

        let calls = git.calls();
        let pos = |needle: &str| {
            calls
                .iter()
                .position(|c| c.starts_with(needle))
                .unwrap_or_else(|| panic!("{needle} not called: {calls:?}"))
        };
        assert!(!git.called("init"), "existing repo must not be re-initialized");
        assert!(pos("status --porcelain") < pos("add -A"));
        assert!(pos("add -A") < pos("commit -m"));
        assert!(pos("commit -m") < pos("push -u origin main"));
        assert!(td.path().join(".gitignore").exists());
    }

    #[test]
    fn declined_update_does_not_stop_the_chain() {
        let td = repo_dir();
        let git = FakeGit::new()
            .respond("status --porcelain", GitOutput::ok(" M a.py\n"))
            .respond("remote", GitOutput::ok("origin\n"))
            .respond("branch --show-current", GitOutput::ok("main\n"));
        let prompt = ScriptedPrompter::new(["n", "y", "msg", "y"]);
        let opts = Options {
            update: true,
            commit: true,
            push: true,
            ..Options::default()
        };

        dispatch(opts, &ctx(td.path(), &git, &prompt)).unwrap();

        assert!(git.called("commit"));
        assert!(git.called("push"));
    }

    #[test]
    fn failed_update_halts_before_commit_and_push() {
        let td = repo_dir();
        let git = FakeGit::new()
            .respond("status --porcelain", GitOutput::ok(" M a.py\n"))
            .respond("remote", GitOutput::ok("origin\n"));
        let prompt = ScriptedPrompter::new(["y"]);
        let opts = Options {
            update: true,
            commit: true,
            push: true,
            ..Options::default()
        };

        let err = dispatch(opts, &ctx(td.path(), &git, &prompt)).unwrap_err();

        assert!(err.to_string().contains("critical file"));
        assert!(git.calls().is_empty());
    }

    #[test]
    fn empty_options_do_nothing() {
        let td = tempfile::tempdir().unwrap();
        let git = FakeGit::new();
        let prompt = ScriptedPrompter::default();

        dispatch(Options::default(), &ctx(td.path(), &git, &prompt)).unwrap();

        assert!(git.calls().is_empty());
        assert!(prompt.asked().is_empty());
    }
}
