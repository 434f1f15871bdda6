pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod logging;
pub mod ui;

use anyhow::{Context, Result};

use crate::{
    app::AppContext,
    config::RepoConfig,
    core::git::{SystemGit, ensure_installed},
    ui::TerminalPrompter,
};

/// Run the steps requested on the command line in the current directory.
///
/// # Errors
/// Returns an error if git is unavailable or any step fails.
pub fn run(cli: &cli::Cli) -> Result<()> {
    let root = std::env::current_dir().context("failed to determine working directory")?;

    let git = SystemGit::from_env(&root);
    let version = ensure_installed(&git)?;
    tracing::debug!(%version, root = %root.display(), "starting");

    let cfg = RepoConfig::load(&root)?;
    let prompt = TerminalPrompter::detect();
    let ctx = AppContext::new(root, cfg, cli.verbose, &git, &prompt);

    commands::dispatch(cli.options(), &ctx)
}
