use anyhow::{Result, bail};

use super::Command;
use crate::{app::AppContext, core::git::remote};

pub struct PushCommand;

impl Command for PushCommand {
    fn run(&self, ctx: &AppContext<'_>) -> Result<()> {
        let out = ctx.out;
        out.heading("Pushing to remote");
        ctx.require_repo()?;

        let name = ctx.cfg.remote.as_str();
        if !remote::has_remote(ctx.git, name)? {
            bail!("no remote named '{name}' is configured; add one with: git remote add {name} <url>");
        }

        let branch = remote::current_branch(ctx.git)?;
        let url = remote::remote_url(ctx.git, name)?;
        out.info(&format!("Branch: {branch}"));
        out.info(&format!("Remote: {name} ({url})"));

        if !ctx.prompt.confirm(&format!("Push {branch} to {name}?"))? {
            out.warning("Push cancelled");
            return Ok(());
        }

        remote::push(ctx.git, name, &branch)?;
        out.success(&format!("Pushed {branch} to {name}"));
        Ok(())
    }
}
