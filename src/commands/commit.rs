use anyhow::Result;

use super::Command;
use crate::{app::AppContext, core::git::repo};

/// Message used when the operator leaves the prompt blank.
pub const DEFAULT_COMMIT_MESSAGE: &str = "\
Update slice management framework

- Topology models with DPU and FPGA PCI device support
- Slice deployment and network configuration helpers
- SSH setup utilities and topology viewer
- Notebooks, tests and example topologies";

/// Blank input selects the default message.
pub fn resolve_message(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_COMMIT_MESSAGE.to_string()
    } else {
        trimmed.to_string()
    }
}

pub struct CommitCommand;

impl Command for CommitCommand {
    fn run(&self, ctx: &AppContext<'_>) -> Result<()> {
        let out = ctx.out;
        out.heading("Committing changes");
        ctx.require_repo()?;

        if !repo::has_changes(ctx.git)? {
            out.info("No changes to commit");
            return Ok(());
        }

        out.info("Pending changes:");
        for line in repo::short_status(ctx.git)? {
            out.item(&line);
        }

        if !ctx.prompt.confirm("Stage and commit these changes?")? {
            out.warning("Commit cancelled");
            return Ok(());
        }

        let message = resolve_message(
            &ctx.prompt
                .input("Commit message (leave empty for the default)")?,
        );
        tracing::debug!(%message, "resolved commit message");

        repo::stage_all(ctx.git)?;
        let report = repo::commit(ctx.git, &message)?;
        if ctx.verbose() {
            for line in report.lines().filter(|l| !l.trim().is_empty()) {
                out.item(line.trim());
            }
        }

        let summary = repo::head_summary(ctx.git)?;
        out.success(&format!("Committed: {summary}"));
        Ok(())
    }
}
