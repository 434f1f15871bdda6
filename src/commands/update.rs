use anyhow::{Result, bail};

use super::Command;
use crate::{
    app::AppContext,
    core::manifest::{self, CHECKLIST, CRITICAL_FILES},
};

pub struct UpdateCommand;

impl Command for UpdateCommand {
    fn run(&self, ctx: &AppContext<'_>) -> Result<()> {
        let out = ctx.out;
        out.heading("Updating framework files");

        out.info("Copy the framework files into this directory:");
        for (category, files) in CHECKLIST {
            out.item(&format!("{category}:"));
            for file in *files {
                out.item(&format!("  - {file}"));
            }
        }

        if !ctx
            .prompt
            .confirm("Have you copied all files into this directory?")?
        {
            out.warning("Update cancelled. Copy the files and run again.");
            return Ok(());
        }

        let missing = manifest::missing_files(&ctx.root, CRITICAL_FILES);
        if !missing.is_empty() {
            out.error("Missing critical files:");
            for file in &missing {
                out.item(&format!("- {file}"));
            }
            bail!(
                "{} critical file(s) missing: {}",
                missing.len(),
                missing.join(", ")
            );
        }
        out.success("All critical files present");

        let script = ctx.path(&ctx.cfg.setup_script);
        if manifest::make_executable(&script)? {
            out.success(&format!("Made {} executable", ctx.cfg.setup_script));
        }

        Ok(())
    }
}
