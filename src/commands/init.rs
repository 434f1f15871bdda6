use anyhow::Result;

use super::Command;
use crate::{
    app::AppContext,
    core::{git, scaffold},
};

pub struct InitCommand;

impl Command for InitCommand {
    fn run(&self, ctx: &AppContext<'_>) -> Result<()> {
        let out = ctx.out;
        out.heading("Initializing repository");

        if ctx.is_repo() {
            out.info("Git repository already initialized, skipping git init");
        } else {
            out.info("Initializing git repository");
            git::repo::init_repo(ctx.git)?;
            out.success(&format!("Initialized git repository in {}", ctx.root.display()));
        }

        let report = scaffold::scaffold(&ctx.root)?;
        for dir in &report.created_dirs {
            out.item(&format!("created {}/", dir.display()));
        }
        for marker in &report.created_markers {
            out.item(&format!("created {}", marker.display()));
        }
        if report.wrote_gitignore {
            out.success(&format!("Created {}", scaffold::GITIGNORE_FILE));
        } else {
            out.info(&format!(
                "{} already exists, leaving it untouched",
                scaffold::GITIGNORE_FILE
            ));
        }

        out.success("Repository structure ready");
        Ok(())
    }
}
