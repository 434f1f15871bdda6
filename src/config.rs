use std::path::Path;

use anyhow::{Context, Result};
use git2::{Config, Repository};

/// Settings sourced from git config (`slicerepo.*`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    /// Remote that `--push` requires and pushes to.
    pub remote: String,
    /// Script marked executable once `--update` finds every critical file.
    pub setup_script: String,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            setup_script: "setup.sh".to_string(),
        }
    }
}

impl RepoConfig {
    /// Load configuration with precedence: local → global → system.
    /// Before `git init` has run, or when `.git` cannot be opened, only
    /// global and system config are consulted.
    ///
    /// # Errors
    /// Returns an error if an opened repository's config cannot be read.
    pub fn load(root: &Path) -> Result<Self> {
        if root.join(".git").exists() {
            match Repository::open(root) {
                Ok(repo) => {
                    let cfg = repo.config().context("failed to open git config")?;
                    return Ok(Self::from_git_config(&cfg));
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        root = %root.display(),
                        "cannot open repository; ignoring its config"
                    );
                }
            }
        }

        match Config::open_default() {
            Ok(cfg) => Ok(Self::from_git_config(&cfg)),
            Err(e) => {
                tracing::debug!(error = %e, "no default git config; using built-in settings");
                Ok(Self::default())
            }
        }
    }

    fn from_git_config(cfg: &Config) -> Self {
        let mut out = Self::default();

        if let Ok(v) = cfg.get_string("slicerepo.remote")
            && !v.trim().is_empty()
        {
            out.remote = v.trim().to_string();
        }
        if let Ok(v) = cfg.get_string("slicerepo.setupscript")
            && !v.trim().is_empty()
        {
            out.setup_script = v.trim().to_string();
        }

        out
    }
}
