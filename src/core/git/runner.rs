use std::{
    ffi::OsString,
    io,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::{Context, Result, bail};

/// Environment variable that overrides the git executable.
pub const GIT_PROGRAM_ENV: &str = "SLICE_REPO_GIT";

/// Exit status and captured streams of a single git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    /// Exit code, or `None` if the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    pub fn ok(stdout: &str) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    pub fn failed(code: i32, stderr: &str) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// Narrow port over the git command line.
pub trait GitRunner {
    /// Run git with `args` and capture its output. A non-zero exit is not an
    /// error here; failing to spawn the process is.
    ///
    /// # Errors
    /// Returns an error if the git process cannot be started.
    fn run(&self, args: &[&str]) -> Result<GitOutput>;

    /// Run git and fail on a non-zero exit status.
    ///
    /// # Errors
    /// Returns an error if git cannot be started or exits unsuccessfully.
    fn run_checked(&self, args: &[&str]) -> Result<GitOutput> {
        let out = self.run(args)?;
        if !out.success() {
            let status = out
                .code
                .map_or_else(|| "signal".to_string(), |c| c.to_string());
            let detail = out.stderr.trim();
            if detail.is_empty() {
                bail!("git {} exited with status {status}", args.join(" "));
            }
            bail!("git {} exited with status {status}: {detail}", args.join(" "));
        }
        Ok(out)
    }

    /// Run git with stdin, stdout and stderr attached to the terminal, so
    /// progress and credential prompts reach the operator as they happen.
    ///
    /// # Errors
    /// Returns an error if git cannot be started or exits unsuccessfully.
    fn run_interactive(&self, args: &[&str]) -> Result<()>;
}

/// Runs the real git binary inside a working directory.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: OsString,
    workdir: PathBuf,
}

impl SystemGit {
    pub fn new(program: impl Into<OsString>, workdir: &Path) -> Self {
        Self {
            program: program.into(),
            workdir: workdir.to_path_buf(),
        }
    }

    /// Use `$SLICE_REPO_GIT` when set, `git` from `PATH` otherwise.
    pub fn from_env(workdir: &Path) -> Self {
        let program = std::env::var_os(GIT_PROGRAM_ENV)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| OsString::from("git"));
        Self::new(program, workdir)
    }

    fn command(&self, args: &[&str]) -> Command {
        tracing::debug!(program = ?self.program, args = %args.join(" "), "running git");
        let mut cmd = Command::new(&self.program);
        cmd.args(args).current_dir(&self.workdir);
        cmd
    }

    fn spawn_error(&self, err: io::Error, args: &[&str]) -> anyhow::Error {
        if err.kind() == io::ErrorKind::NotFound {
            anyhow::anyhow!(
                "git executable {} not found; install git or set {GIT_PROGRAM_ENV}",
                Path::new(&self.program).display()
            )
        } else {
            anyhow::Error::new(err).context(format!("failed to run git {}", args.join(" ")))
        }
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> Result<GitOutput> {
        let output = self
            .command(args)
            .output()
            .map_err(|e| self.spawn_error(e, args))?;

        let out = GitOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::trace!(code = ?out.code, stdout = %out.stdout, stderr = %out.stderr, "git finished");
        Ok(out)
    }

    fn run_interactive(&self, args: &[&str]) -> Result<()> {
        let status = self
            .command(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| self.spawn_error(e, args))?;
        if !status.success() {
            bail!("git {} exited with status {status}", args.join(" "));
        }
        Ok(())
    }
}

/// Verify git is installed and return its version line.
///
/// # Errors
/// Returns an error if git cannot be run or reports failure.
pub fn ensure_installed(git: &dyn GitRunner) -> Result<String> {
    let out = git
        .run_checked(&["--version"])
        .context("git is required but is not available")?;
    Ok(out.stdout.trim().to_string())
}
