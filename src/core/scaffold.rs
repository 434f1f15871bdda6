use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Directories created by `--init`.
pub const SCAFFOLD_DIRS: &[&str] = &["docs", "examples", ".github/workflows"];

/// Empty file dropped into each scaffold directory so git tracks it.
pub const MARKER_FILE: &str = ".gitkeep";

pub const GITIGNORE_FILE: &str = ".gitignore";

pub const GITIGNORE_TEMPLATE: &str = "\
# Python build artifacts
__pycache__/
*.py[cod]
*$py.class
*.so
build/
dist/
*.egg-info/
.eggs/
.pytest_cache/
.ipynb_checkpoints/

# Virtual environments
venv/
.venv/
env/
ENV/

# Editors and IDEs
.vscode/
.idea/
*.swp
*.swo
*~

# OS files
.DS_Store
Thumbs.db

# Credentials and keys
*.pem
*.key
id_rsa*
*_key
*_key.pub
.env
fabric_rc
tokens.json
ssh_config

# Logs and temporary files
*.log
logs/
tmp/
*.tmp
";

/// What `scaffold` changed on disk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub created_dirs: Vec<PathBuf>,
    pub created_markers: Vec<PathBuf>,
    pub wrote_gitignore: bool,
}

/// Create scaffold directories, marker files and the `.gitignore` template
/// under `root`. Existing files are never overwritten.
///
/// # Errors
/// Returns an error if a directory or file cannot be created.
pub fn scaffold(root: &Path) -> Result<ScaffoldReport> {
    let mut report = ScaffoldReport::default();

    for dir in SCAFFOLD_DIRS {
        let path = root.join(dir);
        if !path.is_dir() {
            fs::create_dir_all(&path)
                .with_context(|| format!("failed to create directory {}", path.display()))?;
            report.created_dirs.push(PathBuf::from(dir));
        }
    }

    report.wrote_gitignore = write_gitignore(root)?;

    for dir in SCAFFOLD_DIRS {
        let marker = root.join(dir).join(MARKER_FILE);
        if !marker.exists() {
            fs::write(&marker, b"")
                .with_context(|| format!("failed to create {}", marker.display()))?;
            report.created_markers.push(Path::new(dir).join(MARKER_FILE));
        }
    }

    Ok(report)
}

/// Write the template if no `.gitignore` exists. Returns whether it was written.
fn write_gitignore(root: &Path) -> Result<bool> {
    let path = root.join(GITIGNORE_FILE);
    if path.exists() {
        return Ok(false);
    }
    fs::write(&path, GITIGNORE_TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}
