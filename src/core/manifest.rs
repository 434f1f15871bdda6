use std::path::Path;

use anyhow::{Context, Result};

/// Expected framework files, grouped for the update checklist.
pub const CHECKLIST: &[(&str, &[&str])] = &[
    (
        "Core modules",
        &[
            "slice_utils_models.py",
            "slice_deployment.py",
            "slice_network_config.py",
            "slice_ssh_setup.py",
            "slice_topology_viewer.py",
            "tool_topology_summary_generator.py",
        ],
    ),
    (
        "Configuration",
        &["requirements.txt", "README.md", "setup.sh"],
    ),
    (
        "Notebooks",
        &["slice_deployment.ipynb", "slice_topology_viewer.ipynb"],
    ),
    (
        "Tests",
        &["tests/test-dpu-support.py", "tests/test-fpga-support.py"],
    ),
    ("Example data", &["model/_slice_topology.yaml"]),
];

/// Files that must exist before the repository is committed.
pub const CRITICAL_FILES: &[&str] = &[
    "slice_utils_models.py",
    "slice_deployment.py",
    "slice_network_config.py",
    "slice_topology_viewer.py",
    "requirements.txt",
    "README.md",
];

/// Entries of `files` that do not exist under `root`, in input order.
pub fn missing_files<'a>(root: &Path, files: &[&'a str]) -> Vec<&'a str> {
    files
        .iter()
        .copied()
        .filter(|f| !root.join(f).exists())
        .collect()
}

/// Add execute permission to `path` if it exists. Returns whether the file
/// was found.
///
/// # Errors
/// Returns an error if the permissions cannot be read or updated.
pub fn make_executable(path: &Path) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let meta = std::fs::metadata(path)
            .with_context(|| format!("failed to stat {}", path.display()))?;
        let mut perms = meta.permissions();
        perms.set_mode(perms.mode() | 0o111);
        std::fs::set_permissions(path, perms)
            .with_context(|| format!("failed to chmod {}", path.display()))?;
    }

    Ok(true)
}
