//! Workspace identity and bounded file enumeration
//!
//! The hosting-environment side of the core contracts: a stable string key
//! per workspace, and the truncated file walk that feeds the context
//! detector. Both are best-effort; failures degrade rather than propagate.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::profile::DEFAULT_WORKSPACE_ID;

/// Cap on the number of files handed to the detector
pub const DEFAULT_FILE_CAP: usize = 50;

/// Directories never descended into during enumeration
pub const DEFAULT_SKIP_DIRS: &[&str] = &["node_modules", ".git", "target"];

/// Resolve the stable identity for a workspace root.
///
/// The id is the canonicalized root path; when no root is given and the
/// current directory cannot be resolved, the reserved `"default"` id is
/// used (the "no workspace open" case).
pub fn workspace_id(root: Option<&Path>) -> String {
    let root = match root {
        Some(path) => path.to_path_buf(),
        None => match std::env::current_dir() {
            Ok(cwd) => cwd,
            Err(e) => {
                warn!(error = %e, "no workspace root available, using default identity");
                return DEFAULT_WORKSPACE_ID.to_string();
            }
        },
    };

    match root.canonicalize() {
        Ok(canonical) => canonical.display().to_string(),
        Err(_) => root.display().to_string(),
    }
}

/// The display name of a workspace (its root directory name)
pub fn workspace_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "My Project".to_string())
}

/// Enumerate up to `cap` file paths under `root`, skipping `skip_dirs`.
///
/// Detection input only: any I/O failure degrades to the files gathered so
/// far (possibly none), never an error.
pub fn enumerate_files(root: &Path, cap: usize, skip_dirs: &[String]) -> Vec<String> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        let name = entry.file_name().to_string_lossy();
        !(entry.file_type().is_dir() && skip_dirs.iter().any(|skip| skip == name.as_ref()))
    });

    for entry in walker {
        if files.len() >= cap {
            break;
        }
        match entry {
            Ok(entry) if entry.file_type().is_file() => {
                files.push(entry.path().display().to_string());
            }
            Ok(_) => {}
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry during enumeration");
            }
        }
    }

    debug!(root = %root.display(), count = files.len(), cap, "workspace enumeration complete");
    files
}
