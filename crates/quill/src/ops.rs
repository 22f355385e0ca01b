pub mod diagnostics;
pub mod projects;
pub mod refresh_file;

use std::path::PathBuf;

/// Returns the given workspace directory, or the current working directory if none was given.
fn workspace_root(workspace: Option<PathBuf>) -> Result<PathBuf, anyhow::Error> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("could not determine current working directory: {}", e)),
    }
}
