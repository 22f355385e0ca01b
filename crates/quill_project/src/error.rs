use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by a [`crate::ProjectService`].
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("project '{0}' does not exist")]
    UnknownProject(String),

    #[error("a project named '{name}' is already registered at '{}'", .existing.display())]
    DuplicateProject { name: String, existing: PathBuf },

    #[error("'{}' is not located in project '{project}'", .path.display())]
    OutsideProject { project: String, path: PathBuf },

    #[error("'{}' does not name a file in project '{project}'", .path.display())]
    NotAFile { project: String, path: PathBuf },

    #[error("invalid manifest '{}': {message}", .path.display())]
    Manifest { path: PathBuf, message: String },

    #[error("could not access '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
