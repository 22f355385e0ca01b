use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};

use crate::{FileId, ProjectError};

/// A file that was resolved within a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileHandle {
    pub(crate) project: String,
    pub(crate) file_id: FileId,
    pub(crate) relative_path: RelativePathBuf,
    pub(crate) path: PathBuf,
}

impl FileHandle {
    /// Returns the name of the project the file belongs to
    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn file_id(&self) -> FileId {
        self.file_id
    }

    /// Returns the path of the file relative to the root of its project
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Returns the absolute path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The capabilities an editor needs to keep its view of a project's files up to date.
///
/// Resolving a file never has side effects on the file's contents, refreshing does.
pub trait ProjectService {
    /// Finds the file at `path` in the project named `project`. A relative `path` is interpreted
    /// relative to the root of the project.
    fn resolve(&mut self, project: &str, path: &Path) -> Result<FileHandle, ProjectError>;

    /// Reloads the file from disk.
    fn refresh(&mut self, file: &FileHandle) -> Result<(), ProjectError>;
}
