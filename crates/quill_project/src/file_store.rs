use std::mem;
use std::path::Path;

use crate::path_interner::PathInterner;

/// A `FileId` represents a unique identifier for a file within a [`FileStore`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct FileId(pub(crate) u32);

/// Holds the last known contents of every file that was refreshed, and a log of how those
/// contents changed. The log can be drained with [`FileStore::take_changes`].
#[derive(Default)]
pub struct FileStore {
    interner: PathInterner,

    /// Per file the content of the file, or `None` if no content is available
    file_contents: Vec<Option<Vec<u8>>>,

    changes: Vec<ChangedFile>,
}

/// A record of a change to a file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChangedFile {
    pub file_id: FileId,
    pub kind: ChangeKind,
}

/// The type of change that a file undergoes
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeKind {
    Create,
    Modify,
    Delete,
}

impl FileStore {
    /// Returns the changes recorded since the last call, or since the store was created.
    pub fn take_changes(&mut self) -> Vec<ChangedFile> {
        mem::take(&mut self.changes)
    }

    /// Returns the `FileId` for `path`, allocating one if the path was never seen before. The
    /// file does not need to have any contents.
    pub fn intern(&mut self, path: &Path) -> FileId {
        let file_id = self.interner.intern(path);
        let idx = file_id.0 as usize;
        if self.file_contents.len() <= idx {
            self.file_contents.resize(idx + 1, None);
        }
        file_id
    }

    /// Returns the path of the file with the specified `FileId`.
    pub fn file_path(&self, file_id: FileId) -> Option<&Path> {
        self.interner.lookup(file_id)
    }

    /// Returns the content of the file with the specified `FileId`.
    pub fn file_contents(&self, file_id: FileId) -> Option<&[u8]> {
        self.file_contents
            .get(file_id.0 as usize)
            .and_then(Option::as_deref)
    }

    /// Stores new contents for the file at `path`, `None` meaning the file no longer exists.
    /// Returns true and records a change if the contents actually differ.
    pub fn set_file_contents(&mut self, path: &Path, contents: Option<Vec<u8>>) -> bool {
        let file_id = self.intern(path);
        let slot = &mut self.file_contents[file_id.0 as usize];
        let kind = match (&*slot, &contents) {
            (None, None) => return false,
            (None, Some(_)) => ChangeKind::Create,
            (Some(_), None) => ChangeKind::Delete,
            (Some(old), Some(new)) if old == new => return false,
            (Some(_), Some(_)) => ChangeKind::Modify,
        };

        *slot = contents;
        self.changes.push(ChangedFile { file_id, kind });
        true
    }
}
