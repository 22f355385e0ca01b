use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::FileId;

/// Maps file paths to `FileId`s and back. Ids are never released, a workspace only ever sees a
/// bounded set of files.
#[derive(Default)]
pub(crate) struct PathInterner {
    path_to_id: FxHashMap<PathBuf, FileId>,
    id_to_path: Vec<PathBuf>,
}

impl PathInterner {
    /// Returns the `FileId` for the specified `path` or `None` if the specified path was not
    /// interned.
    pub fn get(&self, path: &Path) -> Option<FileId> {
        self.path_to_id.get(path).copied()
    }

    /// Interns the specified `path`, returning a unique `FileId` for the path.
    pub fn intern(&mut self, path: &Path) -> FileId {
        if let Some(id) = self.get(path) {
            return id;
        }
        let id = FileId(self.id_to_path.len() as u32);
        self.path_to_id.insert(path.to_path_buf(), id);
        self.id_to_path.push(path.to_path_buf());
        id
    }

    /// Returns the path for the specified `FileId`, or `None` if it was not handed out by this
    /// interner.
    pub fn lookup(&self, id: FileId) -> Option<&Path> {
        self.id_to_path.get(id.0 as usize).map(PathBuf::as_path)
    }
}
