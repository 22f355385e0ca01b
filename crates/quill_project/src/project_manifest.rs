use std::fs::read_dir;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use crate::MANIFEST_FILENAME;

/// A wrapper around a path to a quill project manifest
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct ProjectManifest {
    pub path: PathBuf,
}

impl ProjectManifest {
    /// Find all project manifests in the given directory
    pub fn discover(path: impl AsRef<Path>) -> io::Result<Vec<ProjectManifest>> {
        Ok(read_dir(path.as_ref())?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .file_name()
                        .is_some_and(|file_name| file_name == MANIFEST_FILENAME)
            })
            .map(|path| ProjectManifest { path })
            .collect())
    }

    /// Find all project manifests in the given directory and in its direct subdirectories
    pub fn discover_nested(path: impl AsRef<Path>) -> io::Result<Vec<ProjectManifest>> {
        let path = path.as_ref();
        let subdirectories = read_dir(path)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_dir());
        Ok(Self::discover_all(
            std::iter::once(path.to_path_buf()).chain(subdirectories),
        ))
    }

    /// Find all project manifests in a collection of paths
    pub fn discover_all(paths: impl Iterator<Item = impl AsRef<Path>>) -> Vec<ProjectManifest> {
        let mut project_manifests = paths
            .filter_map(|path| ProjectManifest::discover(path).ok())
            .flatten()
            .collect::<FxHashSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();
        project_manifests.sort();
        project_manifests
    }
}
