use std::collections::hash_map::Entry;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use relative_path::RelativePathBuf;
use rustc_hash::FxHashMap;

use crate::{
    ChangedFile, FileHandle, FileId, FileStore, Project, ProjectError, ProjectManifest,
    ProjectService,
};

/// A set of projects, indexed by name, together with the last known contents of their files.
#[derive(Default)]
pub struct Workspace {
    projects: FxHashMap<String, Project>,
    files: FileStore,
}

impl Workspace {
    /// Loads every project whose manifest is located in `root` or in one of its direct
    /// subdirectories.
    pub fn load(root: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let root = root.as_ref();
        let manifests =
            ProjectManifest::discover_nested(root).map_err(|source| ProjectError::Io {
                path: root.to_path_buf(),
                source,
            })?;

        let mut workspace = Self::default();
        for manifest in manifests {
            workspace.add_project(&manifest.path)?;
        }

        log::info!(
            "loaded {} project(s) from {}",
            workspace.projects.len(),
            root.display()
        );
        Ok(workspace)
    }

    /// Registers the project described by the manifest at `manifest_path`.
    pub fn add_project(
        &mut self,
        manifest_path: impl AsRef<Path>,
    ) -> Result<&Project, ProjectError> {
        let manifest_path = manifest_path.as_ref();
        let manifest_path = fs::canonicalize(manifest_path).map_err(|source| ProjectError::Io {
            path: manifest_path.to_path_buf(),
            source,
        })?;
        let project = Project::from_file(&manifest_path).map_err(|e| ProjectError::Manifest {
            path: manifest_path.clone(),
            message: format!("{e:#}"),
        })?;

        match self.projects.entry(project.name().to_owned()) {
            Entry::Occupied(entry) => Err(ProjectError::DuplicateProject {
                name: entry.key().clone(),
                existing: entry.get().manifest_path().to_path_buf(),
            }),
            Entry::Vacant(entry) => {
                log::debug!(
                    "registered project {} at {}",
                    project,
                    project.root().display()
                );
                Ok(entry.insert(project))
            }
        }
    }

    /// Returns the project with the given name
    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.get(name)
    }

    /// Returns all registered projects ordered by name
    pub fn projects(&self) -> Vec<&Project> {
        let mut projects = self.projects.values().collect::<Vec<_>>();
        projects.sort_by(|a, b| a.name().cmp(b.name()));
        projects
    }

    /// Returns the contents of a file as it was last refreshed.
    pub fn file_contents(&self, file_id: FileId) -> Option<&[u8]> {
        self.files.file_contents(file_id)
    }

    /// Returns the path of a resolved file, or `None` if `file_id` was not resolved by this
    /// workspace.
    pub fn file_path(&self, file_id: FileId) -> Option<&Path> {
        self.files.file_path(file_id)
    }

    /// Returns the file changes observed by refreshes since the last call.
    pub fn take_changes(&mut self) -> Vec<ChangedFile> {
        self.files.take_changes()
    }
}

impl ProjectService for Workspace {
    fn resolve(&mut self, project: &str, path: &Path) -> Result<FileHandle, ProjectError> {
        let root = self
            .projects
            .get(project)
            .ok_or_else(|| ProjectError::UnknownProject(project.to_owned()))?
            .root();
        let outside_project = || ProjectError::OutsideProject {
            project: project.to_owned(),
            path: path.to_path_buf(),
        };

        let relative = if path.is_absolute() {
            let path = normalize(path);
            match path.strip_prefix(root) {
                Ok(relative) => relative.to_path_buf(),
                // The root is canonical, the path might reach it through a symlink
                Err(_) => canonicalize_existing_prefix(&path)
                    .strip_prefix(root)
                    .map_err(|_| outside_project())?
                    .to_path_buf(),
            }
        } else {
            path.to_path_buf()
        };
        let relative_path = RelativePathBuf::from_path(&relative)
            .map_err(|_| outside_project())?
            .normalize();
        match relative_path.components().next() {
            Some(relative_path::Component::ParentDir) => return Err(outside_project()),
            None => {
                return Err(ProjectError::NotAFile {
                    project: project.to_owned(),
                    path: path.to_path_buf(),
                })
            }
            Some(_) => {}
        }

        let absolute = relative_path.to_path(root);
        log::trace!("resolved '{}' to {}", path.display(), absolute.display());

        let file_id = self.files.intern(&absolute);
        Ok(FileHandle {
            project: project.to_owned(),
            file_id,
            relative_path,
            path: absolute,
        })
    }

    fn refresh(&mut self, file: &FileHandle) -> Result<(), ProjectError> {
        if !self.projects.contains_key(file.project()) {
            return Err(ProjectError::UnknownProject(file.project().to_owned()));
        }

        let contents = match fs::read(file.path()) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(source) => {
                return Err(ProjectError::Io {
                    path: file.path().to_path_buf(),
                    source,
                })
            }
        };

        if self.files.set_file_contents(file.path(), contents) {
            log::debug!("refreshed {}: contents changed", file.path().display());
        } else {
            log::trace!("refreshed {}: no changes", file.path().display());
        }
        Ok(())
    }
}

/// Removes `.` and `..` components from a path without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            component => result.push(component.as_os_str()),
        }
    }
    result
}

/// Canonicalizes the longest prefix of `path` that exists on disk and appends the remaining
/// components to it. Returns `path` unchanged if no prefix exists.
fn canonicalize_existing_prefix(path: &Path) -> PathBuf {
    for ancestor in path.ancestors() {
        if let Ok(canonical) = fs::canonicalize(ancestor) {
            return match path.strip_prefix(ancestor) {
                Ok(rest) if !rest.as_os_str().is_empty() => canonical.join(rest),
                _ => canonical,
            };
        }
    }
    path.to_path_buf()
}
