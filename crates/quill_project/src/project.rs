use std::fmt;
use std::path::{Path, PathBuf};

use semver::Version;

use crate::{Manifest, ProjectId};

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Project {
    // The manifest of the project
    manifest: Manifest,
    // The location of the manifest which marks the root of the project
    manifest_path: PathBuf,
    // The directory that contains the manifest
    root: PathBuf,
}

impl Project {
    /// Creates a project from a manifest and its location. Returns `None` if the manifest path
    /// has no parent directory.
    pub fn new(manifest: Manifest, manifest_path: &Path) -> Option<Self> {
        let root = manifest_path.parent()?.to_path_buf();
        Some(Self {
            manifest,
            manifest_path: manifest_path.to_path_buf(),
            root,
        })
    }

    /// Creates a project by loading the information from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let manifest = Manifest::from_file(path)?;
        Self::new(manifest, path).ok_or_else(|| {
            anyhow::anyhow!("manifest path has no parent directory: {}", path.display())
        })
    }

    /// Returns the manifest
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Returns the path of the manifest
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Returns the name of the project
    pub fn name(&self) -> &str {
        self.manifest().name()
    }

    /// Returns the `ProjectId` object for the project
    pub fn project_id(&self) -> &ProjectId {
        self.manifest().project_id()
    }

    /// Returns the root folder of the project
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the version of the project
    pub fn version(&self) -> &Version {
        self.project_id().version()
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.project_id())
    }
}
