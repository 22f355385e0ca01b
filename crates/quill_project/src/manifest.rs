use std::fmt;
use std::path::Path;

mod toml;

/// Contains all information of a project. Usually this information is read from a quill.toml
/// file.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Manifest {
    project_id: ProjectId,
    metadata: ManifestMetadata,
}

/// General metadata for a project.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ManifestMetadata {
    pub authors: Vec<String>,
}

/// Unique identifier of a project and version
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ProjectId {
    name: String,
    version: semver::Version,
}

impl Manifest {
    /// Try to read a manifest from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Manifest, anyhow::Error> {
        let file_contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("could not read manifest file: {}", e))?;
        file_contents.parse()
    }

    /// Returns the unique identifier of this manifest based on the name and version
    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    /// Returns the name of the project
    pub fn name(&self) -> &str {
        self.project_id.name()
    }

    /// Returns the version of the project
    pub fn version(&self) -> &semver::Version {
        self.project_id.version()
    }

    /// Returns the metadata information of the project
    pub fn metadata(&self) -> &ManifestMetadata {
        &self.metadata
    }
}

impl ProjectId {
    /// Returns the name of the project
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the version of the project
    pub fn version(&self) -> &semver::Version {
        &self.version
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.name(), self.version())
    }
}

impl std::str::FromStr for Manifest {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let manifest = ::toml::from_str::<toml::TomlManifest>(s)
            .map_err(|e| anyhow::anyhow!("could not parse manifest: {}", e))?;
        manifest.into_real_manifest()
    }
}
