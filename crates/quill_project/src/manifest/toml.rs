use serde_derive::{Deserialize, Serialize};

use super::{Manifest, ManifestMetadata, ProjectId};

/// A manifest as specified in a quill.toml file.
#[derive(Debug, Deserialize, Serialize)]
pub struct TomlManifest {
    project: TomlProject,
}

/// Represents the `project` section of a quill.toml file.
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "kebab-case")]
pub struct TomlProject {
    name: String,
    version: semver::Version,
    authors: Option<Vec<String>>,
}

impl TomlManifest {
    /// Convert this toml manifest into a "real" manifest.
    pub fn into_real_manifest(self) -> Result<Manifest, anyhow::Error> {
        let name = self.project.name.trim();
        if name.is_empty() {
            anyhow::bail!("project name cannot be an empty string");
        }

        Ok(Manifest {
            project_id: ProjectId {
                name: name.to_owned(),
                version: self.project.version,
            },
            metadata: ManifestMetadata {
                authors: self.project.authors.unwrap_or_default(),
            },
        })
    }
}
