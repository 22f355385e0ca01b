//! Provides the structures to describe Quill projects and the [`ProjectService`] through which
//! editors resolve and refresh the files that belong to them.

pub use error::ProjectError;
pub use file_store::{ChangeKind, ChangedFile, FileId, FileStore};
pub use manifest::{Manifest, ManifestMetadata, ProjectId};
pub use project::Project;
pub use project_manifest::ProjectManifest;
pub use service::{FileHandle, ProjectService};
pub use workspace::Workspace;

mod error;
mod file_store;
mod manifest;
mod path_interner;
mod project;
mod project_manifest;
mod service;
mod workspace;

pub const MANIFEST_FILENAME: &str = "quill.toml";
