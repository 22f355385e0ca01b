use std::path::PathBuf;

use quill_project::{ProjectError, ProjectService, Workspace};

use crate::ExitStatus;

#[derive(clap::Args)]
pub struct Args {
    /// Name of the project that contains the file
    #[clap(long, short = 'p')]
    project: String,

    /// Path of the file, relative to the project root or absolute
    #[clap(long, short = 'f')]
    file: PathBuf,

    /// Directory that contains the project manifests [default: current directory]
    #[clap(long)]
    workspace: Option<PathBuf>,
}

/// Reloads a file of a project so the project's view of it matches the contents on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshFileCommand {
    pub project: String,
    pub file: PathBuf,
}

impl RefreshFileCommand {
    /// Resolves the file in the project and refreshes it. The result is always empty, errors of
    /// the `service` are returned as is.
    pub fn execute(
        &self,
        service: &mut (impl ProjectService + ?Sized),
    ) -> Result<String, ProjectError> {
        let file = service.resolve(&self.project, &self.file)?;
        service.refresh(&file)?;
        Ok(String::new())
    }
}

/// This method is invoked when the executable is run with the `refresh-file` argument.
pub fn refresh_file(args: Args) -> Result<ExitStatus, anyhow::Error> {
    let workspace_root = super::workspace_root(args.workspace)?;
    let mut workspace = Workspace::load(&workspace_root)?;

    let command = RefreshFileCommand {
        project: args.project,
        file: args.file,
    };
    log::trace!("executing {:?}", command);

    let output = command.execute(&mut workspace)?;
    print!("{output}");
    Ok(ExitStatus::Success)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use quill_project::{FileHandle, ProjectError, ProjectService, Workspace};

    use super::RefreshFileCommand;

    /// Records the calls made to it, and fails them on request.
    #[derive(Default)]
    struct RecordingService {
        inner: Workspace,
        calls: Vec<String>,
        fail_refresh: bool,
    }

    impl ProjectService for RecordingService {
        fn resolve(&mut self, project: &str, path: &Path) -> Result<FileHandle, ProjectError> {
            self.calls
                .push(format!("resolve {project} {}", path.display()));
            self.inner.resolve(project, path)
        }

        fn refresh(&mut self, file: &FileHandle) -> Result<(), ProjectError> {
            self.calls.push(format!("refresh {}", file.relative_path()));
            if self.fail_refresh {
                return Err(ProjectError::Io {
                    path: file.path().to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                });
            }
            self.inner.refresh(file)
        }
    }

    fn service_with_project() -> (tempfile::TempDir, RecordingService) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(
            dir.path().join("quill.toml"),
            "[project]\nname = \"demo\"\nversion = \"0.1.0\"\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("src/lib.rs"), "pub fn f() {}\n").unwrap();

        let service = RecordingService {
            inner: Workspace::load(dir.path()).unwrap(),
            ..RecordingService::default()
        };
        (dir, service)
    }

    fn command(project: &str, file: &str) -> RefreshFileCommand {
        RefreshFileCommand {
            project: project.to_owned(),
            file: PathBuf::from(file),
        }
    }

    #[test]
    fn refreshes_the_resolved_file() {
        let (_dir, mut service) = service_with_project();

        let output = command("demo", "src/lib.rs").execute(&mut service).unwrap();
        assert_eq!(output, "");
        assert_eq!(service.calls, vec!["resolve demo src/lib.rs", "refresh src/lib.rs"]);

        let changes = service.inner.take_changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(
            service.inner.file_contents(changes[0].file_id),
            Some(&b"pub fn f() {}\n"[..])
        );
    }

    #[test]
    fn resolve_errors_propagate() {
        let (_dir, mut service) = service_with_project();

        let err = command("other", "src/lib.rs")
            .execute(&mut service)
            .unwrap_err();
        assert!(matches!(err, ProjectError::UnknownProject(ref name) if name == "other"));
        assert_eq!(service.calls, vec!["resolve other src/lib.rs"]);
    }

    #[test]
    fn refresh_errors_propagate() {
        let (_dir, mut service) = service_with_project();
        service.fail_refresh = true;

        let err = command("demo", "src/lib.rs")
            .execute(&mut service)
            .unwrap_err();
        match err {
            ProjectError::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            err => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    fn works_through_a_trait_object() {
        let (_dir, mut service) = service_with_project();
        let service: &mut dyn ProjectService = &mut service;

        assert_eq!(command("demo", "src/lib.rs").execute(service).unwrap(), "");
    }
}
