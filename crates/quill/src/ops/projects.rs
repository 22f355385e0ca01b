use std::io::Write;
use std::path::PathBuf;

use quill_project::Workspace;

use crate::ExitStatus;

#[derive(clap::Args)]
pub struct Args {
    /// Directory that contains the project manifests [default: current directory]
    #[clap(long)]
    workspace: Option<PathBuf>,
}

/// Lists every project of the workspace as `name vversion (root)`.
pub fn projects(args: Args) -> Result<ExitStatus, anyhow::Error> {
    let workspace_root = super::workspace_root(args.workspace)?;
    let workspace = Workspace::load(&workspace_root)?;

    let stdout = std::io::stdout();
    list_projects(&workspace, &mut stdout.lock())?;
    Ok(ExitStatus::Success)
}

fn list_projects(workspace: &Workspace, writer: &mut dyn Write) -> std::io::Result<()> {
    for project in workspace.projects() {
        writeln!(writer, "{} ({})", project, project.root().display())?;
    }
    Ok(())
}
