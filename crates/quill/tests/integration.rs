use std::ffi::OsString;
use std::path::Path;

use quill::{run_with_args, ExitStatus};

/// Creates a workspace with a single project called `demo`.
fn create_workspace() -> tempfile::TempDir {
    let workspace = tempfile::Builder::new()
        .prefix("quill_workspace")
        .tempdir()
        .unwrap();
    let project = workspace.path().join("demo");
    std::fs::create_dir_all(project.join("src")).unwrap();
    std::fs::write(
        project.join("quill.toml"),
        "[project]\nname = \"demo\"\nversion = \"0.1.0\"\n",
    )
    .unwrap();
    std::fs::write(project.join("src/main.rs"), "fn main() {}\n").unwrap();
    workspace
}

fn refresh_args(workspace: &Path, project: &str, file: &str) -> Vec<OsString> {
    vec![
        "quill".into(),
        "refresh-file".into(),
        "--workspace".into(),
        workspace.into(),
        "--project".into(),
        project.into(),
        "--file".into(),
        file.into(),
    ]
}

#[test]
fn refresh_file() {
    let workspace = create_workspace();
    let status = run_with_args(refresh_args(workspace.path(), "demo", "src/main.rs")).unwrap();
    assert_eq!(status, ExitStatus::Success);
}

#[test]
fn refresh_file_unknown_project() {
    let workspace = create_workspace();
    let err = run_with_args(refresh_args(workspace.path(), "nope", "src/main.rs")).unwrap_err();
    assert_eq!(err.to_string(), "project 'nope' does not exist");
}

#[test]
fn refresh_file_outside_project() {
    let workspace = create_workspace();
    let err = run_with_args(refresh_args(workspace.path(), "demo", "../escape.rs")).unwrap_err();
    assert!(err.to_string().contains("is not located in project 'demo'"));
}

#[test]
fn projects() {
    let workspace = create_workspace();
    let args: Vec<OsString> = vec![
        "quill".into(),
        "projects".into(),
        "--workspace".into(),
        workspace.path().into(),
    ];
    assert_eq!(run_with_args(args).unwrap(), ExitStatus::Success);
}

#[test]
fn diagnostics_exit_status() {
    let workspace = create_workspace();
    let warnings = workspace.path().join("warnings.json");
    std::fs::write(
        &warnings,
        r#"[{"message": "unused", "filename": "demo/src/main.rs", "line": 1, "column": 4, "warning": true}]"#,
    )
    .unwrap();
    let errors = workspace.path().join("errors.json");
    std::fs::write(
        &errors,
        r#"[{"message": "oops", "filename": "demo/src/main.rs", "line": 0, "column": 0}]"#,
    )
    .unwrap();

    for (input, format, expected) in [
        (&warnings, "pretty", ExitStatus::Success),
        (&warnings, "quickfix", ExitStatus::Success),
        (&errors, "json", ExitStatus::Error),
        (&errors, "pretty", ExitStatus::Error),
    ] {
        let args: Vec<OsString> = vec![
            "quill".into(),
            "diagnostics".into(),
            input.into(),
            "--format".into(),
            format.into(),
            "--color".into(),
            "disable".into(),
        ];
        assert_eq!(run_with_args(args).unwrap(), expected);
    }
}

#[test]
fn diagnostics_invalid_input() {
    let workspace = create_workspace();
    let input = workspace.path().join("broken.json");
    std::fs::write(&input, "{").unwrap();

    let args: Vec<OsString> = vec!["quill".into(), "diagnostics".into(), input.into()];
    let err = run_with_args(args).unwrap_err();
    assert!(err.to_string().starts_with("could not parse diagnostics"));
}
