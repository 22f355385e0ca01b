use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};

use quill_diagnostics::{unique, Diagnostic, Severity};
use quill_diagnostics_output::{emit_json, emit_quickfix, emit_snippet, DisplayColor};

use crate::ExitStatus;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum UseColor {
    Disable,
    Enable,
    Auto,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One `file|line col column|message|e` line per diagnostic
    Quickfix,
    Json,
    /// Annotated source snippets
    Pretty,
}

#[derive(clap::Args)]
pub struct Args {
    /// JSON file that contains an array of diagnostics
    input: PathBuf,

    /// Output format
    #[clap(long, value_enum, default_value_t = Format::Quickfix)]
    format: Format,

    /// Use color in output
    #[clap(long, value_enum)]
    color: Option<UseColor>,
}

/// This method is invoked when the executable is run with the `diagnostics` argument. Duplicate
/// diagnostics are only rendered once. Exits with an error status if any of the diagnostics is an
/// error.
pub fn diagnostics(args: Args) -> Result<ExitStatus, anyhow::Error> {
    let display_color = args
        .color
        .map(|clr| match clr {
            UseColor::Disable => DisplayColor::Disable,
            UseColor::Enable => DisplayColor::Enable,
            UseColor::Auto => DisplayColor::Auto,
        })
        .or_else(|| {
            env::var("QUILL_TERMINAL_COLOR")
                .map(|value| DisplayColor::from_setting(&value))
                .ok()
        })
        .unwrap_or(DisplayColor::Auto);

    let contents = std::fs::read_to_string(&args.input).map_err(|e| {
        anyhow::anyhow!(
            "could not read diagnostics from '{}': {}",
            args.input.display(),
            e
        )
    })?;
    let diagnostics: Vec<Diagnostic> = serde_json::from_str(&contents).map_err(|e| {
        anyhow::anyhow!(
            "could not parse diagnostics in '{}': {}",
            args.input.display(),
            e
        )
    })?;
    log::debug!(
        "read {} diagnostic(s) from {}",
        diagnostics.len(),
        args.input.display()
    );

    let source_root = args.input.parent().unwrap_or_else(|| Path::new(""));
    let stdout = std::io::stdout();
    render(
        &diagnostics,
        args.format,
        source_root,
        display_color,
        &mut stdout.lock(),
    )
}

/// Renders the unique `diagnostics` in the requested format. Relative file names of diagnostics
/// are resolved against `source_root` when source snippets are rendered.
fn render(
    diagnostics: &[Diagnostic],
    format: Format,
    source_root: &Path,
    display_color: DisplayColor,
    writer: &mut dyn Write,
) -> Result<ExitStatus, anyhow::Error> {
    let diagnostics = unique(diagnostics).collect::<Vec<_>>();

    match format {
        Format::Quickfix => emit_quickfix(diagnostics.iter().copied(), writer)?,
        Format::Json => emit_json(diagnostics.iter().copied(), writer)?,
        Format::Pretty => {
            for diagnostic in &diagnostics {
                match read_source(diagnostic, source_root) {
                    Some(source) => emit_snippet(diagnostic, &source, writer, display_color)?,
                    None => writeln!(writer, "{diagnostic}")?,
                }
            }
        }
    }

    let has_error = diagnostics
        .iter()
        .any(|diagnostic| diagnostic.severity() == Severity::Error);
    Ok((!has_error).into())
}

/// Reads the file a diagnostic refers to, if it has one and it can be read.
fn read_source(diagnostic: &Diagnostic, source_root: &Path) -> Option<String> {
    let path = source_root.join(diagnostic.filename()?);
    match std::fs::read_to_string(&path) {
        Ok(source) => Some(source),
        Err(e) => {
            log::warn!("could not read source of {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use quill_diagnostics::Diagnostic;
    use quill_diagnostics_output::DisplayColor;

    use super::{render, Format};
    use crate::ExitStatus;

    fn diagnostic(message: &str, line: i32, warning: bool) -> Diagnostic {
        Diagnostic::new(
            Some(message.to_owned()),
            Some("src/lib.rs".to_owned()),
            line,
            1,
            warning,
        )
    }

    fn render_to_string(
        diagnostics: &[Diagnostic],
        format: Format,
        source_root: &Path,
    ) -> (ExitStatus, String) {
        let mut output = Vec::new();
        let status = render(
            diagnostics,
            format,
            source_root,
            DisplayColor::Disable,
            &mut output,
        )
        .unwrap();
        (status, String::from_utf8(output).unwrap())
    }

    #[test]
    fn quickfix_skips_duplicates() {
        let diagnostics = vec![
            diagnostic("unused", 2, true),
            diagnostic("missing semicolon", 3, false),
            diagnostic("unused", 2, false),
        ];

        let (status, output) = render_to_string(&diagnostics, Format::Quickfix, Path::new(""));
        assert_eq!(status, ExitStatus::Error);
        insta::assert_snapshot!(output, @r"
        src/lib.rs|2 col 1|unused|w
        src/lib.rs|3 col 1|missing semicolon|e
        ");
    }

    #[test]
    fn only_warnings_succeed() {
        let diagnostics = vec![diagnostic("unused", 2, true)];
        let (status, _) = render_to_string(&diagnostics, Format::Json, Path::new(""));
        assert_eq!(status, ExitStatus::Success);

        let (status, output) = render_to_string(&[], Format::Quickfix, Path::new(""));
        assert_eq!(status, ExitStatus::Success);
        assert_eq!(output, "");
    }

    #[test]
    fn pretty_reads_sources() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("src/lib.rs"), "fn a() {}\nfn b() {}\n").unwrap();

        let diagnostics = vec![
            diagnostic("b is never used", 2, true),
            Diagnostic::new(
                Some("file is gone".to_owned()),
                Some("src/missing.rs".to_owned()),
                1,
                1,
                false,
            ),
        ];
        let (status, output) = render_to_string(&diagnostics, Format::Pretty, dir.path());
        assert_eq!(status, ExitStatus::Error);
        assert!(output.contains("warning: b is never used"));
        assert!(output.contains("fn b() {}"));
        assert!(output.contains("src/missing.rs:1:1: error: file is gone"));
    }
}
