use std::io::{self, Write};

use annotate_snippets::{Annotation, AnnotationType, Renderer, Slice, Snippet, SourceAnnotation};
use quill_diagnostics::{Diagnostic, Severity};
use text_size::TextSize;

use crate::{DisplayColor, LineIndex};

/// Formats a diagnostic as a line of an editor quickfix list:
/// `filename|line col column|message|e`, with `w` instead of `e` for warnings.
pub fn quickfix_line(diagnostic: &Diagnostic) -> String {
    format!(
        "{}|{} col {}|{}|{}",
        diagnostic.filename().unwrap_or_default(),
        diagnostic.line_number(),
        diagnostic.column_number(),
        diagnostic.message().replace(['\r', '\n'], " "),
        diagnostic.severity().code()
    )
}

/// Writes every diagnostic as a quickfix line.
pub fn emit_quickfix<'a>(
    diagnostics: impl IntoIterator<Item = &'a Diagnostic>,
    writer: &mut dyn Write,
) -> io::Result<()> {
    for diagnostic in diagnostics {
        writeln!(writer, "{}", quickfix_line(diagnostic))?;
    }
    Ok(())
}

/// Writes the diagnostics as a JSON array.
pub fn emit_json<'a>(
    diagnostics: impl IntoIterator<Item = &'a Diagnostic>,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    let diagnostics = diagnostics.into_iter().collect::<Vec<_>>();
    serde_json::to_writer_pretty(&mut *writer, &diagnostics)
        .map_err(|e| anyhow::anyhow!("could not serialize diagnostics: {}", e))?;
    writeln!(writer)?;
    Ok(())
}

/// Emits a diagnostic by writing an annotated snippet of `source` to the specified `writer`.
/// Without a known end the character at the start is annotated, or the one before it if the start
/// is at the end of a line. When the diagnostic does not point at any character of `source`, only
/// the one-line form of the diagnostic is written.
pub fn emit_snippet(
    diagnostic: &Diagnostic,
    source: &str,
    writer: &mut dyn Write,
    display_color: DisplayColor,
) -> io::Result<()> {
    let line_index = LineIndex::new(source);
    let start = line_index.offset(
        source,
        diagnostic.line_number(),
        diagnostic.column_number(),
    );
    let span = diagnostic
        .end()
        .map(|(line, column)| line_index.offset(source, line, column))
        .filter(|&end| end > start)
        .map(|end| (start, end))
        .or_else(|| single_char_span(source, start));
    let Some((start, end)) = span else {
        return writeln!(writer, "{diagnostic}");
    };

    let first_line = line_index.line_of(start);
    let line_offset = line_index.line_offset(first_line);

    let annotation_type = match diagnostic.severity() {
        Severity::Error => AnnotationType::Error,
        Severity::Warning => AnnotationType::Warning,
    };
    let snippet = Snippet {
        title: Some(Annotation {
            id: None,
            label: Some(diagnostic.message()),
            annotation_type,
        }),
        footer: vec![],
        slices: vec![Slice {
            source: &source[line_offset..],
            line_start: first_line + 1,
            origin: diagnostic.filename(),
            annotations: vec![SourceAnnotation {
                range: (
                    usize::from(start) - line_offset,
                    usize::from(end) - line_offset,
                ),
                label: diagnostic.message(),
                annotation_type,
            }],
            fold: true,
        }],
    };

    let renderer = if display_color.should_enable() {
        Renderer::styled()
    } else {
        Renderer::plain()
    };
    let display = renderer.render(snippet);
    writeln!(writer, "{display}")
}

/// Returns the span of the character at `offset`, or of the one before it when `offset` is at a
/// line terminator or the end of `source`. Line terminators are never part of the span.
fn single_char_span(source: &str, offset: TextSize) -> Option<(TextSize, TextSize)> {
    let offset_idx = usize::from(offset);
    let is_line_char = |c: &char| !matches!(c, '\n' | '\r');
    if let Some(c) = source[offset_idx..].chars().next().filter(is_line_char) {
        return Some((offset, offset + TextSize::of(c)));
    }
    source[..offset_idx]
        .chars()
        .next_back()
        .filter(is_line_char)
        .map(|c| (offset - TextSize::of(c), offset))
}
