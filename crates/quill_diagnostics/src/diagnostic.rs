use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde_derive::{Deserialize, Serialize};

use crate::{Severity, UNKNOWN_POSITION};

/// A single finding reported by a compiler or linter against a source file.
///
/// The start of a diagnostic is always a valid 1-based position: line and column values that are
/// not strictly positive are replaced by `1` when the diagnostic is constructed. The end position
/// is stored as given, a non-positive value means the end is not known.
///
/// Two diagnostics are equal if their file, start, end and message are equal. The severity is not
/// part of the comparison nor of the hash.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "DiagnosticRepr", into = "DiagnosticRepr")]
pub struct Diagnostic {
    message: Option<String>,
    filename: Option<String>,
    line: i32,
    column: i32,
    end_line: i32,
    end_column: i32,
    severity: Severity,
}

impl Diagnostic {
    /// Constructs a new diagnostic of which the end position is unknown.
    pub fn new(
        message: Option<String>,
        filename: Option<String>,
        line: i32,
        column: i32,
        warning: bool,
    ) -> Self {
        Self::with_end(
            message,
            filename,
            line,
            column,
            UNKNOWN_POSITION,
            UNKNOWN_POSITION,
            warning,
        )
    }

    /// Constructs a new diagnostic that spans from `line:column` up to `end_line:end_column`.
    pub fn with_end(
        message: Option<String>,
        filename: Option<String>,
        line: i32,
        column: i32,
        end_line: i32,
        end_column: i32,
        warning: bool,
    ) -> Self {
        Diagnostic {
            message,
            filename,
            line: first_if_not_positive(line),
            column: first_if_not_positive(column),
            end_line,
            end_column,
            severity: Severity::from_warning(warning),
        }
    }

    /// Returns the message of the diagnostic, or an empty string if it has none.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    /// Returns the name of the file the diagnostic applies to.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Returns the 1-based line on which the diagnostic starts.
    pub fn line_number(&self) -> i32 {
        self.line
    }

    /// Returns the 1-based column at which the diagnostic starts.
    pub fn column_number(&self) -> i32 {
        self.column
    }

    /// Returns the line on which the diagnostic ends, as it was supplied.
    pub fn end_line_number(&self) -> i32 {
        self.end_line
    }

    /// Returns the column at which the diagnostic ends, as it was supplied.
    pub fn end_column_number(&self) -> i32 {
        self.end_column
    }

    /// Returns the end position as a `(line, column)` pair if both are known.
    pub fn end(&self) -> Option<(i32, i32)> {
        (self.end_line > 0 && self.end_column > 0).then_some((self.end_line, self.end_column))
    }

    pub fn is_warning(&self) -> bool {
        self.severity.is_warning()
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Compares this diagnostic with a value of any type. Values that are not a `Diagnostic` are
    /// never equal.
    pub fn eq_dyn(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Diagnostic>()
            .is_some_and(|other| self == other)
    }
}

fn first_if_not_positive(value: i32) -> i32 {
    if value > 0 {
        value
    } else {
        1
    }
}

impl PartialEq for Diagnostic {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.filename == other.filename
            && self.line == other.line
            && self.column == other.column
            && self.end_line == other.end_line
            && self.end_column == other.end_column
            && self.message() == other.message()
    }
}

impl Eq for Diagnostic {}

impl Hash for Diagnostic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.filename.hash(state);
        self.line.hash(state);
        self.column.hash(state);
        self.end_line.hash(state);
        self.end_column.hash(state);
        self.message().hash(state);
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(filename) = self.filename() {
            write!(f, "{filename}:")?;
        }
        write!(
            f,
            "{}:{}: {}: {}",
            self.line,
            self.column,
            self.severity,
            self.message()
        )
    }
}

/// The serialized form of a [`Diagnostic`]. Deserializing goes through [`Diagnostic::with_end`]
/// so the start position is normalized.
#[derive(Serialize, Deserialize)]
struct DiagnosticRepr {
    message: Option<String>,
    filename: Option<String>,
    line: i32,
    column: i32,
    #[serde(default = "unknown_position")]
    end_line: i32,
    #[serde(default = "unknown_position")]
    end_column: i32,
    #[serde(default)]
    warning: bool,
}

fn unknown_position() -> i32 {
    UNKNOWN_POSITION
}

impl From<DiagnosticRepr> for Diagnostic {
    fn from(repr: DiagnosticRepr) -> Self {
        Diagnostic::with_end(
            repr.message,
            repr.filename,
            repr.line,
            repr.column,
            repr.end_line,
            repr.end_column,
            repr.warning,
        )
    }
}

impl From<Diagnostic> for DiagnosticRepr {
    fn from(diagnostic: Diagnostic) -> Self {
        DiagnosticRepr {
            warning: diagnostic.is_warning(),
            message: diagnostic.message,
            filename: diagnostic.filename,
            line: diagnostic.line,
            column: diagnostic.column,
            end_line: diagnostic.end_line,
            end_column: diagnostic.end_column,
        }
    }
}
