//! This crate provides the structured diagnostic record that is shared between the producers of
//! diagnostics (compilers, linters) and the consumers that present them to a user.
//!
//! A [`Diagnostic`] is an immutable value. Its equality contract covers the location and message
//! of a finding but not its [`Severity`], which allows consumers to recognize a finding that was
//! upgraded or downgraded between two analysis runs as the same finding. See [`diff`].

mod diagnostic;
mod diff;
mod severity;

pub use self::diagnostic::Diagnostic;
pub use self::diff::{diff, unique, DiagnosticDiff, SeverityChange};
pub use self::severity::Severity;

/// The value stored for an end line or end column when the end of a diagnostic is not known.
pub const UNKNOWN_POSITION: i32 = -1;
