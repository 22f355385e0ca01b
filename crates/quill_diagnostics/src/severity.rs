use std::fmt;

/// Defines the severity of a diagnostic.
///
/// The severity is not part of the identity of a [`crate::Diagnostic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Returns the severity that matches the `warning` flag.
    pub fn from_warning(warning: bool) -> Self {
        if warning {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    /// Returns true if this is [`Severity::Warning`].
    pub fn is_warning(self) -> bool {
        matches!(self, Severity::Warning)
    }

    /// Returns the single letter code editors use in quickfix lists.
    pub fn code(self) -> char {
        match self {
            Severity::Error => 'e',
            Severity::Warning => 'w',
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}
