use rustc_hash::{FxHashMap, FxHashSet};

use crate::Diagnostic;

/// The difference between the diagnostics of two analysis runs.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DiagnosticDiff<'a> {
    /// Diagnostics that only exist in the current run
    pub added: Vec<&'a Diagnostic>,

    /// Diagnostics that only exist in the previous run
    pub removed: Vec<&'a Diagnostic>,

    /// Diagnostics that exist in both runs but with a different severity
    pub severity_changed: Vec<SeverityChange<'a>>,
}

/// A diagnostic that was reported in both runs with a different severity.
#[derive(Debug, PartialEq, Eq)]
pub struct SeverityChange<'a> {
    pub previous: &'a Diagnostic,
    pub current: &'a Diagnostic,
}

impl DiagnosticDiff<'_> {
    /// Returns true if both runs reported the same diagnostics with the same severities.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.severity_changed.is_empty()
    }
}

/// Computes which diagnostics were added, removed or changed severity between the `previous` and
/// the `current` analysis run. Diagnostics are matched using their equality, so a change in
/// severity alone does not make a diagnostic new.
pub fn diff<'a>(previous: &'a [Diagnostic], current: &'a [Diagnostic]) -> DiagnosticDiff<'a> {
    let mut previous_by_key: FxHashMap<&Diagnostic, &Diagnostic> = FxHashMap::default();
    for diagnostic in previous {
        previous_by_key.entry(diagnostic).or_insert(diagnostic);
    }

    let mut result = DiagnosticDiff::default();
    let mut seen = FxHashSet::default();
    for diagnostic in current {
        if !seen.insert(diagnostic) {
            continue;
        }
        match previous_by_key.get(diagnostic) {
            None => result.added.push(diagnostic),
            Some(&old) if old.severity() != diagnostic.severity() => {
                result.severity_changed.push(SeverityChange {
                    previous: old,
                    current: diagnostic,
                });
            }
            Some(_) => {}
        }
    }

    result.removed = unique(previous)
        .filter(|diagnostic| !seen.contains(diagnostic))
        .collect();

    result
}

/// Iterates over `diagnostics`, skipping every diagnostic that is equal to one that was returned
/// before.
pub fn unique<'a>(diagnostics: &'a [Diagnostic]) -> impl Iterator<Item = &'a Diagnostic> + 'a {
    let mut seen = FxHashSet::default();
    diagnostics
        .iter()
        .filter(move |&diagnostic| seen.insert(diagnostic))
}

#[cfg(test)]
mod tests {
    use super::{diff, unique, SeverityChange};
    use crate::Diagnostic;

    fn diagnostic(message: &str, line: i32, warning: bool) -> Diagnostic {
        Diagnostic::new(
            Some(message.to_owned()),
            Some("main.rs".to_owned()),
            line,
            1,
            warning,
        )
    }

    #[test]
    fn identical_runs() {
        let run = vec![diagnostic("a", 1, false), diagnostic("b", 2, true)];
        assert!(diff(&run, &run.clone()).is_empty());
    }

    #[test]
    fn added_and_removed() {
        let previous = vec![diagnostic("a", 1, false), diagnostic("b", 2, false)];
        let current = vec![diagnostic("b", 2, false), diagnostic("c", 3, false)];

        let result = diff(&previous, &current);
        assert_eq!(result.added, vec![&current[1]]);
        assert_eq!(result.removed, vec![&previous[0]]);
        assert!(result.severity_changed.is_empty());
    }

    #[test]
    fn severity_change_is_not_an_addition() {
        let previous = vec![diagnostic("unused variable", 4, true)];
        let current = vec![diagnostic("unused variable", 4, false)];

        let result = diff(&previous, &current);
        assert!(result.added.is_empty());
        assert!(result.removed.is_empty());
        assert_eq!(
            result.severity_changed,
            vec![SeverityChange {
                previous: &previous[0],
                current: &current[0],
            }]
        );
    }

    #[test]
    fn duplicates_collapse() {
        let previous = vec![diagnostic("a", 1, false), diagnostic("a", 1, false)];
        let current = vec![
            diagnostic("b", 1, false),
            diagnostic("b", 1, true),
            diagnostic("b", 1, false),
        ];

        let result = diff(&previous, &current);
        assert_eq!(result.added, vec![&current[0]]);
        assert_eq!(result.removed, vec![&previous[0]]);
    }

    #[test]
    fn unique_keeps_first_occurrence() {
        let diagnostics = vec![
            diagnostic("a", 1, true),
            diagnostic("b", 2, false),
            diagnostic("a", 1, false),
        ];
        let unique = unique(&diagnostics).collect::<Vec<_>>();
        assert_eq!(unique.len(), 2);
        assert!(unique[0].is_warning());
        assert_eq!(unique[1].message(), "b");
    }
}
