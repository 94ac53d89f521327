//! Reports: per-variant verdicts and the run across all variants.
//!
//! A [`Report`] holds one [`CheckOutcome`] per check and fails as a whole if
//! any single outcome fails. There is no partial credit and no check can
//! influence another.
//!
//! A [`ValidationRun`] collects reports for several variants. A variant whose
//! checks could not be evaluated at all is recorded as a failure alongside
//! them; the run fails if anything in it failed.

use std::fmt;

use crate::check::{Check, CheckOutcome};
use crate::error::{Result, ThemeError};
use crate::palette::Palette;

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// The outcome of every check for one theme variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    variant: String,
    outcomes: Vec<CheckOutcome>,
    failed: bool,
}

impl Report {
    /// Evaluate `checks` in order against `palette`.
    ///
    /// # Errors
    ///
    /// Propagates the first check that cannot be evaluated (missing role or
    /// malformed color). Failing thresholds are recorded, not returned.
    pub fn evaluate(variant: impl Into<String>, palette: &Palette, checks: &[Check]) -> Result<Self> {
        let outcomes = checks
            .iter()
            .map(|check| check.evaluate(palette))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_outcomes(variant, outcomes))
    }

    /// Build a report from already-measured outcomes.
    #[must_use]
    pub fn from_outcomes(variant: impl Into<String>, outcomes: Vec<CheckOutcome>) -> Self {
        let failed = outcomes.iter().any(|outcome| !outcome.pass);
        Self {
            variant: variant.into(),
            outcomes,
            failed,
        }
    }

    #[must_use]
    pub fn variant(&self) -> &str {
        &self.variant
    }

    #[must_use]
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// Whether any check failed.
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.failed
    }

    /// Outcomes that did not meet their minimum.
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.pass)
    }

}

impl fmt::Display for Report {
    /// The variant name, then one line per check.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.variant)?;
        for outcome in &self.outcomes {
            writeln!(f, "{outcome}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ValidationRun
// ---------------------------------------------------------------------------

/// A variant whose checks could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantFailure {
    pub variant: String,
    pub error: ThemeError,
}

/// Reports and evaluation errors for a set of variants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationRun {
    pub reports: Vec<Report>,
    pub errors: Vec<VariantFailure>,
}

impl ValidationRun {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result of validating one variant.
    pub fn record(&mut self, variant: &str, result: Result<Report>) {
        match result {
            Ok(report) => {
                tracing::info!(
                    variant,
                    checks = report.outcomes().len(),
                    failures = report.failures().count(),
                    "variant validated"
                );
                self.reports.push(report);
            }
            Err(error) => {
                tracing::debug!(variant, %error, "variant could not be evaluated");
                self.errors.push(VariantFailure {
                    variant: variant.to_string(),
                    error,
                });
            }
        }
    }

    /// Whether any variant failed a check or could not be evaluated.
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.errors.is_empty() || self.reports.iter().any(Report::failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CheckKind;
    use pretty_assertions::assert_eq;

    fn outcome(label: &str, measured: f64, minimum: f64) -> CheckOutcome {
        CheckOutcome::new(label, CheckKind::Contrast, measured, minimum)
    }

    fn palette() -> Palette {
        [
            ("editor.background", "#141413"),
            ("editor.foreground", "#EAE7DF"),
            ("syntax.comment", "#2a2926"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn all_passing_report_passes() {
        let report = Report::from_outcomes(
            "dark",
            vec![outcome("A", 7.0, 7.0), outcome("B", 12.0, 4.5)],
        );
        assert!(!report.failed());
        assert_eq!(report.failures().count(), 0);
    }

    #[test]
    fn one_failure_fails_report() {
        let report = Report::from_outcomes(
            "dark",
            vec![
                outcome("A", 8.0, 4.5),
                outcome("B", 3.0, 4.5),
                outcome("C", 5.0, 4.5),
            ],
        );
        assert!(report.failed());
        let failed: Vec<_> = report.failures().map(|o| o.label.as_str()).collect();
        assert_eq!(failed, ["B"]);
    }

    #[test]
    fn empty_report_passes() {
        assert!(!Report::from_outcomes("empty", Vec::new()).failed());
    }

    #[test]
    fn evaluate_keeps_check_order() {
        let checks = [
            Check::contrast("Editor foreground", "editor.foreground", "editor.background", 7.0),
            Check::contrast("Comment", "syntax.comment", "editor.background", 4.5),
        ];
        let report = Report::evaluate("dark", &palette(), &checks).unwrap();
        assert_eq!(report.variant(), "dark");
        assert!(report.failed());
        assert_eq!(
            report.to_string(),
            "dark\n  PASS  Editor foreground: 14.92 (min 7.00)\n  FAIL  Comment: 1.27 (min 4.50)\n"
        );
    }

    #[test]
    fn evaluate_propagates_errors() {
        let checks = [
            Check::contrast("Editor foreground", "editor.foreground", "editor.background", 7.0),
            Check::contrast("String", "syntax.string", "editor.background", 4.5),
        ];
        let err = Report::evaluate("dark", &palette(), &checks).unwrap_err();
        assert_eq!(err.role(), "syntax.string");
    }

    #[test]
    fn run_fails_on_any_failed_report() {
        let mut run = ValidationRun::new();
        run.record("dark", Ok(Report::from_outcomes("dark", vec![outcome("A", 9.0, 4.5)])));
        assert!(!run.failed());
        run.record("light", Ok(Report::from_outcomes("light", vec![outcome("A", 2.0, 4.5)])));
        assert!(run.failed());
        assert_eq!(run.reports.len(), 2);
    }

    #[test]
    fn run_fails_on_evaluation_error() {
        let mut run = ValidationRun::new();
        run.record("dark", Ok(Report::from_outcomes("dark", vec![outcome("A", 9.0, 4.5)])));
        run.record(
            "light",
            Err(ThemeError::UnknownRole {
                role: "editor.background".to_string(),
            }),
        );
        assert!(run.failed());
        assert_eq!(run.errors.len(), 1);
        assert_eq!(run.errors[0].variant, "light");
    }

    #[test]
    fn empty_run_passes() {
        assert!(!ValidationRun::new().failed());
    }
}
