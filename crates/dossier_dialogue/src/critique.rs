//! Structured critique verdicts.

use serde::{Deserialize, Serialize};

/// The critique stage's decision about the draft response.
///
/// # Examples
///
/// ```
/// use dossier_dialogue::CritiqueVerdict;
///
/// assert!(!CritiqueVerdict::parse("NONE!").needs_refinement());
/// assert!(CritiqueVerdict::parse("QUOTE: ...").needs_refinement());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CritiqueVerdict {
    /// No principle violations were found
    NoViolation,
    /// The critique report describing the violations found
    Violations(String),
}

impl CritiqueVerdict {
    /// Parse the critique model's raw output into a verdict.
    ///
    /// A critique beginning with the 4 bytes "NONE" reads as no violation.
    /// This is a case-sensitive prefix match only, so "NONEXYZ" also counts
    /// as clean; the quirk is pinned by tests and kept deliberately so the
    /// refine rate matches historical behavior.
    pub fn parse(critique: &str) -> Self {
        if critique.starts_with("NONE") {
            Self::NoViolation
        } else {
            Self::Violations(critique.to_string())
        }
    }

    /// Whether the draft should go through the refine stage.
    pub fn needs_refinement(&self) -> bool {
        matches!(self, Self::Violations(_))
    }

    /// The violation report, if any.
    pub fn report(&self) -> Option<&str> {
        match self {
            Self::NoViolation => None,
            Self::Violations(report) => Some(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_none_token() {
        assert_eq!(CritiqueVerdict::parse("NONE!"), CritiqueVerdict::NoViolation);
        assert!(!CritiqueVerdict::parse("NONE!").needs_refinement());
    }

    #[test]
    fn test_prefix_only_quirk() {
        // Prefix match only, so arbitrary suffixes still read as clean.
        assert_eq!(
            CritiqueVerdict::parse("NONEXYZ"),
            CritiqueVerdict::NoViolation
        );
    }

    #[test]
    fn test_case_sensitive() {
        assert!(CritiqueVerdict::parse("none!").needs_refinement());
    }

    #[test]
    fn test_violation_report_captured() {
        let verdict = CritiqueVerdict::parse("QUOTE: \"...\" CRITIQUE: broke character.");
        assert!(verdict.needs_refinement());
        assert_eq!(
            verdict.report(),
            Some("QUOTE: \"...\" CRITIQUE: broke character.")
        );
    }

    #[test]
    fn test_short_output_is_violation() {
        assert!(CritiqueVerdict::parse("NON").needs_refinement());
        assert!(CritiqueVerdict::parse("").needs_refinement());
    }
}
