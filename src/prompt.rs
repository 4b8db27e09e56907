// src/prompt.rs
//! The data contract the hook layer uses to classify a finding set as
//! reviewed/false-positive and, on a `reviewed` verdict, attach a
//! justification. The core never prompts interactively itself -- it only
//! defines the trait and ships the trivial non-interactive implementation
//! headless callers need.

use serde::{Deserialize, Serialize};

use crate::detect::Finding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Reviewed,
    FalsePositive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationDecision {
    pub proceed: bool,
    pub classification: Classification,
    pub justification: Option<String>,
}

impl ValidationDecision {
    /// A `reviewed` decision requires a non-empty justification;
    /// constructing one without it is a caller bug, so this normalizes
    /// rather than panics.
    #[must_use]
    pub fn reviewed(justification: impl Into<String>) -> Self {
        let justification = justification.into();
        let justification = if justification.trim().is_empty() {
            None
        } else {
            Some(justification)
        };
        Self {
            proceed: justification.is_some(),
            classification: Classification::Reviewed,
            justification,
        }
    }

    #[must_use]
    pub fn false_positive() -> Self {
        Self {
            proceed: true,
            classification: Classification::FalsePositive,
            justification: None,
        }
    }

    #[must_use]
    pub fn abort() -> Self {
        Self {
            proceed: false,
            classification: Classification::Reviewed,
            justification: None,
        }
    }
}

/// Groups a finding list by `kind`, in first-seen order, the shape the
/// hook layer is handed before it prompts the user.
#[must_use]
pub fn group_by_kind(findings: &[Finding]) -> Vec<(String, Vec<Finding>)> {
    let mut groups: Vec<(String, Vec<Finding>)> = Vec::new();
    for finding in findings {
        match groups.iter_mut().find(|(kind, _)| *kind == finding.kind) {
            Some((_, bucket)) => bucket.push(finding.clone()),
            None => groups.push((finding.kind.clone(), vec![finding.clone()])),
        }
    }
    groups
}

/// The interface the hook layer implements to classify a finding set and
/// report back a decision. The core calls this; it never reads stdin or
/// writes prompts itself.
pub trait ValidationPrompt {
    fn classify(&self, findings: &[Finding]) -> ValidationDecision;
}

/// A non-interactive implementation for headless callers (CI, `--diff`
/// one-shot runs): always proceeds, classifying every finding set as a
/// false positive rather than blocking on input that will never arrive.
pub struct AutoApprove;

impl ValidationPrompt for AutoApprove {
    fn classify(&self, _findings: &[Finding]) -> ValidationDecision {
        ValidationDecision::false_positive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::DetectionMethod;

    fn sample_finding(kind: &str) -> Finding {
        Finding {
            path: "a.py".to_string(),
            line_number: 1,
            line: "x".to_string(),
            matched: "x".to_string(),
            kind: kind.to_string(),
            entropy: None,
            detection_method: DetectionMethod::PatternMatch,
            variable_name: None,
        }
    }

    #[test]
    fn reviewed_without_justification_does_not_proceed() {
        let decision = ValidationDecision::reviewed("");
        assert!(!decision.proceed);
        assert!(decision.justification.is_none());
    }

    #[test]
    fn reviewed_with_justification_proceeds() {
        let decision = ValidationDecision::reviewed("rotated after this commit");
        assert!(decision.proceed);
        assert_eq!(
            decision.justification.as_deref(),
            Some("rotated after this commit")
        );
    }

    #[test]
    fn auto_approve_always_proceeds_as_false_positive() {
        let decision = AutoApprove.classify(&[sample_finding("AWS Access Key ID")]);
        assert!(decision.proceed);
        assert_eq!(decision.classification, Classification::FalsePositive);
    }

    #[test]
    fn group_by_kind_buckets_findings_in_first_seen_order() {
        let findings = vec![
            sample_finding("JWT Token"),
            sample_finding("AWS Access Key ID"),
            sample_finding("JWT Token"),
        ];
        let groups = group_by_kind(&findings);
        assert_eq!(groups[0].0, "JWT Token");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "AWS Access Key ID");
        assert_eq!(groups[1].1.len(), 1);
    }
}
