//! Consistency checks over a token set.
//!
//! Token values are plain literals, so nothing stops an edit from producing a
//! negative radius or from letting `md` drift away from `radius8`. The audit
//! is the static check that catches those authoring mistakes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::border_radius::BorderRadiusTokens;
use crate::token::RadiusToken;

pub const NON_FINITE: &str = "NON_FINITE";
pub const NEGATIVE: &str = "NEGATIVE";
pub const ALIAS_DRIFT: &str = "ALIAS_DRIFT";
pub const DUPLICATE_NAME: &str = "DUPLICATE_NAME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

impl IssueSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
        }
    }
}

/// A problem found in a token set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditIssue {
    /// Check identifier (e.g., "ALIAS_DRIFT").
    pub code: String,
    /// Token the issue is attached to.
    pub token: RadiusToken,
    /// Human-readable message describing the issue.
    pub message: String,
    pub severity: IssueSeverity,
}

/// Result of auditing a token set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Number of tokens inspected.
    pub token_count: usize,
    pub issues: Vec<AuditIssue>,
}

impl AuditReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Audit a token set for invalid values, alias drift and name collisions.
pub fn audit(tokens: &BorderRadiusTokens) -> AuditReport {
    let mut issues = check_unique_names(&RadiusToken::ALL);

    for (token, value) in tokens.entries() {
        let raw = value.get();
        if !value.is_valid() {
            let (code, message) = if raw.is_finite() {
                (NEGATIVE, format!("{token} is negative ({value})"))
            } else {
                (NON_FINITE, format!("{token} is not a finite length ({raw})"))
            };
            issues.push(AuditIssue {
                code: code.to_string(),
                token,
                message,
                severity: IssueSeverity::Error,
            });
        }

        // Non-finite values are reported above, not as drift
        if let Some(canonical) = token.alias_of() {
            let expected = tokens.get(canonical);
            if raw.is_finite() && expected.get().is_finite() && value != expected {
                issues.push(AuditIssue {
                    code: ALIAS_DRIFT.to_string(),
                    token,
                    message: format!(
                        "{token} is {value} but mirrors {canonical}, which is {expected}"
                    ),
                    severity: IssueSeverity::Warning,
                });
            }
        }
    }

    for issue in &issues {
        warn!(
            code = %issue.code,
            token = %issue.token,
            severity = issue.severity.as_str(),
            "{}",
            issue.message
        );
    }

    let report = AuditReport {
        token_count: RadiusToken::ALL.len(),
        issues,
    };
    debug!(
        tokens = report.token_count,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "border radius audit finished"
    );
    report
}

fn check_unique_names(tokens: &[RadiusToken]) -> Vec<AuditIssue> {
    let mut seen = BTreeSet::new();
    let mut issues = Vec::new();
    for &token in tokens {
        if !seen.insert(token.as_str()) {
            issues.push(AuditIssue {
                code: DUPLICATE_NAME.to_string(),
                token,
                message: format!("token name '{token}' is defined more than once"),
                severity: IssueSeverity::Error,
            });
        }
    }
    issues
}
