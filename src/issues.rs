//! Issue records produced by the rule engine.
//!
//! `Issue` is owned and mutated by the analysis engine: it may be updated,
//! reused or dropped after a visitor returns. Visitors that need the data later
//! must copy it (see `collect::IssueSnapshot`).

use std::fmt;

use serde::Serialize;

// ============================================================
// Well-known status and resolution values
// ============================================================

pub const STATUS_OPEN: &str = "OPEN";
pub const STATUS_CONFIRMED: &str = "CONFIRMED";
pub const STATUS_REOPENED: &str = "REOPENED";
pub const STATUS_RESOLVED: &str = "RESOLVED";
pub const STATUS_CLOSED: &str = "CLOSED";

pub const RESOLUTION_FIXED: &str = "FIXED";
pub const RESOLUTION_FALSE_POSITIVE: &str = "FALSE-POSITIVE";
pub const RESOLUTION_WONT_FIX: &str = "WONTFIX";
pub const RESOLUTION_REMOVED: &str = "REMOVED";

// ============================================================
// Rule Type
// ============================================================

/// Classification of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleType {
    CodeSmell,
    Bug,
    Vulnerability,
    SecurityHotspot,
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleType::CodeSmell => write!(f, "code-smell"),
            RuleType::Bug => write!(f, "bug"),
            RuleType::Vulnerability => write!(f, "vulnerability"),
            RuleType::SecurityHotspot => write!(f, "security-hotspot"),
        }
    }
}

// ============================================================
// Issue
// ============================================================

/// A single finding as held by the analysis engine.
///
/// No field is validated here; the rule engine is responsible for the values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Stable unique identifier.
    pub key: String,
    pub rule_type: RuleType,
    pub status: Option<String>,
    pub severity: Option<String>,
    pub resolution: Option<String>,
    /// Line number (1-indexed). `None` when the issue is not line-scoped.
    pub line: Option<u32>,
    pub message: Option<String>,
    /// Estimated remediation cost.
    pub effort_in_minutes: Option<u64>,
}

impl Issue {
    pub fn new(key: impl Into<String>, rule_type: RuleType) -> Self {
        Self {
            key: key.into(),
            rule_type,
            status: None,
            severity: None,
            resolution: None,
            line: None,
            message: None,
            effort_in_minutes: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }

    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = Some(resolution.into());
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_effort_in_minutes(mut self, effort: u64) -> Self {
        self.effort_in_minutes = Some(effort);
        self
    }
}
