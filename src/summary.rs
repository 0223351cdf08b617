//! Aggregate counts over collected issues for report stages.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::{collect::IssueSnapshot, config::Config, issues::RuleType};

/// Severity bucket for open issues that carry no severity.
pub const UNKNOWN_SEVERITY: &str = "UNKNOWN";

/// Counts derived from a sequence of snapshots.
///
/// `total` counts every snapshot outside excluded components; the remaining
/// figures only cover open issues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSummary {
    pub total: usize,
    pub open: usize,
    pub by_type: BTreeMap<RuleType, usize>,
    pub by_severity: BTreeMap<String, usize>,
    /// Summed effort of open issues, saturating at `u64::MAX`.
    pub effort_in_minutes: u64,
}

impl IssueSummary {
    pub fn from_snapshots(snapshots: &[IssueSnapshot], config: &Config) -> Self {
        // Config is normally validated on load; a bad pattern only disables exclusion.
        let patterns = config.exclusion_patterns().unwrap_or_else(|err| {
            warn!("ignoring excluded components: {:#}", err);
            Vec::new()
        });

        let mut summary = Self::default();
        for snapshot in snapshots {
            let path = snapshot.component().match_path();
            if patterns.iter().any(|p| p.matches(path)) {
                continue;
            }

            summary.total += 1;
            if !snapshot.is_open(&config.open_statuses) {
                continue;
            }

            summary.open += 1;
            if let Some(rule_type) = snapshot.rule_type() {
                *summary.by_type.entry(rule_type).or_default() += 1;
            }
            let severity = snapshot.severity().unwrap_or(UNKNOWN_SEVERITY);
            *summary.by_severity.entry(severity.to_string()).or_default() += 1;
            summary.effort_in_minutes = summary
                .effort_in_minutes
                .saturating_add(snapshot.effort_in_minutes().unwrap_or(0));
        }

        debug!(
            total = summary.total,
            open = summary.open,
            effort = summary.effort_in_minutes,
            "summarized issues"
        );
        summary
    }

    pub fn count_of(&self, rule_type: RuleType) -> usize {
        self.by_type.get(&rule_type).copied().unwrap_or(0)
    }
}
