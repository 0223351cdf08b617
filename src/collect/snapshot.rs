use std::sync::Arc;

use serde::Serialize;

use crate::{
    component::Component,
    issues::{Issue, RuleType},
};

/// Immutable copy of an issue, taken when the issue was visited.
///
/// Later changes to the engine's `Issue` do not reach the snapshot. Equality
/// and hashing cover the component and every copied issue field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSnapshot {
    component: Arc<Component>,
    #[serde(rename = "type")]
    rule_type: Option<RuleType>,
    status: Option<String>,
    severity: Option<String>,
    key: Option<String>,
    line: Option<u32>,
    message: Option<String>,
    resolution: Option<String>,
    effort_in_minutes: Option<u64>,
}

impl IssueSnapshot {
    /// Copy every field of `issue` as it is right now. Values are not validated.
    pub fn from_issue(component: &Arc<Component>, issue: &Issue) -> Self {
        Self {
            component: Arc::clone(component),
            rule_type: Some(issue.rule_type),
            status: issue.status.clone(),
            severity: issue.severity.clone(),
            key: Some(issue.key.clone()),
            line: issue.line,
            message: issue.message.clone(),
            resolution: issue.resolution.clone(),
            effort_in_minutes: issue.effort_in_minutes,
        }
    }

    /// A snapshot that records only the component; every issue field is absent.
    pub fn placeholder(component: &Arc<Component>) -> Self {
        Self {
            component: Arc::clone(component),
            rule_type: None,
            status: None,
            severity: None,
            key: None,
            line: None,
            message: None,
            resolution: None,
            effort_in_minutes: None,
        }
    }

    pub fn component(&self) -> &Arc<Component> {
        &self.component
    }

    /// Always present unless built with [`IssueSnapshot::placeholder`].
    pub fn rule_type(&self) -> Option<RuleType> {
        self.rule_type
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn severity(&self) -> Option<&str> {
        self.severity.as_deref()
    }

    /// Always present unless built with [`IssueSnapshot::placeholder`].
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Line number (1-indexed), absent when the issue is not line-scoped.
    pub fn line(&self) -> Option<u32> {
        self.line
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn resolution(&self) -> Option<&str> {
        self.resolution.as_deref()
    }

    pub fn effort_in_minutes(&self) -> Option<u64> {
        self.effort_in_minutes
    }

    /// Unresolved and in one of `open_statuses`.
    pub fn is_open(&self, open_statuses: &[String]) -> bool {
        self.resolution.is_none()
            && self
                .status
                .as_deref()
                .is_some_and(|status| open_statuses.iter().any(|s| s == status))
    }
}
