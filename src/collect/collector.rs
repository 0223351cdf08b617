use std::sync::Arc;

use tracing::trace;

use crate::{
    collect::{IssueSnapshot, IssueVisitor},
    component::Component,
    config::Config,
    issues::Issue,
    summary::IssueSummary,
};

/// Collects a snapshot of every visited issue, in visit order.
///
/// Created fresh for each analysis run. Nothing is filtered or deduplicated:
/// each `on_issue` call appends exactly one snapshot.
#[derive(Debug, Default)]
pub struct IssueCollector {
    issues: Vec<IssueSnapshot>,
}

impl IssueCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots collected so far, in the order they were visited.
    pub fn issues(&self) -> &[IssueSnapshot] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Hand the collected snapshots over once the traversal has finished.
    pub fn into_issues(self) -> Vec<IssueSnapshot> {
        self.issues
    }

    pub fn summarize(&self, config: &Config) -> IssueSummary {
        IssueSummary::from_snapshots(&self.issues, config)
    }
}

impl IssueVisitor for IssueCollector {
    fn on_issue(&mut self, component: &Arc<Component>, issue: &Issue) {
        trace!(component = %component, issue = %issue.key, "collecting issue");
        self.issues.push(IssueSnapshot::from_issue(component, issue));
    }
}
