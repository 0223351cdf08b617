use std::sync::Arc;

use crate::{component::Component, issues::Issue};

/// Callbacks invoked by the analysis engine while it walks the component tree.
///
/// Calls arrive sequentially on a single thread, in the engine's traversal
/// order. The `issue` reference is only valid for the duration of the call.
pub trait IssueVisitor {
    /// Called before any issue of `component` is visited.
    fn before_component(&mut self, _component: &Arc<Component>) {}

    /// Called once per issue raised against `component`.
    fn on_issue(&mut self, component: &Arc<Component>, issue: &Issue);

    /// Called after all issues of `component` were visited.
    fn after_component(&mut self, _component: &Arc<Component>) {}
}
