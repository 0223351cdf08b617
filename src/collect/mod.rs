//! Issue collection during a component-tree traversal.
//!
//! The analysis engine walks the component tree and calls an [`IssueVisitor`]
//! once per issue. [`IssueCollector`] turns each call into an immutable
//! [`IssueSnapshot`] and keeps them in call order for report stages.

mod collector;
mod snapshot;
mod visitor;

pub use collector::IssueCollector;
pub use snapshot::IssueSnapshot;
pub use visitor::IssueVisitor;
