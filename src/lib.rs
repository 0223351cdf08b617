//! Issue collector for post-analysis reporting
//!
//! During a static-analysis run the engine walks the component tree and calls a
//! visitor once per issue. This crate provides the visitor that records an
//! immutable snapshot of every issue, so report stages such as pull request
//! decoration can read them after the engine has reused or dropped its own
//! issue records.
//!
//! ## Module Structure
//!
//! - `collect`: Issue snapshots, the visitor trait and the collector
//! - `component`: Component references shared with the engine's tree
//! - `config`: Summary configuration parsing and validation
//! - `issues`: The engine's mutable issue record and rule types
//! - `summary`: Aggregate counts over collected issues

pub mod collect;
pub mod component;
pub mod config;
pub mod issues;
pub mod summary;
