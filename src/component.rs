//! Component references handed to visitors by the analysis engine.
//!
//! The engine owns the component tree. Visitors and snapshots only hold a
//! shared `Arc<Component>`, so a snapshot never outlives or copies the tree node.

use std::{fmt, sync::Arc};

use serde::Serialize;

/// Kind of node in the analyzed component tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentType {
    Project,
    Directory,
    File,
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentType::Project => write!(f, "project"),
            ComponentType::Directory => write!(f, "directory"),
            ComponentType::File => write!(f, "file"),
        }
    }
}

/// A node in the analyzed component tree (project, directory or file).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub uuid: String,
    /// Stable component key (e.g., "my-project:src/lib.rs").
    pub key: String,
    pub component_type: ComponentType,
    pub name: String,
    /// Path relative to the project root. `None` for the project itself.
    pub path: Option<String>,
}

impl Component {
    pub fn new(
        uuid: impl Into<String>,
        key: impl Into<String>,
        component_type: ComponentType,
        name: impl Into<String>,
        path: Option<String>,
    ) -> Arc<Self> {
        Arc::new(Self {
            uuid: uuid.into(),
            key: key.into(),
            component_type,
            name: name.into(),
            path,
        })
    }

    pub fn project(uuid: impl Into<String>, key: impl Into<String>) -> Arc<Self> {
        let key = key.into();
        Self::new(uuid, key.clone(), ComponentType::Project, key, None)
    }

    pub fn directory(
        uuid: impl Into<String>,
        project_key: &str,
        path: impl Into<String>,
    ) -> Arc<Self> {
        Self::scoped(uuid, project_key, ComponentType::Directory, path.into())
    }

    pub fn file(uuid: impl Into<String>, project_key: &str, path: impl Into<String>) -> Arc<Self> {
        Self::scoped(uuid, project_key, ComponentType::File, path.into())
    }

    fn scoped(
        uuid: impl Into<String>,
        project_key: &str,
        component_type: ComponentType,
        path: String,
    ) -> Arc<Self> {
        let name = path.rsplit('/').next().unwrap_or(&path).to_string();
        Self::new(
            uuid,
            format!("{}:{}", project_key, path),
            component_type,
            name,
            Some(path),
        )
    }

    /// Path used for matching, falling back to the key for components without one.
    pub fn match_path(&self) -> &str {
        self.path.as_deref().unwrap_or(&self.key)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}
