use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::issues::{STATUS_CONFIRMED, STATUS_OPEN, STATUS_REOPENED};

/// Settings for summarizing collected issues.
///
/// Never affects what the collector records; only how `IssueSummary` counts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Statuses that count as open when the issue has no resolution.
    #[serde(default = "default_open_statuses")]
    pub open_statuses: Vec<String>,
    /// Glob patterns of component paths left out of the summary.
    #[serde(default)]
    pub excluded_components: Vec<String>,
}

fn default_open_statuses() -> Vec<String> {
    [STATUS_OPEN, STATUS_CONFIRMED, STATUS_REOPENED]
        .map(String::from)
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            open_statuses: default_open_statuses(),
            excluded_components: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if `openStatuses` is empty or a pattern in
    /// `excludedComponents` is not a valid glob.
    pub fn validate(&self) -> Result<()> {
        if self.open_statuses.is_empty() {
            anyhow::bail!("'openStatuses' must list at least one status");
        }

        self.exclusion_patterns()?;

        Ok(())
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(content).context("Failed to parse collector config.")?;
        config.validate()?;
        debug!(
            open_statuses = ?config.open_statuses,
            excluded = config.excluded_components.len(),
            "loaded collector config"
        );
        Ok(config)
    }

    /// Compiled `excludedComponents` patterns.
    pub fn exclusion_patterns(&self) -> Result<Vec<Pattern>> {
        self.excluded_components
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'excludedComponents': \"{}\"", pattern)
                })
            })
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}
