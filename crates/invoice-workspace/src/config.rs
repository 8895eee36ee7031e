//! Workspace configuration.

use serde::{Deserialize, Serialize};

use crate::ids::IdPolicy;

/// Options fixed when a [`Workspace`](crate::Workspace) is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub id_policy: IdPolicy,
    /// Start with the two sample invoices.
    pub seed_samples: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            id_policy: IdPolicy::Monotonic,
            seed_samples: true,
        }
    }
}

impl WorkspaceConfig {
    /// Empty workspace, no samples.
    pub fn empty() -> Self {
        Self {
            seed_samples: false,
            ..Self::default()
        }
    }

    pub fn with_id_policy(mut self, policy: IdPolicy) -> Self {
        self.id_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config: WorkspaceConfig = toml::from_str("").unwrap();
        assert_eq!(config, WorkspaceConfig::default());

        let config: WorkspaceConfig = toml::from_str("id_policy = \"list_length\"").unwrap();
        assert_eq!(config.id_policy, IdPolicy::ListLength);
        assert!(config.seed_samples);
    }
}
