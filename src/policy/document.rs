//! Policy document parsing.
//!
//! A [`PolicyDocument`] is the serde-facing form of the policy table set,
//! typically produced by an external loader from a YAML or JSON source.
//! It carries no invariants of its own; [`PolicyDocument::into_config`]
//! runs the full construction-time validation.

use super::{PolicyConfig, PolicyConfigBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// An unvalidated policy table document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyDocument {
    /// API version of the document format
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Kind of document
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Trusted network addresses
    #[serde(default)]
    pub trusted_networks: Vec<String>,
    /// Start of the permissible hour window (inclusive)
    #[serde(default)]
    pub work_hours_start: u32,
    /// End of the permissible hour window (exclusive)
    #[serde(default = "default_work_hours_end")]
    pub work_hours_end: u32,
    /// Role name to clearance rank
    #[serde(default)]
    pub clearance_levels: HashMap<String, i64>,
    /// Sensitivity label to minimum required rank
    #[serde(default)]
    pub sensitivity_requirements: HashMap<String, i64>,
    /// Role names granted the admin bypass
    #[serde(default)]
    pub admin_role_names: Vec<String>,
    /// Permission value granted the owner bypass
    #[serde(default = "default_owner_permission")]
    pub owner_permission_value: String,
}

fn default_api_version() -> String {
    "policy.zero-trust.io/v1".to_string()
}

fn default_kind() -> String {
    "AccessPolicy".to_string()
}

fn default_work_hours_end() -> u32 {
    24
}

fn default_owner_permission() -> String {
    "OWNER".to_string()
}

impl PolicyDocument {
    /// Parse a policy document from YAML.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        serde_yaml::from_str(yaml).map_err(crate::Error::from)
    }

    /// Parse a policy document from JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(crate::Error::from)
    }

    /// Load a policy document from a file.
    ///
    /// The format is chosen by extension; unknown extensions try YAML
    /// first, then JSON.
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match extension.to_lowercase().as_str() {
            "yaml" | "yml" => Self::from_yaml(&content),
            "json" => Self::from_json(&content),
            _ => Self::from_yaml(&content).or_else(|_| Self::from_json(&content)),
        }
    }

    /// Convert the document to YAML.
    pub fn to_yaml(&self) -> crate::Result<String> {
        serde_yaml::to_string(self).map_err(crate::Error::from)
    }

    /// Convert the document to JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(crate::Error::from)
    }

    /// Validate the document and build the immutable [`PolicyConfig`].
    pub fn into_config(self) -> crate::Result<PolicyConfig> {
        let mut builder = PolicyConfigBuilder::new()
            .trusted_networks(self.trusted_networks)
            .work_hours(self.work_hours_start, self.work_hours_end)
            .owner_permission(self.owner_permission_value);

        for (role, rank) in self.clearance_levels {
            builder = builder.clearance_level(role, rank);
        }
        for (label, rank) in self.sensitivity_requirements {
            builder = builder.sensitivity_requirement(label, rank);
        }
        for role in self.admin_role_names {
            builder = builder.admin_role(role);
        }

        builder.build()
    }
}
