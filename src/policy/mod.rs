//! Policy configuration and rule definitions.
//!
//! This module defines the validated policy table set consumed by the
//! decision engine, the serde-backed document format used to load it, and
//! the named admission rules evaluated against it.

mod document;
mod rules;

pub use document::PolicyDocument;
pub use rules::{BypassRule, StandardCheck};

use std::collections::{HashMap, HashSet};

/// The validated, immutable policy table set.
///
/// A `PolicyConfig` can only be obtained through [`PolicyConfig::builder`]
/// or [`PolicyDocument::into_config`], both of which enforce the table
/// invariants. Once built it is never mutated, so it can be shared
/// read-only across unlimited concurrent evaluations without
/// synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyConfig {
    trusted_networks: HashSet<String>,
    work_hours_start: u32,
    work_hours_end: u32,
    clearance_levels: HashMap<String, i64>,
    sensitivity_requirements: HashMap<String, i64>,
    admin_role_names: HashSet<String>,
    owner_permission_value: String,
}

impl PolicyConfig {
    /// Create a configuration builder.
    pub fn builder() -> PolicyConfigBuilder {
        PolicyConfigBuilder::new()
    }

    /// Check whether an IP address belongs to a trusted network.
    pub fn is_trusted_network(&self, ip_address: &str) -> bool {
        self.trusted_networks.contains(ip_address)
    }

    /// Check whether a role is granted the admin bypass.
    pub fn is_admin_role(&self, role: &str) -> bool {
        self.admin_role_names.contains(role)
    }

    /// Start of the permissible half-open hour window `[start, end)`.
    pub fn work_hours_start(&self) -> u32 {
        self.work_hours_start
    }

    /// End of the permissible half-open hour window `[start, end)`.
    pub fn work_hours_end(&self) -> u32 {
        self.work_hours_end
    }

    /// Look up the clearance rank assigned to a role.
    ///
    /// Returns `None` for unknown roles; the caller decides what a missing
    /// rank means (the standard clearance check treats it as failure).
    pub fn clearance_level(&self, role: &str) -> Option<i64> {
        self.clearance_levels.get(role).copied()
    }

    /// Look up the minimum clearance rank required for a sensitivity label.
    ///
    /// Returns `None` for unknown labels.
    pub fn required_clearance(&self, sensitivity: &str) -> Option<i64> {
        self.sensitivity_requirements.get(sensitivity).copied()
    }

    /// The permission value that triggers the owner bypass.
    pub fn owner_permission(&self) -> &str {
        &self.owner_permission_value
    }

    /// Number of trusted network entries.
    pub fn trusted_network_count(&self) -> usize {
        self.trusted_networks.len()
    }
}

/// Builder for creating a validated [`PolicyConfig`].
#[derive(Debug, Clone)]
pub struct PolicyConfigBuilder {
    trusted_networks: HashSet<String>,
    work_hours_start: u32,
    work_hours_end: u32,
    clearance_levels: HashMap<String, i64>,
    sensitivity_requirements: HashMap<String, i64>,
    admin_role_names: HashSet<String>,
    owner_permission_value: String,
}

impl Default for PolicyConfigBuilder {
    fn default() -> Self {
        Self {
            trusted_networks: HashSet::new(),
            work_hours_start: 0,
            work_hours_end: 24,
            clearance_levels: HashMap::new(),
            sensitivity_requirements: HashMap::new(),
            admin_role_names: HashSet::new(),
            owner_permission_value: "OWNER".to_string(),
        }
    }
}

impl PolicyConfigBuilder {
    /// Create a new builder.
    ///
    /// The hour window defaults to the full day `[0, 24)` and the owner
    /// permission value defaults to `"OWNER"`. The four tables start empty
    /// and must each receive at least one entry before [`build`] succeeds.
    ///
    /// [`build`]: PolicyConfigBuilder::build
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trusted network address.
    pub fn trusted_network(mut self, ip_address: impl Into<String>) -> Self {
        self.trusted_networks.insert(ip_address.into());
        self
    }

    /// Add multiple trusted network addresses.
    pub fn trusted_networks(mut self, addresses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.trusted_networks
            .extend(addresses.into_iter().map(|a| a.into()));
        self
    }

    /// Set the permissible half-open hour window `[start, end)`.
    pub fn work_hours(mut self, start: u32, end: u32) -> Self {
        self.work_hours_start = start;
        self.work_hours_end = end;
        self
    }

    /// Assign a clearance rank to a role (higher = more trusted).
    pub fn clearance_level(mut self, role: impl Into<String>, rank: i64) -> Self {
        self.clearance_levels.insert(role.into(), rank);
        self
    }

    /// Set the minimum clearance rank required for a sensitivity label.
    pub fn sensitivity_requirement(mut self, label: impl Into<String>, rank: i64) -> Self {
        self.sensitivity_requirements.insert(label.into(), rank);
        self
    }

    /// Add a role name that triggers the admin bypass.
    pub fn admin_role(mut self, role: impl Into<String>) -> Self {
        self.admin_role_names.insert(role.into());
        self
    }

    /// Set the permission value that triggers the owner bypass.
    pub fn owner_permission(mut self, value: impl Into<String>) -> Self {
        self.owner_permission_value = value.into();
        self
    }

    /// Validate and build the configuration.
    ///
    /// Fails with [`Error::EmptyTable`] if any of the four required tables
    /// is empty, or [`Error::InvalidHourRange`] if the hour window is
    /// inverted. An equal start and end is accepted: the half-open window
    /// is empty and every hour denies.
    ///
    /// [`Error::EmptyTable`]: crate::Error::EmptyTable
    /// [`Error::InvalidHourRange`]: crate::Error::InvalidHourRange
    pub fn build(self) -> crate::Result<PolicyConfig> {
        if self.trusted_networks.is_empty() {
            return Err(crate::Error::empty_table("trusted_networks"));
        }
        if self.clearance_levels.is_empty() {
            return Err(crate::Error::empty_table("clearance_levels"));
        }
        if self.sensitivity_requirements.is_empty() {
            return Err(crate::Error::empty_table("sensitivity_requirements"));
        }
        if self.admin_role_names.is_empty() {
            return Err(crate::Error::empty_table("admin_role_names"));
        }
        if self.work_hours_start > self.work_hours_end {
            return Err(crate::Error::invalid_hour_range(
                self.work_hours_start,
                self.work_hours_end,
            ));
        }

        Ok(PolicyConfig {
            trusted_networks: self.trusted_networks,
            work_hours_start: self.work_hours_start,
            work_hours_end: self.work_hours_end,
            clearance_levels: self.clearance_levels,
            sensitivity_requirements: self.sensitivity_requirements,
            admin_role_names: self.admin_role_names,
            owner_permission_value: self.owner_permission_value,
        })
    }
}
