//! Access request definitions.
//!
//! An [`AccessRequest`] is the single evaluation input: an
//! already-authenticated, already-parsed description of who wants to do
//! what, from where, and when. Absent string fields deserialize to the
//! empty string and an absent hour to `None`; both fail the predicates
//! they participate in rather than erroring.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

/// One access request, immutable for the duration of an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AccessRequest {
    /// Clearance-table key for the requesting user's role
    #[serde(default)]
    pub user_role: String,
    /// The user's permission on the resource, e.g. `"OWNER"`, `"download"`,
    /// `"view"`
    #[serde(default)]
    pub user_permission: String,
    /// Client network address, compared against the trusted-network set
    #[serde(default)]
    pub ip_address: String,
    /// Hour of the request, expected range `[0, 23]` but not enforced;
    /// `None` fails the working-hours check
    #[serde(default)]
    pub current_hour: Option<u32>,
    /// Requested action, e.g. `"read"`, `"download"`
    #[serde(default)]
    pub action: String,
    /// Sensitivity-table key for the resource
    #[serde(default)]
    pub resource_sensitivity: String,
}

impl AccessRequest {
    /// Create a request builder.
    pub fn builder() -> AccessRequestBuilder {
        AccessRequestBuilder::new()
    }
}

/// Builder for creating access requests.
#[derive(Debug, Default)]
pub struct AccessRequestBuilder {
    request: AccessRequest,
}

impl AccessRequestBuilder {
    /// Create a new request builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user's role.
    pub fn user_role(mut self, role: impl Into<String>) -> Self {
        self.request.user_role = role.into();
        self
    }

    /// Set the user's permission on the resource.
    pub fn user_permission(mut self, permission: impl Into<String>) -> Self {
        self.request.user_permission = permission.into();
        self
    }

    /// Set the client network address.
    pub fn ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.request.ip_address = ip_address.into();
        self
    }

    /// Set the hour of the request.
    pub fn current_hour(mut self, hour: u32) -> Self {
        self.request.current_hour = Some(hour);
        self
    }

    /// Stamp the hour of the request from the host's local clock.
    ///
    /// Boundary convenience for transport wrappers; the engine itself never
    /// reads the clock.
    pub fn at_local_now(mut self) -> Self {
        self.request.current_hour = Some(chrono::Local::now().hour());
        self
    }

    /// Set the requested action.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.request.action = action.into();
        self
    }

    /// Set the resource sensitivity label.
    pub fn resource_sensitivity(mut self, sensitivity: impl Into<String>) -> Self {
        self.request.resource_sensitivity = sensitivity.into();
        self
    }

    /// Build the request.
    pub fn build(self) -> AccessRequest {
        self.request
    }
}
