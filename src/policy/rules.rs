//! Named admission rules.
//!
//! The rule graph has two layers: bypass rules, which grant access
//! unconditionally and short-circuit everything else, and standard checks,
//! which together form the compound access rule evaluated when no bypass
//! matched. Each standard check carries a fixed diagnostic string reported
//! on failure.

use crate::api::AccessRequest;
use crate::policy::PolicyConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rule that grants access unconditionally when it matches.
///
/// Bypass rules are evaluated in the order of [`BypassRule::ALL`]; the
/// first match short-circuits the evaluation with an allow verdict and no
/// diagnostics. The two conditions are independent: either alone is
/// sufficient, regardless of every other request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BypassRule {
    /// The requesting user holds one of the configured admin roles
    AdminRole,
    /// The requesting user holds the configured owner permission value
    OwnerPermission,
}

impl BypassRule {
    /// All bypass rules, in evaluation order.
    pub const ALL: [BypassRule; 2] = [BypassRule::AdminRole, BypassRule::OwnerPermission];

    /// Stable rule name, reported in [`Decision::matched_rule`].
    ///
    /// [`Decision::matched_rule`]: crate::Decision::matched_rule
    pub fn name(&self) -> &'static str {
        match self {
            BypassRule::AdminRole => "admin-role",
            BypassRule::OwnerPermission => "owner-permission",
        }
    }

    /// Check whether this rule grants the request.
    pub fn grants(&self, request: &AccessRequest, config: &PolicyConfig) -> bool {
        match self {
            BypassRule::AdminRole => config.is_admin_role(&request.user_role),
            BypassRule::OwnerPermission => request.user_permission == config.owner_permission(),
        }
    }
}

impl fmt::Display for BypassRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One member of the compound standard-access rule.
///
/// All members are evaluated on every standard-path request, even after one
/// has already failed, so a denial reports every failing check rather than
/// just the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardCheck {
    /// The request originates from a trusted network address
    NetworkTrusted,
    /// The request falls inside the permissible hour window
    WithinWorkHours,
    /// The user's clearance rank meets the resource's required rank
    SufficientClearance,
    /// The user's permission allows the requested action
    ValidPermission,
}

impl StandardCheck {
    /// All standard checks, in evaluation and reason-reporting order.
    pub const ALL: [StandardCheck; 4] = [
        StandardCheck::NetworkTrusted,
        StandardCheck::WithinWorkHours,
        StandardCheck::SufficientClearance,
        StandardCheck::ValidPermission,
    ];

    /// Stable check name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            StandardCheck::NetworkTrusted => "network-trusted",
            StandardCheck::WithinWorkHours => "within-work-hours",
            StandardCheck::SufficientClearance => "sufficient-clearance",
            StandardCheck::ValidPermission => "valid-permission",
        }
    }

    /// The diagnostic string collected when this check fails.
    pub fn deny_reason(&self) -> &'static str {
        match self {
            StandardCheck::NetworkTrusted => "Untrusted network",
            StandardCheck::WithinWorkHours => "Outside working hours",
            StandardCheck::SufficientClearance => "Insufficient clearance",
            StandardCheck::ValidPermission => "Insufficient permission",
        }
    }

    /// Evaluate this check against a request.
    ///
    /// Total over all inputs: unknown roles, unknown sensitivity labels,
    /// and absent fields fail the relevant predicate instead of raising.
    pub fn passes(&self, request: &AccessRequest, config: &PolicyConfig) -> bool {
        match self {
            StandardCheck::NetworkTrusted => config.is_trusted_network(&request.ip_address),
            StandardCheck::WithinWorkHours => request
                .current_hour
                .map_or(false, |hour| {
                    config.work_hours_start() <= hour && hour < config.work_hours_end()
                }),
            StandardCheck::SufficientClearance => {
                // Missing-key lookups are explicit failures, never a
                // default rank.
                match (
                    config.clearance_level(&request.user_role),
                    config.required_clearance(&request.resource_sensitivity),
                ) {
                    (Some(user_level), Some(required_level)) => user_level >= required_level,
                    _ => false,
                }
            }
            StandardCheck::ValidPermission => {
                let permission = request.user_permission.as_str();
                permission == config.owner_permission()
                    || (request.action == "download" && permission == "download")
                    || (request.action == "read" && matches!(permission, "view" | "download"))
            }
        }
    }
}

impl fmt::Display for StandardCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
