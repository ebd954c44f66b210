//! Telemetry counters for the decision engine.
//!
//! Relaxed atomic counters tracking decision outcomes. Counting is the
//! only side effect of an evaluation and never influences the decision
//! itself.

use crate::api::Decision;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Telemetry instance recording decision counters.
#[derive(Debug, Default)]
pub struct Telemetry {
    allowed: AtomicU64,
    denied: AtomicU64,
    bypass_grants: AtomicU64,
}

impl Telemetry {
    /// Create a new telemetry instance with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one decision.
    pub fn record_decision(&self, decision: &Decision) {
        if decision.allowed {
            self.allowed.fetch_add(1, Ordering::Relaxed);
            if decision.is_bypass() {
                self.bypass_grants.fetch_add(1, Ordering::Relaxed);
            }
        } else {
            self.denied.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get a snapshot of the current counters.
    pub fn metrics(&self) -> TelemetryMetrics {
        let allowed = self.allowed.load(Ordering::Relaxed);
        let denied = self.denied.load(Ordering::Relaxed);
        let total = allowed + denied;
        let deny_rate = if total > 0 {
            (denied as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        TelemetryMetrics {
            total_evaluations: total,
            allowed,
            denied,
            bypass_grants: self.bypass_grants.load(Ordering::Relaxed),
            deny_rate,
        }
    }
}

/// A point-in-time snapshot of the telemetry counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryMetrics {
    /// Total number of evaluations recorded
    pub total_evaluations: u64,
    /// Number of allowed requests
    pub allowed: u64,
    /// Number of denied requests
    pub denied: u64,
    /// Number of allows granted by a bypass rule
    pub bypass_grants: u64,
    /// Denied share of all evaluations, as a percentage
    pub deny_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let telemetry = Telemetry::new();
        telemetry.record_decision(&Decision::allow());
        telemetry.record_decision(&Decision::bypass("admin-role"));
        telemetry.record_decision(&Decision::deny(vec!["Untrusted network".to_string()]));
        telemetry.record_decision(&Decision::deny(vec!["Outside working hours".to_string()]));

        let metrics = telemetry.metrics();
        assert_eq!(metrics.total_evaluations, 4);
        assert_eq!(metrics.allowed, 2);
        assert_eq!(metrics.denied, 2);
        assert_eq!(metrics.bypass_grants, 1);
        assert_eq!(metrics.deny_rate, 50.0);
    }

    #[test]
    fn test_empty_metrics() {
        let metrics = Telemetry::new().metrics();
        assert_eq!(metrics.total_evaluations, 0);
        assert_eq!(metrics.deny_rate, 0.0);
    }
}
