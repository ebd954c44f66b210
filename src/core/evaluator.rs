//! Rule evaluator implementation.

use crate::api::{AccessRequest, Decision};
use crate::policy::{BypassRule, PolicyConfig, StandardCheck};

use tracing::trace;

/// The rule evaluator that processes requests against a configuration.
///
/// Evaluation runs in two phases. Bypass rules are walked in order and the
/// first match short-circuits with an unconditional grant. Only when no
/// bypass matched are the standard checks evaluated, and then all of them
/// are, so a denial carries every failing check's diagnostic rather than
/// just the first. The two strategies must not be collapsed into a single
/// short-circuit chain.
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Create a new evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a request against a configuration.
    ///
    /// Total over all inputs: there is no error channel, and absence of an
    /// allow is always expressed as `allowed = false` plus reasons.
    pub fn evaluate(&self, config: &PolicyConfig, request: &AccessRequest) -> Decision {
        for rule in BypassRule::ALL {
            if rule.grants(request, config) {
                trace!(rule = rule.name(), "bypass rule granted access");
                return Decision::bypass(rule.name());
            }
        }

        let mut reasons = Vec::new();
        for check in StandardCheck::ALL {
            if check.passes(request, config) {
                trace!(check = check.name(), "standard check passed");
            } else {
                trace!(check = check.name(), "standard check failed");
                reasons.push(check.deny_reason().to_string());
            }
        }

        if reasons.is_empty() {
            Decision::allow()
        } else {
            Decision::deny(reasons)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::test_support::sample_config;
    use proptest::prelude::*;

    fn full_allow_request() -> AccessRequest {
        AccessRequest::builder()
            .user_role("employee")
            .user_permission("view")
            .ip_address("10.0.0.5")
            .current_hour(10)
            .action("read")
            .resource_sensitivity("Internal")
            .build()
    }

    #[test]
    fn test_full_allow_scenario() {
        let evaluator = Evaluator::new();
        let decision = evaluator.evaluate(&sample_config(), &full_allow_request());
        assert_eq!(decision, Decision::allow());
    }

    #[test]
    fn test_admin_bypass_ignores_failing_standard_checks() {
        let evaluator = Evaluator::new();
        let request = AccessRequest::builder()
            .user_role("admin")
            .user_permission("execute")
            .ip_address("203.0.113.7")
            .current_hour(3)
            .action("delete")
            .resource_sensitivity("Unknown")
            .build();

        let decision = evaluator.evaluate(&sample_config(), &request);
        assert!(decision.is_allowed());
        assert!(decision.reasons.is_empty());
        assert_eq!(decision.matched_rule.as_deref(), Some("admin-role"));
    }

    #[test]
    fn test_owner_bypass_is_independent_of_role() {
        let evaluator = Evaluator::new();
        let request = AccessRequest::builder()
            .user_role("intern")
            .user_permission("OWNER")
            .ip_address("203.0.113.7")
            .current_hour(3)
            .action("delete")
            .resource_sensitivity("Confidential")
            .build();

        let decision = evaluator.evaluate(&sample_config(), &request);
        assert!(decision.is_allowed());
        assert!(decision.reasons.is_empty());
        assert_eq!(decision.matched_rule.as_deref(), Some("owner-permission"));
    }

    #[test]
    fn test_all_four_reasons_collected_in_order() {
        let evaluator = Evaluator::new();
        let request = AccessRequest::builder()
            .user_role("ghost")
            .user_permission("execute")
            .ip_address("203.0.113.7")
            .current_hour(3)
            .action("delete")
            .resource_sensitivity("Unknown")
            .build();

        let decision = evaluator.evaluate(&sample_config(), &request);
        assert!(decision.is_denied());
        assert_eq!(
            decision.reasons,
            vec![
                "Untrusted network",
                "Outside working hours",
                "Insufficient clearance",
                "Insufficient permission"
            ]
        );
    }

    #[test]
    fn test_single_failure_isolation_outside_hours() {
        let evaluator = Evaluator::new();
        let all_day = crate::policy::PolicyConfig::builder()
            .trusted_network("10.0.0.5")
            .work_hours(0, 24)
            .clearance_level("employee", 2)
            .sensitivity_requirement("Internal", 2)
            .admin_role("admin")
            .build()
            .unwrap();

        let mut request = full_allow_request();
        request.current_hour = Some(23);
        assert!(evaluator.evaluate(&all_day, &request).is_allowed());

        // 24 sits past the exclusive end even of a full-day window.
        request.current_hour = Some(24);
        let decision = evaluator.evaluate(&all_day, &request);
        assert_eq!(decision.reasons, vec!["Outside working hours"]);
    }

    #[test]
    fn test_single_failure_isolation_clearance() {
        let evaluator = Evaluator::new();
        let mut request = full_allow_request();
        request.user_role = "intern".to_string();

        let decision = evaluator.evaluate(&sample_config(), &request);
        assert!(decision.is_denied());
        assert_eq!(decision.reasons, vec!["Insufficient clearance"]);
    }

    #[test]
    fn test_download_requires_download_permission() {
        let evaluator = Evaluator::new();
        let mut request = full_allow_request();
        request.action = "download".to_string();

        let decision = evaluator.evaluate(&sample_config(), &request);
        assert_eq!(decision.reasons, vec!["Insufficient permission"]);

        request.user_permission = "download".to_string();
        assert!(evaluator.evaluate(&sample_config(), &request).is_allowed());
    }

    #[test]
    fn test_empty_request_denies_with_full_diagnostics() {
        let evaluator = Evaluator::new();
        let decision = evaluator.evaluate(&sample_config(), &AccessRequest::default());
        assert!(decision.is_denied());
        assert_eq!(decision.reasons.len(), 4);
    }

    #[test]
    fn test_determinism() {
        let evaluator = Evaluator::new();
        let config = sample_config();
        let request = full_allow_request();

        let first = evaluator.evaluate(&config, &request);
        for _ in 0..10 {
            assert_eq!(evaluator.evaluate(&config, &request), first);
        }
    }

    prop_compose! {
        fn arb_request()(
            user_role in "[a-z]{0,8}",
            user_permission in prop::sample::select(vec![
                "OWNER", "download", "view", "execute", "",
            ]),
            ip_address in "[0-9.]{0,15}",
            current_hour in prop::option::of(0u32..30),
            action in prop::sample::select(vec!["read", "download", "delete", ""]),
            resource_sensitivity in prop::sample::select(vec![
                "Internal", "Confidential", "Clean", "",
            ]),
        ) -> AccessRequest {
            AccessRequest {
                user_role,
                user_permission: user_permission.to_string(),
                ip_address,
                current_hour,
                action: action.to_string(),
                resource_sensitivity: resource_sensitivity.to_string(),
            }
        }
    }

    proptest! {
        #[test]
        fn prop_bypass_precedence(mut request in arb_request()) {
            let evaluator = Evaluator::new();
            let config = sample_config();

            request.user_role = "admin".to_string();
            let decision = evaluator.evaluate(&config, &request);
            prop_assert!(decision.is_allowed());
            prop_assert!(decision.reasons.is_empty());
        }

        #[test]
        fn prop_owner_permission_always_grants(mut request in arb_request()) {
            let evaluator = Evaluator::new();
            let config = sample_config();

            request.user_permission = "OWNER".to_string();
            let decision = evaluator.evaluate(&config, &request);
            prop_assert!(decision.is_allowed());
            prop_assert!(decision.reasons.is_empty());
        }

        #[test]
        fn prop_evaluation_is_pure(request in arb_request()) {
            let evaluator = Evaluator::new();
            let config = sample_config();

            let first = evaluator.evaluate(&config, &request);
            let second = evaluator.evaluate(&config, &request);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_denials_carry_reasons(request in arb_request()) {
            let evaluator = Evaluator::new();
            let config = sample_config();

            let decision = evaluator.evaluate(&config, &request);
            if decision.is_denied() {
                prop_assert!(!decision.reasons.is_empty());
                prop_assert!(decision.matched_rule.is_none());
            }
        }
    }
}
