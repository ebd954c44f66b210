//! Decision types.

use serde::{Deserialize, Serialize};

/// The result of evaluating one access request.
///
/// A pure value: it owns no resources and has no lifecycle beyond the call
/// that produced it. Two evaluations of an identical request against an
/// unchanged configuration compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Whether the request is allowed
    pub allowed: bool,
    /// Diagnostic strings for every failing standard check, in evaluation
    /// order. Empty when the request is allowed, and always empty on the
    /// bypass path, which computes no diagnostics.
    #[serde(default)]
    pub reasons: Vec<String>,
    /// Name of the bypass rule that granted access, if any. `None` for
    /// every standard-path outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_rule: Option<String>,
}

impl Decision {
    /// Create an allow decision from the standard path.
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reasons: Vec::new(),
            matched_rule: None,
        }
    }

    /// Create an allow decision granted by a bypass rule.
    ///
    /// Bypass grants are intentionally silent about the standard-path
    /// checks, so the reason list stays empty even when some would have
    /// failed.
    pub fn bypass(rule_name: impl Into<String>) -> Self {
        Self {
            allowed: true,
            reasons: Vec::new(),
            matched_rule: Some(rule_name.into()),
        }
    }

    /// Create a deny decision carrying the collected diagnostics.
    pub fn deny(reasons: Vec<String>) -> Self {
        Self {
            allowed: false,
            reasons,
            matched_rule: None,
        }
    }

    /// Check if the request was allowed.
    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    /// Check if the request was denied.
    pub fn is_denied(&self) -> bool {
        !self.allowed
    }

    /// Check if access was granted by a bypass rule.
    pub fn is_bypass(&self) -> bool {
        self.matched_rule.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_decision() {
        let decision = Decision::allow();
        assert!(decision.is_allowed());
        assert!(!decision.is_denied());
        assert!(!decision.is_bypass());
        assert!(decision.reasons.is_empty());
    }

    #[test]
    fn test_bypass_decision() {
        let decision = Decision::bypass("admin-role");
        assert!(decision.is_allowed());
        assert!(decision.is_bypass());
        assert_eq!(decision.matched_rule.as_deref(), Some("admin-role"));
        assert!(decision.reasons.is_empty());
    }

    #[test]
    fn test_deny_decision() {
        let decision = Decision::deny(vec!["Untrusted network".to_string()]);
        assert!(decision.is_denied());
        assert_eq!(decision.reasons, vec!["Untrusted network"]);
        assert_eq!(decision.matched_rule, None);
    }

    #[test]
    fn test_decision_serialization() {
        let decision = Decision::deny(vec![
            "Untrusted network".to_string(),
            "Insufficient clearance".to_string(),
        ]);
        let json = serde_json::to_string(&decision).unwrap();
        let parsed: Decision = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, decision);

        // matched_rule is omitted from the wire form when absent.
        assert!(!json.contains("matched_rule"));
    }
}
