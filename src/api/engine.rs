//! Decision engine implementation.

use super::{AccessRequest, Decision};
use crate::core::Evaluator;
use crate::policy::{PolicyConfig, PolicyDocument};
use crate::telemetry::{Telemetry, TelemetryMetrics};
use crate::Result;

use arc_swap::ArcSwap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// The decision engine, binding a validated [`PolicyConfig`] to the rule
/// evaluator.
///
/// Evaluation is synchronous and side-effect-free; once constructed the
/// engine is safe for unbounded concurrent invocation. The configuration
/// can be hot-swapped by an external loader via
/// [`DecisionEngine::reload_config`]; in-flight evaluations keep the
/// snapshot they loaded.
#[derive(Debug)]
pub struct DecisionEngine {
    /// Current configuration snapshot
    config: ArcSwap<PolicyConfig>,
    /// Rule evaluator
    evaluator: Evaluator,
    /// Telemetry counters, if enabled
    telemetry: Option<Telemetry>,
}

impl DecisionEngine {
    /// Create an engine builder.
    pub fn builder() -> DecisionEngineBuilder {
        DecisionEngineBuilder::new()
    }

    /// Create a new engine with the given validated configuration.
    pub fn new(config: PolicyConfig) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
            evaluator: Evaluator::new(),
            telemetry: None,
        }
    }

    /// Evaluate one access request.
    ///
    /// Total function: any malformed or unknown field value degrades to
    /// predicate failure and an explicit reasoned deny, never to an error.
    pub fn evaluate(&self, request: &AccessRequest) -> Decision {
        let config = self.config.load();
        let decision = self.evaluator.evaluate(&config, request);

        debug!(
            allowed = decision.allowed,
            matched_rule = decision.matched_rule.as_deref(),
            reason_count = decision.reasons.len(),
            "access request evaluated"
        );

        if let Some(ref telemetry) = self.telemetry {
            telemetry.record_decision(&decision);
        }

        decision
    }

    /// Atomically swap in a new validated configuration.
    ///
    /// Subsequent evaluations see the new tables; concurrent evaluations
    /// finish against the snapshot they already hold.
    pub fn reload_config(&self, config: PolicyConfig) {
        self.config.store(Arc::new(config));
        debug!("policy configuration reloaded");
    }

    /// Get the current configuration snapshot.
    pub fn config(&self) -> Arc<PolicyConfig> {
        self.config.load_full()
    }

    /// Get a telemetry snapshot, if telemetry is enabled.
    pub fn metrics(&self) -> Option<TelemetryMetrics> {
        self.telemetry.as_ref().map(|t| t.metrics())
    }
}

/// Builder for creating a [`DecisionEngine`].
#[derive(Debug, Default)]
pub struct DecisionEngineBuilder {
    config: Option<PolicyConfig>,
    config_file: Option<PathBuf>,
    telemetry_enabled: bool,
}

impl DecisionEngineBuilder {
    /// Create a new engine builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy configuration.
    pub fn with_config(mut self, config: PolicyConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Load the policy configuration from a document file at build time.
    ///
    /// Ignored when [`with_config`] was also called.
    ///
    /// [`with_config`]: DecisionEngineBuilder::with_config
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Enable or disable telemetry counters.
    pub fn with_telemetry_enabled(mut self, enabled: bool) -> Self {
        self.telemetry_enabled = enabled;
        self
    }

    /// Build the engine.
    ///
    /// Fails on configuration errors; no partially-initialized engine is
    /// ever exposed to callers.
    pub fn build(self) -> Result<DecisionEngine> {
        let config = match (self.config, self.config_file) {
            (Some(config), _) => config,
            (None, Some(path)) => PolicyDocument::from_file(path)?.into_config()?,
            // No config source behaves as an empty document.
            (None, None) => return Err(crate::Error::empty_table("trusted_networks")),
        };

        let mut engine = DecisionEngine::new(config);
        if self.telemetry_enabled {
            engine.telemetry = Some(Telemetry::new());
        }

        Ok(engine)
    }
}
