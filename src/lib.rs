//! # Zero-Trust Policy Engine
//!
//! Authorization decision engine for zero-trust resource access. This crate
//! evaluates structured access requests against a validated policy
//! configuration and returns an allow/deny verdict together with
//! human-readable reasons for any denial.
//!
//! ## Features
//!
//! - **Bypass rules**: admin roles and owner permission grant access
//!   unconditionally, short-circuiting all other checks
//! - **Standard access checks**: trusted network, working hours, clearance
//!   level, and permission checks evaluated exhaustively for diagnostics
//! - **Validated configuration**: policy tables are checked at construction
//!   time and immutable afterwards, safe for unbounded concurrent use
//! - **Hot reload**: a running engine can atomically swap in a new validated
//!   configuration without disturbing in-flight evaluations
//!
//! ## Quick Start
//!
//! ```rust
//! use zerotrust_policy_engine::{AccessRequest, DecisionEngine, PolicyConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PolicyConfig::builder()
//!         .trusted_network("10.0.0.5")
//!         .work_hours(9, 18)
//!         .clearance_level("employee", 2)
//!         .clearance_level("manager", 3)
//!         .sensitivity_requirement("Internal", 2)
//!         .sensitivity_requirement("Confidential", 3)
//!         .admin_role("admin")
//!         .build()?;
//!
//!     let engine = DecisionEngine::new(config);
//!
//!     let request = AccessRequest::builder()
//!         .user_role("employee")
//!         .user_permission("view")
//!         .ip_address("10.0.0.5")
//!         .current_hour(10)
//!         .action("read")
//!         .resource_sensitivity("Internal")
//!         .build();
//!
//!     let decision = engine.evaluate(&request);
//!     if decision.allowed {
//!         println!("Request allowed");
//!     } else {
//!         println!("Request denied: {}", decision.reasons.join("; "));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Scope
//!
//! The engine consumes an already-authenticated, already-parsed request and
//! a pre-loaded, validated configuration. Transport wrappers, request
//! authentication, and policy distribution are external collaborators; they
//! translate their own failures separately from the [`Decision`] fields.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod api;
pub mod core;
pub mod error;
pub mod policy;
pub mod telemetry;

// Re-export main types for convenience
pub use api::{
    AccessRequest, AccessRequestBuilder, Decision, DecisionEngine, DecisionEngineBuilder,
};
pub use error::{Error, Result};
pub use policy::{BypassRule, PolicyConfig, PolicyConfigBuilder, PolicyDocument, StandardCheck};
pub use telemetry::{Telemetry, TelemetryMetrics};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
