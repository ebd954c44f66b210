//! Public API for the decision engine.
//!
//! This module provides the main interface for interacting with the
//! engine: the `DecisionEngine` struct plus the request and decision
//! value types.

mod decision;
mod engine;
mod request;

pub use decision::Decision;
pub use engine::{DecisionEngine, DecisionEngineBuilder};
pub use request::{AccessRequest, AccessRequestBuilder};
