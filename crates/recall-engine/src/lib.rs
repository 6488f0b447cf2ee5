//! # recall-engine
//!
//! Conflict detection and routing decisions for recording prisoner recalls.
//!
//! Given a proposed revocation date and return-to-custody date, the engine
//! computes the unlawfully-at-large (UAL) period, weighs it against the
//! person's existing sentence adjustments and recalls, and decides whether
//! the case can proceed automatically, needs manual review, or is blocked
//! with a validation error code. It is pure synchronous computation over
//! already-fetched in-memory lists; fetching the data is the caller's job.
//!
//! ## Modules
//!
//! - [`types`] — data model: UAL periods, adjustments, recalls, journey context
//! - [`relevance`] — which adjustment types must be weighed against a proposal
//! - [`classify`] — exact/within/overlap interval classification
//! - [`aggregate`] — conflict aggregation into create/edit instructions
//! - [`revocation`] — revocation date checks against other recalls
//! - [`routing`] — the composed per-submission decision
//! - [`error`] — error types for malformed input

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod relevance;
pub mod revocation;
pub mod routing;
pub mod types;

pub use aggregate::{aggregate_conflicts, ConflictResolution, UalEdit};
pub use classify::{classify_overlaps, OverlapClassification};
pub use error::RecallError;
pub use relevance::{classify_relevance, Relevance};
pub use revocation::{validate_revocation_date, RevocationConflict};
pub use routing::{
    compose_routing, evaluate, EligibilitySignals, RecallCase, RoutingConfig, RoutingDecision,
};
pub use types::{
    AdjustmentRecord, AdjustmentType, JourneyContext, RecallRecord, RecallType, UalPeriod, UalType,
};
