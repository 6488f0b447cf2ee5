//! Routing decision composition.
//!
//! Folds the revocation-date check, the adjustment conflict resolution, and
//! externally supplied eligibility signals into a single decision per form
//! submission: proceed automatically, require manual review, or block with a
//! validation error code.
//!
//! This is a pure decision function over already-fetched inputs. If the
//! caller could not fetch adjustments or eligibility data at all, it should
//! route to manual review itself rather than call in with guesses — inability
//! to compute eligibility must never become silent auto-approval.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::{aggregate_conflicts, ConflictResolution, UalEdit};
use crate::error::Result;
use crate::revocation::{validate_revocation_date, RevocationConflict};
use crate::types::{AdjustmentRecord, JourneyContext, RecallRecord, UalPeriod};

/// Eligibility signals computed outside this engine (sentence data). Opaque
/// booleans as far as routing is concerned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EligibilitySignals {
    /// The person has no sentences eligible for recall.
    pub no_eligible_sentences: bool,
    /// Sentence types outside the standard set are present.
    pub unexpected_sentence_types: bool,
}

/// Call-time routing configuration. Passed in explicitly; the engine reads
/// no ambient global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutingConfig {
    /// Route to manual review when unexpected sentence types are present.
    pub unexpected_sentence_type_check_enabled: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        RoutingConfig {
            unexpected_sentence_type_check_enabled: true,
        }
    }
}

/// The decision for one form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "decision",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum RoutingDecision {
    /// No conflicts: persist the recall, applying the carried UAL
    /// instructions (possibly neither, when the person was continuously in
    /// custody).
    AutoProceed {
        ual_to_create: Option<UalPeriod>,
        ual_to_edit: Option<UalEdit>,
    },
    /// A caseworker must resolve the case by hand.
    ManualReviewRequired {
        has_multiple_overlapping_ual_type_recall: bool,
    },
    /// The submission is rejected outright with a validation error code.
    Blocked { reason: RevocationConflict },
}

/// All pre-fetched inputs for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecallCase {
    pub revocation_date: NaiveDate,
    pub return_to_custody_date: Option<NaiveDate>,
    #[serde(default)]
    pub existing_recalls: Vec<RecallRecord>,
    #[serde(default)]
    pub adjustments: Vec<AdjustmentRecord>,
    #[serde(default)]
    pub journey: JourneyContext,
    #[serde(default)]
    pub eligibility: EligibilitySignals,
}

/// Compose the routing decision from the component outcomes.
///
/// Precedence: a revocation-date rejection blocks outright; any adjustment
/// conflict or eligibility signal requires manual review; otherwise proceed
/// automatically with whatever UAL instructions the aggregator produced.
pub fn compose_routing(
    revocation_conflict: Option<RevocationConflict>,
    resolution: Option<&ConflictResolution>,
    signals: EligibilitySignals,
    config: &RoutingConfig,
) -> RoutingDecision {
    if let Some(reason) = revocation_conflict {
        return RoutingDecision::Blocked { reason };
    }

    let has_multiple = resolution
        .map(|r| r.has_multiple_overlapping_ual_type_recall)
        .unwrap_or(false);
    let has_conflict = resolution.map(|r| r.has_conflict).unwrap_or(false);

    let needs_manual = has_conflict
        || has_multiple
        || signals.no_eligible_sentences
        || (config.unexpected_sentence_type_check_enabled && signals.unexpected_sentence_types);

    if needs_manual {
        return RoutingDecision::ManualReviewRequired {
            has_multiple_overlapping_ual_type_recall: has_multiple,
        };
    }

    RoutingDecision::AutoProceed {
        ual_to_create: resolution.and_then(|r| r.ual_to_create),
        ual_to_edit: resolution.and_then(|r| r.ual_to_edit.clone()),
    }
}

/// Evaluate one submission end to end: derive the proposed UAL period, check
/// the revocation date, weigh the adjustments, and compose the decision.
///
/// # Errors
/// Returns [`crate::RecallError::ReturnBeforeRevocation`] when the case's
/// return-to-custody date precedes its revocation date — malformed input,
/// not a business outcome.
pub fn evaluate(case: &RecallCase, config: &RoutingConfig) -> Result<RoutingDecision> {
    let revocation_conflict =
        validate_revocation_date(case.revocation_date, &case.existing_recalls, &case.journey);

    let proposed =
        UalPeriod::from_recall_dates(case.revocation_date, case.return_to_custody_date)?;

    // No UAL (continuously in custody) means there is nothing to weigh the
    // adjustments against.
    let resolution = match (proposed, case.return_to_custody_date) {
        (Some(period), Some(rtc)) => Some(aggregate_conflicts(
            &period,
            rtc,
            &case.journey,
            &case.adjustments,
        )),
        _ => None,
    };

    let decision = compose_routing(
        revocation_conflict,
        resolution.as_ref(),
        case.eligibility,
        config,
    );
    debug!(?decision, "composed routing decision");
    Ok(decision)
}
