//! Conflict aggregation: combines relevance filtering and interval
//! classification into create/edit instructions for a proposed UAL period.
//!
//! The policy never silently loses an existing adjustment — ambiguous or
//! multi-way overlaps degrade to a conflict for manual handling rather than
//! guessing which record to merge with.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::classify::classify_overlaps;
use crate::relevance::classify_relevance;
use crate::types::{AdjustmentRecord, JourneyContext, UalPeriod};

/// Instruction to edit an existing adjustment to a new period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UalEdit {
    pub adjustment_id: String,
    pub period: UalPeriod,
}

/// Outcome of weighing a proposed UAL period against existing adjustments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictResolution {
    /// A relevant adjustment overlaps the proposed period, or the overlap
    /// shape admits no clean automatic split.
    pub has_conflict: bool,
    /// Fresh adjustment to create, when one is needed.
    pub ual_to_create: Option<UalPeriod>,
    /// Existing adjustment to edit in place, when one applies.
    pub ual_to_edit: Option<UalEdit>,
    /// The relevant adjustments that block automatic resolution.
    pub relevant_adjustments: Vec<AdjustmentRecord>,
    /// More than one recall-attributable UAL overlaps the proposal; there is
    /// no way to auto-pick which to merge with.
    pub has_multiple_overlapping_ual_type_recall: bool,
}

/// Drop records that repeat an id already seen, preserving order.
fn dedupe_by_id(records: Vec<AdjustmentRecord>) -> Vec<AdjustmentRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.id.clone()))
        .collect()
}

/// Weigh a proposed UAL period against the person's existing adjustments.
///
/// `return_to_custody` is the arrest date the proposed period was derived
/// from; it anchors the split point when an overlapping adjustment is edited
/// down to its tail. Adjustments linked to the recall being edited (per
/// `journey`) never conflict with the proposal.
pub fn aggregate_conflicts(
    proposed: &UalPeriod,
    return_to_custody: NaiveDate,
    journey: &JourneyContext,
    adjustments: &[AdjustmentRecord],
) -> ConflictResolution {
    let mut resolution = ConflictResolution::default();

    // Recall-attributable UALs overlapping the proposal, excluding any linked
    // to the recall being edited. One is a candidate for in-place editing;
    // more than one is unresolvable.
    let conflicting_recall_ual = dedupe_by_id(
        adjustments
            .iter()
            .filter(|a| a.is_recall_ual())
            .filter(|a| a.period().is_some_and(|p| proposed.overlaps(&p)))
            .filter(|a| {
                !a.recall_id
                    .as_deref()
                    .is_some_and(|id| journey.is_editing(id))
            })
            .cloned()
            .collect(),
    );
    if conflicting_recall_ual.len() > 1 {
        warn!(
            count = conflicting_recall_ual.len(),
            "multiple recall UAL adjustments overlap the proposed period"
        );
        resolution.has_multiple_overlapping_ual_type_recall = true;
    }

    // Relevant (non-recall) adjustments overlapping the proposal always block
    // automatic resolution: remand, lawfully-at-large, and unrelated UALs
    // take precedence over automated UAL creation.
    let relevant_overlapping = dedupe_by_id(
        adjustments
            .iter()
            .filter(|a| classify_relevance(a).is_some())
            .filter(|a| a.period().is_some_and(|p| proposed.overlaps(&p)))
            .cloned()
            .collect(),
    );
    if !relevant_overlapping.is_empty() {
        resolution.has_conflict = true;
        resolution.relevant_adjustments = relevant_overlapping;
    }

    if !resolution.has_conflict && !resolution.has_multiple_overlapping_ual_type_recall {
        let classification = classify_overlaps(proposed, adjustments);

        // Exact matches take precedence over nested ones.
        let mut matched = classification.exact.clone();
        matched.extend(classification.within.iter().cloned());
        let matched = dedupe_by_id(matched);

        if classification.is_empty() {
            resolution.ual_to_create = Some(*proposed);
        } else if matched.len() == 1 {
            resolution.ual_to_edit = Some(UalEdit {
                adjustment_id: matched[0].id.clone(),
                period: *proposed,
            });
        } else if let Some(first_overlap) = classification.overlap.first() {
            split_on_overlap(&mut resolution, proposed, return_to_custody, first_overlap);
        } else {
            // Multiple boundary-nested matches with nothing to split on.
            resolution.has_conflict = true;
        }
    }

    debug!(
        has_conflict = resolution.has_conflict,
        has_multiple_overlapping_ual_type_recall =
            resolution.has_multiple_overlapping_ual_type_recall,
        creates = resolution.ual_to_create.is_some(),
        edits = resolution.ual_to_edit.is_some(),
        "aggregated adjustment conflicts"
    );
    resolution
}

/// Edit the overlapping adjustment down to its tail from the return date
/// onward, and create the recall's own UAL for the uncovered remainder.
///
/// When the overlapping adjustment ends before the return date there is no
/// clean split; the case degrades to a conflict.
fn split_on_overlap(
    resolution: &mut ConflictResolution,
    proposed: &UalPeriod,
    return_to_custody: NaiveDate,
    overlapping: &AdjustmentRecord,
) {
    // Membership in the overlap bucket implies a well-formed period.
    let Some(existing) = overlapping.period() else {
        resolution.has_conflict = true;
        return;
    };

    match UalPeriod::new(return_to_custody, existing.last_day) {
        Ok(edit_period) => {
            resolution.ual_to_edit = Some(UalEdit {
                adjustment_id: overlapping.id.clone(),
                period: edit_period,
            });
            if proposed.first_day < return_to_custody {
                resolution.ual_to_create = Some(UalPeriod {
                    first_day: proposed.first_day,
                    last_day: return_to_custody - Days::new(1),
                });
            }
        }
        Err(_) => {
            resolution.has_conflict = true;
        }
    }
}
