//! Interval classification of adjustments against a proposed UAL period.
//!
//! Buckets each adjustment as an exact match, nested within the proposed
//! period, or overlapping it. The overlap test is evaluated independently of
//! the other two, so a multi-day exact match also lands in the overlap
//! bucket — callers dedupe by id when merging.

use crate::types::{AdjustmentRecord, UalPeriod};

/// Classification of existing adjustments relative to a proposed period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlapClassification {
    /// Adjustments whose interval equals the proposed period exactly.
    pub exact: Vec<AdjustmentRecord>,
    /// Adjustments nested inside the proposed period, flush with it on at
    /// most one side.
    pub within: Vec<AdjustmentRecord>,
    /// Adjustments intersecting the proposed period, independent of the
    /// exact/within tests.
    pub overlap: Vec<AdjustmentRecord>,
}

impl OverlapClassification {
    /// True when no adjustment landed in any bucket.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.within.is_empty() && self.overlap.is_empty()
    }
}

/// Classify each adjustment's interval against the proposed period.
///
/// Adjustments without a well-formed interval (missing or inverted dates)
/// are skipped. An empty adjustment list yields empty buckets.
pub fn classify_overlaps(
    proposed: &UalPeriod,
    adjustments: &[AdjustmentRecord],
) -> OverlapClassification {
    let mut classification = OverlapClassification::default();

    for adjustment in adjustments {
        let Some(period) = adjustment.period() else {
            continue;
        };

        let from_same = period.first_day == proposed.first_day;
        let from_after = period.first_day > proposed.first_day;
        let to_same = period.last_day == proposed.last_day;
        let to_before = period.last_day < proposed.last_day;

        if from_same && to_same {
            classification.exact.push(adjustment.clone());
        } else if (from_same && to_before)
            || (from_after && to_before)
            || (from_after && to_same)
        {
            classification.within.push(adjustment.clone());
        }

        // Independent of the buckets above.
        if proposed.overlaps(&period) {
            classification.overlap.push(adjustment.clone());
        }
    }

    classification
}
