//! Adjustment relevance filtering.
//!
//! Decides which existing adjustments must be weighed against a proposed UAL
//! period. REMAND, LAWFULLY_AT_LARGE, and UALs not attributable to a recall
//! are relevant; a UAL caused by a recall is expected to coexist and is
//! handled by the aggregator instead.

use crate::types::{AdjustmentRecord, AdjustmentType, UalType};

/// Why an adjustment is relevant to UAL conflict checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relevance {
    Remand,
    LawfullyAtLarge,
    /// A UAL that is not attributable to a recall. Carries the recorded
    /// subtype, if any; a UAL with no subtype is treated as relevant because
    /// its origin is unknown.
    Ual { subtype: Option<String> },
}

/// Classify whether an existing adjustment is relevant to conflict checking.
///
/// Returns `None` for recall-attributable UALs and for adjustment types this
/// engine does not weigh (tagged bail, restored days, and so on).
pub fn classify_relevance(adjustment: &AdjustmentRecord) -> Option<Relevance> {
    match &adjustment.adjustment_type {
        AdjustmentType::Remand => Some(Relevance::Remand),
        AdjustmentType::LawfullyAtLarge => Some(Relevance::LawfullyAtLarge),
        AdjustmentType::UnlawfullyAtLarge => match &adjustment.unlawfully_at_large_type {
            None => Some(Relevance::Ual { subtype: None }),
            Some(UalType::Recall) => None,
            Some(UalType::Other(subtype)) => Some(Relevance::Ual {
                subtype: Some(subtype.clone()),
            }),
        },
        AdjustmentType::Other(_) => None,
    }
}
