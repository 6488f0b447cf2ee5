//! Revocation date validation against a person's other recalls.
//!
//! A proposed revocation date must strictly follow every existing recall's
//! revocation date, and must not fall inside another fixed-term recall's
//! protected period (14 or 28 days from a reference date, inclusive both
//! ends). The first violation found wins.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{JourneyContext, RecallRecord, UalPeriod};

/// Why a proposed revocation date was rejected. Serialized as the error code
/// the calling web layer maps to a user-facing validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RevocationConflict {
    /// The proposed date is on or before another recall's revocation date.
    OnOrBeforeExistingRecall,
    /// The proposed date falls inside another fixed-term recall's protected
    /// period.
    OverlapsFixedTermRecall,
}

/// The protected period of a fixed-term recall, when its type carries one.
///
/// The reference date is the recall's revocation date when the subject was
/// already in custody (no UAL); otherwise the return-to-custody date, falling
/// back to the day after revocation if the return date was never recorded.
fn protected_period(recall: &RecallRecord) -> Option<UalPeriod> {
    let days = recall.recall_type.fixed_term_period_days()?;

    let reference = if recall.ual.is_none() {
        recall.revocation_date
    } else {
        recall
            .return_to_custody_date
            .unwrap_or(recall.revocation_date + Days::new(1))
    };

    Some(UalPeriod {
        first_day: reference,
        last_day: reference + Days::new(days),
    })
}

/// Validate a proposed revocation date against the person's other recalls.
///
/// Returns `None` when the date is acceptable. During an edit journey the
/// recall being edited is excluded — a recall never conflicts with itself.
pub fn validate_revocation_date(
    proposed: NaiveDate,
    existing_recalls: &[RecallRecord],
    journey: &JourneyContext,
) -> Option<RevocationConflict> {
    let considered: Vec<&RecallRecord> = existing_recalls
        .iter()
        .filter(|recall| !journey.is_editing(&recall.recall_id))
        .collect();

    // New recalls must strictly follow all prior ones chronologically.
    if considered
        .iter()
        .any(|recall| proposed <= recall.revocation_date)
    {
        debug!(%proposed, "revocation date on or before an existing recall");
        return Some(RevocationConflict::OnOrBeforeExistingRecall);
    }

    for recall in &considered {
        if let Some(period) = protected_period(recall) {
            if period.contains_day(proposed) {
                debug!(
                    %proposed,
                    recall_id = %recall.recall_id,
                    "revocation date inside a fixed-term recall's protected period"
                );
                return Some(RevocationConflict::OverlapsFixedTermRecall);
            }
        }
    }

    None
}
