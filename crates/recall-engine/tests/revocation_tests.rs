//! Tests for revocation date validation against a person's other recalls.

use chrono::NaiveDate;
use recall_engine::{
    validate_revocation_date, JourneyContext, RecallRecord, RecallType, RevocationConflict,
    UalPeriod,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Helper to build a recall with no UAL (subject already in custody).
fn recall(id: &str, revocation: NaiveDate, code: &str, fixed_term: bool) -> RecallRecord {
    RecallRecord {
        recall_id: id.to_string(),
        revocation_date: revocation,
        return_to_custody_date: None,
        recall_type: RecallType {
            code: code.to_string(),
            fixed_term,
        },
        ual: None,
    }
}

/// Helper to build a recall with a UAL gap before return to custody.
fn recall_with_ual(
    id: &str,
    revocation: NaiveDate,
    return_to_custody: Option<NaiveDate>,
    code: &str,
) -> RecallRecord {
    let ual = UalPeriod::from_recall_dates(revocation, return_to_custody)
        .unwrap()
        .or_else(|| {
            // Defensive fixture: a UAL recorded even though the return date
            // was lost upstream.
            Some(UalPeriod::new(revocation, revocation).unwrap())
        });
    RecallRecord {
        recall_id: id.to_string(),
        revocation_date: revocation,
        return_to_custody_date: return_to_custody,
        recall_type: RecallType {
            code: code.to_string(),
            fixed_term: true,
        },
        ual,
    }
}

#[test]
fn no_existing_recalls_is_valid() {
    let result =
        validate_revocation_date(date(2024, 1, 15), &[], &JourneyContext::new_recall());
    assert_eq!(result, None);
}

#[test]
fn date_inside_ftr_14_protected_period_is_rejected() {
    // Existing FTR_14 recall revoked 2024-01-15, subject already in custody:
    // protected through 2024-01-29. Ten days later is inside.
    let existing = recall("r1", date(2024, 1, 15), "FTR_14", true);
    let result = validate_revocation_date(
        date(2024, 1, 25),
        &[existing],
        &JourneyContext::new_recall(),
    );
    assert_eq!(result, Some(RevocationConflict::OverlapsFixedTermRecall));
}

#[test]
fn date_after_ftr_14_protected_period_is_valid() {
    // Fifteen days later falls outside the inclusive 14-day window.
    let existing = recall("r1", date(2024, 1, 15), "FTR_14", true);
    let result = validate_revocation_date(
        date(2024, 1, 30),
        &[existing],
        &JourneyContext::new_recall(),
    );
    assert_eq!(result, None);
}

#[test]
fn ftr_14_boundary_is_inclusive() {
    let existing = recall("r1", date(2024, 1, 15), "FTR_14", true);
    // Exactly 14 days after the reference date: still protected.
    assert_eq!(
        validate_revocation_date(
            date(2024, 1, 29),
            std::slice::from_ref(&existing),
            &JourneyContext::new_recall(),
        ),
        Some(RevocationConflict::OverlapsFixedTermRecall)
    );
    // One more day: clear.
    assert_eq!(
        validate_revocation_date(
            date(2024, 1, 30),
            &[existing],
            &JourneyContext::new_recall(),
        ),
        None
    );
}

#[test]
fn ftr_28_protects_twenty_eight_days() {
    let existing = recall("r1", date(2024, 1, 15), "FTR_28", true);
    assert_eq!(
        validate_revocation_date(
            date(2024, 2, 12),
            std::slice::from_ref(&existing),
            &JourneyContext::new_recall(),
        ),
        Some(RevocationConflict::OverlapsFixedTermRecall)
    );
    assert_eq!(
        validate_revocation_date(
            date(2024, 2, 13),
            &[existing],
            &JourneyContext::new_recall(),
        ),
        None
    );
}

#[test]
fn hdc_variants_use_the_same_periods() {
    let fourteen = recall("r1", date(2024, 1, 15), "FTR_HDC_14", true);
    assert_eq!(
        validate_revocation_date(
            date(2024, 1, 29),
            &[fourteen],
            &JourneyContext::new_recall(),
        ),
        Some(RevocationConflict::OverlapsFixedTermRecall)
    );

    let twenty_eight = recall("r2", date(2024, 1, 15), "FTR_HDC_28", true);
    assert_eq!(
        validate_revocation_date(
            date(2024, 2, 12),
            &[twenty_eight],
            &JourneyContext::new_recall(),
        ),
        Some(RevocationConflict::OverlapsFixedTermRecall)
    );
}

#[test]
fn standard_recall_has_no_protected_period() {
    let existing = recall("r1", date(2024, 1, 15), "LR", false);
    let result = validate_revocation_date(
        date(2024, 1, 16),
        &[existing],
        &JourneyContext::new_recall(),
    );
    assert_eq!(result, None);
}

#[test]
fn unknown_code_with_fixed_term_flag_is_skipped() {
    let existing = recall("r1", date(2024, 1, 15), "FTR_56", true);
    let result = validate_revocation_date(
        date(2024, 1, 20),
        &[existing],
        &JourneyContext::new_recall(),
    );
    assert_eq!(result, None);
}

#[test]
fn date_on_existing_revocation_is_rejected() {
    let existing = recall("r1", date(2024, 1, 15), "LR", false);
    let result = validate_revocation_date(
        date(2024, 1, 15),
        &[existing],
        &JourneyContext::new_recall(),
    );
    assert_eq!(result, Some(RevocationConflict::OnOrBeforeExistingRecall));
}

#[test]
fn date_before_existing_revocation_is_rejected() {
    let existing = recall("r1", date(2024, 1, 15), "LR", false);
    let result = validate_revocation_date(
        date(2023, 12, 1),
        &[existing],
        &JourneyContext::new_recall(),
    );
    assert_eq!(result, Some(RevocationConflict::OnOrBeforeExistingRecall));
}

#[test]
fn ordering_violation_wins_over_protected_period() {
    // The proposed date is both on the existing revocation date and inside
    // its protected period; the chronological check runs first.
    let existing = recall("r1", date(2024, 1, 15), "FTR_14", true);
    let result = validate_revocation_date(
        date(2024, 1, 15),
        &[existing],
        &JourneyContext::new_recall(),
    );
    assert_eq!(result, Some(RevocationConflict::OnOrBeforeExistingRecall));
}

#[test]
fn protected_period_references_return_to_custody_when_ual_present() {
    // Revoked 2024-01-15, returned 2024-01-20: protection runs from the
    // return date through 2024-02-03.
    let existing = recall_with_ual("r1", date(2024, 1, 15), Some(date(2024, 1, 20)), "FTR_14");
    assert_eq!(
        validate_revocation_date(
            date(2024, 1, 19),
            std::slice::from_ref(&existing),
            &JourneyContext::new_recall(),
        ),
        None,
        "between revocation and return is outside the window"
    );
    assert_eq!(
        validate_revocation_date(
            date(2024, 2, 3),
            std::slice::from_ref(&existing),
            &JourneyContext::new_recall(),
        ),
        Some(RevocationConflict::OverlapsFixedTermRecall)
    );
    assert_eq!(
        validate_revocation_date(
            date(2024, 2, 4),
            &[existing],
            &JourneyContext::new_recall(),
        ),
        None
    );
}

#[test]
fn missing_return_date_with_ual_falls_back_to_day_after_revocation() {
    let existing = recall_with_ual("r1", date(2024, 1, 15), None, "FTR_14");
    // Reference is 2024-01-16; protected through 2024-01-30.
    assert_eq!(
        validate_revocation_date(
            date(2024, 1, 30),
            std::slice::from_ref(&existing),
            &JourneyContext::new_recall(),
        ),
        Some(RevocationConflict::OverlapsFixedTermRecall)
    );
    assert_eq!(
        validate_revocation_date(
            date(2024, 1, 31),
            &[existing],
            &JourneyContext::new_recall(),
        ),
        None
    );
}

#[test]
fn edited_recall_is_excluded_from_comparison() {
    // Re-submitting the recall's own revocation date during an edit is fine.
    let existing = recall("r1", date(2024, 1, 15), "FTR_14", true);
    let result = validate_revocation_date(
        date(2024, 1, 15),
        &[existing],
        &JourneyContext::edit("r1"),
    );
    assert_eq!(result, None);
}

#[test]
fn editing_a_different_recall_still_conflicts() {
    let existing = recall("r1", date(2024, 1, 15), "FTR_14", true);
    let result = validate_revocation_date(
        date(2024, 1, 15),
        &[existing],
        &JourneyContext::edit("r2"),
    );
    assert_eq!(result, Some(RevocationConflict::OnOrBeforeExistingRecall));
}

#[test]
fn only_recalls_after_the_proposal_do_not_conflict() {
    let recalls = vec![
        recall("r1", date(2024, 1, 15), "LR", false),
        recall("r2", date(2024, 3, 1), "LR", false),
    ];
    // Between the two: on or before r2's revocation date.
    assert_eq!(
        validate_revocation_date(date(2024, 2, 1), &recalls, &JourneyContext::new_recall()),
        Some(RevocationConflict::OnOrBeforeExistingRecall)
    );
    // Strictly after both: fine.
    assert_eq!(
        validate_revocation_date(date(2024, 3, 2), &recalls, &JourneyContext::new_recall()),
        None
    );
}
