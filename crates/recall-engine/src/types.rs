//! Core data model: UAL periods, adjustment records, recalls, journey context.
//!
//! All dates are calendar dates (`NaiveDate`) — the upstream services carry no
//! time-of-day significance. Field names serialize in the camelCase form used
//! by the adjustments and recall APIs, so captured payloads deserialize
//! directly.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{RecallError, Result};

/// An inclusive calendar-date interval during which a person was unlawfully
/// at large.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UalPeriod {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl UalPeriod {
    /// Construct a period, rejecting `first_day > last_day`.
    pub fn new(first_day: NaiveDate, last_day: NaiveDate) -> Result<Self> {
        if first_day > last_day {
            return Err(RecallError::InvalidPeriod {
                first_day,
                last_day,
            });
        }
        Ok(UalPeriod {
            first_day,
            last_day,
        })
    }

    /// Derive the UAL period for a recall from its revocation and
    /// return-to-custody dates.
    ///
    /// Returns `Ok(None)` when no return date is recorded or it equals the
    /// revocation date (the person was continuously in custody). A return
    /// date before the revocation date is malformed input and fails fast.
    ///
    /// The period runs from the day after revocation through the return date.
    pub fn from_recall_dates(
        revocation: NaiveDate,
        return_to_custody: Option<NaiveDate>,
    ) -> Result<Option<Self>> {
        let Some(rtc) = return_to_custody else {
            return Ok(None);
        };
        if rtc == revocation {
            return Ok(None);
        }
        if rtc < revocation {
            return Err(RecallError::ReturnBeforeRevocation {
                revocation,
                return_to_custody: rtc,
            });
        }
        Ok(Some(UalPeriod {
            first_day: revocation + Days::new(1),
            last_day: rtc,
        }))
    }

    /// Interval intersection test: `other.first_day < self.last_day AND
    /// other.last_day > self.first_day`.
    ///
    /// A single shared boundary day does NOT count as an overlap here; the
    /// flush cases are handled by the exact/within classification buckets.
    pub fn overlaps(&self, other: &UalPeriod) -> bool {
        other.first_day < self.last_day && other.last_day > self.first_day
    }

    /// Whether `day` falls within the period, inclusive of both ends.
    pub fn contains_day(&self, day: NaiveDate) -> bool {
        self.first_day <= day && day <= self.last_day
    }
}

/// The type of an adjustment record.
///
/// Open set: the adjustments service carries more types than this engine
/// cares about, so unknown codes deserialize as [`AdjustmentType::Other`]
/// rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AdjustmentType {
    Remand,
    LawfullyAtLarge,
    UnlawfullyAtLarge,
    Other(String),
}

impl From<String> for AdjustmentType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "REMAND" => AdjustmentType::Remand,
            "LAWFULLY_AT_LARGE" => AdjustmentType::LawfullyAtLarge,
            "UNLAWFULLY_AT_LARGE" => AdjustmentType::UnlawfullyAtLarge,
            _ => AdjustmentType::Other(code),
        }
    }
}

impl From<AdjustmentType> for String {
    fn from(t: AdjustmentType) -> Self {
        match t {
            AdjustmentType::Remand => "REMAND".to_string(),
            AdjustmentType::LawfullyAtLarge => "LAWFULLY_AT_LARGE".to_string(),
            AdjustmentType::UnlawfullyAtLarge => "UNLAWFULLY_AT_LARGE".to_string(),
            AdjustmentType::Other(code) => code,
        }
    }
}

/// Sub-classification of an UNLAWFULLY_AT_LARGE adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UalType {
    /// The UAL was produced by a recall. These are expected to coexist with
    /// a proposed UAL and are handled by the aggregator, not the relevance
    /// filter.
    Recall,
    Other(String),
}

impl From<String> for UalType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "RECALL" => UalType::Recall,
            _ => UalType::Other(code),
        }
    }
}

impl From<UalType> for String {
    fn from(t: UalType) -> Self {
        match t {
            UalType::Recall => "RECALL".to_string(),
            UalType::Other(code) => code,
        }
    }
}

/// A previously recorded time adjustment for a person's custodial
/// calculation, owned by the external adjustments service. Read-only input:
/// this engine classifies adjustments and proposes create/edit instructions,
/// it never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentRecord {
    pub id: String,
    pub booking_id: Option<i64>,
    pub person_identifier: String,
    pub adjustment_type: AdjustmentType,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub unlawfully_at_large_type: Option<UalType>,
    /// Links a recall-caused UAL adjustment to the recall that produced it.
    pub recall_id: Option<String>,
}

impl AdjustmentRecord {
    /// The adjustment's own interval, when both dates are recorded and
    /// well-formed. Partially dated records never classify as overlapping.
    pub fn period(&self) -> Option<UalPeriod> {
        match (self.from_date, self.to_date) {
            (Some(from), Some(to)) if from <= to => Some(UalPeriod {
                first_day: from,
                last_day: to,
            }),
            _ => None,
        }
    }

    /// Whether this is a UAL adjustment attributed to a recall.
    pub fn is_recall_ual(&self) -> bool {
        self.adjustment_type == AdjustmentType::UnlawfullyAtLarge
            && self.unlawfully_at_large_type == Some(UalType::Recall)
    }
}

/// The type of a recall, as recorded by the sentencing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecallType {
    pub code: String,
    pub fixed_term: bool,
}

impl RecallType {
    /// Length in days of this recall type's fixed-term protected period,
    /// or `None` when the type carries no protected period.
    pub fn fixed_term_period_days(&self) -> Option<u64> {
        if !self.fixed_term {
            return None;
        }
        match self.code.as_str() {
            "FTR_14" | "FTR_HDC_14" => Some(14),
            "FTR_28" | "FTR_HDC_28" => Some(28),
            _ => None,
        }
    }
}

/// A recall already recorded for the person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecallRecord {
    pub recall_id: String,
    pub revocation_date: NaiveDate,
    pub return_to_custody_date: Option<NaiveDate>,
    pub recall_type: RecallType,
    /// Present iff the person was not continuously in custody: the return
    /// date is set and differs from the revocation date.
    pub ual: Option<UalPeriod>,
}

/// Journey context for one form submission: whether the caseworker is
/// editing an existing recall, and if so which one. A recall must never
/// conflict with itself during an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyContext {
    pub is_edit: bool,
    pub current_recall_id: Option<String>,
}

impl JourneyContext {
    /// Context for recording a brand new recall.
    pub fn new_recall() -> Self {
        JourneyContext::default()
    }

    /// Context for editing the recall with the given id.
    pub fn edit(recall_id: impl Into<String>) -> Self {
        JourneyContext {
            is_edit: true,
            current_recall_id: Some(recall_id.into()),
        }
    }

    /// Whether this journey is an edit of the recall with the given id.
    pub fn is_editing(&self, recall_id: &str) -> bool {
        self.is_edit && self.current_recall_id.as_deref() == Some(recall_id)
    }
}
