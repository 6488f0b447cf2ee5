//! Error types for recall-engine operations.
//!
//! These cover malformed inputs only. Business-rule outcomes (date conflicts,
//! overlapping adjustments, manual-review routing) are structured results,
//! never errors — see [`crate::revocation`] and [`crate::aggregate`].

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecallError {
    /// A period's first day falls after its last day.
    #[error("Invalid period: first day {first_day} is after last day {last_day}")]
    InvalidPeriod {
        first_day: NaiveDate,
        last_day: NaiveDate,
    },

    /// A return-to-custody date precedes the revocation date it belongs to.
    #[error("Return to custody date {return_to_custody} is before revocation date {revocation}")]
    ReturnBeforeRevocation {
        revocation: NaiveDate,
        return_to_custody: NaiveDate,
    },
}

pub type Result<T> = std::result::Result<T, RecallError>;
