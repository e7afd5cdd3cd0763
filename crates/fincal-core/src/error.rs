//! Error types for the Fincal library.
//!
//! All errors are local and synchronous: every operation either returns a
//! complete result or fails immediately with one of the variants below.

use thiserror::Error;

use crate::types::Date;

/// A specialized Result type for Fincal operations.
pub type FincalResult<T> = Result<T, FincalError>;

/// The main error type for Fincal operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FincalError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// The two dates of a date pair were passed in the wrong order.
    #[error("Dates out of order: {date1} is after {date2}")]
    DateOrder {
        /// The start date of the pair.
        date1: Date,
        /// The end date of the pair.
        date2: Date,
    },

    /// A schedule period context field was absent or unusable.
    #[error("Schedule period error: {reason}")]
    SchedulePeriod {
        /// Description of the missing or unsupported context.
        reason: String,
    },

    /// Calendar data could not be loaded or was malformed.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },

    /// A name-based lookup failed.
    ///
    /// Distinct from the invalid-argument errors above: the arguments were
    /// well formed, but nothing is registered under the given name.
    #[error("{kind} not found: '{name}'")]
    NotFound {
        /// What was looked up ("day count convention", "calendar").
        kind: &'static str,
        /// The name that failed to resolve.
        name: String,
    },
}

impl FincalError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a date order error.
    #[must_use]
    pub fn date_order(date1: Date, date2: Date) -> Self {
        Self::DateOrder { date1, date2 }
    }

    /// Creates a schedule period error.
    #[must_use]
    pub fn schedule_period(reason: impl Into<String>) -> Self {
        Self::SchedulePeriod {
            reason: reason.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar_error(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }

    /// Creates a lookup failure error.
    #[must_use]
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FincalError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_date_order_display() {
        let d1 = Date::from_ymd(2024, 6, 2).unwrap();
        let d2 = Date::from_ymd(2024, 6, 1).unwrap();
        let err = FincalError::date_order(d1, d2);
        assert!(err.to_string().contains("2024-06-02"));
        assert!(err.to_string().contains("2024-06-01"));
    }

    #[test]
    fn test_not_found_distinct_from_invalid() {
        let err = FincalError::not_found("day count convention", "Rubbish");
        assert!(matches!(err, FincalError::NotFound { .. }));
        assert!(err.to_string().contains("Rubbish"));
    }
}
