//! Schedule period context for context-sensitive day counts.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FincalError, FincalResult};
use crate::types::{Date, Frequency};

/// Classification of a schedule period relative to its schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchedulePeriodType {
    /// The first period of a schedule, possibly a stub.
    Initial,
    /// A regular period, one nominal frequency long.
    Normal,
    /// The last period of a schedule, possibly a stub.
    Final,
    /// The only period of a schedule covering the entire term.
    Term,
}

impl fmt::Display for SchedulePeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SchedulePeriodType::Initial => "Initial",
            SchedulePeriodType::Normal => "Normal",
            SchedulePeriodType::Final => "Final",
            SchedulePeriodType::Term => "Term",
        };
        write!(f, "{name}")
    }
}

/// Contextual information about one schedule period.
///
/// Day count conventions that depend on the shape of the schedule
/// (Act/Act ICMA, Act/365L, 30U/360, 30E/360 ISDA) receive this value
/// alongside the date pair. It is a pure data carrier: callers build one
/// per calculation and discard it afterwards.
///
/// The two boolean fields are always present. The remaining fields are
/// optional; a convention that needs an absent field fails fast with a
/// descriptive error rather than guessing.
///
/// # Example
///
/// ```rust
/// use fincal_core::types::{Date, Frequency, SchedulePeriodContext, SchedulePeriodType};
///
/// let period_end = Date::from_ymd(2024, 5, 1).unwrap();
/// let ctx = SchedulePeriodContext::of(Frequency::SemiAnnual, period_end, SchedulePeriodType::Normal);
/// assert_eq!(ctx.frequency().unwrap(), Frequency::SemiAnnual);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePeriodContext {
    /// Whether the queried end date is the final date of the whole schedule.
    schedule_end_date: bool,
    /// Whether end-of-month rolling applies when stepping nominal periods.
    end_of_month_convention: bool,
    /// The nominal payment frequency, if known.
    frequency: Option<Frequency>,
    /// The end date of the schedule period, if known.
    period_end_date: Option<Date>,
    /// The period classification, if known.
    period_type: Option<SchedulePeriodType>,
}

impl SchedulePeriodContext {
    /// Creates a context with all optional fields absent.
    ///
    /// End-of-month rolling defaults to on, matching the behaviour of
    /// schedule builders that do not override it.
    #[must_use]
    pub fn new() -> Self {
        Self {
            schedule_end_date: false,
            end_of_month_convention: true,
            frequency: None,
            period_end_date: None,
            period_type: None,
        }
    }

    /// Creates a fully populated context for one schedule period.
    #[must_use]
    pub fn of(
        frequency: Frequency,
        period_end_date: Date,
        period_type: SchedulePeriodType,
    ) -> Self {
        Self {
            schedule_end_date: false,
            end_of_month_convention: true,
            frequency: Some(frequency),
            period_end_date: Some(period_end_date),
            period_type: Some(period_type),
        }
    }

    /// Sets whether the queried end date is the final schedule end date.
    #[must_use]
    pub fn with_schedule_end_date(mut self, schedule_end_date: bool) -> Self {
        self.schedule_end_date = schedule_end_date;
        self
    }

    /// Sets whether end-of-month rolling applies.
    #[must_use]
    pub fn with_end_of_month(mut self, end_of_month: bool) -> Self {
        self.end_of_month_convention = end_of_month;
        self
    }

    /// Returns true if the queried end date is the final schedule end date.
    #[must_use]
    pub fn is_schedule_end_date(&self) -> bool {
        self.schedule_end_date
    }

    /// Returns true if end-of-month rolling applies.
    #[must_use]
    pub fn is_end_of_month_convention(&self) -> bool {
        self.end_of_month_convention
    }

    /// Returns the nominal payment frequency.
    ///
    /// # Errors
    ///
    /// Fails when the frequency was not supplied.
    pub fn frequency(&self) -> FincalResult<Frequency> {
        self.frequency
            .ok_or_else(|| FincalError::schedule_period("frequency not supplied"))
    }

    /// Returns the end date of the schedule period.
    ///
    /// # Errors
    ///
    /// Fails when the period end date was not supplied.
    pub fn period_end_date(&self) -> FincalResult<Date> {
        self.period_end_date
            .ok_or_else(|| FincalError::schedule_period("period end date not supplied"))
    }

    /// Returns the period classification.
    ///
    /// # Errors
    ///
    /// Fails when the period type was not supplied.
    pub fn period_type(&self) -> FincalResult<SchedulePeriodType> {
        self.period_type
            .ok_or_else(|| FincalError::schedule_period("period type not supplied"))
    }
}

impl Default for SchedulePeriodContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ctx = SchedulePeriodContext::new();
        assert!(!ctx.is_schedule_end_date());
        assert!(ctx.is_end_of_month_convention());
        assert!(ctx.frequency().is_err());
        assert!(ctx.period_end_date().is_err());
        assert!(ctx.period_type().is_err());
    }

    #[test]
    fn test_missing_field_errors_are_descriptive() {
        let ctx = SchedulePeriodContext::new();
        let err = ctx.frequency().unwrap_err();
        assert!(err.to_string().contains("frequency"));
        let err = ctx.period_end_date().unwrap_err();
        assert!(err.to_string().contains("period end date"));
    }

    #[test]
    fn test_populated() {
        let end = Date::from_ymd(2024, 5, 1).unwrap();
        let ctx = SchedulePeriodContext::of(Frequency::Quarterly, end, SchedulePeriodType::Final)
            .with_schedule_end_date(true)
            .with_end_of_month(false);

        assert!(ctx.is_schedule_end_date());
        assert!(!ctx.is_end_of_month_convention());
        assert_eq!(ctx.frequency().unwrap(), Frequency::Quarterly);
        assert_eq!(ctx.period_end_date().unwrap(), end);
        assert_eq!(ctx.period_type().unwrap(), SchedulePeriodType::Final);
    }

    #[test]
    fn test_serde_round_trip() {
        let end = Date::from_ymd(2024, 5, 1).unwrap();
        let ctx = SchedulePeriodContext::of(Frequency::SemiAnnual, end, SchedulePeriodType::Normal);
        let json = serde_json::to_string(&ctx).unwrap();
        let parsed: SchedulePeriodContext = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, parsed);
    }
}
