//! Day count conventions for fixed income calculations.
//!
//! A day count convention turns a pair of dates into a fraction of a
//! year, used to scale an annualized rate into a period's accrued
//! amount. The conventions form a closed, stateless strategy set: each is
//! a variant of [`DayCount`], dispatched by a single
//! [`fraction`](DayCount::fraction) operation.
//!
//! # Supported Conventions
//!
//! ## Degenerate
//!
//! - `1/1`: always one, regardless of the dates
//!
//! ## ACT Family (actual-day numerator)
//!
//! - `Act/360`, `Act/364`, `Act/365F`, `Act/365.25`: fixed denominators
//! - `Act/365 Actual`: denominator 366 when the range spans a Feb 29
//! - `NL/365`: leap days excluded from the numerator
//! - `Act/365L`: denominator picked from the schedule period
//! - `Act/Act ISDA`: per-calendar-year split
//! - `Act/Act ICMA`: nominal-period based (government bonds)
//! - `Act/Act AFB`: French convention, whole years rolled from the end
//!
//! ## 30/360 Family (30-day months, 360-day years)
//!
//! - `30/360 ISDA`, `30U/360`, `30E/360`, `30E/360 ISDA`, `30E+/360`
//!
//! Several conventions are context-sensitive: they consult a
//! [`SchedulePeriodContext`] describing the schedule period the date pair
//! belongs to, and fail fast when a required field is absent.
//!
//! # Usage
//!
//! ```rust
//! use fincal_core::daycounts::DayCount;
//! use fincal_core::types::Date;
//! use rust_decimal_macros::dec;
//!
//! let start = Date::from_ymd(2011, 12, 28).unwrap();
//! let end = Date::from_ymd(2012, 2, 28).unwrap();
//!
//! let dc = DayCount::of("Act/360").unwrap();
//! assert_eq!(dc.fraction(start, end).unwrap(), dec!(62) / dec!(360));
//! ```

mod actact;
mod actual;
mod thirty360;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use std::str::FromStr;

use crate::error::{FincalError, FincalResult};
use crate::types::{Date, SchedulePeriodContext};

/// Enumeration of all supported day count conventions.
///
/// Each variant is stateless and immutable; its identity is the
/// canonical, case-sensitive name returned by [`name`](DayCount::name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCount {
    /// 1/1 - always one
    OneOne,

    /// Actual/Actual ISDA - per-calendar-year split
    ActActIsda,

    /// Actual/Actual ICMA - nominal-period based, requires schedule context
    ActActIcma,

    /// Actual/Actual AFB - French convention
    ActActAfb,

    /// Actual/365 Actual - denominator 366 when the range spans a Feb 29
    Act365Actual,

    /// Actual/365L - denominator picked from the schedule period
    Act365L,

    /// Actual/360 - money market convention
    Act360,

    /// Actual/364
    Act364,

    /// Actual/365 Fixed
    Act365F,

    /// Actual/365.25
    Act36525,

    /// No-Leap/365 - leap days excluded from the numerator
    Nl365,

    /// 30/360 ISDA - month-end promotion on both dates
    Thirty360Isda,

    /// 30U/360 - US convention, February handling behind the EOM flag
    ThirtyU360,

    /// 30E/360 ISDA - February promotion except at maturity
    ThirtyE360Isda,

    /// 30E/360 - Eurobond convention
    ThirtyE360,

    /// 30E+/360 - day 31 rolls into the next month
    ThirtyEPlus360,
}

impl DayCount {
    /// Calculates the day count fraction between two dates.
    ///
    /// Uses a default schedule context: no optional fields, end-of-month
    /// rolling on, end date not the schedule end date. Conventions that
    /// need more context fail fast.
    ///
    /// # Errors
    ///
    /// Fails with `DateOrder` when `date1 > date2`, or with
    /// `SchedulePeriod` when the convention requires an absent field.
    pub fn fraction(&self, date1: Date, date2: Date) -> FincalResult<Decimal> {
        self.fraction_with_context(date1, date2, &SchedulePeriodContext::new())
    }

    /// Calculates the day count fraction using schedule period context.
    ///
    /// For every convention except `1/1`, equal dates give zero; `1/1`
    /// gives one regardless of the inputs.
    ///
    /// # Errors
    ///
    /// Fails with `DateOrder` when `date1 > date2`, with
    /// `SchedulePeriod` when a required context field is absent, or when
    /// the combination is unsupported (Act/Act ICMA for a term period).
    pub fn fraction_with_context(
        &self,
        date1: Date,
        date2: Date,
        info: &SchedulePeriodContext,
    ) -> FincalResult<Decimal> {
        if date1 > date2 {
            return Err(FincalError::date_order(date1, date2));
        }
        match self {
            DayCount::OneOne => Ok(Decimal::ONE),
            _ if date1 == date2 => Ok(Decimal::ZERO),
            DayCount::ActActIsda => actact::isda(date1, date2),
            DayCount::ActActIcma => actact::icma(date1, date2, info),
            DayCount::ActActAfb => actact::afb(date1, date2),
            DayCount::Act365Actual => actual::act_365_actual(date1, date2),
            DayCount::Act365L => actual::act_365l(date1, date2, info),
            DayCount::Act360 => actual::fixed_denominator(date1, date2, dec!(360)),
            DayCount::Act364 => actual::fixed_denominator(date1, date2, dec!(364)),
            DayCount::Act365F => actual::fixed_denominator(date1, date2, dec!(365)),
            DayCount::Act36525 => actual::fixed_denominator(date1, date2, dec!(365.25)),
            DayCount::Nl365 => actual::nl_365(date1, date2),
            DayCount::Thirty360Isda => thirty360::isda(date1, date2),
            DayCount::ThirtyU360 => thirty360::u360(date1, date2, info),
            DayCount::ThirtyE360Isda => thirty360::e360_isda(date1, date2, info),
            DayCount::ThirtyE360 => thirty360::e360(date1, date2),
            DayCount::ThirtyEPlus360 => thirty360::eplus360(date1, date2),
        }
    }

    /// Returns the canonical display name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCount::OneOne => "1/1",
            DayCount::ActActIsda => "Act/Act ISDA",
            DayCount::ActActIcma => "Act/Act ICMA",
            DayCount::ActActAfb => "Act/Act AFB",
            DayCount::Act365Actual => "Act/365 Actual",
            DayCount::Act365L => "Act/365L",
            DayCount::Act360 => "Act/360",
            DayCount::Act364 => "Act/364",
            DayCount::Act365F => "Act/365F",
            DayCount::Act36525 => "Act/365.25",
            DayCount::Nl365 => "NL/365",
            DayCount::Thirty360Isda => "30/360 ISDA",
            DayCount::ThirtyU360 => "30U/360",
            DayCount::ThirtyE360Isda => "30E/360 ISDA",
            DayCount::ThirtyE360 => "30E/360",
            DayCount::ThirtyEPlus360 => "30E+/360",
        }
    }

    /// Looks up a convention by its canonical name.
    ///
    /// Lookup is case-sensitive and exact: `"Act/360"` resolves,
    /// `"ACT/360"` does not.
    ///
    /// # Errors
    ///
    /// Returns `FincalError::NotFound` for an unknown name.
    pub fn of(name: &str) -> FincalResult<Self> {
        Self::all()
            .iter()
            .find(|dc| dc.name() == name)
            .copied()
            .ok_or_else(|| FincalError::not_found("day count convention", name))
    }

    /// Returns all registered conventions.
    #[must_use]
    pub fn all() -> &'static [DayCount] {
        &[
            DayCount::OneOne,
            DayCount::ActActIsda,
            DayCount::ActActIcma,
            DayCount::ActActAfb,
            DayCount::Act365Actual,
            DayCount::Act365L,
            DayCount::Act360,
            DayCount::Act364,
            DayCount::Act365F,
            DayCount::Act36525,
            DayCount::Nl365,
            DayCount::Thirty360Isda,
            DayCount::ThirtyU360,
            DayCount::ThirtyE360Isda,
            DayCount::ThirtyE360,
            DayCount::ThirtyEPlus360,
        ]
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCount {
    type Err = FincalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}
