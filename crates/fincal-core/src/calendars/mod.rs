//! Holiday calendars and business day queries.
//!
//! This module provides:
//! - The [`Calendar`] query trait used by all date-adjustment code
//! - [`HolidayCalendar`], an immutable named calendar built from a
//!   weekend rule plus a set of holiday dates
//! - A name-keyed registry with the standard built-in calendars

use chrono::Weekday;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

mod adjustment;
mod conventions;

pub use adjustment::DaysAdjustment;
pub use conventions::BusinessDayConvention;

use crate::error::{FincalError, FincalResult};
use crate::types::Date;

/// Name of the built-in calendar with no holidays and no weekends.
pub const NO_HOLIDAYS: &str = "NoHolidays";
/// Name of the built-in Saturday/Sunday weekend-only calendar.
pub const SAT_SUN: &str = "Sat/Sun";
/// Name of the built-in Friday/Saturday weekend-only calendar.
pub const FRI_SAT: &str = "Fri/Sat";
/// Name of the built-in Thursday/Friday weekend-only calendar.
pub const THU_FRI: &str = "Thu/Fri";

/// Weekend rule of a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Weekend {
    /// Saturday and Sunday (most markets)
    #[default]
    SaturdaySunday,
    /// Friday and Saturday (Middle East markets)
    FridaySaturday,
    /// Thursday and Friday
    ThursdayFriday,
    /// Sunday only
    SundayOnly,
    /// No weekends
    None,
}

impl Weekend {
    /// Checks if a weekday falls on this weekend rule.
    #[inline]
    #[must_use]
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        match self {
            Weekend::SaturdaySunday => matches!(weekday, Weekday::Sat | Weekday::Sun),
            Weekend::FridaySaturday => matches!(weekday, Weekday::Fri | Weekday::Sat),
            Weekend::ThursdayFriday => matches!(weekday, Weekday::Thu | Weekday::Fri),
            Weekend::SundayOnly => matches!(weekday, Weekday::Sun),
            Weekend::None => false,
        }
    }
}

/// Query interface for business day calendars.
///
/// Calendars determine which days are business days vs holidays for a
/// specific market. All operations are pure lookups and walks; none of
/// them fail for valid dates, so concurrent use needs no synchronization.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Returns true if the date is a holiday or weekend.
    fn is_holiday(&self, date: Date) -> bool;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_holiday(date)
    }

    /// Returns the next business day on or after the given date.
    fn next_or_same(&self, date: Date) -> Date {
        let mut result = date;
        while self.is_holiday(result) {
            result = result.add_days(1);
        }
        result
    }

    /// Returns the previous business day on or before the given date.
    fn previous_or_same(&self, date: Date) -> Date {
        let mut result = date;
        while self.is_holiday(result) {
            result = result.add_days(-1);
        }
        result
    }

    /// Shifts a date by a number of business days.
    ///
    /// Positive values walk forward, negative values walk backward,
    /// skipping holidays. Zero returns the date unchanged even if it is
    /// a holiday.
    fn shift_business_days(&self, date: Date, days: i32) -> Date {
        if days == 0 {
            return date;
        }

        let direction = if days > 0 { 1i64 } else { -1i64 };
        let mut remaining = days.abs();
        let mut current = date;

        while remaining > 0 {
            current = current.add_days(direction);
            if self.is_business_day(current) {
                remaining -= 1;
            }
        }

        current
    }

    /// Counts calendar days between two dates.
    fn days_between(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    /// Counts business days in the half-open range `[start, end)`.
    fn business_days_between(&self, start: Date, end: Date) -> i64 {
        let mut count = 0;
        let mut current = start;

        while current < end {
            if self.is_business_day(current) {
                count += 1;
            }
            current = current.add_days(1);
        }

        count
    }
}

/// An immutable named holiday calendar.
///
/// A calendar owns a weekend rule and a set of holiday dates, fixed at
/// construction. Cloning is cheap: the holiday set is shared. Equality is
/// structural over name, weekend rule and holidays.
///
/// # Example
///
/// ```rust
/// use fincal_core::calendars::{Calendar, HolidayCalendar, Weekend};
/// use fincal_core::types::Date;
///
/// let holidays = vec![Date::from_ymd(2025, 1, 1).unwrap()];
/// let cal = HolidayCalendar::from_dates("Custom", Weekend::SaturdaySunday, holidays);
///
/// assert!(cal.is_holiday(Date::from_ymd(2025, 1, 1).unwrap()));
/// assert!(cal.is_business_day(Date::from_ymd(2025, 1, 2).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    name: String,
    weekend: Weekend,
    holidays: Arc<BTreeSet<Date>>,
}

impl HolidayCalendar {
    /// Creates a weekend-only calendar with no explicit holidays.
    #[must_use]
    pub fn weekend_only(name: impl Into<String>, weekend: Weekend) -> Self {
        Self {
            name: name.into(),
            weekend,
            holidays: Arc::new(BTreeSet::new()),
        }
    }

    /// Creates a calendar from a list of holiday dates.
    #[must_use]
    pub fn from_dates(
        name: impl Into<String>,
        weekend: Weekend,
        holidays: impl IntoIterator<Item = Date>,
    ) -> Self {
        Self {
            name: name.into(),
            weekend,
            holidays: Arc::new(holidays.into_iter().collect()),
        }
    }

    /// Returns the calendar on which every day is a business day.
    #[must_use]
    pub fn no_holidays() -> Self {
        Self::weekend_only(NO_HOLIDAYS, Weekend::None)
    }

    /// Looks up a calendar by name.
    ///
    /// Resolves the built-in calendars (`NoHolidays`, `Sat/Sun`,
    /// `Fri/Sat`, `Thu/Fri`) first, then calendars added via
    /// [`HolidayCalendar::register`].
    ///
    /// # Errors
    ///
    /// Returns `FincalError::NotFound` for an unknown name.
    pub fn of(name: &str) -> FincalResult<Self> {
        match name {
            NO_HOLIDAYS => Ok(Self::no_holidays()),
            SAT_SUN => Ok(Self::weekend_only(SAT_SUN, Weekend::SaturdaySunday)),
            FRI_SAT => Ok(Self::weekend_only(FRI_SAT, Weekend::FridaySaturday)),
            THU_FRI => Ok(Self::weekend_only(THU_FRI, Weekend::ThursdayFriday)),
            _ => REGISTRY
                .read()
                .expect("calendar registry poisoned")
                .get(name)
                .cloned()
                .ok_or_else(|| FincalError::not_found("calendar", name)),
        }
    }

    /// Registers a calendar under its name for later lookup.
    ///
    /// Intended to be called during startup, before concurrent use
    /// begins. Re-registering a name replaces the previous entry.
    pub fn register(calendar: HolidayCalendar) {
        log::debug!(
            "registering calendar '{}' with {} holidays",
            calendar.name,
            calendar.holidays.len()
        );
        REGISTRY
            .write()
            .expect("calendar registry poisoned")
            .insert(calendar.name.clone(), calendar);
    }

    /// Loads a calendar from a JSON document.
    ///
    /// # JSON Format
    ///
    /// ```json
    /// {
    ///   "name": "My Calendar",
    ///   "weekend": "SaturdaySunday",
    ///   "holidays": ["2025-01-01", "2025-12-25"]
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `FincalError::CalendarError` for malformed documents.
    pub fn from_json(json: &str) -> FincalResult<Self> {
        let data: CalendarData = serde_json::from_str(json).map_err(|e| {
            FincalError::calendar_error(format!("failed to parse calendar JSON: {e}"))
        })?;
        let calendar = data.build()?;
        log::debug!(
            "loaded calendar '{}' with {} holidays",
            calendar.name,
            calendar.holidays.len()
        );
        Ok(calendar)
    }

    /// Returns the weekend rule.
    #[must_use]
    pub fn weekend(&self) -> Weekend {
        self.weekend
    }

    /// Returns the number of explicit holiday dates.
    #[must_use]
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if every day is a business day on this calendar.
    #[must_use]
    pub fn has_no_holidays(&self) -> bool {
        self.weekend == Weekend::None && self.holidays.is_empty()
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.weekend.is_weekend(date.weekday()) || self.holidays.contains(&date)
    }
}

static REGISTRY: Lazy<RwLock<HashMap<String, HolidayCalendar>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Serializable calendar document.
///
/// This is the boundary format for loading calendar data from
/// configuration; the in-memory [`HolidayCalendar`] built from it is
/// immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarData {
    /// Name of the calendar
    pub name: String,

    /// Weekend rule (defaults to Saturday/Sunday)
    #[serde(default)]
    pub weekend: Option<Weekend>,

    /// Holiday dates in YYYY-MM-DD format
    #[serde(default)]
    pub holidays: Vec<String>,
}

impl CalendarData {
    /// Builds the immutable calendar described by this document.
    ///
    /// # Errors
    ///
    /// Returns `FincalError::CalendarError` if a holiday date is malformed.
    pub fn build(self) -> FincalResult<HolidayCalendar> {
        let weekend = self.weekend.unwrap_or_default();
        let mut holidays = BTreeSet::new();
        for date_str in &self.holidays {
            let date = Date::parse(date_str).map_err(|_| {
                FincalError::calendar_error(format!("invalid holiday date '{date_str}'"))
            })?;
            holidays.insert(date);
        }
        Ok(HolidayCalendar {
            name: self.name,
            weekend,
            holidays: Arc::new(holidays),
        })
    }
}
