//! Day offset combined with a business day adjustment.

use std::fmt;

use super::{BusinessDayConvention, Calendar, HolidayCalendar};
use crate::types::Date;

/// An adjustment shifting a date by a number of days.
///
/// The shift is interpreted as calendar days when the shift calendar is
/// the no-holidays calendar, and as a walk over business days otherwise.
/// The shifted date is then adjusted by a [`BusinessDayConvention`]
/// against the result calendar, which defaults to the shift calendar.
///
/// A `DaysAdjustment` represents a single offset step; two adjustments
/// cannot be composed into one.
///
/// # Example
///
/// ```rust
/// use fincal_core::calendars::{DaysAdjustment, HolidayCalendar, SAT_SUN};
/// use fincal_core::types::Date;
///
/// let cal = HolidayCalendar::of(SAT_SUN).unwrap();
/// let spot = DaysAdjustment::of_business_days(2, cal);
///
/// // Thursday + 2 business days = Monday
/// let thursday = Date::from_ymd(2025, 1, 2).unwrap();
/// assert_eq!(spot.adjust(thursday), Date::from_ymd(2025, 1, 6).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaysAdjustment {
    /// Number of days to shift, possibly negative.
    days: i32,
    /// Calendar defining the days of the shift.
    calendar: HolidayCalendar,
    /// Convention applied after the shift.
    convention: BusinessDayConvention,
    /// Calendar for the post-shift adjustment, when different from the
    /// shift calendar.
    result_calendar: Option<HolidayCalendar>,
}

impl DaysAdjustment {
    /// Returns the identity adjustment: zero days, no adjustment.
    #[must_use]
    pub fn none() -> Self {
        Self::of_calendar_days(0)
    }

    /// Creates an adjustment of a number of calendar days with no
    /// post-shift adjustment.
    #[must_use]
    pub fn of_calendar_days(days: i32) -> Self {
        Self {
            days,
            calendar: HolidayCalendar::no_holidays(),
            convention: BusinessDayConvention::NoAdjust,
            result_calendar: None,
        }
    }

    /// Creates an adjustment of a number of business days on a calendar.
    #[must_use]
    pub fn of_business_days(days: i32, calendar: HolidayCalendar) -> Self {
        Self {
            days,
            calendar,
            convention: BusinessDayConvention::NoAdjust,
            result_calendar: None,
        }
    }

    /// Adds a post-shift adjustment against a result calendar.
    #[must_use]
    pub fn with_adjustment(
        mut self,
        convention: BusinessDayConvention,
        result_calendar: HolidayCalendar,
    ) -> Self {
        self.convention = convention;
        self.result_calendar = Some(result_calendar);
        self
    }

    /// Applies the adjustment to a date.
    #[must_use]
    pub fn adjust(&self, date: Date) -> Date {
        let shifted = if self.calendar.has_no_holidays() {
            date.add_days(i64::from(self.days))
        } else {
            self.calendar.shift_business_days(date, self.days)
        };
        self.convention.adjust(shifted, self.effective_result_calendar())
    }

    /// Returns the number of days of the shift.
    #[must_use]
    pub fn days(&self) -> i32 {
        self.days
    }

    /// Returns the calendar defining the days of the shift.
    #[must_use]
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Returns the convention applied after the shift.
    #[must_use]
    pub fn convention(&self) -> BusinessDayConvention {
        self.convention
    }

    /// Returns the calendar the post-shift adjustment runs against:
    /// the result calendar if set, else the shift calendar.
    #[must_use]
    pub fn effective_result_calendar(&self) -> &HolidayCalendar {
        self.result_calendar.as_ref().unwrap_or(&self.calendar)
    }
}

impl Default for DaysAdjustment {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for DaysAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.calendar.has_no_holidays() {
            write!(f, "{} calendar days", self.days)?;
        } else {
            write!(f, "{} business days on {}", self.days, self.calendar.name())?;
        }
        if self.convention != BusinessDayConvention::NoAdjust {
            write!(
                f,
                ", then {} on {}",
                self.convention,
                self.effective_result_calendar().name()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::SAT_SUN;

    fn sat_sun() -> HolidayCalendar {
        HolidayCalendar::of(SAT_SUN).unwrap()
    }

    #[test]
    fn test_none_is_identity() {
        let adj = DaysAdjustment::none();
        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        assert_eq!(adj.adjust(saturday), saturday);
    }

    #[test]
    fn test_calendar_days_plain() {
        let adj = DaysAdjustment::of_calendar_days(2);
        let thursday = Date::from_ymd(2025, 1, 2).unwrap();
        // plain day shift lands on Saturday and stays there
        assert_eq!(adj.adjust(thursday), Date::from_ymd(2025, 1, 4).unwrap());
    }

    #[test]
    fn test_calendar_days_with_adjustment() {
        let adj = DaysAdjustment::of_calendar_days(2)
            .with_adjustment(BusinessDayConvention::Following, sat_sun());
        let thursday = Date::from_ymd(2025, 1, 2).unwrap();
        // Saturday rolls forward to Monday on the result calendar
        assert_eq!(adj.adjust(thursday), Date::from_ymd(2025, 1, 6).unwrap());
    }

    #[test]
    fn test_business_days() {
        let adj = DaysAdjustment::of_business_days(2, sat_sun());
        let thursday = Date::from_ymd(2025, 1, 2).unwrap();
        assert_eq!(adj.adjust(thursday), Date::from_ymd(2025, 1, 6).unwrap());

        let adj = DaysAdjustment::of_business_days(-2, sat_sun());
        let monday = Date::from_ymd(2025, 1, 6).unwrap();
        assert_eq!(adj.adjust(monday), Date::from_ymd(2025, 1, 2).unwrap());
    }

    #[test]
    fn test_result_calendar_differs_from_shift_calendar() {
        // a one-holiday result calendar pushes the shifted date onward
        let holiday = Date::from_ymd(2025, 1, 6).unwrap();
        let result_cal =
            HolidayCalendar::from_dates("Result", crate::calendars::Weekend::SaturdaySunday, vec![holiday]);

        let adj = DaysAdjustment::of_business_days(2, sat_sun())
            .with_adjustment(BusinessDayConvention::Following, result_cal.clone());
        assert_eq!(adj.effective_result_calendar(), &result_cal);

        let thursday = Date::from_ymd(2025, 1, 2).unwrap();
        // shift lands on Monday Jan 6, a holiday on the result calendar
        assert_eq!(adj.adjust(thursday), Date::from_ymd(2025, 1, 7).unwrap());
    }

    #[test]
    fn test_effective_result_calendar_defaults_to_shift_calendar() {
        let cal = sat_sun();
        let adj = DaysAdjustment::of_business_days(1, cal.clone());
        assert_eq!(adj.effective_result_calendar(), &cal);
    }

    #[test]
    fn test_display() {
        let adj = DaysAdjustment::of_calendar_days(2)
            .with_adjustment(BusinessDayConvention::Following, sat_sun());
        assert_eq!(adj.to_string(), "2 calendar days, then Following on Sat/Sun");

        let adj = DaysAdjustment::of_business_days(2, sat_sun());
        assert_eq!(adj.to_string(), "2 business days on Sat/Sun");
    }

}
