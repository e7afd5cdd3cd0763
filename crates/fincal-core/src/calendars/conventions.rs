//! Business day adjustment conventions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Calendar;
use crate::error::{FincalError, FincalResult};
use crate::types::Date;

/// Business day adjustment conventions.
///
/// These conventions specify how to adjust a date that falls on a
/// non-business day. Each is a pure, stateless mapping from a date and a
/// calendar to an adjusted date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessDayConvention {
    /// No adjustment - use the date as-is even if not a business day.
    NoAdjust,

    /// Move to the following business day.
    #[default]
    Following,

    /// Move to the following business day, unless it crosses a month
    /// boundary, in which case move to the preceding business day.
    ModifiedFollowing,

    /// Move to the preceding business day.
    Preceding,

    /// Move to the preceding business day, unless it crosses a month
    /// boundary, in which case move to the following business day.
    ModifiedPreceding,

    /// Move to the nearest business day; ties go to the following one.
    Nearest,
}

impl BusinessDayConvention {
    /// Adjusts a date according to this convention.
    pub fn adjust<C: Calendar + ?Sized>(&self, date: Date, calendar: &C) -> Date {
        if calendar.is_business_day(date) {
            return date;
        }

        match self {
            BusinessDayConvention::NoAdjust => date,

            BusinessDayConvention::Following => calendar.next_or_same(date),

            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = calendar.next_or_same(date);
                if adjusted.month() != date.month() {
                    calendar.previous_or_same(date)
                } else {
                    adjusted
                }
            }

            BusinessDayConvention::Preceding => calendar.previous_or_same(date),

            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = calendar.previous_or_same(date);
                if adjusted.month() != date.month() {
                    calendar.next_or_same(date)
                } else {
                    adjusted
                }
            }

            BusinessDayConvention::Nearest => {
                let fwd = calendar.next_or_same(date);
                let back = calendar.previous_or_same(date);

                if date.days_between(&fwd) <= back.days_between(&date) {
                    fwd
                } else {
                    back
                }
            }
        }
    }

    /// Returns the canonical name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            BusinessDayConvention::NoAdjust => "NoAdjust",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "ModifiedFollowing",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "ModifiedPreceding",
            BusinessDayConvention::Nearest => "Nearest",
        }
    }

    /// Looks up a convention by its canonical name.
    ///
    /// # Errors
    ///
    /// Returns `FincalError::NotFound` for an unknown name.
    pub fn of(name: &str) -> FincalResult<Self> {
        Self::all()
            .iter()
            .find(|c| c.name() == name)
            .copied()
            .ok_or_else(|| FincalError::not_found("business day convention", name))
    }

    /// Returns all conventions.
    #[must_use]
    pub fn all() -> &'static [BusinessDayConvention] {
        &[
            BusinessDayConvention::NoAdjust,
            BusinessDayConvention::Following,
            BusinessDayConvention::ModifiedFollowing,
            BusinessDayConvention::Preceding,
            BusinessDayConvention::ModifiedPreceding,
            BusinessDayConvention::Nearest,
        ]
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{HolidayCalendar, SAT_SUN};

    fn cal() -> HolidayCalendar {
        HolidayCalendar::of(SAT_SUN).unwrap()
    }

    #[test]
    fn test_following() {
        // Saturday rolls to Monday
        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        let adjusted = BusinessDayConvention::Following.adjust(saturday, &cal());
        assert_eq!(adjusted, Date::from_ymd(2025, 1, 6).unwrap());
    }

    #[test]
    fn test_preceding() {
        // Saturday rolls to Friday
        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        let adjusted = BusinessDayConvention::Preceding.adjust(saturday, &cal());
        assert_eq!(adjusted, Date::from_ymd(2025, 1, 3).unwrap());
    }

    #[test]
    fn test_modified_following_same_month() {
        // Sunday Jan 5 rolls forward to Monday Jan 6 (same month)
        let sunday = Date::from_ymd(2025, 1, 5).unwrap();
        let adjusted = BusinessDayConvention::ModifiedFollowing.adjust(sunday, &cal());
        assert_eq!(adjusted, Date::from_ymd(2025, 1, 6).unwrap());
    }

    #[test]
    fn test_modified_following_month_cross() {
        // Saturday Aug 30 2025: following is Mon Sep 1, so fall back to Fri Aug 29
        let saturday = Date::from_ymd(2025, 8, 30).unwrap();
        let adjusted = BusinessDayConvention::ModifiedFollowing.adjust(saturday, &cal());
        assert_eq!(adjusted, Date::from_ymd(2025, 8, 29).unwrap());
    }

    #[test]
    fn test_modified_preceding_month_cross() {
        // Sunday Jun 1 2025: preceding is Fri May 30, so roll forward to Mon Jun 2
        let sunday = Date::from_ymd(2025, 6, 1).unwrap();
        let adjusted = BusinessDayConvention::ModifiedPreceding.adjust(sunday, &cal());
        assert_eq!(adjusted, Date::from_ymd(2025, 6, 2).unwrap());
    }

    #[test]
    fn test_nearest() {
        // Saturday is one day from Friday, two from Monday
        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        let adjusted = BusinessDayConvention::Nearest.adjust(saturday, &cal());
        assert_eq!(adjusted, Date::from_ymd(2025, 1, 3).unwrap());

        // Sunday is one day from Monday
        let sunday = Date::from_ymd(2025, 1, 5).unwrap();
        let adjusted = BusinessDayConvention::Nearest.adjust(sunday, &cal());
        assert_eq!(adjusted, Date::from_ymd(2025, 1, 6).unwrap());
    }

    #[test]
    fn test_no_adjust() {
        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        let adjusted = BusinessDayConvention::NoAdjust.adjust(saturday, &cal());
        assert_eq!(adjusted, saturday);
    }

    #[test]
    fn test_business_day_unchanged() {
        let monday = Date::from_ymd(2025, 1, 6).unwrap();
        for convention in BusinessDayConvention::all() {
            assert_eq!(convention.adjust(monday, &cal()), monday);
        }
    }

    #[test]
    fn test_name_lookup_round_trip() {
        for convention in BusinessDayConvention::all() {
            assert_eq!(
                BusinessDayConvention::of(convention.name()).unwrap(),
                *convention
            );
        }
        assert!(BusinessDayConvention::of("Rubbish").is_err());
    }
}
