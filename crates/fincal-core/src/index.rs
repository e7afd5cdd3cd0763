//! Fixing and maturity date mapping for rate indices.

use std::fmt;

use crate::calendars::{Calendar, DaysAdjustment, HolidayCalendar};
use crate::types::Date;

/// Maps between the fixing date and the maturity date of an index.
///
/// The fixing date is when the rate is observed; the maturity date is
/// when the indexed deposit notionally starts, usually a small number of
/// business days later. The forward mapping is a single adjustment; the
/// backward mapping searches for the latest fixing date that produces a
/// maturity no later than the requested one.
///
/// # Example
///
/// ```rust
/// use fincal_core::calendars::{DaysAdjustment, HolidayCalendar, SAT_SUN};
/// use fincal_core::index::FxIndexDateMapper;
/// use fincal_core::types::Date;
///
/// let cal = HolidayCalendar::of(SAT_SUN).unwrap();
/// let mapper = FxIndexDateMapper::new(cal.clone(), DaysAdjustment::of_business_days(2, cal));
///
/// let fixing = Date::from_ymd(2025, 1, 2).unwrap();
/// let maturity = mapper.maturity_from_fixing(fixing);
/// assert_eq!(maturity, Date::from_ymd(2025, 1, 6).unwrap());
/// assert_eq!(mapper.fixing_from_maturity(maturity), fixing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FxIndexDateMapper {
    /// Calendar that the fixing date follows.
    fixing_calendar: HolidayCalendar,
    /// Adjustment applied to the fixing date to obtain the maturity date.
    maturity_date_offset: DaysAdjustment,
}

impl FxIndexDateMapper {
    /// Creates a mapper from a fixing calendar and a maturity offset.
    #[must_use]
    pub fn new(fixing_calendar: HolidayCalendar, maturity_date_offset: DaysAdjustment) -> Self {
        Self {
            fixing_calendar,
            maturity_date_offset,
        }
    }

    /// Returns the calendar that the fixing date follows.
    #[must_use]
    pub fn fixing_calendar(&self) -> &HolidayCalendar {
        &self.fixing_calendar
    }

    /// Returns the adjustment from fixing date to maturity date.
    #[must_use]
    pub fn maturity_date_offset(&self) -> &DaysAdjustment {
        &self.maturity_date_offset
    }

    /// Computes the maturity date from a fixing date.
    ///
    /// The fixing date is first moved to a fixing-calendar business day,
    /// then the maturity offset is applied.
    #[must_use]
    pub fn maturity_from_fixing(&self, fixing_date: Date) -> Date {
        let fixing_business_day = self.fixing_calendar.next_or_same(fixing_date);
        self.maturity_date_offset.adjust(fixing_business_day)
    }

    /// Computes the fixing date from a maturity date.
    ///
    /// This is a backward search: starting from the maturity date moved
    /// to a business day on the maturity calendar, candidates step back
    /// one calendar day at a time until one is a fixing-calendar business
    /// day whose adjusted maturity does not overshoot. The scan is
    /// bounded by the offset size plus the holiday run length; a calendar
    /// with unbounded consecutive holidays is an accepted operational
    /// limit, not defended against.
    #[must_use]
    pub fn fixing_from_maturity(&self, maturity_date: Date) -> Date {
        let effective_calendar = self.maturity_date_calendar();
        let effective_day = effective_calendar.next_or_same(maturity_date);
        let mut fixing_date = effective_day;
        while self.maturity_date_offset.adjust(fixing_date) > effective_day
            || self.fixing_calendar.is_holiday(fixing_date)
        {
            fixing_date = fixing_date.add_days(-1);
        }
        fixing_date
    }

    /// Finds the calendar of the maturity date.
    fn maturity_date_calendar(&self) -> &HolidayCalendar {
        let calendar = self.maturity_date_offset.effective_result_calendar();
        if calendar.has_no_holidays() {
            &self.fixing_calendar
        } else {
            calendar
        }
    }
}

impl fmt::Display for FxIndexDateMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fixing on {}, maturity {}",
            self.fixing_calendar.name(),
            self.maturity_date_offset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{Weekend, SAT_SUN};

    fn sat_sun() -> HolidayCalendar {
        HolidayCalendar::of(SAT_SUN).unwrap()
    }

    fn two_day_mapper() -> FxIndexDateMapper {
        let cal = sat_sun();
        FxIndexDateMapper::new(cal.clone(), DaysAdjustment::of_business_days(2, cal))
    }

    #[test]
    fn test_maturity_from_fixing() {
        let mapper = two_day_mapper();

        // Thursday fixing, Monday maturity
        let thursday = Date::from_ymd(2025, 1, 2).unwrap();
        assert_eq!(
            mapper.maturity_from_fixing(thursday),
            Date::from_ymd(2025, 1, 6).unwrap()
        );
    }

    #[test]
    fn test_maturity_from_fixing_on_holiday() {
        let mapper = two_day_mapper();

        // Saturday fixing moves to Monday before the offset applies
        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        assert_eq!(
            mapper.maturity_from_fixing(saturday),
            Date::from_ymd(2025, 1, 8).unwrap()
        );
    }

    #[test]
    fn test_fixing_from_maturity() {
        let mapper = two_day_mapper();

        // Monday maturity, Thursday fixing
        let monday = Date::from_ymd(2025, 1, 6).unwrap();
        assert_eq!(
            mapper.fixing_from_maturity(monday),
            Date::from_ymd(2025, 1, 2).unwrap()
        );
    }

    #[test]
    fn test_round_trip_over_business_days() {
        let mapper = two_day_mapper();

        // every business day in a fortnight survives the round trip
        let mut date = Date::from_ymd(2025, 3, 3).unwrap();
        let end = Date::from_ymd(2025, 3, 17).unwrap();
        while date < end {
            if mapper.fixing_calendar().is_business_day(date) {
                let maturity = mapper.maturity_from_fixing(date);
                assert_eq!(mapper.fixing_from_maturity(maturity), date, "{date}");
            }
            date = date.add_days(1);
        }
    }

    #[test]
    fn test_fixing_from_maturity_skips_fixing_holiday() {
        // a fixing-calendar holiday cannot be a fixing date
        let holiday = Date::from_ymd(2025, 1, 2).unwrap();
        let fixing_cal =
            HolidayCalendar::from_dates("Fixing", Weekend::SaturdaySunday, vec![holiday]);
        let mapper = FxIndexDateMapper::new(
            fixing_cal.clone(),
            DaysAdjustment::of_business_days(2, fixing_cal),
        );

        // the scan steps over the Jan 2 holiday back to Wednesday Jan 1
        let maturity = Date::from_ymd(2025, 1, 6).unwrap();
        let fixing = mapper.fixing_from_maturity(maturity);
        assert_eq!(fixing, Date::from_ymd(2025, 1, 1).unwrap());
        assert!(mapper.fixing_calendar().is_business_day(fixing));
        assert_eq!(mapper.maturity_from_fixing(fixing), maturity);
    }

    #[test]
    fn test_calendar_day_offset_uses_fixing_calendar_for_maturity() {
        // a pure calendar-day offset leaves the effective calendar as
        // no-holidays, which falls back to the fixing calendar
        let mapper = FxIndexDateMapper::new(sat_sun(), DaysAdjustment::of_calendar_days(0));

        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        assert_eq!(
            mapper.fixing_from_maturity(saturday),
            Date::from_ymd(2025, 1, 6).unwrap()
        );
    }
}
