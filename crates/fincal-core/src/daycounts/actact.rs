//! Actual/Actual day count conventions.
//!
//! The three Act/Act variants differ in where the denominator comes from:
//! ISDA splits at calendar year boundaries, ICMA works over nominal
//! schedule periods, and AFB rolls whole years back from the end date.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{FincalError, FincalResult};
use crate::types::{Date, SchedulePeriodContext, SchedulePeriodType};

/// Act/Act ISDA.
///
/// The interval is split at each Jan 1; each calendar-year segment
/// contributes its actual days over the length of that year.
pub(super) fn isda(date1: Date, date2: Date) -> FincalResult<Decimal> {
    let y1 = date1.year();
    let y2 = date2.year();
    if y1 == y2 {
        let days = date1.days_between(&date2);
        return Ok(Decimal::from(days) / Decimal::from(date1.days_in_year()));
    }

    let first_year_end = Date::from_ymd(y1 + 1, 1, 1)?;
    let last_year_start = Date::from_ymd(y2, 1, 1)?;
    let first = Decimal::from(date1.days_between(&first_year_end))
        / Decimal::from(date1.days_in_year());
    let last = Decimal::from(last_year_start.days_between(&date2))
        / Decimal::from(date2.days_in_year());
    Ok(first + last + Decimal::from(y2 - y1 - 1))
}

/// Act/Act AFB.
///
/// Whole years are counted by rolling the original end date back one
/// year at a time while the rolled date stays on or after the start
/// date. Rolling is day-clamped, so a Feb 29 end date maps to Feb 28 in
/// non-leap target years and back to Feb 29 in leap target years. The
/// remainder `[date1, end)` is divided by 366 when it contains a Feb 29,
/// else by 365.
pub(super) fn afb(date1: Date, date2: Date) -> FincalResult<Decimal> {
    let mut end = date2;
    let mut years = 0;
    loop {
        let rolled = date2.add_years(-(years + 1))?;
        if rolled < date1 {
            break;
        }
        years += 1;
        end = rolled;
    }

    let days = date1.days_between(&end);
    let denominator = if date1.next_or_same_leap_day() < end {
        dec!(366)
    } else {
        dec!(365)
    };
    Ok(Decimal::from(years) + Decimal::from(days) / denominator)
}

/// Act/Act ICMA.
///
/// The date pair is mapped onto nominal sub-periods of the schedule
/// period, stepped by the nominal frequency. Each overlapping sub-period
/// contributes its actual overlap days over `periods-per-year x actual
/// sub-period days`. Final stubs step forward from the period start;
/// everything else steps backward from the period end date.
pub(super) fn icma(
    date1: Date,
    date2: Date,
    info: &SchedulePeriodContext,
) -> FincalResult<Decimal> {
    let frequency = info.frequency()?;
    let period_end = info.period_end_date()?;
    let period_type = info.period_type()?;
    let eom = info.is_end_of_month_convention();

    if period_type == SchedulePeriodType::Term {
        return Err(FincalError::schedule_period(
            "Act/Act ICMA cannot be used for the term period of a schedule",
        ));
    }
    if frequency.is_zero() {
        return Err(FincalError::schedule_period(
            "Act/Act ICMA cannot be used with a zero-coupon frequency",
        ));
    }

    let months = frequency.months_per_period() as i32;
    let periods_per_year = Decimal::from(frequency.periods_per_year());

    if period_type == SchedulePeriodType::Final {
        // nominal periods run forwards from the period start date
        let mut current = date1;
        let mut next = eom_step(date1, current.add_months(months)?, eom);
        let mut total = segment(current, next, date1, date2, periods_per_year);
        while next < date2 {
            current = next;
            next = eom_step(date1, current.add_months(months)?, eom);
            total += segment(current, next, date1, date2, periods_per_year);
        }
        Ok(total)
    } else {
        // nominal periods run backwards from the period end date
        let mut current = period_end;
        let mut previous = eom_step(period_end, current.add_months(-months)?, eom);
        let mut total = Decimal::ZERO;
        while previous > date1 {
            total += segment(previous, current, date1, date2, periods_per_year);
            current = previous;
            previous = eom_step(period_end, current.add_months(-months)?, eom);
        }
        Ok(total + segment(previous, current, date1, date2, periods_per_year))
    }
}

/// Preserves month-ends when stepping from a month-end anchor under the
/// end-of-month convention.
fn eom_step(anchor: Date, stepped: Date, eom: bool) -> Date {
    if eom && anchor.is_end_of_month() {
        stepped.end_of_month()
    } else {
        stepped
    }
}

/// Contribution of one nominal sub-period `[previous, current]` to the
/// fraction for the query range `[start, end]`.
fn segment(
    previous: Date,
    current: Date,
    start: Date,
    end: Date,
    periods_per_year: Decimal,
) -> Decimal {
    if end <= previous {
        return Decimal::ZERO;
    }
    let period_days = Decimal::from(previous.days_between(&current));
    let overlap_end = end.min(current);
    let overlap_start = start.max(previous);
    let overlap_days = Decimal::from(overlap_start.days_between(&overlap_end));
    overlap_days / (periods_per_year * period_days)
}
