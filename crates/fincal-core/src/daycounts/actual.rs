//! Actual-day-numerator conventions with fixed or rule-based denominators.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::FincalResult;
use crate::types::{leap_days_between, Date, SchedulePeriodContext};

/// Actual days divided by a constant denominator.
///
/// Covers Act/360, Act/364, Act/365F and Act/365.25.
pub(super) fn fixed_denominator(
    date1: Date,
    date2: Date,
    denominator: Decimal,
) -> FincalResult<Decimal> {
    let days = date1.days_between(&date2);
    Ok(Decimal::from(days) / denominator)
}

/// Act/365 Actual.
///
/// Actual days, over 366 if the range `(date1, date2]` spans a Feb 29,
/// else over 365.
pub(super) fn act_365_actual(date1: Date, date2: Date) -> FincalResult<Decimal> {
    let days = date1.days_between(&date2);
    let denominator = if date1.next_leap_day() <= date2 {
        dec!(366)
    } else {
        dec!(365)
    };
    Ok(Decimal::from(days) / denominator)
}

/// NL/365 (Actual/365 No-Leap).
///
/// Actual days with every Feb 29 in `(date1, date2]` excluded from the
/// numerator, over 365.
pub(super) fn nl_365(date1: Date, date2: Date) -> FincalResult<Decimal> {
    let days = date1.days_between(&date2) - leap_days_between(date1, date2);
    Ok(Decimal::from(days) / dec!(365))
}

/// Act/365L.
///
/// Actual days over a denominator derived from the schedule period. With
/// an annual frequency the denominator is 366 when a Feb 29 falls in the
/// period up to the schedule period end date; for any other frequency it
/// is 366 when the period end date falls in a leap year.
pub(super) fn act_365l(
    date1: Date,
    date2: Date,
    info: &SchedulePeriodContext,
) -> FincalResult<Decimal> {
    let frequency = info.frequency()?;
    let period_end = info.period_end_date()?;
    let days = date1.days_between(&date2);
    let denominator = if frequency.is_annual() {
        if date1.next_leap_day() <= period_end {
            dec!(366)
        } else {
            dec!(365)
        }
    } else if period_end.is_leap_year() {
        dec!(366)
    } else {
        dec!(365)
    };
    Ok(Decimal::from(days) / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, dd: u32) -> Date {
        Date::from_ymd(y, m, dd).unwrap()
    }

    #[test]
    fn test_fixed_denominator() {
        // 62 actual days
        let yf = fixed_denominator(d(2011, 12, 28), d(2012, 2, 28), dec!(360)).unwrap();
        assert_eq!(yf, dec!(62) / dec!(360));

        let yf = fixed_denominator(d(2011, 12, 28), d(2012, 2, 28), dec!(365.25)).unwrap();
        assert_eq!(yf, dec!(62) / dec!(365.25));
    }

    #[test]
    fn test_act_365_actual_spans_leap_day() {
        // range ends on Feb 29: denominator 366
        let yf = act_365_actual(d(2011, 12, 28), d(2012, 2, 29)).unwrap();
        assert_eq!(yf, dec!(63) / dec!(366));

        // range stops just short of Feb 29: denominator 365
        let yf = act_365_actual(d(2011, 12, 28), d(2012, 2, 28)).unwrap();
        assert_eq!(yf, dec!(62) / dec!(365));

        // Feb 29 as the start date does not count
        let yf = act_365_actual(d(2012, 2, 29), d(2012, 3, 28)).unwrap();
        assert_eq!(yf, dec!(28) / dec!(365));
    }

    #[test]
    fn test_nl_365_excludes_leap_days() {
        // Feb 29 inside the range is dropped from the numerator
        let yf = nl_365(d(2011, 12, 28), d(2012, 2, 29)).unwrap();
        assert_eq!(yf, dec!(62) / dec!(365));

        // full year across a leap day: 366 actual, 365 counted
        let yf = nl_365(d(2011, 12, 1), d(2012, 12, 1)).unwrap();
        assert_eq!(yf, dec!(365) / dec!(365));
    }

    #[test]
    fn test_act_365l_requires_context() {
        let err = act_365l(d(2011, 12, 28), d(2012, 2, 28), &SchedulePeriodContext::new())
            .unwrap_err();
        assert!(err.to_string().contains("frequency"));
    }
}
