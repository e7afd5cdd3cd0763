//! 30/360 day count conventions.
//!
//! All variants share the same formula over adjusted day-of-month values
//! and differ only in the day adjustment tie-breaks. The tie-break rules
//! encode interpretations of ambiguous standards text; the reference
//! tables in the integration tests are the contract.

use rust_decimal::Decimal;

use crate::error::FincalResult;
use crate::types::{Date, SchedulePeriodContext};

/// The shared 30/360 formula over adjusted day-of-month values.
fn thirty_360(y1: i64, m1: i64, d1: i64, y2: i64, m2: i64, d2: i64) -> Decimal {
    Decimal::from((y2 - y1) * 360 + (m2 - m1) * 30 + (d2 - d1)) / Decimal::from(360)
}

/// 30/360 ISDA.
///
/// Month-ends promote to 30 on both sides: any month-end `date1` becomes
/// 30, and a month-end `date2` becomes 30 when `date1` ended up at 30.
pub(super) fn isda(date1: Date, date2: Date) -> FincalResult<Decimal> {
    let mut d1 = date1.day() as i64;
    let mut d2 = date2.day() as i64;

    if date1.is_end_of_month() {
        d1 = 30;
    }
    if date2.is_end_of_month() && d1 == 30 {
        d2 = 30;
    }

    Ok(thirty_360(
        date1.year() as i64,
        date1.month() as i64,
        d1,
        date2.year() as i64,
        date2.month() as i64,
        d2,
    ))
}

/// 30U/360 (US convention).
///
/// The February promotions only apply when the schedule honors the
/// end-of-month convention; the day-31 clamps always apply.
pub(super) fn u360(
    date1: Date,
    date2: Date,
    info: &SchedulePeriodContext,
) -> FincalResult<Decimal> {
    let mut d1 = date1.day() as i64;
    let mut d2 = date2.day() as i64;

    if info.is_end_of_month_convention() {
        let last_feb1 = date1.is_end_of_february();
        if last_feb1 && date2.is_end_of_february() {
            d2 = 30;
        }
        if last_feb1 {
            d1 = 30;
        }
    }
    if d2 == 31 && d1 >= 30 {
        d2 = 30;
    }
    if d1 == 31 {
        d1 = 30;
    }

    Ok(thirty_360(
        date1.year() as i64,
        date1.month() as i64,
        d1,
        date2.year() as i64,
        date2.month() as i64,
        d2,
    ))
}

/// 30E/360 (Eurobond).
///
/// Both day-31 values clamp to 30 unconditionally; February is never
/// touched.
pub(super) fn e360(date1: Date, date2: Date) -> FincalResult<Decimal> {
    let d1 = (date1.day() as i64).min(30);
    let d2 = (date2.day() as i64).min(30);

    Ok(thirty_360(
        date1.year() as i64,
        date1.month() as i64,
        d1,
        date2.year() as i64,
        date2.month() as i64,
        d2,
    ))
}

/// 30E/360 ISDA.
///
/// Day 31 and February month-ends promote to 30 on both sides, except
/// that a February month-end `date2` is left alone when the context
/// marks it as the final schedule end date.
pub(super) fn e360_isda(
    date1: Date,
    date2: Date,
    info: &SchedulePeriodContext,
) -> FincalResult<Decimal> {
    let mut d1 = date1.day() as i64;
    let mut d2 = date2.day() as i64;

    if d1 == 31 || date1.is_end_of_february() {
        d1 = 30;
    }
    if d2 == 31 || (date2.is_end_of_february() && !info.is_schedule_end_date()) {
        d2 = 30;
    }

    Ok(thirty_360(
        date1.year() as i64,
        date1.month() as i64,
        d1,
        date2.year() as i64,
        date2.month() as i64,
        d2,
    ))
}

/// 30E+/360.
///
/// Day-31 `date1` clamps to 30; a day-31 `date2` rolls into day 1 of the
/// following month instead of clamping.
pub(super) fn eplus360(date1: Date, date2: Date) -> FincalResult<Decimal> {
    let d1 = (date1.day() as i64).min(30);
    let mut m2 = date2.month() as i64;
    let mut d2 = date2.day() as i64;
    if d2 == 31 {
        m2 += 1;
        d2 = 1;
    }

    Ok(thirty_360(
        date1.year() as i64,
        date1.month() as i64,
        d1,
        date2.year() as i64,
        m2,
        d2,
    ))
}
