//! Core value types shared across the crate.

mod date;
mod frequency;
mod schedule;

pub use date::{leap_days_between, Date};
pub use frequency::Frequency;
pub use schedule::{SchedulePeriodContext, SchedulePeriodType};
