//! # Fincal Core
//!
//! Day count conventions, holiday calendars and business day adjustments
//! for fixed income cashflow schedules.
//!
//! This crate is a computational kernel consumed by schedule-generation
//! and pricing code:
//!
//! - **Day Counts**: the full family of named conventions turning a date
//!   pair into a fraction of a year
//! - **Calendars**: holiday/business-day queries and date rolling
//! - **Adjustments**: business day conventions and day offsets
//! - **Index Dates**: fixing/maturity date mapping for rate indices
//!
//! ## Design Philosophy
//!
//! - **Pure Functions**: every operation is deterministic and free of
//!   shared mutable state; concurrent use needs no synchronization
//! - **Immutable Values**: conventions, calendars and contexts never
//!   change after construction
//! - **Fail Fast**: bad arguments and missing context are errors, never
//!   silently corrected
//!
//! ## Example
//!
//! ```rust
//! use fincal_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let dc = DayCount::of("Act/Act ISDA").unwrap();
//! let start = Date::from_ymd(2003, 11, 1).unwrap();
//! let end = Date::from_ymd(2004, 5, 1).unwrap();
//!
//! let fraction = dc.fraction(start, end).unwrap();
//! assert_eq!(fraction, dec!(61) / dec!(365) + dec!(121) / dec!(366));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unnecessary_wraps)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod index;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        BusinessDayConvention, Calendar, DaysAdjustment, HolidayCalendar, Weekend,
    };
    pub use crate::daycounts::DayCount;
    pub use crate::error::{FincalError, FincalResult};
    pub use crate::index::FxIndexDateMapper;
    pub use crate::types::{Date, Frequency, SchedulePeriodContext, SchedulePeriodType};
}

// Re-export commonly used types at crate root
pub use error::{FincalError, FincalResult};
pub use types::Date;
