//! Calendar collaborators: the clock, Gregorian year length and the year-only
//! ROC token of a date.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_LEAP_YEAR, DAYS_IN_YEAR, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    ROC_TO_AD_OFFSET,
};
use crate::types::{render, roc_from_ad};
use chrono::{Datelike, Local, NaiveDate};

/// Source of the current local date.
///
/// Operations that compare against "this year" call `today` exactly once.
pub trait Clock {
    /// The current local date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Creates a clock that reports `date` forever.
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Gregorian leap rule for a proleptic ISO year.
pub const fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days (365 or 366) in a Minguo proleptic year index, where index 1
/// is AD 1912 and index 0 is AD 1911. Defined for every index.
pub const fn year_length(index: i64) -> u32 {
    // The leap rule repeats every 400 years, so reduce before adding the offset
    let iso_year = (index.rem_euclid(GREGORIAN_CYCLE) + ROC_TO_AD_OFFSET as i64) % GREGORIAN_CYCLE;
    if is_leap_year(iso_year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_YEAR
    }
}

/// Year-only ROC token of a date: `113` for 2024, `-01` for 1911.
///
/// Never fails; dates outside the three-digit span render wider than three characters.
pub fn year_token<D: Datelike>(date: &D) -> String {
    render(roc_from_ad(i64::from(date.year())))
}
