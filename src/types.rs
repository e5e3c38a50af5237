use crate::consts::{
    BEFORE_EPOCH_SIGN, MAX_THREE_DIGIT_YEAR, MIN_THREE_DIGIT_YEAR, ROC_BEFORE_EPOCH_OFFSET,
    ROC_EPOCH_AD_YEAR, ROC_TO_AD_OFFSET,
};
use crate::prelude::*;
use crate::{Overflow, YearError};
use serde::{Deserialize, Serialize};
use std::num::NonZeroI32;
use std::str::FromStr;
use tracing::trace;

/// A ROC (Minguo) year. Year 1 is AD 1912; negative values count years
/// before the epoch and there is no year 0.
/// Uses `NonZeroI32` internally, so 0 is not a valid year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct RocYear(NonZeroI32);

impl RocYear {
    /// Creates a new `RocYear`, validating that it's non-zero
    ///
    /// # Errors
    /// Returns `YearError::UndefinedYear` if the value is 0.
    pub fn new(value: i32) -> Result<Self, YearError> {
        NonZeroI32::new(value)
            .map(Self)
            .ok_or(YearError::UndefinedYear)
    }

    /// Returns the year value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0.get()
    }

    /// True for years counted before the ROC epoch (AD 1911 and earlier)
    #[inline]
    pub const fn is_before_epoch(self) -> bool {
        self.get() < 0
    }

    /// The proleptic Gregorian year of this ROC year.
    pub const fn to_ad_year(self) -> i64 {
        let year = self.get() as i64;
        if year > 0 {
            year + ROC_TO_AD_OFFSET as i64
        } else {
            year + ROC_BEFORE_EPOCH_OFFSET as i64
        }
    }

    /// The ROC year of a proleptic Gregorian year.
    ///
    /// # Errors
    /// Returns `YearError::RangeOverflow` if the resulting ROC year does not fit in an i32.
    pub fn from_ad_year(ad_year: i64) -> Result<Self, YearError> {
        let year = i32::try_from(roc_from_ad(ad_year))
            .map_err(|_| YearError::RangeOverflow(Overflow::AdYearOutOfDomain(ad_year)))?;
        Self::new(year)
    }

    /// Fixed-width encoding: `001`..=`999`, or `-01`..=`-99` before the epoch.
    ///
    /// # Errors
    /// Returns `YearError::RangeOverflow` outside `-99..=999`.
    pub fn to_three_digit(self) -> Result<String, YearError> {
        let year = self.get();
        if year > MAX_THREE_DIGIT_YEAR {
            return Err(YearError::RangeOverflow(Overflow::AboveThreeDigits(year)));
        }
        if year < MIN_THREE_DIGIT_YEAR {
            return Err(YearError::RangeOverflow(Overflow::BelowThreeDigits(year)));
        }
        Ok(render(i64::from(year)))
    }
}

impl TryFrom<i32> for RocYear {
    type Error = YearError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RocYear> for i32 {
    fn from(year: RocYear) -> Self {
        year.get()
    }
}

impl FromStr for RocYear {
    type Err = YearError;

    /// Accepts an optional leading `-` followed by ASCII digits that are not all zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix(BEFORE_EPOCH_SIGN).unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            trace!(token = s, "rejected: not a year token");
            return Err(YearError::InvalidFormat(s.to_owned()));
        }
        if digits.bytes().all(|b| b == b'0') {
            trace!(token = s, "rejected: all-zero year token");
            return Err(YearError::InvalidFormat(s.to_owned()));
        }
        // Only overflow can fail here, the grammar is already checked
        let value = s
            .parse::<i32>()
            .map_err(|_| YearError::InvalidFormat(s.to_owned()))?;
        Self::new(value)
    }
}

/// Anything a comparison helper accepts as a year: a token or an integer.
pub trait IntoRocYear {
    /// Validates and converts into a `RocYear`.
    ///
    /// # Errors
    /// Tokens fail with `YearError::InvalidFormat`, integer 0 with `YearError::UndefinedYear`.
    fn into_roc_year(self) -> Result<RocYear, YearError>;
}

impl IntoRocYear for RocYear {
    fn into_roc_year(self) -> Result<RocYear, YearError> {
        Ok(self)
    }
}

impl IntoRocYear for i32 {
    fn into_roc_year(self) -> Result<RocYear, YearError> {
        RocYear::new(self)
    }
}

impl IntoRocYear for &str {
    fn into_roc_year(self) -> Result<RocYear, YearError> {
        self.parse()
    }
}

impl IntoRocYear for &String {
    fn into_roc_year(self) -> Result<RocYear, YearError> {
        self.parse()
    }
}

impl IntoRocYear for String {
    fn into_roc_year(self) -> Result<RocYear, YearError> {
        self.parse()
    }
}

// Helper functions

/// Maps an AD year onto the ROC numbering, skipping year 0.
pub(crate) const fn roc_from_ad(ad_year: i64) -> i64 {
    if ad_year >= ROC_EPOCH_AD_YEAR as i64 {
        ad_year.saturating_sub(ROC_TO_AD_OFFSET as i64)
    } else {
        ad_year.saturating_sub(ROC_BEFORE_EPOCH_OFFSET as i64)
    }
}

/// Zero-padded rendering without range checks; wider values come out wider.
pub(crate) fn render(year: i64) -> String {
    if year < 0 {
        format!("{BEFORE_EPOCH_SIGN}{:02}", year.unsigned_abs())
    } else {
        format!("{year:03}")
    }
}
