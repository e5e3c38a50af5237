/// Offset from a positive ROC year to its AD year (ROC 1 = AD 1912)
pub const ROC_TO_AD_OFFSET: i32 = 1911;

/// Offset from a negative ROC year to its AD year (ROC -1 = AD 1911)
pub const ROC_BEFORE_EPOCH_OFFSET: i32 = 1912;

/// First AD year of the ROC calendar
pub const ROC_EPOCH_AD_YEAR: i32 = 1912;

/// Largest ROC year with a three-digit encoding
pub const MAX_THREE_DIGIT_YEAR: i32 = 999;

/// Smallest (most negative) ROC year with a three-digit encoding
pub const MIN_THREE_DIGIT_YEAR: i32 = -99;

/// Width of the fixed year encoding
pub const THREE_DIGIT_WIDTH: usize = 3;

/// Sign marking years before the ROC epoch
pub const BEFORE_EPOCH_SIGN: char = '-';

/// Days in a common year
pub const DAYS_IN_YEAR: u32 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u32 = 366;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;
