mod calendar;
mod compare;
mod consts;
mod prelude;
mod types;

pub use calendar::{Clock, FixedClock, SystemClock, is_leap_year, year_length, year_token};
pub use compare::{
    is_after_current_year, is_after_current_year_with, is_before_current_year,
    is_before_current_year_with, is_current_year, is_current_year_with, is_future_year,
    is_future_year_with, is_orderly, is_past_year, is_past_year_with,
};
pub use consts::*;
pub use types::{IntoRocYear, RocYear};

use crate::prelude::*;
use chrono::Datelike;
use tracing::debug;

/// Why a value does not fit the requested year representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Overflow {
    #[display(fmt = "ROC {} is past the three-digit form (at most ROC {})", "_0", MAX_THREE_DIGIT_YEAR)]
    AboveThreeDigits(i32),
    #[display(fmt = "ROC {_0} is past the three-digit form (at most 99 years before the epoch)")]
    BelowThreeDigits(i32),
    #[display(fmt = "date in AD {ad_year} is outside the convertible ROC range")]
    DateOutOfRange { ad_year: i32 },
    #[display(fmt = "AD {_0} has no ROC year in the supported range")]
    AdYearOutOfDomain(i64),
}

/// Error type for all fallible year operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum YearError {
    /// Token is not an optional `-` followed by digits, or is all zeros.
    #[error("Invalid ROC year format: {0:?}")]
    InvalidFormat(String),

    /// ROC year 0 does not exist.
    #[error("ROC year 0 is undefined")]
    UndefinedYear,

    /// Value outside a fixed-width encoding or convertible span.
    #[error("Range overflow: {0}")]
    RangeOverflow(Overflow),

    /// A compared year was empty or whitespace.
    #[error("Compared years must not be blank ({first:?}, {second:?})")]
    BlankInput { first: String, second: String },
}

/// Parses a year token such as `"113"`, `"001"` or `"-5"`.
///
/// # Errors
/// Returns `YearError::InvalidFormat` unless the token is an optional `-`
/// followed by digits that are not all zero.
pub fn parse_year(token: &str) -> Result<RocYear, YearError> {
    token.parse()
}

/// AD year of a ROC year: ROC 1 is AD 1912, ROC -1 is AD 1911.
///
/// # Errors
/// Returns `YearError::UndefinedYear` for 0.
pub fn to_ad_year(roc_year: i32) -> Result<i64, YearError> {
    Ok(RocYear::new(roc_year)?.to_ad_year())
}

/// Counts the years from `from` to `to`, both ends included, so equal years give 1.
/// A descending pair gives the same magnitude with a negative sign.
///
/// # Errors
/// Returns `YearError::InvalidFormat` if either token is malformed.
pub fn count_years(from: &str, to: &str) -> Result<i64, YearError> {
    let years = i64::from(parse_year(to)?.get()) - i64::from(parse_year(from)?.get());
    Ok(if years >= 0 { years + 1 } else { years - 1 })
}

/// Days in the given ROC year, 365 or 366.
///
/// Years before the epoch look up index `year - 1`, so `-1` resolves to AD 1909.
///
/// # Errors
/// Returns `YearError::InvalidFormat` for a malformed token.
pub fn get_total_days(token: &str) -> Result<u32, YearError> {
    let year = i64::from(parse_year(token)?.get());
    Ok(year_length(if year > 0 { year } else { year - 1 }))
}

/// Three-digit form of a ROC year: `"007"`, `"113"`, `"-05"`.
///
/// # Errors
/// Returns `YearError::UndefinedYear` for 0 and `YearError::RangeOverflow`
/// outside `-99..=999`.
pub fn format_year(roc_year: i32) -> Result<String, YearError> {
    RocYear::new(roc_year)?.to_three_digit()
}

fn three_digit_token<D: Datelike>(date: &D) -> Result<String, YearError> {
    let token = year_token(date);
    if token.len() == THREE_DIGIT_WIDTH {
        Ok(token)
    } else {
        Err(YearError::RangeOverflow(Overflow::DateOutOfRange {
            ad_year: date.year(),
        }))
    }
}

/// Three-digit ROC year of a date; `None` gives an empty string.
///
/// # Errors
/// Returns `YearError::RangeOverflow` if the date is outside ROC -99..=999.
pub fn format_strict<D: Datelike>(date: Option<&D>) -> Result<String, YearError> {
    date.map_or_else(|| Ok(String::new()), three_digit_token)
}

/// Like [`format_strict`], returning `overflow_text` for dates outside ROC -99..=999.
pub fn format_or_default<D: Datelike>(date: Option<&D>, overflow_text: &str) -> String {
    let Some(date) = date else {
        return String::new();
    };
    three_digit_token(date).unwrap_or_else(|err| {
        debug!(%err, overflow_text, "year token replaced");
        overflow_text.to_owned()
    })
}

/// Three-digit ROC year of today's date on the system clock.
///
/// # Errors
/// Returns `YearError::RangeOverflow` if the clock is outside ROC -99..=999.
pub fn now() -> Result<String, YearError> {
    now_with(&SystemClock)
}

/// Three-digit ROC year of today's date on `clock`.
///
/// # Errors
/// See [`now`].
pub fn now_with<C: Clock + ?Sized>(clock: &C) -> Result<String, YearError> {
    format_strict(Some(&clock.today()))
}

/// AD year of a ROC year token, as text: `"113"` becomes `"2024"`.
///
/// # Errors
/// Returns `YearError::InvalidFormat` if the token is malformed.
pub fn to_ad_format(token: &str) -> Result<String, YearError> {
    Ok(parse_year(token)?.to_ad_year().to_string())
}

/// [`to_ad_format`], returning `alter_text` when the token is malformed.
pub fn to_ad_format_or_else(token: &str, alter_text: &str) -> String {
    to_ad_format(token).unwrap_or_else(|err| {
        debug!(%err, alter_text, "AD format replaced");
        alter_text.to_owned()
    })
}

/// [`to_ad_format`], returning the token itself when it is malformed.
pub fn to_ad_format_or_origin(token: &str) -> String {
    to_ad_format_or_else(token, token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("113").unwrap().get(), 113);
        assert_eq!(parse_year("-5").unwrap().get(), -5);
        assert_eq!(parse_year("007").unwrap().get(), 7);
    }

    #[test]
    fn test_parse_year_bad_tokens() {
        let result = parse_year("000");
        assert!(matches!(result, Err(YearError::InvalidFormat(_))));

        let result = parse_year("abc");
        assert!(matches!(result, Err(YearError::InvalidFormat(_))));

        let result = parse_year("");
        assert!(matches!(result, Err(YearError::InvalidFormat(_))));
    }

    #[test]
    fn test_to_ad_year_positive() {
        for year in 1..=999 {
            assert_eq!(to_ad_year(year).unwrap(), i64::from(year) + 1911);
        }
    }

    #[test]
    fn test_to_ad_year_negative() {
        for year in -99..=-1 {
            assert_eq!(to_ad_year(year).unwrap(), i64::from(year) + 1912);
        }
    }

    #[test]
    fn test_to_ad_year_zero() {
        assert_eq!(to_ad_year(0), Err(YearError::UndefinedYear));
    }

    #[test]
    fn test_count_years() {
        assert_eq!(count_years("100", "100").unwrap(), 1);
        assert_eq!(count_years("100", "105").unwrap(), 6);
        assert_eq!(count_years("105", "100").unwrap(), -6);
        assert_eq!(count_years("-1", "1").unwrap(), 3);
    }

    #[test]
    fn test_count_years_invalid() {
        assert!(matches!(
            count_years("100", "1o5"),
            Err(YearError::InvalidFormat(_))
        ));
        assert!(matches!(
            count_years("0", "105"),
            Err(YearError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_get_total_days() {
        assert_eq!(get_total_days("1").unwrap(), 366);
        assert_eq!(get_total_days("112").unwrap(), 365);
        assert_eq!(get_total_days("113").unwrap(), 366);
        assert_eq!(get_total_days("089").unwrap(), 366);
    }

    #[test]
    fn test_get_total_days_before_epoch_shifts_one_more_year() {
        // -2 resolves to AD 1908 rather than AD 1910
        assert_eq!(get_total_days("-2").unwrap(), 366);
        // -4 resolves to AD 1906 rather than the leap year AD 1908
        assert_eq!(get_total_days("-4").unwrap(), 365);
        assert_eq!(get_total_days("-1").unwrap(), 365);
    }

    #[test]
    fn test_get_total_days_errors() {
        assert!(matches!(
            get_total_days("abc"),
            Err(YearError::InvalidFormat(_))
        ));
        assert!(matches!(
            get_total_days("0"),
            Err(YearError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_get_total_days_far_years() {
        // AD 301911
        assert_eq!(get_total_days("300000"), Ok(365));
        // AD 301913
        assert_eq!(get_total_days("300002"), Ok(365));
        // AD 301912
        assert_eq!(get_total_days("300001"), Ok(366));
        // AD 2000001911
        assert_eq!(get_total_days("2000000000"), Ok(365));
        assert!(get_total_days(&i32::MAX.to_string()).is_ok());
        assert!(get_total_days(&i32::MIN.to_string()).is_ok());
    }

    #[test]
    fn test_format_year() {
        assert_eq!(format_year(1).unwrap(), "001");
        assert_eq!(format_year(10).unwrap(), "010");
        assert_eq!(format_year(113).unwrap(), "113");
        assert_eq!(format_year(-1).unwrap(), "-01");
        assert_eq!(format_year(-99).unwrap(), "-99");
    }

    #[test]
    fn test_format_year_positive_range() {
        for year in 1..=999 {
            assert_eq!(format_year(year).unwrap(), format!("{year:03}"));
        }
    }

    #[test]
    fn test_format_year_negative_range() {
        for year in -99..=-1_i32 {
            assert_eq!(
                format_year(year).unwrap(),
                format!("-{:02}", year.unsigned_abs())
            );
        }
    }

    #[test]
    fn test_format_year_errors() {
        assert_eq!(format_year(0), Err(YearError::UndefinedYear));
        assert!(matches!(
            format_year(1000),
            Err(YearError::RangeOverflow(Overflow::AboveThreeDigits(1000)))
        ));
        assert!(matches!(
            format_year(-100),
            Err(YearError::RangeOverflow(Overflow::BelowThreeDigits(-100)))
        ));
    }

    #[test]
    fn test_format_then_parse_returns_year() {
        for year in (-99..=999).filter(|y| *y != 0) {
            let token = format_year(year).unwrap();
            assert_eq!(
                parse_year(&token).unwrap().get(),
                year,
                "token {token:?} should parse back"
            );
        }
    }

    #[test]
    fn test_format_strict() {
        assert_eq!(format_strict(Some(&date(2024, 8, 15))).unwrap(), "113");
        assert_eq!(format_strict(Some(&date(1911, 1, 1))).unwrap(), "-01");
        assert_eq!(format_strict(None::<&NaiveDate>).unwrap(), "");
    }

    #[test]
    fn test_format_strict_out_of_range() {
        let result = format_strict(Some(&date(2911, 1, 1)));
        assert_eq!(
            result,
            Err(YearError::RangeOverflow(Overflow::DateOutOfRange {
                ad_year: 2911
            }))
        );

        let result = format_strict(Some(&date(1700, 1, 1)));
        assert!(matches!(result, Err(YearError::RangeOverflow(_))));
    }

    #[test]
    fn test_format_strict_date_times() {
        let naive: NaiveDateTime = date(2000, 2, 29)
            .and_hms_opt(23, 59, 59)
            .expect("valid test time");
        assert_eq!(format_strict(Some(&naive)).unwrap(), "089");

        let utc = Utc
            .with_ymd_and_hms(1950, 1, 1, 0, 0, 0)
            .single()
            .expect("unambiguous test instant");
        assert_eq!(format_strict(Some(&utc)).unwrap(), "039");
    }

    #[test]
    fn test_format_or_default() {
        let far = date(2911, 1, 1);
        assert_eq!(format_or_default(Some(&far), "N/A"), "N/A");
        assert_eq!(format_or_default(Some(&far), ""), "");
        assert_eq!(format_or_default(Some(&date(2024, 1, 1)), "N/A"), "113");
        assert_eq!(format_or_default(None::<&NaiveDate>, "N/A"), "");
    }

    #[test]
    fn test_now_with() {
        let clock = FixedClock::new(date(2024, 8, 15));
        assert_eq!(now_with(&clock).unwrap(), "113");

        let clock = FixedClock::new(date(3000, 1, 1));
        assert!(matches!(
            now_with(&clock),
            Err(YearError::RangeOverflow(Overflow::DateOutOfRange {
                ad_year: 3000
            }))
        ));
    }

    #[test]
    fn test_now_matches_system_clock() {
        let expected = format_strict(Some(&SystemClock.today())).unwrap();
        assert_eq!(now().unwrap(), expected);
    }

    #[test]
    fn test_to_ad_format() {
        assert_eq!(to_ad_format("113").unwrap(), "2024");
        assert_eq!(to_ad_format("001").unwrap(), "1912");
        assert_eq!(to_ad_format("-1").unwrap(), "1911");
        assert!(matches!(
            to_ad_format("11a"),
            Err(YearError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_to_ad_format_fallbacks() {
        assert_eq!(to_ad_format_or_else("113", "?"), "2024");
        assert_eq!(to_ad_format_or_else("abc", "?"), "?");
        assert_eq!(to_ad_format_or_origin("abc"), "abc");
        assert_eq!(to_ad_format_or_origin("000"), "000");
        assert_eq!(to_ad_format_or_origin("88"), "1999");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            YearError::InvalidFormat("abc".to_owned()).to_string(),
            r#"Invalid ROC year format: "abc""#
        );
        assert_eq!(YearError::UndefinedYear.to_string(), "ROC year 0 is undefined");
        assert_eq!(
            YearError::RangeOverflow(Overflow::AboveThreeDigits(1000)).to_string(),
            "Range overflow: ROC 1000 is past the three-digit form (at most ROC 999)"
        );
        assert!(
            YearError::RangeOverflow(Overflow::BelowThreeDigits(-100))
                .to_string()
                .contains("99 years before the epoch")
        );
        assert!(
            YearError::BlankInput {
                first: String::new(),
                second: "50".to_owned()
            }
            .to_string()
            .contains("must not be blank")
        );
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<YearError>();
    }

    #[test]
    fn test_constants() {
        assert_eq!(ROC_TO_AD_OFFSET, 1911);
        assert_eq!(MAX_THREE_DIGIT_YEAR, 999);
        assert_eq!(MIN_THREE_DIGIT_YEAR, -99);
    }
}
