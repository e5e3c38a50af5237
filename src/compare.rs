use chrono::Datelike;

use crate::{Clock, IntoRocYear, SystemClock, YearError, parse_year};

fn current_ad_year<C: Clock + ?Sized>(clock: &C) -> i64 {
    i64::from(clock.today().year())
}

/// Whether the year is the current year on the system clock.
///
/// # Errors
/// Returns `YearError::InvalidFormat` for a malformed token and
/// `YearError::UndefinedYear` for integer 0.
pub fn is_current_year(year: impl IntoRocYear) -> Result<bool, YearError> {
    is_current_year_with(&SystemClock, year)
}

/// Whether the year is the current year on `clock`.
///
/// # Errors
/// See [`is_current_year`].
pub fn is_current_year_with<C: Clock + ?Sized>(
    clock: &C,
    year: impl IntoRocYear,
) -> Result<bool, YearError> {
    let ad_year = year.into_roc_year()?.to_ad_year();
    Ok(ad_year == current_ad_year(clock))
}

/// Whether the year lies before the current year, or is the current year when `inclusive`.
///
/// # Errors
/// See [`is_current_year`].
pub fn is_before_current_year(inclusive: bool, year: impl IntoRocYear) -> Result<bool, YearError> {
    is_before_current_year_with(&SystemClock, inclusive, year)
}

/// [`is_before_current_year`] against `clock`.
///
/// # Errors
/// See [`is_current_year`].
pub fn is_before_current_year_with<C: Clock + ?Sized>(
    clock: &C,
    inclusive: bool,
    year: impl IntoRocYear,
) -> Result<bool, YearError> {
    let ad_year = year.into_roc_year()?.to_ad_year();
    let current = current_ad_year(clock);
    Ok(if inclusive {
        ad_year <= current
    } else {
        ad_year < current
    })
}

/// Whether the year lies after the current year, or is the current year when `inclusive`.
///
/// # Errors
/// See [`is_current_year`].
pub fn is_after_current_year(inclusive: bool, year: impl IntoRocYear) -> Result<bool, YearError> {
    is_after_current_year_with(&SystemClock, inclusive, year)
}

/// [`is_after_current_year`] against `clock`.
///
/// # Errors
/// See [`is_current_year`].
pub fn is_after_current_year_with<C: Clock + ?Sized>(
    clock: &C,
    inclusive: bool,
    year: impl IntoRocYear,
) -> Result<bool, YearError> {
    let ad_year = year.into_roc_year()?.to_ad_year();
    let current = current_ad_year(clock);
    Ok(if inclusive {
        ad_year >= current
    } else {
        ad_year > current
    })
}

/// Whether the year lies strictly before the current year on the system clock.
///
/// # Errors
/// See [`is_current_year`].
pub fn is_past_year(year: impl IntoRocYear) -> Result<bool, YearError> {
    is_before_current_year_with(&SystemClock, false, year)
}

/// [`is_past_year`] against `clock`.
///
/// # Errors
/// See [`is_current_year`].
pub fn is_past_year_with<C: Clock + ?Sized>(
    clock: &C,
    year: impl IntoRocYear,
) -> Result<bool, YearError> {
    is_before_current_year_with(clock, false, year)
}

/// Whether the year lies strictly after the current year on the system clock.
///
/// # Errors
/// See [`is_current_year`].
pub fn is_future_year(year: impl IntoRocYear) -> Result<bool, YearError> {
    is_after_current_year_with(&SystemClock, false, year)
}

/// [`is_future_year`] against `clock`.
///
/// # Errors
/// See [`is_current_year`].
pub fn is_future_year_with<C: Clock + ?Sized>(
    clock: &C,
    year: impl IntoRocYear,
) -> Result<bool, YearError> {
    is_after_current_year_with(clock, false, year)
}

/// Whether `first` comes before `second`. Equal years count as ordered only
/// when `allow_overlap` is set.
///
/// # Errors
/// Returns `YearError::BlankInput` if either token is empty or whitespace,
/// and `YearError::InvalidFormat` if either is not a year token.
pub fn is_orderly(allow_overlap: bool, first: &str, second: &str) -> Result<bool, YearError> {
    if first.trim().is_empty() || second.trim().is_empty() {
        return Err(YearError::BlankInput {
            first: first.to_owned(),
            second: second.to_owned(),
        });
    }
    let first = parse_year(first)?;
    let second = parse_year(second)?;
    if first == second {
        return Ok(allow_overlap);
    }
    Ok(first < second)
}
