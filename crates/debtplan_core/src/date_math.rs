//! Calendar helpers for projecting payoff dates.
//!
//! The engine reports horizons as whole-month counts; turning a count into a
//! display date only needs month arithmetic with end-of-month clamping
//! (Jan 31 + 1 month = Feb 28/29). The helpers here do that directly on the
//! calendar fields without going through jiff's `Span` machinery.

use jiff::civil::Date;

/// Fast leap year check.
#[inline]
pub fn is_leap_year(year: i16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Days in a calendar month without creating a `jiff::civil::Date`.
#[inline]
pub fn days_in_month(year: i16, month: i8) -> i8 {
    const DAYS: [i8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// Add `n` whole months to a date, clamping the day to the target month's
/// length.
#[inline]
pub fn add_months(d: Date, n: u32) -> Date {
    let total = i32::from(d.year()) * 12 + i32::from(d.month()) - 1 + n as i32;
    let year = (total.div_euclid(12)) as i16;
    let month = (total.rem_euclid(12) + 1) as i8;
    let day = d.day().min(days_in_month(year, month));
    jiff::civil::date(year, month, day)
}
