//! Day count conventions.
//!
//! Curves in this workspace measure time as actual calendar days divided by
//! a fixed basis. The money market default is 360 days per year.
//!
//! - [`year_fraction`]: free function over an explicit basis
//! - [`Act360`]: Actual/360, the default convention
//! - [`ActualFixed`]: actual days over an arbitrary fixed basis
//!
//! # Usage
//!
//! ```rust
//! use tenor_core::daycounts::{year_fraction, Act360, DayCount};
//! use tenor_core::types::Date;
//!
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2025, 4, 1).unwrap();
//!
//! assert_eq!(Act360.year_fraction(start, end), 0.25);
//! assert_eq!(year_fraction(start, end, 360), 0.25);
//! ```

mod actual;

pub use actual::{Act360, ActualFixed};

use crate::types::Date;

/// Days per year used when no basis is given.
pub const DEFAULT_BASIS: u32 = 360;

/// Year fraction between two dates: `(end - start) / basis`.
///
/// Zero when the dates coincide and negative when `end` precedes `start`.
/// A zero `basis` yields a non-finite result; callers validate the basis
/// where it comes from configuration.
#[must_use]
pub fn year_fraction(start: Date, end: Date, basis: u32) -> f64 {
    start.days_between(&end) as f64 / f64::from(basis)
}

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) so curves carrying a
/// convention can be shared across threads once built.
pub trait DayCount: Send + Sync {
    /// Market name of the convention (e.g. "ACT/360").
    fn name(&self) -> String;

    /// Year fraction between two dates. Negative if `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Number of days between two dates under the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_year_fraction_default_basis() {
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        assert_relative_eq!(year_fraction(start, start + 90, DEFAULT_BASIS), 0.25);
        assert_relative_eq!(year_fraction(start, start + 180, DEFAULT_BASIS), 0.5);
    }

    #[test]
    fn test_year_fraction_same_day_is_zero() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(year_fraction(date, date, DEFAULT_BASIS), 0.0);
    }

    #[test]
    fn test_year_fraction_negative() {
        let start = Date::from_ymd(2025, 6, 15).unwrap();
        let end = Date::from_ymd(2025, 6, 1).unwrap();
        assert_relative_eq!(year_fraction(start, end, DEFAULT_BASIS), -14.0 / 360.0);
    }

    #[test]
    fn test_year_fraction_custom_basis() {
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();
        assert_relative_eq!(year_fraction(start, end, 365), 1.0);
    }
}
