//! Actual/N day count conventions.

use super::{year_fraction, DayCount, DEFAULT_BASIS};
use crate::types::Date;

/// Actual/360 day count convention.
///
/// Actual calendar days over a 360-day year. Used for deposits and
/// forward-starting money market instruments.
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{360}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> String {
        "ACT/360".to_string()
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        year_fraction(start, end, DEFAULT_BASIS)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual days over a fixed number of days per year.
///
/// `ActualFixed::new(360)` behaves exactly like [`Act360`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActualFixed {
    basis: u32,
}

impl ActualFixed {
    /// Creates a convention with the given days-per-year basis.
    #[must_use]
    pub fn new(basis: u32) -> Self {
        Self { basis }
    }

    /// Days per year.
    #[must_use]
    pub fn basis(&self) -> u32 {
        self.basis
    }
}

impl Default for ActualFixed {
    fn default() -> Self {
        Self::new(DEFAULT_BASIS)
    }
}

impl From<Act360> for ActualFixed {
    fn from(_: Act360) -> Self {
        Self::default()
    }
}

impl DayCount for ActualFixed {
    fn name(&self) -> String {
        match self.basis {
            365 => "ACT/365F".to_string(),
            basis => format!("ACT/{basis}"),
        }
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        year_fraction(start, end, self.basis)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_act360_basic() {
        let dc = Act360;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 4, 1).unwrap();

        // Jan 31 + Feb 28 + Mar 31
        assert_eq!(dc.day_count(start, end), 90);
        assert_relative_eq!(dc.year_fraction(start, end), 0.25);
        assert_eq!(dc.name(), "ACT/360");
    }

    #[test]
    fn test_act360_full_year_exceeds_one() {
        let dc = Act360;
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 366);
        assert_relative_eq!(dc.year_fraction(start, end), 366.0 / 360.0);
    }

    #[test]
    fn test_actual_fixed_matches_act360() {
        let start = Date::from_ymd(2025, 3, 10).unwrap();
        let end = Date::from_ymd(2025, 9, 10).unwrap();
        let fixed = ActualFixed::from(Act360);

        assert_eq!(fixed.basis(), 360);
        assert_eq!(fixed.year_fraction(start, end), Act360.year_fraction(start, end));
    }

    #[test]
    fn test_actual_fixed_names() {
        assert_eq!(ActualFixed::new(365).name(), "ACT/365F");
        assert_eq!(ActualFixed::new(360).name(), "ACT/360");
        assert_eq!(ActualFixed::new(252).name(), "ACT/252");
    }
}
