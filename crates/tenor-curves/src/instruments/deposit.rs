//! Cash deposit instrument.
//!
//! The short end of the curve: a simple-interest deposit from spot to
//! maturity quoted in percent.

use tenor_core::daycounts::{Act360, DayCount};
use tenor_core::Date;

use super::{parse_tenor, CurveInstrument, InstrumentType};
use crate::curves::DiscountCurve;
use crate::error::CurveResult;

/// A cash deposit quoted as a simple rate in percent.
///
/// Contributes `quote_pct / 100` to the curve at its maturity. Its own
/// discount factor uses only the quote:
///
/// ```text
/// DF(t) = 1 / (1 + r × τ(spot, t))
/// ```
///
/// # Example
///
/// ```rust
/// use tenor_core::Date;
/// use tenor_curves::instruments::Deposit;
///
/// let spot = Date::from_ymd(2025, 1, 2).unwrap();
/// let deposit = Deposit::new(spot, spot + 90, 5.0);
///
/// assert_eq!(deposit.rate(), 0.05);
/// assert!((deposit.discount_factor(spot + 90) - 1.0 / 1.0125).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deposit {
    /// Deposit start (spot date)
    spot_date: Date,
    /// Deposit end
    maturity_date: Date,
    /// Quote in percent (5.25 means 5.25%)
    quote_pct: f64,
}

impl Deposit {
    /// Creates a deposit from spot to maturity quoted in percent.
    #[must_use]
    pub fn new(spot_date: Date, maturity_date: Date, quote_pct: f64) -> Self {
        Self {
            spot_date,
            maturity_date,
            quote_pct,
        }
    }

    /// Creates a deposit from a tenor string (e.g. "ON", "1W", "3M", "1Y").
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidTenor` if the tenor cannot be resolved.
    pub fn from_tenor(spot_date: Date, tenor: &str, quote_pct: f64) -> CurveResult<Self> {
        let maturity_date = parse_tenor(spot_date, tenor)?;
        Ok(Self::new(spot_date, maturity_date, quote_pct))
    }

    /// Returns the spot date.
    #[must_use]
    pub fn spot_date(&self) -> Date {
        self.spot_date
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Returns the quote in percent.
    #[must_use]
    pub fn quote_pct(&self) -> f64 {
        self.quote_pct
    }

    /// Simple rate as a decimal.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.quote_pct / 100.0
    }

    /// Discount factor at `date` from this deposit's own quote, ignoring any curve.
    #[must_use]
    pub fn discount_factor(&self, date: Date) -> f64 {
        let t = Act360.year_fraction(self.spot_date, date);
        1.0 / (1.0 + self.rate() * t)
    }
}

impl CurveInstrument for Deposit {
    fn maturity(&self) -> Date {
        self.maturity_date
    }

    fn add_to_curve(&self, curve: &mut DiscountCurve) {
        curve.add_entry(self.maturity_date, self.rate());
    }

    fn instrument_type(&self) -> InstrumentType {
        InstrumentType::Deposit
    }

    fn description(&self) -> String {
        let quote = self.quote_pct;
        let spot = self.spot_date;
        let maturity = self.maturity_date;
        format!("Deposit {quote:.4}% {spot} to {maturity}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurveError;
    use approx::assert_relative_eq;

    fn spot() -> Date {
        Date::from_ymd(2025, 1, 2).unwrap()
    }

    #[test]
    fn test_deposit_basic() {
        let deposit = Deposit::new(spot(), spot() + 90, 5.25);

        assert_eq!(deposit.spot_date(), spot());
        assert_eq!(deposit.maturity_date(), spot() + 90);
        assert_eq!(deposit.maturity(), spot() + 90);
        assert_eq!(deposit.quote_pct(), 5.25);
        assert_relative_eq!(deposit.rate(), 0.0525, epsilon = 1e-15);
        assert_eq!(deposit.instrument_type(), InstrumentType::Deposit);
    }

    #[test]
    fn test_deposit_add_to_curve() {
        let mut curve = DiscountCurve::new(spot());
        Deposit::new(spot(), spot() + 90, 5.0).add_to_curve(&mut curve);

        assert_eq!(curve.len(), 1);
        assert_eq!(curve.rate_at(spot() + 90), Some(0.05));
    }

    #[test]
    fn test_deposit_discount_factor() {
        let deposit = Deposit::new(spot(), spot() + 90, 5.0);

        assert_relative_eq!(deposit.discount_factor(spot() + 90), 1.0 / 1.0125, epsilon = 1e-12);
        // Any date, not only maturity
        assert_relative_eq!(
            deposit.discount_factor(spot() + 180),
            1.0 / 1.025,
            epsilon = 1e-12
        );
        assert_eq!(deposit.discount_factor(spot()), 1.0);
    }

    #[test]
    fn test_deposit_discount_factor_matches_curve() {
        let deposit = Deposit::new(spot(), spot() + 90, 5.0);
        let mut curve = DiscountCurve::new(spot());
        deposit.add_to_curve(&mut curve);

        assert_relative_eq!(
            deposit.discount_factor(spot() + 90),
            curve.discount_factor(spot() + 90).unwrap(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_deposit_from_tenor() {
        let deposit = Deposit::from_tenor(spot(), "3M", 4.5).unwrap();
        assert_eq!(deposit.maturity_date(), Date::from_ymd(2025, 4, 2).unwrap());
        assert!(Deposit::from_tenor(spot(), "3X", 4.5).is_err());
        assert!(matches!(
            Deposit::from_tenor(spot(), "999999999D", 4.5),
            Err(CurveError::InvalidTenor { .. })
        ));
    }

    #[test]
    fn test_deposit_description() {
        let deposit = Deposit::new(spot(), spot() + 90, 5.0);
        assert_eq!(
            deposit.description(),
            "Deposit 5.0000% 2025-01-02 to 2025-04-02"
        );
    }
}
