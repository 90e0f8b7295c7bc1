//! Forward-starting deposit instrument.

use tenor_core::daycounts::{Act360, DayCount};
use tenor_core::Date;

use super::{CurveInstrument, InstrumentType};
use crate::curves::DiscountCurve;
use crate::error::{CurveError, CurveResult};

/// A deposit over a forward period, quoted futures-style.
///
/// The quote is inverted into a forward rate as `1 − quote_pct / 100`, and
/// that forward rate is what the instrument writes into the curve at its
/// maturity.
///
/// Given the discount factor already established at the start date, the
/// discount factor at maturity chains forward as
///
/// ```text
/// DF(end) = DF(start) / (1 + f × τ(start, end))
/// ```
///
/// # Example
///
/// ```rust
/// use tenor_core::Date;
/// use tenor_curves::instruments::ForwardDeposit;
///
/// let spot = Date::from_ymd(2025, 1, 2).unwrap();
/// let forward = ForwardDeposit::new(spot + 90, spot + 180, 2.0);
///
/// assert!((forward.forward_rate() - 0.98).abs() < 1e-15);
/// assert!((forward.discount_factor(0.99) - 0.99 / 1.245).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardDeposit {
    /// Forward period start
    start_date: Date,
    /// Forward period end
    maturity_date: Date,
    /// Quote in percent
    quote_pct: f64,
}

impl ForwardDeposit {
    /// Creates a forward deposit over `[start_date, maturity_date]`.
    #[must_use]
    pub fn new(start_date: Date, maturity_date: Date, quote_pct: f64) -> Self {
        Self {
            start_date,
            maturity_date,
            quote_pct,
        }
    }

    /// Creates an `A x B` forward deposit starting `start_months` and ending
    /// `end_months` after `spot_date`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidTenor` if `start_months >= end_months` or
    /// the month arithmetic leaves the representable date range.
    pub fn from_months(
        spot_date: Date,
        start_months: i32,
        end_months: i32,
        quote_pct: f64,
    ) -> CurveResult<Self> {
        if start_months >= end_months {
            return Err(CurveError::invalid_tenor(format!(
                "{start_months}x{end_months} forward period is empty"
            )));
        }

        let start_date = spot_date.add_months(start_months).map_err(|e| {
            CurveError::invalid_tenor(format!("start of {start_months}x{end_months}: {e}"))
        })?;
        let maturity_date = spot_date.add_months(end_months).map_err(|e| {
            CurveError::invalid_tenor(format!("end of {start_months}x{end_months}: {e}"))
        })?;

        Ok(Self::new(start_date, maturity_date, quote_pct))
    }

    /// Returns the forward period start.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the forward period end.
    #[must_use]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Returns the quote in percent.
    #[must_use]
    pub fn quote_pct(&self) -> f64 {
        self.quote_pct
    }

    /// Forward rate implied by the quote: `1 − quote_pct / 100`.
    #[must_use]
    pub fn forward_rate(&self) -> f64 {
        1.0 - self.quote_pct / 100.0
    }

    /// Year fraction of the forward period.
    #[must_use]
    pub fn period(&self) -> f64 {
        Act360.year_fraction(self.start_date, self.maturity_date)
    }

    /// Discount factor at maturity, chained from the discount factor at the start date.
    #[must_use]
    pub fn discount_factor(&self, prev_discount_factor: f64) -> f64 {
        prev_discount_factor / (1.0 + self.forward_rate() * self.period())
    }

    /// Simple spot rate from `spot_date` to maturity implied by `discount_factor`.
    ///
    /// Returns a non-finite value when maturity falls on `spot_date`.
    #[must_use]
    pub fn spot_rate(&self, discount_factor: f64, spot_date: Date) -> f64 {
        let delta = Act360.year_fraction(spot_date, self.maturity_date);
        (1.0 / discount_factor - 1.0) / delta
    }
}

impl CurveInstrument for ForwardDeposit {
    fn maturity(&self) -> Date {
        self.maturity_date
    }

    fn add_to_curve(&self, curve: &mut DiscountCurve) {
        curve.add_entry(self.maturity_date, self.forward_rate());
    }

    fn instrument_type(&self) -> InstrumentType {
        InstrumentType::Forward
    }

    fn description(&self) -> String {
        let quote = self.quote_pct;
        let start = self.start_date;
        let maturity = self.maturity_date;
        format!("Forward px {quote:.4} {start} to {maturity}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spot() -> Date {
        Date::from_ymd(2025, 1, 2).unwrap()
    }

    #[test]
    fn test_forward_basic() {
        let forward = ForwardDeposit::new(spot() + 90, spot() + 180, 2.0);

        assert_eq!(forward.start_date(), spot() + 90);
        assert_eq!(forward.maturity_date(), spot() + 180);
        assert_eq!(forward.maturity(), spot() + 180);
        assert_eq!(forward.quote_pct(), 2.0);
        assert_relative_eq!(forward.forward_rate(), 0.98, epsilon = 1e-15);
        assert_relative_eq!(forward.period(), 0.25, epsilon = 1e-15);
        assert_eq!(forward.instrument_type(), InstrumentType::Forward);
    }

    #[test]
    fn test_forward_add_to_curve_stores_forward_rate() {
        let mut curve = DiscountCurve::new(spot());
        ForwardDeposit::new(spot() + 90, spot() + 180, 2.0).add_to_curve(&mut curve);

        assert_eq!(curve.maturities().collect::<Vec<_>>(), vec![spot() + 180]);
        assert_relative_eq!(curve.rate_at(spot() + 180).unwrap(), 0.98, epsilon = 1e-15);
    }

    #[test]
    fn test_forward_description_labels_price() {
        let forward = ForwardDeposit::new(spot() + 90, spot() + 180, 95.4);
        assert_eq!(
            forward.description(),
            "Forward px 95.4000 2025-04-02 to 2025-07-01"
        );
    }

    #[test]
    fn test_forward_discount_factor_chains() {
        let forward = ForwardDeposit::new(spot() + 90, spot() + 180, 2.0);

        let df = forward.discount_factor(0.99);
        assert_relative_eq!(df, 0.99 / 1.245, epsilon = 1e-12);
        assert_relative_eq!(df, 0.79518, epsilon = 1e-5);
    }

    #[test]
    fn test_forward_discount_factor_from_deposit() {
        let deposit = crate::instruments::Deposit::new(spot(), spot() + 90, 5.0);
        let forward = ForwardDeposit::new(spot() + 90, spot() + 180, 95.0);

        // Quote 95.0 inverts to a 5% forward rate
        let df_start = deposit.discount_factor(spot() + 90);
        let df_end = forward.discount_factor(df_start);
        assert_relative_eq!(df_end, 1.0 / (1.0125 * 1.0125), epsilon = 1e-12);
    }

    #[test]
    fn test_forward_spot_rate_inverts_discount_factor() {
        let forward = ForwardDeposit::new(spot() + 90, spot() + 180, 2.0);

        // DF of 1 / (1 + 0.05 × 0.5) implies a 5% simple rate over 180 days
        let rate = forward.spot_rate(1.0 / 1.025, spot());
        assert_relative_eq!(rate, 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_spot_rate_zero_period_is_not_finite() {
        let forward = ForwardDeposit::new(spot(), spot(), 2.0);
        assert!(!forward.spot_rate(0.99, spot()).is_finite());
    }

    #[test]
    fn test_forward_from_months() {
        let forward = ForwardDeposit::from_months(spot(), 3, 6, 97.5).unwrap();

        assert_eq!(forward.start_date(), Date::from_ymd(2025, 4, 2).unwrap());
        assert_eq!(forward.maturity_date(), Date::from_ymd(2025, 7, 2).unwrap());
        assert!(matches!(
            ForwardDeposit::from_months(spot(), 6, 3, 97.5),
            Err(CurveError::InvalidTenor { .. })
        ));
    }
}
