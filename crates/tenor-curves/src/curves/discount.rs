//! Piecewise-linear deposit discount curve.

use std::collections::BTreeMap;

use tenor_core::daycounts::{ActualFixed, DayCount};
use tenor_core::Date;
use tracing::debug;

use crate::error::{CurveError, CurveResult};

/// A sparse yield curve of simple rates keyed by maturity date.
///
/// Rates are stored per maturity and linearly interpolated in calendar time
/// between the two bracketing maturities. Discount factors use simple
/// interest measured from the spot date:
///
/// ```text
/// DF(t) = 1 / (1 + r(t) × τ(spot, t))
/// ```
///
/// The curve never extrapolates: queries before the first or after the last
/// stored maturity fail with [`CurveError::DateOutOfRange`].
///
/// # Example
///
/// ```rust
/// use tenor_core::Date;
/// use tenor_curves::DiscountCurve;
///
/// let spot = Date::from_ymd(2025, 1, 2).unwrap();
/// let mut curve = DiscountCurve::new(spot);
/// curve.add_entry(spot + 30, 0.04);
/// curve.add_entry(spot + 180, 0.06);
///
/// let rate = curve.spot_rate(spot + 90).unwrap();
/// assert!((rate - 0.048).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountCurve {
    /// Valuation date all discounting is measured from.
    spot_date: Date,
    /// Convention for every year fraction on this curve.
    day_count: ActualFixed,
    /// Rates keyed by maturity, kept in date order.
    points: BTreeMap<Date, f64>,
}

impl DiscountCurve {
    /// Creates an empty ACT/360 curve anchored at `spot_date`.
    #[must_use]
    pub fn new(spot_date: Date) -> Self {
        Self {
            spot_date,
            day_count: ActualFixed::default(),
            points: BTreeMap::new(),
        }
    }

    /// Creates an empty curve measuring time as actual days over `basis`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidConfig`] if `basis` is zero.
    pub fn with_basis(spot_date: Date, basis: u32) -> CurveResult<Self> {
        Self::with_day_count(spot_date, ActualFixed::new(basis))
    }

    /// Creates an empty curve with an explicit day count.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidConfig`] if the day count has a zero basis.
    pub fn with_day_count(spot_date: Date, day_count: ActualFixed) -> CurveResult<Self> {
        if day_count.basis() == 0 {
            return Err(CurveError::invalid_config("day count basis must be positive"));
        }

        Ok(Self {
            day_count,
            ..Self::new(spot_date)
        })
    }

    /// Returns the spot (valuation) date.
    #[must_use]
    pub fn spot_date(&self) -> Date {
        self.spot_date
    }

    /// Returns the day count used for year fractions.
    #[must_use]
    pub fn day_count(&self) -> ActualFixed {
        self.day_count
    }

    /// Days per year used for year fractions.
    #[must_use]
    pub fn basis(&self) -> u32 {
        self.day_count.basis()
    }

    /// Number of stored maturities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no points are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True if a rate is stored exactly at `maturity`.
    #[must_use]
    pub fn contains(&self, maturity: Date) -> bool {
        self.points.contains_key(&maturity)
    }

    /// Stored rate at exactly `maturity`, without interpolation.
    #[must_use]
    pub fn rate_at(&self, maturity: Date) -> Option<f64> {
        self.points.get(&maturity).copied()
    }

    /// Earliest stored maturity.
    #[must_use]
    pub fn first_maturity(&self) -> Option<Date> {
        self.points.keys().next().copied()
    }

    /// Latest stored maturity.
    #[must_use]
    pub fn last_maturity(&self) -> Option<Date> {
        self.points.keys().next_back().copied()
    }

    /// Stored maturities in ascending order.
    pub fn maturities(&self) -> impl Iterator<Item = Date> + '_ {
        self.points.keys().copied()
    }

    /// Stored `(maturity, rate)` points in ascending maturity order.
    pub fn points(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.points.iter().map(|(&date, &rate)| (date, rate))
    }

    /// Inserts the rate at `maturity`, replacing any rate already stored there.
    pub fn add_entry(&mut self, maturity: Date, rate: f64) {
        if let Some(previous) = self.points.insert(maturity, rate) {
            debug!(%maturity, previous, rate, "overwrote curve point");
        }
    }

    /// Interpolated simple spot rate at `date`.
    ///
    /// A stored maturity returns its rate unchanged. Otherwise, with `d1` the
    /// nearest maturity before `date` and `d2` the nearest after it:
    ///
    /// ```text
    /// q = τ(date, d2) / τ(d1, d2)
    /// r = r(d1) × q + r(d2) × (1 − q)
    /// ```
    ///
    /// # Errors
    ///
    /// - [`CurveError::DateOutOfRange`] if `date` is before the first or after
    ///   the last stored maturity
    /// - [`CurveError::EmptyCurve`] if no points are stored
    /// - [`CurveError::DegenerateInterval`] if the bracketing maturities span
    ///   zero time
    pub fn spot_rate(&self, date: Date) -> CurveResult<f64> {
        if let Some(rate) = self.rate_at(date) {
            return Ok(rate);
        }

        let before = self.points.range(..date).next_back();
        let after = self.points.range(date..).next();

        let (Some((&d1, &r1)), Some((&d2, &r2))) = (before, after) else {
            return Err(self.out_of_range(date));
        };

        if d1.days_between(&d2) == 0 {
            return Err(CurveError::degenerate_interval(d1));
        }

        let t1 = self.day_count.year_fraction(date, d2);
        let t2 = self.day_count.year_fraction(d1, d2);
        let q = t1 / t2;

        Ok(r1 * q + r2 * (1.0 - q))
    }

    /// Simple-interest discount factor at `date`: `1 / (1 + r × τ(spot, date))`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`DiscountCurve::spot_rate`].
    pub fn discount_factor(&self, date: Date) -> CurveResult<f64> {
        let rate = self.spot_rate(date)?;
        Ok(self.simple_discount(rate, date))
    }

    /// Discount factor at every stored maturity, in ascending maturity order.
    #[must_use]
    pub fn pillar_discount_factors(&self) -> Vec<(Date, f64)> {
        self.points()
            .map(|(date, rate)| (date, self.simple_discount(rate, date)))
            .collect()
    }

    fn simple_discount(&self, rate: f64, date: Date) -> f64 {
        let t = self.day_count.year_fraction(self.spot_date, date);
        1.0 / (1.0 + rate * t)
    }

    fn out_of_range(&self, date: Date) -> CurveError {
        match (self.first_maturity(), self.last_maturity()) {
            (Some(min), Some(max)) => CurveError::date_out_of_range(date, min, max),
            _ => CurveError::empty_curve(date),
        }
    }
}
