//! Sequential bootstrap in ascending maturity order.

use tenor_core::Date;
use tracing::{debug, info};

use crate::config::CurveConfig;
use crate::curves::DiscountCurve;
use crate::error::CurveResult;
use crate::instruments::CurveInstrument;

/// Builder-style bootstrapper owning its instruments.
///
/// # Example
///
/// ```rust
/// use tenor_core::Date;
/// use tenor_curves::bootstrap::SequentialBootstrapper;
/// use tenor_curves::instruments::{Deposit, ForwardDeposit};
/// use tenor_curves::CurveConfig;
///
/// let spot = Date::from_ymd(2025, 1, 2).unwrap();
/// let curve = SequentialBootstrapper::new(spot)
///     .with_config(CurveConfig { day_count_basis: 365 })
///     .add_instrument(Deposit::new(spot, spot + 90, 5.0))
///     .add_instrument(ForwardDeposit::new(spot + 90, spot + 180, 94.8))
///     .bootstrap()
///     .unwrap();
///
/// assert_eq!(curve.len(), 2);
/// assert_eq!(curve.basis(), 365);
/// ```
pub struct SequentialBootstrapper {
    /// Spot date of the curve.
    spot_date: Date,
    /// Instruments to bootstrap.
    instruments: Vec<Box<dyn CurveInstrument>>,
    /// Curve settings.
    config: CurveConfig,
}

impl SequentialBootstrapper {
    /// Creates a bootstrapper with the default configuration.
    #[must_use]
    pub fn new(spot_date: Date) -> Self {
        Self {
            spot_date,
            instruments: Vec::new(),
            config: CurveConfig::default(),
        }
    }

    /// Sets the curve configuration.
    #[must_use]
    pub fn with_config(mut self, config: CurveConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds an instrument.
    #[must_use]
    pub fn add_instrument<I: CurveInstrument + 'static>(mut self, instrument: I) -> Self {
        self.instruments.push(Box::new(instrument));
        self
    }

    /// Adds multiple instruments.
    #[must_use]
    pub fn add_instruments<I: CurveInstrument + 'static>(
        mut self,
        instruments: impl IntoIterator<Item = I>,
    ) -> Self {
        for instrument in instruments {
            self.instruments.push(Box::new(instrument));
        }
        self
    }

    /// Number of instruments added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// True if no instruments were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Builds the curve. An empty instrument set yields an empty curve.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidConfig` if the configuration fails validation.
    pub fn bootstrap(self) -> CurveResult<DiscountCurve> {
        self.config.validate()?;
        let curve = DiscountCurve::with_day_count(self.spot_date, self.config.day_count())?;
        Ok(populate(curve, &self.instruments))
    }
}

/// Feeds `instruments` into `curve` in ascending maturity order.
pub(crate) fn populate<I: CurveInstrument>(
    mut curve: DiscountCurve,
    instruments: &[I],
) -> DiscountCurve {
    let mut ordered: Vec<&I> = instruments.iter().collect();
    ordered.sort_by_key(|instrument| instrument.maturity());

    for instrument in ordered {
        debug!(instrument = %instrument.description(), "adding to curve");
        instrument.add_to_curve(&mut curve);
    }

    info!(
        spot_date = %curve.spot_date(),
        instruments = instruments.len(),
        points = curve.len(),
        "bootstrapped discount curve"
    );
    curve
}
