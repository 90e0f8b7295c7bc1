//! Curve instruments for deposit curve bootstrap.
//!
//! Each instrument contributes exactly one point to a [`DiscountCurve`],
//! keyed by its own maturity. The contribution goes through the
//! [`CurveInstrument`] trait; the discount factor methods stay on the
//! concrete types because their inputs differ:
//!
//! - [`Deposit`]: simple-interest cash deposit from spot to maturity,
//!   discounted at an arbitrary date
//! - [`ForwardDeposit`]: forward-starting deposit quoted futures-style,
//!   chained off the discount factor at its start date
//!
//! [`Instrument`] is the closed set of both variants for callers that hold
//! heterogeneous quotes in one collection.

mod deposit;
mod forward;
mod tenor;

pub use deposit::Deposit;
pub use forward::ForwardDeposit;
pub use tenor::parse_tenor;

use tenor_core::Date;

use crate::curves::DiscountCurve;

/// Instrument type for categorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InstrumentType {
    /// Cash deposit starting at spot.
    Deposit,
    /// Forward-starting deposit.
    Forward,
}

impl std::fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Forward => write!(f, "Forward"),
        }
    }
}

/// An instrument that contributes a rate point to a discount curve.
///
/// # Example
///
/// ```rust
/// use tenor_core::Date;
/// use tenor_curves::instruments::{CurveInstrument, Deposit};
/// use tenor_curves::DiscountCurve;
///
/// let spot = Date::from_ymd(2025, 1, 2).unwrap();
/// let deposit = Deposit::new(spot, spot + 90, 5.0);
///
/// let mut curve = DiscountCurve::new(spot);
/// deposit.add_to_curve(&mut curve);
/// assert_eq!(curve.rate_at(spot + 90), Some(0.05));
/// ```
pub trait CurveInstrument: Send + Sync {
    /// Date the quoted rate period ends. Curve points are keyed by it.
    fn maturity(&self) -> Date;

    /// Writes this instrument's rate into `curve` at [`maturity`](Self::maturity).
    fn add_to_curve(&self, curve: &mut DiscountCurve);

    /// Returns the instrument type.
    fn instrument_type(&self) -> InstrumentType;

    /// Returns a description string for logging.
    fn description(&self) -> String {
        format!("{} maturing {}", self.instrument_type(), self.maturity())
    }
}

impl<T: CurveInstrument + ?Sized> CurveInstrument for Box<T> {
    fn maturity(&self) -> Date {
        (**self).maturity()
    }

    fn add_to_curve(&self, curve: &mut DiscountCurve) {
        (**self).add_to_curve(curve);
    }

    fn instrument_type(&self) -> InstrumentType {
        (**self).instrument_type()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

impl<T: CurveInstrument + ?Sized> CurveInstrument for &T {
    fn maturity(&self) -> Date {
        (**self).maturity()
    }

    fn add_to_curve(&self, curve: &mut DiscountCurve) {
        (**self).add_to_curve(curve);
    }

    fn instrument_type(&self) -> InstrumentType {
        (**self).instrument_type()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// Either instrument variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instrument {
    /// Cash deposit.
    Deposit(Deposit),
    /// Forward-starting deposit.
    Forward(ForwardDeposit),
}

impl Instrument {
    /// Returns the deposit, if this is one.
    #[must_use]
    pub fn as_deposit(&self) -> Option<&Deposit> {
        match self {
            Self::Deposit(deposit) => Some(deposit),
            Self::Forward(_) => None,
        }
    }

    /// Returns the forward deposit, if this is one.
    #[must_use]
    pub fn as_forward(&self) -> Option<&ForwardDeposit> {
        match self {
            Self::Forward(forward) => Some(forward),
            Self::Deposit(_) => None,
        }
    }
}

impl CurveInstrument for Instrument {
    fn maturity(&self) -> Date {
        match self {
            Self::Deposit(deposit) => deposit.maturity(),
            Self::Forward(forward) => forward.maturity(),
        }
    }

    fn add_to_curve(&self, curve: &mut DiscountCurve) {
        match self {
            Self::Deposit(deposit) => deposit.add_to_curve(curve),
            Self::Forward(forward) => forward.add_to_curve(curve),
        }
    }

    fn instrument_type(&self) -> InstrumentType {
        match self {
            Self::Deposit(_) => InstrumentType::Deposit,
            Self::Forward(_) => InstrumentType::Forward,
        }
    }

    fn description(&self) -> String {
        match self {
            Self::Deposit(deposit) => deposit.description(),
            Self::Forward(forward) => forward.description(),
        }
    }
}

impl From<Deposit> for Instrument {
    fn from(deposit: Deposit) -> Self {
        Self::Deposit(deposit)
    }
}

impl From<ForwardDeposit> for Instrument {
    fn from(forward: ForwardDeposit) -> Self {
        Self::Forward(forward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot() -> Date {
        Date::from_ymd(2025, 1, 2).unwrap()
    }

    #[test]
    fn test_instrument_dispatch() {
        let deposit: Instrument = Deposit::new(spot(), spot() + 90, 5.0).into();
        let forward: Instrument = ForwardDeposit::new(spot() + 90, spot() + 180, 2.0).into();

        assert_eq!(deposit.maturity(), spot() + 90);
        assert_eq!(forward.maturity(), spot() + 180);
        assert_eq!(deposit.instrument_type(), InstrumentType::Deposit);
        assert_eq!(forward.instrument_type(), InstrumentType::Forward);
        assert!(deposit.as_deposit().is_some());
        assert!(deposit.as_forward().is_none());
        assert!(forward.as_forward().is_some());
    }

    #[test]
    fn test_enum_add_to_curve_delegates() {
        let mut curve = DiscountCurve::new(spot());
        Instrument::from(Deposit::new(spot(), spot() + 90, 5.0)).add_to_curve(&mut curve);
        Instrument::from(ForwardDeposit::new(spot() + 90, spot() + 180, 2.0))
            .add_to_curve(&mut curve);

        assert_eq!(curve.rate_at(spot() + 90), Some(0.05));
        assert_eq!(curve.rate_at(spot() + 180), Some(0.98));
    }

    #[test]
    fn test_boxed_trait_object() {
        let boxed: Box<dyn CurveInstrument> = Box::new(Deposit::new(spot(), spot() + 30, 4.0));
        let mut curve = DiscountCurve::new(spot());
        boxed.add_to_curve(&mut curve);

        assert_eq!(boxed.maturity(), spot() + 30);
        assert_eq!(curve.rate_at(spot() + 30), Some(0.04));
    }

    #[test]
    fn test_default_description() {
        struct Fixed(Date);

        impl CurveInstrument for Fixed {
            fn maturity(&self) -> Date {
                self.0
            }

            fn add_to_curve(&self, curve: &mut DiscountCurve) {
                curve.add_entry(self.0, 0.01);
            }

            fn instrument_type(&self) -> InstrumentType {
                InstrumentType::Deposit
            }
        }

        assert_eq!(Fixed(spot()).description(), "Deposit maturing 2025-01-02");
    }

    #[test]
    fn test_instrument_type_display() {
        assert_eq!(InstrumentType::Deposit.to_string(), "Deposit");
        assert_eq!(InstrumentType::Forward.to_string(), "Forward");
    }
}
