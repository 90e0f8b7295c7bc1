//! Curve bootstrap.
//!
//! Instruments are sorted by maturity (stable, so equal maturities keep their
//! input order and the later one wins the curve point) and each one writes
//! its rate into the curve in that order.
//!
//! Every contribution is currently independent of the points already on the
//! curve, so the resulting point set does not depend on input order. The
//! ascending order is kept so that chained contributions can read the
//! segments before them.
//!
//! # Example
//!
//! ```rust
//! use tenor_core::Date;
//! use tenor_curves::bootstrap::bootstrap_curve;
//! use tenor_curves::instruments::{Deposit, ForwardDeposit, Instrument};
//!
//! let spot = Date::from_ymd(2025, 1, 2).unwrap();
//! let instruments: Vec<Instrument> = vec![
//!     Deposit::new(spot, spot + 180, 6.0).into(),
//!     Deposit::new(spot, spot + 30, 4.0).into(),
//!     ForwardDeposit::new(spot + 180, spot + 270, 93.5).into(),
//! ];
//!
//! let curve = bootstrap_curve(spot, &instruments);
//! assert_eq!(curve.len(), 3);
//! assert_eq!(curve.first_maturity(), Some(spot + 30));
//! ```

mod sequential;

pub use sequential::SequentialBootstrapper;

use tenor_core::Date;

use crate::curves::DiscountCurve;
use crate::instruments::CurveInstrument;

/// Builds an ACT/360 curve at `spot_date` from `instruments` in ascending maturity order.
pub fn bootstrap_curve<I: CurveInstrument>(spot_date: Date, instruments: &[I]) -> DiscountCurve {
    sequential::populate(DiscountCurve::new(spot_date), instruments)
}
