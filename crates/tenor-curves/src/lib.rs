//! # Tenor Curves
//!
//! Discount curve bootstrapping from cash deposits and forward deposits.
//!
//! This crate provides:
//!
//! - **Discount Curve**: [`DiscountCurve`], simple rates keyed by maturity with
//!   linear interpolation in calendar time and simple-interest discounting
//! - **Instruments**: [`Deposit`](instruments::Deposit) and
//!   [`ForwardDeposit`](instruments::ForwardDeposit), each contributing one
//!   curve point through [`CurveInstrument`]
//! - **Bootstrap**: [`bootstrap_curve`] and the builder-style
//!   [`SequentialBootstrapper`](bootstrap::SequentialBootstrapper)
//! - **Configuration**: [`CurveConfig`], loadable from TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use tenor_curves::prelude::*;
//!
//! let spot = Date::from_ymd(2025, 1, 2).unwrap();
//! let instruments = [
//!     Deposit::new(spot, spot + 180, 6.0),
//!     Deposit::new(spot, spot + 30, 4.0),
//! ];
//!
//! let curve = bootstrap_curve(spot, &instruments);
//!
//! let rate = curve.spot_rate(spot + 90).unwrap();
//! assert!((rate - 0.048).abs() < 1e-12);
//!
//! // No extrapolation beyond the last maturity
//! assert!(curve.discount_factor(spot + 365).unwrap_err().is_out_of_range());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod bootstrap;
pub mod config;
pub mod curves;
pub mod error;
pub mod instruments;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{bootstrap_curve, SequentialBootstrapper};
    pub use crate::config::CurveConfig;
    pub use crate::curves::DiscountCurve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::instruments::{
        CurveInstrument, Deposit, ForwardDeposit, Instrument, InstrumentType,
    };
    pub use tenor_core::daycounts::year_fraction;
    pub use tenor_core::Date;
}

pub use bootstrap::bootstrap_curve;
pub use config::CurveConfig;
pub use curves::DiscountCurve;
pub use error::{CurveError, CurveResult};
pub use instruments::CurveInstrument;
