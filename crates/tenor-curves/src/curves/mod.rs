//! Curve implementations.
//!
//! - [`DiscountCurve`]: maturity-keyed simple rates with linear interpolation

mod discount;

pub use discount::DiscountCurve;
