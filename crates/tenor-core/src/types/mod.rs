//! Domain types.
//!
//! - [`Date`]: Calendar date used for maturities and the spot date

mod date;

pub use date::Date;
