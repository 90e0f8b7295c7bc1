//! # Tenor Core
//!
//! Core types for the Tenor curve bootstrapping library.
//!
//! - **Types**: the calendar [`Date`] used for spot and maturity dates
//! - **Day Count Conventions**: year fractions as actual days over a fixed basis
//! - **Errors**: [`CoreError`] for invalid dates
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//!
//! let spot = Date::from_ymd(2025, 1, 2).unwrap();
//! let maturity = spot + 90;
//! assert_eq!(year_fraction(spot, maturity, DEFAULT_BASIS), 0.25);
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
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{year_fraction, Act360, ActualFixed, DayCount, DEFAULT_BASIS};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::Date;
}

pub use error::{CoreError, CoreResult};
pub use types::Date;
