//! # Zerocurve Curves
//!
//! Spot, forward and discount curves built from a short table of quoted
//! rates.
//!
//! This crate provides:
//!
//! - **Quotes**: [`RawQuote`] rows, validated into a [`QuoteSet`]
//! - **Spot curve**: daily linear interpolation between quoted tenors
//! - **Derived curves**: [`ForwardCurve`] and [`DiscountCurve`] from a spot curve
//! - **Views**: the [`DayCurve`] trait for charting and reporting
//! - **Sources**: the [`QuoteSource`] trait implemented by file readers
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use zerocurve_curves::prelude::*;
//!
//! let rows = vec![
//!     RawQuote::new("3 MO", "6,673567", "13.10.2021", "15.07.2021"),
//!     RawQuote::new("1 YR", "7,347589", "15.07.2022", "15.07.2021"),
//! ];
//! let spot = Arc::new(SpotCurve::new(rows).unwrap());
//!
//! let rate = spot.rate_at_tenor("6 MO").unwrap();
//! assert!(rate > 0.0667 && rate < 0.0735);
//!
//! let forward = ForwardCurve::from_date_str(Arc::clone(&spot), "15.10.2021").unwrap();
//! let one_month = forward.forward_at_tenor("1 MO").unwrap();
//! assert!(one_month > rate);
//!
//! let discount = DiscountCurve::new(spot).unwrap();
//! assert!(discount.discount_at_tenor("1 YR").unwrap() < 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]

pub mod curves;
pub mod error;
pub mod quotes;
pub mod source;
pub mod table;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curves::{DiscountCurve, ForwardCurve, SpotCurve};
    pub use crate::error::{CurveError, CurveResult, ErrorKind};
    pub use crate::quotes::{QuoteSet, QuotedPoint, RateQuote, RawQuote};
    pub use crate::source::{QuoteSource, SourceError};
    pub use crate::table::DayTable;
    pub use crate::traits::{CurveKind, CurvePoint, DayCurve};

    pub use zerocurve_core::{Date, Tenor};
}

pub use curves::{DiscountCurve, ForwardCurve, SpotCurve};
pub use error::{CurveError, CurveResult, ErrorKind};
pub use quotes::{QuoteSet, QuotedPoint, RateQuote, RawQuote};
pub use source::{QuoteSource, SourceError};
pub use table::DayTable;
pub use traits::{CurveKind, CurvePoint, DayCurve};
