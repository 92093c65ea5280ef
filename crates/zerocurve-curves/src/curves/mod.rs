//! Curve implementations.
//!
//! - [`SpotCurve`]: interpolated spot rates built from quotes
//! - [`ForwardCurve`]: forward rates anchored at a future date
//! - [`DiscountCurve`]: discount factors over the spot domain
//!
//! Forward and discount curves hold the spot curve behind an `Arc`, so one
//! spot curve can feed any number of derived curves.

mod discount;
mod forward;
mod spot;

pub use discount::DiscountCurve;
pub use forward::ForwardCurve;
pub use spot::SpotCurve;
