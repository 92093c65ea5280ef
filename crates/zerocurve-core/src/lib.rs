//! # Zerocurve Core
//!
//! Core types shared by every Zerocurve crate.
//!
//! This crate provides the foundational building blocks for curve construction:
//!
//! - **Types**: [`Date`] and [`Tenor`] (quoted tenor labels such as `"4 MO"` or `"11 YR"`)
//! - **Day Count**: [`Act365Fixed`], the only convention curves are built on
//! - **Compounding**: annual compounding helpers used by forward and discount curves
//!
//! ## Example
//!
//! ```rust
//! use zerocurve_core::prelude::*;
//!
//! let tenor = Tenor::parse("4 MO").unwrap();
//! assert_eq!(tenor.days(), 120);
//!
//! let settlement = Date::parse_dmy("15.07.2021").unwrap();
//! let future = Date::parse_dmy("15.10.2021").unwrap();
//! assert_eq!(settlement.days_between(&future), 92);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::uninlined_format_args)]

pub mod compounding;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::compounding;
    pub use crate::daycounts::{Act365Fixed, DAYS_PER_YEAR};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{parse_tenor_days, Date, Tenor, TenorUnit};
}

// Re-export commonly used types at crate root
pub use daycounts::Act365Fixed;
pub use error::{CoreError, CoreResult};
pub use types::{parse_tenor_days, Date, Tenor, TenorUnit};
