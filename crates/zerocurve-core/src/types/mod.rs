//! Domain types.

mod date;
mod tenor;

pub use date::Date;
pub use tenor::{parse_tenor_days, Tenor, TenorUnit, DAYS_PER_MONTH};
