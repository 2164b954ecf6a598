//! Result catalogue module.
//!
//! - `CategoryCode` - the four-letter classification key
//! - `ResultCatalogue` - static profile content per code

mod category_code;
mod profiles;

pub use category_code::CategoryCode;
pub use profiles::{ResultCatalogue, ResultProfile};
