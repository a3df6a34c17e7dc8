//! Restaurant records and the vendor menu reducer.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
