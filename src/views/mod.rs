//! Role-scoped projections and commands: what each of the three screens can see and do.

mod admin;
mod customer;
mod error;
mod vendor;

pub use admin::*;
pub use customer::*;
pub use error::*;
pub use vendor::*;
