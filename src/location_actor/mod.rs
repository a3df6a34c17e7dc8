//! The admin-maintained location registry.

pub mod entity;
pub mod error;

pub use error::*;
