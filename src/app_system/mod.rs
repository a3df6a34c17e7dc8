//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod logging;
pub mod seed;
pub mod system;

pub use config::*;
pub use logging::*;
pub use system::*;
