//! Typed handles over the resource actors.

#[macro_use]
mod macros;

mod cart_client;
mod location_client;
mod order_client;
mod restaurant_client;
mod user_client;
mod vendor_client;

pub use cart_client::*;
pub use location_client::*;
pub use order_client::*;
pub use restaurant_client::*;
pub use user_client::*;
pub use vendor_client::*;
