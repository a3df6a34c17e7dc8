pub mod menu;
pub mod restaurant;
pub mod cart;
pub mod order;
pub mod user;
pub mod location;

pub use menu::*;
pub use restaurant::*;
pub use cart::*;
pub use order::*;
pub use user::*;
pub use location::*;
