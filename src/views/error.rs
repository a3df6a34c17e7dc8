use thiserror::Error;
use crate::cart_actor::CartError;
use crate::location_actor::LocationError;
use crate::order_actor::OrderError;
use crate::restaurant_actor::RestaurantError;
use crate::session::SessionError;
use crate::user_actor::UserError;

/// Any failure surfaced by a role view.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ViewError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Restaurant(#[from] RestaurantError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Location(#[from] LocationError),
}
