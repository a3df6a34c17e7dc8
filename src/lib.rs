//! # QuickServe
//!
//! The order model behind a three-role food-ordering app (customer, vendor,
//! admin), built as a set of resource actors.
//!
//! - **Domain types** - plain data with no actor concerns → [`domain`]
//! - **Resource actors** - one tokio task per collection, serving typed
//!   requests over a channel → [`actor_framework::ResourceActor`]
//! - **Entity impls** - creation, patching, and custom actions per collection
//!   → [`cart_actor`], [`order_actor`], [`restaurant_actor`], [`user_actor`],
//!   [`location_actor`]
//! - **Clients** - traced, typed handles; cross-actor flows such as placing an
//!   order or registering a vendor are orchestrated here → [`clients`]
//! - **Sessions and views** - login, role checks, and per-role projections →
//!   [`session`], [`views`]
//! - **System** - startup, seed data, config, tracing, shutdown → [`app_system`]
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use quickserve::app_system::{AppConfig, QuickServeSystem};
//!
//! let system = QuickServeSystem::new(AppConfig::default());
//! let customer = system.customer_view(system.guest_session())?;
//! customer.add_to_cart("r1", "m1", None, None).await?;
//! let order = customer.place_order().await?;
//! # let _ = order;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod cart_actor;
pub mod clients;
pub mod domain;
pub mod location_actor;
pub mod order_actor;
pub mod restaurant_actor;
pub mod session;
pub mod user_actor;
pub mod views;

#[cfg(test)]
mod mock_framework;
