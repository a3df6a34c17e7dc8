use chrono::Utc;
use tracing::{error, info};
use crate::actor_framework::ResourceActor;
use crate::clients::{CartClient, LocationClient, OrderClient, RestaurantClient, UserClient, VendorClient};
use crate::domain::{Cart, Location, Order, Restaurant, User};
use crate::session::{self, Session, SessionError};
use crate::views::{AdminView, CustomerView, VendorView, ViewError};
use super::{seed, AppConfig};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// Sequential ids of the form `<prefix>_<n>`.
fn counter_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{}_{}", prefix, id)
    }
}

/// Ids of the form `<prefix>_<unix millis>`, bumped so they never repeat.
fn time_ordered_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let last = Arc::new(AtomicI64::new(0));
    move || {
        let now = Utc::now().timestamp_millis();
        let previous = last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| Some(now.max(prev + 1)))
            .unwrap_or_else(|prev| prev);
        format!("{}_{}", prefix, now.max(previous + 1))
    }
}

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct QuickServeSystem {
    pub config: AppConfig,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    pub restaurant_client: RestaurantClient,
    pub user_client: UserClient,
    pub vendor_client: VendorClient,
    pub location_client: LocationClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl QuickServeSystem {
    pub fn new(config: AppConfig) -> Self {
        info!(seed_demo_data = config.seed_demo_data, "Starting QuickServe system");
        let buffer = config.channel_buffer;
        let seeded = config.seed_demo_data;

        // 1. User Service
        let users = if seeded { seed::demo_users() } else { Vec::new() };
        let (user_actor, user_resource_client) = ResourceActor::<User>::with_items(buffer, counter_ids("user"), users);
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        // 2. Restaurant Service
        let restaurants = if seeded { seed::demo_restaurants() } else { Vec::new() };
        let (restaurant_actor, restaurant_resource_client) =
            ResourceActor::<Restaurant>::with_items(buffer, counter_ids("restaurant"), restaurants);
        let restaurant_client = RestaurantClient::new(restaurant_resource_client);
        let restaurant_handle = tokio::spawn(restaurant_actor.run());

        // 3. Location Service (keyed by name, the generator is never consulted)
        let locations = if seeded { seed::demo_locations() } else { Vec::new() };
        let (location_actor, location_resource_client) =
            ResourceActor::<Location>::with_items(buffer, counter_ids("location"), locations);
        let location_client = LocationClient::new(location_resource_client);
        let location_handle = tokio::spawn(location_actor.run());

        // 4. Cart Service (keyed by customer id)
        let (cart_actor, cart_resource_client) = ResourceActor::<Cart>::new(buffer, counter_ids("cart"));
        let cart_client = CartClient::new(cart_resource_client);
        let cart_handle = tokio::spawn(cart_actor.run());

        // 5. Order Service
        let (order_actor, order_resource_client) = ResourceActor::<Order>::new(buffer, time_ordered_ids("ord"));
        let order_client = OrderClient::new(order_resource_client, cart_client.clone());
        let order_handle = tokio::spawn(order_actor.run());

        let vendor_client = VendorClient::new(user_client.clone(), restaurant_client.clone());

        Self {
            config,
            cart_client,
            order_client,
            restaurant_client,
            user_client,
            vendor_client,
            location_client,
            handles: vec![user_handle, restaurant_handle, location_handle, cart_handle, order_handle],
        }
    }

    /// Credential login against the user table.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, SessionError> {
        session::login(&self.user_client, username, password).await
    }

    /// Session for an anonymous customer.
    pub fn guest_session(&self) -> Session {
        Session::guest(self.config.guest_id.clone())
    }

    pub fn customer_view(&self, session: Session) -> Result<CustomerView, ViewError> {
        CustomerView::new(
            session,
            self.restaurant_client.clone(),
            self.cart_client.clone(),
            self.order_client.clone(),
            self.config.service_fee,
        )
    }

    pub fn vendor_view(&self, session: Session) -> Result<VendorView, ViewError> {
        VendorView::new(session, self.restaurant_client.clone(), self.order_client.clone())
    }

    pub fn admin_view(&self, session: Session) -> Result<AdminView, ViewError> {
        AdminView::new(
            session,
            self.vendor_client.clone(),
            self.restaurant_client.clone(),
            self.order_client.clone(),
            self.location_client.clone(),
        )
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // Dropping every client closes the channels; each ResourceActor stops when its channel does.
        // Views hold clones, so they must be dropped by the caller first.
        drop(self.order_client);
        drop(self.cart_client);
        drop(self.vendor_client);
        drop(self.restaurant_client);
        drop(self.user_client);
        drop(self.location_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
