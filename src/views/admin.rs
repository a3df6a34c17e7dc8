use serde::Serialize;
use tracing::instrument;
use crate::clients::{LocationClient, OrderClient, RestaurantClient, VendorAccount, VendorClient, VendorProfile};
use crate::domain::{Order, Restaurant, Role, User};
use crate::session::Session;
use super::ViewError;

/// Sales per restaurant, for the admin revenue chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSales {
    pub restaurant_id: String,
    pub name: String,
    pub total: f64,
}

/// Headline numbers on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub vendor_count: usize,
    pub total_revenue: f64,
    pub order_count: usize,
}

/// Per-restaurant order totals in catalog order. Every status counts.
pub fn sales_by_restaurant(restaurants: &[Restaurant], orders: &[Order]) -> Vec<RestaurantSales> {
    restaurants
        .iter()
        .map(|restaurant| RestaurantSales {
            restaurant_id: restaurant.id.clone(),
            name: restaurant.name.clone(),
            total: orders
                .iter()
                .filter(|order| order.restaurant_id == restaurant.id)
                .map(|order| order.total)
                .sum(),
        })
        .collect()
}

/// The admin console: vendor accounts, locations, and platform reports.
pub struct AdminView {
    session: Session,
    vendors: VendorClient,
    restaurants: RestaurantClient,
    orders: OrderClient,
    locations: LocationClient,
}

impl AdminView {
    pub fn new(
        session: Session,
        vendors: VendorClient,
        restaurants: RestaurantClient,
        orders: OrderClient,
        locations: LocationClient,
    ) -> Result<Self, ViewError> {
        session.require(Role::Admin)?;
        Ok(Self { session, vendors, restaurants, orders, locations })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // --- Vendors ---

    pub async fn vendors(&self) -> Result<Vec<VendorAccount>, ViewError> {
        Ok(self.vendors.list_vendors().await?)
    }

    pub async fn restaurants(&self) -> Result<Vec<Restaurant>, ViewError> {
        Ok(self.restaurants.list_restaurants().await?)
    }

    pub async fn register_vendor(&self, profile: VendorProfile) -> Result<VendorAccount, ViewError> {
        Ok(self.vendors.register_vendor(profile).await?)
    }

    pub async fn update_vendor(&self, user: User, restaurant: Restaurant) -> Result<VendorAccount, ViewError> {
        Ok(self.vendors.update_vendor(user, restaurant).await?)
    }

    /// Flips a vendor's active flag and returns the new value.
    pub async fn toggle_vendor_active(&self, user_id: &str) -> Result<bool, ViewError> {
        Ok(self.vendors.toggle_active(user_id.to_string()).await?)
    }

    /// Steps into a vendor's session without their password.
    #[instrument(skip(self))]
    pub async fn impersonate(&self, user_id: &str) -> Result<Session, ViewError> {
        let vendor = self.vendors.vendor_user(user_id.to_string()).await?;
        Ok(self.session.impersonate(vendor)?)
    }

    // --- Locations ---

    pub async fn locations(&self) -> Result<Vec<String>, ViewError> {
        Ok(self.locations.list_locations().await?)
    }

    /// Returns `false` if the location already existed.
    pub async fn add_location(&self, name: &str) -> Result<bool, ViewError> {
        Ok(self.locations.add_location(name.to_string()).await?)
    }

    /// Returns `false` if the location was not registered. Restaurants keep stale references.
    pub async fn delete_location(&self, name: &str) -> Result<bool, ViewError> {
        Ok(self.locations.delete_location(name.to_string()).await?)
    }

    // --- Reports ---

    pub async fn sales_report(&self) -> Result<Vec<RestaurantSales>, ViewError> {
        let restaurants = self.restaurants.list_restaurants().await?;
        let orders = self.orders.list_orders().await?;
        Ok(sales_by_restaurant(&restaurants, &orders))
    }

    pub async fn stats(&self) -> Result<AdminStats, ViewError> {
        let vendor_count = self.vendors.list_vendors().await?.len();
        let orders = self.orders.list_orders().await?;
        Ok(AdminStats {
            vendor_count,
            total_revenue: orders.iter().map(|order| order.total).sum(),
            order_count: orders.len(),
        })
    }
}
