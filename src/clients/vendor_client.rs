use serde::Serialize;
use tracing::{error, info, instrument};
use crate::clients::{RestaurantClient, UserClient};
use crate::domain::{Restaurant, RestaurantCreate, RestaurantPatch, Role, User, UserCreate, UserPatch};
use crate::restaurant_actor::RestaurantError;
use crate::user_actor::UserError;

/// What the admin fills in to open a vendor account.
#[derive(Debug, Clone)]
pub struct VendorProfile {
    pub username: String,
    pub password: String,
    pub restaurant_name: String,
    pub logo: String,
    pub location: String,
}

/// A vendor user together with the restaurant it runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorAccount {
    pub user: User,
    pub restaurant: Option<Restaurant>,
}

/// Vendor account lifecycle, spanning the User and Restaurant actors.
#[derive(Clone)]
pub struct VendorClient {
    user_client: UserClient,
    restaurant_client: RestaurantClient,
}

impl VendorClient {
    pub fn new(user_client: UserClient, restaurant_client: RestaurantClient) -> Self {
        Self { user_client, restaurant_client }
    }

    /// Creates an active vendor user and an empty-menu restaurant, linked both ways.
    ///
    /// If the restaurant cannot be created the new user is removed again.
    #[instrument(skip(self, profile), fields(username = %profile.username))]
    pub async fn register_vendor(&self, profile: VendorProfile) -> Result<VendorAccount, UserError> {
        info!("Processing register_vendor request");

        // Step 1: Create the vendor user
        let user_id = self.user_client.create_user(UserCreate {
            username: profile.username,
            role: Role::Vendor,
            restaurant_id: None,
            password: Some(profile.password),
            is_active: Some(true),
        }).await?;

        // Step 2: Create the restaurant it owns
        let created = self.restaurant_client.create_restaurant(RestaurantCreate {
            name: profile.restaurant_name,
            logo: profile.logo,
            location: profile.location,
            vendor_id: user_id.clone(),
        }).await;

        let restaurant_id = match created {
            Ok(id) => id,
            Err(e) => {
                error!(error = %e, "Restaurant creation failed, rolling back vendor user");
                if let Err(rollback) = self.user_client.delete_user(user_id).await {
                    error!(error = %rollback, "Vendor user rollback failed");
                }
                return Err(restaurant_error(e));
            }
        };

        // Step 3: Link the user back to the restaurant
        let patch = UserPatch { restaurant_id: Some(restaurant_id.clone()), ..UserPatch::default() };
        let user = self.user_client.update_user(user_id, patch).await?;
        let restaurant = self.restaurant_client
            .get_restaurant(restaurant_id)
            .await
            .map_err(restaurant_error)?;

        info!(user_id = %user.id, "Vendor registered successfully");
        Ok(VendorAccount { user, restaurant })
    }

    /// Replaces the stored user and restaurant records with the given ones, matched by id.
    ///
    /// Every user field is written, `None`s included. Both targets are checked
    /// before anything is written: the user must be a vendor and stay one, and
    /// the restaurant must exist with a non-empty name. If the restaurant write
    /// still fails, the previous user record is put back. The restaurant's menu
    /// is left untouched.
    #[instrument(skip(self, user, restaurant), fields(user_id = %user.id, restaurant_id = %restaurant.id))]
    pub async fn update_vendor(&self, user: User, restaurant: Restaurant) -> Result<VendorAccount, UserError> {
        info!("Processing update_vendor request");

        // Step 1: Check both targets before writing
        let previous = self.vendor_user(user.id.clone()).await?;
        if !user.is_vendor() {
            return Err(UserError::NotAVendor(user.id));
        }
        if restaurant.name.trim().is_empty() {
            return Err(restaurant_error(RestaurantError::ValidationError(
                "Restaurant name must not be empty".to_string(),
            )));
        }
        let current = self.restaurant_client
            .get_restaurant(restaurant.id.clone())
            .await
            .map_err(restaurant_error)?;
        if current.is_none() {
            return Err(restaurant_error(RestaurantError::NotFound(restaurant.id)));
        }

        // Step 2: Replace the user record
        let stored_user = self.user_client.replace_user(previous.id.clone(), user).await?;

        // Step 3: Update the restaurant profile
        let patch = RestaurantPatch {
            name: Some(restaurant.name),
            logo: Some(restaurant.logo),
            location: Some(restaurant.location),
            vendor_id: Some(restaurant.vendor_id),
        };
        match self.restaurant_client.update_restaurant(restaurant.id, patch).await {
            Ok(stored_restaurant) => {
                info!("Vendor updated successfully");
                Ok(VendorAccount { user: stored_user, restaurant: Some(stored_restaurant) })
            }
            Err(e) => {
                error!(error = %e, "Restaurant update failed, restoring vendor user");
                if let Err(rollback) = self.user_client.replace_user(previous.id.clone(), previous).await {
                    error!(error = %rollback, "Vendor user restore failed");
                }
                Err(restaurant_error(e))
            }
        }
    }

    /// Flips a vendor's active flag. Returns the new value.
    #[instrument(skip(self))]
    pub async fn toggle_active(&self, user_id: String) -> Result<bool, UserError> {
        let user = self.vendor_user(user_id.clone()).await?;
        let active = self.user_client.toggle_active(user.id).await?;
        info!(active, "Vendor active flag toggled");
        Ok(active)
    }

    /// Loads a user and checks it is a vendor.
    #[instrument(skip(self))]
    pub async fn vendor_user(&self, user_id: String) -> Result<User, UserError> {
        let user = self.user_client
            .get_user(user_id.clone())
            .await?
            .ok_or_else(|| UserError::NotFound(user_id.clone()))?;
        if !user.is_vendor() {
            return Err(UserError::NotAVendor(user_id));
        }
        Ok(user)
    }

    /// Every vendor with its restaurant, in registration order.
    #[instrument(skip(self))]
    pub async fn list_vendors(&self) -> Result<Vec<VendorAccount>, UserError> {
        let vendors = self.user_client.list_by_role(Role::Vendor).await?;
        let restaurants = self.restaurant_client
            .list_restaurants()
            .await
            .map_err(restaurant_error)?;

        Ok(vendors
            .into_iter()
            .map(|user| {
                let restaurant = restaurants
                    .iter()
                    .find(|restaurant| Some(&restaurant.id) == user.restaurant_id.as_ref())
                    .cloned();
                VendorAccount { user, restaurant }
            })
            .collect())
    }
}

fn restaurant_error(error: RestaurantError) -> UserError {
    UserError::Restaurant(error.to_string())
}
