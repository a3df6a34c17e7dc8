//! Login, guest sessions, impersonation, and role checks.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument, warn};
use crate::clients::UserClient;
use crate::domain::{Role, User};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password. Please try again.";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,
    #[error("Forbidden: requires {required:?}, session is {actual:?}")]
    Forbidden { required: Role, actual: Role },
    #[error("Vendor {0} has no restaurant")]
    NoRestaurant(String),
    #[error("Order {0} belongs to another restaurant")]
    NotOwner(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Who is acting, and as what.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    user: Option<User>,
    role: Role,
    customer_id: String,
    impersonated_by: Option<String>,
}

impl Session {
    /// An anonymous customer, as after scanning a table QR code.
    pub fn guest(guest_id: impl Into<String>) -> Self {
        Self {
            user: None,
            role: Role::Customer,
            customer_id: guest_id.into(),
            impersonated_by: None,
        }
    }

    pub fn for_user(user: User) -> Self {
        Self {
            role: user.role,
            customer_id: user.id.clone(),
            user: Some(user),
            impersonated_by: None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The id orders are placed under.
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn impersonated_by(&self) -> Option<&str> {
        self.impersonated_by.as_deref()
    }

    /// Ends the session. Views built from it keep working until dropped.
    pub fn logout(self) {
        info!(role = ?self.role, "Logged out");
    }

    pub fn require(&self, required: Role) -> Result<(), SessionError> {
        if self.role == required {
            Ok(())
        } else {
            Err(SessionError::Forbidden { required, actual: self.role })
        }
    }

    /// The restaurant a vendor session manages.
    pub fn restaurant_id(&self) -> Result<&str, SessionError> {
        self.require(Role::Vendor)?;
        let user = self.user.as_ref().ok_or(SessionError::NoRestaurant(String::new()))?;
        user.restaurant_id
            .as_deref()
            .ok_or_else(|| SessionError::NoRestaurant(user.id.clone()))
    }

    /// Takes on a vendor's session directly, with no credential check.
    ///
    /// # Errors
    /// Only an admin may impersonate, and only a vendor can be impersonated.
    pub fn impersonate(&self, vendor: User) -> Result<Session, SessionError> {
        self.require(Role::Admin)?;
        if !vendor.is_vendor() {
            return Err(SessionError::Forbidden { required: Role::Vendor, actual: vendor.role });
        }
        let admin_id = self.user.as_ref().map(|admin| admin.id.clone());
        info!(vendor_id = %vendor.id, "Admin impersonating vendor");
        Ok(Session {
            impersonated_by: admin_id,
            ..Session::for_user(vendor)
        })
    }
}

/// Looks the credentials up in the user table.
///
/// The active flag is not consulted.
#[instrument(skip(users, password))]
pub async fn login(users: &UserClient, username: &str, password: &str) -> Result<Session, SessionError> {
    let user = users
        .find_by_credentials(username, password)
        .await
        .map_err(|e| SessionError::ActorCommunicationError(e.to_string()))?;

    match user {
        Some(user) => {
            info!(user_id = %user.id, role = ?user.role, "Login succeeded");
            Ok(Session::for_user(user))
        }
        None => {
            warn!("Login failed");
            Err(SessionError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_framework::create_mock_client;

    fn vendor() -> User {
        User::new("grill", Role::Vendor).with_id("u2").with_restaurant("r1")
    }

    fn admin() -> User {
        User::new("admin", Role::Admin).with_id("u1")
    }

    #[test]
    fn guest_is_a_customer_without_user() {
        let session = Session::guest("guest_user");
        assert_eq!(session.role(), Role::Customer);
        assert_eq!(session.customer_id(), "guest_user");
        assert!(session.user().is_none());
        assert!(session.require(Role::Vendor).is_err());
    }

    #[test]
    fn vendor_session_exposes_restaurant() {
        let session = Session::for_user(vendor());
        assert_eq!(session.restaurant_id(), Ok("r1"));
    }

    #[test]
    fn vendor_without_restaurant_is_refused() {
        let session = Session::for_user(User::new("new", Role::Vendor).with_id("u9"));
        assert_eq!(session.restaurant_id(), Err(SessionError::NoRestaurant("u9".into())));
    }

    #[test]
    fn only_admins_impersonate_vendors() {
        let admin_session = Session::for_user(admin());
        let as_vendor = admin_session.impersonate(vendor()).unwrap();
        assert_eq!(as_vendor.role(), Role::Vendor);
        assert_eq!(as_vendor.impersonated_by(), Some("u1"));

        let vendor_session = Session::for_user(vendor());
        assert!(matches!(
            vendor_session.impersonate(vendor()),
            Err(SessionError::Forbidden { required: Role::Admin, .. })
        ));
        assert!(admin_session.impersonate(admin()).is_err());
    }

    #[tokio::test]
    async fn login_reports_a_stopped_user_actor() {
        let (client, receiver) = create_mock_client::<User>(1);
        drop(receiver);
        let users = UserClient::new(client);

        let result = login(&users, "admin", "adminpassword").await;
        assert!(matches!(result, Err(SessionError::ActorCommunicationError(_))));
    }

    #[test]
    fn invalid_credentials_message_is_user_facing() {
        assert_eq!(SessionError::InvalidCredentials.to_string(), INVALID_CREDENTIALS_MESSAGE);
    }
}
