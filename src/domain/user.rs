use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Vendor,
    Admin,
}

/// Represents an account in the user table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<String>,
    /// Stored in clear text; this is a demo credential table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub username: String,
    pub role: Role,
    pub restaurant_id: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub password: Option<String>,
    pub restaurant_id: Option<String>,
    pub is_active: Option<bool>,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Notes
    /// The `id` field is initialized as an empty string and will be set by the actor system.
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            id: String::new(),
            username: username.into(),
            role,
            restaurant_id: None,
            password: None,
            is_active: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_restaurant(mut self, restaurant_id: impl Into<String>) -> Self {
        self.restaurant_id = Some(restaurant_id.into());
        self.is_active = Some(true);
        self
    }

    /// Exact match on both fields; users without a password can never log in.
    pub fn matches_credentials(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.as_deref() == Some(password)
    }

    /// Missing flag reads as active.
    pub fn active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }

    pub fn is_vendor(&self) -> bool {
        self.role == Role::Vendor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_exact_match() {
        let admin = User::new("admin", Role::Admin).with_password("adminpassword");
        assert!(admin.matches_credentials("admin", "adminpassword"));
        assert!(!admin.matches_credentials("admin", "wrong"));
        assert!(!admin.matches_credentials("Admin", "adminpassword"));
    }

    #[test]
    fn passwordless_user_cannot_log_in() {
        let guest = User::new("guest", Role::Customer);
        assert!(!guest.matches_credentials("guest", ""));
    }

    #[test]
    fn role_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Role::Vendor).unwrap(), "\"VENDOR\"");
    }
}
