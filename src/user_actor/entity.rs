use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate, UserPatch};
use super::actions::{UserAction, UserActionResult};

impl Entity for User {
    type Id = String;
    type CreatePayload = UserCreate;
    type Patch = UserPatch;
    type Action = UserAction;
    type ActionResult = UserActionResult;

    fn id(&self) -> &String { &self.id }

    /// Creates a new User from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for the user
    /// * `params` - Username, role, and the optional vendor fields
    fn from_create(id: String, params: UserCreate) -> Result<Self, String> {
        if params.username.trim().is_empty() {
            return Err("Username must not be empty".to_string());
        }
        Ok(Self {
            id,
            username: params.username,
            role: params.role,
            restaurant_id: params.restaurant_id,
            password: params.password,
            is_active: params.is_active,
        })
    }

    /// Updates the user's profile information.
    ///
    /// # Fields Updated
    /// - `username`, `password`, `restaurant_id`, `is_active`
    ///
    /// The role is fixed at creation.
    fn on_update(&mut self, patch: UserPatch) -> Result<(), String> {
        if let Some(username) = patch.username {
            if username.trim().is_empty() {
                return Err("Username must not be empty".to_string());
            }
            self.username = username;
        }
        if let Some(password) = patch.password {
            self.password = Some(password);
        }
        if let Some(restaurant_id) = patch.restaurant_id {
            self.restaurant_id = Some(restaurant_id);
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = Some(is_active);
        }
        Ok(())
    }

    fn handle_action(&mut self, action: UserAction) -> Result<UserActionResult, String> {
        match action {
            UserAction::ToggleActive => {
                let next = !self.active();
                self.is_active = Some(next);
                Ok(UserActionResult::ToggleActive(next))
            }
            UserAction::Replace(user) => {
                if user.username.trim().is_empty() {
                    return Err("Username must not be empty".to_string());
                }
                *self = User { id: self.id.clone(), ..user };
                Ok(UserActionResult::Replaced(self.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    #[test]
    fn toggle_flips_and_defaults_to_active() {
        let mut vendor = User::new("grill", Role::Vendor);
        assert_eq!(vendor.handle_action(UserAction::ToggleActive), Ok(UserActionResult::ToggleActive(false)));
        assert_eq!(vendor.handle_action(UserAction::ToggleActive), Ok(UserActionResult::ToggleActive(true)));
        assert_eq!(vendor.is_active, Some(true));
    }

    #[test]
    fn replace_writes_every_field_but_the_id() {
        let mut vendor = User::new("grill", Role::Vendor)
            .with_id("u2")
            .with_password("secret")
            .with_restaurant("r1");
        let replacement = User::new("grill house", Role::Vendor).with_id("ignored");

        let result = vendor.handle_action(UserAction::Replace(replacement)).unwrap();
        let expected = User::new("grill house", Role::Vendor).with_id("u2");
        assert_eq!(result, UserActionResult::Replaced(expected.clone()));
        assert_eq!(vendor, expected);
        assert_eq!(vendor.password, None);
        assert_eq!(vendor.is_active, None);
    }

    #[test]
    fn blank_username_is_rejected() {
        let mut user = User::new("grill", Role::Vendor);
        let patch = UserPatch { username: Some("  ".into()), ..UserPatch::default() };
        assert!(user.on_update(patch).is_err());
        assert_eq!(user.username, "grill");
    }
}
