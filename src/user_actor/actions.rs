use crate::domain::User;

/// Account-level actions on a user record.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Flips the vendor enablement flag; a missing flag counts as active.
    ToggleActive,
    /// Overwrites every field except the id, including `None`s.
    Replace(User),
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserActionResult {
    /// The flag value after the toggle.
    ToggleActive(bool),
    /// The record as stored after the replace.
    Replaced(User),
}
