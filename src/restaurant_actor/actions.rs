use crate::domain::MenuItem;

/// Vendor menu edits, dispatched through [`Restaurant`](crate::domain::Restaurant)'s action handler.
///
/// `AddItem` and `UpdateItem` share upsert semantics; the distinction is the
/// caller's intent only.
#[derive(Debug, Clone)]
pub enum MenuCommand {
    AddItem(MenuItem),
    UpdateItem(MenuItem),
    ArchiveItem(String),
    RestoreItem(String),
    /// Removes the item whether or not it is archived.
    DeleteItem(String),
}

/// Results from MenuCommands. `None` means the item id was not on the menu
/// and nothing changed.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuCommandResult {
    Saved(MenuItem),
    Archived(Option<MenuItem>),
    Restored(Option<MenuItem>),
    Deleted(Option<MenuItem>),
}
