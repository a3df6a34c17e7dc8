use crate::actor_framework::Entity;
use crate::domain::Location;

impl Entity for Location {
    type Id = String;
    type CreatePayload = String;
    type Patch = ();
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &String { &self.name }

    /// Locations are keyed by their own name; the generated id is ignored.
    fn from_create(_id: String, name: String) -> Result<Self, String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Location must not be empty".to_string());
        }
        Ok(Location::new(name))
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
