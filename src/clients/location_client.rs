use tracing::{debug, info, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::Location;
use crate::location_actor::LocationError;

/// Client for the flat location registry.
#[derive(Clone)]
pub struct LocationClient {
    inner: ResourceClient<Location>,
}

impl_client_new!(LocationClient, Location);

impl LocationClient {
    /// Adds a location. Returns `false` if it was already registered.
    #[instrument(skip(self))]
    pub async fn add_location(&self, name: String) -> Result<bool, LocationError> {
        debug!("Sending request");
        match self.inner.create(name).await {
            Ok(_) => Ok(true),
            Err(FrameworkError::AlreadyExists(_)) => {
                info!("Location already registered");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Removes a location, matched after trimming like [`LocationClient::add_location`].
    /// Restaurants that still reference it keep the stale name.
    /// Returns `false` if it was not registered.
    #[instrument(skip(self))]
    pub async fn delete_location(&self, name: String) -> Result<bool, LocationError> {
        debug!("Sending request");
        match self.inner.delete(name.trim().to_string()).await {
            Ok(()) => Ok(true),
            Err(FrameworkError::NotFound(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_locations(&self) -> Result<Vec<String>, LocationError> {
        debug!("Sending request");
        let locations = self.inner.list().await?;
        Ok(locations.into_iter().map(|location| location.name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::ResourceActor;

    #[tokio::test]
    async fn add_is_idempotent_and_delete_is_unconditional() {
        let (actor, inner) = ResourceActor::<Location>::new(10, || "unused".to_string());
        tokio::spawn(actor.run());
        let client = LocationClient::new(inner);

        assert!(client.add_location("Downtown".into()).await.unwrap());
        assert!(!client.add_location("Downtown".into()).await.unwrap());
        assert!(client.add_location("Harbor".into()).await.unwrap());
        assert_eq!(client.list_locations().await.unwrap(), vec!["Downtown", "Harbor"]);

        assert!(client.delete_location("Downtown".into()).await.unwrap());
        assert!(!client.delete_location("Downtown".into()).await.unwrap());
        assert_eq!(client.list_locations().await.unwrap(), vec!["Harbor"]);
    }

    #[tokio::test]
    async fn names_are_trimmed_on_add_and_delete() {
        let (actor, inner) = ResourceActor::<Location>::new(10, || "unused".to_string());
        tokio::spawn(actor.run());
        let client = LocationClient::new(inner);

        assert!(client.add_location("  Food Court A ".into()).await.unwrap());
        assert!(!client.add_location("Food Court A".into()).await.unwrap());
        assert_eq!(client.list_locations().await.unwrap(), vec!["Food Court A"]);

        assert!(client.delete_location(" Food Court A ".into()).await.unwrap());
        assert!(client.list_locations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_location_is_rejected() {
        let (actor, inner) = ResourceActor::<Location>::new(10, || "unused".to_string());
        tokio::spawn(actor.run());
        let client = LocationClient::new(inner);

        let err = client.add_location("   ".into()).await.unwrap_err();
        assert!(matches!(err, LocationError::ValidationError(_)));
    }
}
