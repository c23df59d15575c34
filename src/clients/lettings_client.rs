use crate::lettings_actor::LettingsError;
use crate::model::{Address, AddressCreate, AddressId, Letting, LettingCreate, LettingId};
use async_trait::async_trait;
use relation_framework::{entity_name, FrameworkError, Linked, RelationClient, RelationStore};
use tracing::{debug, instrument};

/// Client for interacting with the lettings actor.
#[derive(Clone, Debug)]
pub struct LettingsClient {
    inner: RelationClient<Address, Letting>,
}

impl LettingsClient {
    pub fn new(inner: RelationClient<Address, Letting>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_address(&self, params: AddressCreate) -> Result<AddressId, LettingsError> {
        debug!("Sending request");
        Ok(self.inner.create_parent(params).await?)
    }

    /// Creates a letting on an address that exists and has no letting yet.
    #[instrument(skip(self))]
    pub async fn create_letting(&self, params: LettingCreate) -> Result<LettingId, LettingsError> {
        debug!("Sending request");
        Ok(self.inner.create_child(params).await?)
    }

    pub async fn address(&self, id: AddressId) -> Result<Address, LettingsError> {
        self.get_parent(id)
            .await?
            .ok_or_else(|| FrameworkError::not_found(entity_name::<Address>(), id).into())
    }

    /// A letting together with the address it sits on.
    pub async fn letting(&self, id: LettingId) -> Result<Linked<Address, Letting>, LettingsError> {
        self.get_child(id)
            .await?
            .ok_or_else(|| FrameworkError::not_found(entity_name::<Letting>(), id).into())
    }

    /// Addresses in insertion order.
    pub async fn addresses(&self) -> Result<Vec<Address>, LettingsError> {
        self.list_parents().await
    }

    /// Lettings ordered by title.
    pub async fn lettings(&self) -> Result<Vec<Linked<Address, Letting>>, LettingsError> {
        self.list_children().await
    }

    /// Removes an address and, with it, its letting.
    pub async fn delete_address(&self, id: AddressId) -> Result<Option<LettingId>, LettingsError> {
        self.delete_parent(id).await
    }

    pub async fn delete_letting(&self, id: LettingId) -> Result<(), LettingsError> {
        self.delete_child(id).await
    }
}

#[async_trait]
impl RelationStore<Address, Letting> for LettingsClient {
    type Error = LettingsError;

    fn inner(&self) -> &RelationClient<Address, Letting> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
