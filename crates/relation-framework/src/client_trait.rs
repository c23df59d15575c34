//! # RelationStore Trait
//!
//! Common interface for group-specific clients: implement `inner` and `map_error` and
//! the standard read, list and delete operations come for free, already mapped into
//! the group's own error type.
use crate::{ChildEntity, FrameworkError, Linked, ParentEntity, RelationClient};
use async_trait::async_trait;

/// Trait for group-specific clients to inherit the standard relation operations.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// struct LettingsClient { inner: RelationClient<Address, Letting> }
///
/// #[async_trait]
/// impl RelationStore<Address, Letting> for LettingsClient {
///     type Error = LettingsError;
///     fn inner(&self) -> &RelationClient<Address, Letting> { &self.inner }
///     fn map_error(e: FrameworkError) -> LettingsError { e.into() }
/// }
///
/// // list_children(), delete_parent(), ... are provided.
/// let lettings = client.list_children().await?;
/// ```
#[async_trait]
pub trait RelationStore<P, C>: Send + Sync
where
    P: ParentEntity,
    C: ChildEntity<P>,
{
    /// The group-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic RelationClient.
    fn inner(&self) -> &RelationClient<P, C>;

    /// Map framework errors to the group error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    #[tracing::instrument(skip(self))]
    async fn get_parent(&self, id: P::Id) -> Result<Option<P>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get_parent(id).await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    async fn get_child(&self, id: C::Id) -> Result<Option<Linked<P, C>>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get_child(id).await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    async fn list_parents(&self) -> Result<Vec<P>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list_parents().await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    async fn list_children(&self) -> Result<Vec<Linked<P, C>>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list_children().await.map_err(Self::map_error)
    }

    /// Delete a parent, cascading to its child.
    #[tracing::instrument(skip(self))]
    async fn delete_parent(&self, id: P::Id) -> Result<Option<C::Id>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete_parent(id).await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_child(&self, id: C::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete_child(id).await.map_err(Self::map_error)
    }
}
