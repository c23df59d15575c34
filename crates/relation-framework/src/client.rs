//! # Generic Client
//!
//! The client half of a relation group: a cloneable handle that turns method calls into
//! [`RelationRequest`]s and awaits the actor's reply.

use crate::entity::{ChildEntity, Linked, ParentEntity};
use crate::error::FrameworkError;
use crate::message::{RelationRequest, Response};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `RelationActor`.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – every method resolves to `Result<…, FrameworkError>`.
/// * **Shutdown** – the actor stops once every clone has been dropped.
pub struct RelationClient<P, C>
where
    P: ParentEntity,
    C: ChildEntity<P>,
{
    sender: mpsc::Sender<RelationRequest<P, C>>,
}

impl<P, C> Clone for RelationClient<P, C>
where
    P: ParentEntity,
    C: ChildEntity<P>,
{
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<P, C> std::fmt::Debug for RelationClient<P, C>
where
    P: ParentEntity,
    C: ChildEntity<P>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelationClient")
            .field("closed", &self.sender.is_closed())
            .finish()
    }
}

impl<P, C> RelationClient<P, C>
where
    P: ParentEntity,
    C: ChildEntity<P>,
{
    pub fn new(sender: mpsc::Sender<RelationRequest<P, C>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> RelationRequest<P, C>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create_parent(&self, params: P::Create) -> Result<P::Id, FrameworkError> {
        self.request(|respond_to| RelationRequest::CreateParent { params, respond_to })
            .await
    }

    pub async fn create_child(&self, params: C::Create) -> Result<C::Id, FrameworkError> {
        self.request(|respond_to| RelationRequest::CreateChild { params, respond_to })
            .await
    }

    pub async fn get_parent(&self, id: P::Id) -> Result<Option<P>, FrameworkError> {
        self.request(|respond_to| RelationRequest::GetParent { id, respond_to })
            .await
    }

    pub async fn get_child(&self, id: C::Id) -> Result<Option<Linked<P, C>>, FrameworkError> {
        self.request(|respond_to| RelationRequest::GetChild { id, respond_to })
            .await
    }

    pub async fn find_by_key(
        &self,
        key: impl Into<String>,
    ) -> Result<Option<Linked<P, C>>, FrameworkError> {
        let key = key.into();
        self.request(|respond_to| RelationRequest::FindByKey { key, respond_to })
            .await
    }

    pub async fn list_parents(&self) -> Result<Vec<P>, FrameworkError> {
        self.request(|respond_to| RelationRequest::ListParents { respond_to })
            .await
    }

    pub async fn list_children(&self) -> Result<Vec<Linked<P, C>>, FrameworkError> {
        self.request(|respond_to| RelationRequest::ListChildren { respond_to })
            .await
    }

    /// Deletes a parent and, atomically, the child linked to it.
    ///
    /// Returns the id of the cascaded child, if there was one.
    pub async fn delete_parent(&self, id: P::Id) -> Result<Option<C::Id>, FrameworkError> {
        self.request(|respond_to| RelationRequest::DeleteParent { id, respond_to })
            .await
    }

    pub async fn delete_child(&self, id: C::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| RelationRequest::DeleteChild { id, respond_to })
            .await
    }
}
