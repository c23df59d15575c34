//! # Relation Messages
//!
//! Requests sent from a [`RelationClient`](crate::RelationClient) to its
//! [`RelationActor`](crate::RelationActor). Every variant carries a `oneshot` sender for
//! the reply, so each request is answered exactly once.

use crate::entity::{ChildEntity, Linked, ParentEntity};
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to a relation actor.
///
/// The variants cover create, read, list and delete for both sides of the relation.
/// There is no update: entities are immutable once stored.
///
/// - **CreateParent / CreateChild**: validate, check uniqueness, store.
/// - **GetParent / GetChild**: point reads; children come back [`Linked`] to their parent.
/// - **FindByKey**: child lookup through the parent's natural key.
/// - **ListParents / ListChildren**: full scans in list order.
/// - **DeleteParent**: removes the parent and cascades to its child in one step.
/// - **DeleteChild**: removes only the child.
#[derive(Debug)]
pub enum RelationRequest<P, C>
where
    P: ParentEntity,
    C: ChildEntity<P>,
{
    CreateParent {
        params: P::Create,
        respond_to: Response<P::Id>,
    },
    CreateChild {
        params: C::Create,
        respond_to: Response<C::Id>,
    },
    GetParent {
        id: P::Id,
        respond_to: Response<Option<P>>,
    },
    GetChild {
        id: C::Id,
        respond_to: Response<Option<Linked<P, C>>>,
    },
    FindByKey {
        key: String,
        respond_to: Response<Option<Linked<P, C>>>,
    },
    ListParents {
        respond_to: Response<Vec<P>>,
    },
    ListChildren {
        respond_to: Response<Vec<Linked<P, C>>>,
    },
    DeleteParent {
        id: P::Id,
        respond_to: Response<Option<C::Id>>,
    },
    DeleteChild {
        id: C::Id,
        respond_to: Response<()>,
    },
}
