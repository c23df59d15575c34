//! # Entity Traits
//!
//! A relation group manages two entity types bound by an exclusive one-to-one link:
//! a *parent* ([`ParentEntity`]) and a *child* ([`ChildEntity`]) that references exactly
//! one parent. Both share the [`ActorEntity`] contract: a typed identifier allocated by
//! the actor, a validated create payload and an optional list ordering.
//!
//! The traits are synchronous on purpose. A request is handled start to finish without
//! yielding, which is what makes every request an atomic transaction.

use crate::validation::Validate;
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Contract shared by every entity stored in a [`RelationActor`](crate::RelationActor).
///
/// # Associated Types
/// `Id` is allocated by the actor from a monotonically increasing `u32` counter, so it
/// must be constructible from `u32`. `Ord` on the id doubles as insertion order.
///
/// `Create` is the DTO accepted by `create`. It carries its own rule table through
/// [`Validate`], and the actor rejects it before anything is stored.
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// Typed identifier (e.g. `AddressId`).
    type Id: Copy + Eq + Ord + Hash + Send + Sync + Display + Debug + From<u32> + 'static;

    /// Payload for creating a new instance.
    type Create: Validate + Debug + Send + Sync + 'static;

    /// Returns the identifier assigned at creation.
    fn id(&self) -> Self::Id;

    /// Builds the entity from an already validated payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Self;

    /// Ordering applied by list operations. The sort is stable, so the default keeps
    /// insertion order.
    fn list_order(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }
}

/// The referenced side of a one-to-one relation.
pub trait ParentEntity: ActorEntity {
    /// Optional unique natural key (e.g. a username).
    ///
    /// When present, the group rejects a second parent with the same key and supports
    /// child lookup through it.
    fn natural_key(&self) -> Option<&str> {
        None
    }
}

/// The referencing side of a one-to-one relation with parent `P`.
pub trait ChildEntity<P: ParentEntity>: ActorEntity {
    /// Parent referenced by a create payload, checked before the child is stored.
    fn parent_of(params: &Self::Create) -> P::Id;

    /// Parent referenced by a stored child.
    fn parent(&self) -> P::Id;
}

/// A child read together with its parent from the same snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Linked<P, C> {
    pub child: C,
    pub parent: P,
}

/// Short type name used in logs and error messages (e.g. `Letting`).
pub fn entity_name<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
