//! # Relation Framework
//!
//! Building blocks for stores of entities joined by an exclusive one-to-one relation,
//! built on the **Actor Model** with Tokio.
//!
//! A *relation group* is one parent type and one child type: each child references
//! exactly one parent and each parent is referenced by at most one child. Both live in
//! the same [`RelationActor`], which processes requests one at a time. Because a request
//! never yields half-way through, every operation is a transaction:
//!
//! - **Validated creates**: payloads are checked against their rule table
//!   ([`validation`]) and every violation is reported at once.
//! - **Write-time uniqueness**: a second child for the same parent, or a second parent
//!   with the same natural key, is rejected before anything is stored.
//! - **Atomic cascade**: deleting a parent removes its child in the same step; readers
//!   see both or neither.
//! - **Consistent reads**: children are returned [`Linked`] to their parent from the
//!   same snapshot.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`], [`ParentEntity`], [`ChildEntity`]) - your domain types
//! 2. **Runtime Layer** ([`RelationActor`]) - message processing and state
//! 3. **Interface Layer** ([`RelationClient`], [`RelationStore`]) - type-safe communication
//!
//! ## Quick Start
//!
//! ```rust
//! use relation_framework::validation::{FieldRule, FieldValue, Validate};
//! use relation_framework::{ActorEntity, ChildEntity, ParentEntity, RelationActor};
//!
//! #[derive(Clone, Debug)] struct Desk { id: u32 }
//! #[derive(Clone, Debug)] struct Lamp { id: u32, desk: u32, label: String }
//! #[derive(Debug)] struct DeskCreate;
//! #[derive(Debug)] struct LampCreate { desk: u32, label: String }
//!
//! impl Validate for DeskCreate {
//!     fn rules() -> &'static [FieldRule] { &[] }
//!     fn field(&self, _: &str) -> Option<FieldValue<'_>> { None }
//! }
//! impl Validate for LampCreate {
//!     fn rules() -> &'static [FieldRule] {
//!         const RULES: &[FieldRule] = &[FieldRule::max_length("label", 16)];
//!         RULES
//!     }
//!     fn field(&self, name: &str) -> Option<FieldValue<'_>> {
//!         (name == "label").then(|| FieldValue::Text(&self.label))
//!     }
//! }
//!
//! impl ActorEntity for Desk {
//!     type Id = u32; type Create = DeskCreate;
//!     fn id(&self) -> u32 { self.id }
//!     fn from_create_params(id: u32, _: DeskCreate) -> Self { Self { id } }
//! }
//! impl ParentEntity for Desk {}
//!
//! impl ActorEntity for Lamp {
//!     type Id = u32; type Create = LampCreate;
//!     fn id(&self) -> u32 { self.id }
//!     fn from_create_params(id: u32, p: LampCreate) -> Self {
//!         Self { id, desk: p.desk, label: p.label }
//!     }
//! }
//! impl ChildEntity<Desk> for Lamp {
//!     fn parent_of(p: &LampCreate) -> u32 { p.desk }
//!     fn parent(&self) -> u32 { self.desk }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = RelationActor::<Desk, Lamp>::new(8);
//!     tokio::spawn(actor.run());
//!
//!     let desk = client.create_parent(DeskCreate).await.unwrap();
//!     let lamp = client.create_child(LampCreate { desk, label: "green".into() }).await.unwrap();
//!
//!     // A desk takes one lamp only.
//!     assert!(client.create_child(LampCreate { desk, label: "red".into() }).await.is_err());
//!
//!     // Removing the desk removes its lamp.
//!     assert_eq!(client.delete_parent(desk).await.unwrap(), Some(lamp));
//!     assert!(client.get_child(lamp).await.unwrap().is_none());
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a scripted queue, for testing code that
//! consumes a client without running an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod validation;

// Re-export core types for convenience
pub use actor::RelationActor;
pub use client::RelationClient;
pub use client_trait::RelationStore;
pub use entity::{entity_name, ActorEntity, ChildEntity, Linked, ParentEntity};
pub use error::FrameworkError;
pub use message::{RelationRequest, Response};
pub use validation::{validate, FieldRule, FieldValue, RuleKind, Validate, ValidationErrors};
