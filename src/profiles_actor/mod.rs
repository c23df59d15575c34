//! Profiles group: users and their profiles.
//!
//! Users live here rather than in a store of their own so that removing a user and its
//! profile is a single step of one actor.

pub mod error;

pub use error::*;

use crate::clients::ProfilesClient;
use crate::model::{Profile, User};
use relation_framework::RelationActor;

/// Creates a new profiles actor and its client.
pub fn new(buffer: usize) -> (RelationActor<User, Profile>, ProfilesClient) {
    let (actor, generic_client) = RelationActor::new(buffer);
    (actor, ProfilesClient::new(generic_client))
}
