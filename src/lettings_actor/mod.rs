//! Lettings group: addresses and the lettings attached to them.

pub mod error;

pub use error::*;

use crate::clients::LettingsClient;
use crate::model::{Address, Letting};
use relation_framework::RelationActor;

/// Creates a new lettings actor and its client.
pub fn new(buffer: usize) -> (RelationActor<Address, Letting>, LettingsClient) {
    let (actor, generic_client) = RelationActor::new(buffer);
    (actor, LettingsClient::new(generic_client))
}
