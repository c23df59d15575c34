//! Group-specific wrappers around [`RelationClient`](relation_framework::RelationClient).

pub mod lettings_client;
pub mod profiles_client;

pub use lettings_client::*;
pub use profiles_client::*;
