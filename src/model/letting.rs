//! A rental listing, linked to exactly one [`Address`](crate::model::Address).
//!
//! Lettings list in title order.

use crate::model::{Address, AddressId};
use relation_framework::{ActorEntity, ChildEntity, FieldRule, FieldValue, Validate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

record_id!(
    /// Type-safe identifier for Lettings.
    LettingId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Letting {
    pub id: LettingId,
    pub title: String,
    pub address: AddressId,
}

/// Payload for creating a new letting on an existing address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LettingCreate {
    pub title: String,
    pub address: AddressId,
}

impl LettingCreate {
    pub fn new(title: impl Into<String>, address: AddressId) -> Self {
        Self {
            title: title.into(),
            address,
        }
    }
}

const LETTING_RULES: &[FieldRule] = &[
    FieldRule::not_blank("title"),
    FieldRule::max_length("title", 256),
];

impl Validate for LettingCreate {
    fn rules() -> &'static [FieldRule] {
        LETTING_RULES
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "title" => Some(FieldValue::Text(&self.title)),
            _ => None,
        }
    }
}

impl ActorEntity for Letting {
    type Id = LettingId;
    type Create = LettingCreate;

    fn id(&self) -> LettingId {
        self.id
    }

    fn from_create_params(id: LettingId, params: LettingCreate) -> Self {
        Self {
            id,
            title: params.title,
            address: params.address,
        }
    }

    fn list_order(&self, other: &Self) -> Ordering {
        self.title.cmp(&other.title)
    }
}

impl ChildEntity<Address> for Letting {
    fn parent_of(params: &LettingCreate) -> AddressId {
        params.address
    }

    fn parent(&self) -> AddressId {
        self.address
    }
}
