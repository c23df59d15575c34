//! A physical address a letting can be attached to.
//!
//! Parent side of the lettings group: at most one [`Letting`](crate::model::Letting)
//! references an address, and deleting the address deletes that letting.

use relation_framework::{ActorEntity, FieldRule, FieldValue, ParentEntity, Validate};
use serde::{Deserialize, Serialize};

record_id!(
    /// Type-safe identifier for Addresses.
    AddressId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub id: AddressId,
    pub number: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: i64,
    pub country_iso_code: String,
}

/// Payload for creating a new address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddressCreate {
    pub number: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: i64,
    pub country_iso_code: String,
}

const ADDRESS_RULES: &[FieldRule] = &[
    FieldRule::min_value("number", 1),
    FieldRule::max_value("number", 9999),
    FieldRule::not_blank("street"),
    FieldRule::max_length("street", 64),
    FieldRule::not_blank("city"),
    FieldRule::max_length("city", 64),
    FieldRule::exact_length("state", 2),
    FieldRule::min_value("zip_code", 1),
    FieldRule::max_value("zip_code", 99999),
    FieldRule::exact_length("country_iso_code", 3),
];

impl Validate for AddressCreate {
    fn rules() -> &'static [FieldRule] {
        ADDRESS_RULES
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "number" => Some(FieldValue::Integer(self.number)),
            "street" => Some(FieldValue::Text(&self.street)),
            "city" => Some(FieldValue::Text(&self.city)),
            "state" => Some(FieldValue::Text(&self.state)),
            "zip_code" => Some(FieldValue::Integer(self.zip_code)),
            "country_iso_code" => Some(FieldValue::Text(&self.country_iso_code)),
            _ => None,
        }
    }
}

impl ActorEntity for Address {
    type Id = AddressId;
    type Create = AddressCreate;

    fn id(&self) -> AddressId {
        self.id
    }

    fn from_create_params(id: AddressId, params: AddressCreate) -> Self {
        Self {
            id,
            number: params.number,
            street: params.street,
            city: params.city,
            state: params.state,
            zip_code: params.zip_code,
            country_iso_code: params.country_iso_code,
        }
    }
}

impl ParentEntity for Address {}
