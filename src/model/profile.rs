//! A user's public profile, linked to exactly one [`User`](crate::model::User).

use crate::model::{User, UserId};
use relation_framework::{ActorEntity, ChildEntity, FieldRule, FieldValue, Validate};
use serde::{Deserialize, Serialize};

record_id!(
    /// Type-safe identifier for Profiles.
    ProfileId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: ProfileId,
    pub user: UserId,
    pub favorite_city: String,
}

/// Payload for creating a profile. `favorite_city` may be left blank.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileCreate {
    pub user: UserId,
    #[serde(default)]
    pub favorite_city: String,
}

impl ProfileCreate {
    pub fn new(user: UserId) -> Self {
        Self {
            user,
            favorite_city: String::new(),
        }
    }

    pub fn with_favorite_city(mut self, city: impl Into<String>) -> Self {
        self.favorite_city = city.into();
        self
    }
}

const PROFILE_RULES: &[FieldRule] = &[FieldRule::max_length("favorite_city", 64)];

impl Validate for ProfileCreate {
    fn rules() -> &'static [FieldRule] {
        PROFILE_RULES
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "favorite_city" => Some(FieldValue::Text(&self.favorite_city)),
            _ => None,
        }
    }
}

impl ActorEntity for Profile {
    type Id = ProfileId;
    type Create = ProfileCreate;

    fn id(&self) -> ProfileId {
        self.id
    }

    fn from_create_params(id: ProfileId, params: ProfileCreate) -> Self {
        Self {
            id,
            user: params.user,
            favorite_city: params.favorite_city,
        }
    }
}

impl ChildEntity<User> for Profile {
    fn parent_of(params: &ProfileCreate) -> UserId {
        params.user
    }

    fn parent(&self) -> UserId {
        self.user
    }
}
