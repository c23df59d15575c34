//! Minimal identity record a profile hangs off.
//!
//! Only what profile lookups need is modelled: a unique, case-sensitive username and an
//! optional email. Deleting a user deletes its profile.

use relation_framework::{ActorEntity, FieldRule, FieldValue, ParentEntity, Validate};
use serde::{Deserialize, Serialize};

record_id!(
    /// Type-safe identifier for Users.
    UserId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

/// Payload for registering a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserCreate {
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl UserCreate {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: String::new(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}

const USER_RULES: &[FieldRule] = &[
    FieldRule::not_blank("username"),
    FieldRule::max_length("username", 150),
    FieldRule::max_length("email", 254),
];

impl Validate for UserCreate {
    fn rules() -> &'static [FieldRule] {
        USER_RULES
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "username" => Some(FieldValue::Text(&self.username)),
            "email" => Some(FieldValue::Text(&self.email)),
            _ => None,
        }
    }
}

impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;

    fn id(&self) -> UserId {
        self.id
    }

    fn from_create_params(id: UserId, params: UserCreate) -> Self {
        Self {
            id,
            username: params.username,
            email: params.email,
        }
    }
}

impl ParentEntity for User {
    fn natural_key(&self) -> Option<&str> {
        Some(&self.username)
    }
}
