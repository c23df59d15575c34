//! Pure data structures and their rule tables.
//!
//! Each entity implements [`ActorEntity`](relation_framework::ActorEntity) and each
//! create payload implements [`Validate`](relation_framework::Validate). The two
//! relation groups are `(Address, Letting)` and `(User, Profile)`.

/// Declares a type-safe numeric identifier allocated by a relation actor.
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub mod address;
pub mod letting;
pub mod profile;
pub mod user;

pub use address::*;
pub use letting::*;
pub use profile::*;
pub use user::*;
