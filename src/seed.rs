//! Demo records loaded at startup with `--seed-demo-data`.
//!
//! Records go through the regular validated create path, so a bad fixture fails the
//! same way a bad request would.

use crate::clients::{LettingsClient, ProfilesClient};
use crate::lettings_actor::LettingsError;
use crate::model::{AddressCreate, LettingCreate, ProfileCreate, UserCreate};
use crate::profiles_actor::ProfilesError;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Lettings(#[from] LettingsError),
    #[error(transparent)]
    Profiles(#[from] ProfilesError),
}

/// How many records of each kind were loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub lettings: usize,
    pub profiles: usize,
}

struct DemoLetting {
    title: &'static str,
    number: i64,
    street: &'static str,
    city: &'static str,
    state: &'static str,
    zip_code: i64,
}

const DEMO_LETTINGS: &[DemoLetting] = &[
    DemoLetting {
        title: "Beautiful Apartment",
        number: 123,
        street: "Main Street",
        city: "Anytown",
        state: "CA",
        zip_code: 12345,
    },
    DemoLetting {
        title: "Cozy Cottage",
        number: 456,
        street: "Oak Avenue",
        city: "Springfield",
        state: "IL",
        zip_code: 62701,
    },
    DemoLetting {
        title: "Modern Loft",
        number: 789,
        street: "Pine Road",
        city: "Portland",
        state: "OR",
        zip_code: 97201,
    },
];

/// `(username, email, favorite_city)`
const DEMO_PROFILES: &[(&str, &str, &str)] = &[
    ("user1", "user1@example.com", "Paris"),
    ("user2", "user2@example.com", "London"),
    ("user3", "user3@example.com", ""),
];

pub async fn seed_demo_data(
    lettings: &LettingsClient,
    profiles: &ProfilesClient,
) -> Result<SeedSummary, SeedError> {
    let mut summary = SeedSummary::default();

    for demo in DEMO_LETTINGS {
        let address = lettings
            .create_address(AddressCreate {
                number: demo.number,
                street: demo.street.to_string(),
                city: demo.city.to_string(),
                state: demo.state.to_string(),
                zip_code: demo.zip_code,
                country_iso_code: "USA".to_string(),
            })
            .await?;
        lettings
            .create_letting(LettingCreate::new(demo.title, address))
            .await?;
        summary.lettings += 1;
    }

    for &(username, email, city) in DEMO_PROFILES {
        let user = profiles
            .create_user(UserCreate::new(username).with_email(email))
            .await?;
        profiles
            .create_profile(ProfileCreate::new(user).with_favorite_city(city))
            .await?;
        summary.profiles += 1;
    }

    info!(
        lettings = summary.lettings,
        profiles = summary.profiles,
        "Demo data loaded"
    );
    Ok(summary)
}
