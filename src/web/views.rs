//! Response bodies.

use crate::model::{Address, Letting, LettingId, Profile, User};
use relation_framework::Linked;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SiteIndex {
    pub title: &'static str,
    pub links: SiteLinks,
}

#[derive(Debug, Serialize)]
pub struct SiteLinks {
    pub lettings: &'static str,
    pub profiles: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LettingsIndex {
    pub lettings: Vec<LettingSummary>,
}

#[derive(Debug, Serialize)]
pub struct LettingSummary {
    pub id: LettingId,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct LettingDetail {
    pub id: LettingId,
    pub title: String,
    pub address: AddressView,
}

/// Address attributes as shown on a letting; the internal id is left out.
#[derive(Debug, Serialize)]
pub struct AddressView {
    pub number: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: i64,
    pub country_iso_code: String,
}

#[derive(Debug, Serialize)]
pub struct ProfilesIndex {
    pub profiles: Vec<ProfileSummary>,
}

#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    pub username: String,
    pub favorite_city: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileDetail {
    pub username: String,
    pub email: String,
    pub favorite_city: String,
}

impl From<Linked<Address, Letting>> for LettingSummary {
    fn from(linked: Linked<Address, Letting>) -> Self {
        Self {
            id: linked.child.id,
            title: linked.child.title,
        }
    }
}

impl From<Address> for AddressView {
    fn from(address: Address) -> Self {
        Self {
            number: address.number,
            street: address.street,
            city: address.city,
            state: address.state,
            zip_code: address.zip_code,
            country_iso_code: address.country_iso_code,
        }
    }
}

impl From<Linked<Address, Letting>> for LettingDetail {
    fn from(Linked { child, parent }: Linked<Address, Letting>) -> Self {
        Self {
            id: child.id,
            title: child.title,
            address: parent.into(),
        }
    }
}

impl From<Linked<User, Profile>> for ProfileSummary {
    fn from(Linked { child, parent }: Linked<User, Profile>) -> Self {
        Self {
            username: parent.username,
            favorite_city: child.favorite_city,
        }
    }
}

impl From<Linked<User, Profile>> for ProfileDetail {
    fn from(Linked { child, parent }: Linked<User, Profile>) -> Self {
        Self {
            username: parent.username,
            email: parent.email,
            favorite_city: child.favorite_city,
        }
    }
}
