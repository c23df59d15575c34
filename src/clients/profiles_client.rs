use crate::model::{Profile, ProfileCreate, ProfileId, User, UserCreate, UserId};
use crate::profiles_actor::ProfilesError;
use async_trait::async_trait;
use relation_framework::{entity_name, FrameworkError, Linked, RelationClient, RelationStore};
use tracing::{debug, instrument};

/// Client for interacting with the profiles actor.
#[derive(Clone, Debug)]
pub struct ProfilesClient {
    inner: RelationClient<User, Profile>,
}

impl ProfilesClient {
    pub fn new(inner: RelationClient<User, Profile>) -> Self {
        Self { inner }
    }

    /// Registers a user. Usernames are unique and compared case-sensitively.
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, ProfilesError> {
        debug!("Sending request");
        Ok(self.inner.create_parent(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn create_profile(&self, params: ProfileCreate) -> Result<ProfileId, ProfilesError> {
        debug!("Sending request");
        Ok(self.inner.create_child(params).await?)
    }

    pub async fn user(&self, id: UserId) -> Result<User, ProfilesError> {
        self.get_parent(id)
            .await?
            .ok_or_else(|| FrameworkError::not_found(entity_name::<User>(), id).into())
    }

    pub async fn profile(&self, id: ProfileId) -> Result<Linked<User, Profile>, ProfilesError> {
        self.get_child(id)
            .await?
            .ok_or_else(|| FrameworkError::not_found(entity_name::<Profile>(), id).into())
    }

    /// The profile of the user called exactly `username`.
    ///
    /// An unknown username and a user without a profile both give `NotFound`.
    #[instrument(skip(self))]
    pub async fn profile_by_username(
        &self,
        username: &str,
    ) -> Result<Linked<User, Profile>, ProfilesError> {
        debug!("Sending request");
        self.inner
            .find_by_key(username)
            .await?
            .ok_or_else(|| FrameworkError::not_found(entity_name::<Profile>(), username).into())
    }

    pub async fn users(&self) -> Result<Vec<User>, ProfilesError> {
        self.list_parents().await
    }

    /// Profiles in creation order, each with its user.
    pub async fn profiles(&self) -> Result<Vec<Linked<User, Profile>>, ProfilesError> {
        self.list_children().await
    }

    /// Removes a user and, with it, its profile.
    pub async fn delete_user(&self, id: UserId) -> Result<Option<ProfileId>, ProfilesError> {
        self.delete_parent(id).await
    }

    pub async fn delete_profile(&self, id: ProfileId) -> Result<(), ProfilesError> {
        self.delete_child(id).await
    }
}

#[async_trait]
impl RelationStore<User, Profile> for ProfilesClient {
    type Error = ProfilesError;

    fn inner(&self) -> &RelationClient<User, Profile> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
