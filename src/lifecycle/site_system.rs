use crate::clients::{LettingsClient, ProfilesClient};
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Failure while stopping the actors.
#[derive(Debug, Error)]
#[error("Actor task failed: {0}")]
pub struct ShutdownError(#[from] JoinError);

/// Owns the running relation actors of the site.
///
/// - **Lettings group**: addresses and their lettings
/// - **Profiles group**: users and their profiles
///
/// The two groups share nothing, so they run as independent tasks.
///
/// ```ignore
/// let system = SiteSystem::new(32);
/// let address = system.lettings_client.create_address(params).await?;
/// system.shutdown().await?;
/// ```
pub struct SiteSystem {
    pub lettings_client: LettingsClient,
    pub profiles_client: ProfilesClient,
    handles: Vec<JoinHandle<()>>,
}

impl SiteSystem {
    /// Spawns both actors; `buffer` is the request queue depth of each.
    pub fn new(buffer: usize) -> Self {
        let (lettings_actor, lettings_client) = crate::lettings_actor::new(buffer);
        let (profiles_actor, profiles_client) = crate::profiles_actor::new(buffer);

        let lettings_handle = tokio::spawn(lettings_actor.run());
        let profiles_handle = tokio::spawn(profiles_actor.run());

        Self {
            lettings_client,
            profiles_client,
            handles: vec![lettings_handle, profiles_handle],
        }
    }

    /// Drops the clients held here and waits for every actor to exit.
    ///
    /// A failed actor does not cut the wait short; the first failure is returned once
    /// all of them have finished.
    ///
    /// Clones handed out elsewhere (e.g. to the router) must be dropped first or the
    /// actors keep running.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");
        drop(self.lettings_client);
        drop(self.profiles_client);

        let mut first_failure = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                first_failure.get_or_insert(e);
            }
        }

        match first_failure {
            Some(e) => Err(e.into()),
            None => {
                info!("System shutdown complete.");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserCreate;

    #[tokio::test]
    async fn test_shutdown_after_use() {
        let system = SiteSystem::new(4);
        system
            .profiles_client
            .create_user(UserCreate::new("alice"))
            .await
            .unwrap();
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_waits_for_every_actor_after_a_failure() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        let (lettings_actor, lettings_client) = crate::lettings_actor::new(4);
        let (profiles_actor, profiles_client) = crate::profiles_actor::new(4);
        drop(lettings_actor);
        drop(profiles_actor);

        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();
        let failing: JoinHandle<()> = tokio::spawn(async { panic!("actor crashed") });
        let slow = tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
        });

        let system = SiteSystem {
            lettings_client,
            profiles_client,
            handles: vec![failing, slow],
        };
        let err = system.shutdown().await.unwrap_err();

        assert!(err.0.is_panic());
        assert!(finished.load(Ordering::SeqCst));
    }
}
