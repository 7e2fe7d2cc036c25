use async_trait::async_trait;
use dashmap::DashMap;

use podium::data::{ANONYMOUS_UID, AppUser, IdentityUser};
use podium::errors::Report;

/// Identity-provider fields copied onto a new application user.
const PROFILE_FIELDS: [&str; 3] = ["displayName", "email", "photoURL"];

/// A directory of application users, keyed by the identity provider's uid.
///
/// The frontend never creates users explicitly: the first `getUser` call for
/// a provider identity registers it.
#[async_trait]
pub trait UserService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns the application user for `identity`, registering it on first
    /// sight.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity carries no uid, or carries the
    /// anonymous sentinel uid.
    async fn resolve(&self, identity: &IdentityUser) -> Result<AppUser, Self::Error>;

    /// Number of registered users.
    async fn count(&self) -> usize;
}

/// An in-memory implementation of [`UserService`], for local development.
pub struct UserDirectoryInMemory {
    users: DashMap<String, AppUser>,
}

impl UserDirectoryInMemory {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }
}

impl Default for UserDirectoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

fn register(uid: &str, identity: &IdentityUser) -> AppUser {
    PROFILE_FIELDS
        .into_iter()
        .filter_map(|key| identity.get(key).map(|value| (key, value.clone())))
        .fold(AppUser::new(uid), |user, (key, value)| {
            user.with_field(key, value)
        })
}

#[async_trait]
impl UserService for UserDirectoryInMemory {
    type Error = Report;

    async fn resolve(&self, identity: &IdentityUser) -> Result<AppUser, Self::Error> {
        let uid = identity
            .uid()
            .filter(|uid| !uid.is_empty())
            .ok_or_else(|| Report::msg("Identity has no uid"))?;

        if uid == ANONYMOUS_UID {
            return Err(Report::msg("The anonymous user cannot be resolved"));
        }

        let user = self
            .users
            .entry(uid.to_string())
            .or_insert_with(|| register(uid, identity))
            .value()
            .clone();
        Ok(user)
    }

    async fn count(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium::serde_json::json;

    #[tokio::test]
    async fn first_resolve_registers_the_identity() {
        let directory = UserDirectoryInMemory::new();
        let identity = IdentityUser::new(json!({
            "uid": "fb-1",
            "displayName": "Ada",
            "email": "ada@example.com",
            "stsTokenManager": { "accessToken": "secret" }
        }));

        let user = directory.resolve(&identity).await.unwrap();

        assert_eq!(user.uid, "fb-1");
        assert_eq!(user.display_name(), Some("Ada"));
        assert!(user.profile.get("stsTokenManager").is_none());
        assert_eq!(directory.count().await, 1);
        assert_eq!(directory.resolve(&identity).await.unwrap(), user);
    }

    #[tokio::test]
    async fn resolve_is_stable_across_calls() {
        let directory = UserDirectoryInMemory::new();
        let first = IdentityUser::new(json!({ "uid": "fb-2", "displayName": "Grace" }));
        let renamed = IdentityUser::new(json!({ "uid": "fb-2", "displayName": "G. Hopper" }));

        let a = directory.resolve(&first).await.unwrap();
        let b = directory.resolve(&renamed).await.unwrap();

        assert_eq!(a, b);
        assert_eq!(directory.count().await, 1);
    }

    #[tokio::test]
    async fn identities_without_uid_are_rejected() {
        let directory = UserDirectoryInMemory::new();

        assert!(directory.resolve(&IdentityUser::new(json!({}))).await.is_err());
        assert!(
            directory
                .resolve(&IdentityUser::new(json!({ "uid": "UNDEFINED" })))
                .await
                .is_err()
        );
        assert_eq!(directory.count().await, 0);
    }
}
