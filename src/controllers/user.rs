use std::sync::Arc;

use crate::core::error::Error;
use crate::core::store::Store;
use crate::types::User;
use crate::utils::credentials::CredentialScheme;

/// The registered customers. Usernames are unique; entries are never
/// updated or removed.
#[derive(Clone, Debug)]
pub(crate) struct UserController {
    store: Arc<Store>,
    scheme: Arc<dyn CredentialScheme>,
}

impl UserController {
    pub(crate) fn new(store: Arc<Store>, scheme: Arc<dyn CredentialScheme>) -> Self {
        Self { store, scheme }
    }

    pub(crate) async fn register(&self, username: &str, password: &str) -> Result<(), Error> {
        if username.is_empty() || password.is_empty() {
            return Err(Error::MissingFields);
        }

        // Skip hashing for names already taken; the check is repeated
        // under the lock below.
        if self.is_registered(username).await {
            return Err(Error::UserAlreadyExists);
        }

        let password = self.scheme.prepare(password)?;

        let mut users = self.store.users.lock().await;

        if users.iter().any(|user| user.username == username) {
            return Err(Error::UserAlreadyExists);
        }

        users.push(User {
            username: username.into(),
            password,
        });

        tracing::info!("registered user {}", username);

        Ok(())
    }

    pub(crate) async fn is_registered(&self, username: &str) -> bool {
        self.store
            .users
            .lock()
            .await
            .iter()
            .any(|user| user.username == username)
    }

    pub(crate) async fn authenticate(&self, username: &str, password: &str) -> Result<bool, Error> {
        let stored = self
            .store
            .users
            .lock()
            .await
            .iter()
            .find(|user| user.username == username)
            .map(|user| user.password.clone());

        match stored {
            Some(stored) => self.scheme.credentials_match(&stored, password),
            None => {
                tracing::debug!("login for unknown user {}", username);
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::credentials::{Bcrypt, Plaintext};

    fn controller() -> UserController {
        UserController::new(Arc::new(Store::default()), Arc::new(Plaintext))
    }

    #[tokio::test]
    async fn test_register_then_authenticate() {
        let users = controller();

        users.register("alice", "pw1").await.unwrap();

        assert!(users.is_registered("alice").await);
        assert!(users.authenticate("alice", "pw1").await.unwrap());
        assert!(!users.authenticate("alice", "pw2").await.unwrap());
        assert!(!users.authenticate("bob", "pw1").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let users = controller();

        users.register("alice", "pw1").await.unwrap();

        assert!(matches!(
            users.register("alice", "other").await,
            Err(Error::UserAlreadyExists)
        ));
        // The first registration still holds.
        assert!(users.authenticate("alice", "pw1").await.unwrap());
        assert!(!users.authenticate("alice", "other").await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let users = controller();

        assert!(matches!(users.register("", "pw").await, Err(Error::MissingFields)));
        assert!(matches!(users.register("alice", "").await, Err(Error::MissingFields)));
        assert!(!users.is_registered("alice").await);
    }

    #[tokio::test]
    async fn test_bcrypt_scheme_never_stores_plaintext() {
        let store = Arc::new(Store::default());
        let users = UserController::new(store.clone(), Arc::new(Bcrypt::new(4)));

        users.register("alice", "pw1").await.unwrap();

        assert_ne!(store.users.lock().await[0].password, "pw1");
        assert!(users.authenticate("alice", "pw1").await.unwrap());
    }

    #[tokio::test]
    async fn test_directory_unlocked_after_authenticate() {
        let store = Arc::new(Store::default());
        let users = UserController::new(store.clone(), Arc::new(Bcrypt::new(4)));

        users.register("alice", "pw1").await.unwrap();
        assert!(users.authenticate("alice", "pw1").await.unwrap());
        assert!(!users.authenticate("alice", "pw2").await.unwrap());

        assert!(store.users.try_lock().is_ok());
    }
}
