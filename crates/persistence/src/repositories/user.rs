//! Member account repository.

use domain::models::{NewUser, User};
use shared::password::hash_password;
use tracing::debug;
use validator::Validate;

use crate::error::StoreError;
use crate::metrics::OperationTimer;
use crate::store::MemoryStore;

/// Repository for member accounts.
#[derive(Clone)]
pub struct UserRepository {
    store: MemoryStore,
}

impl UserRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    pub async fn find_by_id(&self, id: i64) -> Option<User> {
        let timer = OperationTimer::new("find_user_by_id");
        let user = self.store.read().await.users.get(id);
        timer.record();
        user
    }

    /// Creates a member account.
    ///
    /// The password is hashed with Argon2id on the blocking pool before the
    /// store lock is taken. The username check and the insert share one
    /// write guard, so two concurrent creates cannot both claim a name.
    pub async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        new_user.validate()?;

        let password = new_user.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| StoreError::Task(e.to_string()))??;

        let timer = OperationTimer::new("create_user");
        let mut tables = self.store.write().await;

        if tables
            .users
            .find(|u| u.username == new_user.username)
            .is_some()
        {
            timer.record();
            return Err(StoreError::UsernameTaken(new_user.username));
        }

        let user = tables.users.insert_with(|id| User {
            id,
            username: new_user.username,
            password_hash,
            name: new_user.name,
            email: new_user.email,
        });
        drop(tables);
        timer.record();

        debug!(user_id = user.id, username = %user.username, "Created user");
        Ok(user)
    }
}
