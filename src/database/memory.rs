use super::UserStore;
use crate::models::{UpdateOutcome, User, UserChanges};
use crate::utils::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Store em memória com a mesma semântica de filtro do MongoDB
/// (primeiro documento em ordem de inserção, delete-many).
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
    failing: bool,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store cujas operações sempre falham com `DatabaseError`
    pub fn failing() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            failing: true,
        }
    }

    pub async fn count(&self, id: &str) -> usize {
        self.users.read().await.iter().filter(|u| u.id == id).count()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing {
            return Err(AppError::DatabaseError("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert_one(&self, user: &User) -> Result<(), AppError> {
        self.check()?;
        self.users.write().await.push(user.clone());
        Ok(())
    }

    async fn find_one(&self, id: &str) -> Result<Option<User>, AppError> {
        self.check()?;
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn update_one(&self, id: &str, changes: &UserChanges) -> Result<UpdateOutcome, AppError> {
        self.check()?;
        let mut users = self.users.write().await;
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(UpdateOutcome::default());
        };

        let modified = user.name != changes.name || user.email != changes.email;
        user.name = changes.name.clone();
        user.email = changes.email.clone();

        Ok(UpdateOutcome {
            matched: 1,
            modified: u64::from(modified),
        })
    }

    async fn delete_many(&self, id: &str) -> Result<u64, AppError> {
        self.check()?;
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok((before - users.len()) as u64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.into(),
            name: name.into(),
            email: format!("{}@x.com", name.to_lowercase()),
        }
    }

    #[tokio::test]
    async fn test_find_returns_first_match() {
        let store = InMemoryUserStore::new();
        store.insert_one(&user("u1", "Alice")).await.unwrap();
        store.insert_one(&user("u1", "Carol")).await.unwrap();

        let found = store.find_one("u1").await.unwrap().unwrap();
        assert_eq!(found.name, "Alice");
        assert_eq!(store.count("u1").await, 2);
    }

    #[tokio::test]
    async fn test_update_outcome() {
        let store = InMemoryUserStore::new();
        store.insert_one(&user("u1", "Alice")).await.unwrap();

        let changes = UserChanges {
            name: "Alice".into(),
            email: "alice@x.com".into(),
        };
        let outcome = store.update_one("u1", &changes).await.unwrap();
        assert_eq!(outcome, UpdateOutcome { matched: 1, modified: 0 });

        let missing = store.update_one("nope", &changes).await.unwrap();
        assert_eq!(missing, UpdateOutcome::default());
    }

    #[tokio::test]
    async fn test_delete_removes_all_matches() {
        let store = InMemoryUserStore::new();
        store.insert_one(&user("u1", "Alice")).await.unwrap();
        store.insert_one(&user("u1", "Carol")).await.unwrap();
        store.insert_one(&user("u2", "Bob")).await.unwrap();

        assert_eq!(store.delete_many("u1").await.unwrap(), 2);
        assert_eq!(store.delete_many("u1").await.unwrap(), 0);
        assert!(store.find_one("u2").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_failing_store() {
        let store = InMemoryUserStore::failing();
        assert!(matches!(
            store.find_one("u1").await,
            Err(AppError::DatabaseError(_))
        ));
        assert!(store.ping().await.is_err());
    }
}
