//! In-memory user store.

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use domain::User;

/// Process-lifetime store holding the authoritative, insertion-ordered
/// list of users.
///
/// Constructed once and shared as `Arc<Database>`. The list is handed to the
/// repository as-is through [`Database::read`] / [`Database::write`]; every
/// mutation holds the write lock for its whole find-and-modify step.
#[derive(Debug, Default)]
pub struct Database {
    users: RwLock<Vec<User>>,
}

impl Database {
    /// Create a store holding the given records, in order.
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Create a store holding only the seed user.
    pub fn seeded() -> Self {
        let seed = User::seed();
        tracing::info!(id = seed.id, name = %seed.name, "Seeded in-memory user store");
        Self::new(vec![seed])
    }

    /// Create a store with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shared access to the record list.
    pub async fn read(&self) -> RwLockReadGuard<'_, Vec<User>> {
        self.users.read().await
    }

    /// Exclusive access to the record list.
    pub async fn write(&self) -> RwLockWriteGuard<'_, Vec<User>> {
        self.users.write().await
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_store_holds_one_record() {
        let db = Database::seeded();

        assert_eq!(db.len().await, 1);
        assert_eq!(db.read().await[0].name, "John Doe");
    }

    #[tokio::test]
    async fn test_empty_store() {
        let db = Database::empty();

        assert!(db.is_empty().await);
    }

    #[tokio::test]
    async fn test_write_guard_mutates_in_place() {
        let db = Database::empty();
        db.write()
            .await
            .push(User::new(3, "Ann", "ann@example.com", "pw", "User", true));

        assert_eq!(db.len().await, 1);
        assert_eq!(db.read().await[0].id, 3);
    }
}
