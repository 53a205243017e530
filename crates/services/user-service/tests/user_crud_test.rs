//! CRUD behaviour of the repository and service against a real store.

use std::sync::Arc;

use chrono::{Duration, Utc};
use domain::User;
use user_service_lib::build_user_service;
use user_service_lib::infra::Database;
use user_service_lib::repository::{UserRepository, UserStore};

fn user(id: i32, name: &str) -> User {
    User::new(id, name, format!("{}@example.com", id), "password", "User", true)
}

fn seeded_repo() -> (Arc<Database>, UserStore) {
    let db = Arc::new(Database::seeded());
    let repo = UserStore::new(db.clone());
    (db, repo)
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let (_, repo) = seeded_repo();
    repo.create(user(5, "Five")).await.unwrap();
    repo.create(user(3, "Three")).await.unwrap();

    let ids: Vec<i32> = repo.list().await.unwrap().iter().map(|u| u.id).collect();

    assert_eq!(ids, vec![1, 5, 3]);
}

#[tokio::test]
async fn test_list_is_a_snapshot() {
    let (db, repo) = seeded_repo();
    let mut snapshot = repo.list().await.unwrap();
    snapshot.clear();

    assert_eq!(db.len().await, 1);
}

#[tokio::test]
async fn test_count_tracks_store_size() {
    let (_, repo) = seeded_repo();
    assert_eq!(repo.count().await.unwrap(), 1);

    repo.create(user(2, "Jane")).await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 2);

    repo.delete(1).await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_find_by_id_returns_matching_record() {
    let (_, repo) = seeded_repo();
    repo.create(user(2, "Jane")).await.unwrap();

    for id in [1, 2] {
        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.id, id);
    }
}

#[tokio::test]
async fn test_absent_id_does_not_mutate_store() {
    let (db, repo) = seeded_repo();
    let before = repo.list().await.unwrap();

    assert!(repo.find_by_id(404).await.unwrap().is_none());
    assert!(!repo.delete(404).await.unwrap());
    assert!(repo.update(user(404, "Ghost")).await.unwrap().is_none());

    assert_eq!(db.len().await, 1);
    assert_eq!(repo.list().await.unwrap(), before);
}

#[tokio::test]
async fn test_create_appends_and_is_retrievable() {
    let (db, repo) = seeded_repo();
    let before = db.len().await;

    let created = repo.create(user(2, "Jane")).await.unwrap();

    assert_eq!(created.name, "Jane");
    assert_eq!(db.len().await, before + 1);
    assert_eq!(repo.find_by_id(2).await.unwrap().unwrap().name, "Jane");
}

#[tokio::test]
async fn test_duplicate_ids_resolve_to_first_match() {
    let (db, repo) = seeded_repo();
    repo.create(user(1, "Shadow")).await.unwrap();

    assert_eq!(db.len().await, 2);
    assert_eq!(repo.find_by_id(1).await.unwrap().unwrap().name, "John Doe");

    assert!(repo.delete(1).await.unwrap());
    assert_eq!(repo.find_by_id(1).await.unwrap().unwrap().name, "Shadow");
}

#[tokio::test]
async fn test_update_overwrites_fields_and_keeps_identity() {
    let (_, repo) = seeded_repo();
    let original = repo.find_by_id(1).await.unwrap().unwrap();

    let changes = User {
        id: 1,
        name: "Johnny".to_string(),
        email: "johnny@example.com".to_string(),
        password: "changed".to_string(),
        role: "Guest".to_string(),
        is_active: false,
        created_at: Utc::now() + Duration::days(30),
        updated_at: Utc::now() - Duration::days(30),
    };
    let updated = repo.update(changes).await.unwrap().unwrap();

    assert_eq!(updated.id, 1);
    assert_eq!(updated.name, "Johnny");
    assert_eq!(updated.email, "johnny@example.com");
    assert_eq!(updated.password, "changed");
    assert_eq!(updated.role, "Guest");
    assert!(!updated.is_active);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at >= original.updated_at);

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_delete_removes_record() {
    let (db, repo) = seeded_repo();
    repo.create(user(2, "Jane")).await.unwrap();

    assert!(repo.delete(2).await.unwrap());

    assert_eq!(db.len().await, 1);
    assert!(repo.find_by_id(2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_concurrent_creates_are_all_kept() {
    let db = Arc::new(Database::empty());
    let repo = Arc::new(UserStore::new(db.clone()));

    let handles: Vec<_> = (0..32)
        .map(|id| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.create(user(id, "Worker")).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(db.len().await, 32);
}

#[tokio::test]
async fn test_seed_scenario_through_service() {
    let service = build_user_service(Arc::new(Database::seeded()));

    let users = service.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "John Doe");

    service.create_user(user(2, "Jane")).await.unwrap();
    assert_eq!(service.list_users().await.unwrap().len(), 2);

    service.update_user(user(2, "Jane Doe")).await.unwrap().unwrap();
    assert_eq!(service.get_user(2).await.unwrap().unwrap().name, "Jane Doe");

    assert!(service.delete_user(1).await.unwrap());
    assert!(service.get_user(1).await.unwrap().is_none());

    let remaining = service.list_users().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 2);
}
