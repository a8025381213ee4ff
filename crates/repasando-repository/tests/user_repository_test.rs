//! Integration tests for SqlUserRepository.

mod common;

use common::{new_user, TestDatabase};
use repasando_core::{PageRequest, RepasandoError, UserId};
use repasando_repository::UserRepository;

#[tokio::test]
async fn test_find_all_is_empty_on_fresh_store() {
    let db = TestDatabase::new().await;
    let repo = db.repository();

    assert!(repo.find_all().await.unwrap().is_empty());
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_save_and_find_by_id() {
    let db = TestDatabase::new().await;
    let repo = db.repository();

    let saved = repo.save(&new_user("ana")).await.unwrap();
    let id = saved.id.expect("id assigned on insert");

    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found, saved);
    assert_eq!(found.user_name, "user_ana");
    assert_eq!(found.password, "secret123");
}

#[tokio::test]
async fn test_find_by_id_missing_returns_none() {
    let db = TestDatabase::new().await;
    let repo = db.repository();

    assert!(repo.find_by_id(UserId::new(42)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_ids_are_distinct_and_ordered() {
    let db = TestDatabase::new().await;
    let repo = db.repository();

    let first = repo.save(&new_user("a")).await.unwrap();
    let second = repo.save(&new_user("b")).await.unwrap();
    assert_ne!(first.id, second.id);

    let all = repo.find_all().await.unwrap();
    assert_eq!(all, vec![first, second]);
}

#[tokio::test]
async fn test_duplicate_email_is_unique_violation() {
    let db = TestDatabase::new().await;
    let repo = db.repository();

    repo.save(&new_user("ana")).await.unwrap();

    let mut clash = new_user("other");
    clash.email = "ana@example.com".to_string();

    let err = repo.save(&clash).await.unwrap_err();
    assert!(
        matches!(err, RepasandoError::UniqueViolation(_)),
        "unexpected error: {err:?}"
    );
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_duplicate_username_is_unique_violation() {
    let db = TestDatabase::new().await;
    let repo = db.repository();

    repo.save(&new_user("ana")).await.unwrap();

    let mut clash = new_user("other");
    clash.user_name = "user_ana".to_string();

    assert!(matches!(
        repo.save(&clash).await,
        Err(RepasandoError::UniqueViolation(_))
    ));
}

#[tokio::test]
async fn test_update_overwrites_row() {
    let db = TestDatabase::new().await;
    let repo = db.repository();

    let mut user = repo.save(&new_user("ana")).await.unwrap();
    user.name = "Ana Maria".to_string();
    user.email = "anamaria@example.com".to_string();

    let updated = repo.save(&user).await.unwrap();
    assert_eq!(updated, user);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_into_taken_email_is_unique_violation() {
    let db = TestDatabase::new().await;
    let repo = db.repository();

    repo.save(&new_user("ana")).await.unwrap();
    let mut bob = repo.save(&new_user("bob")).await.unwrap();
    bob.email = "ana@example.com".to_string();

    assert!(matches!(
        repo.save(&bob).await,
        Err(RepasandoError::UniqueViolation(_))
    ));

    let stored = repo.find_by_id(bob.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(stored.email, "bob@example.com");
}

#[tokio::test]
async fn test_delete_by_id() {
    let db = TestDatabase::new().await;
    let repo = db.repository();

    let saved = repo.save(&new_user("ana")).await.unwrap();
    let id = saved.id.unwrap();

    repo.delete_by_id(id).await.unwrap();
    assert!(repo.find_by_id(id).await.unwrap().is_none());

    // Second delete of the same id is a no-op.
    repo.delete_by_id(id).await.unwrap();
}

#[tokio::test]
async fn test_find_page_slices_and_reports_metadata() {
    let db = TestDatabase::new().await;
    let repo = db.repository();

    for tag in ["a", "b", "c", "d", "e"] {
        repo.save(&new_user(tag)).await.unwrap();
    }

    let page = repo.find_page(PageRequest::bounded(1, 2, 100)).await.unwrap();
    assert_eq!(page.content.len(), 2);
    assert_eq!(page.content[0].user_name, "user_c");
    assert_eq!(page.content[1].user_name, "user_d");
    assert_eq!(page.info.total_elements, 5);
    assert_eq!(page.info.total_pages, 3);
    assert!(!page.info.first);
    assert!(!page.info.last);

    let last = repo.find_page(PageRequest::bounded(2, 2, 100)).await.unwrap();
    assert_eq!(last.content.len(), 1);
    assert!(last.info.last);

    let beyond = repo.find_page(PageRequest::bounded(9, 2, 100)).await.unwrap();
    assert!(beyond.is_empty());
    assert_eq!(beyond.info.total_elements, 5);
}

#[tokio::test]
async fn test_find_page_with_unaddressable_offset_is_empty() {
    let db = TestDatabase::new().await;
    let repo = db.repository();
    repo.save(&new_user("ana")).await.unwrap();

    let page = repo
        .find_page(PageRequest::bounded(i64::MAX as usize, 10, 100))
        .await
        .unwrap();

    assert!(page.is_empty());
    assert_eq!(page.info.total_elements, 1);
    assert!(page.info.last);
}

#[tokio::test]
async fn test_inserts_get_increasing_ids() {
    let db = TestDatabase::new().await;
    let repo = db.repository();

    let first = repo.save(&new_user("ana")).await.unwrap().id.unwrap();
    let second = repo.save(&new_user("bob")).await.unwrap().id.unwrap();

    assert!(second > first);
    assert_eq!(
        repo.find_by_id(second).await.unwrap().unwrap().user_name,
        "user_bob"
    );
}
