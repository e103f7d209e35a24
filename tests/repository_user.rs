mod common;

use sqlx::PgPool;
use std::sync::Arc;
use storefront::AppError;
use storefront::domain::entities::{NewUser, UserPatch};
use storefront::domain::listing::{ListRequest, USER_LISTING};
use storefront::domain::repositories::UserRepository;
use storefront::infrastructure::persistence::PgUserRepository;

fn repo(pool: PgPool) -> PgUserRepository {
    PgUserRepository::new(Arc::new(pool))
}

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$test-hash".to_string(),
    }
}

// ─── CREATE / LOOKUP ─────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_then_find_by_email(pool: PgPool) {
    let repo = repo(pool);

    let created = repo.create(new_user("Ada", "ada@example.com")).await.unwrap();

    let found = repo
        .find_by_email("ada@example.com")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Ada");
    assert_eq!(found.password_hash, "$argon2id$test-hash");
}

#[sqlx::test]
async fn test_find_unknown_email_is_none(pool: PgPool) {
    let repo = repo(pool);

    assert!(
        repo.find_by_email("nobody@example.com")
            .await
            .unwrap()
            .is_none()
    );
}

// ─── UNIQUENESS ──────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_duplicate_email_maps_to_email_taken(pool: PgPool) {
    let repo = repo(pool);

    repo.create(new_user("Ada", "ada@example.com")).await.unwrap();

    let err = repo
        .create(new_user("Other Ada", "ada@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::EmailTaken { .. }));
}

#[sqlx::test]
async fn test_update_email_onto_taken_maps_to_email_taken(pool: PgPool) {
    let repo = repo(pool);

    let ada = repo.create(new_user("Ada", "ada@example.com")).await.unwrap();
    repo.create(new_user("Zed", "zed@example.com")).await.unwrap();

    let patch = UserPatch {
        email: Some("zed@example.com".to_string()),
        ..Default::default()
    };
    let err = repo.update(ada.id, patch).await.unwrap_err();

    assert!(matches!(err, AppError::EmailTaken { .. }));
}

// ─── PATCH ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_only_patched_fields_change(pool: PgPool) {
    let repo = repo(pool);

    let created = repo.create(new_user("Ada", "ada@example.com")).await.unwrap();

    let patch = UserPatch {
        name: Some("Ada Lovelace".to_string()),
        ..Default::default()
    };
    let updated = repo.update(created.id, patch).await.unwrap().unwrap();

    assert_eq!(updated.name, "Ada Lovelace");
    assert_eq!(updated.email, "ada@example.com");
}

#[sqlx::test]
async fn test_update_unknown_user_is_none(pool: PgPool) {
    let repo = repo(pool);

    let patch = UserPatch {
        name: Some("Ghost".to_string()),
        ..Default::default()
    };
    assert!(repo.update(999, patch).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_set_password_hash(pool: PgPool) {
    let repo = repo(pool);

    let created = repo.create(new_user("Ada", "ada@example.com")).await.unwrap();

    assert!(
        repo.set_password_hash(created.id, "$argon2id$new-hash")
            .await
            .unwrap()
    );

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.password_hash, "$argon2id$new-hash");

    assert!(!repo.set_password_hash(999, "$argon2id$x").await.unwrap());
}

// ─── LISTING ─────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_default_sort_is_email(pool: PgPool) {
    let repo = repo(pool);

    repo.create(new_user("Zed", "zed@example.com")).await.unwrap();
    repo.create(new_user("Ada", "ada@example.com")).await.unwrap();
    repo.create(new_user("Mia", "mia@example.com")).await.unwrap();

    let query = USER_LISTING
        .parse(&ListRequest::default())
        .unwrap()
        .paginate(3)
        .unwrap();

    let users = repo.list(&query).await.unwrap();
    let emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();

    assert_eq!(
        emails,
        vec!["ada@example.com", "mia@example.com", "zed@example.com"]
    );
}

#[sqlx::test]
async fn test_count_with_name_filter(pool: PgPool) {
    let repo = repo(pool);

    repo.create(new_user("Ada", "ada@example.com")).await.unwrap();
    repo.create(new_user("Adam", "adam@example.com")).await.unwrap();
    repo.create(new_user("Zed", "zed@example.com")).await.unwrap();

    let parsed = USER_LISTING
        .parse(&ListRequest {
            search: Some("name:ada".to_string()),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(repo.count(parsed.filter().cloned()).await.unwrap(), 2);
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_user(pool: PgPool) {
    let repo = repo(pool);

    let created = repo.create(new_user("Ada", "ada@example.com")).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}
