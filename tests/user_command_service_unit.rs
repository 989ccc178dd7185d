mod support;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use support::make_user;
use support::mocks::{DummyPasswordHasher, FixedClock, InMemoryUserRepo};
use userhub::application::commands::users::{
    ChangePasswordCommand, ChangeStatusCommand, CreateUserCommand, UpdateUserInfoCommand,
    UserCommandService,
};
use userhub::application::error::ApplicationError;
use userhub::domain::errors::DomainError;
use userhub::domain::user::UserStatus;

fn login_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn service(repo: Arc<InMemoryUserRepo>) -> UserCommandService {
    UserCommandService::new(repo, Arc::new(DummyPasswordHasher), Arc::new(FixedClock(login_time())))
}

fn create_command(email: &str) -> CreateUserCommand {
    CreateUserCommand {
        email: email.into(),
        name: "홍길동".into(),
        password: "secret-password".into(),
    }
}

#[tokio::test]
async fn create_user_persists_hashed_password() {
    let repo = Arc::new(InMemoryUserRepo::empty());
    let service = service(Arc::clone(&repo));

    let dto = service
        .create_user(create_command("hong@example.com"))
        .await
        .unwrap();

    assert_eq!(dto.email, "hong@example.com");
    assert_eq!(dto.name, "홍길동");
    assert_eq!(dto.status, UserStatus::Active);
    assert!(dto.last_login_at.is_none());

    let stored = repo.user(dto.id).unwrap();
    assert_eq!(stored.password_hash.as_str(), "hashed::secret-password");
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let repo = Arc::new(InMemoryUserRepo::empty());
    let service = service(Arc::clone(&repo));

    service
        .create_user(create_command("hong@example.com"))
        .await
        .unwrap();
    let err = service
        .create_user(create_command("hong@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Conflict(_)));
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn create_user_rejects_short_password() {
    let repo = Arc::new(InMemoryUserRepo::empty());
    let service = service(Arc::clone(&repo));

    let err = service
        .create_user(CreateUserCommand {
            email: "hong@example.com".into(),
            name: "홍길동".into(),
            password: "short".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)));
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn create_user_rejects_malformed_email() {
    let repo = Arc::new(InMemoryUserRepo::empty());
    let service = service(repo);

    let err = service
        .create_user(create_command("not-an-email"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn update_user_info_changes_name() {
    let mut users = HashMap::new();
    users.insert(1, make_user(1, "a@example.com", "사용자1", login_time()));
    let repo = Arc::new(InMemoryUserRepo::new(users));
    let service = service(Arc::clone(&repo));

    let dto = service
        .update_user_info(UpdateUserInfoCommand {
            user_id: 1,
            name: "새이름".into(),
        })
        .await
        .unwrap();

    assert_eq!(dto.name, "새이름");
    assert_eq!(repo.user(1).unwrap().name.as_str(), "새이름");
}

#[tokio::test]
async fn update_missing_user_is_not_found() {
    let repo = Arc::new(InMemoryUserRepo::empty());
    let service = service(repo);

    let err = service
        .update_user_info(UpdateUserInfoCommand {
            user_id: 42,
            name: "새이름".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn change_password_stores_new_hash() {
    let mut users = HashMap::new();
    users.insert(1, make_user(1, "a@example.com", "사용자1", login_time()));
    let repo = Arc::new(InMemoryUserRepo::new(users));
    let service = service(Arc::clone(&repo));

    service
        .change_password(ChangePasswordCommand {
            user_id: 1,
            new_password: "next-password".into(),
        })
        .await
        .unwrap();

    assert_eq!(
        repo.user(1).unwrap().password_hash.as_str(),
        "hashed::next-password"
    );
}

#[tokio::test]
async fn change_status_allows_any_transition() {
    let mut withdrawn = make_user(1, "a@example.com", "사용자1", login_time());
    withdrawn.status = UserStatus::Withdrawn;
    let mut users = HashMap::new();
    users.insert(1, withdrawn);
    let repo = Arc::new(InMemoryUserRepo::new(users));
    let service = service(repo);

    let dto = service
        .change_status(ChangeStatusCommand {
            user_id: 1,
            status: UserStatus::Active,
        })
        .await
        .unwrap();

    assert_eq!(dto.status, UserStatus::Active);
}

#[tokio::test]
async fn record_login_stamps_clock_time() {
    let mut users = HashMap::new();
    users.insert(1, make_user(1, "a@example.com", "사용자1", login_time()));
    let repo = Arc::new(InMemoryUserRepo::new(users));
    let service = service(Arc::clone(&repo));

    service.record_login(1).await.unwrap();

    assert_eq!(repo.user(1).unwrap().last_login_at, Some(login_time()));
}

#[tokio::test]
async fn delete_user_removes_the_record() {
    let mut users = HashMap::new();
    users.insert(1, make_user(1, "a@example.com", "사용자1", login_time()));
    let repo = Arc::new(InMemoryUserRepo::new(users));
    let service = service(Arc::clone(&repo));

    service.delete_user(1).await.unwrap();
    assert!(repo.user(1).is_none());

    let err = service.delete_user(1).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn delete_by_email_resolves_the_target_first() {
    let mut users = HashMap::new();
    users.insert(3, make_user(3, "b@example.com", "사용자2", login_time()));
    let repo = Arc::new(InMemoryUserRepo::new(users));
    let service = service(Arc::clone(&repo));

    service.delete_user_by_email("b@example.com").await.unwrap();
    assert_eq!(repo.len(), 0);

    let err = service
        .delete_user_by_email("b@example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
