//! Integration tests for sessions persisted to disk.
//!
//! A session written by one storefront must be picked up by the next one
//! opened over the same file, and a half-written session must be discarded.

use std::sync::Arc;

use serde_json::json;
use storefront_client::auth::{AUTH_TOKEN_KEY, CURRENT_USER_KEY};
use storefront_client::storage::{FileStorage, Storage};
use storefront_client::ui::{AuthBanner, NoticeLog, RecordedView};
use storefront_client::{ApiBaseUrl, Storefront, StorefrontConfig, UserId};
use tempfile::TempDir;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(url: &str) -> StorefrontConfig {
    StorefrontConfig::builder()
        .base_url(ApiBaseUrl::new(url).unwrap())
        .build()
        .unwrap()
}

fn open_store(url: &str, file: &std::path::Path, view: &RecordedView) -> Storefront {
    Storefront::builder(config(url))
        .storage(FileStorage::open(file).unwrap())
        .notifier(Arc::new(NoticeLog::new()))
        .view(Arc::new(view.clone()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_session_survives_reopening_file_storage() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access_token": "T1", "user_id": 7})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("session.json");

    let view = RecordedView::new();
    let mut first = open_store(&server.uri(), &file, &view);
    assert_ok!(first.login("a@b.com", "x").await);
    drop(first);

    let on_disk = FileStorage::open(&file).unwrap();
    assert_eq!(on_disk.get_item(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("T1"));

    let view = RecordedView::new();
    let mut second = open_store(&server.uri(), &file, &view);
    assert!(assert_ok!(second.restore()));

    let session = second.session().unwrap();
    assert_eq!(session.user.email, "a@b.com");
    assert_eq!(session.user.id, UserId(7));
    assert_eq!(session.token.as_str(), "T1");
    assert_eq!(
        view.banner(),
        Some(AuthBanner::Welcome {
            email: "a@b.com".to_string()
        })
    );
}

#[test]
fn test_orphan_token_on_disk_is_removed() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("session.json");
    FileStorage::open(&file)
        .unwrap()
        .set_item(AUTH_TOKEN_KEY, "T1")
        .unwrap();

    let view = RecordedView::new();
    let mut store = open_store("http://127.0.0.1:1", &file, &view);
    assert!(!store.restore().unwrap());
    assert_eq!(view.banner(), Some(AuthBanner::LoggedOut));

    let reopened = FileStorage::open(&file).unwrap();
    assert!(reopened.get_item(AUTH_TOKEN_KEY).unwrap().is_none());
    assert!(reopened.get_item(CURRENT_USER_KEY).unwrap().is_none());
}

#[test]
fn test_logout_removes_both_entries_from_disk() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("nested").join("session.json");
    FileStorage::open(&file)
        .unwrap()
        .set_items(&[
            (CURRENT_USER_KEY, r#"{"email":"a@b.com","id":7}"#),
            (AUTH_TOKEN_KEY, "T1"),
        ])
        .unwrap();

    let view = RecordedView::new();
    let mut store = open_store("http://127.0.0.1:1", &file, &view);
    assert!(store.restore().unwrap());
    store.logout().unwrap();

    let reopened = FileStorage::open(&file).unwrap();
    assert!(reopened.get_item(CURRENT_USER_KEY).unwrap().is_none());
    assert!(reopened.get_item(AUTH_TOKEN_KEY).unwrap().is_none());
}
