//! Integration tests for the CLI commands.

use std::{fs, path::Path};

use pressdesk_cli::{
    cli::CredentialArgs,
    commands::{self, articles, articles::ArticleEdits, auth, categories, Session},
};
use pressdesk_shared::Role;
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    matchers::{body_partial_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn session(server: &MockServer, token_file: &Path) -> Session {
    commands::connect(&format!("{}/api", server.uri()), token_file)
}

fn credentials(username: &str, password: &str) -> CredentialArgs {
    CredentialArgs {
        username: username.to_string(),
        password: password.to_string(),
    }
}

fn long_content() -> String {
    format!("<p>{}</p>", "lorem ipsum ".repeat(8))
}

#[tokio::test]
async fn login_persists_token_for_the_next_run() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("create temp dir");
    let token_file = dir.path().join("token");

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_partial_json(json!({ "username": "ada" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok-1" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .and(header("Authorization", "Bearer tok-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "username": "ada", "role": "Admin" })),
        )
        .mount(&server)
        .await;

    let first = session(&server, &token_file);
    let principal = auth::login(&first, &credentials(" ada ", "secret"))
        .await
        .expect("login");
    assert_eq!(principal.role, Role::Admin);
    assert_eq!(fs::read_to_string(&token_file).expect("token file"), "tok-1");

    let second = session(&server, &token_file);
    let principal = auth::whoami(&second).await.expect("whoami");
    assert_eq!(principal.username, "ada");
}

#[tokio::test]
async fn rejected_token_is_removed() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("create temp dir");
    let token_file = dir.path().join("token");
    fs::write(&token_file, "stale").expect("seed token");

    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "expired" })))
        .mount(&server)
        .await;

    let session = session(&server, &token_file);
    assert!(auth::whoami(&session).await.is_err());
    assert!(!token_file.exists());
}

#[tokio::test]
async fn blank_credentials_never_reach_the_server() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("create temp dir");
    let session = session(&server, &dir.path().join("token"));

    let err = auth::register(&session, &credentials("  ", ""), Role::User)
        .await
        .expect_err("blank credentials");
    assert!(err.to_string().starts_with("invalid input"));
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn article_list_sends_page_limit_and_filters() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("create temp dir");
    let session = session(&server, &dir.path().join("token"));

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .and(query_param("title", "rust async"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "a1",
                "title": "Rust async in practice",
                "content": "<p>body</p>",
                "categoryId": "c1"
            }],
            "page": 2,
            "limit": 10,
            "total": 11
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = articles::list(&session.client(), 2, 10, Some("rust async".to_string()), None)
        .await
        .expect("list articles");
    assert_eq!(page.total, 11);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].category_name(), "Uncategorized");
}

#[tokio::test]
async fn create_uploads_cover_before_saving() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("create temp dir");
    let session = session(&server, &dir.path().join("token"));
    let cover = dir.path().join("cover.png");
    fs::write(&cover, [0x89, b'P', b'N', b'G']).expect("write cover");

    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "imageUrl": "http://cdn.test/cover.png" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/articles"))
        .and(body_partial_json(json!({
            "title": "A headline long enough",
            "categoryId": "c1",
            "imageUrl": "http://cdn.test/cover.png"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let edits = ArticleEdits {
        title: Some("A headline long enough".to_string()),
        category_id: Some("c1".to_string()),
        content: Some(long_content()),
        image: Some(cover),
    };
    articles::create(&session.client(), edits)
        .await
        .expect("create article");
}

#[tokio::test]
async fn invalid_article_issues_no_request() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("create temp dir");
    let session = session(&server, &dir.path().join("token"));

    let edits = ArticleEdits {
        title: Some("short".to_string()),
        category_id: None,
        content: Some("too short".to_string()),
        image: None,
    };
    let err = articles::create(&session.client(), edits)
        .await
        .expect_err("validation must fail");
    let message = err.to_string();
    assert!(message.contains("title"));
    assert!(message.contains("categoryId"));
    assert!(message.contains("content"));
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn update_without_new_image_keeps_stored_url() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("create temp dir");
    let session = session(&server, &dir.path().join("token"));

    Mock::given(method("GET"))
        .and(path("/api/articles/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "a1",
            "title": "Existing headline here",
            "content": long_content(),
            "categoryId": "c1",
            "imageUrl": "http://cdn.test/old.png"
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/articles/a1"))
        .and(body_partial_json(json!({
            "title": "Renamed headline here",
            "imageUrl": "http://cdn.test/old.png"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let edits = ArticleEdits {
        title: Some("Renamed headline here".to_string()),
        ..ArticleEdits::default()
    };
    articles::update(&session.client(), "a1", edits)
        .await
        .expect("update article");
}

#[tokio::test]
async fn category_create_surfaces_server_message() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("create temp dir");
    let session = session(&server, &dir.path().join("token"));

    Mock::given(method("POST"))
        .and(path("/api/categories"))
        .and(body_partial_json(json!({ "name": "Technology" })))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "message": "Category already exists" })),
        )
        .mount(&server)
        .await;

    let err = categories::create(&session.client(), "  Technology ".to_string())
        .await
        .expect_err("duplicate category");
    assert_eq!(err.to_string(), "Category already exists");
}

#[tokio::test]
async fn category_list_keeps_requested_limit() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("create temp dir");
    let session = session(&server, &dir.path().join("token"));

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .and(query_param("search", "tech"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "c1", "name": "Technology" }],
            "currentPage": 1,
            "totalData": 1,
            "totalPages": 1
        })))
        .mount(&server)
        .await;

    let page = categories::list(&session.client(), 1, 10, Some("tech".to_string()))
        .await
        .expect("list categories");
    assert_eq!(page.limit, 10);
    assert_eq!(page.items[0].name, "Technology");
}
