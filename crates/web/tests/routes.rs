//! End-to-end route tests over an in-process router and mock backends.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::{Router, response::Response};
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wayfarer_web::appwrite::AppwriteClient;
use wayfarer_web::config::{AppConfig, AppwriteConfig};
use wayfarer_web::routes;
use wayfarer_web::services::Services;
use wayfarer_web::services::people::PeopleClient;
use wayfarer_web::state::AppState;

fn config(appwrite: Option<AppwriteConfig>) -> AppConfig {
    AppConfig {
        host: "127.0.0.1".parse().expect("host"),
        port: 3000,
        base_url: "http://localhost:3000".to_string(),
        appwrite,
        sentry_dsn: None,
    }
}

fn appwrite_config(server: &MockServer) -> AppwriteConfig {
    AppwriteConfig {
        endpoint: server.uri(),
        project_id: "proj_1".to_string(),
        api_key: SecretString::from("server-key"),
        database_id: "db_1".to_string(),
        users_collection_id: "users_1".to_string(),
        trips_collection_id: "trips_1".to_string(),
    }
}

/// Router wired to the Appwrite mock, with the People API pointed at its
/// own mock server.
fn app_against(server: &MockServer, people: &MockServer) -> Router {
    let appwrite = appwrite_config(server);
    let client = AppwriteClient::new(&appwrite);
    let services = Services::custom(
        Arc::new(client.clone()),
        Arc::new(client),
        PeopleClient::with_base_url(people.uri()),
    );
    let state = AppState::with_services(config(Some(appwrite)), services);
    routes::routes().with_state(state)
}

fn unavailable_app() -> Router {
    routes::routes().with_state(AppState::new(config(None)))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn get_with_session(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-appwrite-session", token)
        .body(Body::empty())
        .expect("request")
}

async fn json_body(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json")
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .expect("location value")
}

fn identity_mock(account_id: &str) -> Mock {
    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "$id": account_id,
            "email": format!("{account_id}@example.com"),
            "name": account_id,
        })))
}

fn documents_page(documents: Value) -> ResponseTemplate {
    let total = documents.as_array().map_or(0, Vec::len);
    ResponseTemplate::new(200).set_body_json(json!({
        "total": total,
        "documents": documents,
    }))
}

#[tokio::test]
async fn test_home_and_not_found_pages() {
    let app = unavailable_app();

    let home = app.clone().oneshot(get("/")).await.expect("home");
    assert_eq!(home.status(), StatusCode::OK);

    let missing = app.oneshot(get("/404")).await.expect("404");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_redirects_to_oauth_handshake() {
    let server = MockServer::start().await;
    let people = MockServer::start().await;
    let app = app_against(&server, &people);

    let response = app.oneshot(get("/auth/google")).await.expect("response");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let url = location(&response);
    assert!(url.starts_with(&format!(
        "{}/account/sessions/oauth2/google?project=proj_1",
        server.uri()
    )));
    assert!(url.contains("success=http%3A%2F%2Flocalhost%3A3000%2F"));
    assert!(url.contains("failure=http%3A%2F%2Flocalhost%3A3000%2F404"));
}

#[tokio::test]
async fn test_login_without_backend_returns_to_sign_in() {
    let response = unavailable_app()
        .oneshot(get("/auth/google"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/sign-in");
}

#[tokio::test]
async fn test_logout_always_redirects_to_sign_in() {
    let server = MockServer::start().await;
    let people = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/account/sessions/current"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = app_against(&server, &people)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/logout")
                .header("x-appwrite-session", "tok_1")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/sign-in");
}

#[tokio::test]
async fn test_sign_in_loader_for_signed_out_caller() {
    let response = unavailable_app()
        .oneshot(get("/sign-in"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["loginUrl"], "/auth/google");
}

#[tokio::test]
async fn test_admin_without_backend_renders_no_profile() {
    let response = unavailable_app()
        .oneshot(get("/admin"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, Value::Null);
}

#[tokio::test]
async fn test_admin_without_session_redirects_to_sign_in() {
    let server = MockServer::start().await;
    let people = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let response = app_against(&server, &people)
        .oneshot(get_with_session("/admin", "stale"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/sign-in");
}

#[tokio::test]
async fn test_admin_plain_user_is_sent_home() {
    let server = MockServer::start().await;
    let people = MockServer::start().await;

    identity_mock("acct_1").mount(&server).await;
    Mock::given(method("GET"))
        .and(path("/databases/db_1/collections/users_1/documents"))
        .respond_with(documents_page(json!([{
            "$id": "doc_1",
            "accountId": "acct_1",
            "email": "acct_1@example.com",
            "name": "acct_1",
            "joinedAt": "2025-06-01T12:00:00Z",
            "status": "user",
        }])))
        .mount(&server)
        .await;

    let response = app_against(&server, &people)
        .oneshot(get_with_session("/admin", "tok_1"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_admin_existing_admin_gets_their_profile() {
    let server = MockServer::start().await;
    let people = MockServer::start().await;

    identity_mock("acct_1").mount(&server).await;
    Mock::given(method("GET"))
        .and(path("/databases/db_1/collections/users_1/documents"))
        .respond_with(documents_page(json!([{
            "$id": "doc_1",
            "accountId": "acct_1",
            "email": "acct_1@example.com",
            "name": "acct_1",
            "joinedAt": "2025-06-01T12:00:00Z",
            "status": "admin",
        }])))
        .mount(&server)
        .await;

    let response = app_against(&server, &people)
        .oneshot(get_with_session("/admin", "tok_1"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["accountId"], "acct_1");
    assert_eq!(body["status"], "admin");
}

#[tokio::test]
async fn test_admin_first_sign_in_survives_photo_outage() {
    let server = MockServer::start().await;
    let people = MockServer::start().await;

    identity_mock("acct_1").mount(&server).await;
    Mock::given(method("GET"))
        .and(path("/account/sessions/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "$id": "sess_1",
            "provider": "google",
            "providerAccessToken": "google-tok",
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/databases/db_1/collections/users_1/documents"))
        .respond_with(documents_page(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/databases/db_1/collections/users_1/documents"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "$id": "doc_1",
            "accountId": "acct_1",
            "email": "acct_1@example.com",
            "name": "acct_1",
            "imageUrl": null,
            "joinedAt": "2025-06-01T12:00:00Z",
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Photo provider down: the profile is still created, without an avatar.
    Mock::given(method("GET"))
        .and(path("/v1/people/me"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&people)
        .await;

    let response = app_against(&server, &people)
        .oneshot(get_with_session("/admin", "tok_1"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["accountId"], "acct_1");
    assert_eq!(body["imageUrl"], Value::Null);
}

#[tokio::test]
async fn test_admin_reads_session_from_project_cookie() {
    let server = MockServer::start().await;
    let people = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account"))
        .and(wiremock::matchers::header("X-Appwrite-Session", "tok_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "$id": "acct_1",
            "email": "acct_1@example.com",
            "name": "acct_1",
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/databases/db_1/collections/users_1/documents"))
        .respond_with(documents_page(json!([{
            "$id": "doc_1",
            "accountId": "acct_1",
            "email": "acct_1@example.com",
            "name": "acct_1",
            "joinedAt": "2025-06-01T12:00:00Z",
            "status": "admin",
        }])))
        .mount(&server)
        .await;

    let request = Request::builder()
        .uri("/admin")
        .header(header::COOKIE, "theme=dark; a_session_proj_1=tok_1")
        .body(Body::empty())
        .expect("request");

    let response = app_against(&server, &people)
        .oneshot(request)
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_users_index_returns_window_and_total() {
    let server = MockServer::start().await;
    let people = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/databases/db_1/collections/users_1/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 12,
            "documents": [{
                "$id": "doc_1",
                "accountId": "acct_1",
                "email": "acct_1@example.com",
                "name": "acct_1",
                "joinedAt": "2025-06-01T12:00:00Z",
            }],
        })))
        .mount(&server)
        .await;

    let response = app_against(&server, &people)
        .oneshot(get("/api/users?limit=1&offset=3"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total"], 12);
    assert_eq!(body["users"].as_array().expect("users").len(), 1);
}

#[tokio::test]
async fn test_users_index_without_backend_is_empty_page() {
    let response = unavailable_app()
        .oneshot(get("/api/users"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["users"], json!([]));
}

#[tokio::test]
async fn test_users_show_unknown_account_is_not_found() {
    let server = MockServer::start().await;
    let people = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/databases/db_1/collections/users_1/documents"))
        .respond_with(documents_page(json!([])))
        .mount(&server)
        .await;

    let response = app_against(&server, &people)
        .oneshot(get("/api/users/acct_9"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
