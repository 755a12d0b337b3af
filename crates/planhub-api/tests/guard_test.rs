//! Router-level tests for the auth guard and pre-store validation.
//!
//! The pool is created lazily, so every path exercised here must reject
//! before any database access — guard rejections, request validation, and
//! the health endpoint.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use planhub_api::state::AppState;
use planhub_auth::jwt::decoder::JwtDecoder;
use planhub_auth::jwt::encoder::JwtEncoder;
use planhub_auth::password::hasher::PasswordHasher;
use planhub_auth::password::validator::PasswordValidator;
use planhub_core::config::AppConfig;
use planhub_core::config::auth::AuthConfig;
use planhub_database::repositories::project::ProjectRepository;
use planhub_database::repositories::user::UserRepository;
use planhub_service::auth::service::AuthService;
use planhub_service::project::service::ProjectService;
use planhub_service::user::service::UserService;

/// Test application context
struct TestApp {
    /// The Axum router for making test requests
    router: Router,
}

/// Response from a test request
#[derive(Debug)]
struct TestResponse {
    /// HTTP status code
    status: StatusCode,
    /// Parsed JSON body
    body: Value,
}

impl TestApp {
    /// Create a test application over a lazy (unconnected) pool.
    fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "guard_test_secret".to_string();

        let db_pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy(&config.database.url)
            .expect("Failed to build lazy pool");

        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth).expect("encoder"));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth).expect("decoder"));

        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let project_repo = Arc::new(ProjectRepository::new(db_pool.clone()));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
            Arc::clone(&jwt_encoder),
        ));
        let user_service = Arc::new(UserService::new(Arc::clone(&user_repo)));
        let project_service = Arc::new(ProjectService::new(Arc::clone(&project_repo)));

        let state = AppState {
            config: Arc::new(config),
            db_pool,
            jwt_encoder,
            jwt_decoder,
            password_hasher,
            user_repo,
            project_repo,
            auth_service,
            user_service,
            project_service,
        };

        Self {
            router: planhub_api::router::build_router(state),
        }
    }

    /// Make an HTTP request to the test app
    async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("status").unwrap(), "ok");
}

#[tokio::test]
async fn test_profile_without_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/auth/profile", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body.get("error").unwrap(), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_profile_with_wrong_scheme() {
    let app = TestApp::new();

    let req = Request::builder()
        .method("GET")
        .uri("/auth/profile")
        .header("Authorization", "Basic dXNlcjpwdw==")
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_with_garbage_token() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/auth/profile", None, Some("not-a-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_with_foreign_secret_token() {
    let app = TestApp::new();

    let foreign = AuthConfig {
        jwt_secret: "some_other_secret".to_string(),
        ..AuthConfig::default()
    };
    let foreign_encoder = JwtEncoder::new(&foreign).unwrap();
    let issued = foreign_encoder.issue(Uuid::new_v4(), "ada@x.com").unwrap();

    let response = app
        .request("GET", "/auth/profile", None, Some(&issued.token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_projects_require_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/projects", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "POST",
            "/projects",
            Some(serde_json::json!({
                "name": "BECO TYSONS",
                "projectNumber": "#21000",
                "manager": "Gary Golden",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signup_rejects_invalid_email() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/signup",
            Some(serde_json::json!({
                "name": "Ada Lovelace",
                "email": "not-an-email",
                "password": "longenough1",
                "dateOfBirth": "1990-01-01",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body.get("error").unwrap(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_signup_rejects_short_password() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/signup",
            Some(serde_json::json!({
                "name": "Ada Lovelace",
                "email": "ada@x.com",
                "password": "short",
                "dateOfBirth": "1990-01-01",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_rejects_nonalphabetic_name() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/signup",
            Some(serde_json::json!({
                "name": "Ada L0velace!",
                "email": "ada@x.com",
                "password": "longenough1",
                "dateOfBirth": "1990-01-01",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_rejects_unparseable_date() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/signup",
            Some(serde_json::json!({
                "name": "Ada Lovelace",
                "email": "ada@x.com",
                "password": "longenough1",
                "dateOfBirth": "01/01/1990",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_requires_fields() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "",
                "password": "",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
