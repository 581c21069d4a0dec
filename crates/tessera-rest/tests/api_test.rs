//! Router tests against in-memory repositories.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use mockall::mock;
use std::{fs, sync::Arc};
use tempfile::TempDir;
use tessera_config::ServerConfig;
use tessera_core::{
    HealthCheck, HealthStatus, Insurance, NewUser, Repository, TesseraError, TesseraResult, User,
    UserId,
};
use tessera_repository::InMemoryRepository;
use tessera_rest::{create_router, AppState};
use tower::ServiceExt;

mock! {
    pub UserStore {}

    #[async_trait]
    impl Repository<User> for UserStore {
        async fn save(&self, draft: &NewUser) -> TesseraResult<User>;
        async fn find_all(&self) -> TesseraResult<Vec<User>>;
        async fn find_by_id(&self, id: UserId) -> TesseraResult<Option<User>>;
        async fn update(&self, entity: &User) -> TesseraResult<User>;
        async fn delete(&self, id: UserId) -> TesseraResult<bool>;
        async fn exists(&self, id: UserId) -> TesseraResult<bool>;
        async fn count(&self) -> TesseraResult<u64>;
    }
}

struct StaticCheck(HealthStatus);

#[async_trait]
impl HealthCheck for StaticCheck {
    fn name(&self) -> &str {
        "static"
    }

    async fn check(&self) -> HealthStatus {
        self.0.clone()
    }
}

struct TestApp {
    router: Router,
    users: Arc<InMemoryRepository<User>>,
    insurances: Arc<InMemoryRepository<Insurance>>,
    files_dir: TempDir,
}

impl TestApp {
    fn new() -> Self {
        let files = TempDir::new().unwrap();
        let users = Arc::new(InMemoryRepository::<User>::new());
        let insurances = Arc::new(InMemoryRepository::<Insurance>::new());
        let state = AppState::new(users.clone(), insurances.clone(), files.path());

        Self {
            router: create_router(state, &ServerConfig::default()),
            users,
            insurances,
            files_dir: files,
        }
    }

    fn files(&self) -> &std::path::Path {
        self.files_dir.path()
    }

    async fn send(&self, method: Method, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        send(&self.router, request).await
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_list_users_empty() {
    let app = TestApp::new();

    let (status, body) = app.send(Method::GET, "/demo/all").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_add_user_then_list() {
    let app = TestApp::new();

    let (status, body) = app
        .send(Method::POST, "/demo/add?name=Alice&email=alice%40example.com")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Saved");

    let (status, body) = app.send(Method::GET, "/demo/all").await;
    assert_eq!(status, StatusCode::OK);
    let users: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        users,
        serde_json::json!([{"id": 1, "name": "Alice", "email": "alice@example.com"}])
    );
}

#[tokio::test]
async fn test_add_user_from_form_body() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/demo/add")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("name=Bob&email=bob%40example.com"))
        .unwrap();

    let (status, body) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Saved");
    assert_eq!(app.users.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_add_user_with_params_split_between_query_and_body() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/demo/add?name=Alice")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("email=a%40x.com"))
        .unwrap();

    let (status, body) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Saved");
    let users = app.users.find_all().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Alice");
    assert_eq!(users[0].email, "a@x.com");
}

#[tokio::test]
async fn test_add_insurance_with_cache_buster_query_and_form_body() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/insurance/add?_=1")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("name=Home&type=property"))
        .unwrap();

    let (status, body) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Saved");
    let stored = app.insurances.find_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Home");
    assert_eq!(stored[0].kind, "property");
}

#[tokio::test]
async fn test_add_user_missing_param_is_400() {
    let app = TestApp::new();

    let (status, body) = app.send(Method::POST, "/demo/add?name=Alice").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(app.users.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_add_requires_post() {
    let app = TestApp::new();

    let (status, _) = app.send(Method::GET, "/demo/add?name=a&email=b").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_over_long_value_fails_in_storage() {
    let app = TestApp::new();
    let uri = format!("/demo/add?name=Alice&email={}", "e".repeat(101));

    let (status, body) = app.send(Method::POST, &uri).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["code"], "DATABASE_ERROR");
}

#[tokio::test]
async fn test_identical_insurances_get_distinct_ids() {
    let app = TestApp::new();

    for _ in 0..2 {
        let (status, body) = app.send(Method::POST, "/insurance/add?name=Basic&type=car").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Saved");
    }

    let (_, body) = app.send(Method::GET, "/insurance/all").await;
    let records: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(records.len(), 2);
    assert_ne!(records[0]["id"], records[1]["id"]);
    assert_eq!(records[0]["type"], "car");
    assert_eq!(records[0]["name"], "Basic");
}

#[tokio::test]
async fn test_insurance_accepts_empty_strings() {
    let app = TestApp::new();

    let (status, body) = app.send(Method::POST, "/insurance/add?name=&type=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Saved");
    let stored = app.insurances.find_all().await.unwrap();
    assert_eq!(stored[0].name, "");
    assert_eq!(stored[0].kind, "");
}

#[tokio::test]
async fn test_file_listing() {
    let app = TestApp::new();
    fs::write(app.files().join("a.txt"), "a").unwrap();
    fs::create_dir(app.files().join("nested")).unwrap();
    fs::write(app.files().join("nested").join("b.txt"), "b").unwrap();

    let (status, body) = app.send(Method::GET, "/demo/info").await;

    assert_eq!(status, StatusCode::OK);
    let expected = format!(
        "[{}, {}]",
        app.files().join("a.txt").display(),
        app.files().join("nested").join("b.txt").display()
    );
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_file_listing_missing_root_is_500() {
    let dir = TempDir::new().unwrap();
    let state = AppState::new(
        Arc::new(InMemoryRepository::<User>::new()),
        Arc::new(InMemoryRepository::<Insurance>::new()),
        dir.path().join("classpathname"),
    );
    let router = create_router(state, &ServerConfig::default());

    let request = Request::builder().uri("/demo/info").body(Body::empty()).unwrap();
    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("IO_ERROR"));
}

#[tokio::test]
async fn test_storage_failure_surfaces_as_500() {
    let mut store = MockUserStore::new();
    store
        .expect_find_all()
        .returning(|| Err(TesseraError::database("connection lost")));
    store
        .expect_save()
        .returning(|_| Err(TesseraError::database("connection lost")));

    let state = AppState::new(
        Arc::new(store),
        Arc::new(InMemoryRepository::<Insurance>::new()),
        ".",
    );
    let router = create_router(state, &ServerConfig::default());

    let request = Request::builder().uri("/demo/all").body(Body::empty()).unwrap();
    let (status, body) = send(&router, request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("connection lost"));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/demo/add?name=a&email=b")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&router, request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_add_passes_parameters_unchanged() {
    let mut store = MockUserStore::new();
    store
        .expect_save()
        .withf(|draft| draft.name == "  spaced  " && draft.email == "not-an-email")
        .times(1)
        .returning(|draft| {
            Ok(User {
                id: UserId::new(9),
                name: draft.name.clone(),
                email: draft.email.clone(),
            })
        });

    let state = AppState::new(
        Arc::new(store),
        Arc::new(InMemoryRepository::<Insurance>::new()),
        ".",
    );
    let router = create_router(state, &ServerConfig::default());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/demo/add?name=%20%20spaced%20%20&email=not-an-email")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Saved");
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = TestApp::new();

    let (status, body) = app.send(Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("healthy"));

    let (status, _) = app.send(Method::GET, "/live").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.send(Method::GET, "/ready").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_ready_fails_when_a_check_fails() {
    let state = AppState::new(
        Arc::new(InMemoryRepository::<User>::new()),
        Arc::new(InMemoryRepository::<Insurance>::new()),
        ".",
    )
    .with_health_checks(vec![
        Arc::new(StaticCheck(HealthStatus::Healthy)) as Arc<dyn HealthCheck>,
        Arc::new(StaticCheck(HealthStatus::Unhealthy("db down".to_string()))),
    ]);
    let router = create_router(state, &ServerConfig::default());

    let request = Request::builder().uri("/ready").body(Body::empty()).unwrap();
    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "not_ready");
    assert_eq!(json["checks"][1]["message"], "db down");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = TestApp::new();

    let (status, body) = app.send(Method::GET, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(doc["paths"]["/demo/add"]["post"].is_object());
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let app = TestApp::new();
    let request = Request::builder().uri("/live").body(Body::empty()).unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}
