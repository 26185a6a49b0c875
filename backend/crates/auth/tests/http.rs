//! HTTP tests for the auth router using the in-memory repository

use auth::{AuthConfig, MemoryAuthRepository, auth_router_generic};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    auth_router_generic(
        MemoryAuthRepository::new(),
        AuthConfig::new(b"http-test-secret".to_vec()),
    )
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn registration(email: &str) -> Value {
    json!({
        "email": email,
        "password": "Quirofano-2024",
        "full_name": "Ana Ruiz",
        "phone": "3001234567",
        "specialties": ["Ortopedia"],
        "experience_years": 12
    })
}

async fn register(app: &Router, body: Value) -> Value {
    let (status, _, body) = send(app, post_json("/auth/register", body)).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body
}

#[tokio::test]
async fn register_returns_token_user_and_profile() {
    let app = app();

    let body = register(&app, registration("Ana@Clinica.com")).await;

    assert_eq!(body["token_type"], "bearer");
    assert!(body["access_token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["email"], "ana@clinica.com");
    assert_eq!(body["user"]["user_type"], "professional");
    assert_eq!(body["user"]["location"], "Bogotá");
    assert_eq!(body["profile"]["specialties"], json!(["Ortopedia"]));
    assert_eq!(body["profile"]["experience_years"], 12);
    assert_eq!(body["profile"]["average_rating"], 0.0);
    assert_eq!(body["profile"]["total_reviews"], 0);
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let app = app();
    register(&app, registration("ana@clinica.com")).await;

    let (status, _, body) = send(&app, post_json("/auth/register", registration("ANA@clinica.com"))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["detail"], "Email already registered");
}

#[tokio::test]
async fn unknown_user_type_is_bad_request() {
    let app = app();
    let mut body = registration("ana@clinica.com");
    body["user_type"] = json!("hospital");

    let (status, _, body) = send(&app, post_json("/auth/register", body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Unknown user_type: hospital");
}

#[tokio::test]
async fn company_registration_returns_company_profile() {
    let app = app();

    let body = register(
        &app,
        json!({
            "email": "compras@clinica.com",
            "password": "Quirofano-2024",
            "user_type": "company",
            "full_name": "Laura Gómez",
            "phone": "6011234567",
            "location": "Cali",
            "company_name": "Clínica del Norte",
            "services_offered": ["Cirugía"]
        }),
    )
    .await;

    assert_eq!(body["user"]["user_type"], "company");
    assert_eq!(body["user"]["location"], "Cali");
    assert_eq!(body["profile"]["company_name"], "Clínica del Norte");
    assert!(body["profile"].get("specialties").is_none());
}

#[tokio::test]
async fn login_succeeds_and_failures_are_uniform() {
    let app = app();
    register(&app, registration("ana@clinica.com")).await;

    let (status, _, body) = send(
        &app,
        post_json(
            "/auth/login",
            json!({"email": "ana@clinica.com", "password": "Quirofano-2024"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["profile"]["specialties"], json!(["Ortopedia"]));

    let (wrong_status, wrong_headers, wrong_body) = send(
        &app,
        post_json(
            "/auth/login",
            json!({"email": "ana@clinica.com", "password": "wrong-password"}),
        ),
    )
    .await;
    let (unknown_status, _, unknown_body) = send(
        &app,
        post_json(
            "/auth/login",
            json!({"email": "nadie@clinica.com", "password": "Quirofano-2024"}),
        ),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body["detail"], "Incorrect email or password");
    assert_eq!(wrong_body["detail"], unknown_body["detail"]);
    assert_eq!(wrong_headers[header::WWW_AUTHENTICATE], "Bearer");
}

#[tokio::test]
async fn me_requires_a_valid_bearer_token() {
    let app = app();
    let registered = register(&app, registration("ana@clinica.com")).await;
    let token = registered["access_token"].as_str().unwrap();

    let (status, headers, _) = send(&app, get("/auth/me", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(headers[header::WWW_AUTHENTICATE], "Bearer");

    let (status, _, body) = send(&app, get("/auth/me", Some("not-a-token"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Could not validate credentials");

    let (status, _, body) = send(&app, get("/auth/me", Some(token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "ana@clinica.com");
    assert_eq!(body["id"], registered["user"]["id"]);
}

#[tokio::test]
async fn own_profile_can_be_read_and_patched() {
    let app = app();
    let registered = register(&app, registration("ana@clinica.com")).await;
    let token = registered["access_token"].as_str().unwrap();

    let patch = Request::builder()
        .method("PUT")
        .uri("/professionals/me")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "location": "Medellín",
                "bio": "Cirujano de columna",
                "availability_status": "busy"
            })
            .to_string(),
        ))
        .unwrap();
    let (status, _, body) = send(&app, patch).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["location"], "Medellín");
    assert_eq!(body["bio"], "Cirujano de columna");
    assert_eq!(body["availability_status"], "busy");
    // Untouched fields keep their values
    assert_eq!(body["specialties"], json!(["Ortopedia"]));
    assert_eq!(body["full_name"], "Ana Ruiz");

    let (status, _, body) = send(&app, get("/professionals/me", Some(token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bio"], "Cirujano de columna");

    let (status, _, _) = send(&app, get("/professionals/me", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

fn put_json(uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn hourly_rate_is_cleared_by_null_and_kept_when_absent() {
    let app = app();
    let mut body = registration("ana@clinica.com");
    body["hourly_rate"] = json!(150000.0);
    let registered = register(&app, body).await;
    let token = registered["access_token"].as_str().unwrap();

    let (status, _, body) = send(
        &app,
        put_json("/professionals/me", token, json!({"bio": "Cirujano"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["hourly_rate"], 150000.0);

    let (status, _, body) = send(
        &app,
        put_json("/professionals/me", token, json!({"hourly_rate": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert!(body["hourly_rate"].is_null());
    assert_eq!(body["bio"], "Cirujano");

    let (_, _, body) = send(&app, get("/professionals/me", Some(token))).await;
    assert!(body["hourly_rate"].is_null());
}

#[tokio::test]
async fn professional_directory_lookup_and_filters() {
    let app = app();
    let ana = register(&app, registration("ana@clinica.com")).await;

    let mut luis = registration("luis@clinica.com");
    luis["specialties"] = json!(["Cardiología"]);
    luis["location"] = json!("Medellín");
    register(&app, luis).await;

    let (status, _, body) = send(&app, get("/professionals", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, _, body) = send(&app, get("/professionals?specialty=Ortopedia", None)).await;
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["email"], "ana@clinica.com");
    assert_eq!(listed[0]["average_rating"], 0.0);

    let (_, _, body) = send(&app, get("/professionals?location=MEDELL", None)).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["email"], "luis@clinica.com");

    let ana_id = ana["user"]["id"].as_str().unwrap();
    let (status, _, body) = send(&app, get(&format!("/professionals/{ana_id}"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["full_name"], "Ana Ruiz");

    let (status, _, body) = send(
        &app,
        get("/professionals/00000000-0000-4000-8000-000000000000", None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Professional not found");

    let (status, _, _) = send(&app, get("/professionals/not-a-uuid", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn specialties_catalogue_is_public() {
    let app = app();

    let (status, _, body) = send(&app, get("/specialties", None)).await;

    assert_eq!(status, StatusCode::OK);
    let specialties = body["specialties"].as_array().unwrap();
    assert_eq!(specialties.len(), 15);
    assert!(specialties.contains(&json!("Ortopedia")));
}
