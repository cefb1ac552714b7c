//! End-to-end tests of the HTTP surface over a seeded in-memory store.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use db::pool::{create_memory_pool, run_migrations};

use crate::{router, AppState};

async fn app() -> Router {
    let pool = create_memory_pool().await.expect("in-memory pool");
    run_migrations(&pool).await.expect("migrations apply");
    registrar::seed_if_empty(&pool).await.expect("seed");
    router(AppState::new(pool), "static")
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

#[tokio::test]
async fn root_redirects_to_static_index() {
    let app = app().await;
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/static/index.html"
    );
}

#[tokio::test]
async fn listing_returns_every_seeded_activity() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/activities").await;

    assert_eq!(status, StatusCode::OK);
    let activities = body.as_object().expect("object keyed by activity name");
    assert_eq!(activities.len(), 9);
    assert_eq!(body["Chess Club"]["max_participants"], 12);
    assert_eq!(body["Chess Club"]["participants"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn signup_then_listing_shows_the_student() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Chess%20Club/signup?email=newstudent%40mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Signed up newstudent@mergington.edu for Chess Club"
    );

    let (_, listing) = send(&app, Method::GET, "/activities").await;
    let participants = listing["Chess Club"]["participants"].as_array().unwrap();
    assert_eq!(participants.len(), 3);
    assert!(participants.contains(&Value::from("newstudent@mergington.edu")));
}

#[tokio::test]
async fn duplicate_signup_is_bad_request() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Chess%20Club/signup?email=michael%40mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Student is already signed up");
}

#[tokio::test]
async fn signup_to_full_activity_is_bad_request() {
    let app = app().await;
    for i in 0..8 {
        let uri = format!("/activities/Math%20Club/signup?email=s{i}%40mergington.edu");
        let (status, _) = send(&app, Method::POST, &uri).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Math%20Club/signup?email=late%40mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Activity is full");
}

#[tokio::test]
async fn unknown_activity_is_not_found() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Nope/signup?email=a%40mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/Nope/unregister?email=a%40mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");
}

#[tokio::test]
async fn unregister_then_again_is_bad_request() {
    let app = app().await;
    let uri = "/activities/Chess%20Club/unregister?email=michael%40mergington.edu";

    let (status, body) = send(&app, Method::DELETE, uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Unregistered michael@mergington.edu from Chess Club"
    );

    let (_, listing) = send(&app, Method::GET, "/activities").await;
    let participants = listing["Chess Club"]["participants"].as_array().unwrap();
    assert!(!participants.contains(&Value::from("michael@mergington.edu")));

    let (status, body) = send(&app, Method::DELETE, uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Student is not signed up for this activity");
}

#[tokio::test]
async fn missing_email_is_unprocessable_with_detail() {
    let app = app().await;

    let (status, body) = send(&app, Method::POST, "/activities/Chess%20Club/signup").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("email"), "got {body}");

    let (status, body) = send(&app, Method::DELETE, "/activities/Chess%20Club/unregister").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string(), "got {body}");
}

#[tokio::test]
async fn signup_requires_post() {
    let app = app().await;
    let (status, _) = send(
        &app,
        Method::GET,
        "/activities/Chess%20Club/signup?email=a%40mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[test]
fn registrar_errors_map_to_status_codes() {
    use crate::ApiError;
    use registrar::RegistrarError;

    let cases = [
        (RegistrarError::ActivityNotFound, StatusCode::NOT_FOUND),
        (RegistrarError::AlreadySignedUp, StatusCode::BAD_REQUEST),
        (RegistrarError::ActivityFull, StatusCode::BAD_REQUEST),
        (RegistrarError::NotRegistered, StatusCode::BAD_REQUEST),
        (
            RegistrarError::Database(db::DbError::NotFound),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];
    for (err, expected) in cases {
        assert_eq!(ApiError::from(err).status(), expected);
    }
}
