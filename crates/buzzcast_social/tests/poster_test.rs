//! Tests for the X and Threads posters against local fake APIs.

use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use buzzcast_core::{PlatformId, PostOptions, PublishFailure};
use buzzcast_error::PosterErrorKind;
use buzzcast_interface::Poster;
use buzzcast_rate_limit::PacingConfig;
use buzzcast_social::{
    PosterRegistry, PosterSettings, ThreadsCredentials, ThreadsPoster, ThreadsSettings, XPoster,
    XSettings,
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    format!("http://{addr}")
}

fn unpaced() -> PacingConfig {
    PacingConfig { min_interval_ms: 0 }
}

fn x_settings(base_url: &str) -> XSettings {
    XSettings {
        access_token: Some("user-token".into()),
        username: Some("buzzcast".into()),
        base_url: base_url.to_string(),
        pacing: unpaced(),
        ..XSettings::default()
    }
}

fn threads_settings(base_url: &str) -> ThreadsSettings {
    ThreadsSettings {
        access_token: Some("threads-token".into()),
        user_id: Some("42".into()),
        base_url: base_url.to_string(),
        pacing: unpaced(),
        ..ThreadsSettings::default()
    }
}

// ---------------------------------------------------------------------------
// Construction and dry run
// ---------------------------------------------------------------------------

#[test]
fn test_live_construction_without_credentials_fails() {
    let err = XPoster::new(&XSettings::default(), false).unwrap_err();
    assert!(matches!(err.kind(), PosterErrorKind::MissingCredentials { .. }));

    let err = ThreadsPoster::new(&ThreadsSettings::default(), false).unwrap_err();
    assert!(matches!(err.kind(), PosterErrorKind::MissingCredentials { .. }));
}

#[test]
fn test_dry_run_construction_never_fails() {
    let x = XPoster::new(&XSettings::default(), true).unwrap();
    assert!(x.is_dry_run());
    assert_eq!(x.max_length(), 280);

    let threads = ThreadsPoster::new(&ThreadsSettings::default(), true).unwrap();
    assert!(threads.is_dry_run());
    assert_eq!(threads.max_length(), 500);
}

#[test]
fn test_threads_credential_resolution() {
    let mut settings = ThreadsSettings {
        user_id: Some("42".into()),
        app_id: Some("app".into()),
        app_secret: Some("secret".into()),
        ..ThreadsSettings::default()
    };
    assert!(matches!(settings.credentials(), Some(ThreadsCredentials::App { .. })));

    settings.access_token = Some("tok".into());
    assert!(matches!(
        settings.credentials(),
        Some(ThreadsCredentials::AccessToken { .. })
    ));

    settings.user_id = Some("   ".into());
    assert!(settings.credentials().is_none());
}

#[tokio::test]
async fn test_dry_run_ids_are_prefixed() {
    let x = XPoster::new(&XSettings::default(), true).unwrap();
    let result = x.publish_post("テスト投稿", &PostOptions::default()).await.unwrap();
    assert!(result.success && result.dry_run);
    assert!(result.id.unwrap().starts_with("dry-run-x-"));

    let threads = ThreadsPoster::new(&ThreadsSettings::default(), true).unwrap();
    let result = threads.publish_post("テスト投稿", &PostOptions::default()).await.unwrap();
    assert!(result.id.unwrap().starts_with("dry-run-threads-"));

    let check = threads.test_credentials().await;
    assert!(check.success && check.dry_run);
}

#[tokio::test]
async fn test_validation_and_validate_only() {
    let x = XPoster::new(&XSettings::default(), true).unwrap();

    let too_long = x
        .publish_post(&"あ".repeat(281), &PostOptions::default())
        .await
        .unwrap();
    assert!(!too_long.success);
    assert_eq!(too_long.failure, Some(PublishFailure::Validation));
    assert_eq!(too_long.error.as_deref(), Some("Validation failed"));

    let blank = x.validate_post("   ");
    assert_eq!(blank.errors, vec!["Post text cannot be empty".to_string()]);

    let validated = x
        .publish_post("ok", &PostOptions { validate_only: true })
        .await
        .unwrap();
    assert!(validated.success && validated.validated_only);
    assert!(validated.id.is_none());
}

// ---------------------------------------------------------------------------
// X
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_x_publish_and_credentials() {
    let seen = Arc::new(Mutex::new(Vec::<Value>::new()));
    let router = Router::new()
        .route(
            "/2/tweets",
            post(
                |State(seen): State<Arc<Mutex<Vec<Value>>>>, Json(body): Json<Value>| async move {
                    seen.lock().unwrap().push(body);
                    (StatusCode::CREATED, Json(json!({ "data": { "id": "1800", "text": "x" } })))
                },
            ),
        )
        .route(
            "/2/users/me",
            get(|| async { Json(json!({ "data": { "id": "7", "username": "buzzcast" } })) }),
        )
        .with_state(seen.clone());
    let base = serve(router).await;

    let poster = XPoster::new(&x_settings(&base), false).unwrap();
    assert!(!poster.is_dry_run());

    let check = poster.test_credentials().await;
    assert!(check.success);
    assert_eq!(check.account.as_deref(), Some("buzzcast"));

    let result = poster
        .publish_post("円安で家計に影響", &PostOptions::default())
        .await
        .unwrap();
    assert!(result.success && !result.dry_run);
    assert_eq!(result.id.as_deref(), Some("1800"));
    assert_eq!(
        result.url.as_deref(),
        Some("https://x.com/buzzcast/status/1800")
    );
    assert_eq!(seen.lock().unwrap()[0]["text"], "円安で家計に影響");
}

#[tokio::test]
async fn test_x_rate_limit_carries_retry_after() {
    let router = Router::new().route(
        "/2/tweets",
        post(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                [("retry-after", "900")],
                Json(json!({ "title": "Too Many Requests", "detail": "Too Many Requests" })),
            )
        }),
    );
    let base = serve(router).await;

    let poster = XPoster::new(&x_settings(&base), false).unwrap();
    let result = poster.publish_post("hi", &PostOptions::default()).await.unwrap();

    assert!(!result.success);
    assert_eq!(result.failure, Some(PublishFailure::RateLimited));
    assert_eq!(result.error.as_deref(), Some("Rate limited"));
    assert_eq!(result.retry_after, Some(900));
}

#[tokio::test]
async fn test_x_duplicate_and_api_errors() {
    let router = Router::new()
        .route(
            "/2/tweets",
            post(|| async {
                (
                    StatusCode::FORBIDDEN,
                    Json(json!({
                        "detail": "You are not allowed to create a Tweet with duplicate content."
                    })),
                )
            }),
        )
        .route(
            "/2/users/me",
            get(|| async { (StatusCode::UNAUTHORIZED, "Unauthorized").into_response() }),
        );
    let base = serve(router).await;
    let poster = XPoster::new(&x_settings(&base), false).unwrap();

    let result = poster.publish_post("hi", &PostOptions::default()).await.unwrap();
    assert_eq!(result.failure, Some(PublishFailure::Duplicate));
    assert_eq!(result.error.as_deref(), Some("Duplicate post"));

    let check = poster.test_credentials().await;
    assert!(!check.success);
    assert!(check.error.unwrap().contains("Authentication failed"));

    let broken = serve(Router::new().route(
        "/2/tweets",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await;
    let poster = XPoster::new(&x_settings(&broken), false).unwrap();
    let result = poster.publish_post("hi", &PostOptions::default()).await.unwrap();
    assert_eq!(result.failure, Some(PublishFailure::Api));
    assert_eq!(result.details.unwrap()["status"], 500);
}

// ---------------------------------------------------------------------------
// Threads
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
struct ThreadsState {
    forms: Arc<Mutex<Vec<HashMap<String, String>>>>,
    token_calls: Arc<AtomicUsize>,
}

fn threads_router(state: ThreadsState) -> Router {
    Router::new()
        .route(
            "/:user/threads",
            post(
                |State(state): State<ThreadsState>, Form(form): Form<HashMap<String, String>>| async move {
                    state.forms.lock().unwrap().push(form);
                    Json(json!({ "id": "container-1" }))
                },
            ),
        )
        .route(
            "/:user/threads_publish",
            post(
                |State(state): State<ThreadsState>, Form(form): Form<HashMap<String, String>>| async move {
                    state.forms.lock().unwrap().push(form);
                    Json(json!({ "id": "post-9" }))
                },
            ),
        )
        .route(
            "/:user",
            get(|Path(user): Path<String>, Query(q): Query<HashMap<String, String>>| async move {
                assert_eq!(q.get("fields").map(String::as_str), Some("id,username"));
                Json(json!({ "id": user, "username": "buzz_threads" }))
            }),
        )
        .route(
            "/oauth/access_token",
            get(|State(state): State<ThreadsState>| async move {
                state.token_calls.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "access_token": "app-token", "token_type": "bearer" }))
            }),
        )
        .with_state(state)
}

#[tokio::test]
async fn test_threads_two_step_publish() {
    let state = ThreadsState::default();
    let base = serve(threads_router(state.clone())).await;

    let poster = ThreadsPoster::new(&threads_settings(&base), false).unwrap();
    let result = poster
        .publish_post("副業の始め方", &PostOptions::default())
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.id.as_deref(), Some("post-9"));
    assert_eq!(result.details.unwrap()["containerId"], "container-1");

    let forms = state.forms.lock().unwrap();
    assert_eq!(forms[0]["media_type"], "TEXT");
    assert_eq!(forms[0]["text"], "副業の始め方");
    assert_eq!(forms[0]["access_token"], "threads-token");
    assert_eq!(forms[1]["creation_id"], "container-1");
}

#[tokio::test]
async fn test_threads_app_token_exchanged_once() {
    let state = ThreadsState::default();
    let base = serve(threads_router(state.clone())).await;

    let settings = ThreadsSettings {
        access_token: None,
        app_id: Some("app".into()),
        app_secret: Some("secret".into()),
        token_url: format!("{base}/oauth/access_token"),
        ..threads_settings(&base)
    };
    let poster = ThreadsPoster::new(&settings, false).unwrap();

    let check = poster.test_credentials().await;
    assert!(check.success);
    assert_eq!(check.account.as_deref(), Some("buzz_threads"));

    poster.publish_post("hi", &PostOptions::default()).await.unwrap();

    assert_eq!(state.token_calls.load(Ordering::SeqCst), 1);
    assert_eq!(state.forms.lock().unwrap()[0]["access_token"], "app-token");
}

#[tokio::test]
async fn test_threads_duplicate_and_rate_limit() {
    let router = Router::new().route(
        "/:user/threads",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": { "message": "This post was already posted", "code": 100 } })),
            )
        }),
    );
    let base = serve(router).await;
    let poster = ThreadsPoster::new(&threads_settings(&base), false).unwrap();
    let result = poster.publish_post("hi", &PostOptions::default()).await.unwrap();
    assert_eq!(result.failure, Some(PublishFailure::Duplicate));

    let limited = serve(Router::new().route(
        "/:user/threads",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
    ))
    .await;
    let poster = ThreadsPoster::new(&threads_settings(&limited), false).unwrap();
    let result = poster.publish_post("hi", &PostOptions::default()).await.unwrap();
    assert_eq!(result.failure, Some(PublishFailure::RateLimited));
    assert_eq!(result.retry_after, None);
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[test]
fn test_registry_defaults_and_unknown() {
    let registry = PosterRegistry::with_defaults();
    assert_eq!(
        registry.platforms(),
        vec![PlatformId::new("threads"), PlatformId::new("x")]
    );
    assert!(
        registry
            .build(&PlatformId::new("mastodon"), &PosterSettings::default(), true)
            .is_none()
    );

    let live = registry
        .build(&PlatformId::new("x"), &PosterSettings::default(), false)
        .unwrap();
    assert!(live.is_err());
}

#[test]
fn test_registry_register_custom_platform() {
    let mut registry = PosterRegistry::new();
    registry.register("custom", |settings: &PosterSettings, dry_run| {
        XPoster::new(&settings.x, dry_run).map(|p| Arc::new(p) as Arc<dyn Poster>)
    });
    assert!(registry.contains(&PlatformId::new("CUSTOM")));
}

#[test]
fn test_settings_from_toml() {
    let settings: PosterSettings = toml::from_str(
        r#"
        [x]
        username = "buzzcast"

        [threads]
        user_id = "42"
        pacing = { min_interval_ms = 250 }
        "#,
    )
    .unwrap();

    assert_eq!(settings.x.base_url, "https://api.x.com");
    assert_eq!(settings.x.pacing.min_interval_ms, 1000);
    assert_eq!(settings.threads.pacing.min_interval_ms, 250);
    assert!(settings.threads.credentials().is_none());
}
