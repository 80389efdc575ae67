//! Tests for the publish orchestrator with mock posters.

use async_trait::async_trait;
use buzzcast_core::{
    CredentialCheck, PlatformId, PostOptions, PublishFailure, PublishOptions, PublishResult,
};
use buzzcast_error::{MultiPosterErrorKind, PosterError, PosterErrorKind, PosterResult};
use buzzcast_interface::Poster;
use buzzcast_publish::MultiPoster;
use buzzcast_social::{PosterRegistry, PosterSettings};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
enum Behavior {
    Succeed,
    Fail(PublishFailure),
    Error,
    Panic,
    Slow(Duration),
}

struct MockPoster {
    platform: PlatformId,
    max_length: usize,
    dry_run: bool,
    credentials_ok: bool,
    behavior: Behavior,
    publish_calls: AtomicUsize,
    credential_calls: AtomicUsize,
}

impl MockPoster {
    fn new(platform: &str, max_length: usize) -> Self {
        Self {
            platform: PlatformId::new(platform),
            max_length,
            dry_run: false,
            credentials_ok: true,
            behavior: Behavior::Succeed,
            publish_calls: AtomicUsize::new(0),
            credential_calls: AtomicUsize::new(0),
        }
    }

    fn dry(mut self) -> Self {
        self.dry_run = true;
        self
    }

    fn bad_credentials(mut self) -> Self {
        self.credentials_ok = false;
        self
    }

    fn behaving(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }
}

#[async_trait]
impl Poster for MockPoster {
    fn platform(&self) -> &PlatformId {
        &self.platform
    }

    fn max_length(&self) -> usize {
        self.max_length
    }

    fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    async fn test_credentials(&self) -> CredentialCheck {
        self.credential_calls.fetch_add(1, Ordering::SeqCst);
        if self.credentials_ok {
            CredentialCheck::ok(format!("{}-account", self.platform))
        } else {
            CredentialCheck::failed("Invalid token")
        }
    }

    async fn publish_post(
        &self,
        _text: &str,
        _options: &PostOptions,
    ) -> PosterResult<PublishResult> {
        self.publish_calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            Behavior::Succeed if self.dry_run => Ok(PublishResult::dry_run(format!(
                "dry-run-{}-1",
                self.platform
            ))),
            Behavior::Succeed => Ok(PublishResult::published(
                format!("{}-1", self.platform),
                None,
            )),
            Behavior::Fail(failure) => Ok(PublishResult::failed(failure, failure.summary())),
            Behavior::Error => Err(PosterError::new(PosterErrorKind::Http(
                "connection reset".into(),
            ))),
            Behavior::Panic => panic!("adapter bug"),
            Behavior::Slow(delay) => {
                tokio::time::sleep(delay).await;
                Ok(PublishResult::dry_run(format!("dry-run-{}-1", self.platform)))
            }
        }
    }
}

fn arc(poster: MockPoster) -> Arc<MockPoster> {
    Arc::new(poster)
}

#[tokio::test]
async fn test_two_dry_run_platforms_both_succeed() {
    let x = arc(MockPoster::new("x", 280).dry());
    let threads = arc(MockPoster::new("threads", 500).dry());
    let multi = MultiPoster::from_posters(
        vec![x.clone() as Arc<dyn Poster>, threads.clone() as Arc<dyn Poster>],
        true,
    );

    let report = multi.publish_post("円安の影響を整理", &PublishOptions::default()).await;

    assert!(report.success);
    assert_eq!(report.summary.total, 2);
    assert_eq!(report.summary.successful, 2);
    assert_eq!(report.summary.failed, 0);
    assert!(report.results.values().all(|r| r.dry_run));
    assert!(report.credential_checks.is_empty());
    assert_eq!(x.credential_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_platforms_publish_concurrently() {
    let delay = Duration::from_millis(200);
    let x = arc(MockPoster::new("x", 280).dry().behaving(Behavior::Slow(delay)));
    let threads = arc(MockPoster::new("threads", 500).dry().behaving(Behavior::Slow(delay)));
    let multi = MultiPoster::from_posters(
        vec![x.clone() as Arc<dyn Poster>, threads.clone() as Arc<dyn Poster>],
        true,
    );

    let start = Instant::now();
    let report = multi.publish_post("並行投稿", &PublishOptions::default()).await;
    let elapsed = start.elapsed();

    assert!(elapsed < Duration::from_millis(350), "took {elapsed:?}");
    assert_eq!(report.summary.total, 2);
    assert!(report.results.contains_key("x"));
    assert!(report.results.contains_key("threads"));
    assert_eq!(x.publish_calls.load(Ordering::SeqCst), 1);
    assert_eq!(threads.publish_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_duplicate_posters_publish_once() {
    let first = arc(MockPoster::new("x", 280).dry());
    let second = arc(MockPoster::new("x", 280).dry().behaving(Behavior::Error));
    let threads = arc(MockPoster::new("threads", 500).dry());
    let multi = MultiPoster::from_posters(
        vec![
            first.clone() as Arc<dyn Poster>,
            second.clone() as Arc<dyn Poster>,
            threads.clone() as Arc<dyn Poster>,
        ],
        true,
    );

    assert_eq!(
        multi.platforms(),
        vec![PlatformId::new("x"), PlatformId::new("threads")]
    );

    let report = multi.publish_post("重複", &PublishOptions::default()).await;

    assert_eq!(report.summary.total, 2);
    assert_eq!(report.summary.successful + report.summary.failed, report.summary.total);
    assert!(report.results["x"].success);
    assert_eq!(first.publish_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second.publish_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_validation_failure_publishes_nothing() {
    let x = arc(MockPoster::new("x", 280));
    let threads = arc(MockPoster::new("threads", 500));
    let multi = MultiPoster::from_posters(
        vec![x.clone() as Arc<dyn Poster>, threads.clone() as Arc<dyn Poster>],
        false,
    );

    let text = "あ".repeat(300);
    let report = multi.publish_post(&text, &PublishOptions::default()).await;

    assert!(!report.success);
    assert_eq!(report.error.as_deref(), Some("Validation failed"));
    assert_eq!(
        report.details,
        vec!["X: Post is too long: 300 characters (max: 280)".to_string()]
    );
    assert!(report.results.is_empty());
    assert!(!report.platform_validations["x"].is_valid);
    assert!(report.platform_validations["threads"].is_valid);
    assert_eq!(x.publish_calls.load(Ordering::SeqCst), 0);
    assert_eq!(threads.publish_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_validate_only_stops_after_gate() {
    let x = arc(MockPoster::new("x", 280));
    let multi = MultiPoster::from_posters(vec![x.clone() as Arc<dyn Poster>], false);

    let report = multi
        .publish_post(
            "ok",
            &PublishOptions {
                validate_only: true,
                skip_credential_test: false,
            },
        )
        .await;

    assert!(report.success && report.validated_only);
    assert_eq!(report.length, 2);
    assert_eq!(x.credential_calls.load(Ordering::SeqCst), 0);
    assert_eq!(x.publish_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_failed_credentials_drop_only_that_platform() {
    let x = arc(MockPoster::new("x", 280).bad_credentials());
    let threads = arc(MockPoster::new("threads", 500));
    let multi = MultiPoster::from_posters(
        vec![x.clone() as Arc<dyn Poster>, threads.clone() as Arc<dyn Poster>],
        false,
    );

    let report = multi.publish_post("hello", &PublishOptions::default()).await;

    assert!(report.success);
    assert_eq!(report.summary.total, 1);
    assert!(report.results.contains_key("threads"));
    assert!(!report.results.contains_key("x"));
    assert!(!report.credential_checks["x"].success);
    assert_eq!(x.publish_calls.load(Ordering::SeqCst), 0);

    // The orchestrator itself is untouched by the filter.
    assert_eq!(multi.platforms().len(), 2);
}

#[tokio::test]
async fn test_all_credentials_fail_is_terminal() {
    let x = arc(MockPoster::new("x", 280).bad_credentials());
    let multi = MultiPoster::from_posters(vec![x.clone() as Arc<dyn Poster>], false);

    let report = multi.publish_post("hello", &PublishOptions::default()).await;

    assert!(!report.success);
    assert_eq!(
        report.error.as_deref(),
        Some("No valid API connections available")
    );
    assert_eq!(report.credential_checks.len(), 1);
    assert!(report.results.is_empty());
}

#[tokio::test]
async fn test_skip_credential_test() {
    let x = arc(MockPoster::new("x", 280).bad_credentials());
    let multi = MultiPoster::from_posters(vec![x.clone() as Arc<dyn Poster>], false);

    let report = multi
        .publish_post(
            "hello",
            &PublishOptions {
                validate_only: false,
                skip_credential_test: true,
            },
        )
        .await;

    assert!(report.success);
    assert_eq!(x.credential_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_error_and_panic_are_isolated() {
    let x = arc(MockPoster::new("x", 280).behaving(Behavior::Error));
    let threads = arc(MockPoster::new("threads", 500).behaving(Behavior::Panic));
    let other = arc(MockPoster::new("other", 500));
    let multi = MultiPoster::from_posters(
        vec![
            x as Arc<dyn Poster>,
            threads as Arc<dyn Poster>,
            other as Arc<dyn Poster>,
        ],
        false,
    );

    let report = multi.publish_post("hello", &PublishOptions::default()).await;

    assert!(report.success);
    assert_eq!(report.summary.successful, 1);
    assert_eq!(report.summary.failed, 2);
    assert_eq!(report.summary.platforms.failed, vec!["x", "threads"]);

    let x_result = &report.results["x"];
    assert_eq!(x_result.failure, Some(PublishFailure::Unexpected));
    assert_eq!(x_result.error.as_deref(), Some("Unexpected error"));

    let threads_result = &report.results["threads"];
    assert_eq!(threads_result.failure, Some(PublishFailure::Unexpected));
    assert_eq!(threads_result.details.as_ref().unwrap()["message"], "adapter bug");
}

#[tokio::test]
async fn test_all_platforms_fail() {
    let x = arc(MockPoster::new("x", 280).behaving(Behavior::Fail(PublishFailure::RateLimited)));
    let threads =
        arc(MockPoster::new("threads", 500).behaving(Behavior::Fail(PublishFailure::Duplicate)));
    let multi =
        MultiPoster::from_posters(vec![x as Arc<dyn Poster>, threads as Arc<dyn Poster>], false);

    let report = multi.publish_post("hello", &PublishOptions::default()).await;

    assert!(!report.success);
    assert_eq!(report.summary.failed, 2);
    assert_eq!(report.results["x"].error.as_deref(), Some("Rate limited"));
}

#[tokio::test]
async fn test_dry_run_credentials_are_synthetic() {
    let x = arc(MockPoster::new("x", 280).bad_credentials());
    let multi = MultiPoster::from_posters(vec![x.clone() as Arc<dyn Poster>], true);

    let checks = multi.test_credentials().await;
    assert!(checks["x"].success && checks["x"].dry_run);
    assert_eq!(x.credential_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_registry_construction() {
    let registry = PosterRegistry::with_defaults();
    let settings = PosterSettings::default();
    let platforms = vec![
        PlatformId::new("x"),
        PlatformId::new("threads"),
        PlatformId::new("x"),
        PlatformId::new("mastodon"),
    ];

    let multi = MultiPoster::new(&registry, &platforms, &settings, true).unwrap();
    let info = multi.platform_info();
    assert_eq!(info.configured, vec!["x", "threads", "mastodon"]);
    assert_eq!(info.initialized, vec!["x", "threads"]);
    assert_eq!(info.missing, vec!["mastodon"]);
    assert!(info.dry_run);

    let err = MultiPoster::new(&registry, &platforms, &settings, false).unwrap_err();
    assert!(matches!(
        err.kind(),
        MultiPosterErrorKind::NoPostersInitialized(_)
    ));
}

#[test]
fn test_validate_post_prefixes_errors() {
    let multi = MultiPoster::from_posters(
        vec![
            Arc::new(MockPoster::new("x", 280)) as Arc<dyn Poster>,
            Arc::new(MockPoster::new("threads", 500)) as Arc<dyn Poster>,
        ],
        true,
    );

    let validation = multi.validate_post("");
    assert!(!validation.is_valid);
    assert_eq!(
        validation.errors,
        vec![
            "X: Post text cannot be empty".to_string(),
            "THREADS: Post text cannot be empty".to_string(),
        ]
    );
}
