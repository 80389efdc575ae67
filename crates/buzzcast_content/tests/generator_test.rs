//! Tests for post generation and fallback.

use async_trait::async_trait;
use buzzcast_content::{ContentGenerator, FixedTemplate, GenerationLimits, build_prompt};
use buzzcast_core::{Article, Category, GenerationPath, ScoredArticle, text_length};
use buzzcast_interface::TextGenerator;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct MockGenerator {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl MockGenerator {
    fn new(reply: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.map(str::to_string),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate_text(&self, _prompt: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }

    fn name(&self) -> &str {
        "mock"
    }
}

fn scored(title: &str, snippet: &str) -> ScoredArticle {
    let article = Article::builder()
        .title(title)
        .content_snippet(snippet)
        .category(Category::Business)
        .source("テスト新聞")
        .link("https://example.com/a")
        .build()
        .unwrap();
    ScoredArticle::new(article, 3, vec!["円安".to_string()], vec!["#資産形成".to_string()])
}

fn limits(max_length: usize) -> GenerationLimits {
    GenerationLimits {
        max_length,
        ..GenerationLimits::default()
    }
}

#[tokio::test]
async fn test_generated_text_is_used() {
    let mock = MockGenerator::new(Some("円安が進んでいます。家計への影響に注意。"));
    let generator = ContentGenerator::new(Some(mock.clone() as Arc<dyn TextGenerator>));

    let post = generator.generate(&scored("円安", "為替が動いた"), &limits(140)).await;

    assert_eq!(*post.path(), GenerationPath::Generated);
    assert_eq!(post.text(), "円安が進んでいます。家計への影響に注意。");
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn test_generated_text_is_capped_to_two_sentences() {
    let mock = MockGenerator::new(Some("一文目。二文目。三文目。四文目。"));
    let generator = ContentGenerator::new(Some(mock as Arc<dyn TextGenerator>));

    let post = generator.generate(&scored("t", "s"), &limits(140)).await;

    assert_eq!(post.text(), "一文目。二文目。");
}

#[tokio::test]
async fn test_generated_text_is_truncated() {
    let long = "あ".repeat(300);
    let mock = MockGenerator::new(Some(&long));
    let generator = ContentGenerator::new(Some(mock as Arc<dyn TextGenerator>));

    let post = generator.generate(&scored("t", "s"), &limits(50)).await;

    assert!(text_length(post.text()) <= 50);
    assert_eq!(*post.max_length(), 50);
}

#[tokio::test]
async fn test_none_falls_back_to_snippet() {
    let mock = MockGenerator::new(None);
    let generator = ContentGenerator::new(Some(mock.clone() as Arc<dyn TextGenerator>));

    let post = generator.generate(&scored("タイトル", "要約の本文。"), &limits(140)).await;

    assert_eq!(*post.path(), GenerationPath::Fallback);
    assert_eq!(post.text(), "要約の本文。");
    assert_eq!(mock.calls(), 1, "fallback must not call the generator again");
}

#[tokio::test]
async fn test_blank_reply_falls_back() {
    let mock = MockGenerator::new(Some("   "));
    let generator = ContentGenerator::new(Some(mock as Arc<dyn TextGenerator>));

    let post = generator.generate(&scored("タイトル", ""), &limits(140)).await;

    assert_eq!(*post.path(), GenerationPath::Fallback);
    assert_eq!(post.text(), "タイトル");
}

#[tokio::test]
async fn test_missing_generator_is_normal_fallback() {
    let generator = ContentGenerator::new(None).with_selector(FixedTemplate(1));
    assert!(!generator.has_generator());

    let post = generator.generate(&scored("タイトル", "本文。"), &limits(140)).await;

    assert_eq!(*post.path(), GenerationPath::Fallback);
    assert_eq!(post.text(), "【注目】本文。");
}

#[tokio::test]
async fn test_fallback_respects_budget() {
    let generator = ContentGenerator::new(None);
    let snippet = "長い要約".repeat(100);

    let post = generator.generate(&scored("t", &snippet), &limits(30)).await;

    assert!(text_length(post.text()) <= 30);
}

#[tokio::test]
async fn test_link_is_appended_after_truncation() {
    let generator = ContentGenerator::new(None);
    let limits = GenerationLimits {
        max_length: 10,
        append_link: true,
        max_sentences: 2,
    };

    let post = generator.generate(&scored("t", &"あ".repeat(40)), &limits).await;
    let (body, link) = post.text().split_once('\n').unwrap();

    assert!(text_length(body) <= 10);
    assert_eq!(link, "https://example.com/a");
}

#[test]
fn test_fallback_is_deterministic_with_fixed_selector() {
    let generator = ContentGenerator::new(None).with_selector(FixedTemplate(2));
    let article = scored("タイトル", "本文。");

    let first = generator.fallback(&article, &limits(140));
    let second = generator.fallback(&article, &limits(140));

    assert_eq!(first, second);
    assert_eq!(first.text(), "本文。\n気になるニュースです。");
}

#[test]
fn test_prompt_carries_article_and_limits() {
    let prompt = build_prompt(&scored("円安が進行", "為替市場の動き"), 140, 2);

    assert!(prompt.contains("円安が進行"));
    assert!(prompt.contains("為替市場の動き"));
    assert!(prompt.contains("テスト新聞"));
    assert!(prompt.contains("BUSINESS"));
    assert!(prompt.contains("140文字以内"));
    assert!(prompt.contains("2文以内"));
    assert!(prompt.contains("ハッシュタグ"));
}
