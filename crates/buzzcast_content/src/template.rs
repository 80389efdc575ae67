//! Deterministic fallback templates.

use buzzcast_core::Article;
use rand::Rng;

/// Fallback templates; `{body}` is replaced with the article body.
pub const FALLBACK_TEMPLATES: &[&str] = &[
    "{body}",
    "【注目】{body}",
    "{body}\n気になるニュースです。",
];

/// Chooses which fallback template to render.
pub trait TemplateSelector: Send + Sync {
    /// Pick an index in `0..count`; `count` is never zero.
    fn select(&self, count: usize) -> usize;
}

/// Always picks the same template, wrapping out-of-range indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedTemplate(pub usize);

impl TemplateSelector for FixedTemplate {
    fn select(&self, count: usize) -> usize {
        self.0 % count
    }
}

/// Picks a template uniformly at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTemplate;

impl TemplateSelector for RandomTemplate {
    fn select(&self, count: usize) -> usize {
        rand::thread_rng().gen_range(0..count)
    }
}

/// Render the selected template with the snippet, or the title when the
/// snippet is blank.
///
/// # Examples
///
/// ```
/// use buzzcast_core::Article;
/// use buzzcast_content::{FixedTemplate, render_fallback};
///
/// let article = Article::builder().title("円安が進行").build().unwrap();
/// assert_eq!(render_fallback(&article, &FixedTemplate(1)), "【注目】円安が進行");
/// ```
pub fn render_fallback(article: &Article, selector: &dyn TemplateSelector) -> String {
    let snippet = article.content_snippet().trim();
    let body = if snippet.is_empty() {
        article.title().trim()
    } else {
        snippet
    };
    let template = FALLBACK_TEMPLATES[selector.select(FALLBACK_TEMPLATES.len())];
    template.replace("{body}", body)
}
