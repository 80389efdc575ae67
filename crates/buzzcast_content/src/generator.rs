//! Post generation with template fallback.

use crate::{
    FixedTemplate, TemplateSelector, TruncateOptions, build_prompt, render_fallback, truncate,
};
use buzzcast_core::{GenerationPath, PostText, ScoredArticle, text_length};
use buzzcast_interface::TextGenerator;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Budget for one generated post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationLimits {
    /// Maximum body length in characters.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Append `"\n" + link` after truncation; not counted in the budget.
    #[serde(default)]
    pub append_link: bool,
    /// Maximum `。`-terminated sentences.
    #[serde(default = "default_max_sentences")]
    pub max_sentences: usize,
}

fn default_max_length() -> usize {
    140
}

fn default_max_sentences() -> usize {
    2
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            append_link: false,
            max_sentences: default_max_sentences(),
        }
    }
}

/// Produces post text for a scored article.
///
/// The generator is optional; without one every post takes the fallback
/// path. The generator is called at most once per post and never retried
/// here.
#[derive(Clone)]
pub struct ContentGenerator {
    generator: Option<Arc<dyn TextGenerator>>,
    selector: Arc<dyn TemplateSelector>,
}

impl std::fmt::Debug for ContentGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentGenerator")
            .field("generator", &self.generator.as_ref().map(|g| g.name().to_string()))
            .finish_non_exhaustive()
    }
}

impl ContentGenerator {
    /// Create a generator; fallbacks use the first template.
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            generator,
            selector: Arc::new(FixedTemplate(0)),
        }
    }

    /// Use `selector` to choose fallback templates.
    pub fn with_selector(mut self, selector: impl TemplateSelector + 'static) -> Self {
        self.selector = Arc::new(selector);
        self
    }

    /// Whether a generation backend is configured.
    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Produce the post for `scored`.
    #[instrument(skip_all, fields(title = %scored.article().title(), max_length = limits.max_length))]
    pub async fn generate(&self, scored: &ScoredArticle, limits: &GenerationLimits) -> PostText {
        let generated = match &self.generator {
            Some(generator) => {
                let prompt = build_prompt(scored, limits.max_length, limits.max_sentences);
                generator
                    .generate_text(&prompt)
                    .await
                    .map(|text| clean_generated(&text))
                    .filter(|text| !text.is_empty())
            }
            None => {
                debug!("No text generator configured");
                None
            }
        };

        let (body, path) = match generated {
            Some(text) => (text, GenerationPath::Generated),
            None => (
                render_fallback(scored.article(), self.selector.as_ref()),
                GenerationPath::Fallback,
            ),
        };

        self.finish(scored, &body, path, limits)
    }

    /// Produce the fallback post without consulting the generator.
    pub fn fallback(&self, scored: &ScoredArticle, limits: &GenerationLimits) -> PostText {
        let body = render_fallback(scored.article(), self.selector.as_ref());
        self.finish(scored, &body, GenerationPath::Fallback, limits)
    }

    fn finish(
        &self,
        scored: &ScoredArticle,
        body: &str,
        path: GenerationPath,
        limits: &GenerationLimits,
    ) -> PostText {
        let options = TruncateOptions::sentences(limits.max_sentences);
        let mut text = truncate(body, limits.max_length, &options);
        let length = text_length(&text);

        let link = scored.article().link().trim();
        if limits.append_link && !link.is_empty() {
            text = format!("{}\n{}", text, link);
        }

        info!(%path, length, "Post text ready");
        PostText::new(text, limits.max_length, path)
    }
}

/// Trim and strip one layer of wrapping quotes.
fn clean_generated(text: &str) -> String {
    const PAIRS: &[(char, char)] = &[('"', '"'), ('“', '”'), ('「', '」'), ('\'', '\'')];

    let trimmed = text.trim();
    for (open, close) in PAIRS {
        if let Some(inner) = trimmed
            .strip_prefix(*open)
            .and_then(|rest| rest.strip_suffix(*close))
        {
            return inner.trim().to_string();
        }
    }
    trimmed.to_string()
}
