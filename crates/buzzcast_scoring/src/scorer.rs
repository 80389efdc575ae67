//! The buzz scorer.

use crate::{GroupKind, KEYWORD_GROUPS, KeywordGroup, ScoringWeights, normalize};
use buzzcast_core::{Article, Category, ScoredArticle};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument};

static NUMERIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:[億兆]円|%|倍)").expect("valid numeric pattern"));

const MAX_TOPICS: usize = 3;

/// A keyword group with its keywords pre-normalized.
#[derive(Debug, Clone)]
struct PreparedGroup {
    group: KeywordGroup,
    normalized: Vec<String>,
}

/// Deterministic rule-based scorer.
///
/// # Examples
///
/// ```
/// use buzzcast_core::{Article, Category};
/// use buzzcast_scoring::BuzzScorer;
///
/// let article = Article::builder()
///     .title("副業収入が2倍に、円安で家計も揺れる")
///     .content_snippet("ふるさと納税や確定申告の違いを整理する動きが出ている")
///     .category(Category::Business)
///     .build()
///     .unwrap();
///
/// let scored = BuzzScorer::default().score(&article);
/// assert_eq!(*scored.buzz_score(), 14);
/// assert_eq!(scored.trending_topics(), &["#資産形成", "#家計管理", "#キャリア"]);
/// ```
#[derive(Debug, Clone)]
pub struct BuzzScorer {
    groups: Vec<PreparedGroup>,
    weights: ScoringWeights,
}

impl Default for BuzzScorer {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

impl BuzzScorer {
    /// Create a scorer over the built-in keyword table.
    pub fn new(weights: ScoringWeights) -> Self {
        Self::with_groups(KEYWORD_GROUPS, weights)
    }

    /// Create a scorer over a custom keyword table.
    pub fn with_groups(groups: &[KeywordGroup], weights: ScoringWeights) -> Self {
        let groups = groups
            .iter()
            .map(|group| PreparedGroup {
                group: *group,
                normalized: group.keywords.iter().map(|k| normalize(k)).collect(),
            })
            .collect();
        Self { groups, weights }
    }

    /// The active weights.
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score one article.
    #[instrument(skip_all, fields(title = %article.title()))]
    pub fn score(&self, article: &Article) -> ScoredArticle {
        let scan_text = normalize(&format!("{}{}", article.title(), article.content_snippet()));

        let mut score = 0;
        let mut matched_keywords = Vec::new();
        let mut topics: Vec<String> = Vec::new();
        let mut theme_matched = false;
        let mut intent_matched = false;

        for prepared in &self.groups {
            let weight = match prepared.group.kind {
                GroupKind::Theme => self.weights.theme,
                GroupKind::Intent => self.weights.intent,
            };
            let mut group_matched = false;

            for (literal, normalized) in prepared.group.keywords.iter().zip(&prepared.normalized) {
                if scan_text.contains(normalized.as_str()) {
                    score += weight;
                    matched_keywords.push((*literal).to_string());
                    group_matched = true;
                }
            }

            if !group_matched {
                continue;
            }
            match prepared.group.kind {
                GroupKind::Theme => theme_matched = true,
                GroupKind::Intent => intent_matched = true,
            }
            if let Some(tag) = prepared.group.tag {
                if topics.len() < MAX_TOPICS && !topics.iter().any(|t| t == tag) {
                    topics.push(tag.to_string());
                }
            }
        }

        score += match article.category() {
            Category::Ai => self.weights.category_ai,
            Category::Business => self.weights.category_business,
            _ => 0,
        };

        if NUMERIC_PATTERN.is_match(&scan_text) {
            score += self.weights.numeric;
        }

        if theme_matched && intent_matched {
            score += self.weights.cross_theme;
        }

        debug!(
            score,
            keywords = matched_keywords.len(),
            topics = ?topics,
            "Scored article"
        );

        ScoredArticle::new(article.clone(), score, matched_keywords, topics)
    }

    /// Score a batch, preserving input order.
    pub fn score_all(&self, articles: &[Article]) -> Vec<ScoredArticle> {
        articles.iter().map(|article| self.score(article)).collect()
    }
}
