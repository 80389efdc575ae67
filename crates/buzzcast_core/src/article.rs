//! News article input types.

use buzzcast_error::{BuilderError, BuilderErrorKind};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Category a feed assigns to its articles.
///
/// Serializes as a lowercase string; unknown names survive as [`Category::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Artificial intelligence
    Ai,
    /// Business and economy
    Business,
    /// Technology
    Tech,
    /// General news
    #[default]
    News,
    /// Any other category name
    Other(String),
}

impl Category {
    /// The category name.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Ai => "ai",
            Category::Business => "business",
            Category::Tech => "tech",
            Category::News => "news",
            Category::Other(name) => name,
        }
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        match name.trim().to_lowercase().as_str() {
            "ai" => Category::Ai,
            "business" => Category::Business,
            "tech" => Category::Tech,
            "news" => Category::News,
            _ => Category::Other(name),
        }
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Category::from(name.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A news item produced by a feed.
///
/// # Examples
///
/// ```
/// use buzzcast_core::{Article, Category};
///
/// let article = Article::builder()
///     .title("円安が進行")
///     .content_snippet("為替市場で円安が進んでいる")
///     .category(Category::Business)
///     .build()
///     .unwrap();
///
/// assert_eq!(article.title(), "円安が進行");
/// assert_eq!(article.category(), &Category::Business);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Headline.
    title: String,

    /// Summary text with markup stripped.
    #[builder(default)]
    #[serde(default)]
    content_snippet: String,

    /// Feed category.
    #[builder(default)]
    #[serde(default)]
    category: Category,

    /// Human-readable feed name.
    #[builder(default)]
    #[serde(default)]
    source: String,

    /// Canonical link.
    #[builder(default)]
    #[serde(default)]
    link: String,

    /// Publication time; absent dates are filled with the fetch time.
    #[builder(default)]
    #[serde(default)]
    pub_date: DateTime<Utc>,
}

impl Article {
    /// Creates a new article builder.
    pub fn builder() -> ArticleBuilder {
        ArticleBuilder::default()
    }
}

impl ArticleBuilder {
    /// Build the article.
    ///
    /// # Errors
    ///
    /// Returns an error if the title is missing.
    pub fn build(&self) -> Result<Article, BuilderError> {
        self.build_internal().map_err(|e| {
            let kind = match e {
                ArticleBuilderError::UninitializedField(field) => BuilderErrorKind::MissingField {
                    target: "Article",
                    field,
                },
                ArticleBuilderError::ValidationError(message) => BuilderErrorKind::Invalid {
                    target: "Article",
                    message,
                },
            };
            BuilderError::new(kind)
        })
    }
}
