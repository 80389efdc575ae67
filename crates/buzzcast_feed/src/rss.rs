//! HTTP feed source.

use crate::{FeedConfig, FeedSpec, parse_feed};
use async_trait::async_trait;
use buzzcast_core::Article;
use buzzcast_error::{FeedError, FeedErrorKind, FeedResult};
use buzzcast_interface::FeedSource;
use chrono::Utc;
use reqwest::Client;
use tracing::{debug, instrument};

/// One RSS or Atom feed fetched over HTTP.
#[derive(Debug, Clone)]
pub struct RssFeed {
    client: Client,
    spec: FeedSpec,
    limit: usize,
}

impl RssFeed {
    /// Create a feed source sharing `client`.
    pub fn new(client: Client, spec: FeedSpec, limit: usize) -> Self {
        Self {
            client,
            spec,
            limit,
        }
    }

    /// Build the HTTP client used for every feed.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn client(config: &FeedConfig) -> Result<Client, reqwest::Error> {
        Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
    }

    /// The feed this source reads.
    pub fn spec(&self) -> &FeedSpec {
        &self.spec
    }
}

#[async_trait]
impl FeedSource for RssFeed {
    #[instrument(skip(self), fields(url = %self.spec.url))]
    async fn fetch(&self) -> FeedResult<Vec<Article>> {
        let fetch_error = |message: String| {
            FeedError::new(FeedErrorKind::Fetch {
                url: self.spec.url.clone(),
                message,
            })
        };

        let response = self
            .client
            .get(&self.spec.url)
            .header(
                reqwest::header::ACCEPT,
                "application/rss+xml, application/atom+xml, application/xml, text/xml",
            )
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::new(FeedErrorKind::Status {
                url: self.spec.url.clone(),
                status: status.as_u16(),
            }));
        }

        let body = response.bytes().await.map_err(|e| fetch_error(e.to_string()))?;
        debug!(bytes = body.len(), "Fetched feed");

        parse_feed(&body, &self.spec.url, &self.spec.category, self.limit, Utc::now())
    }

    fn name(&self) -> &str {
        &self.spec.url
    }
}
