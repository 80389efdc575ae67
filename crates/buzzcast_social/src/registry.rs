//! Platform registry.

use crate::{PosterSettings, ThreadsPoster, XPoster};
use buzzcast_core::PlatformId;
use buzzcast_error::PosterResult;
use buzzcast_interface::Poster;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Builds a poster from settings and the dry-run flag.
pub type PosterFactory =
    Box<dyn Fn(&PosterSettings, bool) -> PosterResult<Arc<dyn Poster>> + Send + Sync>;

/// Maps platform ids to poster factories.
#[derive(Default)]
pub struct PosterRegistry {
    factories: BTreeMap<PlatformId, PosterFactory>,
}

impl std::fmt::Debug for PosterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PosterRegistry")
            .field("platforms", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl PosterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with `x` and `threads` registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("x", |settings: &PosterSettings, dry_run| {
            XPoster::new(&settings.x, dry_run).map(|p| Arc::new(p) as Arc<dyn Poster>)
        });
        registry.register("threads", |settings: &PosterSettings, dry_run| {
            ThreadsPoster::new(&settings.threads, dry_run).map(|p| Arc::new(p) as Arc<dyn Poster>)
        });
        registry
    }

    /// Register a factory, replacing any previous one for the same id.
    #[tracing::instrument(skip_all)]
    pub fn register<F>(&mut self, platform: impl Into<PlatformId>, factory: F)
    where
        F: Fn(&PosterSettings, bool) -> PosterResult<Arc<dyn Poster>> + Send + Sync + 'static,
    {
        let platform = platform.into();

        if self.factories.contains_key(&platform) {
            tracing::warn!(platform = %platform, "Platform already registered, overwriting previous factory");
        } else {
            tracing::debug!(platform = %platform, "Registering platform");
        }

        self.factories.insert(platform, Box::new(factory));
    }

    /// Build the poster for `platform`, or `None` if it is not registered.
    pub fn build(
        &self,
        platform: &PlatformId,
        settings: &PosterSettings,
        dry_run: bool,
    ) -> Option<PosterResult<Arc<dyn Poster>>> {
        self.factories
            .get(platform)
            .map(|factory| factory(settings, dry_run))
    }

    /// Whether a factory is registered for `platform`.
    pub fn contains(&self, platform: &PlatformId) -> bool {
        self.factories.contains_key(platform)
    }

    /// Registered platform ids, sorted.
    pub fn platforms(&self) -> Vec<PlatformId> {
        self.factories.keys().cloned().collect()
    }
}
