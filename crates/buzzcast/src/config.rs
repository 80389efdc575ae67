//! Layered configuration.
//!
//! Sources, later ones winning:
//! 1. Bundled defaults (include_str! from buzzcast.toml)
//! 2. `~/.config/buzzcast/buzzcast.toml`
//! 3. `./buzzcast.toml`
//! 4. An explicit file (`--config`)
//! 5. `BUZZCAST__SECTION__KEY` environment variables
//!
//! Credential environment variables (`GEMINI_API_KEY`, `X_ACCESS_TOKEN`, ...)
//! fill settings the files leave empty. They are applied once, here, and
//! never consulted again.

use buzzcast_content::GenerationLimits;
use buzzcast_error::{BuzzcastError, BuzzcastResult, ConfigError, ConfigErrorKind};
use buzzcast_feed::FeedConfig;
use buzzcast_models::GeminiConfig;
use buzzcast_rate_limit::PacingConfig;
use buzzcast_scoring::ScoringWeights;
use buzzcast_social::PosterSettings;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../buzzcast.toml");

/// Text generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Gemini API key; without one every post uses a template.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Explicit model name.
    #[serde(default)]
    pub model: Option<String>,
    /// Deployment environment, used to pick the default model.
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Output token cap.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// Gemini API base URL.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Retries for transient failures.
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,
    /// Request pacing.
    #[serde(default)]
    pub pacing: PacingConfig,
    /// Post body budget in characters.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Maximum `。`-terminated sentences.
    #[serde(default = "default_max_sentences")]
    pub max_sentences: usize,
    /// Append the article link after the body.
    #[serde(default)]
    pub append_link: bool,
}

fn default_environment() -> String {
    "production".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    512
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> usize {
    2
}

fn default_max_length() -> usize {
    140
}

fn default_max_sentences() -> usize {
    2
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: None,
            environment: default_environment(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            base_url: None,
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            pacing: PacingConfig::default(),
            max_length: default_max_length(),
            max_sentences: default_max_sentences(),
            append_link: false,
        }
    }
}

impl GenerationSettings {
    /// Gemini client settings.
    pub fn gemini(&self) -> GeminiConfig {
        let defaults = GeminiConfig::default();
        GeminiConfig {
            model: self.model.clone(),
            environment: self.environment.clone(),
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            timeout_secs: self.timeout_secs,
            max_retries: self.max_retries,
        }
    }

    /// Post budget.
    pub fn limits(&self) -> GenerationLimits {
        GenerationLimits {
            max_length: self.max_length,
            append_link: self.append_link,
            max_sentences: self.max_sentences,
        }
    }
}

/// Which platforms to publish to and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishSettings {
    /// Platform ids.
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,
    /// Skip every network effect.
    #[serde(default)]
    pub dry_run: bool,
    /// Skip the credential pre-flight.
    #[serde(default)]
    pub skip_credential_test: bool,
}

fn default_platforms() -> Vec<String> {
    vec!["x".to_string(), "threads".to_string()]
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            platforms: default_platforms(),
            dry_run: false,
            skip_credential_test: false,
        }
    }
}

/// Post backup settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupSettings {
    /// Write a JSON record of every run.
    #[serde(default = "default_backup_enabled")]
    pub enabled: bool,
    /// Directory for backup files.
    #[serde(default = "default_backup_directory")]
    pub directory: PathBuf,
}

fn default_backup_enabled() -> bool {
    true
}

fn default_backup_directory() -> PathBuf {
    PathBuf::from("posts")
}

impl Default for BackupSettings {
    fn default() -> Self {
        Self {
            enabled: default_backup_enabled(),
            directory: default_backup_directory(),
        }
    }
}

/// Top-level buzzcast configuration.
///
/// # Example
///
/// ```no_run
/// use buzzcast::BuzzcastConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = BuzzcastConfig::load(None)?;
/// println!("Publishing to {:?}", config.publish.platforms);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuzzcastConfig {
    /// Scoring weights.
    #[serde(default)]
    pub scoring: ScoringWeights,
    /// Text generation.
    #[serde(default)]
    pub generation: GenerationSettings,
    /// Feed retrieval.
    #[serde(default)]
    pub feeds: FeedConfig,
    /// Platform credentials and endpoints.
    #[serde(default)]
    pub platforms: PosterSettings,
    /// Publishing.
    #[serde(default)]
    pub publish: PublishSettings,
    /// Backups.
    #[serde(default)]
    pub backup: BackupSettings,
}

const BUNDLED_LAYER: &str = "bundled defaults";
const LAYERED: &str = "layered sources";

fn read_error(layer: impl Into<String>, err: config::ConfigError) -> BuzzcastError {
    BuzzcastError::from(ConfigError::new(ConfigErrorKind::Read {
        layer: layer.into(),
        message: err.to_string(),
    }))
}

fn parse_error(layer: impl Into<String>, err: config::ConfigError) -> BuzzcastError {
    BuzzcastError::from(ConfigError::new(ConfigErrorKind::Parse {
        layer: layer.into(),
        message: err.to_string(),
    }))
}

impl BuzzcastConfig {
    /// The bundled defaults alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file does not parse.
    pub fn bundled() -> BuzzcastResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .map_err(|e| read_error(BUNDLED_LAYER, e))?
            .try_deserialize()
            .map_err(|e| parse_error(BUNDLED_LAYER, e))
    }

    /// Load bundled defaults layered with a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> BuzzcastResult<Self> {
        debug!("Loading configuration from file");
        let layer = path.as_ref().display().to_string();

        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| read_error(layer.as_str(), e))?
            .try_deserialize()
            .map_err(|e| parse_error(layer.as_str(), e))
    }

    /// Load every layer, then apply credential fallbacks from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or `explicit`
    /// does not exist.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> BuzzcastResult<Self> {
        debug!("Loading configuration: env > explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/buzzcast/buzzcast.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("buzzcast").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("BUZZCAST")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("publish.platforms"),
        );

        let config: Self = builder
            .build()
            .map_err(|e| read_error(LAYERED, e))?
            .try_deserialize()
            .map_err(|e| parse_error(LAYERED, e))?;

        Ok(apply_env_fallbacks(config, |key| std::env::var(key).ok()))
    }
}

/// Fill empty settings from credential environment variables.
///
/// `lookup` returns the value of a variable; blank values count as unset.
/// Settings already present in configuration win, except the deployment
/// environment, which `BUZZCAST_ENV` or `NODE_ENV` always override.
///
/// # Examples
///
/// ```
/// use buzzcast::{BuzzcastConfig, apply_env_fallbacks};
///
/// let config = apply_env_fallbacks(BuzzcastConfig::default(), |key| match key {
///     "X_ACCESS_TOKEN" => Some("token".to_string()),
///     _ => None,
/// });
/// assert_eq!(config.platforms.x.access_token.as_deref(), Some("token"));
/// ```
pub fn apply_env_fallbacks(
    mut config: BuzzcastConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> BuzzcastConfig {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let fill = |slot: &mut Option<String>, key: &str| {
        if slot.as_deref().is_none_or(|v| v.trim().is_empty()) {
            if let Some(value) = get(key) {
                *slot = Some(value);
            }
        }
    };

    fill(&mut config.generation.api_key, "GEMINI_API_KEY");
    fill(&mut config.generation.model, "GEMINI_MODEL");
    if let Some(environment) = get("BUZZCAST_ENV").or_else(|| get("NODE_ENV")) {
        config.generation.environment = environment;
    }

    fill(&mut config.platforms.x.access_token, "X_ACCESS_TOKEN");
    fill(&mut config.platforms.x.username, "X_USERNAME");

    let threads = &mut config.platforms.threads;
    fill(&mut threads.access_token, "THREADS_ACCESS_TOKEN");
    fill(&mut threads.user_id, "THREADS_USER_ID");
    fill(&mut threads.app_id, "THREADS_APP_ID");
    fill(&mut threads.app_secret, "THREADS_APP_SECRET");

    if get("DRY_RUN").is_some_and(|v| v.eq_ignore_ascii_case("true")) {
        config.publish.dry_run = true;
    }

    config
}
