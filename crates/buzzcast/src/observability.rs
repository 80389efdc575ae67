//! OpenTelemetry bridge for the `buzzcast` binary.
//!
//! Spans from every stage (feed fetch, scoring, generation, each platform
//! publish) are exported to stdout next to the regular log lines.

use opentelemetry::{KeyValue, global, trace::TracerProvider};
use opentelemetry_sdk::{Resource, trace::SdkTracerProvider};
use opentelemetry_stdout::SpanExporter;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Telemetry settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Service name attached to every span.
    pub service_name: String,
    /// Service version.
    pub service_version: String,
    /// Filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// One JSON object per log line.
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// Settings for `service_name` at `info`.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    /// Use `debug` instead of `info`.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.log_level = if verbose { "debug" } else { "info" }.to_string();
        self
    }

    /// Enable JSON logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

/// Install the tracing subscriber with an OpenTelemetry layer.
///
/// Keep the returned provider and pass it to [`shutdown_observability`]
/// before exit so buffered spans are flushed.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_observability(
    config: &ObservabilityConfig,
) -> Result<SdkTracerProvider, Box<dyn std::error::Error + Send + Sync>> {
    let resource = Resource::builder()
        .with_service_name(config.service_name.clone())
        .with_attributes(vec![KeyValue::new(
            "service.version",
            config.service_version.clone(),
        )])
        .build();

    let provider = SdkTracerProvider::builder()
        .with_simple_exporter(SpanExporter::default())
        .with_resource(resource)
        .build();
    global::set_tracer_provider(provider.clone());

    let tracer = provider.tracer(config.service_name.clone());
    let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()?;

    Ok(provider)
}

/// Flush and stop the tracer provider.
pub fn shutdown_observability(provider: SdkTracerProvider) {
    if let Err(e) = provider.shutdown() {
        eprintln!("Failed to flush telemetry: {e}");
    }
}
