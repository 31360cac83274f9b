//! Log output and optional OTLP trace export.
//!
//! Local logging is always on. Export is added on top when `OTEL_ENABLED` is
//! truthy or an OTLP endpoint is configured; an exporter that cannot be built
//! degrades to local logging with a warning.

use std::env;

use once_cell::sync::OnceCell;
use opentelemetry::global;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_otlp::{ExporterBuildError, WithExportConfig};
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use opentelemetry_semantic_conventions::resource::{SERVICE_NAME, SERVICE_VERSION};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::build_info::BuildInfo;

const DEFAULT_LOG_FILTER: &str = "pipeline_hardening_poc=info,tower_http=debug";
const DEFAULT_SERVICE_NAME: &str = "pipeline-hardening-poc";
const TRACER_NAME: &str = "pipeline_hardening_poc";

static TRACER_PROVIDER: OnceCell<SdkTracerProvider> = OnceCell::new();

/// Export settings resolved from `OTEL_*` and `APP_ENV`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportConfig {
    endpoint: Option<String>,
    enabled: bool,
    service_name: String,
    environment: String,
}

impl ExportConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        let flagged = lookup("OTEL_ENABLED")
            .map(|value| matches!(value.as_str(), "true" | "1" | "yes"))
            .unwrap_or(false);

        Self {
            enabled: flagged || endpoint.is_some(),
            endpoint,
            service_name: lookup("OTEL_SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            environment: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    fn tracer_provider(&self, build: &BuildInfo) -> Result<SdkTracerProvider, ExporterBuildError> {
        let mut exporter = opentelemetry_otlp::SpanExporter::builder().with_http();
        if let Some(endpoint) = &self.endpoint {
            exporter = exporter.with_endpoint(endpoint.clone());
        }

        let resource = Resource::builder()
            .with_attribute(KeyValue::new(SERVICE_NAME, self.service_name.clone()))
            .with_attribute(KeyValue::new(SERVICE_VERSION, build.version))
            .with_attribute(KeyValue::new(
                "deployment.environment.name",
                self.environment.clone(),
            ))
            .build();

        Ok(SdkTracerProvider::builder()
            .with_batch_exporter(exporter.build()?)
            .with_resource(resource)
            .build())
    }
}

/// Installs the global subscriber: env filter and fmt output, plus an
/// OpenTelemetry layer when export is configured.
pub fn init_tracing(build: &BuildInfo) {
    let config = ExportConfig::from_env();

    let (provider, export_error) = if config.enabled() {
        match config.tracer_provider(build) {
            Ok(provider) => (Some(provider), None),
            Err(err) => (None, Some(err)),
        }
    } else {
        (None, None)
    };

    let otel_layer = provider.map(|provider| {
        global::set_text_map_propagator(TraceContextPropagator::new());
        global::set_tracer_provider(provider.clone());
        let tracer = provider.tracer(TRACER_NAME);
        let _ = TRACER_PROVIDER.set(provider);
        OpenTelemetryLayer::new(tracer)
    });

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .with(otel_layer)
        .init();

    if let Some(err) = export_error {
        tracing::warn!(error = %err, "OTLP exporter unavailable, logging locally only");
    } else if TRACER_PROVIDER.get().is_some() {
        tracing::info!(service = config.service_name(), "OTLP trace export enabled");
    }
}

/// Flushes pending spans; a no-op when export was never enabled.
pub fn shutdown_tracing() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(err) = provider.shutdown() {
            tracing::warn!("Failed to shutdown tracer provider: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ExportConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ExportConfig::from_lookup(move |name| vars.get(name).cloned())
    }

    #[test]
    fn export_disabled_by_default() {
        let config = config(&[]);
        assert!(!config.enabled());
        assert_eq!(config.service_name(), "pipeline-hardening-poc");
    }

    #[test]
    fn endpoint_enables_export() {
        assert!(config(&[("OTEL_EXPORTER_OTLP_ENDPOINT", "http://collector:4318")]).enabled());
    }

    #[test]
    fn blank_endpoint_does_not_enable_export() {
        assert!(!config(&[("OTEL_EXPORTER_OTLP_ENDPOINT", "   ")]).enabled());
    }

    #[test]
    fn enabled_flag_accepts_truthy_values() {
        for value in ["true", "1", "yes"] {
            assert!(config(&[("OTEL_ENABLED", value)]).enabled(), "{value}");
        }
        assert!(!config(&[("OTEL_ENABLED", "no")]).enabled());
    }

    #[test]
    fn service_name_is_overridable() {
        let config = config(&[("OTEL_SERVICE_NAME", "pipeline-staging")]);
        assert_eq!(config.service_name(), "pipeline-staging");
    }
}
