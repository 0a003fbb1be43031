//! Subscriber setup.

use super::{tracer, SERVICE_NAME, TRACE_FILE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when `trace_level` is not configured.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber: an `EnvFilter` at the configured level
/// feeding an OpenTelemetry layer that exports to the trace file.
///
/// Tracing is optional. If the data directory cannot be created the plugin
/// runs without a subscriber. Only the first call per thread takes effect.
///
/// ```no_run
/// use blognest::observability::init_tracing;
/// use blognest::Config;
///
/// init_tracing(&Config {
///     trace_level: Some("debug".to_string()),
///     ..Config::default()
/// });
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::registry().with(filter).with(otel_layer).try_init();
}
