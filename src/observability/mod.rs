//! Tracing with OpenTelemetry spans exported to a local file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer → FileSpanExporter → OTLP JSON lines
//! ```
//!
//! Spans land in `~/.local/share/zellij/blognest/blognest-otlp.json`, one OTLP
//! JSON document per exported batch. The file rotates at 10 MB and keeps three
//! backups.
//!
//! The filter level comes from the `trace_level` plugin option and defaults to
//! `info`.
//!
//! ```rust
//! use blognest::observability::init_tracing;
//! use blognest::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;

/// `service.name` resource attribute and instrumentation scope name.
pub const SERVICE_NAME: &str = "BlogNest";

/// Trace file name inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "blognest-otlp.json";
