//! Worker thread that reads seed collections off the render loop.
//!
//! Zellij spawns the worker on its own thread; requests arrive as JSON
//! payloads and each one is answered with exactly one [`WorkerResponse`].

use crate::domain::error::{BlognestError, Result};
use crate::domain::Blog;
use crate::infrastructure::paths;
use crate::storage::{BlogSource, BuiltinBlogSource, JsonBlogSource};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker state. Holds nothing between requests: every load re-reads its source.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct BlognestWorker {
    /// Number of requests answered, for trace attributes.
    #[serde(skip)]
    handled: u64,
}

impl BlognestWorker {
    /// Picks the source for a `LoadBlogs` request.
    fn source_for(path: Option<&str>) -> Box<dyn BlogSource> {
        match path {
            Some(path) if !path.trim().is_empty() => Box::new(JsonBlogSource::new(path)),
            _ => Box::new(BuiltinBlogSource),
        }
    }

    /// Turns a load result into a response, logging either outcome.
    fn handle_load_result(source: &str, result: Result<Vec<Blog>>) -> WorkerResponse {
        match result {
            Ok(blogs) => {
                tracing::debug!(source = %source, count = blogs.len(), "seed load successful");
                WorkerResponse::BlogsLoaded {
                    blogs,
                    source: source.to_string(),
                }
            }
            Err(e) => {
                tracing::warn!(source = %source, error = %e, "seed load failed");
                WorkerResponse::Error {
                    message: format!("load blogs from {source}: {e}"),
                }
            }
        }
    }

    fn handle_load_blogs(path: Option<&str>) -> WorkerResponse {
        let source = Self::source_for(path);
        let description = paths::strip_host_prefix(&source.describe());
        Self::handle_load_result(&description, source.load())
    }

    /// Rebuilds the sender's OpenTelemetry context so worker spans are
    /// parented on the span that posted the message.
    ///
    /// The returned guard must be held while the message is processed.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());

        Some(opentelemetry::Context::current().with_remote_span_context(span_context).attach())
    }

    /// Processes one request and returns its response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        self.handled += 1;

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message, handled = self.handled);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadBlogs { path, .. } => Self::handle_load_blogs(path.as_deref()),
        }
    }
}

/// Set once the worker thread has installed its subscriber.
static WORKER_TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

fn init_worker_tracing() {
    crate::observability::init_tracing(&crate::Config::default());
}

impl ZellijWorker<'_> for BlognestWorker {
    /// Decodes the request, handles it, and posts the response back under
    /// the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
            init_worker_tracing();
        }

        let response = match serde_json::from_str::<WorkerMessage>(&payload) {
            Ok(worker_message) => self.handle_message(worker_message),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: BlognestError::Worker(format!("malformed request: {e}")).to_string(),
                }
            }
        };

        match serde_json::to_string(&response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_path_loads_builtin_sample() {
        let mut worker = BlognestWorker::default();
        let response = worker.handle_message(WorkerMessage::load_blogs(None));

        let WorkerResponse::BlogsLoaded { blogs, source } = response else {
            panic!("expected blogs");
        };
        assert!(!blogs.is_empty());
        assert_eq!(source, "built-in sample");
    }

    #[test]
    fn reads_configured_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 9, "title": "Dogs", "body": "about dogs"}}]"#).unwrap();

        let mut worker = BlognestWorker::default();
        let path = file.path().to_string_lossy().into_owned();
        let response = worker.handle_message(WorkerMessage::load_blogs(Some(path)));

        let WorkerResponse::BlogsLoaded { blogs, .. } = response else {
            panic!("expected blogs");
        };
        assert_eq!(blogs, vec![Blog::new(9, "Dogs", "about dogs")]);
    }

    #[test]
    fn unreadable_file_becomes_error_response() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json").to_string_lossy().into_owned();

        let mut worker = BlognestWorker::default();
        let response = worker.handle_message(WorkerMessage::load_blogs(Some(path)));
        assert!(matches!(response, WorkerResponse::Error { ref message } if message.contains("absent.json")));
    }
}
