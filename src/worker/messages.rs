//! Worker thread message types for cross-thread communication.
//!
//! Requests travel from the plugin thread to the worker that reads seed files,
//! responses travel back. Both are JSON-serialized over Zellij's plugin
//! message channel. Requests carry the caller's trace context so worker spans
//! join the same trace.

use crate::domain::Blog;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry so the worker
/// can parent its spans on the span that sent the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span
    /// context is not valid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use blognest::worker::TraceContext;
    ///
    /// if let Some(ctx) = TraceContext::from_current() {
    ///     println!("trace {}", ctx.trace_id);
    /// }
    /// ```
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            tracing::trace!("no valid span context to propagate");
            return None;
        }

        let trace_id = format!("{:032x}", span_context.trace_id());
        let parent_span_id = format!("{:016x}", span_context.span_id());

        tracing::debug!(trace_id = %trace_id, parent_span_id = %parent_span_id, "capturing trace context");

        Some(Self { trace_id, parent_span_id })
    }
}

/// Generates constructors for `WorkerMessage` variants that attach the
/// current trace context automatically.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_blogs(LoadBlogs { path: Option<String> }),
}

/// Messages sent from the main thread to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read the seed collection.
    ///
    /// `path` names a JSON seed file; `None` selects the built-in sample.
    LoadBlogs {
        path: Option<String>,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// The propagated trace context, whatever the variant.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadBlogs { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the worker thread back to the main thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The seed collection was read and validated.
    BlogsLoaded {
        /// Blogs in seed order, ready for `BlogStore::set_blogs`.
        blogs: Vec<Blog>,

        /// Where the blogs came from, for the status line.
        source: String,
    },

    /// The request failed. The plugin keeps its current blogs.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_without_trace_context_omits_the_field() {
        let message = WorkerMessage::LoadBlogs {
            path: Some("/host/blogs.json".to_string()),
            trace_context: None,
        };
        let json = serde_json::to_string(&message).unwrap();
        assert!(!json.contains("trace_context"));

        let parsed: WorkerMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, message);
    }

    #[test]
    fn builder_without_subscriber_has_no_context() {
        let message = WorkerMessage::load_blogs(None);
        assert_eq!(message.trace_context(), None);
    }

    #[test]
    fn loaded_response_crosses_the_channel() {
        let response = WorkerResponse::BlogsLoaded {
            blogs: vec![Blog::new(1, "Cats", "about cats").with_image("cat.png")],
            source: "built-in sample".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("imageUrl"));
        assert_eq!(serde_json::from_str::<WorkerResponse>(&json).unwrap(), response);
    }
}
