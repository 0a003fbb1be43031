//! OTLP JSON encoding of finished spans.

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{SystemTime, UNIX_EPOCH};

/// Encodes span batches as OTLP JSON documents:
///
/// ```json
/// {
///   "resourceSpans": [{
///     "resource": { "attributes": [{"key": "service.name", "value": {"stringValue": "BlogNest"}}] },
///     "scopeSpans": [{ "scope": {"name": "BlogNest"}, "spans": [...] }]
///   }]
/// }
/// ```
pub struct SpanFormatter {
    resource: Resource,
    scope_name: &'static str,
}

impl SpanFormatter {
    pub const fn new(resource: Resource, scope_name: &'static str) -> Self {
        Self { resource, scope_name }
    }

    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attrs: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| json!({ "key": key.to_string(), "value": format_value(value) }))
            .collect();

        let spans: Vec<JsonValue> = batch.iter().map(format_span).collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attrs },
                "scopeSpans": [{
                    "scope": { "name": self.scope_name },
                    "spans": spans
                }]
            }]
        })
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter").field("scope_name", &self.scope_name).finish_non_exhaustive()
    }
}

fn format_span(span: &SpanData) -> JsonValue {
    let (status_code, status_message) = format_status(&span.status);
    let parent_span_id = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent_span_id,
        "name": span.name,
        "kind": span_kind_code(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": format_attributes(&span.attributes),
        "events": span.events.iter().map(format_event).collect::<Vec<_>>(),
        "links": span.links.iter().map(format_link).collect::<Vec<_>>(),
        "status": { "code": status_code, "message": status_message },
    })
}

/// OTLP encodes 64-bit nanosecond timestamps as decimal strings.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos().to_string()
}

const fn span_kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn format_attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| json!({ "key": kv.key.to_string(), "value": format_value(&kv.value) }))
        .collect()
}

/// Integers travel as strings, arrays fall back to their debug rendering.
fn format_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.to_string() }),
        Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
    }
}

fn format_event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": format_attributes(&event.attributes),
    })
}

fn format_link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": format_attributes(&link.attributes),
    })
}

fn format_status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_carries_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "BlogNest")]);
        let formatter = SpanFormatter::new(resource, "BlogNest");

        let json = formatter.format_batch(&[]);
        let resource_spans = &json["resourceSpans"][0];
        assert_eq!(resource_spans["scopeSpans"][0]["scope"]["name"], "BlogNest");
        assert_eq!(resource_spans["scopeSpans"][0]["spans"], json!([]));

        let attrs = resource_spans["resource"]["attributes"].as_array().unwrap();
        assert!(attrs
            .iter()
            .any(|attr| attr["key"] == "service.name" && attr["value"]["stringValue"] == "BlogNest"));
    }

    #[test]
    fn integers_are_encoded_as_strings() {
        assert_eq!(format_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(format_value(&Value::Bool(true)), json!({ "boolValue": true }));
    }

    #[test]
    fn error_status_keeps_description() {
        let status = Status::error("seed unreadable");
        assert_eq!(format_status(&status), (2, "seed unreadable".to_string()));
    }
}
