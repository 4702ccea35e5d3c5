//! Tracing layer that forwards events to a [`LogSink`].
//!
//! The web binary plugs in a sink that writes to the browser console;
//! tests use [`MemorySink`].

use std::fmt::Write as FmtWrite;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use super::entry::LogEntry;
use crate::error::{PortfolioError, PortfolioResult};

/// Destination for formatted log entries.
pub trait LogSink: Send + Sync + 'static {
    fn write(&self, level: Level, entry: &LogEntry);
}

/// Sink collecting entries in memory. Clones share the buffer.
#[derive(Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }
}

impl LogSink for MemorySink {
    fn write(&self, _level: Level, entry: &LogEntry) {
        self.entries.lock().push(entry.clone());
    }
}

/// A tracing Layer that turns events into [`LogEntry`] values.
pub struct ConsoleLayer<W> {
    sink: W,
    app: String,
}

impl<W: LogSink> ConsoleLayer<W> {
    pub fn new(sink: W, app: impl Into<String>) -> Self {
        Self {
            sink,
            app: app.into(),
        }
    }
}

impl<S, W> Layer<S> for ConsoleLayer<W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: LogSink,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = *metadata.level();

        let mut visitor = FieldVisitor::new();
        event.record(&mut visitor);

        let mut entry = LogEntry::new(
            level.as_str().to_lowercase(),
            &self.app,
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );

        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<String> = scope.from_root().map(|span| span.name().to_string()).collect();
            if !spans.is_empty() {
                entry = entry.with_span(spans.join(" > "));
            }
        }

        self.sink.write(level, &entry);
    }
}

/// Visitor that extracts the message and fields from tracing events.
struct FieldVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl FieldVisitor {
    fn new() -> Self {
        Self {
            message: None,
            fields: serde_json::Map::new(),
        }
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);

        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(value.to_string()),
            );
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Number(value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Number(value.into()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Bool(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::Number(n));
        }
    }
}

/// Builder for the global subscriber.
pub struct LoggingBuilder {
    app: String,
    env_filter: String,
}

impl LoggingBuilder {
    pub fn new(app: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            env_filter: "info".to_string(),
        }
    }

    /// Set the filter directives (e.g., "portfolio=debug,portfolio_core=info").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = filter.into();
        self
    }

    /// Build the console layer without installing it.
    pub fn build_layer<W: LogSink>(&self, sink: W) -> ConsoleLayer<W> {
        ConsoleLayer::new(sink, self.app.clone())
    }

    /// Install the layer as the global default subscriber.
    pub fn init<W: LogSink>(self, sink: W) -> PortfolioResult<()> {
        let filter = EnvFilter::try_new(&self.env_filter)
            .map_err(|e| PortfolioError::InvalidConfig(format!("log filter: {}", e)))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(self.build_layer(sink))
            .try_init()
            .map_err(|e| PortfolioError::InvalidConfig(format!("subscriber: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_layer_captures_events() {
        let sink = MemorySink::new();
        let layer = LoggingBuilder::new("test").build_layer(sink.clone());
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Test message");
            tracing::warn!(count = 42, "Warning with field");
        });

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].msg, "Test message");
        assert_eq!(entries[0].level, "info");
        assert_eq!(entries[0].app, "test");
        assert_eq!(entries[1].level, "warn");
        assert_eq!(
            entries[1].fields.as_ref().and_then(|f| f.get("count")),
            Some(&serde_json::json!(42))
        );
    }

    #[test]
    fn test_span_path_is_recorded() {
        let sink = MemorySink::new();
        let subscriber =
            tracing_subscriber::registry().with(ConsoleLayer::new(sink.clone(), "test"));

        tracing::subscriber::with_default(subscriber, || {
            let outer = tracing::info_span!("page");
            let _outer = outer.enter();
            let inner = tracing::info_span!("contact");
            let _inner = inner.enter();
            tracing::debug!("submitted");
        });

        assert_eq!(sink.entries()[0].span.as_deref(), Some("page > contact"));
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let err = LoggingBuilder::new("test")
            .with_filter("portfolio=verbose")
            .init(MemorySink::new())
            .unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidConfig(_)));
    }
}
