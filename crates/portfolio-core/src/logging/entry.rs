//! Structured log entry passed from the tracing layer to a sink.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single log event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO 8601 timestamp (e.g., "2026-01-21T14:30:45.123Z")
    pub ts: String,

    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Application name the subscriber was installed for
    pub app: String,

    /// Module path / target (e.g., "portfolio_core::contact")
    pub target: String,

    /// Human-readable message
    pub msg: String,

    /// Optional structured fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,

    /// Optional span path if this entry is from within spans
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl LogEntry {
    /// Create a new log entry with the current timestamp.
    pub fn new(
        level: impl Into<String>,
        app: impl Into<String>,
        target: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            app: app.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// One-line human rendering for a developer console.
    pub fn console_line(&self) -> String {
        let mut line = format!("[{}] {}: {}", self.app, self.target, self.msg);
        if let Some(span) = &self.span {
            line = format!("[{}] {} ({}): {}", self.app, self.target, span, self.msg);
        }
        if let Some(fields) = &self.fields {
            line.push(' ');
            line.push_str(&fields.to_string());
        }
        line
    }
}
