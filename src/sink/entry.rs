//! Persisted log record shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted record per significant request event.
///
/// `correlation_or_trace_id` is the caller-supplied correlation id when
/// one was sent, otherwise the adopted trace id, otherwise the locally
/// generated correlation id (see `RequestScope::log_key`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub correlation_or_trace_id: String,
    pub message: String,
    /// ISO-8601 timestamp (serialized via chrono's RFC 3339 form).
    pub timestamp: DateTime<Utc>,
    pub level: String,
}

impl LogEntry {
    pub fn new(
        correlation_or_trace_id: impl Into<String>,
        message: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        LogEntry {
            correlation_or_trace_id: correlation_or_trace_id.into(),
            message: message.into(),
            timestamp: Utc::now(),
            level: level.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_timestamp_as_iso8601() {
        let entry = LogEntry::new("req-42", "Hello API call received", "INFO");
        let json = serde_json::to_value(&entry).unwrap();

        let ts = json["timestamp"].as_str().unwrap();
        // RFC 3339 / ISO-8601: date, 'T' separator, timezone suffix.
        assert!(ts.contains('T'));
        assert!(ts.ends_with('Z') || ts.contains('+'));
        assert_eq!(json["correlation_or_trace_id"], "req-42");
        assert_eq!(json["level"], "INFO");
    }
}
