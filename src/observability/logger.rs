//! Structured logger for neodb
//!
//! Every log line carries an event name plus key/value fields. Fields are
//! rendered in alphabetical key order so identical inputs produce identical
//! lines. Emission goes through `tracing`; the subscriber decides the sink.

use std::fmt;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Debug = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stateless logging facade
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let rendered = Self::render_fields(fields);
        match severity {
            Severity::Debug => tracing::debug!(target: "neodb", event = %event, "{}", rendered),
            Severity::Info => tracing::info!(target: "neodb", event = %event, "{}", rendered),
            Severity::Warn => tracing::warn!(target: "neodb", event = %event, "{}", rendered),
            Severity::Error => tracing::error!(target: "neodb", event = %event, "{}", rendered),
        }
    }

    /// Renders fields as `key=value` pairs sorted by key.
    ///
    /// Values containing whitespace, quotes or `=` are quoted.
    pub fn render_fields(fields: &[(&str, &str)]) -> String {
        let mut sorted: Vec<_> = fields.iter().collect();
        sorted.sort_by_key(|(k, _)| *k);

        let mut output = String::with_capacity(fields.len() * 16);
        for (i, (key, value)) in sorted.into_iter().enumerate() {
            if i > 0 {
                output.push(' ');
            }
            output.push_str(key);
            output.push('=');
            if value.is_empty()
                || value
                    .chars()
                    .any(|c| c.is_whitespace() || c == '"' || c == '=')
            {
                output.push('"');
                for c in value.chars() {
                    match c {
                        '"' => output.push_str("\\\""),
                        '\\' => output.push_str("\\\\"),
                        '\n' => output.push_str("\\n"),
                        c => output.push(c),
                    }
                }
                output.push('"');
            } else {
                output.push_str(value);
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_render_deterministic_ordering() {
        let a = Logger::render_fields(&[("zebra", "1"), ("apple", "2"), ("mango", "3")]);
        let b = Logger::render_fields(&[("apple", "2"), ("mango", "3"), ("zebra", "1")]);
        assert_eq!(a, b);
        assert_eq!(a, "apple=2 mango=3 zebra=1");
    }

    #[test]
    fn test_render_quotes_values() {
        let out = Logger::render_fields(&[("designation", "2020 AB"), ("name", "")]);
        assert_eq!(out, "designation=\"2020 AB\" name=\"\"");

        let out = Logger::render_fields(&[("message", "say \"hi\"\nbye")]);
        assert_eq!(out, "message=\"say \\\"hi\\\"\\nbye\"");
    }

    #[test]
    fn test_log_without_subscriber() {
        // No subscriber installed: must not panic
        Logger::log(Severity::Info, "TEST_EVENT", &[("rows", "42")]);
        Logger::log(Severity::Error, "TEST_EVENT", &[]);
    }
}
