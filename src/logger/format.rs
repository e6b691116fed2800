//! Access log format module
//!
//! Supports the `combined` (Apache/Nginx), `common` (CLF), and `json`
//! access log formats. Unknown format names fall back to `combined`.

use chrono::Local;

/// Access log entry containing all request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// HTTP version (1.0, 1.1, 2)
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
    /// Referer header
    pub referer: Option<String>,
    /// User-Agent header
    pub user_agent: Option<String>,
    /// Request processing time in microseconds
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            referer: None,
            user_agent: None,
            request_time_us: 0,
        }
    }

    /// Format the log entry according to the specified format
    pub fn format(&self, format: &str) -> String {
        match format {
            "common" => self.format_common(),
            "json" => self.format_json(),
            _ => self.format_combined(),
        }
    }

    /// Apache/Nginx Combined Log Format
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent "$http_referer" "$http_user_agent"`
    fn format_combined(&self) -> String {
        format!(
            "{} - - [{}] \"{} {}{} HTTP/{}\" {} {} \"{}\" \"{}\"",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.query
                .as_ref()
                .map(|q| format!("?{q}"))
                .unwrap_or_default(),
            self.http_version,
            self.status,
            self.body_bytes,
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {}{} HTTP/{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.query
                .as_ref()
                .map(|q| format!("?{q}"))
                .unwrap_or_default(),
            self.http_version,
            self.status,
            self.body_bytes,
        )
    }

    /// JSON structured log format
    fn format_json(&self) -> String {
        // Built by hand, the shape is fixed
        let query_json = self
            .query
            .as_ref()
            .map_or_else(|| "null".to_string(), |q| format!("\"{}\"", escape_json(q)));
        let referer_json = self
            .referer
            .as_ref()
            .map_or_else(|| "null".to_string(), |r| format!("\"{}\"", escape_json(r)));
        let user_agent_json = self
            .user_agent
            .as_ref()
            .map_or_else(|| "null".to_string(), |u| format!("\"{}\"", escape_json(u)));

        format!(
            r#"{{"remote_addr":"{}","time":"{}","method":"{}","path":"{}","query":{},"http_version":"{}","status":{},"body_bytes":{},"referer":{},"user_agent":{},"request_time_us":{}}}"#,
            escape_json(&self.remote_addr),
            self.time.to_rfc3339(),
            escape_json(&self.method),
            escape_json(&self.path),
            query_json,
            escape_json(&self.http_version),
            self.status,
            self.body_bytes,
            referer_json,
            user_agent_json,
            self.request_time_us,
        )
    }
}

/// Escape special characters for JSON string
fn escape_json(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "192.168.1.1".to_string(),
            "PATCH".to_string(),
            "/api/products/abc123".to_string(),
        );
        entry.http_version = "1.1".to_string();
        entry.status = 200;
        entry.body_bytes = 256;
        entry.user_agent = Some("Mozilla/5.0".to_string());
        entry.request_time_us = 1500;
        entry
    }

    #[test]
    fn test_format_combined() {
        let entry = create_test_entry();
        let log = entry.format("combined");
        assert!(log.contains("192.168.1.1"));
        assert!(log.contains("PATCH /api/products/abc123 HTTP/1.1"));
        assert!(log.contains("200 256"));
        assert!(log.contains("Mozilla/5.0"));
    }

    #[test]
    fn test_format_common() {
        let entry = create_test_entry();
        let log = entry.format("common");
        assert!(log.contains("192.168.1.1"));
        assert!(log.contains("PATCH /api/products/abc123 HTTP/1.1"));
        assert!(log.contains("200 256"));
        // Common format does not include user-agent
        assert!(!log.contains("Mozilla/5.0"));
    }

    #[test]
    fn test_format_json() {
        let entry = create_test_entry();
        let log = entry.format("json");
        assert!(log.contains(r#""remote_addr":"192.168.1.1""#));
        assert!(log.contains(r#""method":"PATCH""#));
        assert!(log.contains(r#""status":200"#));
        assert!(log.contains(r#""referer":null"#));
        assert!(log.contains(r#""request_time_us":1500"#));
    }

    #[test]
    fn test_unknown_format_falls_back_to_combined() {
        let entry = create_test_entry();
        assert_eq!(entry.format("nginx2"), entry.format("combined"));
    }

    #[test]
    fn test_query_string_included() {
        let mut entry = create_test_entry();
        entry.query = Some("pretty=1".to_string());
        let log = entry.format("common");
        assert!(log.contains("/api/products/abc123?pretty=1"));
    }
}
