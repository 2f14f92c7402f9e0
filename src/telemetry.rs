use serde::Serialize;
use serde_json::{Map, Value};
use std::cmp::Ordering;

use crate::config::SiteConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct LogRecord<'a> {
    ts: u64,
    level: LogLevel,
    event: &'a str,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

/// Emits one structured event line if `level` passes the configured minimum.
pub fn log_event(config: &SiteConfig, level: LogLevel, event: &str, fields: Value) {
    if let Some(line) = format_event(config.log_level, level, event, fields, now_unix_millis()) {
        emit(level, &line);
    }
}

fn format_event(
    min_level: LogLevel,
    level: LogLevel,
    event: &str,
    fields: Value,
    ts: u64,
) -> Option<String> {
    if level < min_level {
        return None;
    }

    let fields = match fields {
        Value::Object(extra) => extra,
        _ => Map::new(),
    };

    serde_json::to_string(&LogRecord {
        ts,
        level,
        event,
        fields,
    })
    .ok()
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Debug => web_sys::console::debug_1(&line),
        LogLevel::Info => web_sys::console::log_1(&line),
        LogLevel::Warn => web_sys::console::warn_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_below_minimum_level_are_dropped() {
        let line = format_event(
            LogLevel::Info,
            LogLevel::Debug,
            "active_section_changed",
            serde_json::json!({ "section": "about" }),
            1,
        );
        assert!(line.is_none());
    }

    #[test]
    fn event_line_carries_level_name_and_fields() {
        let line = format_event(
            LogLevel::Debug,
            LogLevel::Warn,
            "contact_submit_rejected",
            serde_json::json!({ "reason": "missing_fields" }),
            1_700_000_000_000,
        )
        .expect("warn passes a debug minimum");

        let parsed: Value = serde_json::from_str(&line).expect("line is valid JSON");
        assert_eq!(parsed["ts"], 1_700_000_000_000u64);
        assert_eq!(parsed["level"], "warn");
        assert_eq!(parsed["event"], "contact_submit_rejected");
        assert_eq!(parsed["reason"], "missing_fields");
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let line = format_event(LogLevel::Info, LogLevel::Info, "app_mounted", Value::Null, 5)
            .expect("info passes an info minimum");
        assert_eq!(line, r#"{"ts":5,"level":"info","event":"app_mounted"}"#);
    }

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("trace"), None);
        assert!(LogLevel::Debug < LogLevel::Info && LogLevel::Info < LogLevel::Warn);
    }
}
