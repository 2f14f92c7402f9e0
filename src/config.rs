use crate::telemetry::LogLevel;

pub const MOUNT_POINT_ID: &str = "app";

const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;
const DEFAULT_BACK_TO_TOP_THRESHOLD_PX: f64 = 500.0;
const DEFAULT_LOOKBACK_MARGIN_PX: f64 = 200.0;
const DEFAULT_REVEAL_MARGIN_PX: u32 = 100;
const DEFAULT_ROLE_INTERVAL_MS: u32 = 3_000;
const DEFAULT_SUBMIT_DELAY_MS: u32 = 1_000;
const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const SCROLL_THRESHOLD_PX_BOUNDS: (f64, f64) = (0.0, 2_000.0);
const BACK_TO_TOP_THRESHOLD_PX_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const LOOKBACK_MARGIN_PX_BOUNDS: (f64, f64) = (0.0, 2_000.0);
const REVEAL_MARGIN_PX_BOUNDS: (u32, u32) = (0, 1_000);
const ROLE_INTERVAL_MS_BOUNDS: (u32, u32) = (250, 60_000);
const SUBMIT_DELAY_MS_BOUNDS: (u32, u32) = (0, 30_000);
const TOAST_DURATION_MS_BOUNDS: (u32, u32) = (500, 60_000);

/// Tunables read from `data-*` attributes on the mount element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    pub scroll_threshold_px: f64,
    pub back_to_top_threshold_px: f64,
    pub lookback_margin_px: f64,
    pub reveal_margin_px: u32,
    pub role_interval_ms: u32,
    pub submit_delay_ms: u32,
    pub toast_duration_ms: u32,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            back_to_top_threshold_px: DEFAULT_BACK_TO_TOP_THRESHOLD_PX,
            lookback_margin_px: DEFAULT_LOOKBACK_MARGIN_PX,
            reveal_margin_px: DEFAULT_REVEAL_MARGIN_PX,
            role_interval_ms: DEFAULT_ROLE_INTERVAL_MS,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteConfig {
    /// Builds a config from a `name -> raw value` lookup. Attribute names omit the `data-` prefix.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            scroll_threshold_px: parse_f64_with_bounds(
                lookup("scroll-threshold"),
                DEFAULT_SCROLL_THRESHOLD_PX,
                SCROLL_THRESHOLD_PX_BOUNDS,
            ),
            back_to_top_threshold_px: parse_f64_with_bounds(
                lookup("back-to-top-threshold"),
                DEFAULT_BACK_TO_TOP_THRESHOLD_PX,
                BACK_TO_TOP_THRESHOLD_PX_BOUNDS,
            ),
            lookback_margin_px: parse_f64_with_bounds(
                lookup("lookback-margin"),
                DEFAULT_LOOKBACK_MARGIN_PX,
                LOOKBACK_MARGIN_PX_BOUNDS,
            ),
            reveal_margin_px: parse_u32_with_bounds(
                lookup("reveal-margin"),
                DEFAULT_REVEAL_MARGIN_PX,
                REVEAL_MARGIN_PX_BOUNDS,
            ),
            role_interval_ms: parse_u32_with_bounds(
                lookup("role-interval-ms"),
                DEFAULT_ROLE_INTERVAL_MS,
                ROLE_INTERVAL_MS_BOUNDS,
            ),
            submit_delay_ms: parse_u32_with_bounds(
                lookup("submit-delay-ms"),
                DEFAULT_SUBMIT_DELAY_MS,
                SUBMIT_DELAY_MS_BOUNDS,
            ),
            toast_duration_ms: parse_u32_with_bounds(
                lookup("toast-duration-ms"),
                DEFAULT_TOAST_DURATION_MS,
                TOAST_DURATION_MS_BOUNDS,
            ),
            log_level: lookup("log-level")
                .as_deref()
                .and_then(LogLevel::parse)
                .unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_mount_point(element: &web_sys::Element) -> Self {
        Self::from_lookup(|name| element.get_attribute(&format!("data-{name}")))
    }
}

fn parse_f64_with_bounds(raw: Option<String>, default: f64, bounds: (f64, f64)) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_u32_with_bounds(raw: Option<String>, default: u32, bounds: (u32, u32)) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> SiteConfig {
        let attributes: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        SiteConfig::from_lookup(|name| attributes.get(name).cloned())
    }

    #[test]
    fn missing_attributes_fall_back_to_defaults() {
        assert_eq!(config_from(&[]), SiteConfig::default());
    }

    #[test]
    fn in_bounds_values_are_applied() {
        let config = config_from(&[
            ("scroll-threshold", "80"),
            ("lookback-margin", " 150.5 "),
            ("role-interval-ms", "1500"),
            ("log-level", "debug"),
        ]);

        assert_eq!(config.scroll_threshold_px, 80.0);
        assert_eq!(config.lookback_margin_px, 150.5);
        assert_eq!(config.role_interval_ms, 1_500);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.submit_delay_ms, DEFAULT_SUBMIT_DELAY_MS);
    }

    #[test]
    fn out_of_bounds_or_garbage_values_are_rejected() {
        let config = config_from(&[
            ("scroll-threshold", "-1"),
            ("back-to-top-threshold", "NaN"),
            ("role-interval-ms", "10"),
            ("toast-duration-ms", "soon"),
            ("log-level", "verbose"),
        ]);

        assert_eq!(config.scroll_threshold_px, DEFAULT_SCROLL_THRESHOLD_PX);
        assert_eq!(config.back_to_top_threshold_px, DEFAULT_BACK_TO_TOP_THRESHOLD_PX);
        assert_eq!(config.role_interval_ms, DEFAULT_ROLE_INTERVAL_MS);
        assert_eq!(config.toast_duration_ms, DEFAULT_TOAST_DURATION_MS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}
