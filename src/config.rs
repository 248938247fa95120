use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::logging::LogLevel;

pub const CONFIG_ELEMENT_ID: &str = "interaction-config";

const DEFAULT_SCROLLED_THRESHOLD_PX: f64 = 50.0;
const DEFAULT_HIDE_THRESHOLD_PX: f64 = 300.0;
const DEFAULT_HEADER_OFFSET_PX: f64 = 80.0;
const DEFAULT_SECTION_LEAD_PX: f64 = 100.0;
const DEFAULT_SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.5;
const DEFAULT_REVEAL_BOTTOM_MARGIN_PX: f64 = 100.0;
const DEFAULT_SKILL_FILL_DELAY_MS: u32 = 200;
const DEFAULT_CARD_STAGGER_MS: u32 = 100;
const DEFAULT_TYPEWRITER_START_DELAY_MS: u32 = 500;
const DEFAULT_TYPEWRITER_CHAR_DELAY_MS: u32 = 100;
const DEFAULT_NOTIFICATION_DURATION_MS: u32 = 3_000;
const DEFAULT_LOADER_HOLD_MS: u32 = 1_000;
const DEFAULT_LOADER_FADE_MS: u32 = 500;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const SCROLLED_THRESHOLD_PX_BOUNDS: (f64, f64) = (0.0, 2_000.0);
const HIDE_THRESHOLD_PX_BOUNDS: (f64, f64) = (0.0, 5_000.0);
const HEADER_OFFSET_PX_BOUNDS: (f64, f64) = (0.0, 500.0);
const SECTION_LEAD_PX_BOUNDS: (f64, f64) = (0.0, 500.0);
const SCROLL_TOP_THRESHOLD_PX_BOUNDS: (f64, f64) = (0.0, 5_000.0);
const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const REVEAL_BOTTOM_MARGIN_PX_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const SKILL_FILL_DELAY_MS_BOUNDS: (u32, u32) = (0, 5_000);
const CARD_STAGGER_MS_BOUNDS: (u32, u32) = (0, 2_000);
const TYPEWRITER_START_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);
const TYPEWRITER_CHAR_DELAY_MS_BOUNDS: (u32, u32) = (1, 2_000);
const NOTIFICATION_DURATION_MS_BOUNDS: (u32, u32) = (500, 30_000);
const LOADER_HOLD_MS_BOUNDS: (u32, u32) = (0, 10_000);
const LOADER_FADE_MS_BOUNDS: (u32, u32) = (0, 5_000);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("interaction config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq)]
pub struct InteractionConfig {
    pub scrolled_threshold_px: f64,
    pub hide_threshold_px: f64,
    pub header_offset_px: f64,
    pub section_lead_px: f64,
    pub scroll_top_threshold_px: f64,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin_px: f64,
    pub skill_fill_delay_ms: u32,
    pub card_stagger_ms: u32,
    pub typewriter_start_delay_ms: u32,
    pub typewriter_char_delay_ms: u32,
    pub notification_duration_ms: u32,
    pub loader_hold_ms: u32,
    pub loader_fade_ms: u32,
    pub log_level: LogLevel,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: DEFAULT_SCROLLED_THRESHOLD_PX,
            hide_threshold_px: DEFAULT_HIDE_THRESHOLD_PX,
            header_offset_px: DEFAULT_HEADER_OFFSET_PX,
            section_lead_px: DEFAULT_SECTION_LEAD_PX,
            scroll_top_threshold_px: DEFAULT_SCROLL_TOP_THRESHOLD_PX,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_bottom_margin_px: DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
            skill_fill_delay_ms: DEFAULT_SKILL_FILL_DELAY_MS,
            card_stagger_ms: DEFAULT_CARD_STAGGER_MS,
            typewriter_start_delay_ms: DEFAULT_TYPEWRITER_START_DELAY_MS,
            typewriter_char_delay_ms: DEFAULT_TYPEWRITER_CHAR_DELAY_MS,
            notification_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
            loader_hold_ms: DEFAULT_LOADER_HOLD_MS,
            loader_fade_ms: DEFAULT_LOADER_FADE_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInteractionConfig {
    scrolled_threshold_px: Option<Value>,
    hide_threshold_px: Option<Value>,
    header_offset_px: Option<Value>,
    section_lead_px: Option<Value>,
    scroll_top_threshold_px: Option<Value>,
    reveal_threshold: Option<Value>,
    reveal_bottom_margin_px: Option<Value>,
    skill_fill_delay_ms: Option<Value>,
    card_stagger_ms: Option<Value>,
    typewriter_start_delay_ms: Option<Value>,
    typewriter_char_delay_ms: Option<Value>,
    notification_duration_ms: Option<Value>,
    loader_hold_ms: Option<Value>,
    loader_fade_ms: Option<Value>,
    log_level: Option<Value>,
}

impl InteractionConfig {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawInteractionConfig = serde_json::from_str(raw)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawInteractionConfig) -> Self {
        Self {
            scrolled_threshold_px: within_bounds(
                raw.scrolled_threshold_px,
                DEFAULT_SCROLLED_THRESHOLD_PX,
                SCROLLED_THRESHOLD_PX_BOUNDS,
            ),
            hide_threshold_px: within_bounds(
                raw.hide_threshold_px,
                DEFAULT_HIDE_THRESHOLD_PX,
                HIDE_THRESHOLD_PX_BOUNDS,
            ),
            header_offset_px: within_bounds(
                raw.header_offset_px,
                DEFAULT_HEADER_OFFSET_PX,
                HEADER_OFFSET_PX_BOUNDS,
            ),
            section_lead_px: within_bounds(
                raw.section_lead_px,
                DEFAULT_SECTION_LEAD_PX,
                SECTION_LEAD_PX_BOUNDS,
            ),
            scroll_top_threshold_px: within_bounds(
                raw.scroll_top_threshold_px,
                DEFAULT_SCROLL_TOP_THRESHOLD_PX,
                SCROLL_TOP_THRESHOLD_PX_BOUNDS,
            ),
            reveal_threshold: within_bounds(
                raw.reveal_threshold,
                DEFAULT_REVEAL_THRESHOLD,
                REVEAL_THRESHOLD_BOUNDS,
            ),
            reveal_bottom_margin_px: within_bounds(
                raw.reveal_bottom_margin_px,
                DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
                REVEAL_BOTTOM_MARGIN_PX_BOUNDS,
            ),
            skill_fill_delay_ms: within_ms_bounds(
                raw.skill_fill_delay_ms,
                DEFAULT_SKILL_FILL_DELAY_MS,
                SKILL_FILL_DELAY_MS_BOUNDS,
            ),
            card_stagger_ms: within_ms_bounds(
                raw.card_stagger_ms,
                DEFAULT_CARD_STAGGER_MS,
                CARD_STAGGER_MS_BOUNDS,
            ),
            typewriter_start_delay_ms: within_ms_bounds(
                raw.typewriter_start_delay_ms,
                DEFAULT_TYPEWRITER_START_DELAY_MS,
                TYPEWRITER_START_DELAY_MS_BOUNDS,
            ),
            typewriter_char_delay_ms: within_ms_bounds(
                raw.typewriter_char_delay_ms,
                DEFAULT_TYPEWRITER_CHAR_DELAY_MS,
                TYPEWRITER_CHAR_DELAY_MS_BOUNDS,
            ),
            notification_duration_ms: within_ms_bounds(
                raw.notification_duration_ms,
                DEFAULT_NOTIFICATION_DURATION_MS,
                NOTIFICATION_DURATION_MS_BOUNDS,
            ),
            loader_hold_ms: within_ms_bounds(
                raw.loader_hold_ms,
                DEFAULT_LOADER_HOLD_MS,
                LOADER_HOLD_MS_BOUNDS,
            ),
            loader_fade_ms: within_ms_bounds(
                raw.loader_fade_ms,
                DEFAULT_LOADER_FADE_MS,
                LOADER_FADE_MS_BOUNDS,
            ),
            log_level: raw
                .log_level
                .as_ref()
                .and_then(Value::as_str)
                .and_then(LogLevel::parse)
                .unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }
}

fn within_bounds(value: Option<Value>, default: f64, bounds: (f64, f64)) -> f64 {
    value
        .and_then(|value| value.as_f64())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn within_ms_bounds(value: Option<Value>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .and_then(|value| value.as_u64())
        .and_then(|value| u32::try_from(value).ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_block_yields_defaults() {
        let config = InteractionConfig::parse("  \n").expect("blank config is accepted");
        assert_eq!(config, InteractionConfig::default());
    }

    #[test]
    fn overrides_within_bounds_are_applied() {
        let config = InteractionConfig::parse(
            r#"{ "headerOffsetPx": 64, "typewriterCharDelayMs": 40, "logLevel": "debug" }"#,
        )
        .expect("valid config");

        assert_eq!(config.header_offset_px, 64.0);
        assert_eq!(config.typewriter_char_delay_ms, 40);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.hide_threshold_px, DEFAULT_HIDE_THRESHOLD_PX);
    }

    #[test]
    fn out_of_bounds_values_fall_back_individually() {
        let config = InteractionConfig::parse(
            r#"{ "revealThreshold": 1.5, "notificationDurationMs": 10, "cardStaggerMs": 250, "logLevel": "loud" }"#,
        )
        .expect("valid config");

        assert_eq!(config.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
        assert_eq!(config.notification_duration_ms, DEFAULT_NOTIFICATION_DURATION_MS);
        assert_eq!(config.card_stagger_ms, 250);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn invalid_timing_does_not_discard_other_overrides() {
        let config = InteractionConfig::parse(
            r#"{ "headerOffsetPx": 64, "skillFillDelayMs": -5, "typewriterCharDelayMs": 99999999999, "loaderHoldMs": "slow", "cardStaggerMs": 12.5, "logLevel": 3 }"#,
        )
        .expect("valid config");

        assert_eq!(config.header_offset_px, 64.0);
        assert_eq!(config.skill_fill_delay_ms, DEFAULT_SKILL_FILL_DELAY_MS);
        assert_eq!(config.typewriter_char_delay_ms, DEFAULT_TYPEWRITER_CHAR_DELAY_MS);
        assert_eq!(config.loader_hold_ms, DEFAULT_LOADER_HOLD_MS);
        assert_eq!(config.card_stagger_ms, DEFAULT_CARD_STAGGER_MS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn malformed_block_is_reported() {
        let result = InteractionConfig::parse("{ headerOffsetPx: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let config = InteractionConfig::parse(r#"{ "theme": "dark" }"#).expect("valid config");
        assert_eq!(config, InteractionConfig::default());
    }
}
