//! Tunables for the portfolio page.
//!
//! Every knob has a default matching the shipped page. The web binary
//! overlays an embedded JSON file on top of these defaults; any key the
//! file omits keeps its default value.

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Local-storage key holding the submission history
pub const SUBMISSIONS_KEY: &str = "contactSubmissions";

/// Local-storage key holding the theme preference
pub const THEME_KEY: &str = "theme";

/// Complete configuration for the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Storage key for the submission history
    pub submissions_key: String,
    /// Storage key for the theme preference
    pub theme_key: String,
    /// Maximum number of stored submission records
    pub history_capacity: usize,
    /// Delay between a successful submit and the form reset (ms)
    pub success_reset_ms: u32,
    /// Fixed navbar height subtracted from smooth-scroll targets (px)
    pub nav_offset: f64,
    /// Scroll depth after which the navbar gets its shadow (px)
    pub navbar_shadow_after: f64,
    /// Scroll depth after which scrolling down hides the navbar (px)
    pub navbar_hide_after: f64,
    /// Offset applied to section tops when picking the active nav link (px)
    pub scroll_spy_offset: f64,
    /// Debounce window for the scroll spy (ms)
    pub scroll_debounce_ms: u32,
    /// Reveal animation settings
    pub reveal: RevealConfig,
    /// Typing effect settings
    pub typing: TypingConfig,
    /// Statistics counter settings
    pub counter: CounterConfig,
    /// Duration of the theme toggle spin (ms)
    pub theme_spin_ms: u32,
    /// `EnvFilter` directive string for the log subscriber
    pub log_filter: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            submissions_key: SUBMISSIONS_KEY.to_string(),
            theme_key: THEME_KEY.to_string(),
            history_capacity: 10,
            success_reset_ms: 2000,
            nav_offset: 80.0,
            navbar_shadow_after: 100.0,
            navbar_hide_after: 200.0,
            scroll_spy_offset: 150.0,
            scroll_debounce_ms: 10,
            reveal: RevealConfig::default(),
            typing: TypingConfig::default(),
            counter: CounterConfig::default(),
            theme_spin_ms: 400,
            log_filter: "info".to_string(),
        }
    }
}

/// Settings for scroll-triggered fade-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction of an element required to reveal it
    pub threshold: f64,
    /// Pixels trimmed off the bottom of the viewport before intersecting
    pub bottom_margin: f64,
    /// Visible fraction of the statistics block that starts the counters
    pub counter_threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 50.0,
            counter_threshold: 0.5,
        }
    }
}

/// Settings for the hero typing effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    pub start_delay_ms: u32,
    pub typing_ms: u32,
    pub deleting_ms: u32,
    pub pause_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: [
                "IT Student & Developer",
                "Mobile App Developer",
                "Web Developer",
                "Problem Solver",
                "Tech Enthusiast",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            start_delay_ms: 1000,
            typing_ms: 100,
            deleting_ms: 50,
            pause_ms: 2000,
        }
    }
}

/// Settings for the statistics count-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Number of increments from zero to the target
    pub steps: u32,
    /// Delay between increments (ms)
    pub tick_ms: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            steps: 200,
            tick_ms: 10,
        }
    }
}

impl PortfolioConfig {
    /// Parse a JSON override and overlay it on the defaults.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break an invariant downstream.
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.history_capacity == 0 {
            return Err(PortfolioError::InvalidConfig(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        if self.submissions_key.is_empty() || self.theme_key.is_empty() {
            return Err(PortfolioError::InvalidConfig(
                "storage keys must not be empty".to_string(),
            ));
        }
        if self.counter.steps == 0 {
            return Err(PortfolioError::InvalidConfig(
                "counter.steps must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold)
            || !(0.0..=1.0).contains(&self.reveal.counter_threshold)
        {
            return Err(PortfolioError::InvalidConfig(
                "reveal thresholds must be within 0.0..=1.0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = PortfolioConfig::default();
        config.validate().unwrap();
        assert_eq!(config.history_capacity, 10);
        assert_eq!(config.success_reset_ms, 2000);
        assert_eq!(config.submissions_key, "contactSubmissions");
        assert_eq!(config.typing.phrases.len(), 5);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            PortfolioConfig::from_json(r#"{ "history_capacity": 3, "typing": { "pause_ms": 500 } }"#)
                .unwrap();
        assert_eq!(config.history_capacity, 3);
        assert_eq!(config.typing.pause_ms, 500);
        assert_eq!(config.typing.typing_ms, 100);
        assert_eq!(config.nav_offset, 80.0);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = PortfolioConfig::from_json(r#"{ "history_capacity": 0 }"#).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = PortfolioConfig::from_json("{").unwrap_err();
        assert!(matches!(err, PortfolioError::Serialization(_)));
    }
}
