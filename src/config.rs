//! Page-level configuration.
//!
//! DESIGN
//! ======
//! Every field defaults to the value in [`crate::consts`], so a page without
//! a config block behaves exactly like the stock site. A page may override
//! any subset through a JSON block:
//!
//! ```html
//! <script type="application/json" id="folio-config">
//!   { "log_level": "debug", "typewriter": { "target": ".hero-subtitle" } }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    ACTIVE_LOOKAHEAD_PX, DEFAULT_LOG_LEVEL, DELETE_MS, EMPTY_PAUSE_MS, FORM_RESET_MS, FULL_PAUSE_MS,
    REVEAL_SELECTORS, REVEAL_STAGGER_MS, REVEAL_THRESHOLD, SCROLLED_THRESHOLD_PX, TYPE_MS, TYPEWRITER_PHRASES,
};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Errors raised while reading a config block.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    LogLevel(String),
    #[error("reveal threshold must be within 0..=1, got {0}")]
    Threshold(f64),
    #[error("type-writer needs at least one non-empty phrase")]
    NoPhrases,
}

/// Behavior knobs for every component on the page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub scrolled_threshold_px: f64,
    pub active_lookahead_px: f64,
    pub reveal_selectors: Vec<String>,
    pub reveal_stagger_ms: u32,
    pub reveal_threshold: f64,
    pub form_reset_ms: u32,
    pub typewriter: TypeWriterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            scrolled_threshold_px: SCROLLED_THRESHOLD_PX,
            active_lookahead_px: ACTIVE_LOOKAHEAD_PX,
            reveal_selectors: REVEAL_SELECTORS.iter().map(|s| (*s).to_owned()).collect(),
            reveal_stagger_ms: REVEAL_STAGGER_MS,
            reveal_threshold: REVEAL_THRESHOLD,
            form_reset_ms: FORM_RESET_MS,
            typewriter: TypeWriterConfig::default(),
        }
    }
}

/// Type-writer settings. The effect only runs when `target` is set.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypeWriterConfig {
    pub target: Option<String>,
    pub phrases: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub full_pause_ms: u32,
    pub empty_pause_ms: u32,
}

impl Default for TypeWriterConfig {
    fn default() -> Self {
        Self {
            target: None,
            phrases: TYPEWRITER_PHRASES.iter().map(|s| (*s).to_owned()).collect(),
            type_ms: TYPE_MS,
            delete_ms: DELETE_MS,
            full_pause_ms: FULL_PAUSE_MS,
            empty_pause_ms: EMPTY_PAUSE_MS,
        }
    }
}

impl Config {
    /// Parse and validate a JSON config block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON is malformed or a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::LogLevel(self.log_level.clone()));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::Threshold(self.reveal_threshold));
        }
        if self.typewriter.phrases.iter().all(String::is_empty) {
            return Err(ConfigError::NoPhrases);
        }
        Ok(())
    }
}
