//! # Settings
//!
//! Runtime settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`till --pricing <PATH>`)
//! 2. Environment variables (`TILL_*`)
//! 3. Defaults (this file)
//!
//! Settings are read-only after initialization.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming the pricing document.
pub const PRICING_PATH_VAR: &str = "TILL_PRICING_PATH";

/// Environment variable toggling the built-in promotions fallback.
pub const USE_DEFAULT_RULES_VAR: &str = "TILL_USE_DEFAULT_RULES";

/// Loader settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// JSON pricing document. `None` uses the built-in catalog.
    pub pricing_path: Option<PathBuf>,

    /// When the document declares no `rules`, fall back to the built-in
    /// promotions instead of pricing everything at list.
    pub use_default_rules: bool,
}

impl Default for Settings {
    /// Built-in catalog and promotions, no file.
    fn default() -> Self {
        Settings {
            pricing_path: None,
            use_default_rules: true,
        }
    }
}

impl Settings {
    /// Creates settings from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TILL_PRICING_PATH`: Path to a JSON pricing document
    /// - `TILL_USE_DEFAULT_RULES`: `true`/`false` (also `1`/`0`, `yes`/`no`)
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(path) = lookup(PRICING_PATH_VAR) {
            let path = path.trim();
            if !path.is_empty() {
                settings.pricing_path = Some(PathBuf::from(path));
            }
        }

        if let Some(value) = lookup(USE_DEFAULT_RULES_VAR) {
            settings.use_default_rules = parse_bool(&value)
                .ok_or_else(|| ConfigError::InvalidValue(USE_DEFAULT_RULES_VAR.to_string()))?;
        }

        Ok(settings)
    }

    /// Overrides the pricing document path.
    pub fn with_pricing_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.pricing_path = Some(path.into());
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
