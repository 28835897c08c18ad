//! Site configuration.
//!
//! Every field has a default matching the markup the site ships with, so a
//! page without a config block behaves exactly like the stock site. Pages can
//! override any subset by embedding
//! `<script type="application/json" id="site-config">{...}</script>`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::SiteError;

/// Id of the optional JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: LogLevel,
    pub theme: ThemeConfig,
    pub fade_in: FadeInConfig,
    pub nav: NavConfig,
    pub form: FormConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub toggle_id: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FadeInConfig {
    pub selector: String,
    pub visible_class: String,
    /// Fraction of a section that must be visible before it is revealed.
    pub threshold: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub link_selector: String,
    pub current_class: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub form_id: String,
    pub name_id: String,
    pub email_id: String,
    pub text_id: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { storage_key: "theme".to_owned(), toggle_id: "darkModeToggle".to_owned() }
    }
}

impl Default for FadeInConfig {
    fn default() -> Self {
        Self {
            selector: ".fade-in-section".to_owned(),
            visible_class: "is-visible".to_owned(),
            threshold: 0.1,
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { link_selector: ".nav-links a".to_owned(), current_class: "current-page".to_owned() }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: "recommendationForm".to_owned(),
            name_id: "recommenderName".to_owned(),
            email_id: "recommenderEmail".to_owned(),
            text_id: "recommendationText".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config block, filling unspecified fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] when `raw` is not valid JSON for this shape.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.fade_in.threshold = clamp_threshold(config.fade_in.threshold);
        Ok(config)
    }

    /// Parse an optional config block. Blank or invalid input yields the
    /// defaults; invalid input is logged.
    pub fn from_optional_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default site config");
                Self::default()
            }
        }
    }
}

fn clamp_threshold(value: f64) -> f64 {
    if value.is_nan() { FadeInConfig::default().threshold } else { value.clamp(0.0, 1.0) }
}
