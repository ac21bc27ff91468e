//! Screen Configuration
//!
//! Read once at mount. Sources, later ones winning:
//! defaults, inline `<script id="todo-config" type="application/json">`,
//! then the URL query string (`?variant=long-press&title=...`).

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Element holding the inline JSON config
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(String),
    #[error("unknown screen variant: {0}")]
    UnknownVariant(String),
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Which interaction front-end drives the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenVariant {
    /// Swipe left to delete, overflow menu, bottom-sheet editor
    #[default]
    SwipeMenu,
    /// Long press for an action sheet, centered dialog editor
    LongPress,
}

impl ScreenVariant {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "swipe-menu" | "swipe" | "menu" => Ok(ScreenVariant::SwipeMenu),
            "long-press" | "longpress" | "dialog" => Ok(ScreenVariant::LongPress),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// App bar title
    pub title: String,
    pub variant: ScreenVariant,
    /// Texts of the items present at mount
    pub seed: Vec<String>,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: Option<String>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            title: "Todo List".to_string(),
            variant: ScreenVariant::default(),
            seed: vec!["Item 1".to_string()],
            log_level: None,
        }
    }
}

impl ScreenConfig {
    /// Parse the inline JSON block; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))
    }

    /// Overlay query string parameters. Unknown keys are ignored; a bad value
    /// is reported and the previous value kept.
    pub fn apply_query(&mut self, query: &str) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (key, value) in parse_query(query) {
            match key.as_str() {
                "title" => self.title = value,
                "variant" => match ScreenVariant::parse(&value) {
                    Ok(variant) => self.variant = variant,
                    Err(e) => errors.push(e),
                },
                "seed" => self.seed = value.split('|').map(str::to_string).collect(),
                "log" | "log_level" => match parse_log_level(&value) {
                    Ok(_) => self.log_level = Some(value),
                    Err(e) => errors.push(e),
                },
                _ => {}
            }
        }
        errors
    }

    /// Seed texts with blank entries dropped
    pub fn seed_texts(&self) -> impl Iterator<Item = &str> {
        self.seed.iter().map(|s| s.trim()).filter(|s| !s.is_empty())
    }

    pub fn max_log_level(&self) -> log::Level {
        self.log_level
            .as_deref()
            .and_then(|level| parse_log_level(level).ok())
            .unwrap_or(if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info })
    }

    /// Build from the current page. Errors are returned alongside the
    /// config so they can be logged once the logger is up.
    pub fn load() -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();
        let window = web_sys::window();
        let document = window.as_ref().and_then(|w| w.document());

        let inline = document
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let mut config = match inline {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json).unwrap_or_else(|e| {
                errors.push(e);
                Self::default()
            }),
            _ => Self::default(),
        };

        let query = window
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        errors.extend(config.apply_query(&query));
        (config, errors)
    }
}

fn parse_log_level(value: &str) -> Result<log::Level, ConfigError> {
    value
        .trim()
        .parse::<log::Level>()
        .map_err(|_| ConfigError::InvalidLogLevel(value.to_string()))
}

/// Split `?a=1&b=two%20words` into decoded pairs; `+` means space
fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(part: &str) -> String {
    let spaced = part.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScreenConfig::default();
        assert_eq!(config.title, "Todo List");
        assert_eq!(config.variant, ScreenVariant::SwipeMenu);
        assert_eq!(config.seed_texts().collect::<Vec<_>>(), vec!["Item 1"]);
    }

    #[test]
    fn test_from_json_partial() {
        let config = ScreenConfig::from_json(r#"{"variant": "long-press"}"#).unwrap();
        assert_eq!(config.variant, ScreenVariant::LongPress);
        assert_eq!(config.title, "Todo List");
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(ScreenConfig::from_json("{"), Err(ConfigError::Json(_))));
        assert!(matches!(
            ScreenConfig::from_json(r#"{"variant": "carousel"}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_apply_query() {
        let mut config = ScreenConfig::default();
        let errors = config.apply_query("?variant=long-press&title=Mis+tareas%21&seed=A|%20|B&x=1");
        assert!(errors.is_empty());
        assert_eq!(config.variant, ScreenVariant::LongPress);
        assert_eq!(config.title, "Mis tareas!");
        assert_eq!(config.seed_texts().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_apply_query_bad_values_keep_previous() {
        let mut config = ScreenConfig::default();
        let errors = config.apply_query("variant=carousel&log=loud");
        assert_eq!(
            errors,
            vec![
                ConfigError::UnknownVariant("carousel".to_string()),
                ConfigError::InvalidLogLevel("loud".to_string()),
            ]
        );
        assert_eq!(config.variant, ScreenVariant::SwipeMenu);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_log_level() {
        let mut config = ScreenConfig::default();
        config.apply_query("log=warn");
        assert_eq!(config.max_log_level(), log::Level::Warn);
    }

    #[test]
    fn test_empty_query() {
        let mut config = ScreenConfig::default();
        assert!(config.apply_query("").is_empty());
        assert_eq!(config, ScreenConfig::default());
    }
}
