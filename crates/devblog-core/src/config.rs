//! Site configuration management.

use std::{collections::HashMap, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Prefix of environment overrides, e.g. `DEVBLOG__SITE__TITLE`.
pub const ENV_PREFIX: &str = "DEVBLOG";

/// Main configuration structure for DevBlog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Colour-mode settings.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Article listing settings.
    #[serde(default)]
    pub listing: ListingConfig,

    /// Footer settings.
    #[serde(default)]
    pub footer: FooterConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Base URL for the site (e.g., "https://devblog.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Site description for meta tags.
    #[serde(default = "default_description")]
    pub description: String,

    /// Site author name.
    #[serde(default)]
    pub author: Option<String>,
}

/// Colour-mode configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Storage key holding the persisted dark-mode flag.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Class put on the document root while dark mode is active.
    #[serde(default = "default_marker_class")]
    pub marker_class: String,
}

/// Listing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Number of tags shown on an article card.
    #[serde(default = "default_card_tag_limit")]
    pub card_tag_limit: usize,
}

/// Footer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterConfig {
    /// Tags linked from the footer's "Categories" column.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

// Default value functions
fn default_title() -> String {
    "DevBlog".to_string()
}

fn default_base_url() -> String {
    "https://devblog.com".to_string()
}

fn default_description() -> String {
    "Stay updated with the latest web development trends, tutorials, and best practices."
        .to_string()
}

fn default_storage_key() -> String {
    "darkMode".to_string()
}

fn default_marker_class() -> String {
    "dark".to_string()
}

fn default_card_tag_limit() -> usize {
    3
}

fn default_categories() -> Vec<String> {
    ["React", "TypeScript", "Node.js", "CSS"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_url: default_base_url(),
            description: default_description(),
            author: None,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            marker_class: default_marker_class(),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            card_tag_limit: default_card_tag_limit(),
        }
    }
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| CoreError::config_with_source("Failed to parse config", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate, with `DEVBLOG__SECTION__KEY`
    /// environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        Self::load_layered(path, None)
    }

    /// Like [`Config::load_with_env`], with `vars` standing in for the
    /// process environment.
    pub fn load_with_vars(path: &Path, vars: HashMap<String, String>) -> Result<Self> {
        Self::load_layered(path, Some(vars))
    }

    fn load_layered(path: &Path, vars: Option<HashMap<String, String>>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .source(vars),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.theme.storage_key.is_empty() {
            return Err(CoreError::config("theme.storage_key cannot be empty"));
        }

        if self.theme.marker_class.trim().is_empty()
            || self.theme.marker_class.contains(char::is_whitespace)
        {
            return Err(CoreError::config(
                "theme.marker_class must be a single class name",
            ));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
title = "Test Blog"
base_url = "https://example.com"
description = "A test blog"
author = "Sarah Chen"

[theme]
storage_key = "prefersDark"
marker_class = "theme-dark"

[listing]
card_tag_limit = 2

[footer]
categories = ["Rust", "CSS"]
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("devblog.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.title, "Test Blog");
        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(config.site.author.as_deref(), Some("Sarah Chen"));
        assert_eq!(config.theme.storage_key, "prefersDark");
        assert_eq!(config.theme.marker_class, "theme-dark");
        assert_eq!(config.listing.card_tag_limit, 2);
        assert_eq!(config.footer.categories, vec!["Rust", "CSS"]);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml_str("").expect("parse empty config");

        assert_eq!(config, Config::default());
        assert_eq!(config.site.title, "DevBlog");
        assert_eq!(config.theme.storage_key, "darkMode");
        assert_eq!(config.theme.marker_class, "dark");
        assert_eq!(config.listing.card_tag_limit, 3);
        assert_eq!(
            config.footer.categories,
            vec!["React", "TypeScript", "Node.js", "CSS"]
        );
    }

    #[test]
    fn test_url_for() {
        let config = Config::from_toml_str(
            r#"
[site]
base_url = "https://example.com/"
"#,
        )
        .expect("parse config");

        assert_eq!(
            config.url_for("/post/hello"),
            "https://example.com/post/hello"
        );
        assert_eq!(config.url_for("post/hello"), "https://example.com/post/hello");
    }

    #[test]
    fn test_config_validation_empty_title() {
        let result = Config::from_toml_str(
            r#"
[site]
title = ""
"#,
        );
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("title cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_marker_class() {
        let result = Config::from_toml_str(
            r#"
[theme]
marker_class = "dark mode"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/devblog.toml"));
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_with_env_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config =
            Config::load_with_env(&dir.path().join("absent.toml")).expect("load defaults");
        assert_eq!(config.theme.storage_key, "darkMode");
    }

    #[test]
    fn test_load_with_vars_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[site]\ntitle = \"From File\"").unwrap();

        let vars = HashMap::from([
            ("DEVBLOG__SITE__TITLE".to_string(), "From Env".to_string()),
            ("DEVBLOG__THEME__MARKER_CLASS".to_string(), "night".to_string()),
        ]);
        let config = Config::load_with_vars(file.path(), vars).unwrap();

        assert_eq!(config.site.title, "From Env");
        assert_eq!(config.theme.marker_class, "night");
        assert_eq!(config.theme.storage_key, "darkMode");
    }

    #[test]
    fn test_load_with_vars_validates_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let vars = HashMap::from([("DEVBLOG__THEME__STORAGE_KEY".to_string(), String::new())]);

        let err = Config::load_with_vars(&dir.path().join("absent.toml"), vars).unwrap_err();
        assert!(err.to_string().contains("storage_key"));
    }
}
