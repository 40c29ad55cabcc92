// This file is part of the product OnDot Web.
// SPDX-FileCopyrightText: 2025-2026 OnDot Team
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadError(msg) => write!(f, "Configuration load error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub workers: usize, // 0 lets actix pick one worker per core
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_site_title")]
    pub title: String,
    #[serde(default = "default_site_description")]
    pub description: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Address shown in the contact section.
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    /// Address behind the hero call-to-action.
    #[serde(default = "default_hero_email")]
    pub hero_email: String,
    #[serde(default = "default_inquiry_subject")]
    pub inquiry_subject: String,
    #[serde(default = "default_og_type")]
    pub og_type: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            title: default_site_title(),
            description: default_site_description(),
            base_url: default_base_url(),
            contact_email: default_contact_email(),
            hero_email: default_hero_email(),
            inquiry_subject: default_inquiry_subject(),
            og_type: default_og_type(),
        }
    }
}

fn default_site_name() -> String {
    "OnDot".to_string()
}

fn default_site_title() -> String {
    "OnDot — 팀 소개".to_string()
}

fn default_site_description() -> String {
    "KMP/Compose Multiplatform로 만든 OnDot 팀 소개 페이지".to_string()
}

fn default_base_url() -> String {
    "https://ondot.app".to_string()
}

fn default_contact_email() -> String {
    "teamdh1216@gmail.com".to_string()
}

fn default_hero_email() -> String {
    "hello@ondot.app".to_string()
}

fn default_inquiry_subject() -> String {
    "[문의] OnDot 팀 소개".to_string()
}

fn default_og_type() -> String {
    "website".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration that passed startup validation. Handlers only ever see this
/// type, never a raw [`Config`].
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|err| ConfigError::LoadError(format!("{}: {}", config_path.display(), err)))?;
        serde_yaml::from_str(&content)
            .map_err(|err| ConfigError::LoadError(format!("{}: {}", config_path.display(), err)))
    }

    /// Loads and validates configuration at startup. If validation fails, the
    /// application should not start.
    pub fn load_and_validate(root: &Path) -> Result<ValidatedConfig, ConfigError> {
        let config = Self::load(root)?;
        config.validate()
    }

    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        Self::validate_server(&self.server)?;
        Self::validate_site(&self.site)?;
        Self::validate_logging(&self.logging)?;

        Ok(ValidatedConfig {
            server: self.server,
            site: self.site,
            logging: self.logging,
        })
    }

    fn validate_server(server: &ServerConfig) -> Result<(), ConfigError> {
        if server.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host must not be empty".to_string(),
            ));
        }
        if server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be a non-zero port number".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_site(site: &SiteConfig) -> Result<(), ConfigError> {
        if site.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "site.name must not be empty".to_string(),
            ));
        }
        if site.title.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "site.title must not be empty".to_string(),
            ));
        }
        if !site.base_url.starts_with("http://") && !site.base_url.starts_with("https://") {
            return Err(ConfigError::ValidationError(format!(
                "site.base_url must start with http:// or https://, got '{}'",
                site.base_url
            )));
        }
        if site.base_url.ends_with('/') {
            return Err(ConfigError::ValidationError(
                "site.base_url must not have a trailing slash".to_string(),
            ));
        }
        for (field, email) in [
            ("site.contact_email", &site.contact_email),
            ("site.hero_email", &site.hero_email),
        ] {
            if !email.contains('@') {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be an email address, got '{}'",
                    field, email
                )));
            }
        }
        Ok(())
    }

    fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        match logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::ValidationError(format!(
                "logging.level must be one of trace/debug/info/warn/error, got '{}'",
                other
            ))),
        }
    }
}

pub const DEFAULT_CONFIG_YAML: &str = r#"# OnDot Web configuration.
# Any omitted key falls back to its built-in default.

server:
  host: "127.0.0.1"
  port: 8080
  # 0 lets the server pick one worker per CPU core.
  workers: 0

site:
  name: "OnDot"
  title: "OnDot — 팀 소개"
  description: "KMP/Compose Multiplatform로 만든 OnDot 팀 소개 페이지"
  base_url: "https://ondot.app"
  contact_email: "teamdh1216@gmail.com"
  hero_email: "hello@ondot.app"
  inquiry_subject: "[문의] OnDot 팀 소개"
  og_type: "website"

logging:
  level: "info"
"#;

/// Writes the default configuration file on first run. Returns whether a new
/// file was created.
pub fn ensure_config(root: &Path) -> Result<bool, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        return Ok(false);
    }
    fs::write(&config_path, DEFAULT_CONFIG_YAML)
        .map_err(|err| ConfigError::LoadError(format!("{}: {}", config_path.display(), err)))?;
    log::info!("Created default configuration at {}", config_path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_yields_all_defaults() {
        let config: Config = serde_yaml::from_str("{}").expect("parse");
        let validated = config.validate().expect("validate");

        assert_eq!(validated.server.port, 8080);
        assert_eq!(validated.site.title, "OnDot — 팀 소개");
        assert_eq!(validated.logging.level, "info");
    }

    #[test]
    fn default_config_yaml_parses_and_validates() {
        let config: Config = serde_yaml::from_str(DEFAULT_CONFIG_YAML).expect("parse");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_section_defaults() {
        let config: Config = serde_yaml::from_str("server:\n  port: 9000\n").expect("parse");
        let validated = config.validate().expect("validate");

        assert_eq!(validated.server.port, 9000);
        assert_eq!(validated.server.host, "127.0.0.1");
        assert_eq!(validated.site.name, "OnDot");
    }

    #[test]
    fn validation_rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_base_url_without_scheme() {
        let mut config = Config::default();
        config.site.base_url = "ondot.app".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_trailing_slash_in_base_url() {
        let mut config = Config::default();
        config.site.base_url = "https://ondot.app/".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_non_email_contact() {
        let mut config = Config::default();
        config.site.contact_email = "not-an-email".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_unknown_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }
}
