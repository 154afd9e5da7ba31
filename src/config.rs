//! Site configuration from environment variables.

use std::path::PathBuf;

use thiserror::Error;

use crate::contact::DEFAULT_EMAIL_API_URL;
use crate::theme::ColorScheme;

pub const DEFAULT_SITE_URL: &str = "https://example.dev";
pub const DEFAULT_CONTACT_FROM: &str = "Portfolio Contact <onboarding@resend.dev>";
/// Contact submissions allowed per client IP per minute.
pub const DEFAULT_CONTACT_RATE_LIMIT: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a non-negative integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("SITE_URL must start with http:// or https://, got {0:?}")]
    InvalidSiteUrl(String),

    #[error("FOLIO_COLOR_SCHEME must be light, dark, more_contrast or no_preference, got {0:?}")]
    InvalidColorScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Public base URL, without trailing slash. Used for sitemap URLs.
    pub site_url: String,
    /// Email provider API key (`RESEND_API_KEY`).
    pub email_api_key: Option<String>,
    pub email_api_url: String,
    pub contact_from: String,
    /// Recipient of contact messages. `None` means the profile's address.
    pub contact_to: Option<String>,
    /// `0` disables rate limiting.
    pub contact_rate_limit: u32,
    /// Theme preference file. `None` means the user config directory.
    pub preferences_path: Option<PathBuf>,
    /// Colour scheme assumed when no theme has been persisted yet.
    pub color_scheme: ColorScheme,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            email_api_key: None,
            email_api_url: DEFAULT_EMAIL_API_URL.to_string(),
            contact_from: DEFAULT_CONTACT_FROM.to_string(),
            contact_to: None,
            contact_rate_limit: DEFAULT_CONTACT_RATE_LIMIT,
            preferences_path: None,
            color_scheme: ColorScheme::NoPreference,
        }
    }
}

impl SiteConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let site_url = match get("SITE_URL") {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                url.trim_end_matches('/').to_string()
            }
            Some(url) => return Err(ConfigError::InvalidSiteUrl(url)),
            None => defaults.site_url,
        };

        let contact_rate_limit = match get("FOLIO_CONTACT_RATE_LIMIT") {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(limit) => limit,
                Err(_) => {
                    return Err(ConfigError::InvalidNumber {
                        name: "FOLIO_CONTACT_RATE_LIMIT",
                        value,
                    })
                }
            },
            None => defaults.contact_rate_limit,
        };

        let color_scheme = match get("FOLIO_COLOR_SCHEME") {
            Some(value) => match value.trim() {
                "light" => ColorScheme::Light,
                "dark" => ColorScheme::Dark,
                "more_contrast" => ColorScheme::MoreContrast,
                "no_preference" => ColorScheme::NoPreference,
                _ => return Err(ConfigError::InvalidColorScheme(value)),
            },
            None => defaults.color_scheme,
        };

        Ok(Self {
            site_url,
            email_api_key: get("RESEND_API_KEY"),
            email_api_url: get("EMAIL_API_URL").unwrap_or(defaults.email_api_url),
            contact_from: get("CONTACT_FROM_EMAIL").unwrap_or(defaults.contact_from),
            contact_to: get("CONTACT_TO_EMAIL"),
            contact_rate_limit,
            preferences_path: get("FOLIO_PREFERENCES_PATH").map(PathBuf::from),
            color_scheme,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(load(&[]).unwrap(), SiteConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = load(&[
            ("SITE_URL", "https://alexmorgan.dev/"),
            ("RESEND_API_KEY", "re_123"),
            ("CONTACT_FROM_EMAIL", "Site <site@alexmorgan.dev>"),
            ("CONTACT_TO_EMAIL", "me@alexmorgan.dev"),
            ("FOLIO_CONTACT_RATE_LIMIT", "0"),
            ("FOLIO_PREFERENCES_PATH", "/tmp/prefs.json"),
            ("FOLIO_COLOR_SCHEME", "dark"),
        ])
        .unwrap();

        assert_eq!(config.site_url, "https://alexmorgan.dev");
        assert_eq!(config.email_api_key.as_deref(), Some("re_123"));
        assert_eq!(config.contact_from, "Site <site@alexmorgan.dev>");
        assert_eq!(config.contact_to.as_deref(), Some("me@alexmorgan.dev"));
        assert_eq!(config.contact_rate_limit, 0);
        assert_eq!(config.preferences_path, Some(PathBuf::from("/tmp/prefs.json")));
        assert_eq!(config.color_scheme, ColorScheme::Dark);
    }

    #[test]
    fn empty_values_are_unset() {
        let config = load(&[("RESEND_API_KEY", "  "), ("CONTACT_FROM_EMAIL", "")]).unwrap();
        assert!(config.email_api_key.is_none());
        assert_eq!(config.contact_from, DEFAULT_CONTACT_FROM);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            load(&[("FOLIO_CONTACT_RATE_LIMIT", "lots")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert_eq!(
            load(&[("SITE_URL", "alexmorgan.dev")]),
            Err(ConfigError::InvalidSiteUrl("alexmorgan.dev".to_string()))
        );
        assert!(matches!(
            load(&[("FOLIO_COLOR_SCHEME", "sepia")]),
            Err(ConfigError::InvalidColorScheme(_))
        ));
    }
}
