use crate::i18n::Language;
use crate::inquiry::{DEFAULT_DESTINATION, DEFAULT_MIN_FILL_TIME_MS};
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Hand-off
    pub inquiry_destination: String,

    // Anti-automation
    pub min_fill_time_ms: u64,

    // Language the binaries start in
    pub site_language: Language,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let site_language = match std::env::var("SITE_LANGUAGE") {
            Ok(code) => Language::from_code(code.trim())
                .with_context(|| format!("SITE_LANGUAGE '{}' is not a site language", code))?,
            Err(_) => Language::canonical(),
        };

        let min_fill_time_ms = match std::env::var("MIN_FILL_TIME_MS") {
            Ok(value) => value
                .trim()
                .parse::<u64>()
                .with_context(|| format!("MIN_FILL_TIME_MS '{}' is not a non-negative integer", value))?,
            Err(_) => DEFAULT_MIN_FILL_TIME_MS,
        };

        Ok(Self {
            inquiry_destination: std::env::var("INQUIRY_DESTINATION")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DESTINATION.to_string()),
            min_fill_time_ms,
            site_language,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inquiry_destination: DEFAULT_DESTINATION.to_string(),
            min_fill_time_ms: DEFAULT_MIN_FILL_TIME_MS,
            site_language: Language::canonical(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("INQUIRY_DESTINATION");
        std::env::remove_var("MIN_FILL_TIME_MS");
        std::env::remove_var("SITE_LANGUAGE");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.inquiry_destination, "set_el_beit@yahoo.com");
        assert_eq!(config.min_fill_time_ms, 3000);
        assert_eq!(config.site_language, Language::ENGLISH);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("INQUIRY_DESTINATION", "events@example.com");
        std::env::set_var("MIN_FILL_TIME_MS", "5000");
        std::env::set_var("SITE_LANGUAGE", "ar");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.inquiry_destination, "events@example.com");
        assert_eq!(config.min_fill_time_ms, 5000);
        assert_eq!(config.site_language, Language::ARABIC);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_unknown_language() {
        clear_env();
        std::env::set_var("SITE_LANGUAGE", "fr");

        let result = Config::from_env();
        clear_env();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("SITE_LANGUAGE"));
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_negative_fill_time() {
        clear_env();
        std::env::set_var("MIN_FILL_TIME_MS", "-1");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_blank_destination_uses_default() {
        clear_env();
        std::env::set_var("INQUIRY_DESTINATION", "   ");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.inquiry_destination, DEFAULT_DESTINATION);
    }

    #[test]
    fn test_default_matches_env_defaults() {
        let config = Config::default();
        assert_eq!(config.min_fill_time_ms, DEFAULT_MIN_FILL_TIME_MS);
        assert_eq!(config.site_language, Language::ENGLISH);
    }
}
