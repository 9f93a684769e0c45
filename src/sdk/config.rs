use crate::sdk::geocoding::cache::DEFAULT_TTL;
use crate::sdk::geocoding::provider::nominatim;
use crate::sdk::geocoding::resolver::{DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT};
use crate::sdk::itinerary::gemini;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub user_agent: String,
    pub max_retries: u32,
    pub timeout: Duration,
    pub cache_ttl: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Itinerary generation is skipped when no key is configured.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub geocoder: GeocoderConfig,
}

impl PlannerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let geocoder = GeocoderConfig {
            base_url: non_empty("GEOCODER_BASE_URL")
                .unwrap_or_else(|| nominatim::DEFAULT_BASE_URL.to_string()),
            user_agent: non_empty("GEOCODER_USER_AGENT")
                .unwrap_or_else(|| nominatim::DEFAULT_USER_AGENT.to_string()),
            max_retries: number::<u32, _>(&non_empty, "GEOCODE_RETRIES")?.unwrap_or(DEFAULT_MAX_RETRIES),
            timeout: number::<u64, _>(&non_empty, "GEOCODE_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
            cache_ttl: number::<u64, _>(&non_empty, "GEOCODE_CACHE_TTL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TTL),
        };

        Ok(Self {
            gemini_api_key: non_empty("GEMINI_API_KEY"),
            gemini_model: non_empty("GEMINI_MODEL")
                .unwrap_or_else(|| gemini::DEFAULT_MODEL.to_string()),
            geocoder,
        })
    }
}

fn number<T, F>(lookup: F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidNumber { key, value })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<PlannerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PlannerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.gemini_api_key, None);
        assert_eq!(cfg.gemini_model, "gemini-pro-latest");
        assert_eq!(cfg.geocoder.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(cfg.geocoder.max_retries, 3);
        assert_eq!(cfg.geocoder.timeout, Duration::from_secs(10));
        assert_eq!(cfg.geocoder.cache_ttl, Duration::from_secs(3600));
    }

    #[test]
    fn overrides_from_environment() {
        let cfg = config(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEOCODE_RETRIES", "5"),
            ("GEOCODE_TIMEOUT_SECS", " 2 "),
            ("GEOCODER_BASE_URL", "http://localhost:8080"),
        ])
        .unwrap();
        assert_eq!(cfg.gemini_api_key.as_deref(), Some("secret"));
        assert_eq!(cfg.geocoder.max_retries, 5);
        assert_eq!(cfg.geocoder.timeout, Duration::from_secs(2));
        assert_eq!(cfg.geocoder.base_url, "http://localhost:8080");
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let cfg = config(&[("GEMINI_API_KEY", "   ")]).unwrap();
        assert_eq!(cfg.gemini_api_key, None);
    }

    #[test]
    fn bad_numbers_are_reported() {
        assert_eq!(
            config(&[("GEOCODE_RETRIES", "three")]),
            Err(ConfigError::InvalidNumber {
                key: "GEOCODE_RETRIES",
                value: "three".into()
            })
        );
    }
}
