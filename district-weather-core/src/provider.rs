use crate::{Config, WeatherObservation, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// Why a single weather lookup failed.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("request to weather provider failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("weather provider returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode weather response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no weather data found")]
    NoData,
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions at the given coordinates. Coordinates are passed
    /// through to the provider as-is.
    async fn current_weather(&self, lat: &str, lon: &str)
    -> Result<WeatherObservation, WeatherError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;

    Ok(Box::new(OpenWeatherProvider::new(
        api_key.to_owned(),
        config.base_url.clone(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No OpenWeather API key configured"));
    }

    #[test]
    fn provider_from_config_works_when_key_set() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert!(provider_from_config(&cfg).is_ok());
    }

    #[test]
    fn no_data_message() {
        assert_eq!(WeatherError::NoData.to_string(), "no weather data found");
    }
}
