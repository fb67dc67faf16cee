pub mod errors;
pub mod models;

use std::time::Duration;
use reqwest::Client;
use crate::manager_owm::errors::OWMError;
use crate::manager_owm::models::{CurrentConditions, FullCurrent, FullForecast, WeatherSample};

const OWM_DOMAIN: &str = "https://api.openweathermap.org";

/// Struct for managing weather data fetched from OpenWeatherMap
#[derive(Clone)]
pub struct OWM {
    client: Client,
    api_key: String,
}

impl OWM {
    /// Returns an OWM struct ready for fetching current weather and forecasts
    ///
    /// Every request issued through the returned struct is bounded by an
    /// 8 second timeout. No retry and no caching, every call hits the network.
    ///
    /// # Arguments
    ///
    /// * 'api_key' - the OpenWeatherMap API key
    pub fn new(api_key: &str) -> Result<OWM, OWMError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(8))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
        })
    }

    /// Retrieves the current weather for the given city.
    ///
    /// A non-success status from the provider is reported as NotFound, which
    /// covers both unknown cities and provider-side errors.
    ///
    /// # Arguments
    ///
    /// * 'city' - city name as given by the user
    pub async fn current(&self, city: &str) -> Result<CurrentConditions, OWMError> {
        let url = format!("{}/data/2.5/weather", OWM_DOMAIN);

        let req = self.client
            .get(url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(OWMError::NotFound(format!("no weather data for '{}': {}", city, status)));
        }

        let json = req.text().await?;
        let current: FullCurrent = serde_json::from_str(&json)?;

        let description = current.weather
            .first()
            .map(|w| w.description.clone())
            .unwrap_or_default();

        Ok(CurrentConditions {
            temperature: current.main.temp,
            temp_min: current.main.temp_min,
            temp_max: current.main.temp_max,
            description,
        })
    }

    /// Retrieves the 5 day / 3 hour forecast for the given city as a flat
    /// sequence of timestamped temperature samples, in provider order.
    ///
    /// # Arguments
    ///
    /// * 'city' - city name as given by the user
    pub async fn forecast(&self, city: &str) -> Result<Vec<WeatherSample>, OWMError> {
        let url = format!("{}/data/2.5/forecast", OWM_DOMAIN);

        let req = self.client
            .get(url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(OWMError::NotFound(format!("no forecast data for '{}': {}", city, status)));
        }

        let json = req.text().await?;
        let forecast: FullForecast = serde_json::from_str(&json)?;

        let samples = forecast.list
            .into_iter()
            .map(|e| WeatherSample { dt_txt: e.dt_txt, temp: e.main.temp })
            .collect();

        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_current_response() {
        let json = r#"{
            "main": {"temp": 17.3, "temp_min": 15.1, "temp_max": 19.2, "humidity": 60},
            "weather": [{"description": "light rain"}]
        }"#;

        let current: FullCurrent = serde_json::from_str(json).unwrap();
        assert_eq!(current.main.temp, 17.3);
        assert_eq!(current.main.temp_min, 15.1);
        assert_eq!(current.main.temp_max, 19.2);
        assert_eq!(current.weather[0].description, "light rain");
    }

    #[test]
    fn parses_current_response_without_weather_array() {
        let json = r#"{"main": {"temp": 5.0, "temp_min": 3.0, "temp_max": 6.0}}"#;

        let current: FullCurrent = serde_json::from_str(json).unwrap();
        assert!(current.weather.is_empty());
    }

    #[test]
    fn parses_forecast_response() {
        let json = r#"{
            "list": [
                {"dt_txt": "2026-08-23 12:00:00", "main": {"temp": 21.0}},
                {"dt_txt": "2026-08-23 15:00:00", "main": {"temp": 23.5}}
            ]
        }"#;

        let forecast: FullForecast = serde_json::from_str(json).unwrap();
        assert_eq!(forecast.list.len(), 2);
        assert_eq!(forecast.list[0].dt_txt, "2026-08-23 12:00:00");
        assert_eq!(forecast.list[1].main.temp, 23.5);
    }
}
