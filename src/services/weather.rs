//! Weather adapter (OpenWeatherMap current conditions)

use super::network_failure;
use crate::config::{non_empty, WeatherConfig};
use crate::error::{ServiceError, ServiceResult};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

const ACTION: &str = "get weather data";

/// Unit the provider reports temperatures in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Map an OpenWeatherMap `units` value; unknown systems report Kelvin
    pub fn from_units(units: &str) -> Self {
        match units {
            "metric" => TemperatureUnit::Celsius,
            "imperial" => TemperatureUnit::Fahrenheit,
            _ => TemperatureUnit::Kelvin,
        }
    }
}

/// Current conditions for the configured city
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub temperature: f64,
    pub unit: TemperatureUnit,
    /// hPa
    pub pressure: f64,
    /// percent
    pub humidity: f64,
    pub description: String,
}

#[async_trait]
pub trait WeatherService: Send + Sync {
    async fn fetch(&self) -> ServiceResult<WeatherReport>;
}

#[derive(Debug, Deserialize)]
struct OwmResponse {
    main: OwmMain,
    weather: Vec<OwmCondition>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    pressure: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    description: String,
}

/// HTTP client for the OpenWeatherMap current-weather endpoint
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    api_key: Option<String>,
    city: String,
    units: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(http: reqwest::Client, config: &WeatherConfig) -> Self {
        Self {
            http,
            api_key: non_empty(&config.api_key).map(str::to_string),
            city: config.city.clone(),
            units: config.units.clone(),
            base_url: config.base_url.clone(),
        }
    }
}

#[async_trait]
impl WeatherService for OpenWeatherClient {
    async fn fetch(&self) -> ServiceResult<WeatherReport> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ServiceError::ConfigMissing { service: "Weather" })?;

        info!("🌦️ Fetching weather for {}", self.city);
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", self.city.as_str()),
                ("appid", api_key),
                ("units", self.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| network_failure(ACTION, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| network_failure(ACTION, e))?;

        parse_weather_response(status, &body, TemperatureUnit::from_units(&self.units))
    }
}

/// Interpret a provider response. Non-2xx statuses win over the body.
pub fn parse_weather_response(
    status: u16,
    body: &str,
    unit: TemperatureUnit,
) -> ServiceResult<WeatherReport> {
    if !(200..300).contains(&status) {
        debug!("Weather provider returned {}: {}", status, body);
        return Err(ServiceError::ServiceUnavailable {
            status,
            action: ACTION,
        });
    }

    let parsed: OwmResponse = serde_json::from_str(body).map_err(|e| {
        debug!("Malformed weather body: {}", e);
        ServiceError::Malformed {
            status,
            action: ACTION,
        }
    })?;

    let description = parsed
        .weather
        .into_iter()
        .next()
        .map(|c| c.description)
        .ok_or(ServiceError::Malformed {
            status,
            action: ACTION,
        })?;

    Ok(WeatherReport {
        temperature: parsed.main.temp,
        unit,
        pressure: parsed.main.pressure,
        humidity: parsed.main.humidity,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds"}],
        "main": {"temp": 28.5, "feels_like": 31.2, "pressure": 1009, "humidity": 79},
        "name": "Colombo"
    }"#;

    #[test]
    fn test_parse_success() {
        let report = parse_weather_response(200, BODY, TemperatureUnit::Celsius).unwrap();
        assert_eq!(report.temperature, 28.5);
        assert_eq!(report.pressure, 1009.0);
        assert_eq!(report.humidity, 79.0);
        assert_eq!(report.description, "broken clouds");
    }

    #[test]
    fn test_parse_non_200_carries_status() {
        let err = parse_weather_response(401, r#"{"cod":401}"#, TemperatureUnit::Celsius)
            .unwrap_err();
        assert_eq!(
            err,
            ServiceError::ServiceUnavailable {
                status: 401,
                action: ACTION
            }
        );
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = parse_weather_response(200, "<html>oops</html>", TemperatureUnit::Celsius)
            .unwrap_err();
        assert!(matches!(err, ServiceError::Malformed { status: 200, .. }));
        assert!(err.to_string().starts_with("Error 200: Unable to get weather data"));

        let no_conditions = r#"{"main": {"temp": 1, "pressure": 2, "humidity": 3}, "weather": []}"#;
        let err =
            parse_weather_response(200, no_conditions, TemperatureUnit::Celsius).unwrap_err();
        assert!(matches!(err, ServiceError::Malformed { status: 200, .. }));
    }

    #[test]
    fn test_units_mapping() {
        assert_eq!(TemperatureUnit::from_units("metric"), TemperatureUnit::Celsius);
        assert_eq!(TemperatureUnit::from_units("imperial"), TemperatureUnit::Fahrenheit);
        assert_eq!(TemperatureUnit::from_units("standard"), TemperatureUnit::Kelvin);
    }

    #[tokio::test]
    async fn test_missing_key_is_config_failure() {
        let client = OpenWeatherClient::new(reqwest::Client::new(), &WeatherConfig::default());
        let err = client.fetch().await.unwrap_err();
        assert_eq!(err, ServiceError::ConfigMissing { service: "Weather" });
        assert_eq!(err.to_string(), "Weather API key not found in configuration.");
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_network_failure() {
        let config = WeatherConfig {
            api_key: Some("key".into()),
            base_url: "http://127.0.0.1:1/".into(),
            ..WeatherConfig::default()
        };
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(2))
            .build()
            .unwrap();

        let err = OpenWeatherClient::new(http, &config).fetch().await.unwrap_err();
        assert_eq!(err, ServiceError::Network { action: ACTION });

        let text = err.to_string();
        assert!(text.ends_with('.'));
        assert_eq!(text.matches(". ").count(), 0);
    }
}
