//! OpenWeather One Call client.
//!
//! Collaborator-side fetcher: resolves the current UV index and cloud cover
//! for a coordinate and hands the engine a plain reading via
//! `update_reading`. The engine never requires a reading to be present --
//! on fetch failure the last-known reading simply stays in place.

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::error::WeatherError;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const ONE_CALL_PATH: &str = "/data/3.0/onecall";

/// A single weather reading in engine units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherReading {
    /// UV index, rounded to the nearest integer.
    pub uv_index: u32,
    /// Cloud cover as a ratio in [0, 1].
    pub cloud_cover: f64,
}

#[derive(Debug, Deserialize)]
struct OneCallResponse {
    current: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    uvi: f64,
    clouds: f64,
}

/// Thin client over the One Call 3.0 endpoint.
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    /// # Errors
    /// Fails if the API key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, WeatherError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(WeatherError::MissingApiKey);
        }
        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the API host (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the current UV index and cloud cover for a coordinate.
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<WeatherReading, WeatherError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| WeatherError::InvalidUrl(e.to_string()))?;
        url.set_path(ONE_CALL_PATH);
        url.query_pairs_mut()
            .append_pair("lat", &latitude.to_string())
            .append_pair("lon", &longitude.to_string())
            .append_pair("exclude", "minutely,hourly,daily,alerts")
            .append_pair("appid", &self.api_key);

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(WeatherError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body: OneCallResponse = resp
            .json()
            .await
            .map_err(|e| WeatherError::Decode(e.to_string()))?;

        Ok(WeatherReading {
            uv_index: body.current.uvi.round().max(0.0) as u32,
            cloud_cover: (body.current.clouds / 100.0).clamp(0.0, 1.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_rejected() {
        assert!(matches!(
            OpenWeatherClient::new("  "),
            Err(WeatherError::MissingApiKey)
        ));
    }

    #[tokio::test]
    async fn fetch_maps_uvi_and_clouds_to_engine_units() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", ONE_CALL_PATH)
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"current":{"uvi":6.7,"clouds":80}}"#)
            .create_async()
            .await;

        let client = OpenWeatherClient::new("test-key")
            .unwrap()
            .with_base_url(server.url());
        let reading = client.fetch(40.4168, -3.7038).await.unwrap();

        assert_eq!(reading.uv_index, 7);
        assert!((reading.cloud_cover - 0.8).abs() < 1e-9);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn http_error_is_surfaced_with_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", ONE_CALL_PATH)
            .match_query(mockito::Matcher::Any)
            .with_status(401)
            .with_body(r#"{"cod":401,"message":"Invalid API key"}"#)
            .create_async()
            .await;

        let client = OpenWeatherClient::new("bad-key")
            .unwrap()
            .with_base_url(server.url());
        match client.fetch(0.0, 0.0).await {
            Err(WeatherError::HttpStatus { status: 401 }) => {}
            other => panic!("expected HttpStatus 401, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", ONE_CALL_PATH)
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"unexpected":true}"#)
            .create_async()
            .await;

        let client = OpenWeatherClient::new("test-key")
            .unwrap()
            .with_base_url(server.url());
        assert!(matches!(
            client.fetch(0.0, 0.0).await,
            Err(WeatherError::Decode(_))
        ));
    }
}
