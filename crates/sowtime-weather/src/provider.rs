//! Open-Meteo forecast client.
//!
//! One GET per request for today's precipitation sum and max temperature
//! at a fixed point. Best-effort: no retries, no auth, no pagination.

use std::time::Duration;

use serde::Deserialize;
use tracing::instrument;

use crate::error::WeatherError;
use crate::types::{Coordinates, WeatherReport, WeatherSnapshot};

/// Public Open-Meteo endpoint. No API key required.
pub const OPEN_METEO_URL: &str = "https://api.open-meteo.com";

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: Option<DailyAggregates>,
}

/// Daily arrays carry one entry per forecast day; entries may be null.
#[derive(Debug, Deserialize)]
struct DailyAggregates {
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
}

fn first_value(values: &[Option<f64>]) -> Option<f64> {
    values.first().copied().flatten()
}

impl WeatherProvider {
    /// Create a provider against the given API base URL
    /// (normally [`OPEN_METEO_URL`], injectable for tests and config).
    pub fn new(base_url: impl Into<String>) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch today's aggregates for the given point.
    ///
    /// Units are requested explicitly (inches, Fahrenheit) so values match
    /// how they are labelled downstream. Consumes the first element of
    /// each daily array.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_today(
        &self,
        coordinates: Coordinates,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}\
             &daily=precipitation_sum,temperature_2m_max\
             &temperature_unit=fahrenheit&precipitation_unit=inch&timezone=auto",
            self.base_url, coordinates.latitude, coordinates.longitude,
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        let daily = body.daily.ok_or(WeatherError::MissingDaily("daily"))?;

        let precipitation_inches = first_value(&daily.precipitation_sum)
            .ok_or(WeatherError::MissingDaily("precipitation_sum"))?;
        let max_temperature_f = first_value(&daily.temperature_2m_max)
            .ok_or(WeatherError::MissingDaily("temperature_2m_max"))?;

        Ok(WeatherSnapshot {
            precipitation_inches,
            max_temperature_f,
        })
    }

    /// Fail-soft wrapper around [`fetch_today`](Self::fetch_today).
    ///
    /// Any failure becomes the zero snapshot plus an unavailability
    /// message; reminder computation is never blocked by weather faults.
    pub async fn fetch_today_or_fallback(&self, coordinates: Coordinates) -> WeatherReport {
        match self.fetch_today(coordinates).await {
            Ok(snapshot) => WeatherReport::live(snapshot),
            Err(e) => {
                tracing::warn!("Weather fetch failed: {}", e);
                WeatherReport::fallback(e.user_message().to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ORLANDO: Coordinates = Coordinates::new(28.5383, -81.3792);

    async fn mock_forecast(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn fetch_today_reads_first_daily_values() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "28.5383"))
            .and(query_param("longitude", "-81.3792"))
            .and(query_param("daily", "precipitation_sum,temperature_2m_max"))
            .and(query_param("temperature_unit", "fahrenheit"))
            .and(query_param("precipitation_unit", "inch"))
            .and(query_param("timezone", "auto"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "daily": {
                    "precipitation_sum": [0.35, 1.2],
                    "temperature_2m_max": [88.2, 90.1]
                }
            })))
            .mount(&server)
            .await;

        let provider = WeatherProvider::new(server.uri()).unwrap();
        let snapshot = provider.fetch_today(ORLANDO).await.unwrap();

        assert_eq!(snapshot.precipitation_inches, 0.35);
        assert_eq!(snapshot.max_temperature_f, 88.2);
    }

    #[tokio::test]
    async fn missing_daily_block_is_an_error() {
        let server = MockServer::start().await;
        mock_forecast(&server, serde_json::json!({ "latitude": 28.5383 })).await;

        let provider = WeatherProvider::new(server.uri()).unwrap();
        let result = provider.fetch_today(ORLANDO).await;

        assert!(matches!(result, Err(WeatherError::MissingDaily("daily"))));
    }

    #[tokio::test]
    async fn null_first_value_is_an_error() {
        let server = MockServer::start().await;
        mock_forecast(
            &server,
            serde_json::json!({
                "daily": {
                    "precipitation_sum": [null],
                    "temperature_2m_max": [88.2]
                }
            }),
        )
        .await;

        let provider = WeatherProvider::new(server.uri()).unwrap();
        let result = provider.fetch_today(ORLANDO).await;

        assert!(matches!(
            result,
            Err(WeatherError::MissingDaily("precipitation_sum"))
        ));
    }

    #[tokio::test]
    async fn empty_daily_arrays_are_an_error() {
        let server = MockServer::start().await;
        mock_forecast(
            &server,
            serde_json::json!({
                "daily": { "precipitation_sum": [], "temperature_2m_max": [] }
            }),
        )
        .await;

        let provider = WeatherProvider::new(server.uri()).unwrap();
        let result = provider.fetch_today(ORLANDO).await;

        assert!(matches!(result, Err(WeatherError::MissingDaily(_))));
    }

    #[tokio::test]
    async fn server_error_is_an_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let provider = WeatherProvider::new(server.uri()).unwrap();
        let result = provider.fetch_today(ORLANDO).await;

        assert!(matches!(
            result,
            Err(WeatherError::Api { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn malformed_payload_is_a_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let provider = WeatherProvider::new(server.uri()).unwrap();
        let result = provider.fetch_today(ORLANDO).await;

        assert!(matches!(result, Err(WeatherError::Parse(_))));
    }

    #[tokio::test]
    async fn fallback_report_on_unreachable_server() {
        // Nothing listens here; the request fails at connect time.
        let provider = WeatherProvider::new("http://127.0.0.1:9".to_string()).unwrap();
        let report = provider.fetch_today_or_fallback(ORLANDO).await;

        assert!(!report.is_live());
        assert_eq!(report.snapshot, WeatherSnapshot::fallback());
        let reason = report.unavailable.unwrap_or_default();
        assert!(reason.contains("without adjustments"));
    }

    #[tokio::test]
    async fn fallback_report_on_missing_fields() {
        let server = MockServer::start().await;
        mock_forecast(&server, serde_json::json!({ "daily": {} })).await;

        let provider = WeatherProvider::new(server.uri()).unwrap();
        let report = provider.fetch_today_or_fallback(ORLANDO).await;

        assert!(!report.is_live());
        assert_eq!(report.snapshot, WeatherSnapshot::fallback());
    }
}
