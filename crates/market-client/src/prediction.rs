use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use replay_core::TimeSeries;

use crate::error::{FetchError, FetchResult};
use crate::SeriesSource;

#[derive(Debug, Clone, Serialize)]
struct PredictionRequest<'a> {
    #[serde(rename = "stockSymbol")]
    stock_symbol: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictionResponse {
    #[serde(default)]
    dates: Vec<String>,
    #[serde(default)]
    prices: Vec<f64>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct PredictionClient {
    client: reqwest::Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    /// Fetch the predicted price series for `symbol`.
    pub async fn predict(&self, symbol: &str) -> FetchResult<TimeSeries> {
        let response = self
            .client
            .post(format!("{}/api/predict", self.base_url))
            .json(&PredictionRequest {
                stock_symbol: symbol,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.json::<PredictionResponse>().await?;
        series_from_response(body)
    }
}

/// A mismatched or error-bearing body never becomes a loaded series.
fn series_from_response(body: PredictionResponse) -> FetchResult<TimeSeries> {
    if let Some(error) = body.error {
        return Err(FetchError::Upstream(error));
    }
    Ok(TimeSeries::from_parts(body.dates, body.prices)?)
}

#[async_trait]
impl SeriesSource for PredictionClient {
    async fn fetch_series(&self, symbol: &str) -> FetchResult<TimeSeries> {
        self.predict(symbol).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_wire_field_name() {
        let json = serde_json::to_string(&PredictionRequest {
            stock_symbol: "AAPL",
        })
        .unwrap();
        assert_eq!(json, r#"{"stockSymbol":"AAPL"}"#);
    }

    #[test]
    fn test_successful_body_becomes_series() {
        let body: PredictionResponse =
            serde_json::from_str(r#"{"dates":["d1","d2"],"prices":[1.0,2.0]}"#).unwrap();
        let series = series_from_response(body).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.prices(), &[1.0, 2.0]);
    }

    #[test]
    fn test_error_body_is_a_fetch_failure() {
        let body: PredictionResponse = serde_json::from_str(r#"{"error":"no model"}"#).unwrap();
        let err = series_from_response(body).unwrap_err();
        assert!(matches!(err, FetchError::Upstream(msg) if msg == "no model"));
    }

    #[test]
    fn test_shape_mismatch_is_a_fetch_failure() {
        let body: PredictionResponse =
            serde_json::from_str(r#"{"dates":["d1","d2"],"prices":[1.0]}"#).unwrap();
        assert!(matches!(
            series_from_response(body),
            Err(FetchError::MalformedSeries(_))
        ));
    }
}
